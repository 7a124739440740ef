pub mod reading;

pub use reading::{CreateReadingRequest, ReadingSnapshot, StoredReading};
