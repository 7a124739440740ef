//! Small numeric helpers shared by the aggregates.
//!
//! Rounding is always half away from zero and applied to the final value only.

/// Arithmetic mean, `None` for an empty input
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = i32>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0i64, 0usize), |(sum, count), value| (sum + i64::from(value), count + 1));

    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}

/// Mean rounded to the nearest integer
pub fn rounded_mean<I>(values: I) -> Option<i32>
where
    I: IntoIterator<Item = i32>,
{
    mean(values).map(|value| value.round() as i32)
}

/// Share of `count` in `total` as a rounded whole percentage; 0 when `total` is 0
pub fn percent(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 * 100.0 / total as f64).round() as u32
}
