//! Derived hemodynamic metrics
//!
//! Pure arithmetic on raw values; no validation happens here.

use crate::entities::blood_pressure::Band;

/// Pulse pressure below this is considered low (mmHg)
pub const PULSE_PRESSURE_LOW_BELOW: i32 = 40;

/// Pulse pressure above this is considered high (mmHg)
pub const PULSE_PRESSURE_HIGH_ABOVE: i32 = 60;

/// Mean arterial pressure below this is considered low (mmHg)
pub const MAP_LOW_BELOW: i32 = 70;

/// Mean arterial pressure above this is considered high (mmHg)
pub const MAP_HIGH_ABOVE: i32 = 100;

/// Systolic minus diastolic, widened so any pair of values has a difference
pub fn pulse_pressure(systolic: i32, diastolic: i32) -> i64 {
    i64::from(systolic) - i64::from(diastolic)
}

/// `(systolic + 2 * diastolic) / 3`, rounded half away from zero on the exact quotient
pub fn mean_arterial_pressure(systolic: i32, diastolic: i32) -> i32 {
    let numerator = f64::from(systolic) + 2.0 * f64::from(diastolic);
    (numerator / 3.0).round() as i32
}

pub fn interpret_pulse_pressure(pulse_pressure: i64) -> Band {
    band(pulse_pressure, PULSE_PRESSURE_LOW_BELOW, PULSE_PRESSURE_HIGH_ABOVE)
}

pub fn interpret_mean_arterial_pressure(map: i32) -> Band {
    band(i64::from(map), MAP_LOW_BELOW, MAP_HIGH_ABOVE)
}

// Both limits belong to the normal band.
fn band(value: i64, low_below: i32, high_above: i32) -> Band {
    if value < i64::from(low_below) {
        Band::Low
    } else if value > i64::from(high_above) {
        Band::High
    } else {
        Band::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_pressure() {
        assert_eq!(pulse_pressure(180, 60), 120);
        assert_eq!(pulse_pressure(120, 80), 40);
        assert_eq!(pulse_pressure(70, 80), -10);
    }

    #[test]
    fn test_metrics_are_total_at_integer_limits() {
        assert_eq!(pulse_pressure(i32::MAX, -1), i64::from(i32::MAX) + 1);
        assert_eq!(pulse_pressure(i32::MIN, 1), i64::from(i32::MIN) - 1);
        assert_eq!(interpret_pulse_pressure(pulse_pressure(i32::MAX, i32::MIN)), Band::High);
        assert_eq!(interpret_pulse_pressure(pulse_pressure(i32::MIN, i32::MAX)), Band::Low);

        assert_eq!(mean_arterial_pressure(i32::MAX, i32::MAX), i32::MAX);
        assert_eq!(mean_arterial_pressure(i32::MIN, i32::MIN), i32::MIN);
        assert_eq!(mean_arterial_pressure(i32::MAX, -1), 715_827_882);
    }

    #[test]
    fn test_mean_arterial_pressure_rounding() {
        assert_eq!(mean_arterial_pressure(120, 80), 93);
        assert_eq!(mean_arterial_pressure(140, 90), 107);
        assert_eq!(mean_arterial_pressure(100, 60), 73);
        assert_eq!(mean_arterial_pressure(121, 80), 94);
        assert_eq!(mean_arterial_pressure(-10, -2), -5);
    }

    #[test]
    fn test_pulse_pressure_bands() {
        assert_eq!(interpret_pulse_pressure(39), Band::Low);
        assert_eq!(interpret_pulse_pressure(40), Band::Normal);
        assert_eq!(interpret_pulse_pressure(60), Band::Normal);
        assert_eq!(interpret_pulse_pressure(61), Band::High);
    }

    #[test]
    fn test_map_bands() {
        assert_eq!(interpret_mean_arterial_pressure(69), Band::Low);
        assert_eq!(interpret_mean_arterial_pressure(70), Band::Normal);
        assert_eq!(interpret_mean_arterial_pressure(100), Band::Normal);
        assert_eq!(interpret_mean_arterial_pressure(101), Band::High);
    }
}
