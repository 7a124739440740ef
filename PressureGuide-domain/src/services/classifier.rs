use crate::entities::blood_pressure::BloodPressureCategory;
use crate::entities::guideline::Guideline;
use crate::thresholds::thresholds;

/// Categorize blood pressure based on measurements and the selected guideline.
///
/// Checks run from most to least severe and the first match wins. Total over
/// every integer pair: implausible values still get a category.
pub fn categorize_blood_pressure(systolic: i32, diastolic: i32, guideline: Guideline) -> BloodPressureCategory {
    let table = thresholds(guideline);

    if table.crisis.matches(systolic, diastolic) {
        BloodPressureCategory::Crisis
    } else if table.stage_2.matches(systolic, diastolic) {
        BloodPressureCategory::Stage2
    } else if table.stage_1.matches(systolic, diastolic) {
        BloodPressureCategory::Stage1
    } else if table.elevated.matches(systolic, diastolic) {
        BloodPressureCategory::Elevated
    } else {
        BloodPressureCategory::Normal
    }
}

/// Check if a reading needs attention (stage 2 or crisis) under the guideline
pub fn is_high_alert(systolic: i32, diastolic: i32, guideline: Guideline) -> bool {
    categorize_blood_pressure(systolic, diastolic, guideline).is_high_alert()
}

#[cfg(test)]
mod tests {
    use super::*;
    use BloodPressureCategory::*;

    fn check(guideline: Guideline, cases: &[(i32, i32, BloodPressureCategory)]) {
        for &(systolic, diastolic, expected) in cases {
            assert_eq!(
                categorize_blood_pressure(systolic, diastolic, guideline),
                expected,
                "{}/{} under {}",
                systolic,
                diastolic,
                guideline
            );
        }
    }

    #[test]
    fn test_aha_boundaries() {
        check(
            Guideline::AhaAcc,
            &[
                (119, 79, Normal),
                (120, 79, Elevated),
                (129, 79, Elevated),
                (120, 80, Stage1),
                (130, 70, Stage1),
                (139, 89, Stage1),
                (140, 70, Stage2),
                (110, 90, Stage2),
                (179, 119, Stage2),
                (180, 119, Crisis),
                (150, 120, Crisis),
                (180, 120, Crisis),
            ],
        );
    }

    #[test]
    fn test_esc_boundaries() {
        check(
            Guideline::EscEsh,
            &[
                (129, 84, Normal),
                (130, 70, Elevated),
                (120, 85, Elevated),
                (139, 89, Elevated),
                (120, 80, Normal),
                (140, 70, Stage1),
                (120, 90, Stage1),
                (160, 70, Stage2),
                (120, 100, Stage2),
                (179, 109, Stage2),
                (180, 70, Crisis),
                (120, 110, Crisis),
            ],
        );
    }

    #[test]
    fn test_jsh_boundaries() {
        check(
            Guideline::Jsh,
            &[
                (129, 79, Normal),
                (120, 80, Elevated),
                (135, 70, Elevated),
                (140, 85, Stage1),
                (165, 95, Stage2),
                (185, 95, Crisis),
            ],
        );
    }

    #[test]
    fn test_who_boundaries() {
        check(
            Guideline::Who,
            &[
                (129, 84, Normal),
                (120, 80, Normal),
                (139, 84, Elevated),
                (125, 86, Elevated),
                (140, 84, Stage1),
                (159, 99, Stage1),
                (160, 99, Stage2),
                (180, 99, Crisis),
            ],
        );
    }

    #[test]
    fn test_implausible_values_still_classify() {
        assert_eq!(categorize_blood_pressure(-50, -50, Guideline::AhaAcc), Normal);
        assert_eq!(categorize_blood_pressure(400, 0, Guideline::Who), Crisis);
        assert_eq!(categorize_blood_pressure(70, 80, Guideline::AhaAcc), Stage1);
    }

    #[test]
    fn test_high_alert() {
        assert!(is_high_alert(145, 85, Guideline::AhaAcc));
        assert!(!is_high_alert(145, 85, Guideline::EscEsh));
        assert!(is_high_alert(200, 110, Guideline::Jsh));
    }
}
