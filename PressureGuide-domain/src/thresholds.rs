//! Guideline threshold table
//!
//! Boundary values (mmHg) for the five categories of each supported
//! guideline. Rules are evaluated in the order crisis, stage 2, stage 1,
//! elevated, normal and the first match wins, so the upper ends of the
//! lower bands are only reached when the higher rules did not match.
//!
//! References:
//! - Whelton P.K. et al. (2017). ACC/AHA Guideline for the Prevention, Detection,
//!   Evaluation, and Management of High Blood Pressure in Adults
//! - Williams B. et al. (2018). ESC/ESH Guidelines for the management of arterial hypertension
//! - Umemura S. et al. (2019). The Japanese Society of Hypertension Guidelines
//! - WHO (2021). Guideline for the pharmacological treatment of hypertension in adults

use serde::Serialize;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::entities::guideline::Guideline;

/// Threshold rule that matches when either value reaches its minimum
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct AtLeastRule {
    /// Systolic value at or above which the rule matches
    pub systolic_at_least: i32,

    /// Diastolic value at or above which the rule matches
    pub diastolic_at_least: i32,
}

impl AtLeastRule {
    pub fn matches(&self, systolic: i32, diastolic: i32) -> bool {
        systolic >= self.systolic_at_least || diastolic >= self.diastolic_at_least
    }
}

/// Shape of the band just above normal.
///
/// The two shapes are kept apart on purpose: AHA/ACC requires both values,
/// the European and Asian tables accept either one.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ElevatedRule {
    /// Systolic in `[systolic_from, systolic_below)` AND diastolic below `diastolic_below`
    SystolicWithLowDiastolic {
        systolic_from: i32,
        systolic_below: i32,
        diastolic_below: i32,
    },

    /// Systolic in `[systolic_from, systolic_below)` OR diastolic in `[diastolic_from, diastolic_below)`.
    ///
    /// `systolic_below` is only set by tables that state the systolic upper bound explicitly.
    HighNormalRange {
        systolic_from: i32,
        systolic_below: Option<i32>,
        diastolic_from: i32,
        diastolic_below: i32,
    },
}

impl ElevatedRule {
    pub fn matches(&self, systolic: i32, diastolic: i32) -> bool {
        match *self {
            ElevatedRule::SystolicWithLowDiastolic {
                systolic_from,
                systolic_below,
                diastolic_below,
            } => systolic >= systolic_from && systolic < systolic_below && diastolic < diastolic_below,
            ElevatedRule::HighNormalRange {
                systolic_from,
                systolic_below,
                diastolic_from,
                diastolic_below,
            } => {
                let systolic_in_range =
                    systolic >= systolic_from && systolic_below.map_or(true, |below| systolic < below);
                let diastolic_in_range = diastolic >= diastolic_from && diastolic < diastolic_below;
                systolic_in_range || diastolic_in_range
            }
        }
    }
}

/// Normal band: both values below their limits
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BelowRule {
    pub systolic_below: i32,
    pub diastolic_below: i32,
}

impl BelowRule {
    pub fn matches(&self, systolic: i32, diastolic: i32) -> bool {
        systolic < self.systolic_below && diastolic < self.diastolic_below
    }
}

/// Five ordered category rules of one guideline
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct GuidelineThresholds {
    pub guideline: Guideline,
    pub crisis: AtLeastRule,
    pub stage_2: AtLeastRule,
    pub stage_1: AtLeastRule,
    pub elevated: ElevatedRule,
    pub normal: BelowRule,
}

static AHA_ACC: GuidelineThresholds = GuidelineThresholds {
    guideline: Guideline::AhaAcc,
    crisis: AtLeastRule { systolic_at_least: 180, diastolic_at_least: 120 },
    stage_2: AtLeastRule { systolic_at_least: 140, diastolic_at_least: 90 },
    stage_1: AtLeastRule { systolic_at_least: 130, diastolic_at_least: 80 },
    elevated: ElevatedRule::SystolicWithLowDiastolic {
        systolic_from: 120,
        systolic_below: 130,
        diastolic_below: 80,
    },
    normal: BelowRule { systolic_below: 120, diastolic_below: 80 },
};

static ESC_ESH: GuidelineThresholds = GuidelineThresholds {
    guideline: Guideline::EscEsh,
    crisis: AtLeastRule { systolic_at_least: 180, diastolic_at_least: 110 },
    stage_2: AtLeastRule { systolic_at_least: 160, diastolic_at_least: 100 },
    stage_1: AtLeastRule { systolic_at_least: 140, diastolic_at_least: 90 },
    elevated: ElevatedRule::HighNormalRange {
        systolic_from: 130,
        systolic_below: None,
        diastolic_from: 85,
        diastolic_below: 90,
    },
    normal: BelowRule { systolic_below: 130, diastolic_below: 85 },
};

static JSH: GuidelineThresholds = GuidelineThresholds {
    guideline: Guideline::Jsh,
    crisis: AtLeastRule { systolic_at_least: 180, diastolic_at_least: 110 },
    stage_2: AtLeastRule { systolic_at_least: 160, diastolic_at_least: 100 },
    stage_1: AtLeastRule { systolic_at_least: 140, diastolic_at_least: 90 },
    elevated: ElevatedRule::HighNormalRange {
        systolic_from: 130,
        systolic_below: None,
        diastolic_from: 80,
        diastolic_below: 90,
    },
    normal: BelowRule { systolic_below: 130, diastolic_below: 80 },
};

static WHO: GuidelineThresholds = GuidelineThresholds {
    guideline: Guideline::Who,
    crisis: AtLeastRule { systolic_at_least: 180, diastolic_at_least: 110 },
    stage_2: AtLeastRule { systolic_at_least: 160, diastolic_at_least: 100 },
    stage_1: AtLeastRule { systolic_at_least: 140, diastolic_at_least: 90 },
    elevated: ElevatedRule::HighNormalRange {
        systolic_from: 130,
        systolic_below: Some(140),
        diastolic_from: 85,
        diastolic_below: 90,
    },
    normal: BelowRule { systolic_below: 130, diastolic_below: 85 },
};

/// Look up the rule set of a guideline
pub fn thresholds(guideline: Guideline) -> &'static GuidelineThresholds {
    match guideline {
        Guideline::AhaAcc => &AHA_ACC,
        Guideline::EscEsh => &ESC_ESH,
        Guideline::Jsh => &JSH,
        Guideline::Who => &WHO,
    }
}

/// Rule sets of every supported guideline, in table order
pub fn all_thresholds() -> Vec<&'static GuidelineThresholds> {
    Guideline::all().into_iter().map(thresholds).collect()
}
