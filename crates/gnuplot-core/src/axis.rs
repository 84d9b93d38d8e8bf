// File: crates/gnuplot-core/src/axis.rs
// Summary: Axis range descriptors and log-scale selection.

use crate::encoding::format_number;

/// A per-axis display range with independently-optional bounds.
///
/// Each bound is either fixed or left for gnuplot to compute from the data,
/// so "min fixed, max automatic" is representable. The descriptor is stored
/// structurally and serialized on demand: `[]` when both bounds are
/// automatic, otherwise `[low:high]` with `*` standing in for an automatic
/// bound.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl AxisRange {
    /// Both bounds computed by gnuplot.
    pub const AUTO: Self = Self { min: None, max: None };

    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Fix both bounds.
    pub fn bounded(min: f64, max: f64) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    /// Serialize as a range clause for `plot`/`splot`.
    pub fn to_clause(&self) -> String {
        match (self.min, self.max) {
            (None, None) => "[]".to_string(),
            (min, max) => format!("[{}:{}]", bound(min), bound(max)),
        }
    }
}

fn bound(value: Option<f64>) -> String {
    match value {
        Some(v) => format_number(v),
        None => "*".to_string(),
    }
}

/// Axis scale selection; `Linear` undoes any previous log scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisScale {
    Linear,
    LogX,
    LogY,
    LogXY,
}

impl AxisScale {
    pub(crate) fn command(self) -> &'static str {
        match self {
            Self::LogX => "set logscale x",
            Self::LogY => "set logscale y",
            Self::LogXY => "set logscale xy",
            Self::Linear => "unset logscale",
        }
    }
}
