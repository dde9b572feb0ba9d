//! Sidebar control state, as an explicit value.
//!
//! The original dashboard kept widget selections as ambient script state;
//! here they are a plain [`Controls`] struct handed to the view builders.
//! Every field has the same default the sidebar starts with.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use data_loader::Year;

/// Lower edge of the year slider. A static configuration choice, not derived
/// from the loaded data.
pub const YEAR_DOMAIN_MIN: Year = 1921;

/// Upper edge of the year slider
pub const YEAR_DOMAIN_MAX: Year = 2022;

// =============================================================================
// Axis Selection
// =============================================================================

/// Selectable X axis for the scatter plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XAxis {
    BoxOffice,
    Budget,
}

impl XAxis {
    /// Column name in the cleaned table
    pub fn column(&self) -> &'static str {
        match self {
            XAxis::BoxOffice => "box_office",
            XAxis::Budget => "budget",
        }
    }

    /// Display label (title-cased column name, underscores kept)
    pub fn label(&self) -> &'static str {
        match self {
            XAxis::BoxOffice => "Box_Office",
            XAxis::Budget => "Budget",
        }
    }
}

impl Default for XAxis {
    fn default() -> Self {
        XAxis::BoxOffice
    }
}

impl FromStr for XAxis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "box_office" => Ok(XAxis::BoxOffice),
            "budget" => Ok(XAxis::Budget),
            other => Err(format!(
                "unknown x-axis '{}' (expected 'box_office' or 'budget')",
                other
            )),
        }
    }
}

impl fmt::Display for XAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Selectable Y axis for the scatter plot.
///
/// The sidebar offers a single choice; the enum keeps the control surface
/// symmetric with [`XAxis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YAxis {
    Rating,
}

impl YAxis {
    pub fn column(&self) -> &'static str {
        "rating"
    }

    pub fn label(&self) -> &'static str {
        "Rating"
    }
}

impl Default for YAxis {
    fn default() -> Self {
        YAxis::Rating
    }
}

// =============================================================================
// Runtime Buckets
// =============================================================================

/// Fixed half-open minute ranges used to filter movies by duration.
///
/// The topmost bucket has no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuntimeBucket {
    UpTo90,
    From90To120,
    From120To150,
    From150To180,
    Over180,
}

impl RuntimeBucket {
    /// All buckets, in sidebar order
    pub const ALL: [RuntimeBucket; 5] = [
        RuntimeBucket::UpTo90,
        RuntimeBucket::From90To120,
        RuntimeBucket::From120To150,
        RuntimeBucket::From150To180,
        RuntimeBucket::Over180,
    ];

    /// Sidebar label for this bucket
    pub fn label(&self) -> &'static str {
        match self {
            RuntimeBucket::UpTo90 => "Up to 1.5 hours",
            RuntimeBucket::From90To120 => "1.5 to 2 hours",
            RuntimeBucket::From120To150 => "2 to 2.5 hours",
            RuntimeBucket::From150To180 => "2.5 to 3 hours",
            RuntimeBucket::Over180 => "More than 3 hours",
        }
    }

    /// Inclusive lower and exclusive upper bound in minutes; `None` means
    /// unbounded above
    pub fn bounds(&self) -> (u32, Option<u32>) {
        match self {
            RuntimeBucket::UpTo90 => (0, Some(90)),
            RuntimeBucket::From90To120 => (90, Some(120)),
            RuntimeBucket::From120To150 => (120, Some(150)),
            RuntimeBucket::From150To180 => (150, Some(180)),
            RuntimeBucket::Over180 => (180, None),
        }
    }

    /// True when `minutes` falls within this bucket's [low, high) range
    pub fn contains(&self, minutes: u32) -> bool {
        let (low, high) = self.bounds();
        minutes >= low && high.is_none_or(|h| minutes < h)
    }
}

impl Default for RuntimeBucket {
    fn default() -> Self {
        // First sidebar option
        RuntimeBucket::UpTo90
    }
}

impl FromStr for RuntimeBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuntimeBucket::ALL
            .iter()
            .find(|bucket| bucket.label() == s)
            .copied()
            .ok_or_else(|| format!("unknown runtime bucket '{}'", s))
    }
}

impl fmt::Display for RuntimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Controls
// =============================================================================

/// One snapshot of the sidebar: everything a pipeline run is parameterized by
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Controls {
    pub x_axis: XAxis,
    pub y_axis: YAxis,
    /// Inclusive [min, max] year range
    pub year_range: (Year, Year),
    pub runtime_bucket: RuntimeBucket,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            x_axis: XAxis::default(),
            y_axis: YAxis::default(),
            year_range: (YEAR_DOMAIN_MIN, YEAR_DOMAIN_MAX),
            runtime_bucket: RuntimeBucket::default(),
        }
    }
}
