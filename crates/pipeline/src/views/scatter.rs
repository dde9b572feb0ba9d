//! Scatter plot specification: chosen money column against rating.
//!
//! Built from the cleaned (non-expanded) table, never filtered. Points with
//! a missing x value are emitted with `x: null`; the chart layer's own
//! missing-value handling drops them.

use crate::controls::{XAxis, YAxis};
use data_loader::MovieTable;
use serde::{Deserialize, Serialize};

/// One scatter mark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// Selected money column; `None` when the source cell didn't parse
    pub x: Option<f64>,
    pub y: f32,
    /// Movie name, shown on hover
    pub label: String,
}

/// Specification of the scatter plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSpec {
    pub title: String,
    /// Cleaned-table column the x values come from
    pub x_column: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
}

impl ScatterSpec {
    /// Build the scatter spec over the full table, one point per movie
    pub fn build(table: &MovieTable, x_axis: XAxis, y_axis: YAxis) -> Self {
        let points = table
            .movies()
            .iter()
            .map(|movie| ScatterPoint {
                x: match x_axis {
                    XAxis::BoxOffice => movie.box_office,
                    XAxis::Budget => movie.budget,
                },
                y: movie.rating,
                label: movie.name.clone(),
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            "Built scatter spec ({} vs {}) with {} points",
            x_axis.column(),
            y_axis.column(),
            points.len()
        );

        Self {
            title: format!("Scatter Plot: {} vs {}", x_axis.label(), y_axis.label()),
            x_column: x_axis.column().to_string(),
            x_label: x_axis.label().to_string(),
            y_label: y_axis.label().to_string(),
            points,
        }
    }
}
