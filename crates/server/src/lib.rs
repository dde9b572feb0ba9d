//! Dashboard rendering service: load once, re-render per interaction.

pub mod orchestrator;

pub use orchestrator::{DashboardOrchestrator, DashboardSnapshot};
