//! Structured diagnostics for a single pipeline run.
//!
//! The report is the side channel the spec of the bridge calls for: it
//! carries the frame geometry, the thresholds actually used, whether the run
//! degraded to a passthrough copy, and a per-stage timing trace. Everything
//! serializes to camelCase JSON for tooling.
use serde::{Deserialize, Serialize};

/// Timing entry describing a single stage of the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one frame.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// Summary of one edge-detection run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeDetectionReport {
    /// Frame width in pixels
    pub width: usize,
    /// Frame height in pixels
    pub height: usize,
    /// Low hysteresis threshold used for this run
    pub low_threshold: f32,
    /// High hysteresis threshold used for this run
    pub high_threshold: f32,
    /// Number of pixels marked as edges (value 255)
    pub edge_count: usize,
    /// True when the run fell back to an identity copy of the input
    pub degraded: bool,
    pub timing: TimingBreakdown,
}
