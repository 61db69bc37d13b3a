use serde::{Deserialize, Serialize};

/// Where a chart is drawn. A chart adapter keeps at most one live chart per
/// anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartAnchor {
    HoldingsAllocation,
    Performance,
    IndexComparison,
    PriceHistory,
}

/// One named series of values, parallel to `ChartData::labels`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<f64>,
}

/// Finished chart input: labels plus one or more parallel value series.
///
/// The core computes all the numbers; the adapter only draws.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    /// A chart with a single series.
    pub fn single(label: impl Into<String>, labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            labels,
            datasets: vec![Dataset {
                label: label.into(),
                values,
            }],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
