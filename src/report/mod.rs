pub mod json;
pub mod rubric;
pub mod text;

use serde::Serialize;
use thiserror::Error;

use crate::model::rule::round2;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to serialize {what}: {source}")]
    Json {
        what: &'static str,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MarkStats {
    pub count: usize,
    pub average: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub iqr: f64,
    pub min: f64,
    pub max: f64,
}

pub const HISTOGRAM_LABELS: [&str; 10] = [
    "[0-10)", "[10-20)", "[20-30)", "[30-40)", "[40-50)", "[50-60)", "[60-70)", "[70-80)",
    "[80-90)", "[90-100]",
];

/// Linear-interpolation quantile over an ascending slice.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let pos = (sorted.len() - 1) as f64 * p.clamp(0.0, 1.0);
    let lo = pos.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn mark_stats(values: &[f64]) -> MarkStats {
    if values.is_empty() {
        return MarkStats::default();
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let q1 = quantile_sorted(&sorted, 0.25);
    let q3 = quantile_sorted(&sorted, 0.75);
    MarkStats {
        count: sorted.len(),
        average: round2(mean(&sorted)),
        q1,
        median: quantile_sorted(&sorted, 0.5),
        q3,
        iqr: q3 - q1,
        min: sorted[0],
        max: sorted[sorted.len() - 1],
    }
}

/// Ten-mark bins over 0..=100; 100 lands in the last bin.
pub fn histogram(values: &[f64]) -> [usize; 10] {
    let mut bins = [0usize; 10];
    for &v in values {
        let idx = (v / 10.0).floor().clamp(0.0, 9.0) as usize;
        bins[idx] += 1;
    }
    bins
}
