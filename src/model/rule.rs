use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Raise,
    Lower,
}

impl Direction {
    /// A student above target needs lowering, below target needs raising.
    pub fn from_diff(diff: f64) -> Self {
        if diff > 0.0 {
            Direction::Lower
        } else {
            Direction::Raise
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Lower => "Move Down",
            Direction::Raise => "Move Up",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRule {
    pub categories: String,
    pub category_names: Vec<String>,
    pub category_indices: Vec<usize>,
    #[serde(rename = "bandCount")]
    pub category_count: usize,
    pub direction: Direction,
    pub target_bands: Vec<Option<usize>>,
    pub band_labels: Vec<Option<String>>,
    pub per_category_shift: Vec<f64>,
    pub sum_shift: f64,
    pub matched_student_ids: Vec<String>,
    pub fix_count: usize,
    pub total_residual: f64,
    pub gap: f64,
    pub projected_scores: Vec<f64>,
    #[serde(skip)]
    pub active: bool,
}

impl CandidateRule {
    pub fn refresh_gap(&mut self) {
        self.gap = if self.fix_count == 0 {
            0.0
        } else {
            round2(self.total_residual / self.fix_count as f64)
        };
    }
}

/// Rounds to two decimal places, halves away from zero.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
