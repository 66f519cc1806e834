#[derive(Debug, Clone, PartialEq)]
pub struct AwardedBand {
    pub category_id: String,
    pub band_index: usize,
    pub band_label: String,
}

/// One scored submission. `bands` is indexed by rubric category position;
/// `None` marks a category the student has no awarded band for.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub id: String,
    pub score: f64,
    pub bands: Vec<Option<AwardedBand>>,
}

impl StudentRecord {
    pub fn band_at(&self, category: usize) -> Option<&AwardedBand> {
        self.bands.get(category).and_then(|b| b.as_ref())
    }

    pub fn band_index_at(&self, category: usize) -> Option<usize> {
        self.band_at(category).map(|b| b.band_index)
    }
}
