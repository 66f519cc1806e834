#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub index: usize,
    pub points: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RubricCategory {
    pub id: String,
    pub name: String,
    pub points: f64,
    pub bands: Vec<Band>,
}

impl RubricCategory {
    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    pub fn band_points(&self, index: usize) -> Option<f64> {
        self.bands.get(index).map(|b| b.points)
    }

    /// Checks that band indices run 0..N and points strictly decrease from index 0.
    pub fn check_bands(&self) -> Result<(), String> {
        for (pos, band) in self.bands.iter().enumerate() {
            if band.index != pos {
                return Err(format!(
                    "category {}: band index {} found at position {}",
                    self.id, band.index, pos
                ));
            }
            if !band.points.is_finite() {
                return Err(format!(
                    "category {}: band {} has non-finite points",
                    self.id, band.index
                ));
            }
        }
        for pair in self.bands.windows(2) {
            if pair[1].points >= pair[0].points {
                return Err(format!(
                    "category {}: band {} ({}) does not score below band {} ({})",
                    self.id, pair[1].index, pair[1].points, pair[0].index, pair[0].points
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rubric {
    pub categories: Vec<RubricCategory>,
}

impl Rubric {
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn position_of(&self, category_id: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.id == category_id)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/rubric.rs"]
mod tests;
