use crate::model::rubric::RubricCategory;
use crate::model::rule::Direction;
use crate::model::student::AwardedBand;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShiftOutcome {
    Shifted(f64),
    Missing,
}

impl ShiftOutcome {
    pub fn value(self) -> f64 {
        match self {
            ShiftOutcome::Shifted(v) => v,
            ShiftOutcome::Missing => 0.0,
        }
    }

    pub fn is_missing(self) -> bool {
        matches!(self, ShiftOutcome::Missing)
    }
}

/// Points of the next lower band, or 0 when already at the lowest band.
pub fn shift_down(category: &RubricCategory, band_index: usize) -> f64 {
    if band_index + 1 < category.band_count() {
        category.band_points(band_index + 1).unwrap_or(0.0)
    } else {
        0.0
    }
}

/// Points of the next higher band, or 0 when already at the top band.
pub fn shift_up(category: &RubricCategory, band_index: usize) -> f64 {
    if band_index > 0 {
        category.band_points(band_index - 1).unwrap_or(0.0)
    } else {
        0.0
    }
}

/// Signed contribution of one category to a combination's `sumDiff`.
pub fn category_shift(
    category: &RubricCategory,
    awarded: Option<&AwardedBand>,
    direction: Direction,
) -> ShiftOutcome {
    let Some(awarded) = awarded else {
        return ShiftOutcome::Missing;
    };
    let value = match direction {
        Direction::Lower => shift_down(category, awarded.band_index),
        Direction::Raise => -shift_up(category, awarded.band_index),
    };
    ShiftOutcome::Shifted(value)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_shift.rs"]
mod tests;
