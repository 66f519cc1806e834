use std::ops::Range;

/// Half-open run `[start, end)` of rubric categories in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRange {
    pub start: usize,
    pub end: usize,
}

impl CategoryRange {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn indices(&self) -> Range<usize> {
        self.start..self.end
    }
}

pub fn combination_count(n_categories: usize) -> usize {
    n_categories * (n_categories + 1) / 2 + 1
}

/// Empty range first, then every non-empty run by start, then by end.
pub fn enumerate_ranges(n_categories: usize) -> Vec<CategoryRange> {
    let mut out = Vec::with_capacity(combination_count(n_categories));
    out.push(CategoryRange { start: 0, end: 0 });
    for start in 0..n_categories {
        for end in start + 1..=n_categories {
            out.push(CategoryRange { start, end });
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_combos.rs"]
mod tests;
