use std::path::Path;

use tracing::info;

use crate::input::{InputError, read_json};

pub fn load_reference(path: &Path) -> Result<Vec<f64>, InputError> {
    let values: Vec<f64> = read_json(path)?;
    if !is_ascending(&values) {
        info!("reference values are not sorted ascending; rank alignment will sort a copy");
    }
    Ok(values)
}

pub fn is_ascending(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
