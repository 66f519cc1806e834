use crate::pipeline::stage1_align::AlignedPopulation;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierCase {
    pub position: usize,
    pub diff: f64,
}

pub fn detect_outliers(population: &AlignedPopulation, variance: f64) -> Vec<OutlierCase> {
    population
        .students
        .iter()
        .zip(&population.reference)
        .enumerate()
        .filter_map(|(position, (student, &target))| {
            let diff = student.score - target;
            (diff.abs() > variance).then_some(OutlierCase { position, diff })
        })
        .collect()
}
