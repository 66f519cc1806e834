use super::*;
use crate::model::rubric::{Band, RubricCategory};
use crate::model::student::{AwardedBand, StudentRecord};

fn category(id: &str, points: &[f64]) -> RubricCategory {
    RubricCategory {
        id: id.to_string(),
        name: id.to_uppercase(),
        points: points[0],
        bands: points
            .iter()
            .enumerate()
            .map(|(index, &points)| Band {
                index,
                points,
                label: format!("{id}-{index}"),
            })
            .collect(),
    }
}

fn student(id: &str, score: f64, bands: &[(&str, Option<usize>)]) -> StudentRecord {
    StudentRecord {
        id: id.to_string(),
        score,
        bands: bands
            .iter()
            .map(|(cat, band)| {
                band.map(|band_index| AwardedBand {
                    category_id: cat.to_string(),
                    band_index,
                    band_label: format!("{cat}-{band_index}"),
                })
            })
            .collect(),
    }
}

fn run(
    rubric: &Rubric,
    students: Vec<StudentRecord>,
    reference: Vec<f64>,
    position: usize,
    threshold: f64,
) -> Vec<CandidateRule> {
    let population = AlignedPopulation {
        students,
        reference,
    };
    let diff = population.students[position].score - population.reference[position];
    let inputs = Stage5Inputs {
        rubric,
        population: &population,
        threshold,
    };
    let ranges = enumerate_ranges(rubric.len());
    evaluate_case(&inputs, &OutlierCase { position, diff }, &ranges)
}

#[test]
fn test_is_accepted_is_strict() {
    assert!(is_accepted(6.0, 15.0, 10.0));
    assert!(!is_accepted(5.0, 15.0, 10.0));
    assert!(!is_accepted(0.0, 20.0, 5.0));
}

#[test]
fn test_top_band_of_two_band_category_is_rejected() {
    let rubric = Rubric {
        categories: vec![category("a", &[10.0, 0.0])],
    };
    let drafts = run(
        &rubric,
        vec![student("x", 80.0, &[("a", Some(0))])],
        vec![60.0],
        0,
        5.0,
    );
    assert!(drafts.is_empty());
}

#[test]
fn test_one_band_down_accepted_and_projected() {
    let rubric = Rubric {
        categories: vec![category("a", &[10.0, 6.0, 0.0])],
    };
    let students = vec![
        student("y", 75.0, &[("a", Some(0))]),
        student("z", 50.0, &[("a", Some(0))]),
        student("w", 55.0, &[("a", Some(1))]),
    ];
    let drafts = run(&rubric, students, vec![60.0, 60.0, 60.0], 0, 10.0);
    assert_eq!(drafts.len(), 1);

    let rule = &drafts[0];
    assert_eq!(rule.categories, "A");
    assert_eq!(rule.category_indices, vec![0]);
    assert_eq!(rule.category_count, 1);
    assert_eq!(rule.direction, Direction::Lower);
    assert_eq!(rule.target_bands, vec![Some(0)]);
    assert_eq!(rule.band_labels, vec![Some("a-0".to_string())]);
    assert_eq!(rule.per_category_shift, vec![6.0]);
    assert_eq!(rule.sum_shift, 6.0);
    assert_eq!(rule.matched_student_ids, vec!["y".to_string()]);
    assert_eq!(rule.fix_count, 1);
    assert_eq!(rule.total_residual, 9.0);
    assert_eq!(rule.gap, 9.0);
    assert_eq!(rule.projected_scores, vec![69.0, 44.0, 55.0]);
    assert!(rule.active);
}

#[test]
fn test_raise_direction_uses_negated_shift_up() {
    let rubric = Rubric {
        categories: vec![category("a", &[10.0, 6.0, 0.0])],
    };
    let students = vec![
        student("low", 40.0, &[("a", Some(2))]),
        student("top", 90.0, &[("a", Some(0))]),
    ];
    let drafts = run(&rubric, students, vec![48.0, 90.0], 0, 3.0);
    assert_eq!(drafts.len(), 1);
    let rule = &drafts[0];
    assert_eq!(rule.direction, Direction::Raise);
    assert_eq!(rule.per_category_shift, vec![-6.0]);
    assert_eq!(rule.total_residual, -2.0);
    assert_eq!(rule.projected_scores, vec![46.0, 90.0]);
}

#[test]
fn test_missing_band_is_skipped_not_fatal() {
    let rubric = Rubric {
        categories: vec![category("a", &[10.0, 6.0, 0.0]), category("b", &[5.0, 2.0])],
    };
    let students = vec![student("m", 75.0, &[("a", Some(0)), ("b", None)])];
    let drafts = run(&rubric, students, vec![60.0], 0, 10.0);

    // [a] and [a b] both sum to 6; [b] sums to 0 and is rejected.
    assert_eq!(drafts.len(), 2);
    let pair = drafts.iter().find(|d| d.category_count == 2).unwrap();
    assert_eq!(pair.categories, "A B");
    assert_eq!(pair.target_bands, vec![Some(0), None]);
    assert_eq!(pair.band_labels[1], None);
    assert_eq!(pair.per_category_shift, vec![6.0, 0.0]);
    assert_eq!(pair.projected_scores, vec![69.0]);
}

#[test]
fn test_empty_combination_can_be_accepted() {
    let rubric = Rubric {
        categories: vec![category("a", &[10.0, 0.0])],
    };
    let drafts = run(
        &rubric,
        vec![student("e", 63.0, &[("a", Some(1))])],
        vec![60.0],
        0,
        5.0,
    );
    let empty = drafts.iter().find(|d| d.category_count == 0).unwrap();
    assert_eq!(empty.categories, "");
    assert_eq!(empty.sum_shift, 0.0);
    assert_eq!(empty.total_residual, 3.0);
    assert_eq!(empty.projected_scores, vec![63.0]);
}

#[test]
fn test_run_stage5_collects_across_cases() {
    let rubric = Rubric {
        categories: vec![category("a", &[10.0, 6.0, 0.0])],
    };
    let population = AlignedPopulation {
        students: vec![
            student("p", 75.0, &[("a", Some(0))]),
            student("q", 76.0, &[("a", Some(0))]),
        ],
        reference: vec![60.0, 60.0],
    };
    let inputs = Stage5Inputs {
        rubric: &rubric,
        population: &population,
        threshold: 11.0,
    };
    let cases = vec![
        OutlierCase {
            position: 0,
            diff: 15.0,
        },
        OutlierCase {
            position: 1,
            diff: 16.0,
        },
    ];
    let drafts = run_stage5(&inputs, &cases);
    assert_eq!(drafts.len(), 2);
    assert_eq!(drafts[0].matched_student_ids, vec!["p".to_string()]);
    assert_eq!(drafts[1].matched_student_ids, vec!["q".to_string()]);
}
