use super::*;
use crate::model::rubric::Band;
use crate::model::student::AwardedBand;

fn rubric() -> Rubric {
    let bands = |points: &[f64]| -> Vec<Band> {
        points
            .iter()
            .enumerate()
            .map(|(index, &points)| Band {
                index,
                points,
                label: format!("b{index}"),
            })
            .collect()
    };
    Rubric {
        categories: vec![
            RubricCategory {
                id: "a".to_string(),
                name: "Analysis".to_string(),
                points: 20.0,
                bands: bands(&[20.0, 10.0, 0.0]),
            },
            RubricCategory {
                id: "z".to_string(),
                name: "Zero".to_string(),
                points: 0.0,
                bands: bands(&[0.0]),
            },
        ],
    }
}

fn student(id: &str, a: Option<usize>, z: Option<usize>) -> StudentRecord {
    let band = |cat: &str, idx: Option<usize>| {
        idx.map(|band_index| AwardedBand {
            category_id: cat.to_string(),
            band_index,
            band_label: String::new(),
        })
    };
    StudentRecord {
        id: id.to_string(),
        score: 0.0,
        bands: vec![band("a", a), band("z", z)],
    }
}

#[test]
fn test_band_counts_and_stats() {
    let students = vec![
        student("1", Some(0), Some(0)),
        student("2", Some(1), None),
        student("3", Some(1), Some(0)),
        student("4", None, Some(0)),
    ];
    let rows = rubric_stats(&rubric(), &students);
    assert_eq!(rows.len(), 2);

    let a = &rows[0];
    assert_eq!(a.band_counts, vec![1, 2, 0]);
    assert_eq!(a.missing, 1);
    assert_eq!(a.stats.count, 3);
    assert_eq!(a.stats.median, 10.0);
    assert_eq!(a.stats.average, 13.33);
    assert_eq!(a.scaled.max, 100.0);
    assert_eq!(a.scaled.min, 50.0);
    assert_eq!(a.band_labels, vec!["b0", "b1", "b2"]);

    let z = &rows[1];
    assert_eq!(z.band_counts, vec![3]);
    assert_eq!(z.missing, 1);
    assert_eq!(z.scaled.max, 0.0);
}

#[test]
fn test_empty_population() {
    let rows = rubric_stats(&rubric(), &[]);
    assert_eq!(rows[0].band_counts, vec![0, 0, 0]);
    assert_eq!(rows[0].stats, MarkStats::default());
}
