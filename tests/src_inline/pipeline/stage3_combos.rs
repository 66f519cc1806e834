use super::*;

#[test]
fn test_combination_count_matches_enumeration() {
    for c in 0..8 {
        let ranges = enumerate_ranges(c);
        assert_eq!(ranges.len(), combination_count(c), "C = {c}");
        assert_eq!(ranges.len(), c * (c + 1) / 2 + 1);
    }
}

#[test]
fn test_exactly_one_empty_range_first() {
    let ranges = enumerate_ranges(4);
    assert!(ranges[0].is_empty());
    assert_eq!(ranges.iter().filter(|r| r.is_empty()).count(), 1);
}

#[test]
fn test_order_and_contiguity() {
    let ranges = enumerate_ranges(3);
    let pairs: Vec<(usize, usize)> = ranges.iter().map(|r| (r.start, r.end)).collect();
    assert_eq!(
        pairs,
        vec![(0, 0), (0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
    );
    assert_eq!(ranges[3].len(), 3);
    assert_eq!(ranges[5].indices().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn test_zero_categories_only_empty_range() {
    let ranges = enumerate_ranges(0);
    assert_eq!(ranges, vec![CategoryRange { start: 0, end: 0 }]);
}
