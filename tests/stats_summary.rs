use gdp_series::stats::summarize;

#[test]
fn summary_on_odd_count() {
    let s = summarize([3.0, 1.0, 2.0]);
    assert_eq!(s.count, 3);
    assert_eq!(s.min, Some(1.0));
    assert_eq!(s.max, Some(3.0));
    assert_eq!(s.mean, Some(2.0));
    assert_eq!(s.median, Some(2.0));
}

#[test]
fn summary_on_even_count() {
    let s = summarize([4.0, 1.0, 3.0, 2.0]);
    assert_eq!(s.count, 4);
    assert_eq!(s.median, Some(2.5));
    assert_eq!(s.mean, Some(2.5));
}

#[test]
fn summary_on_empty_input() {
    let s = summarize(std::iter::empty());
    assert_eq!(s.count, 0);
    assert_eq!(s.min, None);
    assert_eq!(s.max, None);
    assert_eq!(s.mean, None);
    assert_eq!(s.median, None);
}

#[test]
fn summary_ignores_non_finite_values() {
    let s = summarize([1.0, f64::NAN, f64::INFINITY, 3.0]);
    assert_eq!(s.count, 2);
    assert_eq!(s.min, Some(1.0));
    assert_eq!(s.max, Some(3.0));
}
