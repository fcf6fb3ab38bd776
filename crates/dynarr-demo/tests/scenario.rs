use dynarr_demo::{DemoError, DemoSettings, INDEX_VAR, COUNT_VAR, VALUE_VAR, run};

fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl FnMut(&str) -> Option<String> + 'a {
    move |name| {
        vars.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
    }
}

// =============================================================================
// full scenario
// =============================================================================

#[test]
fn test_default_scenario() {
    let report = run(&DemoSettings::default()).unwrap();
    let doubled = [2, 4, 6, 8, 10, 12, 14, 16, 18, 20];

    assert_eq!(report.doubled, doubled);
    assert_eq!(report.forward, doubled);
    assert_eq!(report.reverse, [20, 18, 16, 14, 12, 10, 8, 6, 4, 2]);
    assert_eq!(report.after_insert, [2, 4, 6, 999, 8, 10, 12, 14, 16, 18, 20]);
    assert_eq!(report.after_insert.len(), 11);
    assert_eq!(report.removed, 999);
    assert_eq!(report.after_remove, doubled);
    assert_eq!(report.samples, [10, 11, 12, 13, 14]);
    assert_eq!(report.copied, doubled);
    assert_eq!(report.copied_capacity, 13);
    assert_eq!(report.moved, doubled);
    assert_eq!(report.range_walk, doubled);
}

#[test]
fn test_insert_at_end_and_front() {
    let at_end = run(&DemoSettings::new(4, -1, 4)).unwrap();
    let at_front = run(&DemoSettings::new(4, -1, 0)).unwrap();

    assert_eq!(at_end.after_insert, [2, 4, 6, 8, -1]);
    assert_eq!(at_front.after_insert, [-1, 2, 4, 6, 8]);
    assert_eq!(at_front.after_remove, [2, 4, 6, 8]);
}

#[test]
fn test_empty_scenario() {
    let report = run(&DemoSettings::new(0, 5, 0)).unwrap();

    assert!(report.doubled.is_empty());
    assert_eq!(report.after_insert, [5]);
    assert!(report.moved.is_empty());
    assert_eq!(report.samples.len(), 5);
}

#[test]
fn test_growth_past_several_capacities() {
    let report = run(&DemoSettings::new(100, 7, 50)).unwrap();

    assert_eq!(report.after_remove.len(), 100);
    assert_eq!(report.after_insert[50], 7);
    assert_eq!(report.after_insert[51], 102);
}

#[test]
fn test_index_past_end_is_rejected() {
    let err = run(&DemoSettings::new(3, 1, 4)).unwrap_err();

    assert!(matches!(err, DemoError::IndexOutOfRange { index: 4, count: 3 }));
}

#[test]
fn test_report_display() {
    let report = run(&DemoSettings::new(3, 9, 1)).unwrap();
    let text = report.to_string();

    assert!(text.starts_with("Forward iteration:\n2 4 6\n"));
    assert!(text.contains("Reverse iteration:\n6 4 2\n"));
    assert!(text.contains("After insert:\n2 9 4 6\n"));
    assert!(text.ends_with("Range walk:\n2 4 6\n"));
}

// =============================================================================
// settings
// =============================================================================

#[test]
fn test_settings_defaults() {
    let settings = DemoSettings::from_lookup(|_| None).unwrap();

    assert_eq!(settings, DemoSettings::new(10, 999, 3));
}

#[test]
fn test_settings_overrides() {
    let vars = [(COUNT_VAR, " 20 "), (VALUE_VAR, "-4"), (INDEX_VAR, "")];

    let settings = DemoSettings::from_lookup(lookup(&vars)).unwrap();

    assert_eq!(settings, DemoSettings::new(20, -4, 3));
}

#[test]
fn test_settings_parse_failure() {
    let vars = [(COUNT_VAR, "ten")];

    let err = DemoSettings::from_lookup(lookup(&vars)).unwrap_err();

    match &err {
        DemoError::InvalidSetting { name, value, .. } => {
            assert_eq!(*name, COUNT_VAR);
            assert_eq!(value, "ten");
        },
        other => panic!("unexpected error {other:?}"),
    }
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_negative_count_is_invalid() {
    let vars = [(COUNT_VAR, "-1")];

    assert!(matches!(
        DemoSettings::from_lookup(lookup(&vars)),
        Err(DemoError::InvalidSetting { name: COUNT_VAR, .. })
    ));
}
