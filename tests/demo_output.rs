use num_bigint::BigUint;
use summable_seq::demo::{run, write_report, DemoConfig};
use summable_seq::Error;

#[test]
fn default_demo_produces_output() {
    let config = DemoConfig {
        index: 2_000,
        ..DemoConfig::default()
    };
    let runs = run(&config).unwrap();
    assert_eq!(runs.len(), 2);

    let mut out = Vec::new();
    write_report(&mut out, &runs).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(!text.is_empty());
    assert_eq!(text.lines().count(), 4);
    assert!(text.lines().nth(1).unwrap().starts_with("Time elapsed (s)"));
}

#[test]
fn small_index_reports_exact_values() {
    let config = DemoConfig {
        index: 30,
        ..DemoConfig::default()
    };
    let runs = run(&config).unwrap();
    assert_eq!(runs[0].value, BigUint::from(832_040u32));
    assert_eq!(runs[1].value, BigUint::from(11_586_659u32));
}

#[test]
fn custom_prefix_and_window() {
    let config = DemoConfig {
        index: 6,
        digits: 8,
        initial: Some(vec![1u32.into(), 2u32.into(), 4u32.into()]),
        window: Some(2),
    };
    let runs = run(&config).unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].value, BigUint::from(26u32));
    assert!(runs[0].label.contains("window=2"), "{}", runs[0].label);
}

#[test]
fn invalid_configuration_propagates() {
    let negative = DemoConfig {
        index: -1,
        ..DemoConfig::default()
    };
    assert!(matches!(run(&negative), Err(Error::NegativeIndex { .. })));

    let wide = DemoConfig {
        index: 10,
        initial: Some(vec![1u32.into()]),
        window: Some(2),
        ..DemoConfig::default()
    };
    assert!(matches!(run(&wide), Err(Error::WindowTooLarge { .. })));
}
