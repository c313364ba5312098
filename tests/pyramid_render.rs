use summable_seq::pyramid::{calculate_line, parse_rows, render_pyramid, write_pyramid};
use summable_seq::Error;

#[test]
fn pyramid_one() {
    assert_eq!(render_pyramid(1).unwrap(), "=\n");
}

#[test]
fn pyramid_two() {
    assert_eq!(render_pyramid(2).unwrap(), "-=-\n===\n");
}

#[test]
fn every_line_has_base_width() {
    let rows = 12;
    let rendered = render_pyramid(rows).unwrap();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), rows);
    for (k, line) in lines.iter().enumerate() {
        assert_eq!(Some(line.len()), calculate_line(rows));
        assert_eq!(Some(line.matches('=').count()), calculate_line(k + 1));
        let trimmed = line.trim_matches('-');
        assert!(trimmed.chars().all(|c| c == '='), "{line}");
    }
}

#[test]
fn writer_receives_the_rendering() {
    let mut out = Vec::new();
    write_pyramid(5, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), render_pyramid(5).unwrap());
}

#[test]
fn nonint_error() {
    let err = parse_rows("test").unwrap_err();
    assert!(matches!(err, Error::InvalidRows { .. }));
    assert!(err.to_string().contains("--rows must be an integer"));
}

#[test]
fn negative_rows_print_nothing() {
    let rows = parse_rows("-3").unwrap();
    let mut out = Vec::new();
    write_pyramid(rows, &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn oversized_pyramid_is_an_error_not_a_panic() {
    let err = parse_rows("18446744073709551615")
        .and_then(render_pyramid)
        .unwrap_err();
    assert!(matches!(err, Error::PyramidTooLarge { .. }));
    assert!(err.is_invalid_argument());

    let mut out = Vec::new();
    assert!(write_pyramid(usize::MAX, &mut out).is_err());
    assert!(out.is_empty());
}
