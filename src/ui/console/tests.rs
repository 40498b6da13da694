use super::*;

fn intent(line: &str) -> AppIntent {
    match parse_line(line) {
        Ok(Some(ConsoleInput::Intent(intent))) => intent,
        other => panic!("Intent erwartet für {line:?}, erhalten: {other:?}"),
    }
}

#[test]
fn click_accepts_space_or_comma_separated_pair() {
    let expected = GeoPoint::new(28.61, 77.2);

    assert!(matches!(intent("click 28.61 77.2"), AppIntent::MapClicked { point } if point == expected));
    assert!(matches!(intent("  CLICK 28.61, 77.2 "), AppIntent::MapClicked { point } if point == expected));
}

#[test]
fn directions_split_on_pipe() {
    assert!(matches!(
        intent("directions India Gate | Red Fort, Delhi"),
        AppIntent::DirectionsSubmitted { from, to } if from == "India Gate" && to == "Red Fort, Delhi"
    ));
}

#[test]
fn select_keeps_negative_index_for_the_controller() {
    assert!(matches!(intent("select -1"), AppIntent::RouteSelected { index: -1 }));
}

#[test]
fn nolocate_has_default_reason() {
    assert!(matches!(
        intent("nolocate"),
        AppIntent::LocationUnavailable { reason } if reason == "not supported"
    ));
}

#[test]
fn malformed_lines_are_errors() {
    assert_eq!(
        parse_line("click 28.6").err(),
        Some(ConsoleError::Usage("click <lat> <lon>"))
    );
    assert_eq!(
        parse_line("click north east").err(),
        Some(ConsoleError::InvalidNumber("north".into()))
    );
    assert_eq!(
        parse_line("directions nowhere").err(),
        Some(ConsoleError::Usage("directions <from> | <to>"))
    );
    assert_eq!(
        parse_line("fly 1 2").err(),
        Some(ConsoleError::UnknownCommand("fly".into()))
    );
}

#[test]
fn empty_line_and_help() {
    assert!(matches!(parse_line("   "), Ok(None)));
    assert!(matches!(parse_line("help"), Ok(Some(ConsoleInput::Help))));
}
