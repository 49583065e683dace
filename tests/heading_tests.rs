use battleship::Heading;

#[test]
fn direction_chars() {
    assert_eq!(Heading::North.direction_char(), 'n');
    assert_eq!(Heading::South.direction_char(), 's');
    assert_eq!(Heading::East.direction_char(), 'e');
    assert_eq!(Heading::West.direction_char(), 'o');
    assert_eq!(Heading::Unknown.direction_char(), 'u');
}

#[test]
fn display_is_the_char_code() {
    assert_eq!(Heading::West.to_string(), "o");
    assert_eq!(Heading::Unknown.to_string(), "u");
}

#[test]
fn parse_round_trips_known_codes() {
    for heading in Heading::ALL {
        assert_eq!(Heading::parse(heading.direction_char()), heading);
    }
}

#[test]
fn parse_falls_back_to_unknown() {
    assert_eq!(Heading::parse('x'), Heading::Unknown);
    assert_eq!(Heading::parse('N'), Heading::Unknown);
    assert_eq!(Heading::parse(' '), Heading::Unknown);
    assert_eq!(Heading::parse('\0'), Heading::Unknown);
    assert_eq!(Heading::parse('u'), Heading::Unknown);
    assert_eq!(Heading::from('s'), Heading::South);
}
