use crate::game::COLS;

/// Parse a 1-based column choice typed by a player.
pub fn parse_column(input: &str) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|choice| (1..=COLS).contains(choice))
}

/// True when the answer to the replay question means "stop".
pub fn wants_to_quit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

pub fn column_request(name: &str) -> String {
    format!("{name} enter a number 1 - {COLS} to pick a column")
}
