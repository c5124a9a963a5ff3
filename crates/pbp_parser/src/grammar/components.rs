//! Primitive token patterns shared by every play grammar.
//!
//! These are raw pattern fragments, not compiled regexes, and none of them
//! carries a named capture: binding a fragment to a slot is the job of
//! [`SlotSet::bind`](super::SlotSet::bind).

/// Starts with a capital, can't end with a space.
pub const PLAYER: &str = r"[A-Z][a-zA-Z .'-]*[a-zA-Z]";

/// Exactly a first and last name. Used where dropping a clause would let
/// [`PLAYER`] run on into the words that follow it.
pub const STRICT_PLAYER: &str = r"[a-zA-Z.'-]+ [a-zA-Z.'-]+";

pub const RUN_DIRECTIONS: [&str; 8] = [
	"up the middle",
	"left guard",
	"right guard",
	"left tackle",
	"right tackle",
	"left end",
	"right end",
	"scrambles",
];

pub const PASS_DIRECTIONS: [&str; 6] = ["short left", "short middle", "short right", "deep left", "deep middle", "deep right"];

// Ex: 40 yards, -1 yards, 1 yard, no gain
pub const DISTANCES: [&str; 2] = [r"-?\d+ yards?", "no gain"];

// Ex: CHI-10, or 50 for midfield. Yard lines run 1 to 50.
pub const YARDAGE: &str = r"(?:[A-Z]{2,3}-(?:50|[1-4]\d|[1-9])|50)\b";

pub const KICK_STATUSES: [&str; 2] = ["good", "no good"];

pub const PENALTY: &str = r"[a-zA-Z \d()/]+";

pub const PENALTY_RESPONSES: [&str; 3] = ["accepted", "declined", "offset"];

pub const NO_PLAY: &str = "no play";

pub const TEAM_NAME: &str = r"[a-zA-Z ]+";

// Ex: #2
pub const TIMEOUT_NUMBER: &str = r"#\d";

/// Joins already-valid pattern fragments into one alternation.
pub fn any_of(patterns: &[&str]) -> String {
	patterns.join("|")
}

/// Joins plain words into one alternation, escaping each.
pub fn any_literal(words: &[&str]) -> String {
	words.iter().map(|word| regex::escape(word)).collect::<Vec<_>>().join("|")
}

pub fn distance() -> String {
	any_of(&DISTANCES)
}

pub fn run_direction() -> String {
	any_literal(&RUN_DIRECTIONS)
}

pub fn pass_direction() -> String {
	any_literal(&PASS_DIRECTIONS)
}

pub fn kick_status() -> String {
	any_literal(&KICK_STATUSES)
}

pub fn penalty_response() -> String {
	any_literal(&PENALTY_RESPONSES)
}
