use crate::grammar::components::{distance, penalty_response, NO_PLAY, PENALTY, PLAYER, TEAM_NAME, TIMEOUT_NUMBER};
use crate::grammar::{Fragment, Grammar, MatchResult, SlotSet};
use once_cell::sync::Lazy;

/// `Penalty on {player}: {penalty}, {distance} [({response})] [(no play)]`
pub static PENALTY_GRAMMAR: Lazy<Grammar> = Lazy::new(|| {
	let distance = distance();
	let response = penalty_response();
	SlotSet::bind(&[
		("player", PLAYER),
		("penalty", PENALTY),
		("distance", &distance),
		("response", &response),
		("no_play", NO_PLAY),
	])
	.wrap_event("response", "(", ")", true)
	.wrap_event("no_play", "(", ")", true)
	.compile(
		"penalty",
		&[
			Fragment::Text("Penalty on "),
			Fragment::Slot("player"),
			Fragment::Text(": "),
			Fragment::Slot("penalty"),
			Fragment::Text(", "),
			Fragment::Slot("distance"),
			Fragment::Slot("response"),
			Fragment::Slot("no_play"),
		],
	)
});

/// `Timeout {number} by {team}`
pub static TIMEOUT: Lazy<Grammar> = Lazy::new(|| {
	SlotSet::bind(&[("number", TIMEOUT_NUMBER), ("team", TEAM_NAME)]).compile(
		"timeout",
		&[Fragment::Text("Timeout "), Fragment::Slot("number"), Fragment::Text(" by "), Fragment::Slot("team")],
	)
});

/// `{player} spiked the ball`
pub static SPIKE: Lazy<Grammar> =
	Lazy::new(|| SlotSet::bind(&[("player", PLAYER)]).compile("spike", &[Fragment::Slot("player"), Fragment::Text(" spiked the ball")]));

/// `{player} kneels [for {distance}]`
pub static KNEEL: Lazy<Grammar> = Lazy::new(|| {
	let distance = distance();
	SlotSet::bind(&[("player", PLAYER), ("distance", &distance)])
		.wrap_event("distance", "for ", "", true)
		.compile("kneel", &[Fragment::Slot("player"), Fragment::Text(" kneels"), Fragment::Slot("distance")])
});

pub fn parse_penalty(description: &str) -> Option<MatchResult<'_>> {
	PENALTY_GRAMMAR.classify(description)
}

/// Every penalty in `description`, in the order they are written.
pub fn parse_penalties(description: &str) -> impl Iterator<Item = MatchResult<'_>> {
	PENALTY_GRAMMAR.classify_all(description)
}

pub fn parse_timeout(description: &str) -> Option<MatchResult<'_>> {
	TIMEOUT.classify(description)
}

pub fn parse_spike(description: &str) -> Option<MatchResult<'_>> {
	SPIKE.classify(description)
}

pub fn parse_kneel(description: &str) -> Option<MatchResult<'_>> {
	KNEEL.classify(description)
}
