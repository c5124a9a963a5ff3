use crate::grammar::components::{distance, pass_direction, PLAYER};
use crate::grammar::{Fragment, Grammar, MatchResult, SlotSet};
use once_cell::sync::Lazy;

/// `{quarterback} pass complete [{direction}] to {receiver} for {distance} [(tackle by {tackler})]`
pub static PASS_COMPLETE: Lazy<Grammar> = Lazy::new(|| {
	let distance = distance();
	let direction = pass_direction();
	SlotSet::bind(&[
		("quarterback", PLAYER),
		("direction", &direction),
		("receiver", PLAYER),
		("distance", &distance),
		("tackler", PLAYER),
	])
	.tackle_event("tackler")
	.optional("direction", true)
	.compile(
		"pass_complete",
		&[
			Fragment::Slot("quarterback"),
			Fragment::Text(" pass complete"),
			Fragment::Slot("direction"),
			Fragment::Text(" to "),
			Fragment::Slot("receiver"),
			Fragment::Text(" for "),
			Fragment::Slot("distance"),
			Fragment::Slot("tackler"),
		],
	)
});

/// `{quarterback} pass incomplete [{direction}] [intended for {receiver}] [(defended by {defender})]`
pub static PASS_INCOMPLETE: Lazy<Grammar> = Lazy::new(|| {
	let direction = pass_direction();
	SlotSet::bind(&[("quarterback", PLAYER), ("direction", &direction), ("receiver", PLAYER), ("defender", PLAYER)])
		.defended_event("defender")
		.intended_event("receiver")
		.optional("direction", true)
		.compile(
			"pass_incomplete",
			&[
				Fragment::Slot("quarterback"),
				Fragment::Text(" pass incomplete"),
				Fragment::Slot("direction"),
				Fragment::Slot("receiver"),
				Fragment::Slot("defender"),
			],
		)
});

pub fn parse_pass_complete_play(description: &str) -> Option<MatchResult<'_>> {
	PASS_COMPLETE.classify(description)
}

pub fn parse_pass_incomplete_play(description: &str) -> Option<MatchResult<'_>> {
	PASS_INCOMPLETE.classify(description)
}
