use crate::grammar::components::{distance, run_direction, PLAYER, STRICT_PLAYER};
use crate::grammar::{Fragment, Grammar, MatchResult, SlotSet};
use once_cell::sync::Lazy;

/// `{runner} {direction} for {distance} [(tackle by {tackler})]`
pub static RUN: Lazy<Grammar> = Lazy::new(|| {
	let distance = distance();
	let direction = run_direction();
	SlotSet::bind(&[("runner", PLAYER), ("direction", &direction), ("distance", &distance), ("tackler", PLAYER)])
		.tackle_event("tackler")
		.compile(
			"run",
			&[
				Fragment::Slot("runner"),
				Fragment::Text(" "),
				Fragment::Slot("direction"),
				Fragment::Text(" for "),
				Fragment::Slot("distance"),
				Fragment::Slot("tackler"),
			],
		)
});

/// `{runner} for {distance} [(tackle by {tackler})]`, pinned to the start of
/// the text with a two-word runner. Without the direction clause the general
/// player pattern would swallow the words of pass, kick and sack sentences.
pub static RUN_NO_DIRECTION: Lazy<Grammar> = Lazy::new(|| {
	let distance = distance();
	SlotSet::bind(&[("runner", STRICT_PLAYER), ("distance", &distance), ("tackler", PLAYER)])
		.tackle_event("tackler")
		.compile(
			"run_no_direction",
			&[
				Fragment::Start,
				Fragment::Slot("runner"),
				Fragment::Text(" for "),
				Fragment::Slot("distance"),
				Fragment::Slot("tackler"),
			],
		)
});

pub fn parse_run_play(description: &str) -> Option<MatchResult<'_>> {
	RUN.classify(description)
}

pub fn parse_run_no_direction_play(description: &str) -> Option<MatchResult<'_>> {
	RUN_NO_DIRECTION.classify(description)
}
