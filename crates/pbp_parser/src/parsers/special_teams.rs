use crate::grammar::components::{distance, kick_status, PLAYER, YARDAGE};
use crate::grammar::{make_optional, Fragment, Grammar, MatchResult, SlotSet};
use once_cell::sync::Lazy;

// Kickoffs share `{kicker} kicks off {kick_distance}, ` and differ in what follows.
fn kickoff(name: &'static str, slots: &SlotSet, tail: &[Fragment<'_>]) -> Grammar {
	let mut fragments = vec![
		Fragment::Slot("kicker"),
		Fragment::Text(" kicks off "),
		Fragment::Slot("kick_distance"),
		Fragment::Text(", "),
	];
	fragments.extend_from_slice(tail);
	slots.compile(name, &fragments)
}

// Punts share `{punter} punts {punt_distance}` and differ in what follows.
fn punt(name: &'static str, slots: &SlotSet, tail: &[Fragment<'_>]) -> Grammar {
	let mut fragments = vec![Fragment::Slot("punter"), Fragment::Text(" punts "), Fragment::Slot("punt_distance")];
	fragments.extend_from_slice(tail);
	slots.compile(name, &fragments)
}

/// `{kicker} kicks off {kick_distance}, touchback`
pub static KICKOFF_TOUCHBACK: Lazy<Grammar> = Lazy::new(|| {
	let distance = distance();
	let slots = SlotSet::bind(&[("kicker", PLAYER), ("kick_distance", &distance)]);
	kickoff("kickoff_touchback", &slots, &[Fragment::Text("touchback")])
});

/// `{kicker} kicks off {kick_distance}, returned by {returner} for {return_distance} [(tackle by {tackler})]`
pub static KICKOFF_RETURNED: Lazy<Grammar> = Lazy::new(|| {
	let distance = distance();
	let slots = SlotSet::bind(&[
		("kicker", PLAYER),
		("kick_distance", &distance),
		("returner", PLAYER),
		("return_distance", &distance),
		("tackler", PLAYER),
	])
	.tackle_event("tackler");
	kickoff(
		"kickoff_returned",
		&slots,
		&[
			Fragment::Text("returned by "),
			Fragment::Slot("returner"),
			Fragment::Text(" for "),
			Fragment::Slot("return_distance"),
			Fragment::Slot("tackler"),
		],
	)
});

/// `{kicker} kicks off {kick_distance}, out of bounds`
pub static KICKOFF_OUT_OF_BOUNDS: Lazy<Grammar> = Lazy::new(|| {
	let distance = distance();
	let slots = SlotSet::bind(&[("kicker", PLAYER), ("kick_distance", &distance)]);
	kickoff("kickoff_out_of_bounds", &slots, &[Fragment::Text("out of bounds")])
});

/// `{kicker} kicks onside {kick_distance} [, returned by {returner} for {return_distance}] [(tackle by {tackler})]`
pub static KICKOFF_ONSIDE: Lazy<Grammar> = Lazy::new(|| {
	let distance = distance();
	let slots = SlotSet::bind(&[
		("kicker", PLAYER),
		("kick_distance", &distance),
		("returner", PLAYER),
		("return_distance", &distance),
		("tackler", PLAYER),
	])
	.tackle_event("tackler");
	let returned = make_optional(
		&slots.join(&[
			Fragment::Text(", returned by "),
			Fragment::Slot("returner"),
			Fragment::Text(" for "),
			Fragment::Slot("return_distance"),
		]),
		false,
	);
	slots.compile(
		"kickoff_onside",
		&[
			Fragment::Slot("kicker"),
			Fragment::Text(" kicks onside "),
			Fragment::Slot("kick_distance"),
			Fragment::Pattern(&returned),
			Fragment::Slot("tackler"),
		],
	)
});

/// `{kicker} {distance} field goal {good | no good} [, blocked by {blocker}]`
pub static FIELD_GOAL: Lazy<Grammar> = Lazy::new(|| {
	let distance = distance();
	let status = kick_status();
	SlotSet::bind(&[("kicker", PLAYER), ("distance", &distance), ("status", &status), ("blocker", PLAYER)])
		.blocked_event("blocker")
		.compile(
			"field_goal",
			&[
				Fragment::Slot("kicker"),
				Fragment::Text(" "),
				Fragment::Slot("distance"),
				Fragment::Text(" field goal "),
				Fragment::Slot("status"),
				Fragment::Slot("blocker"),
			],
		)
});

/// `{kicker} kicks extra point {good | no good} [, blocked by {blocker}]`
pub static EXTRA_POINT: Lazy<Grammar> = Lazy::new(|| {
	let status = kick_status();
	SlotSet::bind(&[("kicker", PLAYER), ("status", &status), ("blocker", PLAYER)])
		.blocked_event("blocker")
		.compile(
			"extra_point",
			&[
				Fragment::Slot("kicker"),
				Fragment::Text(" kicks extra point "),
				Fragment::Slot("status"),
				Fragment::Slot("blocker"),
			],
		)
});

/// `{punter} punts {punt_distance} out of bounds`
pub static PUNT_OUT_OF_BOUNDS: Lazy<Grammar> = Lazy::new(|| {
	let distance = distance();
	let slots = SlotSet::bind(&[("punter", PLAYER), ("punt_distance", &distance)]);
	punt("punt_out_of_bounds", &slots, &[Fragment::Text(" out of bounds")])
});

/// `{punter} punts {punt_distance} downed by {downed_by}`
pub static PUNT_DOWNED: Lazy<Grammar> = Lazy::new(|| {
	let distance = distance();
	let slots = SlotSet::bind(&[("punter", PLAYER), ("punt_distance", &distance), ("downed_by", PLAYER)]);
	punt("punt_downed", &slots, &[Fragment::Text(" downed by "), Fragment::Slot("downed_by")])
});

/// `{punter} punts {punt_distance}, fair catch by {returner} at {yardage}`
pub static PUNT_FAIR_CATCH: Lazy<Grammar> = Lazy::new(|| {
	let distance = distance();
	let slots = SlotSet::bind(&[("punter", PLAYER), ("punt_distance", &distance), ("returner", PLAYER), ("yardage", YARDAGE)]);
	punt(
		"punt_fair_catch",
		&slots,
		&[Fragment::Text(", fair catch by "), Fragment::Slot("returner"), Fragment::Text(" at "), Fragment::Slot("yardage")],
	)
});

/// `{punter} punts {punt_distance}, returned by {returner} for {return_distance} [(tackle by {tackler})]`
pub static PUNT_RETURNED: Lazy<Grammar> = Lazy::new(|| {
	let distance = distance();
	let slots = SlotSet::bind(&[
		("punter", PLAYER),
		("punt_distance", &distance),
		("returner", PLAYER),
		("return_distance", &distance),
		("tackler", PLAYER),
	])
	.tackle_event("tackler");
	punt(
		"punt_returned",
		&slots,
		&[
			Fragment::Text(", returned by "),
			Fragment::Slot("returner"),
			Fragment::Text(" for "),
			Fragment::Slot("return_distance"),
			Fragment::Slot("tackler"),
		],
	)
});

/// `{punter} punts {punt_distance}, recovered by {recoverer} at {yardage}`
pub static PUNT_RECOVERED: Lazy<Grammar> = Lazy::new(|| {
	let distance = distance();
	let slots = SlotSet::bind(&[("punter", PLAYER), ("punt_distance", &distance), ("recoverer", PLAYER), ("yardage", YARDAGE)]);
	punt(
		"punt_recovered",
		&slots,
		&[Fragment::Text(", recovered by "), Fragment::Slot("recoverer"), Fragment::Text(" at "), Fragment::Slot("yardage")],
	)
});

/// `{punter} punts {punt_distance}, touchback`
pub static PUNT_TOUCHBACK: Lazy<Grammar> = Lazy::new(|| {
	let distance = distance();
	let slots = SlotSet::bind(&[("punter", PLAYER), ("punt_distance", &distance)]);
	punt("punt_touchback", &slots, &[Fragment::Text(", touchback")])
});

/// `{punter} punts blocked by {blocker}`. No distance: the ball never travels.
pub static PUNT_BLOCKED: Lazy<Grammar> = Lazy::new(|| {
	SlotSet::bind(&[("punter", PLAYER), ("blocker", PLAYER)]).compile(
		"punt_blocked",
		&[Fragment::Slot("punter"), Fragment::Text(" punts blocked by "), Fragment::Slot("blocker")],
	)
});

pub fn parse_kickoff_touchback(description: &str) -> Option<MatchResult<'_>> {
	KICKOFF_TOUCHBACK.classify(description)
}

pub fn parse_kickoff_returned(description: &str) -> Option<MatchResult<'_>> {
	KICKOFF_RETURNED.classify(description)
}

pub fn parse_kickoff_out_of_bounds(description: &str) -> Option<MatchResult<'_>> {
	KICKOFF_OUT_OF_BOUNDS.classify(description)
}

pub fn parse_onside_kick(description: &str) -> Option<MatchResult<'_>> {
	KICKOFF_ONSIDE.classify(description)
}

pub fn parse_field_goal(description: &str) -> Option<MatchResult<'_>> {
	FIELD_GOAL.classify(description)
}

pub fn parse_extra_point(description: &str) -> Option<MatchResult<'_>> {
	EXTRA_POINT.classify(description)
}

pub fn parse_punt_out_of_bounds(description: &str) -> Option<MatchResult<'_>> {
	PUNT_OUT_OF_BOUNDS.classify(description)
}

pub fn parse_punt_downed(description: &str) -> Option<MatchResult<'_>> {
	PUNT_DOWNED.classify(description)
}

pub fn parse_punt_fair_catch(description: &str) -> Option<MatchResult<'_>> {
	PUNT_FAIR_CATCH.classify(description)
}

pub fn parse_punt_returned(description: &str) -> Option<MatchResult<'_>> {
	PUNT_RETURNED.classify(description)
}

pub fn parse_punt_recovered(description: &str) -> Option<MatchResult<'_>> {
	PUNT_RECOVERED.classify(description)
}

pub fn parse_punt_touchback(description: &str) -> Option<MatchResult<'_>> {
	PUNT_TOUCHBACK.classify(description)
}

pub fn parse_punt_blocked(description: &str) -> Option<MatchResult<'_>> {
	PUNT_BLOCKED.classify(description)
}
