use crate::grammar::components::{distance, pass_direction, PLAYER, YARDAGE};
use crate::grammar::{Fragment, Grammar, MatchResult, SlotSet};
use once_cell::sync::Lazy;

/// `{quarterback} sacked by {sacker} for {distance}`
pub static SACK_FULL: Lazy<Grammar> = Lazy::new(|| {
	let distance = distance();
	SlotSet::bind(&[("quarterback", PLAYER), ("sacker", PLAYER), ("distance", &distance)]).compile(
		"sack_full",
		&[
			Fragment::Slot("quarterback"),
			Fragment::Text(" sacked by "),
			Fragment::Slot("sacker"),
			Fragment::Text(" for "),
			Fragment::Slot("distance"),
		],
	)
});

/// `{quarterback} sacked by and {sacker1} for {distance1} and {sacker2} for {distance2}`
pub static SACK_HALF: Lazy<Grammar> = Lazy::new(|| {
	let distance = distance();
	SlotSet::bind(&[
		("quarterback", PLAYER),
		("sacker1", PLAYER),
		("distance1", &distance),
		("sacker2", PLAYER),
		("distance2", &distance),
	])
	.compile(
		"sack_half",
		&[
			Fragment::Slot("quarterback"),
			Fragment::Text(" sacked by and "),
			Fragment::Slot("sacker1"),
			Fragment::Text(" for "),
			Fragment::Slot("distance1"),
			Fragment::Text(" and "),
			Fragment::Slot("sacker2"),
			Fragment::Text(" for "),
			Fragment::Slot("distance2"),
		],
	)
});

/// `{quarterback} pass [{direction}] [(defended by {defender})] [intended for {receiver}]
/// is intercepted by {intercepted_by} at {yardage} [and returned for {return_distance}] [(tackle by {tackler})]`
pub static INTERCEPTION: Lazy<Grammar> = Lazy::new(|| {
	let distance = distance();
	let direction = pass_direction();
	SlotSet::bind(&[
		("quarterback", PLAYER),
		("direction", &direction),
		("defender", PLAYER),
		("receiver", PLAYER),
		("intercepted_by", PLAYER),
		("yardage", YARDAGE),
		("return_distance", &distance),
		("tackler", PLAYER),
	])
	.optional("direction", true)
	.defended_event("defender")
	.intended_event("receiver")
	.returned_event("return_distance")
	.tackle_event("tackler")
	.compile(
		"interception",
		&[
			Fragment::Slot("quarterback"),
			Fragment::Text(" pass"),
			Fragment::Slot("direction"),
			Fragment::Slot("defender"),
			Fragment::Slot("receiver"),
			Fragment::Text(" is intercepted by "),
			Fragment::Slot("intercepted_by"),
			Fragment::Text(" at "),
			Fragment::Slot("yardage"),
			Fragment::Slot("return_distance"),
			Fragment::Slot("tackler"),
		],
	)
});

/// `{fumbler} fumbles [(forced by {forced_by})], recovered by {recovered_by} at {yardage}
/// [and returned for {return_distance}] [(tackle by {tackler})]`
pub static FUMBLE: Lazy<Grammar> = Lazy::new(|| {
	let distance = distance();
	SlotSet::bind(&[
		("fumbler", PLAYER),
		("forced_by", PLAYER),
		("recovered_by", PLAYER),
		("yardage", YARDAGE),
		("return_distance", &distance),
		("tackler", PLAYER),
	])
	.forced_event("forced_by")
	.returned_event("return_distance")
	.tackle_event("tackler")
	.compile(
		"fumble",
		&[
			Fragment::Slot("fumbler"),
			Fragment::Text(" fumbles"),
			Fragment::Slot("forced_by"),
			Fragment::Text(", recovered by "),
			Fragment::Slot("recovered_by"),
			Fragment::Text(" at "),
			Fragment::Slot("yardage"),
			Fragment::Slot("return_distance"),
			Fragment::Slot("tackler"),
		],
	)
});

pub fn parse_sack_full(description: &str) -> Option<MatchResult<'_>> {
	SACK_FULL.classify(description)
}

pub fn parse_sack_half(description: &str) -> Option<MatchResult<'_>> {
	SACK_HALF.classify(description)
}

pub fn parse_interception(description: &str) -> Option<MatchResult<'_>> {
	INTERCEPTION.classify(description)
}

pub fn parse_fumble(description: &str) -> Option<MatchResult<'_>> {
	FUMBLE.classify(description)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::BTreeMap;

	const INTERCEPTION_FULL: &str = "Aaron Rodgers pass short right (defended by Jaylon Johnson) intended for Davante Adams is intercepted by Eddie Jackson at CHI-10 and returned for 45 yards";

	#[test]
	fn test_sack_full() {
		let found = parse_sack_full("Aaron Rodgers sacked by Khalil Mack for -10 yards").unwrap();
		let expected = BTreeMap::from([("quarterback", Some("Aaron Rodgers")), ("sacker", Some("Khalil Mack")), ("distance", Some("-10 yards"))]);
		assert_eq!(found.to_map(), expected);
	}

	#[test]
	fn test_sack_half() {
		let found = parse_sack_half("Aaron Rodgers sacked by and Khalil Mack for -10 yards and Akiem Hicks for -10 yards").unwrap();
		let expected = BTreeMap::from([
			("quarterback", Some("Aaron Rodgers")),
			("sacker1", Some("Khalil Mack")),
			("distance1", Some("-10 yards")),
			("sacker2", Some("Akiem Hicks")),
			("distance2", Some("-10 yards")),
		]);
		assert_eq!(found.to_map(), expected);
		assert!(parse_sack_full("Aaron Rodgers sacked by and Khalil Mack for -10 yards and Akiem Hicks for -10 yards").is_none());
	}

	#[test]
	fn test_interception() {
		let description = format!("{INTERCEPTION_FULL} (tackle by Davante Adams)");
		let found = parse_interception(&description).unwrap();
		let expected = BTreeMap::from([
			("quarterback", Some("Aaron Rodgers")),
			("direction", Some("short right")),
			("defender", Some("Jaylon Johnson")),
			("receiver", Some("Davante Adams")),
			("intercepted_by", Some("Eddie Jackson")),
			("yardage", Some("CHI-10")),
			("return_distance", Some("45 yards")),
			("tackler", Some("Davante Adams")),
		]);
		assert_eq!(found.to_map(), expected);
	}

	#[test]
	fn test_interception_no_tackle() {
		let found = parse_interception(INTERCEPTION_FULL).unwrap();
		assert_eq!(found.get("return_distance"), Some("45 yards"));
		assert_eq!(found.get("tackler"), None);
	}

	#[test]
	fn test_interception_no_return() {
		let found =
			parse_interception("Aaron Rodgers pass short right (defended by Jaylon Johnson) intended for Davante Adams is intercepted by Eddie Jackson at CHI-10")
				.unwrap();
		assert_eq!(found.get("yardage"), Some("CHI-10"));
		assert_eq!(found.get("return_distance"), None);
	}

	#[test]
	fn test_interception_no_receiver() {
		let found = parse_interception("Aaron Rodgers pass short right (defended by Jaylon Johnson) is intercepted by Eddie Jackson at CHI-10").unwrap();
		assert_eq!(found.get("defender"), Some("Jaylon Johnson"));
		assert_eq!(found.get("receiver"), None);
	}

	#[test]
	fn test_interception_no_defender() {
		let found = parse_interception("Aaron Rodgers pass short right intended for Davante Adams is intercepted by Eddie Jackson at CHI-10").unwrap();
		assert_eq!(found.get("defender"), None);
		assert_eq!(found.get("receiver"), Some("Davante Adams"));
	}

	#[test]
	fn test_interception_bare() {
		let found = parse_interception("Aaron Rodgers pass is intercepted by Eddie Jackson at 50").unwrap();
		let expected = BTreeMap::from([
			("quarterback", Some("Aaron Rodgers")),
			("direction", None),
			("defender", None),
			("receiver", None),
			("intercepted_by", Some("Eddie Jackson")),
			("yardage", Some("50")),
			("return_distance", None),
			("tackler", None),
		]);
		assert_eq!(found.to_map(), expected);
	}

	#[test]
	fn test_fumble() {
		let found = parse_fumble(
			"Aaron Rodgers fumbles (forced by Khalil Mack), recovered by Akiem Hicks at CHI-10 and returned for -10 yards (tackle by Davante Adams)",
		)
		.unwrap();
		let expected = BTreeMap::from([
			("fumbler", Some("Aaron Rodgers")),
			("forced_by", Some("Khalil Mack")),
			("recovered_by", Some("Akiem Hicks")),
			("yardage", Some("CHI-10")),
			("return_distance", Some("-10 yards")),
			("tackler", Some("Davante Adams")),
		]);
		assert_eq!(found.to_map(), expected);
	}

	#[test]
	fn test_fumble_without_optional_clauses() {
		let found = parse_fumble("Aaron Rodgers fumbles, recovered by Akiem Hicks at CHI-10").unwrap();
		assert_eq!(found.get("forced_by"), None);
		assert_eq!(found.get("recovered_by"), Some("Akiem Hicks"));
		assert_eq!(found.get("return_distance"), None);
		assert_eq!(found.get("tackler"), None);
	}
}
