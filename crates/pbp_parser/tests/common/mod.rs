#![allow(dead_code)]

//! Example sentences for every grammar, generated from the full cartesian
//! product of each grammar's clause choices. Every example carries the slot
//! values its grammar should extract from it.

use pbp_parser::grammar::components::{KICK_STATUSES, PASS_DIRECTIONS, PENALTY_RESPONSES, RUN_DIRECTIONS};
use pbp_parser::grammar::Grammar;
use pbp_parser::parsers::{defense, misc};
use pbp_parser::PlaySubtype;
use std::collections::BTreeMap;

pub type Slots = BTreeMap<&'static str, Option<&'static str>>;

#[derive(Debug, Clone)]
pub struct Example {
	pub text: String,
	pub slots: Slots,
}

#[derive(Debug, Clone)]
struct Choice {
	text: String,
	slots: Vec<(&'static str, Option<&'static str>)>,
}

const DISTANCES: [&str; 4] = ["no gain", "1 yard", "-3 yards", "20 yards"];
const KICK_DISTANCES: [&str; 2] = ["65 yards", "9 yards"];
const FIELD_GOAL_DISTANCES: [&str; 2] = ["43 yard", "51 yards"];
const SACK_DISTANCES: [&str; 3] = ["-10 yards", "-1 yard", "no gain"];
const YARDAGES: [&str; 3] = ["CHI-10", "GB-1", "50"];
const TACKLERS: [&str; 2] = ["Aaron Donald", "Aaron Donald and Jalen Ramsey"];

fn lit(text: &str) -> Vec<Choice> {
	vec![Choice {
		text: text.to_string(),
		slots: Vec::new(),
	}]
}

fn slot(name: &'static str, values: &[&'static str]) -> Vec<Choice> {
	values
		.iter()
		.map(|&value| Choice {
			text: value.to_string(),
			slots: vec![(name, Some(value))],
		})
		.collect()
}

/// Either the clause is left out, or it is written once per value between
/// `prefix` and `suffix`.
fn optional(name: &'static str, prefix: &str, suffix: &str, values: &[&'static str]) -> Vec<Choice> {
	let mut choices = vec![Choice {
		text: String::new(),
		slots: vec![(name, None)],
	}];
	choices.extend(values.iter().map(|&value| Choice {
		text: format!("{prefix}{value}{suffix}"),
		slots: vec![(name, Some(value))],
	}));
	choices
}

fn tackle() -> Vec<Choice> {
	optional("tackler", " (tackle by ", ")", &TACKLERS)
}

fn product(parts: Vec<Vec<Choice>>) -> Vec<Example> {
	let seed = vec![Example {
		text: String::new(),
		slots: Slots::new(),
	}];
	parts.into_iter().fold(seed, |examples, choices| {
		examples
			.iter()
			.flat_map(|example| {
				choices.iter().map(move |choice| {
					let mut next = example.clone();
					next.text.push_str(&choice.text);
					next.slots.extend(choice.slots.iter().copied());
					next
				})
			})
			.collect()
	})
}

fn kickoff(tail: Vec<Vec<Choice>>) -> Vec<Example> {
	let mut parts = vec![
		slot("kicker", &["Robbie Gould"]),
		lit(" kicks off "),
		slot("kick_distance", &KICK_DISTANCES),
		lit(", "),
	];
	parts.extend(tail);
	product(parts)
}

fn punt(tail: Vec<Vec<Choice>>) -> Vec<Example> {
	let mut parts = vec![slot("punter", &["Pat O'Donnell"]), lit(" punts "), slot("punt_distance", &["45 yards", "-2 yards"])];
	parts.extend(tail);
	product(parts)
}

pub fn examples(subtype: PlaySubtype) -> Vec<Example> {
	match subtype {
		PlaySubtype::Timeout => product(vec![
			lit("Timeout "),
			slot("number", &["#1", "#2", "#3"]),
			lit(" by "),
			slot("team", &["Chicago Bears", "Green Bay Packers"]),
		]),
		PlaySubtype::Spike => product(vec![slot("player", &["Justin Fields", "Mitchell Trubisky"]), lit(" spiked the ball")]),
		PlaySubtype::Kneel => product(vec![
			slot("player", &["Justin Fields"]),
			lit(" kneels"),
			optional("distance", " for ", "", &["-1 yards", "-2 yards"]),
		]),
		PlaySubtype::Run => product(vec![
			slot("runner", &["David Montgomery", "Justin Fields"]),
			lit(" "),
			slot("direction", &RUN_DIRECTIONS),
			lit(" for "),
			slot("distance", &DISTANCES),
			tackle(),
		]),
		PlaySubtype::RunNoDirection => product(vec![
			slot("runner", &["David Montgomery", "Khalil Herbert"]),
			lit(" for "),
			slot("distance", &DISTANCES),
			tackle(),
		]),
		PlaySubtype::PassComplete => product(vec![
			slot("quarterback", &["Justin Fields"]),
			lit(" pass complete"),
			optional("direction", " ", "", &PASS_DIRECTIONS),
			lit(" to "),
			slot("receiver", &["Allen Robinson"]),
			lit(" for "),
			slot("distance", &DISTANCES),
			tackle(),
		]),
		PlaySubtype::PassIncomplete => product(vec![
			slot("quarterback", &["Aaron Rodgers"]),
			lit(" pass incomplete"),
			optional("direction", " ", "", &PASS_DIRECTIONS),
			optional("receiver", " intended for ", "", &["Davante Adams"]),
			optional("defender", " (defended by ", ")", &["Jaylon Johnson"]),
		]),
		PlaySubtype::Interception => product(vec![
			slot("quarterback", &["Aaron Rodgers"]),
			lit(" pass"),
			optional("direction", " ", "", &PASS_DIRECTIONS),
			optional("defender", " (defended by ", ")", &["Jaylon Johnson"]),
			optional("receiver", " intended for ", "", &["Davante Adams"]),
			lit(" is intercepted by "),
			slot("intercepted_by", &["Eddie Jackson"]),
			lit(" at "),
			slot("yardage", &YARDAGES),
			optional("return_distance", " and returned for ", "", &["45 yards", "no gain"]),
			tackle(),
		]),
		PlaySubtype::SackFull => product(vec![
			slot("quarterback", &["Aaron Rodgers"]),
			lit(" sacked by "),
			slot("sacker", &["Khalil Mack"]),
			lit(" for "),
			slot("distance", &SACK_DISTANCES),
		]),
		PlaySubtype::SackHalf => product(vec![
			slot("quarterback", &["Aaron Rodgers"]),
			lit(" sacked by and "),
			slot("sacker1", &["Khalil Mack"]),
			lit(" for "),
			slot("distance1", &SACK_DISTANCES),
			lit(" and "),
			slot("sacker2", &["Akiem Hicks"]),
			lit(" for "),
			slot("distance2", &SACK_DISTANCES),
		]),
		PlaySubtype::KickoffReturned => kickoff(vec![
			lit("returned by "),
			slot("returner", &["Cordarrelle Patterson"]),
			lit(" for "),
			slot("return_distance", &DISTANCES),
			tackle(),
		]),
		PlaySubtype::KickoffOutOfBounds => kickoff(vec![lit("out of bounds")]),
		PlaySubtype::KickoffTouchback => kickoff(vec![lit("touchback")]),
		PlaySubtype::KickoffOnside => {
			let returned = vec![
				Choice {
					text: String::new(),
					slots: vec![("returner", None), ("return_distance", None)],
				},
				Choice {
					text: ", returned by Cordarrelle Patterson for 5 yards".to_string(),
					slots: vec![("returner", Some("Cordarrelle Patterson")), ("return_distance", Some("5 yards"))],
				},
			];
			product(vec![
				slot("kicker", &["Robbie Gould"]),
				lit(" kicks onside "),
				slot("kick_distance", &KICK_DISTANCES),
				returned,
				tackle(),
			])
		}
		PlaySubtype::FieldGoal => product(vec![
			slot("kicker", &["Robbie Gould"]),
			lit(" "),
			slot("distance", &FIELD_GOAL_DISTANCES),
			lit(" field goal "),
			slot("status", &KICK_STATUSES),
			optional("blocker", ", blocked by ", "", &["Akiem Hicks"]),
		]),
		PlaySubtype::ExtraPoint => product(vec![
			slot("kicker", &["Robbie Gould"]),
			lit(" kicks extra point "),
			slot("status", &KICK_STATUSES),
			optional("blocker", ", blocked by ", "", &["Akiem Hicks"]),
		]),
		PlaySubtype::PuntReturned => punt(vec![
			lit(", returned by "),
			slot("returner", &["Cordarrelle Patterson"]),
			lit(" for "),
			slot("return_distance", &DISTANCES),
			tackle(),
		]),
		PlaySubtype::PuntDowned => punt(vec![lit(" downed by "), slot("downed_by", &["Cordarrelle Patterson"])]),
		PlaySubtype::PuntFairCatch => punt(vec![
			lit(", fair catch by "),
			slot("returner", &["Cordarrelle Patterson"]),
			lit(" at "),
			slot("yardage", &YARDAGES),
		]),
		PlaySubtype::PuntTouchback => punt(vec![lit(", touchback")]),
		PlaySubtype::PuntOutOfBounds => punt(vec![lit(" out of bounds")]),
		PlaySubtype::PuntBlocked => product(vec![
			slot("punter", &["Pat O'Donnell"]),
			lit(" punts blocked by "),
			slot("blocker", &["Miles Killebrew"]),
		]),
		PlaySubtype::PuntRecovered => punt(vec![
			lit(", recovered by "),
			slot("recoverer", &["Cordarrelle Patterson"]),
			lit(" at "),
			slot("yardage", &YARDAGES),
		]),
	}
}

pub fn fumble_examples() -> Vec<Example> {
	product(vec![
		slot("fumbler", &["Aaron Rodgers"]),
		lit(" fumbles"),
		optional("forced_by", " (forced by ", ")", &["Khalil Mack"]),
		lit(", recovered by "),
		slot("recovered_by", &["Akiem Hicks"]),
		lit(" at "),
		slot("yardage", &YARDAGES),
		optional("return_distance", " and returned for ", "", &["-10 yards", "no gain"]),
		tackle(),
	])
}

pub fn penalty_examples() -> Vec<Example> {
	product(vec![
		lit("Penalty on "),
		slot("player", &["Sam Hubbard"]),
		lit(": "),
		slot("penalty", &["Roughing the Passer", "Face Mask (15 yards)", "Ineligible Downfield/Kick"]),
		lit(", "),
		slot("distance", &["15 yards", "5 yards"]),
		optional("response", " (", ")", &PENALTY_RESPONSES),
		optional("no_play", " (", ")", &["no play"]),
	])
}

/// Every grammar with its examples: primary plays in dispatch order, then
/// the fumble and penalty overlays.
pub fn families() -> Vec<(&'static Grammar, Vec<Example>)> {
	let mut families: Vec<(&'static Grammar, Vec<Example>)> =
		PlaySubtype::PRECEDENCE.into_iter().map(|subtype| (subtype.grammar(), examples(subtype))).collect();
	families.push((&*defense::FUMBLE, fumble_examples()));
	families.push((&*misc::PENALTY_GRAMMAR, penalty_examples()));
	families
}
