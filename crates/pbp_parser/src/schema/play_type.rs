use crate::error::PbpError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top level tag of a classified play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayType {
	Run,
	Pass,
	Kickoff,
	Punt,
	FieldGoal,
	ExtraPoint,
	GameManagement,
	Penalty,
}

impl PlayType {
	pub const ALL: [Self; 8] = [
		Self::Run,
		Self::Pass,
		Self::Kickoff,
		Self::Punt,
		Self::FieldGoal,
		Self::ExtraPoint,
		Self::GameManagement,
		Self::Penalty,
	];

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Run => "RUN",
			Self::Pass => "PASS",
			Self::Kickoff => "KICKOFF",
			Self::Punt => "PUNT",
			Self::FieldGoal => "FIELD_GOAL",
			Self::ExtraPoint => "EXTRA_POINT",
			Self::GameManagement => "GAME_MANAGEMENT",
			Self::Penalty => "PENALTY",
		}
	}
}

impl fmt::Display for PlayType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for PlayType {
	type Err = PbpError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|play_type| play_type.as_str() == s)
			.ok_or_else(|| PbpError::unknown_tag("play type", s))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KickType {
	Returned,
	OutOfBounds,
	Touchback,
	Onside,
}

impl fmt::Display for KickType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let tag = match self {
			Self::Returned => "RETURNED",
			Self::OutOfBounds => "OUT_OF_BOUNDS",
			Self::Touchback => "TOUCHBACK",
			Self::Onside => "ONSIDE",
		};
		f.write_str(tag)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PuntType {
	Returned,
	OutOfBounds,
	Touchback,
	Downed,
	FairCaught,
	Blocked,
	Recovered,
}

impl fmt::Display for PuntType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let tag = match self {
			Self::Returned => "RETURNED",
			Self::OutOfBounds => "OUT_OF_BOUNDS",
			Self::Touchback => "TOUCHBACK",
			Self::Downed => "DOWNED",
			Self::FairCaught => "FAIR_CAUGHT",
			Self::Blocked => "BLOCKED",
			Self::Recovered => "RECOVERED",
		};
		f.write_str(tag)
	}
}
