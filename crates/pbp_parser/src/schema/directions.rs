//! Enum tables for the literal words the grammars let through.
//!
//! Every lookup is an explicit table. Text with no entry is an error, never a
//! default: it means a grammar accepts a word the normalizer has not heard of.

use crate::error::{DirectionKind, PbpError};
use crate::grammar::components::{KICK_STATUSES, PASS_DIRECTIONS, PENALTY_RESPONSES, RUN_DIRECTIONS};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunDirection {
	Middle,
	LeftGuard,
	RightGuard,
	LeftTackle,
	RightTackle,
	LeftEnd,
	RightEnd,
	Scrambles,
}

impl RunDirection {
	/// Literal text as written in a description.
	pub const fn literal(self) -> &'static str {
		match self {
			Self::Middle => RUN_DIRECTIONS[0],
			Self::LeftGuard => RUN_DIRECTIONS[1],
			Self::RightGuard => RUN_DIRECTIONS[2],
			Self::LeftTackle => RUN_DIRECTIONS[3],
			Self::RightTackle => RUN_DIRECTIONS[4],
			Self::LeftEnd => RUN_DIRECTIONS[5],
			Self::RightEnd => RUN_DIRECTIONS[6],
			Self::Scrambles => RUN_DIRECTIONS[7],
		}
	}
}

impl FromStr for RunDirection {
	type Err = PbpError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"up the middle" => Ok(Self::Middle),
			"left guard" => Ok(Self::LeftGuard),
			"right guard" => Ok(Self::RightGuard),
			"left tackle" => Ok(Self::LeftTackle),
			"right tackle" => Ok(Self::RightTackle),
			"left end" => Ok(Self::LeftEnd),
			"right end" => Ok(Self::RightEnd),
			"scrambles" => Ok(Self::Scrambles),
			_ => Err(PbpError::unmapped_direction(DirectionKind::Run, s)),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassDirection {
	ShortLeft,
	ShortMiddle,
	ShortRight,
	DeepLeft,
	DeepMiddle,
	DeepRight,
}

impl PassDirection {
	pub const fn literal(self) -> &'static str {
		match self {
			Self::ShortLeft => PASS_DIRECTIONS[0],
			Self::ShortMiddle => PASS_DIRECTIONS[1],
			Self::ShortRight => PASS_DIRECTIONS[2],
			Self::DeepLeft => PASS_DIRECTIONS[3],
			Self::DeepMiddle => PASS_DIRECTIONS[4],
			Self::DeepRight => PASS_DIRECTIONS[5],
		}
	}
}

impl FromStr for PassDirection {
	type Err = PbpError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"short left" => Ok(Self::ShortLeft),
			"short middle" => Ok(Self::ShortMiddle),
			"short right" => Ok(Self::ShortRight),
			"deep left" => Ok(Self::DeepLeft),
			"deep middle" => Ok(Self::DeepMiddle),
			"deep right" => Ok(Self::DeepRight),
			_ => Err(PbpError::unmapped_direction(DirectionKind::Pass, s)),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PenaltyResponse {
	Accepted,
	Declined,
	Offset,
}

impl PenaltyResponse {
	pub const fn literal(self) -> &'static str {
		match self {
			Self::Accepted => PENALTY_RESPONSES[0],
			Self::Declined => PENALTY_RESPONSES[1],
			Self::Offset => PENALTY_RESPONSES[2],
		}
	}
}

impl FromStr for PenaltyResponse {
	type Err = PbpError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"accepted" => Ok(Self::Accepted),
			"declined" => Ok(Self::Declined),
			"offset" => Ok(Self::Offset),
			_ => Err(PbpError::unmapped_response(s)),
		}
	}
}

/// Outcome of a field goal or extra point try.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KickStatus {
	Good,
	NoGood,
}

impl KickStatus {
	pub const fn literal(self) -> &'static str {
		match self {
			Self::Good => KICK_STATUSES[0],
			Self::NoGood => KICK_STATUSES[1],
		}
	}

	pub const fn is_good(self) -> bool {
		matches!(self, Self::Good)
	}
}

impl FromStr for KickStatus {
	type Err = PbpError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"good" => Ok(Self::Good),
			"no good" => Ok(Self::NoGood),
			_ => Err(PbpError::unmapped_kick_status(s)),
		}
	}
}
