use crate::error::{PbpError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Signed yards from distance text: `no gain` is 0, otherwise the integer
/// in front of `yard` or `yards`.
pub fn parse_distance(text: &str) -> Result<i32> {
	if text == "no gain" {
		return Ok(0);
	}

	let mut tokens = text.split_whitespace();
	match (tokens.next(), tokens.next(), tokens.next()) {
		(Some(value), Some("yard" | "yards"), None) => value.parse().map_err(|_| PbpError::unparseable_distance(text)),
		_ => Err(PbpError::unparseable_distance(text)),
	}
}

/// Where on the field something happened. Midfield has no team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPosition {
	pub team: Option<String>,
	pub yard_line: u8,
}

impl FieldPosition {
	pub const MIDFIELD: u8 = 50;
}

impl FromStr for FieldPosition {
	type Err = PbpError;

	// Ex: CHI-10, 50
	fn from_str(s: &str) -> Result<Self> {
		if s == "50" {
			return Ok(Self {
				team: None,
				yard_line: Self::MIDFIELD,
			});
		}

		let (team, yard_line) = s.split_once('-').ok_or_else(|| PbpError::invalid_field_position(s))?;
		let team_is_valid = (2..=3).contains(&team.len()) && team.chars().all(|c| c.is_ascii_uppercase());
		let yard_line: u8 = yard_line.parse().map_err(|_| PbpError::invalid_field_position(s))?;
		if !team_is_valid || yard_line == 0 || yard_line > Self::MIDFIELD {
			return Err(PbpError::invalid_field_position(s));
		}

		Ok(Self {
			team: Some(team.to_string()),
			yard_line,
		})
	}
}

impl fmt::Display for FieldPosition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.team {
			Some(team) => write!(f, "{team}-{}", self.yard_line),
			None => write!(f, "{}", self.yard_line),
		}
	}
}
