//! Turns one play description into a [`ParsedPlay`].
//!
//! The primary grammars are tried in [`PlaySubtype::PRECEDENCE`] order and the
//! first match wins. They only see the text before the first fumble or penalty
//! sentence. Whatever text follows the match is then scanned for a fumble and
//! for any number of penalties.

use crate::error::{PbpError, Result};
use crate::grammar::MatchResult;
use crate::parsers::defense::parse_fumble;
use crate::parsers::misc::{parse_penalties, parse_penalty};
use crate::parsers::play_type::PlaySubtype;
use crate::schema::{
	parse_distance, ExtraPointPlay, FieldGoalPlay, FieldPosition, FumbleOverlay, GameManagementPlay, KickStatus, KickType, KickoffPlay, ParsedPlay, PassDirection,
	PassPlay, Penalty, PenaltyOverlay, PenaltyResponse, PlayContext, PlayDetails, PlayRecord, PuntPlay, PuntType, RunDirection, RunPlay, SackCredit,
};
use tracing::{debug, trace};

pub fn parse_play(description: &str, context: PlayContext) -> Result<ParsedPlay> {
	let Some((subtype, found)) = PlaySubtype::first_match(primary_text(description)) else {
		let fumble = scan_fumble(description)?;
		let penalty = scan_penalties(description)?;
		if !penalty.penalty {
			trace!(description, fumble = fumble.fumble, "no grammar matched");
			return Ok(ParsedPlay::Unclassified {
				context,
				description: description.to_string(),
				fumble,
			});
		}
		debug!(penalties = penalty.penalties.len(), "penalty only play");
		return Ok(ParsedPlay::Classified(PlayRecord {
			context,
			description: description.to_string(),
			details: PlayDetails::Penalty,
			fumble,
			penalty,
		}));
	};

	debug!(subtype = subtype.name(), "classified play");
	let details = play_details(subtype, &found, description)?;

	let (fumble, penalty) = if subtype.is_administrative() {
		(FumbleOverlay::default(), PenaltyOverlay::default())
	} else {
		// `found` came from a prefix of `description`, so its offsets hold here too.
		let remainder = &description[found.end()..];
		(scan_fumble(remainder)?, scan_penalties(remainder)?)
	};

	Ok(ParsedPlay::Classified(PlayRecord {
		context,
		description: description.to_string(),
		details,
		fumble,
		penalty,
	}))
}

/// The text before the first `. ` that opens a fumble or penalty sentence.
/// A primary grammar ending on a player slot would otherwise read on into it.
fn primary_text(description: &str) -> &str {
	description
		.match_indices(". ")
		.map(|(index, _)| index)
		.find(|&index| opens_overlay(&description[index + 2..]))
		.map_or(description, |index| &description[..index])
}

fn opens_overlay(text: &str) -> bool {
	parse_fumble(text).is_some_and(|found| found.start() == 0) || parse_penalty(text).is_some_and(|found| found.start() == 0)
}

/// Looks for a fumble anywhere in `remainder`. No fumble is an empty overlay.
pub fn scan_fumble(remainder: &str) -> Result<FumbleOverlay> {
	let Some(found) = parse_fumble(remainder) else {
		return Ok(FumbleOverlay::default());
	};

	let overlay = FumbleOverlay {
		fumble: true,
		fumbler: Some(found.require("fumbler")?.to_string()),
		forced_by: owned(&found, "forced_by"),
		recovered_by: Some(found.require("recovered_by")?.to_string()),
		recovery_yardage: Some(found.require("yardage")?.parse()?),
		return_distance: optional_distance(&found, "return_distance")?,
		tacklers: tacklers(&found, "tackler"),
	};
	debug!(fumbler = overlay.fumbler.as_deref(), recovered_by = overlay.recovered_by.as_deref(), "fumble overlay");
	Ok(overlay)
}

/// Every penalty in `remainder`, in the order they appear.
pub fn scan_penalties(remainder: &str) -> Result<PenaltyOverlay> {
	let penalties = parse_penalties(remainder).map(|found| penalty_record(&found)).collect::<Result<Vec<_>>>()?;
	if !penalties.is_empty() {
		debug!(count = penalties.len(), "penalty overlay");
	}
	Ok(PenaltyOverlay::new(penalties))
}

fn penalty_record(found: &MatchResult<'_>) -> Result<Penalty> {
	let distance = parse_distance(found.require("distance")?)?;
	let response = found.get("response").map(str::parse::<PenaltyResponse>).transpose()?;
	let enforced_distance = if response == Some(PenaltyResponse::Offset) { 0 } else { distance };

	Ok(Penalty {
		player: found.require("player")?.to_string(),
		penalty_type: found.require("penalty")?.to_string(),
		distance,
		enforced_distance,
		response,
		no_play: found.get("no_play").is_some(),
	})
}

fn play_details(subtype: PlaySubtype, found: &MatchResult<'_>, description: &str) -> Result<PlayDetails> {
	let details = match subtype {
		PlaySubtype::Timeout => PlayDetails::GameManagement(GameManagementPlay {
			timeout: true,
			team: Some(found.require("team")?.to_string()),
			timeout_number: Some(timeout_number(found.require("number")?)?),
			..GameManagementPlay::default()
		}),
		PlaySubtype::Spike => PlayDetails::GameManagement(GameManagementPlay {
			spike: true,
			player: Some(found.require("player")?.to_string()),
			..GameManagementPlay::default()
		}),
		PlaySubtype::Kneel => PlayDetails::GameManagement(GameManagementPlay {
			kneel: true,
			player: Some(found.require("player")?.to_string()),
			distance: optional_distance(found, "distance")?,
			..GameManagementPlay::default()
		}),
		PlaySubtype::Run | PlaySubtype::RunNoDirection => PlayDetails::Run(RunPlay {
			runner: found.require("runner")?.to_string(),
			direction: found.get("direction").map(str::parse::<RunDirection>).transpose()?,
			distance: parse_distance(found.require("distance")?)?,
			tacklers: tacklers(found, "tackler"),
		}),
		PlaySubtype::PassComplete => PlayDetails::Pass(PassPlay {
			quarterback: found.require("quarterback")?.to_string(),
			receiver: Some(found.require("receiver")?.to_string()),
			complete: true,
			direction: pass_direction(found)?,
			distance: Some(parse_distance(found.require("distance")?)?),
			tacklers: tacklers(found, "tackler"),
			..PassPlay::default()
		}),
		PlaySubtype::PassIncomplete => PlayDetails::Pass(PassPlay {
			quarterback: found.require("quarterback")?.to_string(),
			receiver: owned(found, "receiver"),
			direction: pass_direction(found)?,
			defended_by: owned(found, "defender"),
			..PassPlay::default()
		}),
		PlaySubtype::Interception => PlayDetails::Pass(PassPlay {
			quarterback: found.require("quarterback")?.to_string(),
			receiver: owned(found, "receiver"),
			direction: pass_direction(found)?,
			defended_by: owned(found, "defender"),
			intercepted: true,
			intercepted_by: Some(found.require("intercepted_by")?.to_string()),
			interception_yardage: Some(found.require("yardage")?.parse()?),
			return_distance: optional_distance(found, "return_distance")?,
			tacklers: tacklers(found, "tackler"),
			..PassPlay::default()
		}),
		PlaySubtype::SackFull => sack(found, &[("sacker", "distance")])?,
		PlaySubtype::SackHalf => sack(found, &[("sacker1", "distance1"), ("sacker2", "distance2")])?,
		PlaySubtype::KickoffReturned => kickoff(found, KickType::Returned)?,
		PlaySubtype::KickoffOutOfBounds => kickoff(found, KickType::OutOfBounds)?,
		PlaySubtype::KickoffTouchback => kickoff(found, KickType::Touchback)?,
		PlaySubtype::KickoffOnside => kickoff(found, KickType::Onside)?,
		PlaySubtype::FieldGoal => {
			let blocked_by = owned(found, "blocker");
			PlayDetails::FieldGoal(FieldGoalPlay {
				kicker: found.require("kicker")?.to_string(),
				distance: parse_distance(found.require("distance")?)?,
				made: kick_made(found)?,
				blocked: blocked_by.is_some() || description.contains("blocked"),
				blocked_by,
			})
		}
		PlaySubtype::ExtraPoint => {
			let blocked_by = owned(found, "blocker");
			PlayDetails::ExtraPoint(ExtraPointPlay {
				kicker: found.require("kicker")?.to_string(),
				made: kick_made(found)?,
				blocked: blocked_by.is_some() || description.contains("blocked"),
				blocked_by,
			})
		}
		PlaySubtype::PuntReturned => punt(found, PuntType::Returned)?,
		PlaySubtype::PuntDowned => punt(found, PuntType::Downed)?,
		PlaySubtype::PuntFairCatch => punt(found, PuntType::FairCaught)?,
		PlaySubtype::PuntTouchback => punt(found, PuntType::Touchback)?,
		PlaySubtype::PuntOutOfBounds => punt(found, PuntType::OutOfBounds)?,
		PlaySubtype::PuntBlocked => punt(found, PuntType::Blocked)?,
		PlaySubtype::PuntRecovered => punt(found, PuntType::Recovered)?,
	};
	Ok(details)
}

// The pass distance of a sack is the first credited distance.
fn sack(found: &MatchResult<'_>, credits: &[(&str, &str)]) -> Result<PlayDetails> {
	let sacks = credits
		.iter()
		.map(|&(sacker, distance)| -> Result<SackCredit> {
			Ok(SackCredit {
				sacker: found.require(sacker)?.to_string(),
				distance: parse_distance(found.require(distance)?)?,
			})
		})
		.collect::<Result<Vec<_>>>()?;

	Ok(PlayDetails::Pass(PassPlay {
		quarterback: found.require("quarterback")?.to_string(),
		distance: sacks.first().map(|credit| credit.distance),
		sacked: true,
		tacklers: sacks.iter().map(|credit| credit.sacker.clone()).collect(),
		sacks,
		..PassPlay::default()
	}))
}

fn kickoff(found: &MatchResult<'_>, kick_type: KickType) -> Result<PlayDetails> {
	Ok(PlayDetails::Kickoff(KickoffPlay {
		kicker: found.require("kicker")?.to_string(),
		kick_type,
		kick_distance: parse_distance(found.require("kick_distance")?)?,
		returner: owned(found, "returner"),
		return_distance: optional_distance(found, "return_distance")?,
		tacklers: tacklers(found, "tackler"),
	}))
}

// Slots a punt grammar doesn't declare come back as `None`.
fn punt(found: &MatchResult<'_>, punt_type: PuntType) -> Result<PlayDetails> {
	Ok(PlayDetails::Punt(PuntPlay {
		punter: found.require("punter")?.to_string(),
		punt_type,
		punt_distance: optional_distance(found, "punt_distance")?,
		returner: owned(found, "returner"),
		return_distance: optional_distance(found, "return_distance")?,
		yardage: found.get("yardage").map(str::parse::<FieldPosition>).transpose()?,
		downed_by: owned(found, "downed_by"),
		recovered_by: owned(found, "recoverer"),
		blocked_by: owned(found, "blocker"),
		tacklers: tacklers(found, "tackler"),
	}))
}

fn pass_direction(found: &MatchResult<'_>) -> Result<Option<PassDirection>> {
	found.get("direction").map(str::parse).transpose()
}

fn kick_made(found: &MatchResult<'_>) -> Result<bool> {
	Ok(found.require("status")?.parse::<KickStatus>()?.is_good())
}

// Ex: #2
fn timeout_number(text: &str) -> Result<u8> {
	text.strip_prefix('#')
		.and_then(|number| number.parse().ok())
		.ok_or_else(|| PbpError::invalid_timeout_number(text))
}

fn optional_distance(found: &MatchResult<'_>, slot: &str) -> Result<Option<i32>> {
	found.get(slot).map(parse_distance).transpose()
}

fn owned(found: &MatchResult<'_>, slot: &str) -> Option<String> {
	found.get(slot).map(str::to_string)
}

// `(tackle by A and B)` credits both players.
fn tacklers(found: &MatchResult<'_>, slot: &str) -> Vec<String> {
	found
		.get(slot)
		.map(|tacklers| tacklers.split(" and ").map(str::to_string).collect())
		.unwrap_or_default()
}
