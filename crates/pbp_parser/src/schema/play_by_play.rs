use crate::schema::{FieldPosition, KickType, PassDirection, PenaltyResponse, PlayType, PuntType, RunDirection};
use serde::{Deserialize, Serialize};

/// Caller supplied columns. The parser never reads them, it only carries
/// them into the output record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayContext {
	pub game_id: Option<String>,
	pub season: Option<String>,
	pub week: Option<String>,
	pub down: Option<String>,
	pub home_team: Option<String>,
	pub away_team: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunPlay {
	pub runner: String,
	/// `None` when the description has no direction clause.
	pub direction: Option<RunDirection>,
	pub distance: i32,
	pub tacklers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SackCredit {
	pub sacker: String,
	pub distance: i32,
}

/// Completions, incompletions, interceptions and sacks all land here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassPlay {
	pub quarterback: String,
	pub receiver: Option<String>,
	pub complete: bool,
	pub direction: Option<PassDirection>,
	pub distance: Option<i32>,
	pub defended_by: Option<String>,
	pub intercepted: bool,
	pub intercepted_by: Option<String>,
	pub interception_yardage: Option<FieldPosition>,
	pub return_distance: Option<i32>,
	pub sacked: bool,
	pub sacks: Vec<SackCredit>,
	pub tacklers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KickoffPlay {
	pub kicker: String,
	pub kick_type: KickType,
	pub kick_distance: i32,
	pub returner: Option<String>,
	pub return_distance: Option<i32>,
	pub tacklers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuntPlay {
	pub punter: String,
	pub punt_type: PuntType,
	/// `None` for a blocked punt.
	pub punt_distance: Option<i32>,
	pub returner: Option<String>,
	pub return_distance: Option<i32>,
	/// Where a fair catch or a recovery happened.
	pub yardage: Option<FieldPosition>,
	pub downed_by: Option<String>,
	pub recovered_by: Option<String>,
	pub blocked_by: Option<String>,
	pub tacklers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldGoalPlay {
	pub kicker: String,
	pub distance: i32,
	pub made: bool,
	pub blocked: bool,
	pub blocked_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraPointPlay {
	pub kicker: String,
	pub made: bool,
	pub blocked: bool,
	pub blocked_by: Option<String>,
}

/// Timeouts, spikes and kneels. Exactly one of the three flags is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameManagementPlay {
	pub timeout: bool,
	pub spike: bool,
	pub kneel: bool,
	pub player: Option<String>,
	pub team: Option<String>,
	pub timeout_number: Option<u8>,
	pub distance: Option<i32>,
}

/// The primary play, tagged by `play_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "play_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayDetails {
	Run(RunPlay),
	Pass(PassPlay),
	Kickoff(KickoffPlay),
	Punt(PuntPlay),
	FieldGoal(FieldGoalPlay),
	ExtraPoint(ExtraPointPlay),
	GameManagement(GameManagementPlay),
	/// Only penalties were found. They live in the record's penalty overlay.
	Penalty,
}

impl PlayDetails {
	pub const fn play_type(&self) -> PlayType {
		match self {
			Self::Run(_) => PlayType::Run,
			Self::Pass(_) => PlayType::Pass,
			Self::Kickoff(_) => PlayType::Kickoff,
			Self::Punt(_) => PlayType::Punt,
			Self::FieldGoal(_) => PlayType::FieldGoal,
			Self::ExtraPoint(_) => PlayType::ExtraPoint,
			Self::GameManagement(_) => PlayType::GameManagement,
			Self::Penalty => PlayType::Penalty,
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FumbleOverlay {
	pub fumble: bool,
	pub fumbler: Option<String>,
	pub forced_by: Option<String>,
	pub recovered_by: Option<String>,
	pub recovery_yardage: Option<FieldPosition>,
	pub return_distance: Option<i32>,
	/// Who brought down the recovering player. The primary play keeps its own tacklers.
	pub tacklers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Penalty {
	pub player: String,
	pub penalty_type: String,
	/// Yards as written.
	pub distance: i32,
	/// Yards actually walked off. Offsetting penalties enforce nothing.
	pub enforced_distance: i32,
	pub response: Option<PenaltyResponse>,
	pub no_play: bool,
}

/// Every penalty found after the primary play, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyOverlay {
	pub penalty: bool,
	pub penalties: Vec<Penalty>,
}

impl PenaltyOverlay {
	pub fn new(penalties: Vec<Penalty>) -> Self {
		Self {
			penalty: !penalties.is_empty(),
			penalties,
		}
	}

	pub fn penalty_on(&self) -> Vec<&str> {
		self.penalties.iter().map(|p| p.player.as_str()).collect()
	}

	pub fn penalty_types(&self) -> Vec<&str> {
		self.penalties.iter().map(|p| p.penalty_type.as_str()).collect()
	}

	// The collapsed accessors below report the last penalty, the way a single
	// scalar column would.

	pub fn last_response(&self) -> Option<PenaltyResponse> {
		self.penalties.last().and_then(|p| p.response)
	}

	pub fn last_enforced_distance(&self) -> Option<i32> {
		self.penalties.last().map(|p| p.enforced_distance)
	}

	pub fn no_play(&self) -> bool {
		self.penalties.last().is_some_and(|p| p.no_play)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayRecord {
	pub context: PlayContext,
	pub description: String,
	#[serde(flatten)]
	pub details: PlayDetails,
	pub fumble: FumbleOverlay,
	pub penalty: PenaltyOverlay,
}

impl PlayRecord {
	pub const fn play_type(&self) -> PlayType {
		self.details.play_type()
	}
}

/// Dispatcher outcome for one description. Text that matches no grammar is
/// reported, not raised, so a batch can log it and move on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ParsedPlay {
	Classified(PlayRecord),
	Unclassified {
		context: PlayContext,
		description: String,
		/// A fumble sentence with no play before it is still extracted.
		#[serde(default)]
		fumble: FumbleOverlay,
	},
}

impl ParsedPlay {
	pub const fn record(&self) -> Option<&PlayRecord> {
		match self {
			Self::Classified(record) => Some(record),
			Self::Unclassified { .. } => None,
		}
	}

	pub fn into_record(self) -> Option<PlayRecord> {
		match self {
			Self::Classified(record) => Some(record),
			Self::Unclassified { .. } => None,
		}
	}

	pub const fn is_classified(&self) -> bool {
		matches!(self, Self::Classified(_))
	}

	pub fn description(&self) -> &str {
		match self {
			Self::Classified(record) => &record.description,
			Self::Unclassified { description, .. } => description,
		}
	}
}
