use crate::grammar::{Grammar, MatchResult};
use crate::parsers::{defense, misc, pass, run, special_teams};
use crate::schema::PlayType;
use once_cell::sync::Lazy;

/// Every primary play grammar. Penalties and fumbles are overlays and are
/// not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaySubtype {
	Timeout,
	Spike,
	Kneel,
	Run,
	RunNoDirection,
	PassComplete,
	PassIncomplete,
	Interception,
	SackFull,
	SackHalf,
	KickoffReturned,
	KickoffOutOfBounds,
	KickoffTouchback,
	KickoffOnside,
	FieldGoal,
	ExtraPoint,
	PuntReturned,
	PuntDowned,
	PuntFairCatch,
	PuntTouchback,
	PuntOutOfBounds,
	PuntBlocked,
	PuntRecovered,
}

impl PlaySubtype {
	/// Dispatch order. The first grammar that matches wins.
	pub const PRECEDENCE: [Self; 23] = [
		Self::Timeout,
		Self::Spike,
		Self::Kneel,
		Self::Run,
		Self::RunNoDirection,
		Self::PassComplete,
		Self::PassIncomplete,
		Self::Interception,
		Self::SackFull,
		Self::SackHalf,
		Self::KickoffReturned,
		Self::KickoffOutOfBounds,
		Self::KickoffTouchback,
		Self::KickoffOnside,
		Self::FieldGoal,
		Self::ExtraPoint,
		Self::PuntReturned,
		Self::PuntDowned,
		Self::PuntFairCatch,
		Self::PuntTouchback,
		Self::PuntOutOfBounds,
		Self::PuntBlocked,
		Self::PuntRecovered,
	];

	pub fn grammar(self) -> &'static Grammar {
		let grammar: &'static Lazy<Grammar> = match self {
			Self::Timeout => &misc::TIMEOUT,
			Self::Spike => &misc::SPIKE,
			Self::Kneel => &misc::KNEEL,
			Self::Run => &run::RUN,
			Self::RunNoDirection => &run::RUN_NO_DIRECTION,
			Self::PassComplete => &pass::PASS_COMPLETE,
			Self::PassIncomplete => &pass::PASS_INCOMPLETE,
			Self::Interception => &defense::INTERCEPTION,
			Self::SackFull => &defense::SACK_FULL,
			Self::SackHalf => &defense::SACK_HALF,
			Self::KickoffReturned => &special_teams::KICKOFF_RETURNED,
			Self::KickoffOutOfBounds => &special_teams::KICKOFF_OUT_OF_BOUNDS,
			Self::KickoffTouchback => &special_teams::KICKOFF_TOUCHBACK,
			Self::KickoffOnside => &special_teams::KICKOFF_ONSIDE,
			Self::FieldGoal => &special_teams::FIELD_GOAL,
			Self::ExtraPoint => &special_teams::EXTRA_POINT,
			Self::PuntReturned => &special_teams::PUNT_RETURNED,
			Self::PuntDowned => &special_teams::PUNT_DOWNED,
			Self::PuntFairCatch => &special_teams::PUNT_FAIR_CATCH,
			Self::PuntTouchback => &special_teams::PUNT_TOUCHBACK,
			Self::PuntOutOfBounds => &special_teams::PUNT_OUT_OF_BOUNDS,
			Self::PuntBlocked => &special_teams::PUNT_BLOCKED,
			Self::PuntRecovered => &special_teams::PUNT_RECOVERED,
		};
		Lazy::force(grammar)
	}

	pub fn classify(self, description: &str) -> Option<MatchResult<'_>> {
		self.grammar().classify(description)
	}

	pub fn name(self) -> &'static str {
		self.grammar().name()
	}

	pub const fn play_type(self) -> PlayType {
		match self {
			Self::Timeout | Self::Spike | Self::Kneel => PlayType::GameManagement,
			Self::Run | Self::RunNoDirection => PlayType::Run,
			Self::PassComplete | Self::PassIncomplete | Self::Interception | Self::SackFull | Self::SackHalf => PlayType::Pass,
			Self::KickoffReturned | Self::KickoffOutOfBounds | Self::KickoffTouchback | Self::KickoffOnside => PlayType::Kickoff,
			Self::FieldGoal => PlayType::FieldGoal,
			Self::ExtraPoint => PlayType::ExtraPoint,
			Self::PuntReturned
			| Self::PuntDowned
			| Self::PuntFairCatch
			| Self::PuntTouchback
			| Self::PuntOutOfBounds
			| Self::PuntBlocked
			| Self::PuntRecovered => PlayType::Punt,
		}
	}

	/// Timeouts, spikes and kneels end classification on their own. Nothing
	/// after them is scanned for overlays.
	pub const fn is_administrative(self) -> bool {
		matches!(self.play_type(), PlayType::GameManagement)
	}

	/// First subtype in precedence order whose grammar matches.
	pub fn first_match(description: &str) -> Option<(Self, MatchResult<'_>)> {
		Self::PRECEDENCE
			.into_iter()
			.find_map(|subtype| subtype.classify(description).map(|found| (subtype, found)))
	}
}
