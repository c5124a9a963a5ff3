use thiserror::Error;

pub type Result<T> = std::result::Result<T, PbpError>;

/// Which direction table a literal was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionKind {
	Run,
	Pass,
}

impl std::fmt::Display for DirectionKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Run => write!(f, "run"),
			Self::Pass => write!(f, "pass"),
		}
	}
}

/// Normalizer failures. A grammar only lets text through in the shapes these
/// tables know about, so every variant here means the grammars and the
/// normalizer have drifted apart.
#[derive(Debug, Error, PartialEq)]
pub enum PbpError {
	#[error("Unmapped {kind} direction: {text}")]
	UnmappedDirection { kind: DirectionKind, text: String },

	#[error("Unmapped penalty response: {text}")]
	UnmappedResponse { text: String },

	#[error("Unmapped kick status: {text}")]
	UnmappedKickStatus { text: String },

	#[error("Unparseable distance: {text}")]
	UnparseableDistance { text: String },

	#[error("Invalid field position: {text}")]
	InvalidFieldPosition { text: String },

	#[error("Invalid timeout number: {text}")]
	InvalidTimeoutNumber { text: String },

	#[error("Unknown {table} tag: {text}")]
	UnknownTag { table: &'static str, text: String },

	#[error("Grammar {grammar} matched without required slot {slot}")]
	MissingCapture { grammar: &'static str, slot: String },
}

impl PbpError {
	pub fn unmapped_direction(kind: DirectionKind, text: &str) -> Self {
		Self::UnmappedDirection { kind, text: text.to_string() }
	}

	pub fn unmapped_response(text: &str) -> Self {
		Self::UnmappedResponse { text: text.to_string() }
	}

	pub fn unmapped_kick_status(text: &str) -> Self {
		Self::UnmappedKickStatus { text: text.to_string() }
	}

	pub fn unparseable_distance(text: &str) -> Self {
		Self::UnparseableDistance { text: text.to_string() }
	}

	pub fn invalid_field_position(text: &str) -> Self {
		Self::InvalidFieldPosition { text: text.to_string() }
	}

	pub fn invalid_timeout_number(text: &str) -> Self {
		Self::InvalidTimeoutNumber { text: text.to_string() }
	}

	pub fn unknown_tag(table: &'static str, text: &str) -> Self {
		Self::UnknownTag { table, text: text.to_string() }
	}

	pub fn missing_capture(grammar: &'static str, slot: &str) -> Self {
		Self::MissingCapture {
			grammar,
			slot: slot.to_string(),
		}
	}
}
