//! Regex grammars for football play-by-play descriptions.
//!
//! [`parse_play`] classifies one description into a [`PlayRecord`], or reports
//! it as unclassified when no grammar matches.

pub mod error;
pub mod grammar;
pub mod parsers;
pub mod schema;

pub use error::{PbpError, Result};
pub use parsers::{parse_play, PlaySubtype};
pub use schema::{ParsedPlay, PlayContext, PlayDetails, PlayRecord, PlayType};
