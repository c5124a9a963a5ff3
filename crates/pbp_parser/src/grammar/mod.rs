pub mod components;
pub mod compose;

pub use compose::{bind, make_optional, Fragment, SlotSet};

use crate::error::{PbpError, Result};
use regex::{Captures, Regex};
use std::collections::BTreeMap;

/// One play subtype's full sentence pattern.
#[derive(Debug)]
pub struct Grammar {
	name: &'static str,
	regex: Regex,
}

impl Grammar {
	/// # Panics
	/// When the composed pattern is not a valid regex. Grammars are fixed at
	/// build time, so this is a programming error.
	pub fn compile(name: &'static str, pattern: &str) -> Self {
		match Regex::new(pattern) {
			Ok(regex) => Self { name, regex },
			Err(e) => panic!("grammar {name} does not compile: {e}"),
		}
	}

	pub const fn name(&self) -> &'static str {
		self.name
	}

	pub fn slots(&self) -> impl Iterator<Item = &str> {
		self.regex.capture_names().flatten()
	}

	/// Searches anywhere in `text` and returns the leftmost match.
	pub fn classify<'a>(&'a self, text: &'a str) -> Option<MatchResult<'a>> {
		self.regex.captures(text).map(|captures| MatchResult { grammar: self, captures })
	}

	/// Every non-overlapping match, in source order.
	pub fn classify_all<'a>(&'a self, text: &'a str) -> impl Iterator<Item = MatchResult<'a>> + 'a {
		self.regex.captures_iter(text).map(move |captures| MatchResult { grammar: self, captures })
	}
}

/// Slot name to matched text for a single match. Slots inside an optional
/// clause that did not participate come back as `None`, never as `""`.
#[derive(Debug)]
pub struct MatchResult<'a> {
	grammar: &'a Grammar,
	captures: Captures<'a>,
}

impl<'a> MatchResult<'a> {
	pub const fn grammar(&self) -> &'static str {
		self.grammar.name
	}

	pub fn get(&self, slot: &str) -> Option<&'a str> {
		self.captures.name(slot).map(|m| m.as_str())
	}

	pub fn require(&self, slot: &str) -> Result<&'a str> {
		self.get(slot).ok_or_else(|| PbpError::missing_capture(self.grammar.name, slot))
	}

	pub fn start(&self) -> usize {
		self.captures.get(0).map_or(0, |m| m.start())
	}

	pub fn end(&self) -> usize {
		self.captures.get(0).map_or(0, |m| m.end())
	}

	pub fn to_map(&self) -> BTreeMap<&'a str, Option<&'a str>> {
		self.grammar.slots().map(|slot| (slot, self.get(slot))).collect()
	}
}
