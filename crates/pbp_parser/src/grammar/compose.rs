use super::Grammar;

/// Wraps `pattern` so a match records its text under `slot`.
pub fn bind(slot: &str, pattern: &str) -> String {
	format!("(?P<{slot}>{pattern})")
}

/// Lets the whole of `pattern` be absent. When present it is preceded by a
/// single space if `leading_space` is set.
pub fn make_optional(pattern: &str, leading_space: bool) -> String {
	if leading_space {
		format!("(?: {pattern})?")
	} else {
		format!("(?:{pattern})?")
	}
}

/// One piece of a grammar's sentence skeleton.
#[derive(Debug, Clone, Copy)]
pub enum Fragment<'a> {
	/// Literal sentence text. Escaped when joined.
	Text(&'a str),
	/// Whatever the named slot's pattern currently is, wrapped or not.
	Slot(&'a str),
	/// A sub-pattern that was already joined.
	Pattern(&'a str),
	/// Pins the grammar to the start of the text.
	Start,
}

/// The working set of slots a grammar is built from, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct SlotSet {
	slots: Vec<(&'static str, String)>,
}

impl SlotSet {
	/// Binds every raw pattern to its slot name.
	///
	/// # Panics
	/// When a name is bound twice or a pattern already carries a named capture.
	pub fn bind(bindings: &[(&'static str, &str)]) -> Self {
		let mut slots: Vec<(&'static str, String)> = Vec::with_capacity(bindings.len());
		for &(name, pattern) in bindings {
			assert!(!slots.iter().any(|(bound, _)| *bound == name), "slot `{name}` is bound twice");
			assert!(!pattern.contains("(?P<") && !pattern.contains("(?<"), "pattern for slot `{name}` already names a capture");
			slots.push((name, bind(name, pattern)));
		}
		Self { slots }
	}

	/// # Panics
	/// When `slot` was never bound.
	#[must_use]
	pub fn optional(mut self, slot: &str, leading_space: bool) -> Self {
		let pattern = self.slot_mut(slot);
		*pattern = make_optional(pattern, leading_space);
		self
	}

	/// Embeds the slot in fixed text, e.g. `tackler` becomes
	/// `(tackle by <tackler>)`, and makes the whole unit optional.
	///
	/// # Panics
	/// When `slot` was never bound.
	#[must_use]
	pub fn wrap_event(mut self, slot: &str, prefix: &str, suffix: &str, leading_space: bool) -> Self {
		let pattern = self.slot_mut(slot);
		let event = format!("{}{}{}", regex::escape(prefix), pattern, regex::escape(suffix));
		*pattern = make_optional(&event, leading_space);
		self
	}

	/// `(tackle by X)`, the clause that closes most plays.
	#[must_use]
	pub fn tackle_event(self, slot: &str) -> Self {
		self.wrap_event(slot, "(tackle by ", ")", true)
	}

	/// `(defended by X)`
	#[must_use]
	pub fn defended_event(self, slot: &str) -> Self {
		self.wrap_event(slot, "(defended by ", ")", true)
	}

	/// `intended for X`
	#[must_use]
	pub fn intended_event(self, slot: &str) -> Self {
		self.wrap_event(slot, "intended for ", "", true)
	}

	/// `(forced by X)`
	#[must_use]
	pub fn forced_event(self, slot: &str) -> Self {
		self.wrap_event(slot, "(forced by ", ")", true)
	}

	/// `and returned for X`
	#[must_use]
	pub fn returned_event(self, slot: &str) -> Self {
		self.wrap_event(slot, "and returned for ", "", true)
	}

	/// `, blocked by X`
	#[must_use]
	pub fn blocked_event(self, slot: &str) -> Self {
		self.wrap_event(slot, ", blocked by ", "", false)
	}

	/// # Panics
	/// When `slot` was never bound.
	pub fn pattern(&self, slot: &str) -> &str {
		match self.slots.iter().find(|(name, _)| *name == slot) {
			Some((_, pattern)) => pattern,
			None => panic!("slot `{slot}` is not bound"),
		}
	}

	/// Concatenates the skeleton. No whitespace is added between fragments.
	pub fn join(&self, fragments: &[Fragment<'_>]) -> String {
		let mut pattern = String::new();
		for fragment in fragments {
			match *fragment {
				Fragment::Text(text) => pattern.push_str(&regex::escape(text)),
				Fragment::Slot(slot) => pattern.push_str(self.pattern(slot)),
				Fragment::Pattern(sub) => pattern.push_str(sub),
				Fragment::Start => pattern.push('^'),
			}
		}
		pattern
	}

	pub fn compile(&self, name: &'static str, fragments: &[Fragment<'_>]) -> Grammar {
		Grammar::compile(name, &self.join(fragments))
	}

	fn slot_mut(&mut self, slot: &str) -> &mut String {
		match self.slots.iter_mut().find(|(name, _)| *name == slot) {
			Some((_, pattern)) => pattern,
			None => panic!("slot `{slot}` is not bound"),
		}
	}
}
