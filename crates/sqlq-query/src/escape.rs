//! Escape policy
//!
//! Decides, per formatting call, whether dialect quoting and escaping apply.
//!
//! Two flags drive the decision:
//!
//! - `enabled`: persistent, toggled with [`EscapePolicy::enable`] and
//!   [`EscapePolicy::disable`]
//! - `skip_next`: one-shot, armed with [`EscapePolicy::skip_next`] and cleared
//!   by the very next [`EscapePolicy::decide`], whether or not it was honored

/// Per-call escaping mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Escaping {
	/// Quote and escape for the dialect
	#[default]
	Apply,
	/// Plain stringification, no quoting or escaping
	Raw,
}

impl Escaping {
	/// Returns `true` for [`Escaping::Raw`].
	pub fn is_raw(self) -> bool {
		matches!(self, Self::Raw)
	}
}

/// Escape state of one formatting session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapePolicy {
	enabled: bool,
	skip_next: bool,
}

impl EscapePolicy {
	/// Create a policy with escaping initially enabled or disabled.
	pub fn new(enabled: bool) -> Self {
		Self {
			enabled,
			skip_next: false,
		}
	}

	/// Whether escaping is persistently enabled.
	pub fn is_enabled(&self) -> bool {
		self.enabled
	}

	/// Whether the one-shot skip is armed.
	pub fn is_skip_armed(&self) -> bool {
		self.skip_next
	}

	/// Enable escaping.
	pub fn enable(&mut self) {
		self.enabled = true;
	}

	/// Disable escaping for every following call.
	pub fn disable(&mut self) {
		self.enabled = false;
	}

	/// Skip escaping for the next formatting call only.
	pub fn skip_next(&mut self) {
		self.skip_next = true;
	}

	/// Decide the escaping mode for one formatting call.
	///
	/// The call is raw when escaping is disabled, when `raw` is requested, or
	/// when `consume_one_shot` is set and the one-shot skip was armed. The
	/// one-shot flag is cleared in every case.
	///
	/// # Example
	///
	/// ```rust
	/// use sqlq_query::{EscapePolicy, Escaping};
	///
	/// let mut policy = EscapePolicy::new(true);
	/// policy.skip_next();
	/// assert_eq!(policy.decide(false, true), Escaping::Raw);
	/// assert_eq!(policy.decide(false, true), Escaping::Apply);
	/// ```
	pub fn decide(&mut self, raw: bool, consume_one_shot: bool) -> Escaping {
		let one_shot = std::mem::take(&mut self.skip_next);
		if one_shot {
			tracing::debug!(honored = consume_one_shot, "one-shot escape skip consumed");
		}

		if !self.enabled || raw || (consume_one_shot && one_shot) {
			Escaping::Raw
		} else {
			Escaping::Apply
		}
	}
}

impl Default for EscapePolicy {
	/// Escaping enabled, nothing armed.
	fn default() -> Self {
		Self::new(true)
	}
}
