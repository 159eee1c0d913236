//! Submitted-transaction state machine
//!
//! `Submitting -> Pending -> {Success | Failed}`; the refund flag is only
//! settable once a transaction has succeeded and the observed protocol
//! action turned out to be a refund.

use chrono::{DateTime, Utc};
use std::fmt;

use mcs_types::{TrackerError, TxHash};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerStatus {
	Submitting,
	Pending,
	Success,
	Failed,
}

impl fmt::Display for TrackerStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			TrackerStatus::Submitting => "submitting",
			TrackerStatus::Pending => "pending",
			TrackerStatus::Success => "success",
			TrackerStatus::Failed => "failed",
		};
		write!(f, "{}", label)
	}
}

#[derive(Debug, Clone)]
pub struct TxTracker {
	hash: Option<TxHash>,
	status: TrackerStatus,
	refunded: bool,
	submitted_at: DateTime<Utc>,
	finalized_at: Option<DateTime<Utc>>,
}

impl TxTracker {
	pub fn new() -> Self {
		Self {
			hash: None,
			status: TrackerStatus::Submitting,
			refunded: false,
			submitted_at: Utc::now(),
			finalized_at: None,
		}
	}

	pub fn status(&self) -> TrackerStatus {
		self.status
	}

	pub fn hash(&self) -> Option<&TxHash> {
		self.hash.as_ref()
	}

	pub fn refunded(&self) -> bool {
		self.refunded
	}

	pub fn is_final(&self) -> bool {
		matches!(self.status, TrackerStatus::Success | TrackerStatus::Failed)
	}

	fn transition_error(&self, to: TrackerStatus) -> TrackerError {
		TrackerError::InvalidTransition {
			from: self.status.to_string(),
			to: to.to_string(),
		}
	}

	/// Record the broadcast hash; the transaction is now pending
	pub fn submitted(&mut self, hash: TxHash) -> Result<(), TrackerError> {
		if self.status != TrackerStatus::Submitting {
			return Err(self.transition_error(TrackerStatus::Pending));
		}
		self.hash = Some(hash);
		self.status = TrackerStatus::Pending;
		Ok(())
	}

	pub fn succeed(&mut self) -> Result<(), TrackerError> {
		if self.status != TrackerStatus::Pending {
			return Err(self.transition_error(TrackerStatus::Success));
		}
		self.status = TrackerStatus::Success;
		self.finalized_at = Some(Utc::now());
		Ok(())
	}

	/// A failure may happen before or after broadcast
	pub fn fail(&mut self) -> Result<(), TrackerError> {
		if self.is_final() {
			return Err(self.transition_error(TrackerStatus::Failed));
		}
		self.status = TrackerStatus::Failed;
		self.finalized_at = Some(Utc::now());
		Ok(())
	}

	/// Flag the settled transaction as a protocol refund
	pub fn mark_refunded(&mut self) -> Result<(), TrackerError> {
		if self.status != TrackerStatus::Success {
			return Err(TrackerError::RefundRequiresSuccess {
				status: self.status.to_string(),
			});
		}
		self.refunded = true;
		Ok(())
	}
}

impl Default for TxTracker {
	fn default() -> Self {
		Self::new()
	}
}
