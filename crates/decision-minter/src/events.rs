//! # Event Schema
//!
//! Events emitted by the minter. Every successful mint and every successful
//! configuration change appends one event to the minter's log; rejected calls
//! emit nothing.

use crate::domain::value_objects::{ContentHash, Principal};
use serde::{Deserialize, Serialize};

/// Configuration field changed by a role-gated setter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigField {
    /// The archiver role.
    ArchiverRole,
    /// The submission registry contract.
    SubmissionContract,
    /// The approval authority contract.
    ApprovalContract,
    /// The timestamp source contract.
    TimestampContract,
}

impl ConfigField {
    /// Field name as it appears in logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ArchiverRole => "archiver_role",
            Self::SubmissionContract => "submission_contract",
            Self::ApprovalContract => "approval_contract",
            Self::TimestampContract => "timestamp_contract",
        }
    }
}

/// Minter event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MinterEvent {
    /// A decision was minted.
    DecisionMinted {
        /// New decision id.
        nft_id: u64,
        /// Submission consumed by the mint.
        submission_id: u64,
        /// Recipient of the decision.
        owner: Principal,
        /// Content hash recorded on the decision.
        content_hash: ContentHash,
        /// Timestamp recorded on the decision.
        timestamp: u64,
    },
    /// A role-gated setter changed a field.
    ConfigurationChanged {
        /// Which field changed.
        field: ConfigField,
        /// Caller that made the change.
        changed_by: Principal,
        /// Value before the change.
        previous: Option<Principal>,
        /// Value after the change.
        current: Principal,
    },
}

// =============================================================================
// TESTS
// =============================================================================
