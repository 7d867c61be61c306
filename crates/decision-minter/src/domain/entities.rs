//! # Core Domain Entities
//!
//! Main business entities for decision minting: the minted record, the
//! per-call context, the mint request and the registry state that owns them.

use crate::domain::value_objects::{ContentHash, Principal};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Block height used by a fresh default call context.
pub const DEFAULT_BLOCK_HEIGHT: u64 = 1000;

/// Caller used by a fresh default call context.
pub const DEFAULT_CALLER: &str = "ST1CALLER";

// =============================================================================
// CALL CONTEXT
// =============================================================================

/// Per-call context: who is calling and at which block height.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    /// Principal invoking the operation.
    pub caller: Principal,
    /// Current chain height.
    pub block_height: u64,
}

impl CallContext {
    /// Creates a context for `caller` at `block_height`.
    #[must_use]
    pub fn new(caller: impl Into<Principal>, block_height: u64) -> Self {
        Self {
            caller: caller.into(),
            block_height,
        }
    }

    /// Same height, different caller.
    #[must_use]
    pub fn with_caller(&self, caller: impl Into<Principal>) -> Self {
        Self {
            caller: caller.into(),
            block_height: self.block_height,
        }
    }
}

impl Default for CallContext {
    fn default() -> Self {
        Self::new(DEFAULT_CALLER, DEFAULT_BLOCK_HEIGHT)
    }
}

// =============================================================================
// MINT REQUEST
// =============================================================================

/// Input to the mint pipeline.
///
/// The content hash is carried as raw bytes so that malformed lengths reach
/// the pipeline and are rejected there with their own code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintDecisionRequest {
    /// Owner of the new decision.
    pub recipient: Principal,
    /// Originating submission.
    pub submission_id: u64,
    /// Metadata URI (1..=256 UTF-16 units by default).
    pub metadata_uri: String,
    /// Content hash bytes (must be 32).
    pub content_hash: Vec<u8>,
}

impl MintDecisionRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(
        recipient: impl Into<Principal>,
        submission_id: u64,
        metadata_uri: impl Into<String>,
        content_hash: impl AsRef<[u8]>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            submission_id,
            metadata_uri: metadata_uri.into(),
            content_hash: content_hash.as_ref().to_vec(),
        }
    }
}

// =============================================================================
// DECISION
// =============================================================================

/// A minted decision. Immutable once stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Recipient of the mint.
    pub owner: Principal,
    /// Metadata URI.
    pub metadata_uri: String,
    /// Content hash of the archived submission.
    pub content_hash: ContentHash,
    /// Height-derived timestamp at mint time.
    pub timestamp: u64,
    /// Submission this decision was minted from.
    pub submission_id: u64,
    /// Always true for minted decisions.
    pub approved: bool,
}

// =============================================================================
// REGISTRY STATE
// =============================================================================

/// Mutable state owned by a single minter instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryState {
    /// Id assigned to the next successful mint.
    pub next_nft_id: u64,
    /// Principal allowed to change configuration.
    pub archiver_role: Principal,
    /// Submission registry contract.
    pub submission_contract: Option<Principal>,
    /// Approval authority contract.
    pub approval_contract: Option<Principal>,
    /// Timestamp source contract.
    pub timestamp_contract: Option<Principal>,
    /// Minted decisions by id.
    pub decisions: BTreeMap<u64, Decision>,
    /// Submission ids already consumed by a mint.
    pub minted_submissions: BTreeSet<u64>,
}

impl RegistryState {
    /// Fresh state with `archiver` holding the role and nothing configured.
    #[must_use]
    pub fn new(archiver: Principal) -> Self {
        Self {
            next_nft_id: 0,
            archiver_role: archiver,
            submission_contract: None,
            approval_contract: None,
            timestamp_contract: None,
            decisions: BTreeMap::new(),
            minted_submissions: BTreeSet::new(),
        }
    }

    /// Both collaborators the pipeline cannot run without are set.
    #[must_use]
    pub fn is_operational(&self) -> bool {
        self.submission_contract.is_some() && self.timestamp_contract.is_some()
    }
}
