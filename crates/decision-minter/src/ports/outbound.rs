//! # Driven Ports (SPI - Outbound)
//!
//! Interfaces the minter depends on. Each collaborator is referenced in the
//! registry state only by its configured contract address; the minter passes
//! that address to the port so an implementation can decide based on it.
//!
//! - Submission registry: existence/validity of a submission
//! - Approval authority: per-submission approval decision
//! - Timestamp source: height-derived clock

use crate::domain::value_objects::{ContentHash, Principal};
use crate::errors::CollaboratorError;

// =============================================================================
// SUBMISSION REGISTRY
// =============================================================================

/// Validates that a submission exists and matches its content hash.
pub trait SubmissionRegistry: Send + Sync {
    /// Validate a submission.
    ///
    /// # Arguments
    ///
    /// * `contract` - Configured submission contract address
    /// * `submission_id` - Submission to validate
    /// * `content_hash` - Hash the mint request claims for it
    ///
    /// # Errors
    ///
    /// Returns a `CollaboratorError` when the submission is not valid.
    fn validate_submission(
        &self,
        contract: &Principal,
        submission_id: u64,
        content_hash: &ContentHash,
    ) -> Result<(), CollaboratorError>;
}

// =============================================================================
// APPROVAL AUTHORITY
// =============================================================================

/// Decides whether a submission is approved for minting.
pub trait ApprovalAuthority: Send + Sync {
    /// Ask the authority at `contract` about `submission_id`.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - Approved
    /// * `Ok(false)` - Explicitly not approved
    fn is_approved(
        &self,
        contract: &Principal,
        submission_id: u64,
    ) -> Result<bool, CollaboratorError>;
}

// =============================================================================
// TIMESTAMP SOURCE
// =============================================================================

/// Provides the timestamp recorded on a minted decision.
pub trait TimestampSource: Send + Sync {
    /// Timestamp at `block_height` according to the clock at `contract`.
    fn timestamp_at(
        &self,
        contract: &Principal,
        block_height: u64,
    ) -> Result<u64, CollaboratorError>;
}

// =============================================================================
// TESTS
// =============================================================================
