//! # Submission Registry Adapters
//!
//! `AcceptingSubmissionRegistry` accepts every well-formed request and is what
//! the default minter uses. `InMemorySubmissionRegistry` knows a fixed set of
//! submissions and checks the claimed content hash against them.

use crate::domain::value_objects::{ContentHash, Principal};
use crate::errors::CollaboratorError;
use crate::ports::outbound::SubmissionRegistry;
use std::collections::HashMap;

/// Accepts any submission.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptingSubmissionRegistry;

impl SubmissionRegistry for AcceptingSubmissionRegistry {
    fn validate_submission(
        &self,
        _contract: &Principal,
        _submission_id: u64,
        _content_hash: &ContentHash,
    ) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

/// Registry of known submissions and their content hashes.
#[derive(Clone, Debug, Default)]
pub struct InMemorySubmissionRegistry {
    /// Content hash by submission id.
    submissions: HashMap<u64, ContentHash>,
}

impl InMemorySubmissionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a submission.
    #[must_use]
    pub fn with_submission(mut self, submission_id: u64, content_hash: ContentHash) -> Self {
        self.submissions.insert(submission_id, content_hash);
        self
    }

    /// Register a submission in place.
    pub fn register(&mut self, submission_id: u64, content_hash: ContentHash) {
        self.submissions.insert(submission_id, content_hash);
    }
}

impl SubmissionRegistry for InMemorySubmissionRegistry {
    fn validate_submission(
        &self,
        contract: &Principal,
        submission_id: u64,
        content_hash: &ContentHash,
    ) -> Result<(), CollaboratorError> {
        match self.submissions.get(&submission_id) {
            None => Err(CollaboratorError::Rejected {
                contract: contract.clone(),
                reason: format!("unknown submission {submission_id}"),
            }),
            Some(known) if known != content_hash => Err(CollaboratorError::Rejected {
                contract: contract.clone(),
                reason: format!("content hash mismatch for submission {submission_id}"),
            }),
            Some(_) => Ok(()),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
