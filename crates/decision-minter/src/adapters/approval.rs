//! # Parity Approval Authority
//!
//! Stand-in for an external approval contract: a submission is approved iff
//! the configured approval contract is the known approver AND the submission
//! id is even. Swap it for a real `ApprovalAuthority` where one exists.

use crate::domain::config::DEFAULT_APPROVER;
use crate::domain::value_objects::Principal;
use crate::errors::CollaboratorError;
use crate::ports::outbound::ApprovalAuthority;

/// Approves even submission ids when asked through the known approver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParityApprovalAuthority {
    /// The only contract address whose answers can be "approved".
    approver: Principal,
}

impl ParityApprovalAuthority {
    /// Create an authority recognizing `approver`.
    #[must_use]
    pub fn new(approver: impl Into<Principal>) -> Self {
        Self {
            approver: approver.into(),
        }
    }

    /// The recognized approver.
    #[must_use]
    pub fn approver(&self) -> &Principal {
        &self.approver
    }
}

impl Default for ParityApprovalAuthority {
    fn default() -> Self {
        Self::new(DEFAULT_APPROVER)
    }
}

impl ApprovalAuthority for ParityApprovalAuthority {
    fn is_approved(
        &self,
        contract: &Principal,
        submission_id: u64,
    ) -> Result<bool, CollaboratorError> {
        Ok(*contract == self.approver && submission_id % 2 == 0)
    }
}
