//! # Domain Invariants
//!
//! Invariants that MUST hold for the registry state after every operation:
//!
//! - every minted submission is referenced by exactly one decision, and
//!   every decision's submission is marked minted
//! - decision ids are exactly `0..next_nft_id`
//! - every stored decision is approved

use crate::domain::entities::RegistryState;
use std::collections::BTreeMap;

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// Minted set and decisions reference each other one-to-one.
#[must_use]
pub fn check_minted_bijection_invariant(state: &RegistryState) -> bool {
    let mut refs: BTreeMap<u64, usize> = BTreeMap::new();
    for decision in state.decisions.values() {
        *refs.entry(decision.submission_id).or_default() += 1;
    }

    refs.len() == state.minted_submissions.len()
        && refs
            .iter()
            .all(|(id, count)| *count == 1 && state.minted_submissions.contains(id))
}

/// Decision ids are contiguous from zero and the counter points past the last.
#[must_use]
pub fn check_id_contiguity_invariant(state: &RegistryState) -> bool {
    let expected = state.decisions.len() as u64;
    state.next_nft_id == expected && state.decisions.keys().copied().eq(0..expected)
}

/// Every stored decision carries `approved = true`.
#[must_use]
pub fn check_approved_invariant(state: &RegistryState) -> bool {
    state.decisions.values().all(|d| d.approved)
}

/// Check all invariants at once.
#[must_use]
pub fn check_registry_invariants(state: &RegistryState) -> InvariantCheckResult {
    let mut violations = Vec::new();

    if !check_minted_bijection_invariant(state) {
        violations.push(InvariantViolation::MintedSetMismatch {
            minted: state.minted_submissions.len(),
            decisions: state.decisions.len(),
        });
    }

    if !check_id_contiguity_invariant(state) {
        violations.push(InvariantViolation::IdGap {
            next_nft_id: state.next_nft_id,
            decisions: state.decisions.len(),
        });
    }

    if !check_approved_invariant(state) {
        violations.push(InvariantViolation::UnapprovedDecision);
    }

    if violations.is_empty() {
        InvariantCheckResult::Valid
    } else {
        InvariantCheckResult::Invalid(violations)
    }
}

// =============================================================================
// INVARIANT TYPES
// =============================================================================

/// Result of checking all invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantCheckResult {
    /// All invariants hold.
    Valid,
    /// One or more invariants violated.
    Invalid(Vec<InvariantViolation>),
}

impl InvariantCheckResult {
    /// Returns true if all invariants hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Specific invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Minted set and decision registry disagree.
    MintedSetMismatch { minted: usize, decisions: usize },
    /// Ids are not `0..next_nft_id`.
    IdGap { next_nft_id: u64, decisions: usize },
    /// A decision is stored with `approved = false`.
    UnapprovedDecision,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MintedSetMismatch { minted, decisions } => {
                write!(
                    f,
                    "minted set mismatch: {minted} minted submissions, {decisions} decisions"
                )
            }
            Self::IdGap {
                next_nft_id,
                decisions,
            } => {
                write!(
                    f,
                    "id gap: next id {next_nft_id} with {decisions} decisions"
                )
            }
            Self::UnapprovedDecision => write!(f, "unapproved decision stored"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
