//! # Decision Minter - Minting Authorization
//!
//! ## Purpose
//!
//! Decides whether a decision record (an NFT-like token tied to an archived
//! submission) may be minted. Configuration is gated by an archiver role, and
//! minting depends on three external collaborator contracts: a submission
//! registry, an optional approval authority and a timestamp source.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | A submission is minted iff exactly one decision references it | `domain/invariants.rs` - `check_minted_bijection_invariant()` |
//! | Decision ids are `0..next_nft_id`, never reused | `domain/invariants.rs` - `check_id_contiguity_invariant()` |
//! | Rejected calls do not mutate state | `service.rs` - `check_mint()` runs before `commit()` |
//!
//! ## Rejection Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 100 | submission or timestamp contract not configured |
//! | 101 | recipient is the caller |
//! | 102 | metadata URI empty or too long |
//! | 103 | content hash not 32 bytes |
//! | 104 | submission validation failed |
//! | 105 | not approved |
//! | 107 | submission already minted |
//! | 108 | timestamp unavailable |
//!
//! ## Outbound Dependencies
//!
//! | Collaborator | Trait | Shipped adapter |
//! |--------------|-------|-----------------|
//! | Submission registry | `SubmissionRegistry` | `AcceptingSubmissionRegistry` |
//! | Approval authority | `ApprovalAuthority` | `ParityApprovalAuthority` |
//! | Timestamp source | `TimestampSource` | `BlockHeightClock` |
//!
//! ## Usage Example
//!
//! ```ignore
//! use decision_minter::prelude::*;
//!
//! let mut minter = create_test_minter();
//! let archiver = CallContext::new("ST1ARCHIVER", 1000);
//! minter.set_submission_contract(&archiver, "ST2SUBMISSION".into())?;
//! minter.set_timestamp_contract(&archiver, "ST2TIMESTAMP".into())?;
//!
//! let request = MintDecisionRequest::new("ST1GOV", 1, "ipfs://QmXyZ", [0xaa; 32]);
//! let id = minter.mint_decision(&CallContext::default(), request)?;
//! assert_eq!(minter.get_decision(id).map(|d| d.timestamp), Some(60_000));
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{CallContext, Decision, MintDecisionRequest, RegistryState};

    // Value objects
    pub use crate::domain::value_objects::{ContentHash, Principal, CONTENT_HASH_LEN};

    // Configuration
    pub use crate::domain::config::MinterConfig;

    // Invariants
    pub use crate::domain::invariants::{
        check_registry_invariants, InvariantCheckResult, InvariantViolation,
    };

    // Ports
    pub use crate::ports::inbound::MinterApi;
    pub use crate::ports::outbound::{ApprovalAuthority, SubmissionRegistry, TimestampSource};

    // Events
    pub use crate::events::{ConfigField, MinterEvent};

    // Errors
    pub use crate::errors::{codes, AccessError, CollaboratorError, ConfigError, MintError};

    // Adapters
    pub use crate::adapters::{
        AcceptingSubmissionRegistry, BlockHeightClock, InMemorySubmissionRegistry,
        ParityApprovalAuthority,
    };

    // Service
    pub use crate::service::{create_test_minter, DecisionMinter, DefaultMinter};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
