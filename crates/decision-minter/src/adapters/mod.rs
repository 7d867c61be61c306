//! # Adapters Layer (Outer Hexagon)
//!
//! Adapters implement the outbound ports. The ones shipped here stand in for
//! external collaborator contracts:
//!
//! - `AcceptingSubmissionRegistry` / `InMemorySubmissionRegistry`
//! - `ParityApprovalAuthority`
//! - `BlockHeightClock`

pub mod approval;
pub mod clock;
pub mod submission;

pub use approval::*;
pub use clock::*;
pub use submission::*;
