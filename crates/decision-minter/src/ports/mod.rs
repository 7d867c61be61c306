//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions for the minter.
//! These are the interfaces between the domain and the outside world.
//!
//! - **Driving Ports (Inbound)**: `MinterApi`
//! - **Driven Ports (Outbound)**: `SubmissionRegistry`, `ApprovalAuthority`, `TimestampSource`
//! - No concrete implementations in this module

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
