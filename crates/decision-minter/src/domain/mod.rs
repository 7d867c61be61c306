//! # Domain Layer (Inner Hexagon)
//!
//! Pure business logic for decision minting.
//! NO I/O, NO collaborator calls.
//!
//! - This is the **inner layer** of the hexagonal architecture.
//! - Dependencies point INWARD only (adapters depend on this, not vice versa).

pub mod config;
pub mod entities;
pub mod invariants;
pub mod services;
pub mod value_objects;

pub use config::*;
pub use entities::*;
pub use invariants::*;
pub use services::*;
pub use value_objects::*;
