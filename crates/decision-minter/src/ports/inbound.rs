//! # Driving Ports (API - Inbound)
//!
//! The public API of the minter. Callers identify themselves through a
//! `CallContext`; the minter never infers identity from anything else.

use crate::domain::entities::{CallContext, Decision, MintDecisionRequest};
use crate::domain::value_objects::Principal;
use crate::errors::{AccessError, MintError};

/// Primary API for role-gated configuration and decision minting.
///
/// ## Usage
///
/// ```ignore
/// let ctx = CallContext::new("ST1ARCHIVER", 1000);
/// minter.set_submission_contract(&ctx, "ST2SUBMISSION".into())?;
/// minter.set_timestamp_contract(&ctx, "ST2TIMESTAMP".into())?;
///
/// let id = minter.mint_decision(&ctx, request)?;
/// let decision = minter.get_decision(id);
/// ```
pub trait MinterApi {
    /// Hand the archiver role to `new_archiver`.
    ///
    /// # Errors
    ///
    /// `AccessError::Unauthorized` unless the caller holds the role.
    fn set_archiver_role(
        &mut self,
        ctx: &CallContext,
        new_archiver: Principal,
    ) -> Result<(), AccessError>;

    /// Configure the submission registry contract.
    ///
    /// # Errors
    ///
    /// `AccessError::Unauthorized` unless the caller holds the role.
    fn set_submission_contract(
        &mut self,
        ctx: &CallContext,
        contract: Principal,
    ) -> Result<(), AccessError>;

    /// Configure the approval authority contract.
    ///
    /// # Errors
    ///
    /// `AccessError::Unauthorized` unless the caller holds the role.
    fn set_approval_contract(
        &mut self,
        ctx: &CallContext,
        contract: Principal,
    ) -> Result<(), AccessError>;

    /// Configure the timestamp source contract.
    ///
    /// # Errors
    ///
    /// `AccessError::Unauthorized` unless the caller holds the role.
    fn set_timestamp_contract(
        &mut self,
        ctx: &CallContext,
        contract: Principal,
    ) -> Result<(), AccessError>;

    /// Run the mint pipeline and, on success, return the new decision id.
    ///
    /// # Errors
    ///
    /// The first failing check's `MintError`; state is unchanged.
    fn mint_decision(
        &mut self,
        ctx: &CallContext,
        request: MintDecisionRequest,
    ) -> Result<u64, MintError>;

    /// Look up a minted decision.
    fn get_decision(&self, id: u64) -> Option<&Decision>;

    /// Id the next successful mint will receive.
    fn next_nft_id(&self) -> u64;
}
