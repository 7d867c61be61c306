//! # Decision Minter Service
//!
//! The minter owns its registry state and the three collaborator adapters.
//! Every operation validates completely before it mutates anything, so a
//! rejected call leaves the state exactly as it found it.
//!
//! ## Mint pipeline
//!
//! | Order | Check | Rejection |
//! |-------|-------|-----------|
//! | 1 | recipient is not the caller | 101 |
//! | 2 | metadata URI is 1..=256 UTF-16 units | 102 |
//! | 3 | content hash is 32 bytes | 103 |
//! | 4 | submission and timestamp contracts configured | 100 |
//! | 5 | submission not minted yet | 107 |
//! | 6 | submission registry validates | 104 |
//! | 7 | approval authority approves (if configured) | 105 |
//! | 8 | timestamp source answers | 108 |

use crate::adapters::{AcceptingSubmissionRegistry, BlockHeightClock, ParityApprovalAuthority};
use crate::domain::config::MinterConfig;
use crate::domain::entities::{CallContext, Decision, MintDecisionRequest, RegistryState};
use crate::domain::invariants::{check_registry_invariants, InvariantCheckResult};
use crate::domain::services::{
    authorize, check_content_hash, check_metadata_uri, check_not_self_mint,
};
use crate::domain::value_objects::{ContentHash, Principal};
use crate::errors::{AccessError, CollaboratorError, ConfigError, MintError};
use crate::events::{ConfigField, MinterEvent};
use crate::ports::inbound::MinterApi;
use crate::ports::outbound::{ApprovalAuthority, SubmissionRegistry, TimestampSource};

use tracing::{debug, info, instrument, warn};

/// Minter wired with the shipped stand-in collaborators.
pub type DefaultMinter =
    DecisionMinter<AcceptingSubmissionRegistry, ParityApprovalAuthority, BlockHeightClock>;

/// The decision minter.
pub struct DecisionMinter<S: SubmissionRegistry, A: ApprovalAuthority, T: TimestampSource> {
    /// Minter configuration.
    config: MinterConfig,
    /// Registry state.
    state: RegistryState,
    /// Submission registry adapter.
    submissions: S,
    /// Approval authority adapter.
    approvals: A,
    /// Timestamp source adapter.
    clock: T,
    /// Events since construction, reset or the last drain.
    events: Vec<MinterEvent>,
}

impl<S: SubmissionRegistry, A: ApprovalAuthority, T: TimestampSource> DecisionMinter<S, A, T> {
    /// Create a minter with explicit adapters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `config` does not validate.
    pub fn new(
        config: MinterConfig,
        submissions: S,
        approvals: A,
        clock: T,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = RegistryState::new(config.initial_archiver.clone());
        Ok(Self {
            config,
            state,
            submissions,
            approvals,
            clock,
            events: Vec::new(),
        })
    }

    /// Restore the initial state. Adapters and config are kept.
    pub fn reset(&mut self) {
        self.state = RegistryState::new(self.config.initial_archiver.clone());
        self.events.clear();
        debug!("Minter state reset");
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &MinterConfig {
        &self.config
    }

    /// Read-only view of the registry state.
    #[must_use]
    pub fn state(&self) -> &RegistryState {
        &self.state
    }

    /// Principal currently holding the archiver role.
    #[must_use]
    pub fn archiver_role(&self) -> &Principal {
        &self.state.archiver_role
    }

    /// Configured submission registry contract.
    #[must_use]
    pub fn submission_contract(&self) -> Option<&Principal> {
        self.state.submission_contract.as_ref()
    }

    /// Configured approval authority contract.
    #[must_use]
    pub fn approval_contract(&self) -> Option<&Principal> {
        self.state.approval_contract.as_ref()
    }

    /// Configured timestamp source contract.
    #[must_use]
    pub fn timestamp_contract(&self) -> Option<&Principal> {
        self.state.timestamp_contract.as_ref()
    }

    /// Whether `submission_id` has been minted.
    #[must_use]
    pub fn is_minted(&self, submission_id: u64) -> bool {
        self.state.minted_submissions.contains(&submission_id)
    }

    /// Events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[MinterEvent] {
        &self.events
    }

    /// Take all recorded events, leaving the log empty.
    pub fn drain_events(&mut self) -> Vec<MinterEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check the registry invariants against the current state.
    #[must_use]
    pub fn check_invariants(&self) -> InvariantCheckResult {
        check_registry_invariants(&self.state)
    }

    // =========================================================================
    // COLLABORATOR CHECKS
    // =========================================================================

    /// Ask the submission registry about a submission.
    ///
    /// # Errors
    ///
    /// Fails if no submission contract is configured, the hash is not
    /// 32 bytes, or the registry rejects it.
    pub fn validate_submission(
        &self,
        submission_id: u64,
        content_hash: &[u8],
    ) -> Result<(), CollaboratorError> {
        let contract = self
            .state
            .submission_contract
            .as_ref()
            .ok_or(CollaboratorError::NotConfigured("submission"))?;
        let hash = ContentHash::from_slice(content_hash).ok_or(CollaboratorError::MalformedHash {
            len: content_hash.len(),
        })?;
        self.submissions
            .validate_submission(contract, submission_id, &hash)
    }

    /// Ask the approval authority about a submission.
    ///
    /// Without an approval contract every submission is approved.
    ///
    /// # Errors
    ///
    /// Propagates the authority's error.
    pub fn is_approved(&self, submission_id: u64) -> Result<bool, CollaboratorError> {
        match &self.state.approval_contract {
            None => Ok(true),
            Some(contract) => self.approvals.is_approved(contract, submission_id),
        }
    }

    /// Timestamp at `block_height` from the configured source.
    ///
    /// # Errors
    ///
    /// Fails if no timestamp contract is configured or the source fails.
    pub fn current_timestamp(&self, block_height: u64) -> Result<u64, CollaboratorError> {
        let contract = self
            .state
            .timestamp_contract
            .as_ref()
            .ok_or(CollaboratorError::NotConfigured("timestamp"))?;
        self.clock.timestamp_at(contract, block_height)
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    /// Shared body of all role-gated setters.
    fn set_config_field(
        &mut self,
        ctx: &CallContext,
        field: ConfigField,
        value: Principal,
    ) -> Result<(), AccessError> {
        if let Err(err) = authorize(&ctx.caller, &self.state.archiver_role) {
            warn!(
                caller = %ctx.caller,
                field = field.as_str(),
                "Unauthorized configuration attempt"
            );
            return Err(err);
        }

        let previous = match field {
            ConfigField::ArchiverRole => Some(std::mem::replace(
                &mut self.state.archiver_role,
                value.clone(),
            )),
            ConfigField::SubmissionContract => {
                self.state.submission_contract.replace(value.clone())
            }
            ConfigField::ApprovalContract => self.state.approval_contract.replace(value.clone()),
            ConfigField::TimestampContract => {
                self.state.timestamp_contract.replace(value.clone())
            }
        };

        info!(
            field = field.as_str(),
            value = %value,
            changed_by = %ctx.caller,
            "Configuration changed"
        );

        self.events.push(MinterEvent::ConfigurationChanged {
            field,
            changed_by: ctx.caller.clone(),
            previous,
            current: value,
        });
        Ok(())
    }

    /// Run every pipeline check in order without touching state.
    ///
    /// Returns the parsed hash and the timestamp to record.
    fn check_mint(
        &self,
        ctx: &CallContext,
        request: &MintDecisionRequest,
    ) -> Result<(ContentHash, u64), MintError> {
        check_not_self_mint(&ctx.caller, &request.recipient)?;
        check_metadata_uri(&request.metadata_uri, self.config.max_metadata_uri_len)?;
        let hash = check_content_hash(&request.content_hash)?;

        if !self.state.is_operational() {
            return Err(MintError::NotConfigured);
        }

        if self.is_minted(request.submission_id) {
            return Err(MintError::AlreadyMinted(request.submission_id));
        }

        self.validate_submission(request.submission_id, &request.content_hash)
            .map_err(|cause| {
                debug!(%cause, "Submission registry rejected submission");
                MintError::SubmissionInvalid
            })?;

        if self.state.approval_contract.is_some() {
            match self.is_approved(request.submission_id) {
                Ok(true) => {}
                Ok(false) => return Err(MintError::NotApproved),
                Err(cause) => {
                    debug!(%cause, "Approval authority failed");
                    return Err(MintError::NotApproved);
                }
            }
        }

        let timestamp = self.current_timestamp(ctx.block_height).map_err(|cause| {
            debug!(%cause, "Timestamp source failed");
            MintError::TimestampUnavailable
        })?;

        Ok((hash, timestamp))
    }

    /// Store a fully validated decision.
    fn commit(
        &mut self,
        request: MintDecisionRequest,
        content_hash: ContentHash,
        timestamp: u64,
    ) -> u64 {
        let nft_id = self.state.next_nft_id;
        let decision = Decision {
            owner: request.recipient,
            metadata_uri: request.metadata_uri,
            content_hash,
            timestamp,
            submission_id: request.submission_id,
            approved: true,
        };

        self.events.push(MinterEvent::DecisionMinted {
            nft_id,
            submission_id: decision.submission_id,
            owner: decision.owner.clone(),
            content_hash,
            timestamp,
        });

        info!(
            nft_id,
            owner = %decision.owner,
            timestamp,
            "Decision minted"
        );

        self.state.minted_submissions.insert(decision.submission_id);
        self.state.decisions.insert(nft_id, decision);
        self.state.next_nft_id += 1;
        nft_id
    }
}

impl DefaultMinter {
    /// Minter with the stand-in collaborators, parameterized by `config`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `config` does not validate.
    pub fn from_config(config: MinterConfig) -> Result<Self, ConfigError> {
        let approvals = ParityApprovalAuthority::new(config.known_approver.clone());
        let clock = BlockHeightClock::new(config.seconds_per_block);
        Self::new(config, AcceptingSubmissionRegistry, approvals, clock)
    }
}

/// Create a default minter (for testing).
#[must_use]
pub fn create_test_minter() -> DefaultMinter {
    let config = MinterConfig::default();
    DecisionMinter {
        state: RegistryState::new(config.initial_archiver.clone()),
        config,
        submissions: AcceptingSubmissionRegistry,
        approvals: ParityApprovalAuthority::default(),
        clock: BlockHeightClock::default(),
        events: Vec::new(),
    }
}

// =============================================================================
// MinterApi Implementation
// =============================================================================

impl<S: SubmissionRegistry, A: ApprovalAuthority, T: TimestampSource> MinterApi
    for DecisionMinter<S, A, T>
{
    fn set_archiver_role(
        &mut self,
        ctx: &CallContext,
        new_archiver: Principal,
    ) -> Result<(), AccessError> {
        self.set_config_field(ctx, ConfigField::ArchiverRole, new_archiver)
    }

    fn set_submission_contract(
        &mut self,
        ctx: &CallContext,
        contract: Principal,
    ) -> Result<(), AccessError> {
        self.set_config_field(ctx, ConfigField::SubmissionContract, contract)
    }

    fn set_approval_contract(
        &mut self,
        ctx: &CallContext,
        contract: Principal,
    ) -> Result<(), AccessError> {
        self.set_config_field(ctx, ConfigField::ApprovalContract, contract)
    }

    fn set_timestamp_contract(
        &mut self,
        ctx: &CallContext,
        contract: Principal,
    ) -> Result<(), AccessError> {
        self.set_config_field(ctx, ConfigField::TimestampContract, contract)
    }

    #[instrument(
        skip(self, ctx, request),
        fields(submission_id = request.submission_id, caller = %ctx.caller)
    )]
    fn mint_decision(
        &mut self,
        ctx: &CallContext,
        request: MintDecisionRequest,
    ) -> Result<u64, MintError> {
        match self.check_mint(ctx, &request) {
            Ok((content_hash, timestamp)) => Ok(self.commit(request, content_hash, timestamp)),
            Err(err) => {
                debug!(code = err.code(), error = %err, "Mint rejected");
                Err(err)
            }
        }
    }

    fn get_decision(&self, id: u64) -> Option<&Decision> {
        self.state.decisions.get(&id)
    }

    fn next_nft_id(&self) -> u64 {
        self.state.next_nft_id
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySubmissionRegistry;

    const VALID_URI: &str = "ipfs://QmXyZ123456789abcdef";

    fn archiver() -> CallContext {
        CallContext::new("ST1ARCHIVER", 1000)
    }

    fn caller() -> CallContext {
        CallContext::default()
    }

    fn valid_hash() -> Vec<u8> {
        vec![0xaa; 32]
    }

    fn configured_minter() -> DefaultMinter {
        let mut minter = create_test_minter();
        minter
            .set_submission_contract(&archiver(), "ST2SUBMISSION".into())
            .unwrap();
        minter
            .set_timestamp_contract(&archiver(), "ST2TIMESTAMP".into())
            .unwrap();
        minter
    }

    fn request(submission_id: u64) -> MintDecisionRequest {
        MintDecisionRequest::new("ST1GOV", submission_id, VALID_URI, valid_hash())
    }

    #[test]
    fn test_create_minter() {
        let minter = create_test_minter();
        assert_eq!(minter.next_nft_id(), 0);
        assert_eq!(minter.archiver_role(), &Principal::from("ST1ARCHIVER"));
        assert!(minter.submission_contract().is_none());
        assert!(minter.events().is_empty());
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let config = MinterConfig::default().with_seconds_per_block(0);
        assert!(DefaultMinter::from_config(config).is_err());
    }

    #[test]
    fn test_successful_mint() {
        let mut minter = configured_minter();

        let id = minter.mint_decision(&caller(), request(1)).unwrap();
        assert_eq!(id, 0);
        assert_eq!(minter.next_nft_id(), 1);
        assert!(minter.is_minted(1));

        let decision = minter.get_decision(0).unwrap();
        assert_eq!(decision.owner, "ST1GOV");
        assert_eq!(decision.metadata_uri, VALID_URI);
        assert_eq!(decision.content_hash, ContentHash::new([0xaa; 32]));
        assert_eq!(decision.timestamp, 1000 * 60);
        assert_eq!(decision.submission_id, 1);
        assert!(decision.approved);
    }

    #[test]
    fn test_get_decision_absent() {
        let minter = configured_minter();
        assert!(minter.get_decision(0).is_none());
        assert!(minter.get_decision(u64::MAX).is_none());
    }

    #[test]
    fn test_self_mint_rejected() {
        let mut minter = configured_minter();
        let ctx = caller().with_caller("ST1GOV");

        let err = minter.mint_decision(&ctx, request(1)).unwrap_err();
        assert_eq!(err, MintError::SelfMint);
        assert_eq!(err.code(), 101);
    }

    #[test]
    fn test_not_configured() {
        let mut minter = create_test_minter();
        let err = minter.mint_decision(&caller(), request(1)).unwrap_err();
        assert_eq!(err.code(), 100);

        minter
            .set_submission_contract(&archiver(), "ST2SUBMISSION".into())
            .unwrap();
        let err = minter.mint_decision(&caller(), request(1)).unwrap_err();
        assert_eq!(err.code(), 100);
    }

    #[test]
    fn test_format_checks_run_before_configuration_check() {
        let mut minter = create_test_minter();

        let bad_uri = MintDecisionRequest::new("ST1GOV", 1, "", valid_hash());
        assert_eq!(minter.mint_decision(&caller(), bad_uri).unwrap_err().code(), 102);

        let bad_hash = MintDecisionRequest::new("ST1GOV", 1, VALID_URI, b"short");
        assert_eq!(minter.mint_decision(&caller(), bad_hash).unwrap_err().code(), 103);
    }

    #[test]
    fn test_duplicate_submission_rejected() {
        let mut minter = configured_minter();
        minter.mint_decision(&caller(), request(1)).unwrap();

        let again = MintDecisionRequest::new("ST1OTHER", 1, "ipfs://other", [0xbb; 32]);
        let err = minter.mint_decision(&caller(), again).unwrap_err();
        assert_eq!(err, MintError::AlreadyMinted(1));
        assert_eq!(minter.next_nft_id(), 1);
    }

    #[test]
    fn test_submission_registry_rejection() {
        let registry =
            InMemorySubmissionRegistry::new().with_submission(1, ContentHash::new([0xaa; 32]));
        let mut minter = DecisionMinter::new(
            MinterConfig::default(),
            registry,
            ParityApprovalAuthority::default(),
            BlockHeightClock::default(),
        )
        .unwrap();
        minter
            .set_submission_contract(&archiver(), "ST2SUBMISSION".into())
            .unwrap();
        minter
            .set_timestamp_contract(&archiver(), "ST2TIMESTAMP".into())
            .unwrap();

        let err = minter.mint_decision(&caller(), request(2)).unwrap_err();
        assert_eq!(err.code(), 104);

        assert_eq!(minter.mint_decision(&caller(), request(1)), Ok(0));
    }

    #[test]
    fn test_approval_parity() {
        let mut minter = configured_minter();
        minter
            .set_approval_contract(&archiver(), "ST2APPROVAL".into())
            .unwrap();

        let err = minter.mint_decision(&caller(), request(3)).unwrap_err();
        assert_eq!(err, MintError::NotApproved);
        assert_eq!(minter.mint_decision(&caller(), request(4)), Ok(0));
    }

    #[test]
    fn test_unknown_approver_denies_everything() {
        let mut minter = configured_minter();
        minter
            .set_approval_contract(&archiver(), "ST2ROGUE".into())
            .unwrap();

        assert_eq!(minter.mint_decision(&caller(), request(2)).unwrap_err().code(), 105);
        assert_eq!(minter.mint_decision(&caller(), request(3)).unwrap_err().code(), 105);
    }

    #[test]
    fn test_timestamp_failure() {
        let mut minter = configured_minter();
        let ctx = CallContext::new("ST1CALLER", u64::MAX);

        let err = minter.mint_decision(&ctx, request(1)).unwrap_err();
        assert_eq!(err, MintError::TimestampUnavailable);
        assert_eq!(err.code(), 108);
        assert!(!minter.is_minted(1));
    }

    #[test]
    fn test_collaborator_checks_directly() {
        let minter = create_test_minter();
        assert_eq!(
            minter.validate_submission(1, &valid_hash()),
            Err(CollaboratorError::NotConfigured("submission"))
        );
        assert_eq!(minter.is_approved(3), Ok(true));
        assert_eq!(
            minter.current_timestamp(1000),
            Err(CollaboratorError::NotConfigured("timestamp"))
        );

        let minter = configured_minter();
        assert!(minter.validate_submission(1, &valid_hash()).is_ok());
        assert_eq!(
            minter.validate_submission(1, &[0u8; 31]),
            Err(CollaboratorError::MalformedHash { len: 31 })
        );
        assert_eq!(minter.current_timestamp(1000), Ok(60_000));
    }

    #[test]
    fn test_unauthorized_setters() {
        let mut minter = create_test_minter();
        let hacker = CallContext::new("ST1HACKER", 1000);

        assert!(minter.set_archiver_role(&hacker, "ST1FAKE".into()).is_err());
        assert!(minter
            .set_submission_contract(&hacker, "ST2FAKE".into())
            .is_err());
        assert!(minter.set_approval_contract(&hacker, "ST2FAKE".into()).is_err());
        assert!(minter
            .set_timestamp_contract(&hacker, "ST2FAKE".into())
            .is_err());

        assert_eq!(minter.state(), &RegistryState::new("ST1ARCHIVER".into()));
        assert!(minter.events().is_empty());
    }

    #[test]
    fn test_archiver_handover() {
        let mut minter = create_test_minter();
        minter
            .set_archiver_role(&archiver(), "ST1GOVERNANCE".into())
            .unwrap();

        // Old archiver has lost the role
        assert!(minter
            .set_submission_contract(&archiver(), "ST2SUBMISSION".into())
            .is_err());

        let gov = CallContext::new("ST1GOVERNANCE", 1000);
        assert!(minter
            .set_submission_contract(&gov, "ST2SUBMISSION".into())
            .is_ok());
        assert_eq!(
            minter.submission_contract(),
            Some(&Principal::from("ST2SUBMISSION"))
        );
    }

    #[test]
    fn test_events_recorded() {
        let mut minter = configured_minter();
        minter.mint_decision(&caller(), request(1)).unwrap();
        let _ = minter.mint_decision(&caller(), request(1));

        let events = minter.drain_events();
        assert_eq!(events.len(), 3);
        assert!(matches!(
            events[0],
            MinterEvent::ConfigurationChanged {
                field: ConfigField::SubmissionContract,
                previous: None,
                ..
            }
        ));
        assert!(matches!(
            events[2],
            MinterEvent::DecisionMinted {
                nft_id: 0,
                submission_id: 1,
                timestamp: 60_000,
                ..
            }
        ));
        assert!(minter.events().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut minter = configured_minter();
        minter.mint_decision(&caller(), request(1)).unwrap();
        minter.reset();

        assert_eq!(minter.next_nft_id(), 0);
        assert!(!minter.is_minted(1));
        assert!(minter.get_decision(0).is_none());
        assert!(minter.submission_contract().is_none());
        assert!(minter.events().is_empty());
    }

    #[test]
    fn test_invariants_hold_after_mints() {
        let mut minter = configured_minter();
        for id in [5, 9, 2] {
            minter.mint_decision(&caller(), request(id)).unwrap();
        }
        let _ = minter.mint_decision(&caller(), request(9));
        assert!(minter.check_invariants().is_valid());
        assert_eq!(minter.next_nft_id(), 3);
    }
}
