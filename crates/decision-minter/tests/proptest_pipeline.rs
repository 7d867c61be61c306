//! Property-based tests for the mint pipeline rejection taxonomy.

use decision_minter::prelude::*;
use proptest::prelude::*;

fn archiver() -> CallContext {
    CallContext::new("ST1ARCHIVER", 1000)
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

fn principal_strategy() -> impl Strategy<Value = String> {
    "ST[0-9A-Z]{1,12}"
}

fn valid_uri_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9:/.]{1,256}"
}

fn bad_hash_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..32),
        prop::collection::vec(any::<u8>(), 33..96),
    ]
}

proptest! {
    #[test]
    fn self_mint_always_101(
        who in principal_strategy(),
        submission_id in any::<u64>(),
        uri in ".{0,300}",
        hash in prop::collection::vec(any::<u8>(), 0..64),
        configured in any::<bool>(),
    ) {
        let mut minter = if configured { configured_minter() } else { create_test_minter() };
        let ctx = CallContext::new(who.as_str(), 1000);
        let result = minter.mint_decision(
            &ctx,
            MintDecisionRequest::new(who.as_str(), submission_id, uri, hash),
        );
        prop_assert_eq!(result.map_err(|e| e.code()), Err(codes::SELF_MINT));
    }

    #[test]
    fn bad_uri_length_always_102(
        submission_id in any::<u64>(),
        extra in 1usize..64,
        hash in prop::collection::vec(any::<u8>(), 0..64),
        empty in any::<bool>(),
    ) {
        let mut minter = configured_minter();
        let uri = if empty { String::new() } else { "u".repeat(256 + extra) };
        let result = minter.mint_decision(
            &CallContext::default(),
            MintDecisionRequest::new("ST1GOV", submission_id, uri, hash),
        );
        prop_assert_eq!(result.map_err(|e| e.code()), Err(codes::INVALID_METADATA_URI));
    }

    #[test]
    fn bad_hash_length_always_103(
        submission_id in any::<u64>(),
        uri in valid_uri_strategy(),
        hash in bad_hash_strategy(),
        configured in any::<bool>(),
    ) {
        let mut minter = if configured { configured_minter() } else { create_test_minter() };
        let result = minter.mint_decision(
            &CallContext::default(),
            MintDecisionRequest::new("ST1GOV", submission_id, uri, hash),
        );
        prop_assert_eq!(result.map_err(|e| e.code()), Err(codes::INVALID_CONTENT_HASH));
        prop_assert_eq!(minter.next_nft_id(), 0);
    }

    #[test]
    fn minted_submission_always_107(
        submission_id in any::<u64>(),
        recipient in principal_strategy(),
        uri in valid_uri_strategy(),
        hash in any::<[u8; 32]>(),
    ) {
        prop_assume!(recipient != "ST1CALLER");
        let mut minter = configured_minter();
        minter
            .mint_decision(
                &CallContext::default(),
                MintDecisionRequest::new("ST1GOV", submission_id, "ipfs://first", [0xaa; 32]),
            )
            .unwrap();

        let again = minter.mint_decision(
            &CallContext::default(),
            MintDecisionRequest::new(recipient.as_str(), submission_id, uri, hash),
        );
        prop_assert_eq!(again, Err(MintError::AlreadyMinted(submission_id)));
    }

    #[test]
    fn next_id_counts_successful_mints(
        submission_ids in prop::collection::vec(0u64..20, 0..30),
    ) {
        let mut minter = configured_minter();
        let mut successes = 0u64;

        for submission_id in submission_ids {
            let expected = minter.next_nft_id();
            let result = minter.mint_decision(
                &CallContext::default(),
                MintDecisionRequest::new("ST1GOV", submission_id, "ipfs://x", [1u8; 32]),
            );
            if let Ok(id) = result {
                prop_assert_eq!(id, expected);
                successes += 1;
            }
            prop_assert_eq!(minter.next_nft_id(), successes);
        }

        prop_assert!(minter.check_invariants().is_valid());
    }

    #[test]
    fn non_archiver_setters_never_mutate(
        intruder in principal_strategy(),
        value in principal_strategy(),
    ) {
        prop_assume!(intruder != "ST1ARCHIVER");
        let mut minter = configured_minter();
        let before = minter.state().clone();
        let ctx = CallContext::new(intruder.as_str(), 1000);

        prop_assert!(minter.set_archiver_role(&ctx, value.as_str().into()).is_err());
        prop_assert!(minter.set_submission_contract(&ctx, value.as_str().into()).is_err());
        prop_assert!(minter.set_approval_contract(&ctx, value.as_str().into()).is_err());
        prop_assert!(minter.set_timestamp_contract(&ctx, value.as_str().into()).is_err());
        prop_assert_eq!(minter.state(), &before);
    }
}
