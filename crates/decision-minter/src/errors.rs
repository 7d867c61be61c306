//! # Error Types
//!
//! All error types for the decision minter.

use crate::domain::value_objects::Principal;
use thiserror::Error;

// =============================================================================
// MINT ERRORS
// =============================================================================

/// Rejection reasons for `mint_decision`.
///
/// Each variant maps to a stable numeric code (see [`MintError::code`]).
/// Codes are an enumerated taxonomy, not a magnitude.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MintError {
    /// Submission or timestamp collaborator is not configured.
    #[error("minter not configured: submission and timestamp contracts are required")]
    NotConfigured,

    /// Recipient is the caller.
    #[error("self-mint is not allowed")]
    SelfMint,

    /// Metadata URI is empty or too long.
    #[error("invalid metadata URI: length {len} (allowed 1..={max})")]
    InvalidMetadataUri { len: usize, max: usize },

    /// Content hash is not 32 bytes.
    #[error("invalid content hash: expected 32 bytes, got {len}")]
    InvalidContentHash { len: usize },

    /// Submission registry rejected the submission.
    #[error("submission validation failed")]
    SubmissionInvalid,

    /// Approval authority did not approve the submission.
    #[error("submission not approved")]
    NotApproved,

    /// Submission id has already been minted.
    #[error("submission {0} already minted")]
    AlreadyMinted(u64),

    /// Timestamp source could not produce a timestamp.
    #[error("timestamp unavailable")]
    TimestampUnavailable,
}

impl MintError {
    /// Stable numeric code for this rejection.
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            Self::NotConfigured => codes::NOT_CONFIGURED,
            Self::SelfMint => codes::SELF_MINT,
            Self::InvalidMetadataUri { .. } => codes::INVALID_METADATA_URI,
            Self::InvalidContentHash { .. } => codes::INVALID_CONTENT_HASH,
            Self::SubmissionInvalid => codes::SUBMISSION_INVALID,
            Self::NotApproved => codes::NOT_APPROVED,
            Self::AlreadyMinted(_) => codes::ALREADY_MINTED,
            Self::TimestampUnavailable => codes::TIMESTAMP_UNAVAILABLE,
        }
    }
}

/// Numeric rejection codes returned by `mint_decision`.
pub mod codes {
    /// Submission or timestamp collaborator unset.
    pub const NOT_CONFIGURED: u32 = 100;
    /// Recipient equals caller.
    pub const SELF_MINT: u32 = 101;
    /// Metadata URI empty or longer than the limit.
    pub const INVALID_METADATA_URI: u32 = 102;
    /// Content hash not 32 bytes.
    pub const INVALID_CONTENT_HASH: u32 = 103;
    /// Submission validation failed.
    pub const SUBMISSION_INVALID: u32 = 104;
    /// Approval denied.
    pub const NOT_APPROVED: u32 = 105;
    /// Submission already minted.
    pub const ALREADY_MINTED: u32 = 107;
    /// Timestamp retrieval failed.
    pub const TIMESTAMP_UNAVAILABLE: u32 = 108;
}

// =============================================================================
// ACCESS ERRORS
// =============================================================================

/// Errors from role-gated configuration calls.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// Caller is not the archiver role.
    #[error("unauthorized: {caller} is not the archiver ({archiver})")]
    Unauthorized {
        caller: Principal,
        archiver: Principal,
    },
}

// =============================================================================
// COLLABORATOR ERRORS
// =============================================================================

/// Errors from external collaborator contracts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    /// Collaborator address is not configured.
    #[error("{0} contract not configured")]
    NotConfigured(&'static str),

    /// Content hash has the wrong length.
    #[error("malformed content hash: {len} bytes")]
    MalformedHash { len: usize },

    /// Collaborator rejected the request.
    #[error("rejected by {contract}: {reason}")]
    Rejected { contract: Principal, reason: String },

    /// Collaborator could not answer.
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// CONFIG ERRORS
// =============================================================================

/// Errors from loading or validating `MinterConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A field holds a value outside its allowed range.
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    /// Config text could not be parsed.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_error_codes() {
        assert_eq!(MintError::NotConfigured.code(), 100);
        assert_eq!(MintError::SelfMint.code(), 101);
        assert_eq!(
            MintError::InvalidMetadataUri { len: 0, max: 256 }.code(),
            102
        );
        assert_eq!(MintError::InvalidContentHash { len: 5 }.code(), 103);
        assert_eq!(MintError::SubmissionInvalid.code(), 104);
        assert_eq!(MintError::NotApproved.code(), 105);
        assert_eq!(MintError::AlreadyMinted(1).code(), 107);
        assert_eq!(MintError::TimestampUnavailable.code(), 108);
    }

    #[test]
    fn test_mint_error_display() {
        let err = MintError::InvalidContentHash { len: 33 };
        assert_eq!(err.to_string(), "invalid content hash: expected 32 bytes, got 33");

        let err = MintError::AlreadyMinted(7);
        assert_eq!(err.to_string(), "submission 7 already minted");
    }

    #[test]
    fn test_access_error_display() {
        let err = AccessError::Unauthorized {
            caller: Principal::from("ST1HACKER"),
            archiver: Principal::from("ST1ARCHIVER"),
        };
        assert!(err.to_string().contains("ST1HACKER"));
        assert!(err.to_string().contains("unauthorized"));
    }

    #[test]
    fn test_config_error_from_json() {
        let parse_err = serde_json::from_str::<u64>("not json").unwrap_err();
        let err: ConfigError = parse_err.into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
