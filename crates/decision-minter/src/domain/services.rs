//! # Domain Services
//!
//! Pure checks shared by the minter: the role guard and the input format
//! rules of the mint pipeline. Nothing here touches state.

use crate::domain::value_objects::{ContentHash, Principal};
use crate::errors::{AccessError, MintError};

/// Role guard shared by every configuration setter.
///
/// Passes only when `caller` is exactly `archiver`.
pub fn authorize(caller: &Principal, archiver: &Principal) -> Result<(), AccessError> {
    if caller == archiver {
        Ok(())
    } else {
        Err(AccessError::Unauthorized {
            caller: caller.clone(),
            archiver: archiver.clone(),
        })
    }
}

/// Rejects a mint whose recipient is the caller.
pub fn check_not_self_mint(caller: &Principal, recipient: &Principal) -> Result<(), MintError> {
    if caller == recipient {
        return Err(MintError::SelfMint);
    }
    Ok(())
}

/// Metadata URI must be 1..=`max_len` characters.
///
/// Length is counted in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane counts as two.
pub fn check_metadata_uri(uri: &str, max_len: usize) -> Result<(), MintError> {
    let len = uri.encode_utf16().count();
    if len == 0 || len > max_len {
        return Err(MintError::InvalidMetadataUri { len, max: max_len });
    }
    Ok(())
}

/// Content hash must be exactly 32 bytes.
pub fn check_content_hash(bytes: &[u8]) -> Result<ContentHash, MintError> {
    ContentHash::from_slice(bytes).ok_or(MintError::InvalidContentHash { len: bytes.len() })
}
