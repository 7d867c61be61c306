//! # Block Height Clock
//!
//! Derives timestamps from block height: `height * seconds_per_block`.

use crate::domain::config::DEFAULT_SECONDS_PER_BLOCK;
use crate::domain::value_objects::Principal;
use crate::errors::CollaboratorError;
use crate::ports::outbound::TimestampSource;

/// Height-derived clock.
///
/// A product that overflows `u64` is reported as `Unavailable` (108).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockHeightClock {
    seconds_per_block: u64,
}

impl BlockHeightClock {
    /// Create a clock with the given block time.
    #[must_use]
    pub const fn new(seconds_per_block: u64) -> Self {
        Self { seconds_per_block }
    }

    /// Seconds per block.
    #[must_use]
    pub const fn seconds_per_block(&self) -> u64 {
        self.seconds_per_block
    }
}

impl Default for BlockHeightClock {
    fn default() -> Self {
        Self::new(DEFAULT_SECONDS_PER_BLOCK)
    }
}

impl TimestampSource for BlockHeightClock {
    fn timestamp_at(
        &self,
        _contract: &Principal,
        block_height: u64,
    ) -> Result<u64, CollaboratorError> {
        block_height
            .checked_mul(self.seconds_per_block)
            .ok_or_else(|| {
                CollaboratorError::Unavailable(format!(
                    "timestamp overflow at height {block_height}"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_times_sixty() {
        let clock = BlockHeightClock::default();
        let contract = Principal::from("ST2TIMESTAMP");
        assert_eq!(clock.timestamp_at(&contract, 1000), Ok(60_000));
        assert_eq!(clock.timestamp_at(&contract, 0), Ok(0));
    }

    #[test]
    fn test_custom_block_time() {
        let clock = BlockHeightClock::new(600);
        assert_eq!(clock.seconds_per_block(), 600);
        assert_eq!(
            clock.timestamp_at(&Principal::from("ST2TIMESTAMP"), 3),
            Ok(1800)
        );
    }

    #[test]
    fn test_overflow_is_unavailable() {
        let clock = BlockHeightClock::default();
        assert!(matches!(
            clock.timestamp_at(&Principal::from("ST2TIMESTAMP"), u64::MAX),
            Err(CollaboratorError::Unavailable(_))
        ));
    }
}
