use crate::constants::CLAIM_LIMIT;

/**
 * Per-address claim status
 *
 * Tracks how many of the three claim slots the connected address has used.
 * The count is fetched from the contract's `claims` view; it is refreshed
 * after every settled claim and whenever the connected address changes.
 *
 * Design Notes:
 * - The count is clamped to CLAIM_LIMIT on entry: every count at or above
 *   the limit renders identically (all slots claimed), so clamping cannot
 *   change anything the user sees
 * - No local cap enforcement beyond slot disabling; the contract is the
 *   authority on whether a claim succeeds
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClaimStatus {
    /// Tokens already claimed by the connected address, in [0, CLAIM_LIMIT]
    pub claimed_count: u8,
}

impl ClaimStatus {
    /// Record a freshly fetched count, clamped to the claim limit.
    pub fn record(&mut self, count: u8) {
        self.claimed_count = count.min(CLAIM_LIMIT);
    }

    /// Whether every slot has been claimed.
    pub fn is_exhausted(&self) -> bool {
        self.claimed_count >= CLAIM_LIMIT
    }

    /// Whether slot `slot` (0-based) has already been claimed.
    /// Exactly the slots with index below the count render as "Claimed".
    pub fn slot_claimed(&self, slot: u8) -> bool {
        slot < self.claimed_count
    }

    /// Decorative coin visibility: shown exactly while claims remain.
    pub fn show_decoration(&self) -> bool {
        self.claimed_count < CLAIM_LIMIT
    }
}

/// Presentation flags with no on-chain counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiFlags {
    /// True only while a claim transaction is in flight
    pub is_loading: bool,
    /// Whether the reward panel is open
    pub show_reward_panel: bool,
}
