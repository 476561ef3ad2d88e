use crate::controller::Model;
use crate::event::Effect;

/**
 * Claim submission handlers
 *
 * A claim sends `claimTokens()` from the connected signer and awaits
 * transaction finality before refreshing the claimed count.
 *
 * Validation Process:
 * 1. A signer must be present (connected state)
 * 2. The claim limit must not be exhausted
 * 3. The clicked slot must not already be claimed
 *
 * Business Logic:
 * - `is_loading` is set for the whole submission and cleared when the
 *   transaction settles or fails, regardless of outcome
 * - Overlapping submissions are prevented only by the UI disabling already
 *   claimed slots; there is deliberately no atomic guard here
 * - Failures are logged only; the slot stays clickable for a manual retry
 */
pub fn handle_claim_requested(model: &mut Model, slot: u8) -> Vec<Effect> {
    // ===== VALIDATION PHASE =====

    if !model.connection.is_connected() {
        log::info!("claim requested without a signer; ignoring");
        return Vec::new();
    }
    if model.claim_status.is_exhausted() {
        log::info!("claim requested but the claim limit is exhausted; ignoring");
        return Vec::new();
    }
    if model.claim_status.slot_claimed(slot) {
        log::info!("claim requested for already-claimed slot {slot}; ignoring");
        return Vec::new();
    }

    // ===== EFFECTS PHASE =====

    model.flags.is_loading = true;
    vec![Effect::SubmitClaim]
}

pub fn handle_claim_settled(model: &mut Model) -> Vec<Effect> {
    model.flags.is_loading = false;
    log::info!("claim transaction settled");

    // The on-chain count moved; re-derive what the slots show
    vec![Effect::FetchClaimCount]
}

pub fn handle_claim_failed(model: &mut Model, reason: &str) -> Vec<Effect> {
    model.flags.is_loading = false;
    log::warn!("claim failed: {reason}");
    Vec::new()
}
