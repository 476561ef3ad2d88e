use crate::controller::Model;
use crate::event::Effect;

/**
 * Claimed-count refresh handlers
 *
 * The count is read from the contract's `claims` view for the connected
 * address. A failed read keeps the previous count on screen (stale read,
 * no automatic retry) — the next settled claim or reconnect refreshes it.
 */
pub fn handle_count_fetched(model: &mut Model, count: u8) -> Vec<Effect> {
    model.claim_status.record(count);
    log::debug!("claimed count refreshed: {}", model.claim_status.claimed_count);
    Vec::new()
}

pub fn handle_count_fetch_failed(model: &mut Model, reason: &str) -> Vec<Effect> {
    log::warn!(
        "claimed-count read failed, keeping stale count {}: {reason}",
        model.claim_status.claimed_count
    );
    Vec::new()
}
