use crate::controller::Model;
use crate::event::Effect;

/**
 * Page-load initialization handlers
 *
 * The view component probes the page for an injected wallet provider at
 * mount and reports the outcome here.
 *
 * Business Logic:
 * - A provider that already holds an authorized account proceeds directly
 *   to the connect flow, without a user prompt
 * - A provider without authorization waits for the user to click connect
 * - A missing provider is not an error: the read-only fallback transport is
 *   already in place and claiming is simply unavailable
 */
pub fn handle_provider_detected(model: &mut Model, preauthorized: bool) -> Vec<Effect> {
    model.provider_available = true;

    if preauthorized {
        // Silent reconnect for returning users
        vec![Effect::RequestAccounts]
    } else {
        Vec::new()
    }
}

pub fn handle_provider_missing(model: &mut Model) -> Vec<Effect> {
    model.provider_available = false;
    log::info!("no injected wallet provider; claiming unavailable, reads fall back to the configured endpoint");
    Vec::new()
}
