use alloy_primitives::Address;

use crate::controller::Model;
use crate::event::Effect;
use crate::state::ConnectionState;

/**
 * Wallet connection handlers
 *
 * Connecting asks the injected provider for account access, which raises a
 * permission prompt in the wallet UI. On grant the first authorized account
 * becomes the signer address and the claimed count is fetched for it.
 *
 * Business Logic:
 * - Connect without a provider is a logged no-op; the button stays rendered
 *   so the user can retry after installing a wallet
 * - A successful grant schedules exactly one claimed-count refresh
 * - Rejection leaves the page in the disconnected state with no visible
 *   error; the user may simply click connect again
 */
pub fn handle_connect_requested(model: &mut Model) -> Vec<Effect> {
    if !model.provider_available {
        log::info!("connect requested but no wallet provider is installed");
        return Vec::new();
    }
    if model.connection.is_connected() {
        return Vec::new();
    }

    vec![Effect::RequestAccounts]
}

pub fn handle_wallet_connected(model: &mut Model, address: Address) -> Vec<Effect> {
    model.connection = ConnectionState::Connected { address };
    log::info!("wallet connected: {address}");

    // Address changed, so the claimed count shown must be re-derived
    vec![Effect::FetchClaimCount]
}

pub fn handle_connect_failed(model: &mut Model, reason: &str) -> Vec<Effect> {
    if model.connection.is_connected() {
        // A request superseded by an earlier grant; nothing to undo.
        log::debug!("ignoring stale connection failure: {reason}");
        return Vec::new();
    }
    log::warn!("wallet connection failed: {reason}");
    Vec::new()
}
