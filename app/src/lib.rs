pub mod app;
pub mod components;
pub mod config;
pub mod constants;
pub mod contract;
pub mod controller;
pub mod error;
pub mod event;
pub mod rpc;
pub mod state;
pub mod utils;
pub mod wallet;

#[cfg(test)]
pub mod test;

use crate::app::{App, AppProps};
use crate::config::AppConfig;

/**
 * Token Claimer
 *
 * A single-page browser front-end, compiled to WebAssembly, for claiming
 * reward tokens from a fixed on-chain contract. Each wallet may claim up to
 * three tokens; the page reflects the claimed count and disables exhausted
 * claim slots.
 *
 * Key Features:
 * - Detects a browser-injected wallet provider and connects on demand
 * - Auto-connects when the provider already holds an authorized account
 * - Reads the per-address claimed count via the contract's `claims` view
 * - Submits `claimTokens` transactions and awaits finality before refresh
 * - Falls back to a read-only JSON-RPC endpoint when no wallet is installed
 *
 * Architecture:
 * - Controller: pure state machine; each event handler returns the follow-up
 *   effects it schedules, so every transition is explicit and testable
 * - Wallet adapter: thin wrapper over the injected provider's request RPC
 * - Contract client: `claims` reads and `claimTokens` sends over JSON-RPC
 * - Yew component: executes scheduled effects and renders the derived view
 *
 * Workflow:
 * 1. Page load probes for an injected provider and authorized accounts
 * 2. User connects the wallet (permission prompt) and the count is fetched
 * 3. User claims from an open slot; the count refreshes after finality
 * 4. All failures are logged to the console only; the user simply retries
 */
pub fn run_app() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    match AppConfig::from_env() {
        Ok(config) => {
            yew::Renderer::<App>::with_props(AppProps { config }).render();
        }
        Err(err) => {
            // Without a valid contract address there is nothing to render against.
            log::error!("invalid build-time configuration: {err}");
        }
    }
}
