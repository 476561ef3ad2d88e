pub mod claim;
pub mod connect;
pub mod initialize;
pub mod refresh;
pub mod toggle;

pub use claim::*;
pub use connect::*;
pub use initialize::*;
pub use refresh::*;
pub use toggle::*;

use crate::config::AppConfig;
use crate::event::{Effect, Msg};
use crate::state::{ClaimStatus, ConnectionState, UiFlags};

/**
 * View-controller model
 *
 * The complete UI state of the page. Everything here is plain data: the
 * provider, signer, and contract handles live in the view component that
 * executes effects, which keeps every transition below testable without a
 * browser.
 *
 * Lifecycle:
 * 1. Created once at mount with the startup configuration
 * 2. Mutated only by the event handlers in this module
 * 3. Dropped with the page — nothing is persisted across reloads
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// Startup configuration passed in at construction
    pub config: AppConfig,
    /// Whether an injected wallet provider was found at page load
    pub provider_available: bool,
    /// Wallet connection state
    pub connection: ConnectionState,
    /// Claimed-count state for the connected address
    pub claim_status: ClaimStatus,
    /// Presentation flags
    pub flags: UiFlags,
}

impl Model {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            provider_available: false,
            connection: ConnectionState::default(),
            claim_status: ClaimStatus::default(),
            flags: UiFlags::default(),
        }
    }
}

/**
 * Dispatches one controller event to its operation handler
 *
 * This is the single entry point of the state machine: the view component
 * feeds every event through here and then executes whatever effects the
 * handler scheduled. Handlers mutate the model in place and never perform
 * async work themselves.
 */
pub fn handle_event(model: &mut Model, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::ProviderDetected { preauthorized } => handle_provider_detected(model, preauthorized),
        Msg::ProviderMissing => handle_provider_missing(model),
        Msg::ConnectRequested => handle_connect_requested(model),
        Msg::WalletConnected { address } => handle_wallet_connected(model, address),
        Msg::ConnectFailed { reason } => handle_connect_failed(model, &reason),
        Msg::ClaimCountFetched { count } => handle_count_fetched(model, count),
        Msg::ClaimCountFetchFailed { reason } => handle_count_fetch_failed(model, &reason),
        Msg::ClaimRequested { slot } => handle_claim_requested(model, slot),
        Msg::ClaimSettled => handle_claim_settled(model),
        Msg::ClaimFailed { reason } => handle_claim_failed(model, &reason),
        Msg::RewardPanelToggled => handle_panel_toggled(model),
    }
}
