use alloy_primitives::Address;

use crate::config::AppConfig;
use crate::controller::{handle_event, Model};
use crate::event::{Effect, Msg};

fn test_config() -> AppConfig {
    AppConfig {
        contract_address: Address::repeat_byte(0x42),
        rpc_url: "http://localhost:8545".to_string(),
    }
}

fn claimant() -> Address {
    Address::repeat_byte(0x11)
}

fn fresh_model() -> Model {
    Model::new(test_config())
}

/// Model after page load found a provider without an authorized account.
fn detected_model() -> Model {
    let mut model = fresh_model();
    handle_event(&mut model, Msg::ProviderDetected { preauthorized: false });
    model
}

/// Model after a successful connect and an initial count fetch.
fn connected_model(count: u8) -> Model {
    let mut model = detected_model();
    handle_event(&mut model, Msg::WalletConnected { address: claimant() });
    handle_event(&mut model, Msg::ClaimCountFetched { count });
    model
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== INITIALIZATION =====

    #[test]
    fn missing_provider_stays_disconnected_without_effects() {
        let mut model = fresh_model();
        let effects = handle_event(&mut model, Msg::ProviderMissing);

        assert!(effects.is_empty(), "no wallet means nothing to schedule");
        assert!(!model.provider_available);
        assert!(!model.connection.is_connected());
    }

    #[test]
    fn preauthorized_provider_connects_without_prompt() {
        let mut model = fresh_model();
        let effects = handle_event(&mut model, Msg::ProviderDetected { preauthorized: true });

        assert_eq!(effects, vec![Effect::RequestAccounts]);
        assert!(model.provider_available);
    }

    #[test]
    fn unauthorized_provider_waits_for_the_user() {
        let mut model = fresh_model();
        let effects = handle_event(&mut model, Msg::ProviderDetected { preauthorized: false });

        assert!(effects.is_empty(), "connection must wait for a click");
        assert!(model.provider_available);
    }

    // ===== CONNECT =====

    #[test]
    fn connect_click_requests_account_access() {
        let mut model = detected_model();
        let effects = handle_event(&mut model, Msg::ConnectRequested);

        assert_eq!(effects, vec![Effect::RequestAccounts]);
    }

    #[test]
    fn connect_click_without_provider_is_logged_only() {
        let mut model = fresh_model();
        handle_event(&mut model, Msg::ProviderMissing);

        let effects = handle_event(&mut model, Msg::ConnectRequested);
        assert!(effects.is_empty(), "no provider, no account request");
        assert!(!model.connection.is_connected());
    }

    #[test]
    fn connect_click_while_connected_is_a_no_op() {
        let mut model = connected_model(0);
        let effects = handle_event(&mut model, Msg::ConnectRequested);

        assert!(effects.is_empty());
    }

    #[test]
    fn wallet_grant_connects_and_schedules_exactly_one_refresh() {
        let mut model = detected_model();
        let effects = handle_event(&mut model, Msg::WalletConnected { address: claimant() });

        assert!(model.connection.is_connected());
        assert_eq!(model.connection.address(), Some(claimant()));
        assert_eq!(
            effects,
            vec![Effect::FetchClaimCount],
            "a fresh address requires exactly one count refresh"
        );
    }

    #[test]
    fn wallet_rejection_leaves_the_page_disconnected() {
        let mut model = detected_model();
        let effects = handle_event(
            &mut model,
            Msg::ConnectFailed { reason: "user rejected the request".to_string() },
        );

        assert!(effects.is_empty(), "rejection must not retry automatically");
        assert!(!model.connection.is_connected(), "connect button stays rendered");
    }

    // ===== CLAIM COUNT REFRESH =====

    #[test]
    fn refresh_records_the_fetched_count() {
        let mut model = connected_model(0);
        let effects = handle_event(&mut model, Msg::ClaimCountFetched { count: 2 });

        assert!(effects.is_empty());
        assert_eq!(model.claim_status.claimed_count, 2);
    }

    #[test]
    fn refresh_clamps_counts_above_the_limit() {
        let mut model = connected_model(0);
        handle_event(&mut model, Msg::ClaimCountFetched { count: 7 });

        assert_eq!(model.claim_status.claimed_count, 3);
        assert!(model.claim_status.is_exhausted());
    }

    #[test]
    fn failed_refresh_keeps_the_stale_count() {
        let mut model = connected_model(2);
        let effects = handle_event(
            &mut model,
            Msg::ClaimCountFetchFailed { reason: "rpc down".to_string() },
        );

        assert!(effects.is_empty(), "reads are not retried automatically");
        assert_eq!(model.claim_status.claimed_count, 2);
    }

    // ===== CLAIM SUBMISSION =====

    #[test]
    fn claim_without_a_signer_schedules_nothing() {
        let mut model = detected_model();
        let effects = handle_event(&mut model, Msg::ClaimRequested { slot: 0 });

        assert!(effects.is_empty(), "no signer, no network call");
        assert!(!model.flags.is_loading);
    }

    #[test]
    fn claim_at_the_limit_schedules_nothing() {
        let mut model = connected_model(3);
        let effects = handle_event(&mut model, Msg::ClaimRequested { slot: 2 });

        assert!(effects.is_empty(), "exhausted claims never reach the network");
        assert!(!model.flags.is_loading);
    }

    #[test]
    fn claim_on_an_already_claimed_slot_schedules_nothing() {
        let mut model = connected_model(2);
        let effects = handle_event(&mut model, Msg::ClaimRequested { slot: 0 });

        assert!(effects.is_empty());
        assert!(!model.flags.is_loading);
    }

    #[test]
    fn claim_on_an_open_slot_sets_loading_and_submits() {
        let mut model = connected_model(2);
        let effects = handle_event(&mut model, Msg::ClaimRequested { slot: 2 });

        assert_eq!(effects, vec![Effect::SubmitClaim]);
        assert!(model.flags.is_loading);
    }

    #[test]
    fn settlement_clears_loading_and_refreshes_the_count() {
        let mut model = connected_model(0);
        handle_event(&mut model, Msg::ClaimRequested { slot: 0 });

        let effects = handle_event(&mut model, Msg::ClaimSettled);
        assert_eq!(effects, vec![Effect::FetchClaimCount]);
        assert!(!model.flags.is_loading, "loading clears once the claim settles");
    }

    #[test]
    fn failure_clears_loading_without_scheduling_a_retry() {
        let mut model = connected_model(0);
        handle_event(&mut model, Msg::ClaimRequested { slot: 0 });

        let effects = handle_event(
            &mut model,
            Msg::ClaimFailed { reason: "rejected in wallet".to_string() },
        );
        assert!(effects.is_empty(), "failures only log; the user retries by hand");
        assert!(!model.flags.is_loading, "loading clears regardless of outcome");
    }

    #[test]
    fn count_never_decreases_across_a_claim_round_trip() {
        let mut model = connected_model(1);

        handle_event(&mut model, Msg::ClaimRequested { slot: 1 });
        handle_event(&mut model, Msg::ClaimSettled);
        handle_event(&mut model, Msg::ClaimCountFetched { count: 2 });

        assert_eq!(model.claim_status.claimed_count, 2);
        assert!(!model.flags.is_loading);
    }

    // ===== PANEL TOGGLE =====

    #[test]
    fn toggle_flips_the_panel_and_nothing_else() {
        let mut model = connected_model(0);
        let before = model.clone();

        let effects = handle_event(&mut model, Msg::RewardPanelToggled);
        assert!(effects.is_empty());
        assert!(model.flags.show_reward_panel);

        handle_event(&mut model, Msg::RewardPanelToggled);
        assert_eq!(model, before, "two toggles restore the exact model");
    }

    // ===== RENDER DERIVATIONS =====

    #[test]
    fn count_zero_leaves_every_slot_open_with_decoration() {
        let model = connected_model(0);

        for slot in 0..3 {
            assert!(!model.claim_status.slot_claimed(slot), "slot {slot} must be open");
        }
        assert!(model.claim_status.show_decoration());
    }

    #[test]
    fn count_two_claims_the_first_two_slots_and_keeps_decoration() {
        let model = connected_model(2);

        assert!(model.claim_status.slot_claimed(0));
        assert!(model.claim_status.slot_claimed(1));
        assert!(!model.claim_status.slot_claimed(2));
        assert!(model.claim_status.show_decoration());
    }

    #[test]
    fn count_three_claims_every_slot_and_hides_decoration() {
        let model = connected_model(3);

        for slot in 0..3 {
            assert!(model.claim_status.slot_claimed(slot), "slot {slot} must be claimed");
        }
        assert!(!model.claim_status.show_decoration());
    }
}
