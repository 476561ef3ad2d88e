//! The view controller: executes scheduled effects and renders the model.

use yew::prelude::*;

use crate::components::{ClaimPanel, ConnectButton};
use crate::config::AppConfig;
use crate::contract::ClaimContract;
use crate::controller::{handle_event, Model};
use crate::error::AppError;
use crate::event::{Effect, Msg};
use crate::rpc::{ReadOnlyProvider, Transport};
use crate::wallet::{InjectedProvider, WalletSigner};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

/**
 * Root component
 *
 * Owns the pure [`Model`] plus the handles the model deliberately does not
 * carry: the injected provider, the signer, and the contract client. Every
 * message goes through [`handle_event`]; the effects it returns are spawned
 * here and re-enter the component as further messages when they complete.
 */
pub struct App {
    model: Model,
    provider: Option<InjectedProvider>,
    signer: Option<WalletSigner>,
    contract: ClaimContract,
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = ctx.props().config.clone();
        let provider = InjectedProvider::detect();

        // One transport decision, made once: the injected provider when a
        // wallet exists, the read-only endpoint otherwise.
        let transport = match &provider {
            Some(provider) => Transport::Injected(provider.clone()),
            None => Transport::ReadOnly(ReadOnlyProvider::new(config.rpc_url.clone())),
        };
        let contract = ClaimContract::new(config.contract_address, transport);

        // Initialize: probe the provider for an already-authorized account.
        match provider.clone() {
            Some(provider) => ctx.link().send_future(async move {
                match provider.authorized_accounts().await {
                    Ok(accounts) => Msg::ProviderDetected { preauthorized: !accounts.is_empty() },
                    Err(err) => {
                        log::warn!("account probe failed: {err}");
                        Msg::ProviderDetected { preauthorized: false }
                    }
                }
            }),
            None => ctx.link().send_message(Msg::ProviderMissing),
        }

        Self {
            model: Model::new(config),
            provider,
            signer: None,
            contract,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        // The signer handle lives outside the pure model; materialize it as
        // soon as the wallet grants access so SubmitClaim can use it.
        if let Msg::WalletConnected { address } = &msg {
            if let Some(provider) = &self.provider {
                self.signer = Some(WalletSigner::new(provider.clone(), *address));
            }
        }

        let effects = handle_event(&mut self.model, msg);
        for effect in effects {
            self.run_effect(ctx, effect);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let connected = self.model.connection.is_connected();
        html! {
            <div class="page">
                <div class="card">
                    <h1 class="title">
                        { if connected { "Claim Rewards" } else { "Connect Your Wallet" } }
                    </h1>
                    if self.model.flags.is_loading {
                        <span class="loader" aria-label="claim in flight"></span>
                    }
                    if !connected {
                        <ConnectButton on_connect={ctx.link().callback(|_| Msg::ConnectRequested)} />
                    } else {
                        <ClaimPanel
                            claimed_count={self.model.claim_status.claimed_count}
                            show_panel={self.model.flags.show_reward_panel}
                            show_decoration={self.model.claim_status.show_decoration()}
                            on_toggle={ctx.link().callback(|_| Msg::RewardPanelToggled)}
                            on_claim={ctx.link().callback(|slot| Msg::ClaimRequested { slot })}
                        />
                    }
                </div>
            </div>
        }
    }
}

impl App {
    /// Spawn the async work behind one scheduled effect. Completion (or
    /// failure) re-enters the state machine as a message; nothing here
    /// surfaces an error to the user directly.
    fn run_effect(&mut self, ctx: &Context<Self>, effect: Effect) {
        match effect {
            Effect::RequestAccounts => {
                let Some(provider) = self.provider.clone() else {
                    log::warn!("account request scheduled without an injected provider");
                    return;
                };
                ctx.link().send_future(connect_wallet(provider));
            }
            Effect::FetchClaimCount => {
                let Some(address) = self.model.connection.address() else {
                    log::warn!("claimed-count refresh scheduled while disconnected");
                    return;
                };
                let contract = self.contract.clone();
                ctx.link().send_future(async move {
                    match contract.claimed_count(address).await {
                        Ok(count) => Msg::ClaimCountFetched { count },
                        Err(err) => Msg::ClaimCountFetchFailed { reason: err.to_string() },
                    }
                });
            }
            Effect::SubmitClaim => {
                let Some(signer) = self.signer.clone() else {
                    log::warn!("claim scheduled without a signer");
                    return;
                };
                let contract = self.contract.clone();
                ctx.link().send_future(async move {
                    match contract.claim_tokens(&signer).await {
                        Ok(()) => Msg::ClaimSettled,
                        Err(err) => Msg::ClaimFailed { reason: err.to_string() },
                    }
                });
            }
        }
    }
}

/// Ask the wallet for account access and resolve the signer address.
async fn connect_wallet(provider: InjectedProvider) -> Msg {
    match provider.request_accounts().await {
        Ok(accounts) => match accounts.first() {
            Some(raw) => match raw.parse() {
                Ok(address) => Msg::WalletConnected { address },
                Err(_) => Msg::ConnectFailed {
                    reason: AppError::MalformedAccount(raw.clone()).to_string(),
                },
            },
            None => Msg::ConnectFailed { reason: AppError::NoAccounts.to_string() },
        },
        Err(err) => Msg::ConnectFailed { reason: err.to_string() },
    }
}
