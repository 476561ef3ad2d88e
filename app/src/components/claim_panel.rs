use yew::prelude::*;

use crate::constants::CLAIM_LIMIT;

#[derive(Properties, PartialEq)]
pub struct ClaimPanelProps {
    /// Tokens already claimed by the connected address
    pub claimed_count: u8,
    /// Whether the slot grid is open
    pub show_panel: bool,
    /// Whether unclaimed slots carry the bouncing coin
    pub show_decoration: bool,
    pub on_toggle: Callback<()>,
    pub on_claim: Callback<u8>,
}

/// The reward panel: a toggle button plus one claim slot per claimable
/// token. Slot `i` is disabled and labeled "Claimed" exactly when
/// `i < claimed_count`.
#[function_component(ClaimPanel)]
pub fn claim_panel(props: &ClaimPanelProps) -> Html {
    let open_panel = {
        let on_toggle = props.on_toggle.clone();
        let show_panel = props.show_panel;
        // The button only opens the panel; once open it stays open.
        Callback::from(move |_| {
            if !show_panel {
                on_toggle.emit(());
            }
        })
    };

    html! {
        <>
            <button class="toggle-button" onclick={open_panel}>{ "Claim Reward" }</button>
            if props.show_panel {
                <div>
                    <h2 class="panel-title">{ "Claim your Tokens" }</h2>
                    <div class="slot-grid">
                        { for (0..CLAIM_LIMIT).map(|slot| render_slot(props, slot)) }
                    </div>
                </div>
            }
        </>
    }
}

fn render_slot(props: &ClaimPanelProps, slot: u8) -> Html {
    let claimed = slot < props.claimed_count;
    // Disabled slots cannot fire this, and the controller guards again for
    // anything synthetic that slips through.
    let onclick = {
        let on_claim = props.on_claim.clone();
        Callback::from(move |_| on_claim.emit(slot))
    };

    html! {
        <button
            key={slot.to_string()}
            class={classes!("claim-slot", claimed.then_some("claimed"))}
            disabled={claimed}
            {onclick}
        >
            if !claimed && props.show_decoration {
                <span class="coin bounce">{ "🪙" }</span>
            }
            <span>{ if claimed { "Claimed" } else { "Claim Token" } }</span>
        </button>
    }
}
