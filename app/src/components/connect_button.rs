use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConnectButtonProps {
    pub on_connect: Callback<()>,
}

/// Shown while disconnected. Stays rendered after a rejected request so
/// the user can simply try again.
#[function_component(ConnectButton)]
pub fn connect_button(props: &ConnectButtonProps) -> Html {
    let onclick = {
        let on_connect = props.on_connect.clone();
        Callback::from(move |_| on_connect.emit(()))
    };
    html! {
        <button class="connect-button" {onclick}>{ "Connect Wallet" }</button>
    }
}
