pub mod claim_panel;
pub mod connect_button;

pub use claim_panel::ClaimPanel;
pub use connect_button::ConnectButton;
