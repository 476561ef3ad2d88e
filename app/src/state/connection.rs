use alloy_primitives::Address;

/**
 * Wallet connection state
 *
 * Tracks whether an authorized signing account is available. The signer
 * address exists only in the `Connected` variant, so "address is present
 * only while connected" holds by construction rather than by convention.
 *
 * Lifecycle:
 * 1. Starts `Disconnected` on page load
 * 2. Becomes `Connected` when the wallet grants account access
 * 3. Never cleared — there is no disconnect flow; state dies with the page
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// No authorized account; the connect button is rendered
    #[default]
    Disconnected,
    /// The wallet granted access and this address can sign claims
    Connected {
        /// Address of the authorized account
        address: Address,
    },
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected { .. })
    }

    pub fn address(&self) -> Option<Address> {
        match self {
            ConnectionState::Connected { address } => Some(*address),
            ConnectionState::Disconnected => None,
        }
    }
}
