use alloy_primitives::Address;

/// Controller events.
///
/// Every user interaction and every async completion re-enters the state
/// machine as one of these. Handlers in [`crate::controller`] consume them
/// and return the follow-up [`Effect`]s they schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// An injected wallet provider was found on the page
    ProviderDetected {
        /// Whether the provider already holds an authorized account, in
        /// which case connection proceeds without a user prompt
        preauthorized: bool,
    },
    /// No injected wallet provider exists; the read-only fallback transport
    /// is in use and claiming is unavailable
    ProviderMissing,
    /// The user clicked the connect button
    ConnectRequested,
    /// Account access was granted and the signer address is known
    WalletConnected {
        /// Address of the authorized signing account
        address: Address,
    },
    /// The wallet refused or failed the account request
    ConnectFailed {
        /// Diagnostic description, logged only
        reason: String,
    },
    /// The claimed-count read completed
    ClaimCountFetched {
        /// Claimed-token count for the connected address, in [0, 3]
        count: u8,
    },
    /// The claimed-count read failed; the prior count stays in place
    ClaimCountFetchFailed {
        /// Diagnostic description, logged only
        reason: String,
    },
    /// The user clicked claim slot `slot` (0-based)
    ClaimRequested {
        /// Index of the clicked slot
        slot: u8,
    },
    /// The claim transaction reached finality
    ClaimSettled,
    /// The claim transaction failed or was rejected in the wallet
    ClaimFailed {
        /// Diagnostic description, logged only
        reason: String,
    },
    /// The user toggled the reward panel
    RewardPanelToggled,
}

/// Follow-up effects scheduled by a state transition.
///
/// The controller never performs async work itself; it enumerates the work
/// here and the view component executes it, feeding the outcome back in as
/// a [`Msg`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Request account access from the wallet provider (permission prompt)
    RequestAccounts,
    /// Read the claimed count for the connected address
    FetchClaimCount,
    /// Send `claimTokens()` from the current signer and await finality
    SubmitClaim,
}
