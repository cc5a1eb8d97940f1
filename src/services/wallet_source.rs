use std::collections::HashSet;

use crate::{models::wallet::WalletEntry, services::address::address_key};

pub const PRIMARY_LABEL: &str = "Primary Wallet";

/// Merge the social-login wallet and any linked wallets into one scan list.
///
/// Addresses are compared case-insensitively; the first occurrence wins and
/// keeps its original casing. Blank entries are dropped. Addresses are not
/// validated here, malformed ones surface as per-wallet scan errors.
pub fn collect_wallets(primary: Option<&str>, linked: &[String]) -> Vec<WalletEntry> {
    let mut seen = HashSet::new();
    let mut wallets = Vec::new();

    if let Some(primary) = primary.map(str::trim).filter(|a| !a.is_empty()) {
        seen.insert(address_key(primary));
        wallets.push(WalletEntry::new(primary, PRIMARY_LABEL));
    }

    let mut connected = 0;
    for address in linked.iter().map(|a| a.trim()).filter(|a| !a.is_empty()) {
        if !seen.insert(address_key(address)) {
            continue;
        }
        connected += 1;
        wallets.push(WalletEntry::new(
            address,
            format!("Connected Wallet {}", connected),
        ));
    }

    wallets
}
