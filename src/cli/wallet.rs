use std::sync::Arc;

use anyhow::Result;
use console::style;

use super::view::{print_advisory, print_banner, print_session};
use crate::config::Config;
use crate::wallet::{SimulatedWallet, WalletConnector};

fn connector(config: &Config) -> WalletConnector {
    let mut connector = WalletConnector::new(Arc::new(SimulatedWallet::available()));
    if let Some(limit) = config.wizard_timeouts().wallet_request {
        connector = connector.with_request_timeout(limit);
    }
    connector
}

/// Show the current wallet session as the provider reports it.
pub async fn status(config: &Config) -> Result<()> {
    print_banner();
    let session = connector(config).initial_session().await;
    print_session(&session);
    Ok(())
}

/// Establish a wallet session, reporting the advisory on failure.
pub async fn connect(config: &Config) -> Result<()> {
    print_banner();
    let connector = connector(config);
    let session = connector.initial_session().await;
    if session.is_connected() {
        print_session(&session);
        return Ok(());
    }

    match connector.request_authorization().await {
        Ok(account) => {
            println!(
                "  {} wallet connected ({})",
                style("✓").green().bold(),
                style(account.short()).dim()
            );
        }
        Err(err) => print_advisory(err.advisory()),
    }
    Ok(())
}
