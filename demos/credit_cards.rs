//! Credit-card account inspection.
//!
//! Opens a connection against the Pluggy Bank sandbox, waits for the sync to
//! finish, then prints the credit data of the first credit-card account.
//!
//! ## Running
//!
//! ```bash
//! PLUGGY_API_KEY=your_key cargo run --release --example credit_cards
//! ```

use std::collections::HashMap;
use std::time::Duration;

use pluggy::{AccountType, ItemStatus, PluggyClient};

/// Identifier of the Pluggy Bank sandbox connector.
const PLUGGY_BANK_CONNECTOR: i64 = 2;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = PluggyClient::from_env()?;

    let credentials = HashMap::from([
        ("user".to_string(), "user-ok".to_string()),
        ("password".to_string(), "password-ok".to_string()),
    ]);

    let mut item = client
        .create_item(PLUGGY_BANK_CONNECTOR, &credentials)
        .await?;
    while !item.status.is_finished() {
        tokio::time::sleep(Duration::from_secs(3)).await;
        item = client.fetch_item(&item.id).await?;
    }

    println!("Item completed execution with status {:?}", item.status);
    if matches!(item.status, ItemStatus::LoginError | ItemStatus::Outdated) {
        return Ok(());
    }

    let accounts = client
        .fetch_accounts(&item.id, Some(AccountType::Credit))
        .await?;
    match accounts.results.first() {
        Some(account) => println!("{:#?}", account.credit_data),
        None => println!("No credit accounts found"),
    }

    Ok(())
}
