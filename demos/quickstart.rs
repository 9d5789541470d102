//! End-to-end walkthrough of the Pluggy API.
//!
//! Lists the sandbox connectors, opens a connection against the Pluggy Bank
//! sandbox, waits for the sync to finish, then reads accounts, transactions,
//! categories and identity data before deleting the connection.
//!
//! ## Prerequisites
//!
//! Set your Pluggy API key in the environment or `.env` file:
//! ```bash
//! PLUGGY_API_KEY=your_api_key_here
//! ```
//!
//! ## Running
//!
//! ```bash
//! cargo run --release --example quickstart
//! ```

use std::collections::HashMap;
use std::time::Duration;

use pluggy::{ConnectorFilters, ItemStatus, Parameters, PluggyClient, PluggyError};

/// Identifier of the Pluggy Bank sandbox connector.
const PLUGGY_BANK_CONNECTOR: i64 = 2;

/// Credentials accepted by the sandbox connector.
fn sandbox_credentials() -> Parameters {
    HashMap::from([
        ("user".to_string(), "user-ok".to_string()),
        ("password".to_string(), "password-ok".to_string()),
    ])
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = match PluggyClient::from_env() {
        Ok(client) => client,
        Err(PluggyError::MissingApiKey) => {
            eprintln!("Error: PLUGGY_API_KEY not set.");
            eprintln!("\nTo run this example:");
            eprintln!("  1. Get an API key at https://dashboard.pluggy.ai/");
            eprintln!("  2. Create a .env file with: PLUGGY_API_KEY=your_key_here");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    // Browse the connector catalog
    let connectors = client
        .fetch_connectors(Some(&ConnectorFilters {
            sandbox: Some(true),
            ..Default::default()
        }))
        .await?;
    println!("We support the following connectors:");
    for connector in &connectors.results {
        println!("(# {}) - {}", connector.id, connector.name);
    }

    let connector = client.fetch_connector(PLUGGY_BANK_CONNECTOR).await?;
    println!("We are going to connect with {}", connector.name);

    // Validate the credentials against the connector definition
    let credentials = sandbox_credentials();
    let validation = client
        .validate_parameters(PLUGGY_BANK_CONNECTOR, &credentials)
        .await?;
    println!("Connector parameter validation: {validation:?}");

    // Create a connection and poll until the sync finishes
    let mut item = client
        .create_item(PLUGGY_BANK_CONNECTOR, &credentials)
        .await?;
    while !item.status.is_finished() {
        println!("Item {} is syncing with the institution", item.id);
        tokio::time::sleep(Duration::from_secs(3)).await;
        item = client.fetch_item(&item.id).await?;
    }
    println!("Item completed execution with status {:?}", item.status);

    if matches!(item.status, ItemStatus::LoginError | ItemStatus::Outdated) {
        return Ok(());
    }

    println!("Retrieving accounts for item # {}", item.id);
    let accounts = client.fetch_accounts(&item.id, None).await?;
    for account in &accounts.results {
        println!(
            "Account # {} has a balance of {}, its number is {}",
            account.id, account.balance, account.number
        );
        let transactions = client.fetch_transactions(&account.id, None).await?;
        for tx in &transactions.results {
            println!(
                "Transaction # {} made at {}, description: {}, amount: {}",
                tx.id,
                tx.date.format("%d/%m/%Y"),
                tx.description,
                tx.amount
            );
        }
    }

    // Re-categorize the first transaction of the first account
    if let Some(account) = accounts.results.first() {
        let transactions = client.fetch_transactions(&account.id, None).await?;
        if let Some(transaction) = transactions.results.first() {
            let categories = client.fetch_categories(None).await?;
            if let Some(category) = categories.results.first() {
                println!("Updating transaction category to {}", category.description);
                let updated = client
                    .update_transaction_category(&transaction.id, &category.id)
                    .await?;
                println!(
                    "Updated transaction # {} to category {:?}",
                    updated.id, updated.category
                );
            }
        }
    }

    println!("Retrieving identity for item # {}", item.id);
    let identity = client.fetch_identity_by_item_id(&item.id).await?;
    println!("Identity of the account name is {:?}", identity.full_name);

    println!("Deleting retrieved data for item # {}", item.id);
    client.delete_item(&item.id).await?;
    println!("Item deleted successfully");

    Ok(())
}
