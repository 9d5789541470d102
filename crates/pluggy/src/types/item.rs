//! Item (connection attempt) types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::connector::{Connector, ConnectorCredential};

/// Lifecycle status of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    /// The connection is being created.
    Creating,
    /// The institution is being synced.
    Updating,
    /// The institution asked for an extra credential (MFA step).
    WaitingUserInput,
    /// The provided credentials were rejected.
    LoginError,
    /// The sync finished but some products could not be retrieved.
    Outdated,
    /// The sync finished and all products are up to date.
    Updated,
}

impl ItemStatus {
    /// Whether the item has reached a terminal state.
    ///
    /// Callers polling an item after [`create_item`](crate::PluggyClient::create_item)
    /// should stop once this returns `true`.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::LoginError | Self::Outdated | Self::Updated)
    }
}

/// Provider error attached to a failed item execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemError {
    /// Provider-specific error code.
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

/// One successful or in-progress connection/sync attempt with an institution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Primary identifier of the item.
    pub id: String,
    /// Connector the item was created from.
    pub connector: Connector,
    /// Current lifecycle status.
    pub status: ItemStatus,
    /// Status of the most recent sync execution.
    #[serde(default)]
    pub execution_status: Option<String>,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// When the item was last modified.
    pub updated_at: DateTime<Utc>,
    /// When the institution data was last successfully synced.
    #[serde(default)]
    pub last_updated_at: Option<DateTime<Utc>>,
    /// Webhook notified of item events, if one was registered.
    #[serde(default)]
    pub webhook_url: Option<String>,
    /// Error of the most recent execution, when it failed.
    #[serde(default)]
    pub error: Option<ItemError>,
    /// Extra credential requested mid-connection (MFA step).
    #[serde(default)]
    pub parameter: Option<ConnectorCredential>,
}
