//! Pluggy API client implementation.

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::env;
use tracing::warn;

use crate::{
    Result,
    error::PluggyError,
    query::QueryParams,
    types::{
        Account, AccountType, Category, Connector, ConnectorFilters, Identity, Investment,
        InvestmentType, Item, PageResponse, Parameters, Transaction, TransactionFilters,
        ValidationResult,
    },
};

/// Base URL for the Pluggy production API.
const PLUGGY_BASE_URL: &str = "https://api.pluggy.ai/v1";

/// Name of the credential header attached to every request.
const API_KEY_HEADER: &str = "X-API-KEY";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidateParametersRequest<'a> {
    parameters: &'a Parameters,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateItemRequest<'a> {
    connector_id: i64,
    parameters: &'a Parameters,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateItemRequest<'a> {
    parameters: &'a Parameters,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateTransactionRequest<'a> {
    category_id: &'a str,
}

/// Pluggy API client.
///
/// Holds the API key, the base URL and one shared HTTP client; all three are
/// fixed at construction. Each call is an independent future with no state
/// shared across calls, so a client can be cloned and used concurrently.
#[derive(Debug, Clone)]
pub struct PluggyClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl PluggyClient {
    /// Create a new client with the given API key, talking to the
    /// production API.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, PLUGGY_BASE_URL)
    }

    /// Create a new client with the given API key and base URL.
    #[must_use]
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Create a new client from the `PLUGGY_API_KEY` environment variable,
    /// honoring `PLUGGY_BASE_URL` when set.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if `PLUGGY_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_key = env::var("PLUGGY_API_KEY").map_err(|_| PluggyError::MissingApiKey)?;

        Ok(match env::var("PLUGGY_BASE_URL") {
            Ok(base_url) => Self::with_base_url(api_key, base_url),
            Err(_) => Self::new(api_key),
        })
    }

    /// Build the request URL from an endpoint path and optional parameters.
    fn url(&self, endpoint: &str, params: Option<&QueryParams>) -> String {
        let query = params.map(QueryParams::to_query_string).unwrap_or_default();
        format!("{}/{endpoint}{query}", self.base_url)
    }

    /// Issue a GET request and classify the response.
    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: Option<&QueryParams>,
    ) -> Result<T> {
        let response = self
            .client
            .get(self.url(endpoint, params))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        Self::classify(endpoint, response).await
    }

    /// Issue a mutating request (POST/PUT/PATCH/DELETE) with a JSON body.
    ///
    /// The body is serialized unconditionally: an absent body is sent as the
    /// JSON literal `null`, which is what the API expects from its official
    /// clients.
    async fn mutate<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        params: Option<&QueryParams>,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_string(&body)?;
        let response = self
            .client
            .request(method, self.url(endpoint, params))
            .header(API_KEY_HEADER, &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;
        Self::classify(endpoint, response).await
    }

    /// Classify an HTTP response as success or failure.
    ///
    /// Success requires the status to equal 200 exactly; any other status,
    /// including other 2xx codes, is an application error whose JSON body is
    /// surfaced verbatim. A body that is not valid JSON is surfaced as raw
    /// text instead.
    async fn classify<T: DeserializeOwned>(
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let text = response.text().await?;

        let json: serde_json::Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    endpoint,
                    status = status.as_u16(),
                    "request failed with a non-JSON response"
                );
                return Err(PluggyError::InvalidResponse {
                    status: status.as_u16(),
                    message: text,
                });
            }
        };

        if status != StatusCode::OK {
            warn!(
                endpoint,
                status = status.as_u16(),
                "request rejected by the API"
            );
            return Err(PluggyError::Api {
                status: status.as_u16(),
                body: json,
            });
        }

        Ok(serde_json::from_value(json)?)
    }

    /// Fetch the connector catalog, optionally filtered.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn fetch_connectors(
        &self,
        filters: Option<&ConnectorFilters>,
    ) -> Result<PageResponse<Connector>> {
        let params = filters.map(ConnectorFilters::to_query_params);
        self.get("connectors", params.as_ref()).await
    }

    /// Fetch a single connector by its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn fetch_connector(&self, id: i64) -> Result<Connector> {
        self.get(&format!("connectors/{id}"), None).await
    }

    /// Validate user-supplied parameters against a connector definition
    /// without creating an item.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn validate_parameters(
        &self,
        connector_id: i64,
        parameters: &Parameters,
    ) -> Result<ValidationResult> {
        self.mutate(
            Method::POST,
            &format!("connectors/{connector_id}/validate"),
            None,
            Some(&ValidateParametersRequest { parameters }),
        )
        .await
    }

    /// Create a new item, starting a connection with an institution.
    ///
    /// The returned item starts in a non-terminal status; poll it with
    /// [`fetch_item`](Self::fetch_item) until
    /// [`ItemStatus::is_finished`](crate::ItemStatus::is_finished).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn create_item(&self, connector_id: i64, parameters: &Parameters) -> Result<Item> {
        self.mutate(
            Method::POST,
            "items",
            None,
            Some(&CreateItemRequest {
                connector_id,
                parameters,
            }),
        )
        .await
    }

    /// Fetch a single item by its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn fetch_item(&self, id: &str) -> Result<Item> {
        self.get(&format!("items/{id}"), None).await
    }

    /// Trigger a new sync of an item, optionally updating its credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn update_item(&self, id: &str, parameters: Option<&Parameters>) -> Result<Item> {
        let body = parameters.map(|parameters| UpdateItemRequest { parameters });
        self.mutate(Method::PATCH, &format!("items/{id}"), None, body.as_ref())
            .await
    }

    /// Delete an item and every product retrieved through it.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn delete_item(&self, id: &str) -> Result<()> {
        let _: serde_json::Value = self
            .mutate(Method::DELETE, &format!("items/{id}"), None, None::<&()>)
            .await?;
        Ok(())
    }

    /// Fetch the accounts of an item, optionally restricted to one type.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn fetch_accounts(
        &self,
        item_id: &str,
        account_type: Option<AccountType>,
    ) -> Result<PageResponse<Account>> {
        let mut params = QueryParams::new().with("itemId", item_id);
        if let Some(kind) = account_type {
            params.push("type", kind.as_str());
        }
        self.get("accounts", Some(&params)).await
    }

    /// Fetch a single account by its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn fetch_account(&self, id: &str) -> Result<Account> {
        self.get(&format!("accounts/{id}"), None).await
    }

    /// Fetch the transactions of an account, optionally filtered by date
    /// range and page.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn fetch_transactions(
        &self,
        account_id: &str,
        filters: Option<&TransactionFilters>,
    ) -> Result<PageResponse<Transaction>> {
        let mut params = QueryParams::new().with("accountId", account_id);
        if let Some(filters) = filters {
            filters.append_to(&mut params);
        }
        self.get("transactions", Some(&params)).await
    }

    /// Fetch a single transaction by its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn fetch_transaction(&self, id: &str) -> Result<Transaction> {
        self.get(&format!("transactions/{id}"), None).await
    }

    /// Override the category of a transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn update_transaction_category(
        &self,
        id: &str,
        category_id: &str,
    ) -> Result<Transaction> {
        self.mutate(
            Method::PATCH,
            &format!("transactions/{id}"),
            None,
            Some(&UpdateTransactionRequest { category_id }),
        )
        .await
    }

    /// Fetch the investments of an item, optionally restricted to one type.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn fetch_investments(
        &self,
        item_id: &str,
        investment_type: Option<InvestmentType>,
    ) -> Result<PageResponse<Investment>> {
        let mut params = QueryParams::new().with("itemId", item_id);
        if let Some(kind) = investment_type {
            params.push("type", kind.as_str());
        }
        self.get("investments", Some(&params)).await
    }

    /// Fetch a single investment by its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn fetch_investment(&self, id: &str) -> Result<Investment> {
        self.get(&format!("investments/{id}"), None).await
    }

    /// Fetch a single identity record by its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn fetch_identity(&self, id: &str) -> Result<Identity> {
        self.get(&format!("identity/{id}"), None).await
    }

    /// Fetch the identity record retrieved through an item.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn fetch_identity_by_item_id(&self, item_id: &str) -> Result<Identity> {
        let params = QueryParams::new().with("itemId", item_id);
        self.get("identity", Some(&params)).await
    }

    /// Fetch the category taxonomy, optionally restricted to the children
    /// of one parent category.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn fetch_categories(
        &self,
        parent_id: Option<&str>,
    ) -> Result<PageResponse<Category>> {
        let params = parent_id.map(|parent_id| QueryParams::new().with("parentId", parent_id));
        self.get("categories", params.as_ref()).await
    }

    /// Fetch a single category by its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn fetch_category(&self, id: &str) -> Result<Category> {
        self.get(&format!("categories/{id}"), None).await
    }
}
