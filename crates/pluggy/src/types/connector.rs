//! Connector catalog types.
//!
//! A connector is the remote definition of a specific financial institution's
//! integration: which credentials it asks for, what country it operates in
//! and what kind of products it exposes.

use serde::{Deserialize, Serialize};

use super::common::Parameters;
use crate::query::QueryParams;

/// Kind of institution a connector integrates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectorType {
    /// Retail banking institution.
    PersonalBank,
    /// Business banking institution.
    BusinessBank,
    /// Investment platform or broker.
    Investment,
}

impl ConnectorType {
    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PersonalBank => "PERSONAL_BANK",
            Self::BusinessBank => "BUSINESS_BANK",
            Self::Investment => "INVESTMENT",
        }
    }
}

/// Credential field a connector asks the user for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorCredential {
    /// Human-readable label shown when prompting for the field.
    pub label: String,
    /// Parameter name submitted in [`Parameters`].
    pub name: String,
    /// Input type hint, for example `text`, `password` or `number`.
    #[serde(rename = "type", default)]
    pub field_type: Option<String>,
    /// Validation regex applied by the provider, if any.
    #[serde(default)]
    pub validation: Option<String>,
    /// Message shown when validation fails.
    #[serde(default)]
    pub validation_message: Option<String>,
    /// Placeholder text for the input.
    #[serde(default)]
    pub placeholder: Option<String>,
}

/// Financial-institution integration definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    /// Primary identifier of the connector.
    pub id: i64,
    /// Institution name.
    pub name: String,
    /// Institution website.
    #[serde(default)]
    pub institution_url: Option<String>,
    /// URL of the institution logo.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Primary brand color, as a hex string without the leading `#`.
    #[serde(default)]
    pub primary_color: Option<String>,
    /// Kind of institution.
    #[serde(rename = "type")]
    pub connector_type: ConnectorType,
    /// ISO country code the institution operates in.
    pub country: String,
    /// Credential fields the connector asks for.
    #[serde(default)]
    pub credentials: Vec<ConnectorCredential>,
    /// Whether the connector requires a second authentication factor.
    #[serde(rename = "hasMFA", default)]
    pub has_mfa: bool,
}

/// Filters accepted by the connector catalog endpoint.
#[derive(Debug, Clone, Default)]
pub struct ConnectorFilters {
    /// Filter by institution name (partial match).
    pub name: Option<String>,
    /// Restrict to institutions operating in these countries.
    pub countries: Option<Vec<String>>,
    /// Restrict to these connector types.
    pub types: Option<Vec<ConnectorType>>,
    /// Include sandbox connectors in the results.
    pub sandbox: Option<bool>,
}

impl ConnectorFilters {
    pub(crate) fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Some(name) = &self.name {
            params.push("name", name.as_str());
        }
        if let Some(countries) = &self.countries {
            params.push("countries", countries.clone());
        }
        if let Some(types) = &self.types {
            let values: Vec<String> = types.iter().map(|t| t.as_str().to_string()).collect();
            params.push("types", values);
        }
        if let Some(sandbox) = self.sandbox {
            params.push("sandbox", sandbox);
        }
        params
    }
}

/// Result of validating user parameters against a connector definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Parameters that passed validation.
    #[serde(default)]
    pub parameters: Parameters,
    /// Validation failures, one per offending parameter.
    #[serde(default)]
    pub errors: Vec<ValidationError>,
}

/// A single parameter validation failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// Error code reported by the provider.
    pub code: String,
    /// Offending parameter name.
    pub parameter: String,
    /// Human-readable description.
    #[serde(default)]
    pub message: Option<String>,
}
