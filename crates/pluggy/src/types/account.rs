//! Account types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::CurrencyCode;

/// Product class of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    /// Checking or savings account.
    Bank,
    /// Credit card account.
    Credit,
}

impl AccountType {
    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bank => "BANK",
            Self::Credit => "CREDIT",
        }
    }
}

/// Data specific to checking/savings accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankData {
    /// Full transfer number in the branch/number format used for transfers.
    #[serde(default)]
    pub transfer_number: Option<String>,
    /// Balance at the most recent account closing.
    #[serde(default)]
    pub closing_balance: Option<f64>,
}

/// Data specific to credit card accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditData {
    /// Card level, for example `gold` or `black`.
    #[serde(default)]
    pub level: Option<String>,
    /// Card network brand, for example `visa` or `mastercard`.
    #[serde(default)]
    pub brand: Option<String>,
    /// Date the current invoice closes.
    #[serde(default)]
    pub balance_close_date: Option<NaiveDate>,
    /// Date the current invoice is due.
    #[serde(default)]
    pub balance_due_date: Option<NaiveDate>,
    /// Credit limit still available.
    #[serde(default)]
    pub available_credit_limit: Option<f64>,
    /// Invoice balance held in foreign currency.
    #[serde(default)]
    pub balance_foreign_currency: Option<f64>,
    /// Minimum payment accepted for the current invoice.
    #[serde(default)]
    pub minimum_payment: Option<f64>,
    /// Total credit limit of the card.
    #[serde(default)]
    pub credit_limit: Option<f64>,
}

/// Bank or credit account synced from an institution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Primary identifier of the account.
    pub id: String,
    /// Item the account belongs to.
    pub item_id: String,
    /// Product class.
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Product subtype, for example `CHECKING_ACCOUNT` or `CREDIT_CARD`.
    #[serde(default)]
    pub subtype: Option<String>,
    /// Account name as reported by the institution.
    pub name: String,
    /// Commercial name of the product, when available.
    #[serde(default)]
    pub marketing_name: Option<String>,
    /// Current balance.
    pub balance: f64,
    /// ISO currency code of the balance.
    pub currency_code: CurrencyCode,
    /// Account number at the institution.
    pub number: String,
    /// Account owner name, when available.
    #[serde(default)]
    pub owner: Option<String>,
    /// Owner tax number (CPF/CNPJ), when available.
    #[serde(default)]
    pub tax_number: Option<String>,
    /// Extra data for `BANK` accounts.
    #[serde(default)]
    pub bank_data: Option<BankData>,
    /// Extra data for `CREDIT` accounts.
    #[serde(default)]
    pub credit_data: Option<CreditData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_account_deserializes_from_wire_json() {
        let json = r#"{
            "id": "a658c848-e475-457b-8565-d1fffba127c4",
            "itemId": "a9e98929-3a75-4312-92c2-96fd8e91e0ad",
            "type": "CREDIT",
            "subtype": "CREDIT_CARD",
            "name": "Mastercard Black",
            "marketingName": "PLUGGY UNICLASS BLACK",
            "balance": 1209.31,
            "currencyCode": "BRL",
            "number": "xxxx8670",
            "creditData": {
                "level": "BLACK",
                "brand": "MASTERCARD",
                "balanceCloseDate": "2024-03-03",
                "balanceDueDate": "2024-03-10",
                "availableCreditLimit": 2790.69,
                "minimumPayment": 161.24,
                "creditLimit": 4000.0
            }
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.account_type, AccountType::Credit);
        assert_eq!(account.currency_code, CurrencyCode::BRL);
        let credit = account.credit_data.unwrap();
        assert_eq!(credit.brand.as_deref(), Some("MASTERCARD"));
        assert_eq!(credit.credit_limit, Some(4000.0));
        assert!(account.bank_data.is_none());
    }
}
