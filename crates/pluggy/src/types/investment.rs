//! Investment types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::common::CurrencyCode;

/// Type of investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentType {
    /// Mutual fund.
    MutualFund,
    /// Security (for example retirement plans).
    Security,
    /// Equity (stocks, ETFs, real estate funds).
    Equity,
    /// Structured certificate (Certificado de Operações Estruturadas).
    Coe,
    /// Fixed income.
    FixedIncome,
    /// Exchange-traded fund.
    Etf,
    /// Anything the provider could not classify.
    Other,
}

impl InvestmentType {
    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MutualFund => "MUTUAL_FUND",
            Self::Security => "SECURITY",
            Self::Equity => "EQUITY",
            Self::Coe => "COE",
            Self::FixedIncome => "FIXED_INCOME",
            Self::Etf => "ETF",
            Self::Other => "OTHER",
        }
    }
}

/// Status of an investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentStatus {
    /// Position is open.
    Active,
    /// Position is awaiting settlement.
    Pending,
    /// Position was fully withdrawn.
    TotalWithdrawal,
}

/// Subtype of an investment, spanning the mutual-fund, security, equity,
/// fixed-income and COE families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentSubtype {
    // Mutual funds
    /// Default mutual-fund subtype.
    InvestmentFund,
    /// Multimercado fund.
    MultimarketFund,
    /// Fixed-income fund.
    FixedIncomeFund,
    /// Stock fund.
    StockFund,
    /// ETF fund.
    EtfFund,
    /// Offshore fund.
    OffshoreFund,
    /// FIP (participation) fund.
    FipFund,
    /// Exchange/currency fund.
    ExchangeFund,
    // Securities
    /// Retirement plan.
    Retirement,
    // Equities
    /// Stock.
    Stock,
    /// Exchange-traded fund.
    Etf,
    /// Real estate fund.
    RealEstateFund,
    /// Brazilian depositary receipt.
    Bdr,
    /// Derivatives.
    Derivatives,
    /// Option contract.
    Option,
    // Fixed income
    /// Treasury bond.
    Treasury,
    /// Real estate credit bill.
    Lci,
    /// Agricultural credit bill.
    Lca,
    /// Certificate of deposit.
    Cdb,
    /// Real estate receivable certificate.
    Cri,
    /// Agricultural receivable certificate.
    Cra,
    /// Corporate debt.
    CorporateDebt,
    /// Bill of exchange.
    Lc,
    /// Debentures.
    Debentures,
    // COE
    /// Structured note.
    StructuredNote,
    /// Anything the provider could not classify.
    Other,
}

/// Type of a transaction made on an investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentTransactionType {
    /// Acquisition.
    Buy,
    /// Withdrawal.
    Sell,
    /// Tax applied to the investment, for example "come-cotas".
    Tax,
    /// Transfer between positions.
    Transfer,
}

/// Transaction related to an investment, like an acquisition or withdrawal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentTransaction {
    /// Primary identifier of the transaction.
    pub id: String,
    /// Type of the transaction.
    #[serde(rename = "type")]
    pub transaction_type: InvestmentTransactionType,
    /// Identifier of the related operation.
    #[serde(default)]
    pub operation_id: Option<String>,
    /// Description of the transaction.
    #[serde(default)]
    pub description: Option<String>,
    /// Investment the transaction belongs to.
    #[serde(default)]
    pub investment_id: Option<String>,
    /// Quantity of quotas purchased.
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Value of the purchased quotas.
    #[serde(default)]
    pub value: Option<f64>,
    /// Amount spent or withdrawn from the investment.
    #[serde(default)]
    pub amount: Option<f64>,
    /// Date the transaction was placed.
    pub date: DateTime<Utc>,
    /// Date the transaction was confirmed.
    pub trade_date: DateTime<Utc>,
}

/// Investment position synced from an institution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    /// Primary identifier of the investment.
    pub id: String,
    /// Country-wide primary identifier; in Brazil this is the CNPJ.
    pub code: String,
    /// Provider identifier attaching the owner to the investment.
    pub number: String,
    /// 12-character ISIN, a globally unique identifier.
    #[serde(default)]
    pub isin: Option<String>,
    /// Item the investment belongs to.
    pub item_id: String,
    /// Type of investment.
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    /// Subtype of investment.
    #[serde(default)]
    pub subtype: Option<InvestmentSubtype>,
    /// Primary name of the investment.
    pub name: String,
    /// ISO currency code the amounts are shown in.
    pub currency_code: CurrencyCode,
    /// Quota or value reference date.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// Value of the acquired quantity; defaults to the amount for
    /// non-quota investments.
    #[serde(default)]
    pub value: Option<f64>,
    /// Quota quantity acquired; defaults to 1 for non-quota investments.
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Income-type taxes associated (IR, Ingresos Brutos).
    #[serde(default)]
    pub taxes: Option<f64>,
    /// Financial-operation taxes associated (IOF).
    #[serde(default)]
    pub taxes2: Option<f64>,
    /// Net worth of the investment; the real current value.
    pub balance: f64,
    /// Current gross amount pre-taxes; as a rule, value * quantity.
    #[serde(default)]
    pub amount: Option<f64>,
    /// Balance available for withdrawal.
    #[serde(default)]
    pub amount_withdrawal: Option<f64>,
    /// Amount gained or lost from the investment.
    #[serde(default)]
    pub amount_profit: Option<f64>,
    /// Original amount deposited in the investment.
    #[serde(default)]
    pub amount_original: Option<f64>,
    /// Date the investment is due; typical of fixed-income positions.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Entity that issued the investment.
    #[serde(default)]
    pub issuer: Option<String>,
    /// Date the investment was issued.
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
    /// Fixed rate of the investment.
    #[serde(default)]
    pub rate: Option<f64>,
    /// Fixed rate index, for example `CDI`.
    #[serde(default)]
    pub rate_type: Option<String>,
    /// Fixed annual rate, for example 10.5.
    #[serde(default)]
    pub fixed_annual_rate: Option<f64>,
    /// Previous month's rate value.
    #[serde(default)]
    pub last_month_rate: Option<f64>,
    /// Calendar-year performance percentage.
    #[serde(default)]
    pub annual_rate: Option<f64>,
    /// Trailing twelve-month performance percentage.
    #[serde(default)]
    pub last_twelve_months_rate: Option<f64>,
    /// Current status of the investment.
    #[serde(default)]
    pub status: Option<InvestmentStatus>,
    /// Transactions made on the investment.
    #[serde(default)]
    pub transactions: Vec<InvestmentTransaction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_income_investment_deserializes_from_wire_json() {
        let json = r#"{
            "id": "b8f9a3c1-5b2d-4e6f-8a9b-0c1d2e3f4a5b",
            "code": "05.285.819/0001-66",
            "number": "881123",
            "itemId": "a9e98929-3a75-4312-92c2-96fd8e91e0ad",
            "type": "FIXED_INCOME",
            "subtype": "CDB",
            "name": "CDB Pos DI",
            "currencyCode": "BRL",
            "balance": 10231.77,
            "amount": 10300.0,
            "amountOriginal": 10000.0,
            "taxes": 55.12,
            "taxes2": 13.11,
            "dueDate": "2026-01-15",
            "issuer": "Pluggy Bank CDB",
            "rate": 110.0,
            "rateType": "CDI",
            "status": "ACTIVE",
            "transactions": [
                {
                    "id": "c0ffee00-1111-2222-3333-444455556666",
                    "type": "BUY",
                    "amount": 10000.0,
                    "date": "2023-01-15T00:00:00.000Z",
                    "tradeDate": "2023-01-16T00:00:00.000Z"
                }
            ]
        }"#;
        let investment: Investment = serde_json::from_str(json).unwrap();
        assert_eq!(investment.investment_type, InvestmentType::FixedIncome);
        assert_eq!(investment.subtype, Some(InvestmentSubtype::Cdb));
        assert_eq!(investment.status, Some(InvestmentStatus::Active));
        assert_eq!(investment.transactions.len(), 1);
        assert_eq!(
            investment.transactions[0].transaction_type,
            InvestmentTransactionType::Buy
        );
    }

    #[test]
    fn subtype_wire_names_use_screaming_snake_case() {
        let subtype: InvestmentSubtype = serde_json::from_str("\"ETF_FUND\"").unwrap();
        assert_eq!(subtype, InvestmentSubtype::EtfFund);
        let subtype: InvestmentSubtype = serde_json::from_str("\"STRUCTURED_NOTE\"").unwrap();
        assert_eq!(subtype, InvestmentSubtype::StructuredNote);
        let subtype: InvestmentSubtype = serde_json::from_str("\"BDR\"").unwrap();
        assert_eq!(subtype, InvestmentSubtype::Bdr);
    }

    #[test]
    fn investment_type_query_values() {
        assert_eq!(InvestmentType::MutualFund.as_str(), "MUTUAL_FUND");
        assert_eq!(InvestmentType::Coe.as_str(), "COE");
    }
}
