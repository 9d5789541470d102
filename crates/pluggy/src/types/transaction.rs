//! Transaction types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::common::{CurrencyCode, PageFilters};
use crate::query::QueryParams;

/// Direction of a transaction.
///
/// `DEBIT` is money going out of the account, `CREDIT` is money going in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Money going out of the account.
    Debit,
    /// Money going into the account.
    Credit,
}

/// Settlement status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// Not yet settled by the institution.
    Pending,
    /// Settled. This is the default when the institution reports no status.
    Posted,
}

/// Kind of identification document (Brazilian tax IDs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    /// Natural-person tax number.
    Cpf,
    /// Legal-entity tax number.
    Cnpj,
}

/// Document carried by a payment participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPaymentParticipantDocument {
    /// Document number.
    #[serde(default)]
    pub value: Option<String>,
    /// Type of document provided, CPF or CNPJ.
    #[serde(rename = "type", default)]
    pub document_type: Option<DocumentType>,
}

/// Party on one side of a transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPaymentParticipant {
    /// Document number object.
    #[serde(default)]
    pub document_number: Option<TransactionPaymentParticipantDocument>,
    /// Name of the participant.
    #[serde(default)]
    pub name: Option<String>,
    /// Number of the account.
    #[serde(default)]
    pub account_number: Option<String>,
    /// Number of the agency / branch.
    #[serde(default)]
    pub branch_number: Option<String>,
    /// Number of the bank.
    #[serde(default)]
    pub routing_number: Option<String>,
}

/// Payment or transfer details attached to a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPaymentData {
    /// Identity of the sender of the transfer.
    #[serde(default)]
    pub payer: Option<TransactionPaymentParticipant>,
    /// Identity of the receiver of the transfer.
    #[serde(default)]
    pub receiver: Option<TransactionPaymentParticipant>,
    /// Reference submitted by the receiver when generating the payment
    /// request, for example the internal identifier behind a Pix QR code.
    #[serde(default)]
    pub receiver_reference_id: Option<String>,
    /// Identifier for the transaction provided by the institution.
    #[serde(default)]
    pub payment_method: Option<String>,
    /// Type of transfer used: `PIX`, `TED`, `DOC`.
    #[serde(default)]
    pub reference_number: Option<String>,
    /// Payer description / motive of the transfer.
    #[serde(default)]
    pub reason: Option<String>,
}

/// Merchant associated with a card transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMerchantData {
    /// Name of the merchant.
    pub name: String,
    /// Legal business name of the merchant.
    pub business_name: String,
    /// CNPJ number associated with the merchant.
    pub cnpj: String,
    /// CNAE number associated with the merchant.
    #[serde(default)]
    pub cnae: Option<String>,
    /// Category of the merchant.
    #[serde(default)]
    pub category: Option<String>,
}

/// Installment details for a credit-card purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardMetadata {
    /// Number of this installment.
    #[serde(default)]
    pub installment_number: Option<u32>,
    /// Total number of installments.
    #[serde(default)]
    pub total_installments: Option<u32>,
    /// Total amount across all installments.
    #[serde(default)]
    pub total_amount: Option<f64>,
}

/// Date and page filters for the transactions endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionFilters {
    /// Only transactions on or after this date.
    pub from: Option<NaiveDate>,
    /// Only transactions on or before this date.
    pub to: Option<NaiveDate>,
    /// Page selection.
    pub page: PageFilters,
}

impl TransactionFilters {
    pub(crate) fn append_to(&self, params: &mut QueryParams) {
        if let Some(from) = self.from {
            params.push("from", from.format("%Y-%m-%d").to_string());
        }
        if let Some(to) = self.to {
            params.push("to", to.format("%Y-%m-%d").to_string());
        }
        self.page.append_to(params);
    }
}

/// Movement in a bank or credit account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Primary identifier of the transaction.
    pub id: String,
    /// Account the transaction belongs to.
    pub account_id: String,
    /// Date the transaction was made.
    pub date: DateTime<Utc>,
    /// Original transaction description.
    pub description: String,
    /// Raw description provided by the financial institution, if available.
    #[serde(default)]
    pub description_raw: Option<String>,
    /// Direction of the movement.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Amount of the transaction.
    pub amount: f64,
    /// Account balance after the transaction was made.
    pub balance: f64,
    /// ISO currency code of the transaction.
    pub currency_code: CurrencyCode,
    /// Assigned category of the transaction.
    #[serde(default)]
    pub category: Option<String>,
    /// Settlement status; the API omits it for `POSTED` transactions.
    #[serde(default)]
    pub status: Option<TransactionStatus>,
    /// Institution-specific code for the transaction type; not unique.
    #[serde(default)]
    pub provider_code: Option<String>,
    /// Additional data related to payments or transfers.
    #[serde(default)]
    pub payment_data: Option<TransactionPaymentData>,
    /// Additional data related to credit-card transactions.
    #[serde(default)]
    pub credit_card_metadata: Option<CreditCardMetadata>,
    /// Merchant associated with the transaction.
    #[serde(default)]
    pub merchant: Option<TransactionMerchantData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_render_after_account_id_in_order() {
        let filters = TransactionFilters {
            from: NaiveDate::from_ymd_opt(2024, 1, 1),
            to: NaiveDate::from_ymd_opt(2024, 2, 1),
            page: PageFilters {
                page: Some(2),
                page_size: Some(50),
            },
        };
        let mut params = QueryParams::new().with("accountId", "acc-1");
        filters.append_to(&mut params);
        assert_eq!(
            params.to_query_string(),
            "?accountId=acc-1&from=2024-01-01&to=2024-02-01&page=2&pageSize=50"
        );
    }

    #[test]
    fn pix_transaction_deserializes_from_wire_json() {
        let json = r#"{
            "id": "6ec156fe-e8ac-4d9a-a4b3-7770529ab01c",
            "accountId": "a658c848-e475-457b-8565-d1fffba127c4",
            "date": "2024-03-01T00:00:00.000Z",
            "description": "TED Example Gym",
            "descriptionRaw": null,
            "type": "DEBIT",
            "amount": -119.4,
            "balance": 4459.26,
            "currencyCode": "BRL",
            "category": "Fitness",
            "providerCode": "117",
            "paymentData": {
                "payer": {
                    "name": "Tiago Rodrigues Santos",
                    "branchNumber": "090",
                    "accountNumber": "1234-5",
                    "routingNumber": "001",
                    "documentNumber": { "type": "CPF", "value": "882.937.076-23" }
                },
                "receiver": {
                    "name": "Example Gym",
                    "documentNumber": { "type": "CNPJ", "value": "08.050.608/0001-32" }
                },
                "paymentMethod": "TED",
                "referenceNumber": "123456789",
                "reason": "Gym payment"
            },
            "creditCardMetadata": null
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.transaction_type, TransactionType::Debit);
        assert_eq!(tx.amount, -119.4);
        assert!(tx.status.is_none());
        let payment = tx.payment_data.unwrap();
        let payer_doc = payment.payer.unwrap().document_number.unwrap();
        assert_eq!(payer_doc.document_type, Some(DocumentType::Cpf));
        assert!(tx.credit_card_metadata.is_none());
    }

    #[test]
    fn installment_purchase_deserializes_metadata() {
        let json = r#"{
            "id": "2e8d9bcc-ab3c-4a43-9e27-b8fe4d009a31",
            "accountId": "a658c848-e475-457b-8565-d1fffba127c4",
            "date": "2024-02-15T00:00:00.000Z",
            "description": "Eletronics Store 2/10",
            "descriptionRaw": "ELETR STORE 02/10",
            "type": "DEBIT",
            "amount": -150.0,
            "balance": 0.0,
            "currencyCode": "BRL",
            "category": "Shopping",
            "status": "POSTED",
            "creditCardMetadata": {
                "installmentNumber": 2,
                "totalInstallments": 10,
                "totalAmount": 1500.0
            },
            "merchant": {
                "name": "Eletronics Store",
                "businessName": "Eletronics Comercio de Eletronicos SA",
                "cnpj": "08.050.608/0001-32",
                "category": "Eletronics"
            }
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.status, Some(TransactionStatus::Posted));
        let metadata = tx.credit_card_metadata.unwrap();
        assert_eq!(metadata.installment_number, Some(2));
        assert_eq!(metadata.total_installments, Some(10));
        assert_eq!(tx.merchant.unwrap().cnpj, "08.050.608/0001-32");
    }
}
