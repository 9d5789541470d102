//! Data types for Pluggy API resources.
//!
//! These are passive records mirroring the remote schema. Field names map to
//! the wire's camelCase via serde; optionality follows what the API actually
//! guarantees per resource.

mod account;
mod category;
mod common;
mod connector;
mod identity;
mod investment;
mod item;
mod transaction;

pub use account::{Account, AccountType, BankData, CreditData};
pub use category::Category;
pub use common::{CurrencyCode, PageFilters, PageResponse, Parameters};
pub use connector::{
    Connector, ConnectorCredential, ConnectorFilters, ConnectorType, ValidationError,
    ValidationResult,
};
pub use identity::{Address, Email, Identity, IdentityRelation, PhoneNumber};
pub use investment::{
    Investment, InvestmentStatus, InvestmentSubtype, InvestmentTransaction,
    InvestmentTransactionType, InvestmentType,
};
pub use item::{Item, ItemError, ItemStatus};
pub use transaction::{
    CreditCardMetadata, DocumentType, Transaction, TransactionFilters, TransactionMerchantData,
    TransactionPaymentData, TransactionPaymentParticipant,
    TransactionPaymentParticipantDocument, TransactionStatus, TransactionType,
};
