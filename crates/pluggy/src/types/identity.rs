//! Identity types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::transaction::DocumentType;

/// Phone number attached to an identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumber {
    /// Kind of number, for example `Personal` or `Work`.
    #[serde(rename = "type", default)]
    pub phone_type: Option<String>,
    /// The number itself.
    pub value: String,
}

/// Email address attached to an identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    /// Kind of address, for example `Personal` or `Work`.
    #[serde(rename = "type", default)]
    pub email_type: Option<String>,
    /// The address itself.
    pub value: String,
}

/// Postal address attached to an identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Full rendered address.
    #[serde(default)]
    pub full_address: Option<String>,
    /// Street and number portion.
    #[serde(default)]
    pub primary_address: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// Postal code.
    #[serde(default)]
    pub postal_code: Option<String>,
    /// State or province.
    #[serde(default)]
    pub state: Option<String>,
    /// Country.
    #[serde(default)]
    pub country: Option<String>,
    /// Kind of address, for example `Personal` or `Work`.
    #[serde(rename = "type", default)]
    pub address_type: Option<String>,
}

/// Personal relationship declared to the institution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRelation {
    /// Kind of relation, for example `Mother` or `Spouse`.
    #[serde(rename = "type", default)]
    pub relation_type: Option<String>,
    /// Name of the related person.
    #[serde(default)]
    pub name: Option<String>,
    /// Document of the related person.
    #[serde(default)]
    pub document: Option<String>,
}

/// Personal identity data retrieved from an institution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Primary identifier of the identity record.
    pub id: String,
    /// Item the identity was retrieved from.
    pub item_id: String,
    /// Full name of the account owner.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Identification document number.
    #[serde(default)]
    pub document: Option<String>,
    /// Kind of identification document.
    #[serde(default)]
    pub document_type: Option<DocumentType>,
    /// Birth date.
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Tax number, when different from the document.
    #[serde(default)]
    pub tax_number: Option<String>,
    /// Declared job title.
    #[serde(default)]
    pub job_title: Option<String>,
    /// Known phone numbers.
    #[serde(default)]
    pub phone_numbers: Vec<PhoneNumber>,
    /// Known email addresses.
    #[serde(default)]
    pub emails: Vec<Email>,
    /// Known postal addresses.
    #[serde(default)]
    pub addresses: Vec<Address>,
    /// Declared personal relationships.
    #[serde(default)]
    pub relations: Vec<IdentityRelation>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_deserializes_from_wire_json() {
        let json = r#"{
            "id": "e9b1c6b2-6f0a-4a4e-9c25-0fdfdc4a8d01",
            "itemId": "a9e98929-3a75-4312-92c2-96fd8e91e0ad",
            "fullName": "John Doe",
            "document": "882.937.076-23",
            "documentType": "CPF",
            "birthDate": "1987-06-21",
            "jobTitle": "Engineer",
            "phoneNumbers": [{ "type": "Personal", "value": "+55 81 99999-9999" }],
            "emails": [{ "type": "Personal", "value": "john.doe@email.com" }],
            "addresses": [{
                "fullAddress": "Rua Verdant, 120, Recife, PE, Brasil",
                "city": "Recife",
                "state": "PE",
                "country": "Brasil",
                "postalCode": "50030-310"
            }],
            "relations": [],
            "createdAt": "2024-03-01T12:01:00.000Z",
            "updatedAt": "2024-03-01T12:01:00.000Z"
        }"#;
        let identity: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.full_name.as_deref(), Some("John Doe"));
        assert_eq!(identity.document_type, Some(DocumentType::Cpf));
        assert_eq!(identity.phone_numbers.len(), 1);
        assert!(identity.relations.is_empty());
    }
}
