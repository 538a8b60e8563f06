use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use freightdesk_core::{Entity, ShipmentId, ValueObject};

use crate::status::ShipmentStatus;

/// Whether the shipper is a private person or a company.
///
/// The value decides which identity-proof pair the validator demands
/// (NTN for companies, CNIC for individuals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipperKind {
    Individual,
    Company,
}

/// What physically ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentType {
    Docs,
    NonDocsFlyer,
    NonDocsBox,
}

/// Carrier/route option booked for the shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceRoute {
    ViaUkUps,
    ViaUkDhl,
    ViaUkFedex,
    ViaUkRoyalMail,
    DirectUsaUps,
    DirectUsaFedex,
    DirectUsaDhl,
    DirectCanadaUps,
    DirectAustraliaDhl,
    DirectUaeDhl,
    DirectKsaSmsa,
    ViaUaeAramex,
    ViaEuropeDhl,
    ViaEuropeGls,
    ViaChinaSf,
    ViaSingaporeDhl,
    KhiDhl,
    KhiFedex,
    KhiUps,
    LheDhl,
}

/// Sender sub-record.
///
/// The four identity fields are optional at the type level; exactly one
/// pair is required depending on `kind`, enforced by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipperInfo {
    pub kind: ShipperKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// NTN — company tax identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_name: Option<String>,
    /// CNIC — individual national identity number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
    pub email: String,
    /// Digits only; validated as a non-negative number.
    pub phone: String,
    pub address: String,
    pub city: String,
    /// Canonical ISO country name.
    pub country: String,
    pub post_code: String,
}

impl ShipperInfo {
    /// Display name for lists: company or person, per `kind`.
    pub fn name(&self) -> &str {
        let name = match self.kind {
            ShipperKind::Company => self.company_name.as_deref(),
            ShipperKind::Individual => self.person_name.as_deref(),
        };
        name.unwrap_or_default()
    }
}

impl ValueObject for ShipperInfo {}

/// Receiver sub-record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsigneeInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address_line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub city: String,
    pub country: String,
    pub post_code: String,
}

impl ValueObject for ConsigneeInfo {}

/// The booking itself: what ships, how, and where it stands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentDetails {
    pub account_number: String,
    pub shipment_type: ShipmentType,
    /// Number of pieces in the consignment, at least 1.
    pub piece_count: u32,
    pub total_volumetric_weight: f64,
    pub weight: f64,
    pub description: String,
    pub is_fragile: bool,
    /// ISO-4217 currency code.
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shippers_reference: Option<String>,
    pub service: ServiceRoute,
    pub origin: String,
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// Defaults to `SHIPMENT_CREATED` when omitted from the payload.
    #[serde(default)]
    pub status: ShipmentStatus,
}

impl ValueObject for ShipmentDetails {}

/// Candidate shipment record as assembled by a form submission, before the
/// persistence layer has assigned identity and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentDraft {
    pub shipper: ShipperInfo,
    pub consignee: ConsigneeInfo,
    pub shipment_details: ShipmentDetails,
}

/// Stored shipment record.
///
/// `id`, `created_at` and `updated_at` are owned by the persistence layer;
/// this crate never mints or touches them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: ShipmentId,
    pub shipper: ShipperInfo,
    pub consignee: ConsigneeInfo,
    pub shipment_details: ShipmentDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Shipment {
    /// Assemble a stored record from a validated draft. Intended for
    /// persistence implementations, which own id and timestamp assignment.
    pub fn from_draft(
        id: ShipmentId,
        draft: ShipmentDraft,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            shipper: draft.shipper,
            consignee: draft.consignee,
            shipment_details: draft.shipment_details,
            created_at,
            updated_at,
        }
    }

    /// Re-open the record as a draft for a full-record edit.
    pub fn to_draft(&self) -> ShipmentDraft {
        ShipmentDraft {
            shipper: self.shipper.clone(),
            consignee: self.consignee.clone(),
            shipment_details: self.shipment_details.clone(),
        }
    }
}

impl Entity for Shipment {
    type Id = ShipmentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
