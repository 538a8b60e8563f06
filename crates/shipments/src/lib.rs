//! `freightdesk-shipments` — the shipment record model.
//!
//! Owns the canonical shape of a shipment entity, its field-level and
//! cross-field validation rules, and its status lifecycle. Persistence and
//! screen rendering are external collaborators.

pub mod shipment;
pub mod status;
pub mod validate;

pub use shipment::{
    ConsigneeInfo, ServiceRoute, Shipment, ShipmentDetails, ShipmentDraft, ShipmentType,
    ShipperInfo, ShipperKind,
};
pub use status::ShipmentStatus;
pub use validate::ShipmentValidator;
