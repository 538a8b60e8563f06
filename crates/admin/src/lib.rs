//! `freightdesk-admin` — back-office surface of the shipment resource.
//!
//! Declares what the external admin renderer needs (field visibility
//! metadata, record action names) and implements the record actions against
//! injected persistence/PDF/invoice collaborators.

pub mod actions;
pub mod resource;

pub use actions::{
    ActionError, PdfActionResult, PdfError, PdfRenderer, ShipmentActions, ShipmentStore,
    StoreError,
};
pub use resource::{
    shipment_resource, InputHint, PropertyOptions, ResourceOptions, Visibility,
    CREATE_INVOICE_ACTION, GENERATE_PDF_ACTION,
};
