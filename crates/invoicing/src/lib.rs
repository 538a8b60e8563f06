//! `freightdesk-invoicing` — the invoice line-item editor.
//!
//! Maintains the editable in-memory state of one invoice draft tied to one
//! shipment record, and assembles the submission payload for the external
//! "create invoice" action.

pub mod draft;
pub mod submit;

pub use draft::{InvoiceDraft, InvoiceType, LineEdit, LineField, ProductLine, UnitOfMeasure};
pub use submit::{CreateInvoiceAction, InvoicePayload, SubmissionError};
