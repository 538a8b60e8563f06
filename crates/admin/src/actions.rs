//! Record-scoped actions and collaborator boundaries.
//!
//! Validation happens here, before any write; persistence, PDF rendering and
//! invoice creation stay behind traits so the back office carries no storage
//! or rendering code of its own.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use freightdesk_core::{InvoiceId, ShipmentId, ValidationError};
use freightdesk_invoicing::{CreateInvoiceAction, InvoiceDraft, SubmissionError};
use freightdesk_shipments::{Shipment, ShipmentDraft, ShipmentValidator};

/// Persistence collaborator failure (connection, write, lookup).
#[derive(Debug, Error)]
#[error("shipment store failure: {message}")]
pub struct StoreError {
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(message: impl Into<String>, source: anyhow::Error) -> Self {
        Self {
            message: message.into(),
            source: Some(source),
        }
    }
}

/// PDF collaborator failure.
#[derive(Debug, Error)]
#[error("pdf rendering failed: {message}")]
pub struct PdfError {
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

impl PdfError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(message: impl Into<String>, source: anyhow::Error) -> Self {
        Self {
            message: message.into(),
            source: Some(source),
        }
    }
}

/// Anything a record action can fail with. Scoped to a single interaction;
/// never fatal to the process.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Pdf(#[from] PdfError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error("shipment not found: {0}")]
    NotFound(ShipmentId),
}

/// Persistence collaborator. Owns id assignment and both timestamps.
#[async_trait]
pub trait ShipmentStore: Send + Sync {
    /// Store a validated draft as a new record.
    async fn create(&self, draft: ShipmentDraft) -> Result<Shipment, StoreError>;

    /// Full-record replace; bumps `updated_at`. `None` when the id is unknown.
    async fn update(
        &self,
        id: ShipmentId,
        draft: ShipmentDraft,
    ) -> Result<Option<Shipment>, StoreError>;

    async fn get(&self, id: ShipmentId) -> Result<Option<Shipment>, StoreError>;
}

/// PDF collaborator: renders a record and returns the URL it is served from.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, record: &Shipment) -> Result<String, PdfError>;
}

/// Result of the `generatePdf` record action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PdfActionResult {
    pub record: Shipment,
    pub url: String,
}

/// The shipment record actions, wired to their collaborators.
pub struct ShipmentActions<S, P> {
    store: S,
    pdf: P,
    validator: ShipmentValidator,
}

impl<S: ShipmentStore, P: PdfRenderer> ShipmentActions<S, P> {
    pub fn new(store: S, pdf: P, validator: ShipmentValidator) -> Self {
        Self {
            store,
            pdf,
            validator,
        }
    }

    /// Validate and persist a new shipment. No write happens on rejection.
    pub async fn create_shipment(&self, draft: ShipmentDraft) -> Result<Shipment, ActionError> {
        if let Err(err) = self.validator.validate(&draft) {
            warn!(violations = err.violations.len(), "shipment create rejected");
            return Err(err.into());
        }
        let record = self.store.create(draft).await?;
        info!(shipment_id = %record.id, "shipment created");
        Ok(record)
    }

    /// Validate and replace an existing record wholesale.
    pub async fn update_shipment(
        &self,
        id: ShipmentId,
        draft: ShipmentDraft,
    ) -> Result<Shipment, ActionError> {
        if let Err(err) = self.validator.validate(&draft) {
            warn!(shipment_id = %id, violations = err.violations.len(), "shipment update rejected");
            return Err(err.into());
        }
        let updated = self.store.update(id, draft).await?;
        updated.ok_or(ActionError::NotFound(id))
    }

    /// `generatePdf` record action: render the record, hand back `{record, url}`.
    pub async fn generate_pdf(&self, id: ShipmentId) -> Result<PdfActionResult, ActionError> {
        let record = self
            .store
            .get(id)
            .await?
            .ok_or(ActionError::NotFound(id))?;
        let url = self.pdf.render(&record).await?;
        info!(shipment_id = %id, url, "shipment pdf generated");
        Ok(PdfActionResult { record, url })
    }

    /// `createInvoice` record action: submit the editor's draft against an
    /// existing shipment. The draft is preserved on failure.
    pub async fn create_invoice(
        &self,
        id: ShipmentId,
        draft: &InvoiceDraft,
        action: &dyn CreateInvoiceAction,
    ) -> Result<InvoiceId, ActionError> {
        if self.store.get(id).await?.is_none() {
            return Err(ActionError::NotFound(id));
        }
        Ok(draft.submit(id, action).await?)
    }
}
