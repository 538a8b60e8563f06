//! Submission boundary: the one network round-trip the editor performs.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use freightdesk_core::{InvoiceId, ShipmentId};

use crate::draft::{InvoiceDraft, InvoiceType, ProductLine};

/// The invoice "create" action rejected, downstream of the editor.
///
/// The draft that produced the payload is left untouched; the user may edit
/// and resubmit. No automatic retry.
#[derive(Debug, Error)]
#[error("invoice submission failed: {message}")]
pub struct SubmissionError {
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

impl SubmissionError {
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

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Atomic submission payload handed to the external "create invoice" action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePayload {
    pub invoice_number: String,
    /// ISO-8601 calendar date.
    pub date: NaiveDate,
    /// Decimal string of the line-total sum, not a rounded currency value.
    pub amount: String,
    pub currency: String,
    pub notes: String,
    #[serde(rename = "type")]
    pub invoice_type: InvoiceType,
    pub products: Vec<ProductLine>,
}

/// External record-creation action, scoped to one shipment record.
#[async_trait]
pub trait CreateInvoiceAction: Send + Sync {
    async fn create_invoice(
        &self,
        shipment_id: ShipmentId,
        payload: InvoicePayload,
    ) -> Result<InvoiceId, SubmissionError>;
}

impl InvoiceDraft {
    /// Assemble the wire payload from the current draft state.
    pub fn payload(&self) -> InvoicePayload {
        InvoicePayload {
            invoice_number: self.invoice_number.clone(),
            date: self.date,
            amount: self.amount.clone(),
            currency: self.currency.clone(),
            notes: self.notes.clone(),
            invoice_type: self.invoice_type,
            products: self.lines.clone(),
        }
    }

    /// Rebuild a draft from a payload, preserving every field exactly.
    pub fn from_payload(payload: InvoicePayload) -> Self {
        Self {
            invoice_number: payload.invoice_number,
            date: payload.date,
            currency: payload.currency,
            notes: payload.notes,
            invoice_type: payload.invoice_type,
            amount: payload.amount,
            lines: payload.products,
        }
    }

    /// Hand the draft to the external create action, once.
    ///
    /// On success the caller navigates to the shipment's detail view; on
    /// failure the draft is unchanged and the error is surfaced for display.
    pub async fn submit(
        &self,
        shipment_id: ShipmentId,
        action: &dyn CreateInvoiceAction,
    ) -> Result<InvoiceId, SubmissionError> {
        match action.create_invoice(shipment_id, self.payload()).await {
            Ok(invoice_id) => {
                info!(%shipment_id, %invoice_id, "invoice created");
                Ok(invoice_id)
            }
            Err(err) => {
                warn!(%shipment_id, error = %err, "invoice submission rejected");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{LineEdit, LineField, UnitOfMeasure};
    use std::sync::Mutex;

    fn populated_draft() -> InvoiceDraft {
        let mut draft = InvoiceDraft::open(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        draft.invoice_number = "INV-2024-0007".to_string();
        draft.notes = "Payable on receipt".to_string();
        draft.invoice_type = InvoiceType::Commercial;
        draft.update_line(0, LineEdit::Description("Cotton shirts".to_string()));
        draft.update_line(0, LineEdit::HsCode("6105.10".to_string()));
        draft.update_line(0, LineEdit::Uom(UnitOfMeasure::Ctn));
        draft.update_line(0, LineEdit::Quantity(4.0));
        draft.update_line(0, LineEdit::UnitPrice(12.5));
        draft.add_line();
        draft.update_line(1, LineEdit::parse(LineField::Description, "Labels").unwrap());
        draft.update_line(1, LineEdit::Quantity(100.0));
        draft.update_line(1, LineEdit::UnitPrice(0.1));
        draft
    }

    struct RecordingAction {
        calls: Mutex<Vec<(ShipmentId, InvoicePayload)>>,
        invoice_id: InvoiceId,
    }

    impl RecordingAction {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                invoice_id: InvoiceId::new(),
            }
        }
    }

    #[async_trait]
    impl CreateInvoiceAction for RecordingAction {
        async fn create_invoice(
            &self,
            shipment_id: ShipmentId,
            payload: InvoicePayload,
        ) -> Result<InvoiceId, SubmissionError> {
            self.calls.lock().unwrap().push((shipment_id, payload));
            Ok(self.invoice_id)
        }
    }

    struct RejectingAction;

    #[async_trait]
    impl CreateInvoiceAction for RejectingAction {
        async fn create_invoice(
            &self,
            _shipment_id: ShipmentId,
            _payload: InvoicePayload,
        ) -> Result<InvoiceId, SubmissionError> {
            Err(SubmissionError::with_source(
                "storage unavailable",
                anyhow::anyhow!("connection refused"),
            ))
        }
    }

    #[test]
    fn payload_uses_the_documented_wire_keys() {
        let json = serde_json::to_value(populated_draft().payload()).unwrap();
        assert_eq!(json["invoiceNumber"], "INV-2024-0007");
        assert_eq!(json["date"], "2024-03-15");
        assert_eq!(json["amount"], "60");
        assert_eq!(json["type"], "commercial");
        let line = &json["products"][0];
        assert_eq!(line["desc"], "Cotton shirts");
        assert_eq!(line["hsCode"], "6105.10");
        assert_eq!(line["uom"], "CTN");
        assert_eq!(line["unitPrice"], 12.5);
        assert_eq!(line["total"], 50.0);
    }

    #[test]
    fn payload_round_trips_back_into_an_identical_draft() {
        let draft = populated_draft();
        let json = serde_json::to_string(&draft.payload()).unwrap();
        let payload: InvoicePayload = serde_json::from_str(&json).unwrap();
        assert_eq!(InvoiceDraft::from_payload(payload), draft);
    }

    #[tokio::test]
    async fn submit_hands_the_payload_to_the_action_once() {
        let draft = populated_draft();
        let action = RecordingAction::new();
        let shipment_id = ShipmentId::new();

        let invoice_id = draft.submit(shipment_id, &action).await.unwrap();
        assert_eq!(invoice_id, action.invoice_id);

        let calls = action.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, shipment_id);
        assert_eq!(calls[0].1, draft.payload());
    }

    #[tokio::test]
    async fn rejected_submission_surfaces_and_preserves_the_draft() {
        let draft = populated_draft();
        let before = draft.clone();

        let err = draft
            .submit(ShipmentId::new(), &RejectingAction)
            .await
            .unwrap_err();
        assert_eq!(err.message(), "storage unavailable");
        assert_eq!(draft, before);
    }
}
