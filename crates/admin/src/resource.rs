//! Shipment resource descriptor.
//!
//! Read by the external admin renderer to auto-generate list/edit/show/filter
//! screens. This crate only declares the metadata; routing and page assembly
//! stay outside.

use serde::Serialize;

/// Which of the four generated views display a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Visibility {
    pub list: bool,
    pub edit: bool,
    pub show: bool,
    pub filter: bool,
}

impl Visibility {
    pub const fn everywhere() -> Self {
        Self {
            list: true,
            edit: true,
            show: true,
            filter: true,
        }
    }

    /// Edit and show only; hidden from the list table and filter panel.
    pub const fn detail_only() -> Self {
        Self {
            list: false,
            edit: true,
            show: true,
            filter: false,
        }
    }

    /// Shown and filterable but never editable (system-managed fields).
    pub const fn read_only() -> Self {
        Self {
            list: true,
            edit: false,
            show: true,
            filter: true,
        }
    }

    pub const fn hidden() -> Self {
        Self {
            list: false,
            edit: false,
            show: false,
            filter: false,
        }
    }
}

/// Widget hint for the renderer beyond the field's natural type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputHint {
    Default,
    Number,
    Textarea { rows: u8 },
}

/// Per-property rendering options, keyed by dotted field path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyOptions {
    pub path: &'static str,
    pub visibility: Visibility,
    pub input: InputHint,
    /// Whether this property titles the record in headers and links.
    pub is_title: bool,
}

impl PropertyOptions {
    const fn new(path: &'static str, visibility: Visibility) -> Self {
        Self {
            path,
            visibility,
            input: InputHint::Default,
            is_title: false,
        }
    }

    const fn input(mut self, input: InputHint) -> Self {
        self.input = input;
        self
    }

    const fn title(mut self) -> Self {
        self.is_title = true;
        self
    }
}

/// Everything the admin renderer needs to build the shipment screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceOptions {
    pub resource_id: &'static str,
    pub navigation_icon: &'static str,
    /// Columns of the list table, in order.
    pub list_properties: &'static [&'static str],
    /// Record-scoped custom actions, by name.
    pub record_actions: &'static [&'static str],
    pub properties: Vec<PropertyOptions>,
}

impl ResourceOptions {
    pub fn property(&self, path: &str) -> Option<&PropertyOptions> {
        self.properties.iter().find(|p| p.path == path)
    }
}

/// Name of the record action producing a PDF document.
pub const GENERATE_PDF_ACTION: &str = "generatePdf";
/// Name of the record action opening the invoice line-item editor.
pub const CREATE_INVOICE_ACTION: &str = "createInvoice";

/// The shipment resource as shown in the back office.
pub fn shipment_resource() -> ResourceOptions {
    ResourceOptions {
        resource_id: "shipments",
        navigation_icon: "DeliveryParcel",
        list_properties: &[
            "id",
            "shipper.name",
            "consignee.name",
            "shipmentDetails.service",
            "shipmentDetails.status",
        ],
        record_actions: &[GENERATE_PDF_ACTION, CREATE_INVOICE_ACTION],
        properties: vec![
            PropertyOptions::new("id", Visibility::hidden()).title(),
            PropertyOptions::new("shipper", Visibility::detail_only()),
            PropertyOptions::new("consignee", Visibility::detail_only()),
            PropertyOptions::new("shipmentDetails", Visibility::detail_only()),
            PropertyOptions::new("shipper.kind", Visibility::everywhere()),
            PropertyOptions::new("shipmentDetails.status", Visibility::read_only()),
            PropertyOptions::new(
                "createdAt",
                Visibility {
                    list: true,
                    edit: false,
                    show: true,
                    filter: false,
                },
            ),
            PropertyOptions::new("updatedAt", Visibility::read_only()),
            PropertyOptions::new("shipmentDetails.comments", Visibility::detail_only())
                .input(InputHint::Textarea { rows: 3 }),
            PropertyOptions::new("shipmentDetails.pieceCount", Visibility::detail_only())
                .input(InputHint::Number),
            PropertyOptions::new("shipmentDetails.weight", Visibility::detail_only())
                .input(InputHint::Number),
            PropertyOptions::new(
                "shipmentDetails.totalVolumetricWeight",
                Visibility::detail_only(),
            )
            .input(InputHint::Number),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_shows_names_service_and_status() {
        let resource = shipment_resource();
        assert_eq!(
            resource.list_properties,
            &[
                "id",
                "shipper.name",
                "consignee.name",
                "shipmentDetails.service",
                "shipmentDetails.status",
            ]
        );
    }

    #[test]
    fn id_titles_the_record_but_is_not_rendered() {
        let resource = shipment_resource();
        let id = resource.property("id").unwrap();
        assert!(id.is_title);
        assert_eq!(id.visibility, Visibility::hidden());
    }

    #[test]
    fn sub_records_are_edit_and_show_only() {
        let resource = shipment_resource();
        for path in ["shipper", "consignee", "shipmentDetails"] {
            let prop = resource.property(path).unwrap();
            assert_eq!(prop.visibility, Visibility::detail_only(), "{path}");
        }
    }

    #[test]
    fn system_managed_fields_are_never_editable() {
        let resource = shipment_resource();
        for path in ["shipmentDetails.status", "createdAt", "updatedAt"] {
            assert!(!resource.property(path).unwrap().visibility.edit, "{path}");
        }
        // Status is filterable; creation time is not.
        assert!(resource.property("shipmentDetails.status").unwrap().visibility.filter);
        assert!(!resource.property("createdAt").unwrap().visibility.filter);
    }

    #[test]
    fn numeric_and_textarea_hints_are_declared() {
        let resource = shipment_resource();
        for path in [
            "shipmentDetails.pieceCount",
            "shipmentDetails.weight",
            "shipmentDetails.totalVolumetricWeight",
        ] {
            assert_eq!(resource.property(path).unwrap().input, InputHint::Number);
        }
        assert_eq!(
            resource.property("shipmentDetails.comments").unwrap().input,
            InputHint::Textarea { rows: 3 }
        );
    }

    #[test]
    fn both_record_actions_are_registered() {
        let resource = shipment_resource();
        assert!(resource.record_actions.contains(&GENERATE_PDF_ACTION));
        assert!(resource.record_actions.contains(&CREATE_INVOICE_ACTION));
    }
}
