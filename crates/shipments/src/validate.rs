//! Shipment validation contract.
//!
//! One pass over a fully assembled draft, collecting every violation so the
//! admin form can show all errors at once. Closed enums (`kind`,
//! `shipmentType`, `service`, `status`) are enforced by the type system at
//! deserialization; this pass covers presence, numeric rules, the open
//! country/currency memberships, and the shipper identity-proof rule.

use freightdesk_core::{ValidationError, ViolationList};
use freightdesk_refdata::{CountrySet, CurrencySet};
use tracing::debug;

use crate::shipment::{ConsigneeInfo, ShipmentDetails, ShipmentDraft, ShipperInfo, ShipperKind};

/// Validates shipment drafts against injected reference sets.
#[derive(Debug, Clone)]
pub struct ShipmentValidator {
    countries: CountrySet,
    currencies: CurrencySet,
}

impl ShipmentValidator {
    pub fn new(countries: CountrySet, currencies: CurrencySet) -> Self {
        Self {
            countries,
            currencies,
        }
    }

    /// Validate a draft before any write. Returns every violated rule.
    pub fn validate(&self, draft: &ShipmentDraft) -> Result<(), ValidationError> {
        let mut violations = ViolationList::new();
        self.check_shipper(&draft.shipper, &mut violations);
        self.check_consignee(&draft.consignee, &mut violations);
        self.check_details(&draft.shipment_details, &mut violations);

        if !violations.is_empty() {
            debug!(violations = violations.len(), "shipment draft rejected");
        }
        violations.finish()
    }

    fn check_shipper(&self, shipper: &ShipperInfo, violations: &mut ViolationList) {
        match shipper.kind {
            ShipperKind::Company => {
                if !(present(&shipper.company_name) && present(&shipper.tax_id)) {
                    violations.push(
                        "shipper.identity",
                        "company shipper requires both companyName and taxId (NTN)",
                    );
                }
            }
            ShipperKind::Individual => {
                if !(present(&shipper.person_name) && present(&shipper.national_id)) {
                    violations.push(
                        "shipper.identity",
                        "individual shipper requires both personName and nationalId (CNIC)",
                    );
                }
            }
        }

        require("shipper.email", &shipper.email, violations);
        require_numeric("shipper.phone", &shipper.phone, violations);
        require("shipper.address", &shipper.address, violations);
        require("shipper.city", &shipper.city, violations);
        self.require_country("shipper.country", &shipper.country, violations);
        require("shipper.postCode", &shipper.post_code, violations);
    }

    fn check_consignee(&self, consignee: &ConsigneeInfo, violations: &mut ViolationList) {
        require("consignee.name", &consignee.name, violations);
        require("consignee.email", &consignee.email, violations);
        require_numeric("consignee.phone", &consignee.phone, violations);
        require("consignee.addressLine1", &consignee.address_line1, violations);
        require("consignee.city", &consignee.city, violations);
        self.require_country("consignee.country", &consignee.country, violations);
        require("consignee.postCode", &consignee.post_code, violations);
    }

    fn check_details(&self, details: &ShipmentDetails, violations: &mut ViolationList) {
        require(
            "shipmentDetails.accountNumber",
            &details.account_number,
            violations,
        );
        require(
            "shipmentDetails.description",
            &details.description,
            violations,
        );

        if details.piece_count < 1 {
            violations.push("shipmentDetails.pieceCount", "must be a positive integer");
        }
        require_non_negative("shipmentDetails.weight", details.weight, violations);
        require_non_negative(
            "shipmentDetails.totalVolumetricWeight",
            details.total_volumetric_weight,
            violations,
        );

        if details.currency.trim().is_empty() {
            violations.push("shipmentDetails.currency", "is required");
        } else if !self.currencies.contains(&details.currency) {
            violations.push(
                "shipmentDetails.currency",
                format!("unknown currency code: {}", details.currency),
            );
        }

        self.require_country("shipmentDetails.origin", &details.origin, violations);
        self.require_country(
            "shipmentDetails.destination",
            &details.destination,
            violations,
        );
    }

    fn require_country(&self, field: &str, value: &str, violations: &mut ViolationList) {
        if value.trim().is_empty() {
            violations.push(field, "is required");
        } else if !self.countries.contains(value) {
            violations.push(field, format!("unknown country: {value}"));
        }
    }
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn require(field: &str, value: &str, violations: &mut ViolationList) {
    if value.trim().is_empty() {
        violations.push(field, "is required");
    }
}

fn require_numeric(field: &str, value: &str, violations: &mut ViolationList) {
    if value.trim().is_empty() {
        violations.push(field, "is required");
    } else if value.trim().parse::<u64>().is_err() {
        violations.push(field, "must be a non-negative number");
    }
}

fn require_non_negative(field: &str, value: f64, violations: &mut ViolationList) {
    if !value.is_finite() || value < 0.0 {
        violations.push(field, "must be a non-negative number");
    }
}
