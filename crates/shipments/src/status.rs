use serde::{Deserialize, Serialize};

/// Shipment status lifecycle, ordered from booking to delivery.
///
/// The set is closed: assigning anything outside it fails at deserialization.
/// Forward-only progression is the intended use but is advisory, not
/// enforced; `position` lets callers compare stages when they want to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentStatus {
    ShipmentCreated,
    TrackingNumberReceived,
    ShipmentPickedUp,
    ShipmentArrivedAtAirport,
    ShipmentInCustomsClearance,
    ShipmentDeparted,
    ShipmentInClearanceProcess,
    ShipmentForwarded,
    Delivered,
}

impl ShipmentStatus {
    /// Every stage, in lifecycle order.
    pub const ALL: [ShipmentStatus; 9] = [
        ShipmentStatus::ShipmentCreated,
        ShipmentStatus::TrackingNumberReceived,
        ShipmentStatus::ShipmentPickedUp,
        ShipmentStatus::ShipmentArrivedAtAirport,
        ShipmentStatus::ShipmentInCustomsClearance,
        ShipmentStatus::ShipmentDeparted,
        ShipmentStatus::ShipmentInClearanceProcess,
        ShipmentStatus::ShipmentForwarded,
        ShipmentStatus::Delivered,
    ];

    /// Stage assigned to a newly created record.
    pub fn initial() -> Self {
        ShipmentStatus::ShipmentCreated
    }

    pub fn is_terminal(self) -> bool {
        self == ShipmentStatus::Delivered
    }

    /// Zero-based index of this stage within the lifecycle.
    pub fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    /// The following stage, or `None` at the terminal stage.
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.position() + 1).copied()
    }

    /// Wire/display name (e.g. `SHIPMENT_PICKED_UP`).
    pub fn as_str(self) -> &'static str {
        match self {
            ShipmentStatus::ShipmentCreated => "SHIPMENT_CREATED",
            ShipmentStatus::TrackingNumberReceived => "TRACKING_NUMBER_RECEIVED",
            ShipmentStatus::ShipmentPickedUp => "SHIPMENT_PICKED_UP",
            ShipmentStatus::ShipmentArrivedAtAirport => "SHIPMENT_ARRIVED_AT_AIRPORT",
            ShipmentStatus::ShipmentInCustomsClearance => "SHIPMENT_IN_CUSTOMS_CLEARANCE",
            ShipmentStatus::ShipmentDeparted => "SHIPMENT_DEPARTED",
            ShipmentStatus::ShipmentInClearanceProcess => "SHIPMENT_IN_CLEARANCE_PROCESS",
            ShipmentStatus::ShipmentForwarded => "SHIPMENT_FORWARDED",
            ShipmentStatus::Delivered => "DELIVERED",
        }
    }
}

impl Default for ShipmentStatus {
    fn default() -> Self {
        Self::initial()
    }
}

impl core::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
