//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity of their own; two with the same attribute
/// values are interchangeable. Sub-records of a shipment (shipper, consignee,
/// shipment details) and invoice lines are value objects: editing one means
/// replacing it wholesale inside its owning entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
