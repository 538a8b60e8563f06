//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity is the same object across edits as long as its identifier is
/// unchanged; full-record edits replace its attributes, never its identity.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
