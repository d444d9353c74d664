//! Value object trait: equality by value, not identity.
//!
//! Billing inputs (plays, performances, invoices) have no identity of their
//! own; two with the same attributes are the same value.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Performance {
///     play_id: PlayId,
///     audience: u32,
/// }
///
/// impl ValueObject for Performance {}
///
/// let a = Performance { play_id: PlayId::new("hamlet"), audience: 55 };
/// let b = Performance { play_id: PlayId::new("hamlet"), audience: 55 };
/// assert_eq!(a, b);  // Equal by value
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
