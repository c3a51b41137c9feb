//! Value object trait: equality by value, not identity.
//!
//! An item name or a quantity has no identity of its own; two instances holding
//! the same value are interchangeable.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Their
/// constructors are the only place validation runs, so holding one is proof
/// that the value passed the domain rules.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Sku(String);
///
/// impl ValueObject for Sku {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
