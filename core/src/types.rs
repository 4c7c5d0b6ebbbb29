//! Shared primitive types used across the entire desk.

/// A stable, unique identifier for any entity on the desk.
pub type EntityId = String;

/// A warehouse stock-keeping unit code.
pub type Sku = String;
