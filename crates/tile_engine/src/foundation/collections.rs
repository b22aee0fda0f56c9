//! Specialized collection types

pub use slotmap::{new_key_type, Key, SlotMap};

/// Handle-based map using slot map for stable references
///
/// Removing an entry invalidates its handle; a stale handle never aliases a
/// later entry.
pub type HandleMap<K, T> = SlotMap<K, T>;
