//! Shared primitive types used across the engine.

/// A stable account identifier, as it appears in the input table.
pub type AccountId = String;

/// A sequential ring identifier (`RING_001`, `RING_002`, ...).
pub type RingId = String;
