//! Data-access layer: a thin client for the hosted data/auth/storage
//! gateway plus one synchronization module per entity (cards, contacts,
//! image uploads).
//!
//! Every remote failure surfaces as exactly one error toast carrying the
//! failure's message and is re-raised to the caller; no call is retried.
//! Collection state lives in the component that owns it; two instances of
//! the same entity state are fully independent of each other.

pub mod cards;
pub mod contacts;
pub mod gateway;
pub mod uploads;
