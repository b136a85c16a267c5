//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`).
//! Keep it lean: no I/O, networking, or heavy logic—just data and simple helpers.
//!
//! The JSON shapes produced here are a compatibility contract: they must match
//! the blobs an earlier release of the portal already wrote to browser local
//! storage (camelCase keys, `lastSaved` as an ISO string or `null`, player ids
//! as epoch milliseconds).

pub mod config;
pub mod constants;
pub mod history;
pub mod registration;
