//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types (immutable values handed to callers)
//! - `wire.rs` — Per-method response contracts decoded from vendor JSON
//! - `convert.rs` — `TryFrom`/`From` conversions from wire to domain types
//! - `params.rs` — Typed request parameters and their query encoding
//! - `client.rs` — Sub-client with one method per vendor call

pub mod account;
pub mod catalog;
pub mod proxy;
