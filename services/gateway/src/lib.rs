//! HTTP boundary for the ticket selector
//!
//! Thin layer over the checkout engine: resolves events against the
//! read-only catalog, forwards cart payloads to the engine, and serializes
//! results. Holds no business logic of its own.

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
