//! Catalog library for the ticket selector service
//!
//! This library provides the domain types shared across the service:
//! immutable event definitions, the transient cart payload, checkout
//! results, and the read-only catalog store abstraction.
//!
//! # Modules
//! - `event`: Event, ticket type, add-on and variant definitions
//! - `cart`: Transient cart payload (tickets + add-on selections)
//! - `checkout`: Validation issues and the checkout summary
//! - `money`: Monetary rounding policy
//! - `store`: Read-only catalog lookup (`CatalogStore`)
//! - `errors`: Error taxonomy
//! - `sample`: Seed catalog used by the gateway and as a test fixture

// Public modules
pub mod cart;
pub mod checkout;
pub mod errors;
pub mod event;
pub mod money;
pub mod sample;
pub mod store;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::cart::*;
    pub use crate::checkout::*;
    pub use crate::errors::*;
    pub use crate::event::*;
    pub use crate::money::*;
    pub use crate::store::*;
}
