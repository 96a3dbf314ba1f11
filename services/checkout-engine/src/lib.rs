//! Checkout Engine Service
//!
//! The cart validator/pricer: given a resolved event and a proposed cart,
//! checks add-on business rules and computes a deterministic total.
//!
//! The engine is a pure function of (event, cart). It never fails for a
//! well-typed cart: unknown ids normalize to zero selection, and every
//! rule violation is collected and returned as data so a storefront can
//! surface all problems in one pass.

pub mod engine;
pub mod pricing;
pub mod validator;

pub use engine::validate_and_price;
