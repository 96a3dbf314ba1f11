pub mod checkout;
pub mod events;
