pub mod catalog;
pub mod checkout;
