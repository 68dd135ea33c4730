pub mod arrival;
pub mod checker;
pub mod shopper;
