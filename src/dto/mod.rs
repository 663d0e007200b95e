pub mod orders;
pub mod payment;
pub mod products;
