pub mod client;
pub mod eth;
pub mod handler;
pub mod ops;
pub mod personal;
