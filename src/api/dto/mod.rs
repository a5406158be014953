pub mod account;
pub mod service;
pub mod validation;
