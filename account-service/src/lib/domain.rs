pub mod account;
pub mod authentication;
pub mod session;
pub mod validation;
