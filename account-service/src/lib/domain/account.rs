pub mod errors;
pub mod jobs;
pub mod models;
pub mod ports;
pub mod service;
