pub mod domain;
pub mod errors;
pub mod ports;
pub mod present;
pub mod query;
pub mod seed;
pub mod services;
pub mod stats;

pub use errors::ValidationError;
