pub mod audit_log;
pub mod checkout_service;
pub mod payment;

pub use audit_log::*;
pub use checkout_service::*;
pub use payment::*;
