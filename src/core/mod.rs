//! Session state and business logic over the in-memory containers.

pub mod accounts;
pub mod services;
pub mod session;
