//! HTTP handlers for the registration API.

pub mod health;
pub mod register;
pub mod registrations;
