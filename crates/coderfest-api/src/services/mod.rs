//! Supporting services for the registration API.

pub mod email;
