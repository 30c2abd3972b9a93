//! HTTP handlers for the blueprint service.

pub mod blueprint;
pub mod health;
pub mod metrics;
