//! nightboard server library entry.
//!
//! This crate wires configuration, the sysinfo-backed stats provider, request
//! tracking, and the HTTP handlers into a cohesive service. It is intended to
//! be consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod obs;
pub mod pages;
pub mod router;
pub mod sysstats;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "nightboard";
