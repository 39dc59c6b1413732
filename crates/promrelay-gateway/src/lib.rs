//! promrelay gateway library entry.
//!
//! This crate wires the HTTP surface, config, auth gate, object-store
//! collaborators, and the ingest/read paths into a cohesive service. It is
//! intended to be consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod aggregate;
pub mod app_state;
pub mod auth;
pub mod config;
pub mod handlers;
pub mod ingest;
pub mod ops;
pub mod router;
pub mod store;
