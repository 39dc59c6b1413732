//! Top-level facade crate for promrelay.
//!
//! Re-exports the core model and the gateway library so users can depend on a single crate.

pub mod core {
    pub use promrelay_core::*;
}

pub mod gateway {
    pub use promrelay_gateway::*;
}
