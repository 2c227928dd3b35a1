//! Shared Kernel
//!
//! The vocabulary both feature crates agree on:
//! - Unified error type, result alias, and error classification
//! - Typed entity ids (store-assigned integers)
//!
//! Anything here is hard to change, so the crate stays deliberately small.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
