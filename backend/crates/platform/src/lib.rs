//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations with no domain
//! knowledge:
//! - Cookie management
//! - One-shot flash message cookies
//! - HTML rendering (Tera wrapper)
//! - Credential scheme interface

pub mod cookie;
pub mod credential;
pub mod flash;
pub mod render;
