//! Observability for the card.
//!
//! The card instruments its configure and render seams with `tracing` spans
//! and events. This module provides an optional stderr subscriber for hosts
//! (such as the reference host binary) that do not install their own.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. The level passed to [`init_tracing`]
//! 3. Default: `"info"`

mod init;

pub use init::init_tracing;
