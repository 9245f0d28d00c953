//! Adapter utilities for the `recycler` crate.
//!
//! The `recycler` crate is UI-agnostic and only talks to the host through traits. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A [`Controller`] for the enable/disable lifecycle and scroll-to requests
//! - A headless scroll surface and node factory ([`sim`]) for demos, tests and custom renderers
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![forbid(unsafe_code)]

mod controller;
pub mod sim;


pub use controller::Controller;
pub use sim::{SimNode, SimNodeFactory, SimViewport};
