//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on index math and navigation state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - An auto-play timer driven by the adapter's clock (`tick(now_ms)`), paused by hover/focus
//! - Key/pointer/focus event wiring through a single [`Controller`]
//! - Render models for arrow buttons, pagination dots, and decorated slides
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod autoplay;
mod controller;
mod controls;
mod slides;

#[cfg(test)]
mod tests;

pub use autoplay::AutoPlay;
pub use controller::Controller;
pub use controls::{ArrowControls, DisplayOptions, PaginationDot, arrow_controls, pagination_dots};
pub use slides::{Slide, SlideView, decorate_slides};
