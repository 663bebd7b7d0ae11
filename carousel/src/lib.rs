//! A headless carousel navigation engine.
//!
//! For adapter-level utilities (auto-play timer, event wiring, control models), see the
//! `carousel-adapter` crate.
//!
//! This crate owns the discrete index state of a carousel: which slide is first visible, which
//! transitions are legal (next/previous/jump/first/last), whether navigation wraps or clamps at
//! the ends, and how the visible range and pagination derive from that index.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to:
//! - render slides according to [`Carousel::visible_range`]
//! - enable/disable arrow controls per [`Carousel::can_go_prev`]/[`Carousel::can_go_next`]
//! - render pagination per [`Carousel::page_layout`]
//! - forward key identifiers through [`map_key`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod keys;
mod normalize;
mod options;
mod presentation;
mod state;
mod types;


pub use carousel::Carousel;
pub use keys::{NavigationIntent, NavigationKey, UnknownKey, is_navigation_key, map_key};
pub use normalize::{clamp_visible_slides, max_index, normalize};
pub use options::{CarouselOptions, DEFAULT_AUTO_PLAY_INTERVAL_MS, OnChangeCallback};
pub use presentation::{for_each_page, page_count, page_layout, visible_range};
pub use state::CarouselState;
pub use types::{Page, PageLayout, VisibleRange};
