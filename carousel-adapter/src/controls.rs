use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use carousel::Carousel;

/// Which navigation affordances the host wants rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayOptions {
    pub show_arrows: bool,
    pub show_indicators: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_arrows: true,
            show_indicators: true,
        }
    }
}

impl DisplayOptions {
    pub fn with_arrows(mut self, show_arrows: bool) -> Self {
        self.show_arrows = show_arrows;
        self
    }

    pub fn with_indicators(mut self, show_indicators: bool) -> Self {
        self.show_indicators = show_indicators;
        self
    }
}

/// Enabled state of the previous/next buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrowControls {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// A pagination control ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationDot {
    pub page: usize,
    pub target_index: usize,
    pub is_current: bool,
    /// Screen-reader label, e.g. `"Go to slide 3"` (1-based).
    pub label: String,
}

/// Arrow buttons, or `None` when hidden or when every slide is already visible.
pub fn arrow_controls(carousel: &Carousel, display: DisplayOptions) -> Option<ArrowControls> {
    if !display.show_arrows || carousel.item_count() <= carousel.visible_slides() {
        return None;
    }
    Some(ArrowControls {
        prev_enabled: carousel.can_go_prev(),
        next_enabled: carousel.can_go_next(),
    })
}

/// Pagination dots; empty when hidden or when there is at most one page.
pub fn pagination_dots(carousel: &Carousel, display: DisplayOptions) -> Vec<PaginationDot> {
    if !display.show_indicators || carousel.page_count() <= 1 {
        return Vec::new();
    }
    let mut dots = Vec::with_capacity(carousel.page_count());
    carousel.for_each_page(|p| {
        dots.push(PaginationDot {
            page: p.index,
            target_index: p.target_index,
            is_current: p.is_current,
            label: format!("Go to slide {}", p.target_index.saturating_add(1)),
        });
    });
    dots
}
