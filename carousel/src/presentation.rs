use alloc::vec::Vec;

use crate::normalize::clamp_visible_slides;
use crate::{Page, PageLayout, VisibleRange};

/// Inclusive range of slides presented when `active_index` is the first visible slide.
///
/// Returns `(0, 0)` for an empty carousel.
pub fn visible_range(active_index: usize, visible_slides: usize, item_count: usize) -> VisibleRange {
    if item_count == 0 {
        return VisibleRange { start: 0, end: 0 };
    }
    let last = item_count - 1;
    let start = active_index.min(last);
    let end = start
        .saturating_add(clamp_visible_slides(visible_slides) - 1)
        .min(last);
    VisibleRange { start, end }
}

/// `ceil(item_count / visible_slides)`, or `0` for an empty carousel.
pub fn page_count(item_count: usize, visible_slides: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    item_count.div_ceil(clamp_visible_slides(visible_slides)).max(1)
}

/// Calls `f` for each pagination control without allocating.
pub fn for_each_page(
    item_count: usize,
    visible_slides: usize,
    active_index: usize,
    mut f: impl FnMut(Page),
) {
    let per_page = clamp_visible_slides(visible_slides);
    for index in 0..page_count(item_count, per_page) {
        let target_index = index.saturating_mul(per_page);
        let is_current =
            active_index >= target_index && active_index < target_index.saturating_add(per_page);
        f(Page {
            index,
            target_index,
            is_current,
        });
    }
}

/// Builds the pagination layout: one page per block of `visible_slides` slides.
pub fn page_layout(item_count: usize, visible_slides: usize, active_index: usize) -> PageLayout {
    let mut pages = Vec::with_capacity(page_count(item_count, visible_slides));
    for_each_page(item_count, visible_slides, active_index, |p| pages.push(p));
    PageLayout { pages }
}
