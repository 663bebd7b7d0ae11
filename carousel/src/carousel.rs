use alloc::sync::Arc;

use crate::normalize::{max_index, normalize};
use crate::presentation;
use crate::{CarouselOptions, CarouselState, NavigationIntent, Page, PageLayout, VisibleRange};

#[inline]
fn to_raw(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

/// A headless carousel navigation state machine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects or slide content.
/// - It owns the active index and paused flag; every transition funnels through [`normalize`].
/// - Derived presentation values (visible range, pagination) are recomputed on demand.
///
/// Time is not modelled here. Auto-play scheduling lives in the `carousel-adapter` crate, which
/// drives this type through the same `next()` any caller could issue.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    active_index: usize,
    is_paused: bool,
}

impl Carousel {
    /// Creates a carousel and normalizes `options.initial_index`.
    ///
    /// The initial placement does not fire `on_change`.
    pub fn new(options: CarouselOptions) -> Self {
        cdebug!(
            item_count = options.item_count,
            visible_slides = options.visible_slides,
            looping = options.looping,
            auto_play = options.auto_play,
            "Carousel::new"
        );
        if options.visible_slides == 0 {
            cwarn!("Carousel::new: visible_slides = 0, treating as 1");
        }
        let active_index = normalize(
            options.initial_index,
            options.item_count,
            options.effective_visible_slides(),
            options.looping,
        );
        Self {
            options,
            active_index,
            is_paused: false,
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Replaces the configuration and re-normalizes the active index.
    ///
    /// The paused flag and the current position survive; `initial_index` is only consulted by
    /// [`Carousel::new`]. Fires `on_change` if re-normalization moves the active index.
    pub fn set_options(&mut self, options: CarouselOptions) {
        if options.visible_slides == 0 {
            cwarn!("Carousel::set_options: visible_slides = 0, treating as 1");
        }
        self.options = options;
        cdebug!(
            item_count = self.options.item_count,
            visible_slides = self.options.visible_slides,
            looping = self.options.looping,
            auto_play = self.options.auto_play,
            "Carousel::set_options"
        );
        self.renormalize();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        if self.options.item_count == item_count {
            return;
        }
        self.options.item_count = item_count;
        self.renormalize();
    }

    pub fn set_visible_slides(&mut self, visible_slides: usize) {
        if self.options.visible_slides == visible_slides {
            return;
        }
        if visible_slides == 0 {
            cwarn!("Carousel::set_visible_slides: visible_slides = 0, treating as 1");
        }
        self.options.visible_slides = visible_slides;
        self.renormalize();
    }

    pub fn set_loop(&mut self, looping: bool) {
        if self.options.looping == looping {
            return;
        }
        self.options.looping = looping;
        self.renormalize();
    }

    pub fn set_auto_play(&mut self, auto_play: bool) {
        self.options.auto_play = auto_play;
    }

    pub fn set_auto_play_interval_ms(&mut self, interval_ms: u64) {
        self.options.auto_play_interval_ms = interval_ms;
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(usize) + Send + Sync + 'static>) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    pub fn item_count(&self) -> usize {
        self.options.item_count
    }

    pub fn visible_slides(&self) -> usize {
        self.options.effective_visible_slides()
    }

    pub fn is_looping(&self) -> bool {
        self.options.looping
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    /// Largest active index reachable without wrapping: `max(item_count - visible_slides, 0)`.
    pub fn max_index(&self) -> usize {
        max_index(self.options.item_count, self.visible_slides())
    }

    /// Always `true` when looping (and non-empty); otherwise `active_index < max_index`.
    pub fn can_go_next(&self) -> bool {
        if self.options.item_count == 0 {
            return false;
        }
        self.options.looping || self.active_index < self.max_index()
    }

    /// Always `true` when looping (and non-empty); otherwise `active_index > 0`.
    pub fn can_go_prev(&self) -> bool {
        if self.options.item_count == 0 {
            return false;
        }
        self.options.looping || self.active_index > 0
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            active_index: self.active_index,
            is_paused: self.is_paused,
        }
    }

    /// Re-applies a previously captured snapshot.
    ///
    /// The index goes through normalization, so a snapshot taken with a different item count is
    /// still safe to restore.
    pub fn restore(&mut self, state: CarouselState) {
        self.is_paused = state.is_paused;
        self.go_to(to_raw(state.active_index));
    }

    pub fn visible_range(&self) -> VisibleRange {
        presentation::visible_range(
            self.active_index,
            self.visible_slides(),
            self.options.item_count,
        )
    }

    /// Whether the slide at `index` is currently presented.
    pub fn is_visible(&self, index: usize) -> bool {
        index < self.options.item_count && self.visible_range().contains(index)
    }

    pub fn page_count(&self) -> usize {
        presentation::page_count(self.options.item_count, self.visible_slides())
    }

    pub fn page_layout(&self) -> PageLayout {
        presentation::page_layout(
            self.options.item_count,
            self.visible_slides(),
            self.active_index,
        )
    }

    /// Zero-allocation variant of [`Carousel::page_layout`].
    pub fn for_each_page(&self, f: impl FnMut(Page)) {
        presentation::for_each_page(
            self.options.item_count,
            self.visible_slides(),
            self.active_index,
            f,
        );
    }

    /// Index of the page containing the active index, if any.
    pub fn current_page(&self) -> Option<usize> {
        if self.options.item_count == 0 {
            return None;
        }
        let page = self.active_index / self.visible_slides();
        (page < self.page_count()).then_some(page)
    }

    /// Whether the auto-play timer should currently be running: enabled, more than one page of
    /// slides, and not paused.
    pub fn auto_play_active(&self) -> bool {
        self.options.auto_play
            && self.options.item_count > self.visible_slides()
            && !self.is_paused
    }

    /// Moves to `index` (normalized). Returns `true` if the active index changed.
    ///
    /// `go_to(active_index)` is a no-op and never fires `on_change`.
    pub fn go_to(&mut self, index: i64) -> bool {
        ctrace!(index, "Carousel::go_to");
        self.update_index(index)
    }

    pub fn next(&mut self) -> bool {
        ctrace!(from = self.active_index, "Carousel::next");
        self.update_index(to_raw(self.active_index).saturating_add(1))
    }

    pub fn prev(&mut self) -> bool {
        ctrace!(from = self.active_index, "Carousel::prev");
        self.update_index(to_raw(self.active_index).saturating_sub(1))
    }

    pub fn first(&mut self) -> bool {
        self.update_index(0)
    }

    /// Moves to the last reachable position: `max_index`, so the final page is fully visible.
    pub fn last(&mut self) -> bool {
        self.update_index(to_raw(self.max_index()))
    }

    /// Jumps to the first slide of `page` (`page * visible_slides`, normalized).
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let target = page.saturating_mul(self.visible_slides());
        self.update_index(to_raw(target))
    }

    pub fn apply_intent(&mut self, intent: NavigationIntent) -> bool {
        match intent {
            NavigationIntent::Prev => self.prev(),
            NavigationIntent::Next => self.next(),
            NavigationIntent::First => self.first(),
            NavigationIntent::Last => self.last(),
            NavigationIntent::GoTo(index) => self.go_to(index),
        }
    }

    /// Marks the carousel as paused. Does not touch the active index.
    pub fn pause(&mut self) {
        if !self.is_paused {
            ctrace!("Carousel::pause");
        }
        self.is_paused = true;
    }

    /// Clears the paused flag. Does not advance; the auto-play timer restarts a full interval.
    pub fn resume(&mut self) {
        if self.is_paused {
            ctrace!("Carousel::resume");
        }
        self.is_paused = false;
    }

    fn renormalize(&mut self) {
        self.update_index(to_raw(self.active_index));
    }

    fn update_index(&mut self, target: i64) -> bool {
        let next = normalize(
            target,
            self.options.item_count,
            self.visible_slides(),
            self.options.looping,
        );
        if next == self.active_index {
            return false;
        }
        debug_assert!(
            next < self.options.item_count.max(1),
            "normalize produced an out-of-range index (i={next}, count={})",
            self.options.item_count
        );
        debug_assert!(
            self.options.looping || next <= self.max_index(),
            "clamped index past max_index (i={next}, max={})",
            self.max_index()
        );
        ctrace!(from = self.active_index, to = next, "active index changed");
        self.active_index = next;
        self.notify();
        true
    }

    fn notify(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self.active_index);
        }
    }
}
