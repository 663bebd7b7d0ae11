use alloc::vec::Vec;

use carousel::{Carousel, CarouselOptions, NavigationIntent, map_key};

use crate::{
    ArrowControls, AutoPlay, DisplayOptions, PaginationDot, Slide, SlideView, arrow_controls,
    decorate_slides, pagination_dots,
};

/// The values the auto-play timer depends on. Any change re-arms a fresh interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct TimerInputs {
    auto_play: bool,
    interval_ms: u64,
    item_count: usize,
    visible_slides: usize,
    is_paused: bool,
}

impl TimerInputs {
    fn of(c: &Carousel) -> Self {
        Self {
            auto_play: c.options().auto_play,
            interval_ms: c.options().effective_auto_play_interval_ms(),
            item_count: c.item_count(),
            visible_slides: c.visible_slides(),
            is_paused: c.is_paused(),
        }
    }
}

/// A framework-neutral controller that wraps a [`carousel::Carousel`] and owns its auto-play
/// timer.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_key` / `on_pointer_*` / `on_focus` / `on_blur` when UI events occur
/// - `tick(now_ms)` each frame/timer tick (for auto-play)
///
/// All intents, whether from the keyboard, pointer, or the timer, go through the same
/// `Carousel` transitions, one at a time.
#[derive(Clone, Debug)]
pub struct Controller {
    c: Carousel,
    display: DisplayOptions,
    timer: Option<AutoPlay>,
    armed_for: TimerInputs,
}

impl Controller {
    /// Creates the carousel and, if auto-play applies, arms the first interval at `now_ms`.
    pub fn new(options: CarouselOptions, now_ms: u64) -> Self {
        Self::from_carousel(Carousel::new(options), now_ms)
    }

    pub fn from_carousel(c: Carousel, now_ms: u64) -> Self {
        let armed_for = TimerInputs::of(&c);
        let mut this = Self {
            c,
            display: DisplayOptions::default(),
            timer: None,
            armed_for,
        };
        this.rearm(now_ms);
        this
    }

    pub fn with_display_options(mut self, display: DisplayOptions) -> Self {
        self.display = display;
        self
    }

    pub fn carousel(&self) -> &Carousel {
        &self.c
    }

    /// Direct access to the carousel.
    ///
    /// Changes to auto-play inputs made here are picked up by the next `tick`, which re-arms a
    /// fresh interval instead of advancing.
    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.c
    }

    /// Tears the controller down, cancelling any pending auto-play tick.
    pub fn into_carousel(mut self) -> Carousel {
        self.cancel_auto_play();
        self.c
    }

    pub fn display_options(&self) -> DisplayOptions {
        self.display
    }

    pub fn set_display_options(&mut self, display: DisplayOptions) {
        self.display = display;
    }

    pub fn is_auto_playing(&self) -> bool {
        self.timer.is_some()
    }

    /// Absolute time of the next automatic advance, if a timer is armed.
    pub fn next_auto_advance_ms(&self) -> Option<u64> {
        self.timer.map(|t| t.due_ms)
    }

    /// Cancels the pending auto-play tick. A no-op when nothing is armed.
    ///
    /// The timer stays off until one of its inputs changes (e.g. `resume` after a `pause`).
    pub fn cancel_auto_play(&mut self) {
        if self.timer.take().is_some() {
            atrace!("auto-play cancelled");
        }
    }

    /// Advances the controller.
    ///
    /// Returns the new active index when the auto-play timer fired and moved the carousel.
    pub fn tick(&mut self, now_ms: u64) -> Option<usize> {
        if TimerInputs::of(&self.c) != self.armed_for {
            self.rearm(now_ms);
            return None;
        }

        let timer = self.timer.as_mut()?;
        if !timer.poll(now_ms) {
            return None;
        }
        atrace!(now_ms, "auto-play tick");
        self.c.next().then(|| self.c.active_index())
    }

    pub fn next(&mut self) -> bool {
        self.c.next()
    }

    pub fn prev(&mut self) -> bool {
        self.c.prev()
    }

    pub fn go_to(&mut self, index: i64) -> bool {
        self.c.go_to(index)
    }

    /// Activates a pagination control.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.c.go_to_page(page)
    }

    pub fn apply_intent(&mut self, intent: NavigationIntent) -> bool {
        self.c.apply_intent(intent)
    }

    /// Handles a key identifier (e.g. `"ArrowRight"`).
    ///
    /// Returns `true` when the key is a navigation key, in which case the adapter should suppress
    /// the toolkit's default handling. The return value does not say whether the index moved.
    pub fn on_key(&mut self, key: &str) -> bool {
        let Some(intent) = map_key(key) else {
            return false;
        };
        atrace!(key, "navigation key");
        self.c.apply_intent(intent);
        true
    }

    /// Pauses auto-play and cancels the pending tick outright.
    pub fn pause(&mut self) {
        self.c.pause();
        self.sync_cancel_only();
    }

    /// Clears the paused flag. When the carousel was paused, a fresh full interval starts at
    /// `now_ms`; the time remaining before the pause is not carried over.
    pub fn resume(&mut self, now_ms: u64) {
        let was_paused = self.c.is_paused();
        self.c.resume();
        if was_paused {
            // The pause may have bypassed the controller (via `carousel_mut`).
            self.rearm(now_ms);
        } else {
            self.sync(now_ms);
        }
    }

    pub fn on_pointer_enter(&mut self) {
        self.pause();
    }

    pub fn on_pointer_leave(&mut self, now_ms: u64) {
        self.resume(now_ms);
    }

    pub fn on_focus(&mut self) {
        self.pause();
    }

    pub fn on_blur(&mut self, now_ms: u64) {
        self.resume(now_ms);
    }

    pub fn set_options(&mut self, options: CarouselOptions, now_ms: u64) {
        self.c.set_options(options);
        self.sync(now_ms);
    }

    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions), now_ms: u64) {
        self.c.update_options(f);
        self.sync(now_ms);
    }

    pub fn set_item_count(&mut self, item_count: usize, now_ms: u64) {
        self.c.set_item_count(item_count);
        self.sync(now_ms);
    }

    pub fn set_visible_slides(&mut self, visible_slides: usize, now_ms: u64) {
        self.c.set_visible_slides(visible_slides);
        self.sync(now_ms);
    }

    pub fn set_loop(&mut self, looping: bool) {
        self.c.set_loop(looping);
    }

    pub fn set_auto_play(&mut self, auto_play: bool, now_ms: u64) {
        self.c.set_auto_play(auto_play);
        self.sync(now_ms);
    }

    pub fn set_auto_play_interval_ms(&mut self, interval_ms: u64, now_ms: u64) {
        self.c.set_auto_play_interval_ms(interval_ms);
        self.sync(now_ms);
    }

    /// Updates the item count from the host's current slide list.
    pub fn sync_slides<T>(&mut self, slides: &[Slide<T>], now_ms: u64) {
        self.set_item_count(slides.len(), now_ms);
    }

    pub fn arrow_controls(&self) -> Option<ArrowControls> {
        arrow_controls(&self.c, self.display)
    }

    pub fn pagination_dots(&self) -> Vec<PaginationDot> {
        pagination_dots(&self.c, self.display)
    }

    pub fn slide_views<'a, T>(
        &self,
        slides: &'a [Slide<T>],
    ) -> impl Iterator<Item = SlideView<'a, T>> + use<'a, T> {
        decorate_slides(&self.c, slides)
    }

    fn sync(&mut self, now_ms: u64) {
        if TimerInputs::of(&self.c) != self.armed_for {
            self.rearm(now_ms);
        }
    }

    fn sync_cancel_only(&mut self) {
        let inputs = TimerInputs::of(&self.c);
        if inputs != self.armed_for {
            self.cancel_auto_play();
            self.armed_for = inputs;
        }
    }

    fn rearm(&mut self, now_ms: u64) {
        self.cancel_auto_play();
        self.armed_for = TimerInputs::of(&self.c);
        if self.c.auto_play_active() {
            let timer = AutoPlay::new(now_ms, self.armed_for.interval_ms);
            adebug!(now_ms, due_ms = timer.due_ms, "auto-play armed");
            self.timer = Some(timer);
        }
    }
}
