use alloc::sync::Arc;

/// Default delay between automatic slide changes.
pub const DEFAULT_AUTO_PLAY_INTERVAL_MS: u64 = 6000;

/// A callback fired with the new active index whenever it changes.
pub type OnChangeCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: the callback is stored in an `Arc`, so adapters can tweak a field and call
/// `Carousel::set_options` on every render without reallocating closures.
pub struct CarouselOptions {
    pub item_count: usize,
    /// How many slides are visible at once. Values below 1 are treated as 1.
    pub visible_slides: usize,
    /// Wrap around when navigating past either end instead of clamping.
    pub looping: bool,
    /// Starting slide index. Normalized like any other navigation target.
    pub initial_index: i64,

    /// Enables timed auto-advancement. The timer itself lives in the adapter layer; the carousel
    /// only reports whether auto-play should currently be running.
    pub auto_play: bool,
    /// Interval between automatic advances. Values below 1 are treated as 1.
    pub auto_play_interval_ms: u64,

    /// Optional callback fired once per effective change of the active index.
    pub on_change: Option<OnChangeCallback>,
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            item_count: self.item_count,
            visible_slides: self.visible_slides,
            looping: self.looping,
            initial_index: self.initial_index,
            auto_play: self.auto_play,
            auto_play_interval_ms: self.auto_play_interval_ms,
            on_change: self.on_change.clone(),
        }
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::new(0)
    }
}

impl CarouselOptions {
    /// Creates options for `item_count` slides: one visible slide, no looping, no auto-play.
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            visible_slides: 1,
            looping: false,
            initial_index: 0,
            auto_play: false,
            auto_play_interval_ms: DEFAULT_AUTO_PLAY_INTERVAL_MS,
            on_change: None,
        }
    }

    pub fn with_visible_slides(mut self, visible_slides: usize) -> Self {
        self.visible_slides = visible_slides;
        self
    }

    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_initial_index(mut self, initial_index: i64) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_auto_play(mut self, auto_play: bool) -> Self {
        self.auto_play = auto_play;
        self
    }

    pub fn with_auto_play_interval_ms(mut self, interval_ms: u64) -> Self {
        self.auto_play_interval_ms = interval_ms;
        self
    }

    pub fn with_on_change(mut self, on_change: Option<impl Fn(usize) + Send + Sync + 'static>) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    /// `visible_slides` with the minimum of 1 applied.
    pub fn effective_visible_slides(&self) -> usize {
        self.visible_slides.max(1)
    }

    /// `auto_play_interval_ms` with the minimum of 1 applied.
    pub fn effective_auto_play_interval_ms(&self) -> u64 {
        self.auto_play_interval_ms.max(1)
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("item_count", &self.item_count)
            .field("visible_slides", &self.visible_slides)
            .field("looping", &self.looping)
            .field("initial_index", &self.initial_index)
            .field("auto_play", &self.auto_play)
            .field("auto_play_interval_ms", &self.auto_play_interval_ms)
            .finish_non_exhaustive()
    }
}
