use alloc::string::String;

use carousel::Carousel;

/// Host-supplied slide content plus an optional accessible label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide<T> {
    pub content: T,
    pub label: Option<String>,
}

impl<T> Slide<T> {
    pub fn new(content: T) -> Self {
        Self {
            content,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A slide decorated with its position metadata for the current carousel state.
#[derive(Debug, PartialEq, Eq)]
pub struct SlideView<'a, T> {
    pub index: usize,
    /// 1-based position within the set (`aria-posinset` style).
    pub position: usize,
    pub set_size: usize,
    /// Whether the slide lies in the visible range.
    pub is_active: bool,
    pub label: Option<&'a str>,
    pub content: &'a T,
}

/// Decorates `slides` with position metadata from `carousel`.
///
/// `slides.len()` should match `carousel.item_count()`; slides beyond the carousel's count are
/// reported as inactive.
pub fn decorate_slides<'a, T>(
    carousel: &Carousel,
    slides: &'a [Slide<T>],
) -> impl Iterator<Item = SlideView<'a, T>> + use<'a, T> {
    if slides.len() != carousel.item_count() {
        awarn!(
            slides = slides.len(),
            item_count = carousel.item_count(),
            "decorate_slides: slide count does not match the carousel"
        );
    }
    let range = carousel.visible_range();
    let item_count = carousel.item_count();
    let set_size = slides.len();
    slides.iter().enumerate().map(move |(index, slide)| SlideView {
        index,
        position: index + 1,
        set_size,
        is_active: index < item_count && range.contains(index),
        label: slide.label.as_deref(),
        content: &slide.content,
    })
}
