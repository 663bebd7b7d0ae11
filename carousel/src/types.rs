use alloc::vec::Vec;

/// Inclusive range of slide indexes currently presented.
///
/// For an empty carousel this is `(0, 0)`; check the item count before treating index `0` as
/// visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize, // inclusive
}

impl VisibleRange {
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }

    /// Number of slides covered by the range.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start).saturating_add(1)
    }

    pub fn as_tuple(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

/// One pagination control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    pub index: usize,
    /// Active index to jump to when this page is selected (`index * visible_slides`).
    pub target_index: usize,
    /// Whether `[target_index, target_index + visible_slides)` contains the active index.
    pub is_current: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageLayout {
    pub pages: Vec<Page>,
}

impl PageLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// The highlighted page, if any.
    pub fn current_page(&self) -> Option<&Page> {
        self.pages.iter().find(|p| p.is_current)
    }

    /// Navigation affordances are pointless with a single page.
    pub fn has_multiple_pages(&self) -> bool {
        self.pages.len() > 1
    }
}
