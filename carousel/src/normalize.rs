/// Clamps a host-provided `visible_slides` to the supported minimum of 1.
#[inline]
pub fn clamp_visible_slides(visible_slides: usize) -> usize {
    visible_slides.max(1)
}

/// The largest active index reachable without wrapping.
///
/// With `visible_slides >= item_count` this is `0`: the whole collection fits in one page.
#[inline]
pub fn max_index(item_count: usize, visible_slides: usize) -> usize {
    item_count.saturating_sub(clamp_visible_slides(visible_slides))
}

/// Maps an arbitrary (possibly negative or out-of-range) target index to a legal active index.
///
/// - `item_count == 0` always yields `0`.
/// - With `looping`, the index wraps through the full item range using Euclidean modulo, so
///   `-1` maps to `item_count - 1` regardless of `visible_slides`.
/// - Without `looping`, the index is clamped to `[0, max_index(item_count, visible_slides)]`.
///
/// This is a total function: no input is rejected.
pub fn normalize(raw_index: i64, item_count: usize, visible_slides: usize, looping: bool) -> usize {
    if item_count == 0 {
        return 0;
    }

    if looping {
        // Collections larger than i64::MAX cannot exist in memory; saturate anyway.
        let count = i64::try_from(item_count).unwrap_or(i64::MAX);
        return raw_index.rem_euclid(count) as usize;
    }

    if raw_index <= 0 {
        return 0;
    }
    let max = max_index(item_count, visible_slides);
    usize::try_from(raw_index).map_or(max, |i| i.min(max))
}
