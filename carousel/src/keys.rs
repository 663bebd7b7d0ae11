use core::fmt;
use core::str::FromStr;

/// A discrete navigation request, independent of where it came from (keyboard, pointer, timer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavigationIntent {
    Prev,
    Next,
    First,
    Last,
    /// Jump to a raw index; normalized by the carousel before it is applied.
    GoTo(i64),
}

/// The keyboard keys a carousel reacts to.
///
/// Identifiers follow the DOM `KeyboardEvent.key` names, which most UI toolkits can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavigationKey {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
}

impl NavigationKey {
    pub const ALL: [NavigationKey; 4] = [
        NavigationKey::ArrowLeft,
        NavigationKey::ArrowRight,
        NavigationKey::Home,
        NavigationKey::End,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ArrowLeft => "ArrowLeft",
            Self::ArrowRight => "ArrowRight",
            Self::Home => "Home",
            Self::End => "End",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            _ => None,
        }
    }

    pub fn intent(self) -> NavigationIntent {
        match self {
            Self::ArrowLeft => NavigationIntent::Prev,
            Self::ArrowRight => NavigationIntent::Next,
            Self::Home => NavigationIntent::First,
            Self::End => NavigationIntent::Last,
        }
    }
}

impl fmt::Display for NavigationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a key identifier is not one of the navigation keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownKey;

impl fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not a carousel navigation key")
    }
}

impl core::error::Error for UnknownKey {}

impl FromStr for NavigationKey {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or(UnknownKey)
    }
}

/// Translates a key identifier into a navigation intent.
///
/// Keys outside the fixed table map to `None` so the host can let them through untouched.
pub fn map_key(key: &str) -> Option<NavigationIntent> {
    NavigationKey::from_key(key).map(NavigationKey::intent)
}

pub fn is_navigation_key(key: &str) -> bool {
    NavigationKey::from_key(key).is_some()
}
