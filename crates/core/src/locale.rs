//! Locales, text direction and direction-aware layout helpers.

use serde::{Deserialize, Serialize};

/// Languages the storefront ships translations for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    #[default]
    Ar,
}

impl Locale {
    pub const ALL: [Self; 2] = [Self::En, Self::Ar];

    /// The locale used when a key or a requested locale is missing.
    pub const FALLBACK: Self = Self::Ar;

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Parse a language tag. Region subtags are ignored (`en-US` -> `En`).
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    #[must_use]
    pub fn direction(self) -> Direction {
        Direction::of(self.code())
    }

    /// The language toggle target.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    /// Name of the language in itself, for the toggle button.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ar => "العربية",
        }
    }

    /// Best supported locale from an `Accept-Language` header value.
    ///
    /// Entries are taken in descending `q` order; ties keep header order.
    #[must_use]
    pub fn from_accept_language(header: &str) -> Option<Self> {
        let mut ranked: Vec<(f32, Self)> = header
            .split(',')
            .filter_map(|entry| {
                let mut parts = entry.split(';');
                let locale = Self::parse(parts.next()?)?;
                let quality = parts
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|q| q.parse::<f32>().ok())
                    .unwrap_or(1.0);
                (quality > 0.0).then_some((quality, locale))
            })
            .collect();
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
        ranked.first().map(|(_, locale)| *locale)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Languages written right to left.
const RTL_LANGUAGES: &[&str] = &["ar", "he", "fa", "ur"];

/// Whether a language code is written right to left.
#[must_use]
pub fn is_rtl(code: &str) -> bool {
    let primary = code.split(['-', '_']).next().unwrap_or(code);
    RTL_LANGUAGES
        .iter()
        .any(|rtl| rtl.eq_ignore_ascii_case(primary))
}

/// Text direction for the `<html dir>` attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    #[must_use]
    pub fn of(code: &str) -> Self {
        if is_rtl(code) { Self::Rtl } else { Self::Ltr }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// Which edge a drawer slides in from.
///
/// `Start` and `End` are logical and follow the text direction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawerSide {
    Start,
    #[default]
    End,
    Left,
    Right,
}

/// A physical screen edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalSide {
    Left,
    Right,
}

impl DrawerSide {
    /// Resolve against a direction. Start is left in LTR and right in RTL.
    #[must_use]
    pub const fn physical(self, direction: Direction) -> PhysicalSide {
        match (self, direction) {
            (Self::Left, _) | (Self::Start, Direction::Ltr) | (Self::End, Direction::Rtl) => {
                PhysicalSide::Left
            }
            (Self::Right, _) | (Self::Start, Direction::Rtl) | (Self::End, Direction::Ltr) => {
                PhysicalSide::Right
            }
        }
    }
}

impl PhysicalSide {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Horizontal translation that moves the drawer fully off screen.
    #[must_use]
    pub const fn offscreen_translate(self) -> &'static str {
        match self {
            Self::Left => "-100%",
            Self::Right => "100%",
        }
    }
}

/// Translation keys for the pager's previous and next buttons.
///
/// In RTL the labels are swapped so the arrow text matches the visual edge.
#[must_use]
pub const fn pagination_labels(direction: Direction) -> (&'static str, &'static str) {
    match direction {
        Direction::Ltr => ("common.previous", "common.next"),
        Direction::Rtl => ("common.next", "common.previous"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rtl_languages() {
        for code in ["ar", "he", "fa", "ur", "AR", "ar-SA"] {
            assert!(is_rtl(code), "{code}");
        }
        assert!(!is_rtl("en"));
        assert!(!is_rtl("fr"));
        assert_eq!(Locale::Ar.direction(), Direction::Rtl);
        assert_eq!(Locale::En.direction().as_str(), "ltr");
    }

    #[test]
    fn test_parse_and_toggle() {
        assert_eq!(Locale::parse("en-US"), Some(Locale::En));
        assert_eq!(Locale::parse("ar"), Some(Locale::Ar));
        assert_eq!(Locale::parse("de"), None);
        assert_eq!(Locale::default(), Locale::Ar);
        assert_eq!(Locale::En.other(), Locale::Ar);
        assert_eq!(Locale::Ar.other().other(), Locale::Ar);
    }

    #[test]
    fn test_accept_language_ranking() {
        assert_eq!(
            Locale::from_accept_language("fr-FR, en;q=0.8, ar;q=0.9"),
            Some(Locale::Ar)
        );
        assert_eq!(Locale::from_accept_language("en-GB,en;q=0.9"), Some(Locale::En));
        assert_eq!(Locale::from_accept_language("de, fr"), None);
        assert_eq!(Locale::from_accept_language("ar;q=0"), None);
    }

    #[test]
    fn test_drawer_side_mirrors_with_direction() {
        assert_eq!(DrawerSide::Start.physical(Direction::Ltr), PhysicalSide::Left);
        assert_eq!(DrawerSide::Start.physical(Direction::Rtl), PhysicalSide::Right);
        assert_eq!(DrawerSide::End.physical(Direction::Ltr), PhysicalSide::Right);
        assert_eq!(DrawerSide::End.physical(Direction::Rtl), PhysicalSide::Left);
        assert_eq!(DrawerSide::Left.physical(Direction::Rtl), PhysicalSide::Left);
        assert_eq!(PhysicalSide::Right.offscreen_translate(), "100%");
        assert_eq!(PhysicalSide::Left.offscreen_translate(), "-100%");
    }

    #[test]
    fn test_pagination_labels_swap_in_rtl() {
        assert_eq!(
            pagination_labels(Direction::Ltr),
            ("common.previous", "common.next")
        );
        assert_eq!(
            pagination_labels(Direction::Rtl),
            ("common.next", "common.previous")
        );
    }
}
