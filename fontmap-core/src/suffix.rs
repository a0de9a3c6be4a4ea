//! Style suffix tables
//!
//! PostScript names for the non-regular faces of a family are formed by
//! appending a suffix to the family's output spelling. Most families follow
//! the `-Italic` / `-Bold` / `-BoldItalic` convention; families that deviate
//! from it (oblique faces, a `-Regular` suffix, missing faces) are listed in
//! an override table.

use crate::style::FontStyle;
use std::collections::HashMap;

/// Suffixes for the four styles of a family, in [`FontStyle::ALL`] order
///
/// A `None` slot marks a style the family does not provide. An empty string
/// is a real suffix: the bare family name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleSuffixList {
    slots: [Option<String>; 4],
}

impl StyleSuffixList {
    /// Create a list with every style available
    pub fn new(
        regular: impl Into<String>,
        slanted: impl Into<String>,
        bold: impl Into<String>,
        slanted_bold: impl Into<String>,
    ) -> Self {
        Self {
            slots: [
                Some(regular.into()),
                Some(slanted.into()),
                Some(bold.into()),
                Some(slanted_bold.into()),
            ],
        }
    }

    /// Create a list from explicit slots, `None` meaning unavailable
    pub fn from_slots(slots: [Option<&str>; 4]) -> Self {
        Self {
            slots: slots.map(|slot| slot.map(str::to_string)),
        }
    }

    /// The `"", "-Italic", "-Bold", "-BoldItalic"` convention
    pub fn conventional() -> Self {
        Self::new("", "-Italic", "-Bold", "-BoldItalic")
    }

    /// Suffix for a style, `None` when the style is unavailable
    pub fn suffix(&self, style: FontStyle) -> Option<&str> {
        self.slots[style.index()].as_deref()
    }

    /// Whether the family provides this style
    pub fn is_available(&self, style: FontStyle) -> bool {
        self.slots[style.index()].is_some()
    }

    /// Iterate `(style, suffix)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (FontStyle, Option<&str>)> + '_ {
        FontStyle::ALL
            .iter()
            .map(move |&style| (style, self.suffix(style)))
    }
}

impl Default for StyleSuffixList {
    fn default() -> Self {
        Self::conventional()
    }
}

/// Override table keyed by output spelling, falling back to
/// [`StyleSuffixList::conventional`] for unlisted families
#[derive(Debug, Clone)]
pub struct SuffixTable {
    overrides: HashMap<String, StyleSuffixList>,
    fallback: StyleSuffixList,
}

impl SuffixTable {
    /// Create a table with no overrides
    pub fn new() -> Self {
        SuffixTable {
            overrides: HashMap::new(),
            fallback: StyleSuffixList::conventional(),
        }
    }

    /// The table shipped with the crate
    pub fn builtin() -> &'static SuffixTable {
        &BUILTIN_SUFFIXES
    }

    /// Add or replace an override entry
    pub fn with_override(mut self, family: impl Into<String>, suffixes: StyleSuffixList) -> Self {
        self.overrides.insert(family.into(), suffixes);
        self
    }

    fn with_slots(self, family: &str, slots: [Option<&str>; 4]) -> Self {
        self.with_override(family, StyleSuffixList::from_slots(slots))
    }

    /// Suffixes for a family, exact match on the output spelling
    pub fn suffixes_for(&self, family: &str) -> &StyleSuffixList {
        self.overrides.get(family).unwrap_or(&self.fallback)
    }

    /// Whether the family has its own entry
    pub fn has_override(&self, family: &str) -> bool {
        self.overrides.contains_key(family)
    }

    /// Families with an override entry, sorted
    pub fn families(&self) -> Vec<&str> {
        let mut families: Vec<&str> = self.overrides.keys().map(String::as_str).collect();
        families.sort_unstable();
        families
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl Default for SuffixTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

lazy_static::lazy_static! {
    static ref BUILTIN_SUFFIXES: SuffixTable = {
        SuffixTable::new()
            // Oblique faces
            .with_slots("Helvetica", [Some(""), Some("-Oblique"), Some("-Bold"), Some("-BoldOblique")])
            .with_slots("Courier", [Some(""), Some("-Oblique"), Some("-Bold"), Some("-BoldOblique")])
            .with_slots("AvantGarde", [Some("-Book"), Some("-BookOblique"), Some("-Demi"), Some("-DemiOblique")])
            .with_slots("DejaVuSans", [Some(""), Some("-Oblique"), Some("-Bold"), Some("-BoldOblique")])
            .with_slots("DejaVuSansMono", [Some(""), Some("-Oblique"), Some("-Bold"), Some("-BoldOblique")])
            .with_slots("NimbusSans", [Some("-Regular"), Some("-Italic"), Some("-Bold"), Some("-BoldItalic")])
            .with_slots("NimbusMonoPS", [Some("-Regular"), Some("-Italic"), Some("-Bold"), Some("-BoldItalic")])
            // Single-face families
            .with_slots("NotoMono", [Some("-Regular"), None, None, None])
            .with_slots("Symbol", [Some(""), None, None, None])
            .with_slots("ZapfDingbats", [Some(""), None, None, None])
            .with_slots("ZapfChancery", [Some("-MediumItalic"), None, None, None])
    };
}

/// Suffixes for a family in the built-in table
pub fn suffixes_for(family: &str) -> &'static StyleSuffixList {
    BUILTIN_SUFFIXES.suffixes_for(family)
}
