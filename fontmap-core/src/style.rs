//! Font styles and the style tags used in font map keys

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Style tags carried by a font map key
    ///
    /// Regular fonts carry no tags; slanted-bold carries both.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct StyleTags: u8 {
        /// Slanted (italic or oblique) face
        const ITALIC = 1 << 0;
        /// Bold face
        const BOLD = 1 << 1;
    }
}

impl StyleTags {
    /// Parse a single style word as used in textual font queries
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "italic" | "oblique" | "slant" => Some(StyleTags::ITALIC),
            "bold" => Some(StyleTags::BOLD),
            "roman" | "normal" | "regular" => Some(StyleTags::empty()),
            _ => None,
        }
    }
}

impl fmt::Display for StyleTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words = Vec::with_capacity(2);
        if self.contains(StyleTags::BOLD) {
            words.push("bold");
        }
        if self.contains(StyleTags::ITALIC) {
            words.push("italic");
        }
        if words.is_empty() {
            f.write_str("regular")
        } else {
            f.write_str(&words.join(" "))
        }
    }
}

/// The four style variants of a font family, in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontStyle {
    Regular,
    Slanted,
    Bold,
    SlantedBold,
}

impl FontStyle {
    /// All styles in suffix-table order
    pub const ALL: [FontStyle; 4] = [
        FontStyle::Regular,
        FontStyle::Slanted,
        FontStyle::Bold,
        FontStyle::SlantedBold,
    ];

    /// Position of this style in suffix lists and font name lists
    pub fn index(self) -> usize {
        match self {
            FontStyle::Regular => 0,
            FontStyle::Slanted => 1,
            FontStyle::Bold => 2,
            FontStyle::SlantedBold => 3,
        }
    }

    /// Tags used for this style in font map keys
    pub fn tags(self) -> StyleTags {
        match self {
            FontStyle::Regular => StyleTags::empty(),
            FontStyle::Slanted => StyleTags::ITALIC,
            FontStyle::Bold => StyleTags::BOLD,
            FontStyle::SlantedBold => StyleTags::BOLD | StyleTags::ITALIC,
        }
    }

    /// Style selected by a tag set
    pub fn from_tags(tags: StyleTags) -> Self {
        match (tags.contains(StyleTags::ITALIC), tags.contains(StyleTags::BOLD)) {
            (false, false) => FontStyle::Regular,
            (true, false) => FontStyle::Slanted,
            (false, true) => FontStyle::Bold,
            (true, true) => FontStyle::SlantedBold,
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FontStyle::Regular => "regular",
            FontStyle::Slanted => "slanted",
            FontStyle::Bold => "bold",
            FontStyle::SlantedBold => "slanted-bold",
        };
        f.write_str(name)
    }
}
