//! PostScript name resolution for the four styles of a family

use crate::style::FontStyle;
use crate::suffix::SuffixTable;
use std::fmt;

/// Resolved PostScript names, aligned to [`FontStyle::ALL`]
///
/// `None` marks a style the family does not provide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontNameList {
    names: [Option<String>; 4],
}

impl FontNameList {
    /// Name for a style, `None` when unavailable
    pub fn get(&self, style: FontStyle) -> Option<&str> {
        self.names[style.index()].as_deref()
    }

    /// Iterate `(style, name)` pairs in style order
    pub fn iter(&self) -> impl Iterator<Item = (FontStyle, Option<&str>)> + '_ {
        FontStyle::ALL.iter().map(move |&style| (style, self.get(style)))
    }

    /// Iterate only the styles the family provides
    pub fn available(&self) -> impl Iterator<Item = (FontStyle, &str)> + '_ {
        self.iter()
            .filter_map(|(style, name)| name.map(|name| (style, name)))
    }

    /// Number of available styles
    pub fn available_count(&self) -> usize {
        self.names.iter().filter(|name| name.is_some()).count()
    }

    pub fn as_slots(&self) -> &[Option<String>; 4] {
        &self.names
    }
}

impl fmt::Display for FontNameList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<&str> = self.iter().map(|(_, name)| name.unwrap_or("-")).collect();
        write!(f, "[{}]", rendered.join(", "))
    }
}

/// Resolves family names against a suffix table
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    table: &'a SuffixTable,
}

impl<'a> NameResolver<'a> {
    pub fn new(table: &'a SuffixTable) -> Self {
        NameResolver { table }
    }

    /// Resolve the four names for a family
    ///
    /// `family` is used both as the table key and as the name prefix, so it
    /// must be the output spelling.
    pub fn resolve(&self, family: &str) -> FontNameList {
        let suffixes = self.table.suffixes_for(family);
        let names = FontStyle::ALL.map(|style| {
            suffixes
                .suffix(style)
                .map(|suffix| format!("{family}{suffix}"))
        });
        FontNameList { names }
    }
}

impl Default for NameResolver<'static> {
    fn default() -> Self {
        NameResolver::new(SuffixTable::builtin())
    }
}

/// Resolve the four names for a family using the built-in suffix table
pub fn resolve_names(family: &str) -> FontNameList {
    NameResolver::default().resolve(family)
}
