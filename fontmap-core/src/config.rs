//! Resolution settings shared by the map builder and the default cache

use crate::normalize::DEFAULT_REFERENCE_SIZE;
use crate::suffix::SuffixTable;
use std::borrow::Cow;

/// Families and pitches of the default font map
pub const DEFAULT_FAMILIES: [&str; 3] = ["Times", "Courier", "Helvetica"];

/// Pitches requested for every default family
pub const DEFAULT_PITCHES: [u32; 6] = [8, 9, 10, 12, 14, 15];

/// Settings for name resolution and map building
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Size passed to the normalizer when resolving spellings
    pub reference_size: u32,
    /// Suffix table used for PostScript names
    pub suffixes: Cow<'static, SuffixTable>,
}

impl ResolverConfig {
    pub fn new() -> Self {
        ResolverConfig {
            reference_size: DEFAULT_REFERENCE_SIZE,
            suffixes: Cow::Borrowed(SuffixTable::builtin()),
        }
    }

    pub fn with_reference_size(mut self, size: u32) -> Self {
        self.reference_size = size;
        self
    }

    pub fn with_suffix_table(mut self, table: SuffixTable) -> Self {
        self.suffixes = Cow::Owned(table);
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}
