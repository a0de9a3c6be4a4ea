//! # ps-fontmap
//!
//! PostScript font name resolution and font maps for renderers that emit
//! PostScript.
//!
//! A renderer asks for fonts as `(family, pitch, style)`; PostScript wants
//! concrete font names such as `Times-BoldItalic` or `Helvetica-Oblique`.
//! This crate resolves the four style variants of a family into PostScript
//! names and builds maps from requests to those names.
//!
//! ## Quick Start
//!
//! ```rust
//! use ps_fontmap::{font_map_for, font_name_list_for, is_mapped_font, FontRequest, FontStyle, Result};
//!
//! # fn main() -> Result<()> {
//! let names = font_name_list_for("Times");
//! assert_eq!(names.get(FontStyle::SlantedBold), Some("Times-BoldItalic"));
//!
//! let map = font_map_for(&[FontRequest::new("Times", [10, 12])])?;
//! assert_eq!(map.len(), 8);
//! assert!(is_mapped_font(&map, &"Times 12 bold italic".parse()?));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`suffix`] - Style suffix tables and the built-in overrides
//! - [`resolver`] - PostScript names for the four styles of a family
//! - [`normalize`] - Display and output spellings of a family
//! - [`map`] - Font map construction
//! - [`cache`] - The lazily built default map
//! - [`query`] - Membership queries and textual font keys

pub mod cache;
pub mod config;
pub mod error;
pub mod map;
pub mod normalize;
pub mod query;
pub mod resolver;
pub mod style;
pub mod suffix;

pub use cache::{default_map, default_requests, DefaultMapCache};
pub use config::{ResolverConfig, DEFAULT_FAMILIES, DEFAULT_PITCHES};
pub use error::{FontMapError, Result};
pub use map::{FontMap, FontMapKey, FontMapValue, FontRequest, MapBuilder};
pub use normalize::{
    display_spelling, output_spelling, CanonicalFamily, FontNormalizer, SpellingReconciler,
    Spellings, StandardNormalizer,
};
pub use query::is_mapped;
pub use resolver::{resolve_names, FontNameList, NameResolver};
pub use style::{FontStyle, StyleTags};
pub use suffix::{suffixes_for, StyleSuffixList, SuffixTable};

use std::borrow::Cow;

/// Names for the four styles of `family`, resolved as spelled
pub fn font_name_list_for(family: &str) -> FontNameList {
    resolve_names(family)
}

/// Font map for `requests`, or the cached default map when there are none
pub fn font_map_for(requests: &[FontRequest]) -> Result<Cow<'static, FontMap>> {
    if requests.is_empty() {
        return default_map().map(Cow::Borrowed);
    }
    MapBuilder::new(StandardNormalizer)
        .build_map(requests)
        .map(Cow::Owned)
}

/// Font map built with a host normalizer and settings
///
/// With no requests this builds the default request list. The result is not
/// cached.
pub fn font_map_with<N: FontNormalizer>(
    normalizer: N,
    config: ResolverConfig,
    requests: &[FontRequest],
) -> Result<FontMap> {
    let builder = MapBuilder::with_config(normalizer, config);
    if requests.is_empty() {
        return builder.build_map(&default_requests());
    }
    builder.build_map(requests)
}

/// Whether `key` has an entry in `map`
pub fn is_mapped_font(map: &FontMap, key: &FontMapKey) -> bool {
    is_mapped(map, key)
}
