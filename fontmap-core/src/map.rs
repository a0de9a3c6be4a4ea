//! Font maps from `(family, pitch, style)` requests to PostScript names
//!
//! A renderer producing PostScript asks for fonts by the family spelling it
//! knows, a pitch and a set of style tags. The map answers with the
//! PostScript name to substitute. When a family's display and output
//! spellings differ, every entry is inserted under both spellings so lookups
//! succeed whichever one the caller uses.

use crate::config::ResolverConfig;
use crate::error::{FontMapError, Result};
use crate::normalize::{FontNormalizer, SpellingReconciler};
use crate::resolver::NameResolver;
use crate::style::StyleTags;
use crate::suffix::SuffixTable;
use std::borrow::Cow;
use std::collections::btree_map::{self, BTreeMap};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// One family and the pitches it is needed at
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontRequest {
    pub family: String,
    pub pitches: BTreeSet<u32>,
}

impl FontRequest {
    pub fn new(family: impl Into<String>, pitches: impl IntoIterator<Item = u32>) -> Self {
        FontRequest {
            family: family.into(),
            pitches: pitches.into_iter().collect(),
        }
    }

    /// Reject requests the builder cannot expand
    pub fn validate(&self) -> Result<()> {
        if self.family.trim().is_empty() {
            return Err(FontMapError::InvalidRequest(
                "family name is empty".to_string(),
            ));
        }
        if self.pitches.is_empty() {
            return Err(FontMapError::InvalidRequest(format!(
                "no pitches requested for {}",
                self.family
            )));
        }
        if self.pitches.contains(&0) {
            return Err(FontMapError::InvalidRequest(format!(
                "pitch must be positive for {}",
                self.family
            )));
        }
        Ok(())
    }
}

/// Parses `FAMILY:PITCH[,PITCH...]`, e.g. `"DejaVu Sans:10,12"`
impl FromStr for FontRequest {
    type Err = FontMapError;

    fn from_str(s: &str) -> Result<Self> {
        let (family, pitches) = s.rsplit_once(':').ok_or_else(|| {
            FontMapError::InvalidRequest(format!("expected FAMILY:PITCH[,PITCH...], got {s:?}"))
        })?;

        let pitches = pitches
            .split(',')
            .map(|pitch| {
                pitch.trim().parse::<u32>().map_err(|_| {
                    FontMapError::InvalidRequest(format!("invalid pitch {pitch:?} in {s:?}"))
                })
            })
            .collect::<Result<BTreeSet<u32>>>()?;

        let request = FontRequest {
            family: family.trim().to_string(),
            pitches,
        };
        request.validate()?;
        Ok(request)
    }
}

/// Lookup key: the family spelling a caller uses, a pitch and style tags
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FontMapKey {
    pub family: String,
    pub pitch: u32,
    pub tags: StyleTags,
}

impl FontMapKey {
    pub fn new(family: impl Into<String>, pitch: u32, tags: StyleTags) -> Self {
        FontMapKey {
            family: family.into(),
            pitch,
            tags,
        }
    }
}

impl fmt::Display for FontMapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.family.contains(char::is_whitespace) {
            write!(f, "{{{}}} {} {}", self.family, self.pitch, self.tags)
        } else {
            write!(f, "{} {} {}", self.family, self.pitch, self.tags)
        }
    }
}

/// Substituted PostScript font name and pitch
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FontMapValue {
    pub name: String,
    pub pitch: u32,
}

impl fmt::Display for FontMapValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.pitch)
    }
}

/// Map from font requests to PostScript names
///
/// Inserting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontMap {
    entries: BTreeMap<FontMapKey, FontMapValue>,
}

impl FontMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: FontMapKey, value: FontMapValue) -> Option<FontMapValue> {
        self.entries.insert(key, value)
    }

    pub fn get(&self, key: &FontMapKey) -> Option<&FontMapValue> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &FontMapKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order
    pub fn iter(&self) -> btree_map::Iter<'_, FontMapKey, FontMapValue> {
        self.entries.iter()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, FontMapKey, FontMapValue> {
        self.entries.keys()
    }

    /// Copy every entry of `other` into this map, replacing duplicates
    pub fn extend_from(&mut self, other: &FontMap) {
        self.entries
            .extend(other.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    /// One line per entry, `family pitch tags -> name pitch`
    pub fn to_postscript_fontmap(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.iter() {
            out.push_str(&format!("{key} -> {value}\n"));
        }
        out
    }
}

impl<'a> IntoIterator for &'a FontMap {
    type Item = (&'a FontMapKey, &'a FontMapValue);
    type IntoIter = btree_map::Iter<'a, FontMapKey, FontMapValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FontMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        struct Entry<'a> {
            key: &'a FontMapKey,
            value: &'a FontMapValue,
        }

        serializer.collect_seq(self.iter().map(|(key, value)| Entry { key, value }))
    }
}

/// Builds font maps through a normalizer and a suffix table
#[derive(Debug, Clone)]
pub struct MapBuilder<N> {
    reconciler: SpellingReconciler<N>,
    suffixes: Cow<'static, SuffixTable>,
}

impl<N: FontNormalizer> MapBuilder<N> {
    pub fn new(normalizer: N) -> Self {
        Self::with_config(normalizer, ResolverConfig::default())
    }

    pub fn with_config(normalizer: N, config: ResolverConfig) -> Self {
        MapBuilder {
            reconciler: SpellingReconciler::with_reference_size(normalizer, config.reference_size),
            suffixes: config.suffixes,
        }
    }

    /// Build a fresh map for the requests
    ///
    /// All requests are validated before any entry is built. An empty slice
    /// yields an empty map.
    pub fn build_map(&self, requests: &[FontRequest]) -> Result<FontMap> {
        for request in requests {
            request.validate()?;
        }

        let mut map = FontMap::new();
        for request in requests {
            self.add_request(&mut map, request)?;
        }
        Ok(map)
    }

    /// Expand one request into `map`
    pub fn add_request(&self, map: &mut FontMap, request: &FontRequest) -> Result<()> {
        request.validate()?;
        let spellings = self.reconciler.reconcile(&request.family)?;
        let needs_double_entry = spellings.diverge();
        let names = NameResolver::new(&self.suffixes).resolve(&spellings.output);

        let before = map.len();
        for &pitch in &request.pitches {
            for (style, name) in names.available() {
                let value = FontMapValue {
                    name: name.to_string(),
                    pitch,
                };
                tracing::trace!(family = %spellings.display, pitch, %style, name, "font map entry");
                map.insert(
                    FontMapKey::new(spellings.display.clone(), pitch, style.tags()),
                    value.clone(),
                );
                if needs_double_entry {
                    map.insert(
                        FontMapKey::new(spellings.output.clone(), pitch, style.tags()),
                        value,
                    );
                }
            }
        }

        tracing::debug!(
            family = %request.family,
            display = %spellings.display,
            output = %spellings.output,
            added = map.len() - before,
            "expanded font request"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{CanonicalFamily, StandardNormalizer};
    use crate::style::FontStyle;

    fn key(family: &str, pitch: u32, style: FontStyle) -> FontMapKey {
        FontMapKey::new(family, pitch, style.tags())
    }

    #[test]
    fn test_times_at_two_pitches() {
        let map = MapBuilder::new(StandardNormalizer)
            .build_map(&[FontRequest::new("Times", [10, 12])])
            .unwrap();

        assert_eq!(map.len(), 8);
        for pitch in [10, 12] {
            let expected = [
                (FontStyle::Regular, "Times"),
                (FontStyle::Slanted, "Times-Italic"),
                (FontStyle::Bold, "Times-Bold"),
                (FontStyle::SlantedBold, "Times-BoldItalic"),
            ];
            for (style, name) in expected {
                let value = map.get(&key("Times", pitch, style)).unwrap();
                assert_eq!(value.name, name);
                assert_eq!(value.pitch, pitch);
            }
        }
    }

    #[test]
    fn test_unavailable_styles_are_skipped() {
        let map = MapBuilder::new(StandardNormalizer)
            .build_map(&[FontRequest::new("Noto Mono", [9])])
            .unwrap();

        // "Noto Mono" spells as NotoMono both ways
        assert_eq!(map.len(), 1);
        assert_eq!(
            map.get(&key("NotoMono", 9, FontStyle::Regular)).unwrap().name,
            "NotoMono-Regular"
        );
        assert!(!map.contains(&key("NotoMono", 9, FontStyle::Bold)));
    }

    #[test]
    fn test_diverging_spellings_insert_twice() {
        let map = MapBuilder::new(StandardNormalizer)
            .build_map(&[FontRequest::new("DejaVu Sans", [10])])
            .unwrap();

        assert_eq!(map.len(), 8);
        let display = map.get(&key("DejavuSans", 10, FontStyle::Slanted)).unwrap();
        let output = map.get(&key("DejaVuSans", 10, FontStyle::Slanted)).unwrap();
        assert_eq!(display, output);
        assert_eq!(display.name, "DejaVuSans-Oblique");
    }

    #[test]
    fn test_empty_requests_build_empty_map() {
        let map = MapBuilder::new(StandardNormalizer).build_map(&[]).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_invalid_requests_are_rejected() {
        let builder = MapBuilder::new(StandardNormalizer);
        let cases = vec![
            FontRequest::new("Times", [0, 10]),
            FontRequest::new("Times", []),
            FontRequest::new("  ", [10]),
        ];
        for request in cases {
            assert!(matches!(
                builder.build_map(&[FontRequest::new("Courier", [10]), request]),
                Err(FontMapError::InvalidRequest(_))
            ));
        }
    }

    #[test]
    fn test_add_request_rejects_invalid_requests() {
        let builder = MapBuilder::new(StandardNormalizer);
        let mut map = FontMap::new();

        let zero_pitch = builder.add_request(&mut map, &FontRequest::new("Times", [0]));
        assert!(matches!(zero_pitch, Err(FontMapError::InvalidRequest(_))));

        let no_pitches = builder.add_request(&mut map, &FontRequest::new("Courier", []));
        assert!(matches!(no_pitches, Err(FontMapError::InvalidRequest(_))));

        assert!(map.is_empty());
        assert!(!map.contains(&key("Times", 0, FontStyle::Regular)));
    }

    #[test]
    fn test_normalization_failure_propagates() {
        let failing = |family: &str, _: u32| -> Result<CanonicalFamily> {
            Err(FontMapError::NormalizationUnavailable {
                family: family.to_string(),
            })
        };
        let result = MapBuilder::new(failing).build_map(&[FontRequest::new("Times", [10])]);
        assert_eq!(
            result,
            Err(FontMapError::NormalizationUnavailable {
                family: "Times".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_pitches_collapse() {
        let request = FontRequest::new("Times", [12, 10, 12]);
        assert_eq!(request.pitches.iter().copied().collect::<Vec<_>>(), vec![10, 12]);
    }

    #[test]
    fn test_request_from_str() {
        let request: FontRequest = "DejaVu Sans: 10,12".parse().unwrap();
        assert_eq!(request, FontRequest::new("DejaVu Sans", [10, 12]));

        assert!("Times".parse::<FontRequest>().is_err());
        assert!("Times:ten".parse::<FontRequest>().is_err());
        assert!("Times:0".parse::<FontRequest>().is_err());
        assert!(":10".parse::<FontRequest>().is_err());
    }

    #[test]
    fn test_extend_from_overwrites() {
        let mut first = FontMap::new();
        first.insert(
            key("Times", 10, FontStyle::Regular),
            FontMapValue { name: "Times-Roman".to_string(), pitch: 10 },
        );
        let second = MapBuilder::new(StandardNormalizer)
            .build_map(&[FontRequest::new("Times", [10])])
            .unwrap();

        first.extend_from(&second);
        assert_eq!(first.len(), 4);
        assert_eq!(first.get(&key("Times", 10, FontStyle::Regular)).unwrap().name, "Times");
    }

    #[test]
    fn test_postscript_fontmap_rendering() {
        let map = MapBuilder::new(StandardNormalizer)
            .build_map(&[FontRequest::new("Symbol", [10])])
            .unwrap();
        assert_eq!(map.to_postscript_fontmap(), "Symbol 10 regular -> Symbol 10\n");
    }

    #[test]
    fn test_key_display_braces_spaced_family() {
        let key = FontMapKey::new("Nimbus Sans", 10, StyleTags::BOLD);
        assert_eq!(key.to_string(), "{Nimbus Sans} 10 bold");
    }
}
