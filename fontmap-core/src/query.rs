//! Membership queries against font maps
//!
//! Keys can also be written as text, the way a renderer describes a font:
//! `Times 12 bold italic`, or with a braced family when it contains spaces:
//! `{DejaVu Sans} 10 italic`.

use crate::error::{FontMapError, Result};
use crate::map::{FontMap, FontMapKey};
use crate::style::StyleTags;
use std::str::FromStr;

/// Whether `key` has an entry in `map`
pub fn is_mapped(map: &FontMap, key: &FontMapKey) -> bool {
    map.contains(key)
}

impl FromStr for FontMapKey {
    type Err = FontMapError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (family, rest) = split_family(s)?;

        let mut words = rest.into_iter();
        let pitch = words
            .next()
            .ok_or_else(|| FontMapError::InvalidFontSpec(format!("missing pitch in {s:?}")))?;
        let pitch = pitch
            .parse::<u32>()
            .ok()
            .filter(|pitch| *pitch > 0)
            .ok_or_else(|| FontMapError::InvalidFontSpec(format!("invalid pitch {pitch:?} in {s:?}")))?;

        let mut tags = StyleTags::empty();
        for word in words {
            let tag = StyleTags::from_word(word).ok_or_else(|| {
                FontMapError::InvalidFontSpec(format!("unknown style {word:?} in {s:?}"))
            })?;
            tags |= tag;
        }

        Ok(FontMapKey::new(family, pitch, tags))
    }
}

/// Split off the family: braced, or every word before the first word that
/// is a whole number
fn split_family(s: &str) -> Result<(String, Vec<&str>)> {
    if let Some(braced) = s.strip_prefix('{') {
        let (family, rest) = braced
            .split_once('}')
            .ok_or_else(|| FontMapError::InvalidFontSpec(format!("unclosed brace in {s:?}")))?;
        let family = family.trim();
        if family.is_empty() {
            return Err(FontMapError::InvalidFontSpec(format!("empty family in {s:?}")));
        }
        return Ok((family.to_string(), rest.split_whitespace().collect()));
    }

    let words: Vec<&str> = s.split_whitespace().collect();
    let pitch_at = words
        .iter()
        .position(|word| word.parse::<u32>().is_ok())
        .unwrap_or(words.len());
    if pitch_at == 0 {
        return Err(FontMapError::InvalidFontSpec(format!("missing family in {s:?}")));
    }
    Ok((words[..pitch_at].join(" "), words[pitch_at..].to_vec()))
}
