//! Family name normalization and spelling reconciliation
//!
//! A family is known under two spellings. The display spelling is what a
//! rendering toolkit uses for lookups: every word of the canonical family
//! title-cased and joined. The output spelling is what goes into PostScript
//! names: every word joined verbatim. For `"DejaVu Sans"` these are
//! `"DejavuSans"` and `"DejaVuSans"`.
//!
//! Canonical families come from a [`FontNormalizer`]. Hosts embedding this
//! crate in a toolkit implement the trait over their own font matching;
//! [`StandardNormalizer`] covers the common PostScript families.

use crate::error::{FontMapError, Result};
use std::collections::HashMap;

/// Reference size used when querying a normalizer
pub const DEFAULT_REFERENCE_SIZE: u32 = 12;

/// A family name as reported by a normalizer, split into words
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalFamily {
    words: Vec<String>,
}

impl CanonicalFamily {
    /// Create from explicit words
    ///
    /// Words containing whitespace are split further; blank words are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CanonicalFamily {
            words: words
                .into_iter()
                .flat_map(|word| {
                    let word: String = word.into();
                    word.split_whitespace()
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
                .collect(),
        }
    }

    /// Split a family name on whitespace
    pub fn from_name(name: &str) -> Self {
        Self::from_words(name.split_whitespace())
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words title-cased and concatenated; inner capitals are folded, so
    /// `DejaVu Sans` becomes `DejavuSans`
    pub fn display_spelling(&self) -> String {
        self.words.iter().map(|word| title_case(word)).collect()
    }

    /// Words concatenated verbatim
    pub fn output_spelling(&self) -> String {
        self.words.concat()
    }

    /// Words joined with single spaces
    pub fn name(&self) -> String {
        self.words.join(" ")
    }
}

/// Upper-case the first character, lower-case the rest
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Capability that maps a requested family to the family a toolkit would
/// actually use at a given size
pub trait FontNormalizer {
    fn normalize(&self, family: &str, size: u32) -> Result<CanonicalFamily>;
}

impl<F> FontNormalizer for F
where
    F: Fn(&str, u32) -> Result<CanonicalFamily>,
{
    fn normalize(&self, family: &str, size: u32) -> Result<CanonicalFamily> {
        self(family, size)
    }
}

lazy_static::lazy_static! {
    static ref FAMILY_ALIASES: HashMap<&'static str, &'static str> = {
        let mut aliases = HashMap::new();

        // Generic families
        aliases.insert("serif", "Times");
        aliases.insert("sans", "Helvetica");
        aliases.insert("sansserif", "Helvetica");
        aliases.insert("monospace", "Courier");
        aliases.insert("mono", "Courier");

        // Base PostScript families
        aliases.insert("times", "Times");
        aliases.insert("timesroman", "Times");
        aliases.insert("helvetica", "Helvetica");
        aliases.insert("courier", "Courier");
        aliases.insert("symbol", "Symbol");
        aliases.insert("zapfdingbats", "ZapfDingbats");
        aliases.insert("avantgarde", "AvantGarde");

        // Common free families
        aliases.insert("dejavusans", "DejaVu Sans");
        aliases.insert("dejavusansmono", "DejaVu Sans Mono");
        aliases.insert("dejavuserif", "DejaVu Serif");
        aliases.insert("notomono", "Noto Mono");
        aliases.insert("nimbussans", "Nimbus Sans");
        aliases.insert("nimbusmonops", "Nimbus Mono PS");

        aliases
    };
}

/// Lookup key for the alias table: lower-case, separators removed
fn alias_key(family: &str) -> String {
    family
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Built-in normalizer backed by a table of well-known families
///
/// Unknown families pass through word by word. Normalization does not depend
/// on size.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardNormalizer;

impl FontNormalizer for StandardNormalizer {
    fn normalize(&self, family: &str, _size: u32) -> Result<CanonicalFamily> {
        if let Some(canonical) = FAMILY_ALIASES.get(alias_key(family).as_str()) {
            return Ok(CanonicalFamily::from_name(canonical));
        }

        let canonical = CanonicalFamily::from_name(family);
        if canonical.is_empty() {
            return Err(FontMapError::NormalizationUnavailable {
                family: family.to_string(),
            });
        }
        tracing::warn!(family, "unknown font family, using requested name as-is");
        Ok(canonical)
    }
}

/// Display and output spellings of one family
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Spellings {
    pub display: String,
    pub output: String,
}

impl Spellings {
    /// Whether the two spellings differ
    pub fn diverge(&self) -> bool {
        self.display != self.output
    }
}

/// Derives both spellings of a family through a normalizer
#[derive(Debug, Clone)]
pub struct SpellingReconciler<N> {
    normalizer: N,
    reference_size: u32,
}

impl<N: FontNormalizer> SpellingReconciler<N> {
    pub fn new(normalizer: N) -> Self {
        Self::with_reference_size(normalizer, DEFAULT_REFERENCE_SIZE)
    }

    pub fn with_reference_size(normalizer: N, reference_size: u32) -> Self {
        SpellingReconciler {
            normalizer,
            reference_size,
        }
    }

    /// Canonical family, rejecting empty results
    pub fn canonical(&self, family: &str) -> Result<CanonicalFamily> {
        let canonical = self.normalizer.normalize(family, self.reference_size)?;
        if canonical.is_empty() {
            return Err(FontMapError::NormalizationUnavailable {
                family: family.to_string(),
            });
        }
        Ok(canonical)
    }

    pub fn display_spelling(&self, family: &str) -> Result<String> {
        Ok(self.canonical(family)?.display_spelling())
    }

    pub fn output_spelling(&self, family: &str) -> Result<String> {
        Ok(self.canonical(family)?.output_spelling())
    }

    /// Both spellings from a single normalizer query
    pub fn reconcile(&self, family: &str) -> Result<Spellings> {
        let canonical = self.canonical(family)?;
        Ok(Spellings {
            display: canonical.display_spelling(),
            output: canonical.output_spelling(),
        })
    }
}

/// Display spelling via [`StandardNormalizer`]
///
/// Inner capitals are folded: `"dejavu sans"` gives `"DejavuSans"`.
pub fn display_spelling(family: &str) -> Result<String> {
    SpellingReconciler::new(StandardNormalizer).display_spelling(family)
}

/// Output spelling via [`StandardNormalizer`]
pub fn output_spelling(family: &str) -> Result<String> {
    SpellingReconciler::new(StandardNormalizer).output_spelling(family)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("dejavu"), "Dejavu");
        assert_eq!(title_case("DejaVu"), "Dejavu");
        assert_eq!(title_case("PS"), "Ps");
        assert_eq!(title_case("éclair"), "Éclair");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_spellings_of_lowercase_name() {
        let canonical = CanonicalFamily::from_name("dejavu sans");
        assert_eq!(canonical.display_spelling(), "DejavuSans");
        assert_eq!(canonical.output_spelling(), "dejavusans");
    }

    #[test]
    fn test_standard_normalizer_aliases() {
        let normalizer = StandardNormalizer;
        assert_eq!(
            normalizer.normalize("dejavu sans", 12).unwrap().name(),
            "DejaVu Sans"
        );
        assert_eq!(normalizer.normalize("TIMES", 12).unwrap().name(), "Times");
        assert_eq!(
            normalizer.normalize("sans-serif", 12).unwrap().name(),
            "Helvetica"
        );
        assert_eq!(
            normalizer.normalize("Noto_Mono", 12).unwrap().name(),
            "Noto Mono"
        );
    }

    #[test]
    fn test_standard_normalizer_pass_through() {
        let canonical = StandardNormalizer.normalize("  Fira   Code ", 12).unwrap();
        assert_eq!(canonical.words(), &["Fira".to_string(), "Code".to_string()]);
    }

    #[test]
    fn test_standard_normalizer_rejects_blank() {
        assert_eq!(
            StandardNormalizer.normalize("   ", 12),
            Err(FontMapError::NormalizationUnavailable {
                family: "   ".to_string()
            })
        );
    }

    #[test]
    fn test_reconcile_coinciding_spellings() {
        let spellings = SpellingReconciler::new(StandardNormalizer)
            .reconcile("times")
            .unwrap();
        assert_eq!(spellings.display, "Times");
        assert_eq!(spellings.output, "Times");
        assert!(!spellings.diverge());
    }

    #[test]
    fn test_reconcile_diverging_spellings() {
        let spellings = SpellingReconciler::new(StandardNormalizer)
            .reconcile("DejaVu Sans")
            .unwrap();
        assert_eq!(spellings.display, "DejavuSans");
        assert_eq!(spellings.output, "DejaVuSans");
        assert!(spellings.diverge());
    }

    #[test]
    fn test_reconciler_rejects_empty_normalization() {
        let broken =
            |_: &str, _: u32| -> Result<CanonicalFamily> { Ok(CanonicalFamily::from_words(["", "  "])) };
        let reconciler = SpellingReconciler::new(broken);
        assert!(matches!(
            reconciler.reconcile("Times"),
            Err(FontMapError::NormalizationUnavailable { .. })
        ));
    }

    #[test]
    fn test_reconciler_passes_reference_size() {
        let sized = |family: &str, size: u32| -> Result<CanonicalFamily> {
            Ok(CanonicalFamily::from_words([family.to_string(), size.to_string()]))
        };
        let reconciler = SpellingReconciler::with_reference_size(sized, 10);
        assert_eq!(reconciler.output_spelling("Font").unwrap(), "Font10");
    }

    #[test]
    fn test_free_functions() {
        assert_eq!(display_spelling("nimbus mono ps").unwrap(), "NimbusMonoPs");
        assert_eq!(output_spelling("nimbus mono ps").unwrap(), "NimbusMonoPS");
    }

    #[test]
    fn test_display_spelling_folds_inner_capitals() {
        assert_eq!(display_spelling("dejavu sans").unwrap(), "DejavuSans");
        assert_eq!(output_spelling("dejavu sans").unwrap(), "DejaVuSans");
    }

    #[test]
    fn test_from_words_splits_spaced_words() {
        let canonical = CanonicalFamily::from_words(["DejaVu Sans", " ", "Mono"]);
        assert_eq!(
            canonical.words(),
            &["DejaVu".to_string(), "Sans".to_string(), "Mono".to_string()]
        );
        assert_eq!(canonical.display_spelling(), "DejavuSansMono");
        assert_eq!(canonical.output_spelling(), "DejaVuSansMono");
    }

    #[test]
    fn test_host_normalizer_with_spaced_word() {
        let host = |_: &str, _: u32| -> Result<CanonicalFamily> {
            Ok(CanonicalFamily::from_words(["DejaVu Sans"]))
        };
        let spellings = SpellingReconciler::new(host).reconcile("sans").unwrap();
        assert_eq!(spellings.display, "DejavuSans");
        assert_eq!(spellings.output, "DejaVuSans");
        assert!(!spellings.output.contains(' '));
    }
}
