use regex::Regex;

use crate::error::Result;
use crate::types::VersionTag;

/// Recognizes platform decoration in video titles and canonicalizes the
/// informal "slowed + reverb" family.
///
/// Decoration clauses ("Official Video", "Visualizer", ...) are always
/// dropped from the title and never become a version. The extended
/// descriptor family (quality labels, years, premiere notices, ...) is only
/// dropped when YouTube noise normalization is enabled.
pub struct NoiseNormalizer {
    re_decoration: Regex,
    re_descriptor: Regex,
    re_decoration_word: Regex,
    re_pipe_suffix: Regex,
    re_slowed_reverb: Regex,
}

impl NoiseNormalizer {
    /// Constructs a new `NoiseNormalizer` with pre-compiled patterns.
    ///
    /// # Errors
    ///
    /// Returns `CreditError::Regex` if any pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_decoration: Regex::new(
                r"(?i)^\s*(?:official\s+(?:music\s+|lyrics?\s+)?(?:video|audio|visuali[sz]er)|(?:music|lyrics?)\s+video|audio|video|lyrics?|visuali[sz]er|mv|m/v)\s*$",
            )?,
            re_descriptor: Regex::new(
                r"(?i)^\s*(?:hd|hq|\d+\s*k|explicit|clean|(?:19|20)\d{2}|\d{1,2}\.\d{1,2}\.\d{2,4})\s*$|high\s*quality|premiere|exclusive|repost|standout",
            )?,
            re_decoration_word: Regex::new(r"(?i)\b(?:official|audio|video|mv|lyrics?)\b")?,
            re_pipe_suffix: Regex::new(
                r"(?i)\s*\|\s*(?:official\s+)?(?:music\s+|lyrics?\s+)?(?:video|audio|visuali[sz]er|lyrics?)\s*$",
            )?,
            re_slowed_reverb: Regex::new(
                r"(?i)\bslowed\s*(?:x|\+|&|and)?\s*reverb(?:ed)?\b|\breverb(?:ed)?\s*(?:x|\+|&|and)?\s*slowed\b",
            )?,
        })
    }

    /// Returns `true` for a clause that is pure platform decoration.
    #[must_use]
    pub fn is_decoration(&self, inner: &str) -> bool {
        inner.trim().is_empty() || self.re_decoration.is_match(inner)
    }

    /// Returns `true` for a clause that only full noise normalization drops:
    /// quality labels, years, dates, premiere/exclusive notices, and any
    /// clause mentioning a decoration word.
    ///
    /// Callers must rule out feature and version clauses first; a clause
    /// like "Official Remix" mentions a decoration word but names a version.
    #[must_use]
    pub fn is_descriptor(&self, inner: &str) -> bool {
        self.re_descriptor.is_match(inner) || self.re_decoration_word.is_match(inner)
    }

    /// Canonicalizes any spelling of the slowed/reverb edit.
    #[must_use]
    pub fn canonical_edit(&self, inner: &str) -> Option<VersionTag> {
        self.re_slowed_reverb
            .is_match(inner)
            .then_some(VersionTag::SlowedAndReverbed)
    }

    /// Text-level cleanup applied before clause scanning when noise
    /// normalization is on: drops a trailing `| Official Video` style suffix
    /// and straightens typographic quotes.
    #[must_use]
    pub fn prepare(&self, title: &str) -> String {
        let stripped = self.re_pipe_suffix.replace(title, "");
        stripped.replace(['\u{2019}', '\u{2018}', '\u{00B4}', '`'], "'")
    }
}
