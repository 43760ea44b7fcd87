use regex::Regex;

use crate::error::Result;
use crate::parser::noise::NoiseNormalizer;
use crate::types::VersionTag;

/// Recognizes version/edition clauses ("Remix", "Live Version", ...).
pub struct VersionExtractor {
    re_freeform: Regex,
    re_trailing_mix: Regex,
    re_live_venue: Regex,
}

impl VersionExtractor {
    /// Constructs a new `VersionExtractor` with pre-compiled patterns.
    ///
    /// # Errors
    ///
    /// Returns `CreditError::Regex` if any pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_freeform: Regex::new(r"(?i)\b(?:version|remix|remaster(?:ed)?|rework|flip)\b")?,
            re_trailing_mix: Regex::new(r"(?i)\S\s+(?:mix|edit)\s*$")?,
            re_live_venue: Regex::new(r"(?i)^\s*live\s+(?:at|from|in)\b")?,
        })
    }

    /// Classifies a clause as a version tag.
    ///
    /// Precedence: the slowed/reverb family, then the canonical vocabulary
    /// (whole clause), then free-form tags kept verbatim. "Mix" and "Edit"
    /// only count as the last word of a longer tag ("Club Mix"). Decoration
    /// such as "Official Video" matches none of these.
    #[must_use]
    pub fn classify(&self, inner: &str, noise: &NoiseNormalizer) -> Option<VersionTag> {
        if let Some(tag) = noise.canonical_edit(inner) {
            return Some(tag);
        }
        if let Some(tag) = VersionTag::from_canonical(inner) {
            return Some(tag);
        }
        if self.re_freeform.is_match(inner)
            || self.re_trailing_mix.is_match(inner)
            || self.re_live_venue.is_match(inner)
        {
            let verbatim = inner.split_whitespace().collect::<Vec<_>>().join(" ");
            return Some(VersionTag::Custom(verbatim));
        }
        None
    }
}
