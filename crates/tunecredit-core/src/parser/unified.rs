//! # Unified Credit Parser
//!
//! Runs the rule passes over one title in a fixed order: noise, features,
//! version. The artist splitter is independent and runs on full titles.

use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::error::Result;
use crate::parser::clause::{Clause, remove_spans, scan_clauses, tidy};
use crate::parser::credits::CreditExtractor;
use crate::parser::noise::NoiseNormalizer;
use crate::parser::splitter::ArtistSplitter;
use crate::parser::version::VersionExtractor;
use crate::types::{ParsedCredit, TrackCredit, VersionTag};

/// Configuration for the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Drop the extended YouTube descriptor family (quality labels, years,
    /// premiere notices, pipe suffixes) on top of plain decoration clauses.
    pub normalize_youtube_noise: bool,

    /// Also recognize feature credits written without brackets, as in
    /// `"Song ft. Guest"`. Off by default: only bracketed clauses count.
    pub bare_features: bool,

    /// Treat `"(with Guest)"` and `"Song - with Guest"` as collaboration
    /// credits, appended to the features. Off by default.
    pub collab_clauses: bool,
}

impl ParserConfig {
    /// Create a new parser configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable full YouTube noise normalization.
    pub fn with_youtube_noise(mut self, enabled: bool) -> Self {
        self.normalize_youtube_noise = enabled;
        self
    }

    /// Enable or disable unbracketed feature credits.
    pub fn with_bare_features(mut self, enabled: bool) -> Self {
        self.bare_features = enabled;
        self
    }

    /// Enable or disable `"with ..."` collaboration credits.
    pub fn with_collab_clauses(mut self, enabled: bool) -> Self {
        self.collab_clauses = enabled;
        self
    }
}

/// Extracts the clean title, featured artists and version tag from a title.
///
/// Holds only compiled patterns and an immutable config, so one instance can
/// be shared freely across threads.
pub struct CreditParser {
    config: ParserConfig,
    noise: NoiseNormalizer,
    credits: CreditExtractor,
    versions: VersionExtractor,
    splitter: ArtistSplitter,
}

impl CreditParser {
    /// Create a new parser with default configuration.
    ///
    /// # Errors
    ///
    /// Returns `CreditError::Regex` if a built-in pattern fails to compile.
    pub fn new() -> Result<Self> {
        Self::with_config(ParserConfig::default())
    }

    /// Create a new parser with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `CreditError::Regex` if a built-in pattern fails to compile.
    pub fn with_config(config: ParserConfig) -> Result<Self> {
        Ok(Self {
            config,
            noise: NoiseNormalizer::new()?,
            credits: CreditExtractor::new()?,
            versions: VersionExtractor::new()?,
            splitter: ArtistSplitter::new(),
        })
    }

    /// Get the parser configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a title using the configured noise setting.
    ///
    /// # Examples
    /// ```
    /// use tunecredit_core::parser::CreditParser;
    ///
    /// let parser = CreditParser::new().unwrap();
    /// let credit = parser.parse("Epic Tune (feat. Guest) (Live Version)");
    ///
    /// assert_eq!(credit.title, "Epic Tune");
    /// assert_eq!(credit.features, ["Guest"]);
    /// assert_eq!(credit.version, "Live Version");
    /// ```
    #[must_use]
    pub fn parse(&self, title: &str) -> ParsedCredit {
        self.parse_with_noise(title, self.config.normalize_youtube_noise)
    }

    /// Parse a title with an explicit noise setting, overriding the config.
    ///
    /// Never fails: titles without recognizable clauses come back with no
    /// features, an `Original` version and a whitespace-tidied title.
    #[must_use]
    pub fn parse_with_noise(&self, title: &str, normalize_youtube_noise: bool) -> ParsedCredit {
        let prepared = if normalize_youtube_noise {
            self.noise.prepare(title)
        } else {
            title.to_string()
        };

        let clauses = scan_clauses(&prepared);
        let mut removed: Vec<(usize, usize)> = Vec::new();

        // Noise pass
        let mut remaining: Vec<&Clause<'_>> = Vec::with_capacity(clauses.len());
        for clause in &clauses {
            if self.is_noise(clause.content(), normalize_youtube_noise) {
                trace!(clause = clause.inner, "dropped noise clause");
                removed.push(clause.span());
            } else {
                remaining.push(clause);
            }
        }

        // Feature pass
        let mut features = Vec::new();
        let feature = remaining
            .iter()
            .enumerate()
            .find_map(|(i, c)| self.credits.clause_body(c.content()).map(|body| (i, body)));
        let bracketed_feature = feature.is_some();
        if let Some((i, body)) = feature {
            let clause = remaining.remove(i);
            features = self.credits.split_names(body);
            trace!(clause = clause.inner, ?features, "extracted feature clause");
            removed.push(clause.span());
        }

        // Collaboration pass
        let mut collabs = Vec::new();
        let mut bracketed_collab = false;
        if self.config.collab_clauses {
            let collab = remaining
                .iter()
                .enumerate()
                .find_map(|(i, c)| self.credits.with_body(c.content()).map(|body| (i, body)));
            if let Some((i, body)) = collab {
                let clause = remaining.remove(i);
                collabs = self.credits.split_names(body);
                trace!(clause = clause.inner, ?collabs, "extracted collaboration clause");
                removed.push(clause.span());
                bracketed_collab = true;
            }
        }

        // Version pass
        let mut version = VersionTag::Original;
        let tagged = remaining.iter().find_map(|c| {
            self.versions
                .classify(c.content(), &self.noise)
                .map(|tag| (c.span(), tag))
        });
        if let Some((span, tag)) = tagged {
            trace!(version = %tag, "selected version clause");
            version = tag;
            removed.push(span);
        }

        let mut trimmed = !removed.is_empty();
        let mut rest = remove_spans(&prepared, &removed);

        if self.config.bare_features && !bracketed_feature {
            if let Some(bare) = self.credits.bare_clause(&rest) {
                features = self.credits.split_names(bare.body);
                trace!(?features, "extracted bare feature clause");
                rest = remove_spans(&rest, &[bare.span]);
                trimmed = true;
            }
        }

        if self.config.collab_clauses && !bracketed_collab {
            if let Some(dash) = self.credits.dash_with_clause(&rest) {
                collabs = self.credits.split_names(dash.body);
                trace!(?collabs, "extracted dash-led collaboration clause");
                rest = remove_spans(&rest, &[dash.span]);
                trimmed = true;
            }
        }
        features.extend(collabs);

        let credit = ParsedCredit {
            artist: String::new(),
            title: tidy(&rest, trimmed),
            features,
            version,
        };
        debug!(input = title, parsed = %credit, "parsed title credits");
        credit
    }

    /// Split primary artists off a full title.
    #[must_use]
    pub fn split_artists(&self, full_title: &str) -> (Vec<String>, String) {
        self.splitter.split(full_title).into_parts()
    }

    /// Split primary artists off a full title, then parse the remainder.
    #[must_use]
    pub fn parse_track(&self, full_title: &str) -> TrackCredit {
        let (artists, remainder) = self.split_artists(full_title);
        TrackCredit::from_parts(artists, self.parse(&remainder))
    }

    fn is_noise(&self, inner: &str, normalize_youtube_noise: bool) -> bool {
        if self.noise.is_decoration(inner) {
            return true;
        }
        normalize_youtube_noise
            && self.credits.clause_body(inner).is_none()
            && !(self.config.collab_clauses && self.credits.with_body(inner).is_some())
            && self.versions.classify(inner, &self.noise).is_none()
            && self.noise.is_descriptor(inner)
    }
}

/// Process-wide parser for the free functions, with the default config.
/// Every call passes the noise setting explicitly.
fn shared() -> &'static CreditParser {
    static PARSER: OnceLock<CreditParser> = OnceLock::new();
    PARSER.get_or_init(|| CreditParser::new().expect("built-in title patterns compile"))
}

/// Parses credits out of a title that no longer carries its artist prefix.
///
/// # Examples
/// ```
/// use tunecredit_core::parse_title_and_credits;
///
/// let credit = parse_title_and_credits("Collaboration (feat. Artist A & Artist B, Artist C)", false);
/// assert_eq!(credit.title, "Collaboration");
/// assert_eq!(credit.features, ["Artist A", "Artist B", "Artist C"]);
/// assert_eq!(credit.version, "Original");
/// ```
#[must_use]
pub fn parse_title_and_credits(title: &str, normalize_youtube_noise: bool) -> ParsedCredit {
    shared().parse_with_noise(title, normalize_youtube_noise)
}

/// Splits primary artists off a full title and parses the remainder.
///
/// # Examples
/// ```
/// use tunecredit_core::parse_full_title;
///
/// let track = parse_full_title("Lute & JID - Luther's Freestyle (feat. EarthGang) (Remix)", false);
/// assert_eq!(track.artists, ["Lute", "JID"]);
/// assert_eq!(track.title, "Luther's Freestyle");
/// assert_eq!(track.features, ["EarthGang"]);
/// assert_eq!(track.version, "Remix");
/// ```
#[must_use]
pub fn parse_full_title(full_title: &str, normalize_youtube_noise: bool) -> TrackCredit {
    let parser = shared();
    let (artists, remainder) = parser.split_artists(full_title);
    TrackCredit::from_parts(
        artists,
        parser.parse_with_noise(&remainder, normalize_youtube_noise),
    )
}
