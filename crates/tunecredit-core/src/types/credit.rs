use std::fmt;

use serde::{Deserialize, Serialize};

use super::version::VersionTag;

/// Credits extracted from a title that no longer carries its artist prefix.
///
/// `artist` is always empty: primary artists come from
/// [`split_artists_from_title`](crate::parser::split_artists_from_title),
/// which runs on the full title before the credit parser sees the remainder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedCredit {
    /// Always empty; see the type docs.
    pub artist: String,

    /// Core title with feature, version and noise clauses removed.
    pub title: String,

    /// Featured artists in order of appearance. Not deduplicated.
    pub features: Vec<String>,

    /// Edit or variant tag, `Original` when none was found.
    pub version: VersionTag,
}

impl ParsedCredit {
    /// Creates a result carrying only a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Returns `true` if any featured artist was extracted.
    #[must_use]
    pub fn has_features(&self) -> bool {
        !self.features.is_empty()
    }
}

impl fmt::Display for ParsedCredit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        if self.has_features() {
            write!(f, " (feat. {})", self.features.join(", "))?;
        }
        if !self.version.is_original() {
            write!(f, " [{}]", self.version)?;
        }
        Ok(())
    }
}

/// Primary artists split off a full title, plus the untouched remainder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArtistSplit {
    /// Primary artists in credit order.
    pub artists: Vec<String>,

    /// Text after the delimiter, or the whole input when there was none.
    pub remainder: String,
}

impl ArtistSplit {
    /// Consumes the split into its `(artists, remainder)` pair.
    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, String) {
        (self.artists, self.remainder)
    }
}

/// Splitter and credit parser output for one full title.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrackCredit {
    /// Primary artists credited before the " - " delimiter.
    pub artists: Vec<String>,

    /// Core title.
    pub title: String,

    /// Featured artists in order of appearance.
    pub features: Vec<String>,

    /// Edit or variant tag.
    pub version: VersionTag,
}

impl TrackCredit {
    /// Joins a split with the credits parsed from its remainder.
    #[must_use]
    pub fn from_parts(artists: Vec<String>, credit: ParsedCredit) -> Self {
        Self {
            artists,
            title: credit.title,
            features: credit.features,
            version: credit.version,
        }
    }

    /// Primary artists followed by featured artists.
    pub fn all_artists(&self) -> impl Iterator<Item = &str> {
        self.artists
            .iter()
            .chain(self.features.iter())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_credit_is_untagged() {
        let credit = ParsedCredit::new("My Awesome Song");
        assert_eq!(credit.artist, "");
        assert_eq!(credit.title, "My Awesome Song");
        assert!(!credit.has_features());
        assert!(credit.version.is_original());
    }

    #[test]
    fn credit_display() {
        let mut credit = ParsedCredit::new("Epic Tune");
        assert_eq!(credit.to_string(), "Epic Tune");

        credit.features = vec!["Guest A".into(), "Guest B".into()];
        credit.version = VersionTag::Custom("Live Version".into());
        assert_eq!(
            credit.to_string(),
            "Epic Tune (feat. Guest A, Guest B) [Live Version]"
        );
    }

    #[test]
    fn credit_serializes_with_string_version() {
        let mut credit = ParsedCredit::new("Dance Track");
        credit.version = VersionTag::Remix;

        let json = serde_json::to_value(&credit).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "artist": "",
                "title": "Dance Track",
                "features": [],
                "version": "Remix",
            })
        );
    }

    #[test]
    fn track_credit_lists_primary_before_featured() {
        let mut credit = ParsedCredit::new("Luther's Freestyle");
        credit.features = vec!["EarthGang".into()];
        let track = TrackCredit::from_parts(vec!["Lute".into(), "JID".into()], credit);

        let all: Vec<_> = track.all_artists().collect();
        assert_eq!(all, ["Lute", "JID", "EarthGang"]);
        assert_eq!(track.title, "Luther's Freestyle");
    }
}
