//! # Artist/Title Splitter
//!
//! Separates a leading `"Artist A & Artist B - "` prefix from the rest of a
//! full video title. Feature and version clauses are left for the credit
//! parser to handle on the returned remainder.

use tracing::trace;

use crate::parser::clause::scan_clauses;
use crate::types::ArtistSplit;

/// Delimiters between the artist prefix and the title. The dashes are
/// interchangeable; the earliest top-level one wins.
const DELIMITERS: &[&str] = &[" - ", " – ", " — "];

/// Separators between primary artists in the prefix.
const ARTIST_SEPARATORS: &[char] = &[',', '&'];

/// Splits primary artists off a full title.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtistSplitter;

impl ArtistSplitter {
    /// Create a new splitter instance.
    pub fn new() -> Self {
        Self
    }

    /// Splits `full_title` on its first top-level artist delimiter.
    ///
    /// Delimiters inside brackets do not count. When there is no delimiter,
    /// or the prefix names nobody, the split has no artists and the whole
    /// input as its remainder.
    ///
    /// # Examples
    /// ```
    /// use tunecredit_core::parser::ArtistSplitter;
    ///
    /// let split = ArtistSplitter::new().split("Lute & JID - Luther's Freestyle (Remix)");
    /// assert_eq!(split.artists, ["Lute", "JID"]);
    /// assert_eq!(split.remainder, "Luther's Freestyle (Remix)");
    /// ```
    #[must_use]
    pub fn split(&self, full_title: &str) -> ArtistSplit {
        let unsplit = || ArtistSplit {
            artists: Vec::new(),
            remainder: full_title.to_string(),
        };

        let Some((pos, delimiter)) = self.find_delimiter(full_title) else {
            return unsplit();
        };

        let artists: Vec<String> = full_title[..pos]
            .split(ARTIST_SEPARATORS)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        if artists.is_empty() {
            return unsplit();
        }

        let remainder = &full_title[pos + delimiter.len()..];
        trace!(?artists, remainder, "split primary artists");
        ArtistSplit {
            artists,
            remainder: remainder.to_string(),
        }
    }

    /// Byte offset and text of the earliest delimiter outside any clause.
    fn find_delimiter(&self, input: &str) -> Option<(usize, &'static str)> {
        let clauses = scan_clauses(input);
        DELIMITERS
            .iter()
            .flat_map(|delimiter| {
                input
                    .match_indices(delimiter)
                    .map(move |(pos, _)| (pos, *delimiter))
            })
            .filter(|(pos, _)| !clauses.iter().any(|c| c.contains(*pos)))
            .min_by_key(|(pos, _)| *pos)
    }
}

/// Splits a full title into its primary artists and the remaining title.
///
/// # Examples
/// ```
/// use tunecredit_core::split_artists_from_title;
///
/// let (artists, rest) = split_artists_from_title("Artist One, Artist Two - Anthem");
/// assert_eq!(artists, ["Artist One", "Artist Two"]);
/// assert_eq!(rest, "Anthem");
///
/// let (artists, rest) = split_artists_from_title("My Awesome Song");
/// assert!(artists.is_empty());
/// assert_eq!(rest, "My Awesome Song");
/// ```
#[must_use]
pub fn split_artists_from_title(full_title: &str) -> (Vec<String>, String) {
    ArtistSplitter::new().split(full_title).into_parts()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_ampersand_artists() {
        let (artists, rest) =
            split_artists_from_title("Lute & JID - Luther's Freestyle (feat. EarthGang) (Remix)");
        assert_eq!(artists, ["Lute", "JID"]);
        assert_eq!(rest, "Luther's Freestyle (feat. EarthGang) (Remix)");
    }

    #[test]
    fn splits_comma_and_ampersand_artists() {
        let (artists, rest) = split_artists_from_title("A, B & C - Posse Cut");
        assert_eq!(artists, ["A", "B", "C"]);
        assert_eq!(rest, "Posse Cut");
    }

    #[test]
    fn no_delimiter_is_unchanged() {
        let (artists, rest) = split_artists_from_title("My Awesome Song");
        assert!(artists.is_empty());
        assert_eq!(rest, "My Awesome Song");

        let (artists, rest) = split_artists_from_title("");
        assert!(artists.is_empty());
        assert_eq!(rest, "");
    }

    #[test]
    fn only_first_delimiter_splits() {
        let (artists, rest) = split_artists_from_title("Band - Song - Live at Home");
        assert_eq!(artists, ["Band"]);
        assert_eq!(rest, "Song - Live at Home");
    }

    #[test]
    fn hyphenated_names_are_not_delimiters() {
        let (artists, rest) = split_artists_from_title("Jay-Z - Song");
        assert_eq!(artists, ["Jay-Z"]);
        assert_eq!(rest, "Song");
    }

    #[test]
    fn delimiters_inside_brackets_are_ignored() {
        let (artists, rest) = split_artists_from_title("Song (Intro - Outro)");
        assert!(artists.is_empty());
        assert_eq!(rest, "Song (Intro - Outro)");

        let (artists, rest) = split_artists_from_title("Song (Intro - Outro) - Band");
        assert_eq!(artists, ["Song (Intro - Outro)"]);
        assert_eq!(rest, "Band");
    }

    #[test]
    fn unicode_dashes_split() {
        let (artists, rest) = split_artists_from_title("Artist One & Artist Two – Shared Hit");
        assert_eq!(artists, ["Artist One", "Artist Two"]);
        assert_eq!(rest, "Shared Hit");

        let (artists, rest) = split_artists_from_title("Solo — Song - Part 2");
        assert_eq!(artists, ["Solo"]);
        assert_eq!(rest, "Song - Part 2");
    }

    #[test]
    fn empty_prefix_is_unchanged() {
        let (artists, rest) = split_artists_from_title(" - Untitled");
        assert!(artists.is_empty());
        assert_eq!(rest, " - Untitled");
    }

    #[test]
    fn remainder_is_not_cleaned() {
        let (_, rest) = split_artists_from_title("Artist -  Song  (Official Video)");
        assert_eq!(rest, " Song  (Official Video)");
    }
}
