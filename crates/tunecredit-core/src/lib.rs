//! # tunecredit Core
//!
//! Rule-based extraction of structured credits from free-form music video
//! titles: primary artists, clean title, featured artists and the
//! version/edition tag, with YouTube decoration removed.
//!
//! ## Quick Start
//!
//! ```rust
//! use tunecredit_core::{parse_title_and_credits, split_artists_from_title};
//!
//! let (artists, rest) = split_artists_from_title("Lute & JID - Luther's Freestyle (feat. EarthGang) (Remix)");
//! assert_eq!(artists, ["Lute", "JID"]);
//!
//! let credit = parse_title_and_credits(&rest, false);
//! assert_eq!(credit.title, "Luther's Freestyle");
//! assert_eq!(credit.features, ["EarthGang"]);
//! assert_eq!(credit.version.to_string(), "Remix");
//! ```
pub mod error;
pub mod parser;
pub mod types;

// Re-export primary API
pub use error::{CreditError, Result};
pub use parser::{
    ArtistSplitter, CreditParser, ParserConfig, parse_full_title, parse_title_and_credits,
    split_artists_from_title,
};
pub use types::{ArtistSplit, ParsedCredit, TrackCredit, VersionTag};
