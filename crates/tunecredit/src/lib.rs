//! # tunecredit
//!
//! Structured credits from free-form music video titles.
//!
//! ```rust
//! let track = tunecredit::parse_full_title("Artist One & Artist Two - Shared Hit (Official Video)", false);
//! assert_eq!(track.artists, ["Artist One", "Artist Two"]);
//! assert_eq!(track.title, "Shared Hit");
//! assert!(track.version.is_original());
//! ```
pub use tunecredit_core::*;
