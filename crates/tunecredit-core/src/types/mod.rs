pub mod credit;
pub mod version;

pub use credit::{ArtistSplit, ParsedCredit, TrackCredit};
pub use version::VersionTag;
