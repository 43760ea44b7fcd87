pub mod clause;
pub mod credits;
pub mod noise;
pub mod splitter;
pub mod unified;
pub mod version;

pub use clause::{Bracket, Clause};
pub use credits::{BareFeature, CreditExtractor};
pub use noise::NoiseNormalizer;
pub use splitter::{ArtistSplitter, split_artists_from_title};
pub use unified::{CreditParser, ParserConfig, parse_full_title, parse_title_and_credits};
pub use version::VersionExtractor;
