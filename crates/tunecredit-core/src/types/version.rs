use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CreditError;

/// Edit or variant of a track, as named by its title.
///
/// Canonical tags render with a fixed spelling; free-form tags such as
/// "Live Version" or "Skrillex Remix" are kept verbatim in [`VersionTag::Custom`].
/// Serializes as its display string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum VersionTag {
    /// No recognized tag in the title.
    #[default]
    Original,
    Remix,
    Live,
    Acoustic,
    /// Any spelling of the "slowed + reverb" family.
    SlowedAndReverbed,
    Slowed,
    SpedUp,
    Nightcore,
    Instrumental,
    Extended,
    RadioEdit,
    Remastered,
    Unplugged,
    Demo,
    Acapella,
    Cover,
    /// Free-form tag preserved as written.
    Custom(String),
}

impl VersionTag {
    /// Looks up a clause in the canonical vocabulary (case-insensitive,
    /// whole clause). `Original` is not part of the vocabulary.
    #[must_use]
    pub fn from_canonical(text: &str) -> Option<Self> {
        let key = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let tag = match key.to_lowercase().as_str() {
            "remix" => Self::Remix,
            "live" => Self::Live,
            "acoustic" => Self::Acoustic,
            "slowed and reverbed" => Self::SlowedAndReverbed,
            "slowed" | "slowed down" => Self::Slowed,
            "sped up" | "sped-up" | "speed up" => Self::SpedUp,
            "nightcore" => Self::Nightcore,
            "instrumental" => Self::Instrumental,
            "extended" => Self::Extended,
            "radio edit" => Self::RadioEdit,
            "remastered" | "remaster" => Self::Remastered,
            "unplugged" => Self::Unplugged,
            "demo" => Self::Demo,
            "acapella" | "a cappella" | "acappella" | "a capella" => Self::Acapella,
            "cover" => Self::Cover,
            _ => return None,
        };
        Some(tag)
    }

    /// Returns the display string of this tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Original => "Original",
            Self::Remix => "Remix",
            Self::Live => "Live",
            Self::Acoustic => "Acoustic",
            Self::SlowedAndReverbed => "Slowed and Reverbed",
            Self::Slowed => "Slowed",
            Self::SpedUp => "Sped Up",
            Self::Nightcore => "Nightcore",
            Self::Instrumental => "Instrumental",
            Self::Extended => "Extended",
            Self::RadioEdit => "Radio Edit",
            Self::Remastered => "Remastered",
            Self::Unplugged => "Unplugged",
            Self::Demo => "Demo",
            Self::Acapella => "Acapella",
            Self::Cover => "Cover",
            Self::Custom(tag) => tag,
        }
    }

    /// Returns `true` for the untagged default.
    #[must_use]
    pub fn is_original(&self) -> bool {
        matches!(self, Self::Original)
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for VersionTag {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for VersionTag {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl From<VersionTag> for String {
    fn from(tag: VersionTag) -> Self {
        match tag {
            VersionTag::Custom(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

impl TryFrom<String> for VersionTag {
    type Error = CreditError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CreditError::EmptyVersionTag);
        }
        if trimmed.eq_ignore_ascii_case("original") {
            return Ok(Self::Original);
        }
        Ok(Self::from_canonical(trimmed).unwrap_or_else(|| Self::Custom(trimmed.to_string())))
    }
}
