use std::fmt;

use serde::{Deserialize, Serialize};

/// Model counting flavour of an instance, inferred from the tags it contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// Plain model counting.
    #[default]
    Mc,
    /// Weighted model counting.
    Wmc,
    /// Projected model counting.
    Pmc,
    /// Projected weighted model counting.
    Pwmc,
}

impl FileType {
    /// Promotion after seeing a weight tag. Keeps an earlier projection.
    #[must_use]
    pub const fn with_weights(self) -> Self {
        match self {
            Self::Mc | Self::Wmc => Self::Wmc,
            Self::Pmc | Self::Pwmc => Self::Pwmc,
        }
    }

    /// Promotion after seeing a projection tag. Keeps earlier weights.
    #[must_use]
    pub const fn with_projection(self) -> Self {
        match self {
            Self::Mc | Self::Pmc => Self::Pmc,
            Self::Wmc | Self::Pwmc => Self::Pwmc,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mc => "mc",
            Self::Wmc => "wmc",
            Self::Pmc => "pmc",
            Self::Pwmc => "pwmc",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
