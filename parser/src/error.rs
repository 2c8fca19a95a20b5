use std::{
    error::Error,
    fmt::{self, Debug, Display, Formatter},
    io,
};

/// An error raised while constructing a [Datapack](crate::Datapack).
///
/// Every variant here means the pack as a whole is unusable. Problems confined to a
/// single file inside a structurally sound pack are logged and skipped instead.
pub enum PackError {
    /// `pack.mcmeta` was not found in the pack root.
    MissingPackMeta,
    /// `pack.mcmeta` exists but could not be decoded.
    InvalidPackMeta,
    /// The `data` folder is missing or is not a directory.
    MissingDataDir,
    /// The configured reward namespace is not one of the pack's namespaces.
    MissingRewardNamespace {
        /// The namespace that was requested.
        requested: String,
        /// The namespaces the pack actually contains.
        available: Vec<String>,
    },
    /// An underlying filesystem error.
    Io(io::Error),
}

impl Display for PackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PackError::MissingPackMeta => write!(
                f,
                "pack.mcmeta not found in the datapack root, maybe this is a wrong path"
            ),
            PackError::InvalidPackMeta => write!(f, "Failed to parse pack.mcmeta"),
            PackError::MissingDataDir => write!(f, "data folder does not exist"),
            PackError::MissingRewardNamespace {
                requested,
                available,
            } => write!(
                f,
                "Reward namespace \"{}\" does not exist, possible namespaces: {:?}",
                requested, available
            ),
            PackError::Io(error) => write!(f, "{}", error),
        }
    }
}

impl Debug for PackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Error for PackError {}

impl From<io::Error> for PackError {
    fn from(error: io::Error) -> Self {
        PackError::Io(error)
    }
}

/// An error raised while decoding a single advancement document.
///
/// These never escape [AdvancementManager](crate::data::advancement::AdvancementManager),
/// which logs the offending file and moves on.
pub enum AdvancementError {
    /// The document failed to parse as JSON even after the repair pass.
    UnparseableJson,
    /// The document has no `criteria` object.
    MissingCriteria,
    /// A criteria entry is not an object with a string `trigger` field.
    InvalidCriteria {
        /// The name of the offending entry.
        name: String,
    },
    /// The display object has no title.
    MissingTitle,
    /// The display object has no description.
    MissingDescription,
    /// The reward function named by the document does not exist.
    InvalidRewardFunction,
    /// The file could not be read.
    Io(io::Error),
}

impl Display for AdvancementError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AdvancementError::UnparseableJson => write!(f, "Failed to parse JSON data"),
            AdvancementError::MissingCriteria =>
                write!(f, "Advancement does not contain a criteria object"),
            AdvancementError::InvalidCriteria { name } =>
                write!(f, "Criteria \"{}\" does not contain a trigger", name),
            AdvancementError::MissingTitle => write!(f, "Advancement does not contain a title"),
            AdvancementError::MissingDescription =>
                write!(f, "Advancement does not contain a description"),
            AdvancementError::InvalidRewardFunction =>
                write!(f, "Advancement does not contain a valid reward function"),
            AdvancementError::Io(error) => write!(f, "{}", error),
        }
    }
}

impl Debug for AdvancementError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Error for AdvancementError {}

impl From<io::Error> for AdvancementError {
    fn from(error: io::Error) -> Self {
        AdvancementError::Io(error)
    }
}
