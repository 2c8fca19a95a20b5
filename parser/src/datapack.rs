use std::{
    fs::{DirEntry, OpenOptions},
    io::{self, Read},
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::{
    data::{
        adv_type::AdvTypeManager,
        advancement::{display::DisplayText, AdvancementManager},
        tab::TabNameMapper,
    },
    error::PackError,
    json::{safe_load_json, JsonObjectExt},
};

/// Walks a datatype directory, returning every file in it paired with its
/// extension-free relative path, `"story/root"` style.
pub(crate) fn recursive_read(path: &Path, prefix: String) -> io::Result<Vec<(String, DirEntry)>> {
    let mut entries = Vec::new();

    for entry in path.read_dir()? {
        let entry = entry?;

        if entry.metadata()?.is_dir() {
            entries.extend(recursive_read(
                &entry.path(),
                format!("{}{}/", prefix, entry.file_name().to_string_lossy()),
            )?);
        } else {
            let file_name = entry.file_name().to_string_lossy().to_string();
            let stem = file_name.split('.').next().unwrap_or(&file_name);
            entries.push((format!("{}{}", prefix, stem), entry));
        }
    }

    Ok(entries)
}

/// Everything configurable about how a pack is decoded.
#[derive(Clone, Debug)]
pub struct PackConfig {
    /// The namespace the pack's reward functions live in.
    pub reward_namespace: String,
    /// The tab folders whose advancements are all technical.
    pub technical_tabs: Vec<String>,
    /// The folder-to-display-name mapping for tabs.
    pub tab_name_mapper: TabNameMapper,
    /// The advancement types displays are classified against.
    pub adv_type_manager: AdvTypeManager,
}

impl Default for PackConfig {
    /// The configuration matching the standard BACAP layout.
    fn default() -> Self {
        PackConfig {
            reward_namespace: "bc_rewards".to_owned(),
            technical_tabs: vec!["technical".to_owned()],
            tab_name_mapper: TabNameMapper::default(),
            adv_type_manager: AdvTypeManager::default(),
        }
    }
}

/// Holds the metadata about the pack
#[derive(Clone, Debug, Serialize)]
pub struct PackMeta {
    pub pack_format: u8,
    /// The pack description, flattened to its visible text.
    pub description: String,
}

impl PackMeta {
    /// Decodes the contents of a `pack.mcmeta` file.
    ///
    /// In the file itself the data sits wrapped in a `pack` field. The description
    /// may be a bare string or a full text component tree, only its visible text is
    /// kept either way.
    pub fn from_text(text: &str) -> Option<PackMeta> {
        let document = safe_load_json(text)?;
        let pack = document.object_field("pack")?;

        Some(PackMeta {
            pack_format: u8::try_from(pack.int_field("pack_format")?).ok()?,
            description: pack
                .get("description")
                .map(|value| DisplayText::flatten(value).text)
                .unwrap_or_default(),
        })
    }
}

/// A decoded datapack
pub struct Datapack {
    /// The pack's name, given at read time.
    pub name: String,
    /// The root folder the pack was read from.
    pub path: PathBuf,
    pub meta: PackMeta,
    /// The namespaces under the pack's `data` folder, sorted by name.
    pub namespaces: Vec<String>,
    pub config: PackConfig,
    /// The pack's advancements, decoded and decorated.
    pub advancements: AdvancementManager,
}

impl Datapack {
    /// Reads the datapack in the folder at `path`.
    ///
    /// The pack must have a `pack.mcmeta`, a `data` folder, and the configured
    /// reward namespace among its namespaces, anything else fails with a
    /// [PackError]. Problems confined to individual files inside a structurally
    /// sound pack are logged and skipped rather than failing the read.
    pub fn read(path: &Path, name: &str, config: PackConfig) -> Result<Datapack, PackError> {
        let meta_path = path.join("pack.mcmeta");
        if !meta_path.is_file() {
            return Err(PackError::MissingPackMeta);
        }

        let mut file = OpenOptions::new().read(true).write(false).open(&meta_path)?;
        let mut text = String::new();
        file.read_to_string(&mut text)?;

        let meta = PackMeta::from_text(&text).ok_or(PackError::InvalidPackMeta)?;

        let data_path = path.join("data");
        if !data_path.is_dir() {
            return Err(PackError::MissingDataDir);
        }

        let mut namespaces = Vec::new();
        for entry in data_path.read_dir()? {
            let entry = entry?;

            if entry.metadata()?.is_dir() {
                namespaces.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        namespaces.sort();

        if !namespaces.iter().any(|ns| ns == &config.reward_namespace) {
            return Err(PackError::MissingRewardNamespace {
                requested: config.reward_namespace.clone(),
                available: namespaces,
            });
        }

        let advancements = AdvancementManager::read(path, &config)?;

        Ok(Datapack {
            name: name.to_owned(),
            path: path.to_owned(),
            meta,
            namespaces,
            config,
            advancements,
        })
    }

    /// The pack format version from `pack.mcmeta`.
    pub fn version(&self) -> u8 {
        self.meta.pack_format
    }

    /// The pack description from `pack.mcmeta`.
    pub fn description(&self) -> &str {
        &self.meta.description
    }

    /// The namespace the pack's reward functions live in.
    pub fn reward_namespace(&self) -> &str {
        &self.config.reward_namespace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mcmeta_descriptions_flatten() {
        let plain = r#"{"pack": {"pack_format": 48, "description": "A test pack"}}"#;
        let meta = PackMeta::from_text(plain).unwrap();
        assert_eq!(meta.pack_format, 48);
        assert_eq!(meta.description, "A test pack");

        let component = r#"{"pack": {"pack_format": 15, "description": [
            {"text": "Blaze", "color": "gold"},
            {"text": "andCave"}
        ]}}"#;
        let meta = PackMeta::from_text(component).unwrap();
        assert_eq!(meta.description, "BlazeandCave");
    }

    #[test]
    fn mcmeta_requires_a_pack_format() {
        assert!(PackMeta::from_text(r#"{"pack": {"description": "x"}}"#).is_none());
        assert!(PackMeta::from_text("not json at all").is_none());
        assert!(PackMeta::from_text(r#"{"pack_format": 48}"#).is_none());
    }
}
