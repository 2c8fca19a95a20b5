//! The advancement model and the pack-wide registry that decodes it.

use std::{
    collections::HashMap,
    fs::OpenOptions,
    io::{self, Read},
    path::Path,
};

use bacap_util::UnlocalizedName;
use serde::Serialize;
use serde_json::Value;

pub mod criteria;
pub mod display;
pub mod rewards;

use crate::{
    data::{
        functions::{read_function, Function},
        tab::Tab,
    },
    datapack::{recursive_read, PackConfig},
    error::AdvancementError,
    json::{safe_load_json, JsonObject, JsonObjectExt},
};

use self::{
    criteria::CriteriaList,
    display::Display,
    rewards::{decode_exp, decode_item_reward, decode_trophy, Exp, Reward, Trophy},
};

/// The directory names advancements have lived under across pack formats.
///
/// Packs built for 1.21 and later use the singular form, older packs the plural.
pub const ADVANCEMENT_DIRS: [&str; 2] = ["advancement", "advancements"];

/// The directory names functions have lived under across pack formats.
pub const FUNCTION_DIRS: [&str; 2] = ["function", "functions"];

/// An advancement
///
/// The document fields are filled at decode time. The derived fields (decoded
/// rewards, tab, type, technical flag) are attached afterwards by the owning
/// [AdvancementManager], which has the pack-wide context they need.
pub struct Advancement {
    /// The namespaced name, derived from the file's path within the pack.
    pub name: UnlocalizedName,
    pub parent: Option<UnlocalizedName>,
    pub display: Option<Display>,
    pub criteria: CriteriaList,
    pub requirements: Option<Requirements>,
    pub rewards: Option<RewardsInfo>,
    /// The experience decoded from the reward function.
    pub exp: Option<Exp>,
    /// The item reward decoded from the reward function.
    pub reward: Option<Reward>,
    /// The trophy decoded from the reward function.
    pub trophy: Option<Trophy>,
    /// The tab the advancement lives in.
    pub tab: Option<Tab>,
    /// The name of the advancement's type, as identified from its display style.
    pub adv_type: Option<String>,
    /// Whether this is a bookkeeping advancement players never earn through play.
    pub technical: bool,
}

impl Advancement {
    /// Decodes an advancement document.
    pub fn from_document(
        name: UnlocalizedName,
        document: &JsonObject,
    ) -> Result<Advancement, AdvancementError> {
        let criteria = document
            .object_field("criteria")
            .ok_or(AdvancementError::MissingCriteria)?;
        let criteria = CriteriaList::from_object(criteria)?;

        let display = match document.object_field("display") {
            Some(object) => Some(Display::from_object(object)?),
            None => None,
        };

        Ok(Advancement {
            name,
            parent: document
                .str_field("parent")
                .and_then(|parent| parent.parse().ok()),
            display,
            criteria,
            requirements: document
                .get("requirements")
                .and_then(Requirements::from_value),
            rewards: document.object_field("rewards").map(RewardsInfo::from_object),
            exp: None,
            reward: None,
            trophy: None,
            tab: None,
            adv_type: None,
            technical: false,
        })
    }

    /// The function this advancement runs on completion, when it names one that
    /// parses.
    pub fn reward_function(&self) -> Option<UnlocalizedName> {
        self.rewards.as_ref()?.function.as_ref()?.parse().ok()
    }

    /// The top folder of this advancement's path, which is the tab it belongs to.
    pub fn tab_key(&self) -> &str {
        self.name.identifier.split('/').next().unwrap_or("")
    }

    /// The folder path between the advancement directory and the file itself.
    ///
    /// Empty for a file sitting directly in the advancement directory.
    pub fn folder_structure(&self) -> &str {
        match self.name.identifier.rsplit_once('/') {
            Some((folders, _)) => folders,
            None => "",
        }
    }
}

/// The requirements block of an advancement
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Requirements {
    /// A list of the required criteria names
    List(Vec<String>),
    /// A list of lists of criteria names
    ///
    /// All of the lists only have to have one of their criteria met
    ///
    /// Basically ANDing of OR groups
    LogicalList(Vec<Vec<String>>),
}

impl Requirements {
    /// Decodes a `requirements` value of either shape.
    ///
    /// A flat array of strings decodes as [List](Self::List), an array of string
    /// arrays as [LogicalList](Self::LogicalList). Any other shape reads as absent.
    pub fn from_value(value: &Value) -> Option<Requirements> {
        let array = value.as_array()?;

        if array.iter().all(Value::is_string) {
            return Some(Requirements::List(
                array
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect(),
            ));
        }

        let mut groups = Vec::with_capacity(array.len());
        for group in array {
            let group = group.as_array()?;
            let mut names = Vec::with_capacity(group.len());
            for name in group {
                names.push(name.as_str()?.to_owned());
            }
            groups.push(names);
        }

        Some(Requirements::LogicalList(groups))
    }
}

/// The vanilla rewards block of an advancement
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RewardsInfo {
    pub recipes: Option<Vec<UnlocalizedName>>,
    pub loot: Option<Vec<UnlocalizedName>>,
    pub experience: Option<i32>,
    pub function: Option<String>,
}

impl RewardsInfo {
    /// Decodes a `rewards` object. Fields of the wrong shape read as absent.
    pub fn from_object(object: &JsonObject) -> RewardsInfo {
        RewardsInfo {
            recipes: parse_uln_list(object.array_field("recipes")),
            loot: parse_uln_list(object.array_field("loot")),
            experience: object
                .int_field("experience")
                .and_then(|xp| i32::try_from(xp).ok()),
            function: object.str_field("function").map(str::to_owned),
        }
    }
}

fn parse_uln_list(values: Option<&[Value]>) -> Option<Vec<UnlocalizedName>> {
    Some(
        values?
            .iter()
            .filter_map(Value::as_str)
            .filter_map(|uln| uln.parse().ok())
            .collect(),
    )
}

/// Every advancement of a pack, keyed by namespaced name.
pub struct AdvancementManager {
    advancements: HashMap<String, Advancement>,
}

impl AdvancementManager {
    /// Reads every advancement under the pack's `data` folder.
    ///
    /// Both directory spellings in [ADVANCEMENT_DIRS] are scanned in every
    /// namespace. A file that fails to decode is logged and skipped, only
    /// filesystem errors abort the read. An advancement whose reward function
    /// points into the reward namespace but does not exist there is dropped, the
    /// pack author plainly intended it to have one.
    pub fn read(pack_root: &Path, config: &PackConfig) -> io::Result<AdvancementManager> {
        let mut manager = AdvancementManager {
            advancements: HashMap::new(),
        };

        for entry in pack_root.join("data").read_dir()? {
            let entry = entry?;

            if !entry.metadata()?.is_dir() {
                continue;
            }

            let namespace = entry.file_name().to_string_lossy().to_string();
            for dir in ADVANCEMENT_DIRS {
                manager.read_namespace(&entry.path().join(dir), &namespace)?;
            }
        }

        manager.decorate(pack_root, config);
        Ok(manager)
    }

    fn read_namespace(&mut self, advancement_path: &Path, namespace: &str) -> io::Result<()> {
        let files = match recursive_read(advancement_path, String::new()) {
            Ok(files) => files,
            // The namespace simply has no advancements under this spelling
            Err(_) => return Ok(()),
        };

        for (identifier, entry) in files {
            let name = UnlocalizedName {
                namespace: namespace.to_owned(),
                identifier,
            };

            match Self::read_advancement(name.clone(), &entry.path()) {
                Ok(advancement) => {
                    self.advancements
                        .insert(advancement.name.to_string(), advancement);
                }
                Err(error) => log::warn!("Skipping advancement {}: {}", name, error),
            }
        }

        Ok(())
    }

    fn read_advancement(
        name: UnlocalizedName,
        path: &Path,
    ) -> Result<Advancement, AdvancementError> {
        let mut file = OpenOptions::new().read(true).write(false).open(path)?;

        let mut text = String::new();
        file.read_to_string(&mut text)?;

        let document = safe_load_json(&text).ok_or(AdvancementError::UnparseableJson)?;
        Advancement::from_document(name, &document)
    }

    /// Attaches the derived fields to every advancement.
    fn decorate(&mut self, pack_root: &Path, config: &PackConfig) {
        let mut dangling = Vec::new();

        for (key, advancement) in &mut self.advancements {
            let mut internal_name = None;

            if let Some(function) = advancement.reward_function() {
                if function.namespace == config.reward_namespace {
                    match Self::read_reward_function(pack_root, &function) {
                        Some(lines) => {
                            advancement.exp = decode_exp(&lines);
                            advancement.reward = decode_item_reward(&lines);
                            advancement.trophy = decode_trophy(&lines);
                            internal_name =
                                function.identifier.split('/').next().map(str::to_owned);
                        }
                        None => {
                            log::warn!(
                                "Skipping advancement {}: {}",
                                key,
                                AdvancementError::InvalidRewardFunction
                            );
                            dangling.push(key.clone());
                            continue;
                        }
                    }
                }
            }

            let tab_key = advancement.tab_key().to_owned();
            advancement.technical = config.technical_tabs.iter().any(|tab| tab == &tab_key)
                || advancement.criteria.is_all_impossible();

            advancement.tab = Some(Tab {
                display_name: config
                    .tab_name_mapper
                    .display_name(&tab_key)
                    .map(str::to_owned),
                folder_structure: advancement.folder_structure().to_owned(),
                internal_name: if advancement.technical {
                    None
                } else {
                    internal_name
                },
            });

            let adv_type = advancement
                .display
                .as_ref()
                .and_then(|display| config.adv_type_manager.identify(display))
                .map(|ty| ty.name.clone());
            advancement.adv_type = adv_type;
        }

        for key in dangling {
            self.advancements.remove(&key);
        }
    }

    /// Reads the command lines of a reward function, trying every directory
    /// spelling in [FUNCTION_DIRS].
    fn read_reward_function(pack_root: &Path, function: &UnlocalizedName) -> Option<Function> {
        for dir in FUNCTION_DIRS {
            let path = pack_root
                .join("data")
                .join(&function.namespace)
                .join(dir)
                .join(format!("{}.mcfunction", function.identifier));

            let file = match OpenOptions::new().read(true).write(false).open(&path) {
                Ok(file) => file,
                Err(_) => continue,
            };

            match read_function(file) {
                Ok(lines) => return Some(lines),
                Err(_) => continue,
            }
        }

        None
    }

    /// Gets an advancement by its namespaced name, `"namespace:path/name"`.
    pub fn get(&self, name: &str) -> Option<&Advancement> {
        self.advancements.get(name)
    }

    /// The number of advancements in the pack.
    pub fn len(&self) -> usize {
        self.advancements.len()
    }

    /// Whether the pack holds no advancements at all.
    pub fn is_empty(&self) -> bool {
        self.advancements.is_empty()
    }

    /// Iterates every advancement in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Advancement> {
        self.advancements.values()
    }

    /// Every tab folder name seen across the pack, sorted and deduplicated.
    pub fn tabs(&self) -> Vec<&str> {
        let mut tabs: Vec<&str> = self
            .advancements
            .values()
            .map(|advancement| advancement.tab_key())
            .collect();
        tabs.sort_unstable();
        tabs.dedup();
        tabs
    }

    /// Iterates the advancements whose tab folder is `tab`.
    pub fn by_tab<'a>(&'a self, tab: &'a str) -> impl Iterator<Item = &'a Advancement> {
        self.advancements
            .values()
            .filter(move |advancement| advancement.tab_key() == tab)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn requirements_decode_both_shapes() {
        let flat = json!(["a", "b"]);
        assert_eq!(
            Requirements::from_value(&flat),
            Some(Requirements::List(vec!["a".to_owned(), "b".to_owned()]))
        );

        let grouped = json!([["a", "b"], ["c"]]);
        assert_eq!(
            Requirements::from_value(&grouped),
            Some(Requirements::LogicalList(vec![
                vec!["a".to_owned(), "b".to_owned()],
                vec!["c".to_owned()]
            ]))
        );

        assert_eq!(Requirements::from_value(&json!([["a"], 3])), None);
        assert_eq!(Requirements::from_value(&json!("a")), None);
    }

    #[test]
    fn document_fields_decode() {
        let document = json!({
            "parent": "testadv:story/root",
            "display": {
                "title": "Next Step",
                "description": "Keep going",
                "frame": "goal"
            },
            "criteria": {
                "step": { "trigger": "minecraft:location" }
            },
            "rewards": {
                "function": "bc_rewards:story/next_step",
                "experience": 10
            }
        });

        let advancement = Advancement::from_document(
            UnlocalizedName {
                namespace: "testadv".to_owned(),
                identifier: "story/next_step".to_owned(),
            },
            document.as_object().unwrap(),
        )
        .unwrap();

        assert_eq!(
            advancement.parent,
            Some(UnlocalizedName {
                namespace: "testadv".to_owned(),
                identifier: "story/root".to_owned(),
            })
        );
        assert_eq!(advancement.criteria.len(), 1);
        assert_eq!(advancement.tab_key(), "story");
        assert_eq!(advancement.folder_structure(), "story");
        assert_eq!(
            advancement.reward_function(),
            Some(UnlocalizedName {
                namespace: "bc_rewards".to_owned(),
                identifier: "story/next_step".to_owned(),
            })
        );
        assert_eq!(
            advancement.rewards.as_ref().and_then(|rewards| rewards.experience),
            Some(10)
        );
    }

    #[test]
    fn criteria_are_required() {
        let document = json!({ "display": { "title": "t", "description": "d" } });

        assert!(matches!(
            Advancement::from_document(
                UnlocalizedName::minecraft("nowhere"),
                document.as_object().unwrap()
            ),
            Err(AdvancementError::MissingCriteria)
        ));
    }
}
