use std::collections::HashMap;

use serde::Serialize;

/// Where an advancement lives, both on disk and in the in-game menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tab {
    /// The name shown on the tab's root advancement, when the mapper knows the tab.
    pub display_name: Option<String>,
    /// The folder path between the advancement directory and the file itself.
    pub folder_structure: String,
    /// The tab name the reward functions use. Usually equal to the tab folder, but
    /// addons have been known to disagree. Always absent for technical advancements.
    pub internal_name: Option<String>,
}

/// Maps tab folder names to the display names shown on their root advancements.
#[derive(Clone, Debug)]
pub struct TabNameMapper {
    tabs: HashMap<String, String>,
}

impl TabNameMapper {
    /// Creates a mapper preloaded with the standard BACAP tab set.
    pub fn bacap() -> TabNameMapper {
        Self::with_tabs([
            ("bacap", "BlazeandCave's Advancements"),
            ("mining", "Mining"),
            ("building", "Building"),
            ("farming", "Farming"),
            ("animal", "Animal Husbandry"),
            ("monsters", "Monsters"),
            ("weaponry", "Weaponry"),
            ("biomes", "Biomes"),
            ("adventure", "Adventure"),
            ("redstone", "Redstone"),
            ("enchanting", "Enchanting"),
            ("statistics", "Statistics"),
            ("nether", "Nether"),
            ("potion", "Potions"),
            ("end", "The End"),
            ("challenges", "Super Challenges"),
        ])
    }

    /// Creates a mapper from custom folder-to-display-name pairs.
    pub fn with_tabs<I, S>(tabs: I) -> TabNameMapper
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        TabNameMapper {
            tabs: tabs
                .into_iter()
                .map(|(folder, name)| (folder.into(), name.into()))
                .collect(),
        }
    }

    /// The display name of the tab in `folder`, if known.
    pub fn display_name(&self, folder: &str) -> Option<&str> {
        self.tabs.get(folder).map(String::as_str)
    }
}

impl Default for TabNameMapper {
    fn default() -> Self {
        Self::bacap()
    }
}

#[test]
fn default_mapper_knows_bacap_tabs() {
    let mapper = TabNameMapper::default();
    assert_eq!(mapper.display_name("animal"), Some("Animal Husbandry"));
    assert_eq!(mapper.display_name("end"), Some("The End"));
    assert_eq!(mapper.display_name("secret_tab"), None);
}
