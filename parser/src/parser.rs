use std::collections::HashMap;

use crate::datapack::Datapack;

/// A registry of decoded datapacks, keyed by the names they were read under.
#[derive(Default)]
pub struct Parser {
    datapacks: HashMap<String, Datapack>,
}

impl Parser {
    /// Creates an empty registry.
    pub fn new() -> Parser {
        Parser {
            datapacks: HashMap::new(),
        }
    }

    /// Adds a datapack, replacing any previously added pack of the same name.
    pub fn add_datapack(&mut self, datapack: Datapack) {
        self.datapacks.insert(datapack.name.clone(), datapack);
    }

    /// Adds every datapack yielded by `datapacks`.
    pub fn add_datapacks<I: IntoIterator<Item = Datapack>>(&mut self, datapacks: I) {
        for datapack in datapacks {
            self.add_datapack(datapack);
        }
    }

    /// Gets a datapack by name.
    pub fn get_datapack(&self, name: &str) -> Option<&Datapack> {
        self.datapacks.get(name)
    }

    /// Iterates the registered datapacks in no particular order.
    pub fn datapacks(&self) -> impl Iterator<Item = &Datapack> {
        self.datapacks.values()
    }

    /// A one-line summary of the registry, pack count and total advancement count.
    pub fn info(&self) -> String {
        format!(
            "Datapacks: {}, Advancements: {}",
            self.datapacks.len(),
            self.datapacks
                .values()
                .map(|datapack| datapack.advancements.len())
                .sum::<usize>()
        )
    }
}
