//! The unlock criteria model and its set algebra.

use std::{
    fmt,
    ops::{Add, BitAnd, BitOr, BitXor},
    slice,
};

use bacap_util::cut_namespace;
use serde_json::Value;

use crate::{
    error::AdvancementError,
    json::{JsonObject, JsonObjectExt},
};

/// A single named unlock condition of an advancement.
///
/// Two criteria are equal when their names and triggers match, where they came from
/// is irrelevant.
#[derive(Clone)]
pub struct Criteria {
    name: String,
    trigger: String,
    conditions: Option<Value>,
    impossible: bool,
}

impl Criteria {
    /// Creates a criteria from its name and trigger type.
    ///
    /// The trigger's namespace is stripped, so `minecraft:impossible` and
    /// `impossible` produce the same criteria.
    pub fn new(name: &str, trigger: &str) -> Criteria {
        Self::with_conditions(name, trigger, None)
    }

    /// Creates a criteria and attaches its raw `conditions` object.
    ///
    /// Conditions are carried for downstream consumers and take no part in equality.
    pub fn with_conditions(name: &str, trigger: &str, conditions: Option<Value>) -> Criteria {
        let trigger = cut_namespace(trigger).to_owned();
        let impossible = trigger == "impossible";

        Criteria {
            name: name.to_owned(),
            trigger,
            conditions,
            impossible,
        }
    }

    /// The name of this criteria, unique within its owning list by convention.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The trigger type, namespace stripped.
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// The raw conditions object of this criteria, if it carries one.
    pub fn conditions(&self) -> Option<&Value> {
        self.conditions.as_ref()
    }

    /// Whether this criteria can never be triggered by gameplay.
    pub fn is_impossible(&self) -> bool {
        self.impossible
    }
}

impl PartialEq for Criteria {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.trigger == other.trigger
    }
}

impl Eq for Criteria {}

impl fmt::Debug for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Criteria name={}, trigger={}>", self.name, self.trigger)
    }
}

/// An ordered, duplicate-preserving collection of [Criteria].
///
/// Element identity everywhere in this type is the (name, trigger) pair. The set
/// operators build new lists of cloned elements, they never alias the operands.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CriteriaList {
    criteria: Vec<Criteria>,
}

impl CriteriaList {
    /// Creates an empty list.
    pub fn new() -> CriteriaList {
        CriteriaList {
            criteria: Vec::new(),
        }
    }

    /// Decodes the `criteria` object of an advancement document.
    ///
    /// One criteria is built per entry, in the order the entries appear in the file.
    /// An entry that is not an object with a string `trigger` field fails the decode.
    pub fn from_object(object: &JsonObject) -> Result<CriteriaList, AdvancementError> {
        let mut list = CriteriaList::new();

        for (name, entry) in object {
            let entry = entry.as_object().ok_or_else(|| {
                AdvancementError::InvalidCriteria { name: name.clone() }
            })?;
            let trigger = entry.str_field("trigger").ok_or_else(|| {
                AdvancementError::InvalidCriteria { name: name.clone() }
            })?;

            list.append(Criteria::with_conditions(
                name,
                trigger,
                entry.get("conditions").cloned(),
            ));
        }

        Ok(list)
    }

    /// Appends a criteria to the end of the list.
    pub fn append(&mut self, criteria: Criteria) {
        self.criteria.push(criteria);
    }

    /// Inserts a criteria at `index`, shifting everything after it.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, criteria: Criteria) {
        self.criteria.insert(index, criteria);
    }

    /// Removes the first criteria equal to `criteria`, returning it.
    pub fn remove(&mut self, criteria: &Criteria) -> Option<Criteria> {
        let index = self.criteria.iter().position(|crit| crit == criteria)?;
        Some(self.criteria.remove(index))
    }

    /// Removes the first criteria named `name`, returning it.
    ///
    /// Unlike [remove](Self::remove) the trigger is not compared.
    pub fn remove_named(&mut self, name: &str) -> Option<Criteria> {
        let index = self.criteria.iter().position(|crit| crit.name == name)?;
        Some(self.criteria.remove(index))
    }

    /// Sorts the list by criteria name, keeping the relative order of equal names.
    pub fn sort(&mut self) {
        self.criteria.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Whether any element equals `criteria` by name and trigger.
    pub fn contains(&self, criteria: &Criteria) -> bool {
        self.criteria.iter().any(|crit| crit == criteria)
    }

    /// Whether any element is named `name`.
    pub fn contains_name(&self, name: &str) -> bool {
        self.criteria.iter().any(|crit| crit.name == name)
    }

    /// Builds a new list holding this list's elements followed by `other`'s.
    ///
    /// Duplicates are kept. This is ordered concatenation, not a deduplicating set
    /// union.
    pub fn concat(&self, other: &CriteriaList) -> CriteriaList {
        let mut criteria = self.criteria.clone();
        criteria.extend(other.criteria.iter().cloned());
        CriteriaList { criteria }
    }

    /// Alias of [concat](Self::concat).
    pub fn or(&self, other: &CriteriaList) -> CriteriaList {
        self.concat(other)
    }

    /// Builds a new list of this list's elements that also occur in `other`.
    ///
    /// Keeps this list's order, including any duplicates this list holds.
    pub fn and(&self, other: &CriteriaList) -> CriteriaList {
        CriteriaList {
            criteria: self
                .criteria
                .iter()
                .filter(|crit| other.contains(crit))
                .cloned()
                .collect(),
        }
    }

    /// Builds a new list of the elements present in exactly one of the two lists.
    ///
    /// This list's unmatched elements come first in this list's order, then `other`'s
    /// unmatched elements in `other`'s order.
    pub fn xor(&self, other: &CriteriaList) -> CriteriaList {
        let mut criteria: Vec<Criteria> = self
            .criteria
            .iter()
            .filter(|crit| !other.contains(crit))
            .cloned()
            .collect();
        criteria.extend(
            other
                .criteria
                .iter()
                .filter(|crit| !self.contains(crit))
                .cloned(),
        );

        CriteriaList { criteria }
    }

    /// Whether the list is non-empty and every criteria in it is impossible.
    ///
    /// An empty list is not considered impossible.
    pub fn is_all_impossible(&self) -> bool {
        !self.criteria.is_empty() && self.criteria.iter().all(Criteria::is_impossible)
    }

    /// The number of criteria in the list.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Whether the list holds no criteria.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// The criteria at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&Criteria> {
        self.criteria.get(index)
    }

    /// Iterates the criteria in order.
    pub fn iter(&self) -> slice::Iter<'_, Criteria> {
        self.criteria.iter()
    }
}

impl fmt::Debug for CriteriaList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.criteria).finish()
    }
}

impl Extend<Criteria> for CriteriaList {
    fn extend<I: IntoIterator<Item = Criteria>>(&mut self, iter: I) {
        self.criteria.extend(iter);
    }
}

impl FromIterator<Criteria> for CriteriaList {
    fn from_iter<I: IntoIterator<Item = Criteria>>(iter: I) -> Self {
        CriteriaList {
            criteria: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CriteriaList {
    type Item = Criteria;
    type IntoIter = std::vec::IntoIter<Criteria>;

    fn into_iter(self) -> Self::IntoIter {
        self.criteria.into_iter()
    }
}

impl<'a> IntoIterator for &'a CriteriaList {
    type Item = &'a Criteria;
    type IntoIter = slice::Iter<'a, Criteria>;

    fn into_iter(self) -> Self::IntoIter {
        self.criteria.iter()
    }
}

impl Add for &CriteriaList {
    type Output = CriteriaList;

    fn add(self, other: &CriteriaList) -> CriteriaList {
        self.concat(other)
    }
}

impl BitOr for &CriteriaList {
    type Output = CriteriaList;

    fn bitor(self, other: &CriteriaList) -> CriteriaList {
        self.or(other)
    }
}

impl BitAnd for &CriteriaList {
    type Output = CriteriaList;

    fn bitand(self, other: &CriteriaList) -> CriteriaList {
        self.and(other)
    }
}

impl BitXor for &CriteriaList {
    type Output = CriteriaList;

    fn bitxor(self, other: &CriteriaList) -> CriteriaList {
        self.xor(other)
    }
}
