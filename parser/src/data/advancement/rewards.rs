//! Reward records decoded from the command lines of a reward function.

use bacap_util::UnlocalizedName;
use serde::Serialize;

use crate::patterns;

/// The kinds of reward a reward function can grant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewardKind {
    /// An experience grant.
    Exp,
    /// A plain item handed to the player.
    Reward,
    /// A trophy item defined by its custom data.
    Trophy,
}

/// A decoded reward of any kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RewardRecord {
    /// An experience grant.
    Exp(Exp),
    /// A plain item reward.
    Reward(Reward),
    /// A trophy.
    Trophy(Trophy),
}

/// An amount of experience granted on completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Exp {
    /// The number of experience points.
    pub amount: u32,
}

/// An item granted on completion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reward {
    /// The granted item.
    pub item: UnlocalizedName,
    /// The component or NBT blob attached to the item, kept exactly as written.
    pub components: Option<String>,
    /// The stack size, one when the command named none.
    pub count: u32,
}

/// A trophy granted on completion.
///
/// A trophy is an item whose identity lives in its custom data, a plain item of the
/// same id is not the same trophy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Trophy {
    /// The item carrying the trophy.
    pub item: UnlocalizedName,
    /// The custom data defining the trophy, kept exactly as written.
    pub data: String,
    /// The stack size, when the command named one.
    pub count: Option<u32>,
}

/// Decodes the first reward of the given kind found in `lines`.
pub fn decode_reward(lines: &[String], kind: RewardKind) -> Option<RewardRecord> {
    match kind {
        RewardKind::Exp => decode_exp(lines).map(RewardRecord::Exp),
        RewardKind::Reward => decode_item_reward(lines).map(RewardRecord::Reward),
        RewardKind::Trophy => decode_trophy(lines).map(RewardRecord::Trophy),
    }
}

/// Decodes an experience grant from the first line that adds experience.
pub fn decode_exp(lines: &[String]) -> Option<Exp> {
    lines
        .iter()
        .find_map(|line| patterns::exp_grant(line))
        .map(|amount| Exp { amount })
}

/// Decodes an item reward.
///
/// `give` commands are checked first, then summoned items for rewards dropped into
/// the world instead of the inventory. A matching line whose item id does not parse
/// is skipped, not a decode failure.
pub fn decode_item_reward(lines: &[String]) -> Option<Reward> {
    lines
        .iter()
        .find_map(|line| {
            let capture = patterns::item_give(line)?;
            Some(Reward {
                item: capture.item.parse().ok()?,
                components: capture.components.map(str::to_owned),
                count: capture.amount.unwrap_or(1),
            })
        })
        .or_else(|| {
            lines.iter().find_map(|line| {
                let capture = patterns::item_summon(line)?;
                Some(Reward {
                    item: patterns::nbt_item_id(capture.nbt)?.parse().ok()?,
                    components: Some(capture.nbt.to_owned()),
                    count: patterns::nbt_item_count(capture.nbt).unwrap_or(1),
                })
            })
        })
}

/// Decodes a trophy.
///
/// Only give commands carrying custom data qualify. Summoned items qualify
/// unconditionally, their whole NBT blob stands in for the custom data.
pub fn decode_trophy(lines: &[String]) -> Option<Trophy> {
    lines
        .iter()
        .find_map(|line| {
            let capture = patterns::trophy_give(line)?;
            Some(Trophy {
                item: capture.item.parse().ok()?,
                data: capture.components?.to_owned(),
                count: capture.amount,
            })
        })
        .or_else(|| {
            lines.iter().find_map(|line| {
                let capture = patterns::trophy_summon(line)?;
                Some(Trophy {
                    item: patterns::nbt_item_id(capture.nbt)?.parse().ok()?,
                    data: capture.nbt.to_owned(),
                    count: patterns::nbt_item_count(capture.nbt),
                })
            })
        })
}
