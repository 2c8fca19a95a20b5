use bacap_parser::data::advancement::rewards::{
    decode_exp,
    decode_item_reward,
    decode_reward,
    decode_trophy,
    Exp,
    Reward,
    RewardKind,
    RewardRecord,
};
use bacap_util::UnlocalizedName;

fn lines(commands: &[&str]) -> Vec<String> {
    commands.iter().map(|line| (*line).to_owned()).collect()
}

#[test]
fn experience_comes_from_the_first_grant() {
    let function = lines(&[
        "tellraw @a {\"text\":\"done\"}",
        "xp add @s 50",
        "xp add @s 9000",
    ]);

    assert_eq!(decode_exp(&function), Some(Exp { amount: 50 }));
    assert_eq!(
        decode_reward(&function, RewardKind::Exp),
        Some(RewardRecord::Exp(Exp { amount: 50 }))
    );

    assert_eq!(decode_exp(&lines(&["say nothing here"])), None);
}

#[test]
fn item_rewards_prefer_give_commands() {
    let function = lines(&["xp add @s 100", "give @s minecraft:diamond 3"]);

    let reward = decode_item_reward(&function).unwrap();
    assert_eq!(reward.item, UnlocalizedName::minecraft("diamond"));
    assert_eq!(reward.components, None);
    assert_eq!(reward.count, 3);
}

#[test]
fn component_blobs_survive_verbatim() {
    let function = lines(&[
        r#"give @s minecraft:written_book{display:{Name:'{"text":"Tales"}'},pages:['{"text":"p1"}']}"#,
    ]);

    let reward = decode_item_reward(&function).unwrap();
    assert_eq!(reward.item, UnlocalizedName::minecraft("written_book"));
    assert_eq!(
        reward.components.as_deref(),
        Some(r#"{display:{Name:'{"text":"Tales"}'},pages:['{"text":"p1"}']}"#)
    );
    // The command carries no trailing amount
    assert_eq!(reward.count, 1);
}

#[test]
fn summoned_items_are_the_fallback() {
    let function = lines(&[
        "say dropping your reward",
        r#"summon minecraft:item ~ ~1 ~ {Item:{id:"minecraft:golden_apple",Count:2b}}"#,
    ]);

    let reward = decode_item_reward(&function).unwrap();
    assert_eq!(reward.item, UnlocalizedName::minecraft("golden_apple"));
    assert_eq!(reward.count, 2);
    assert!(reward.components.as_deref().unwrap().starts_with("{Item:"));
}

#[test]
fn trophies_require_custom_data() {
    assert_eq!(decode_trophy(&lines(&["give @s minecraft:diamond 3"])), None);

    let give = lines(&[
        r#"give @p minecraft:golden_apple{display:{Name:'{"text":"Apple of Glory"}'}} 1"#,
    ]);
    let trophy = decode_trophy(&give).unwrap();
    assert_eq!(trophy.item, UnlocalizedName::minecraft("golden_apple"));
    assert_eq!(trophy.count, Some(1));
    assert!(trophy.data.contains("Apple of Glory"));
    assert!(matches!(
        decode_reward(&give, RewardKind::Trophy),
        Some(RewardRecord::Trophy(_))
    ));

    let summon = lines(&[
        r#"summon minecraft:item ~ ~ ~ {Item:{id:"minecraft:trident",tag:{Trophy:1b}}}"#,
    ]);
    let trophy = decode_trophy(&summon).unwrap();
    assert_eq!(trophy.item, UnlocalizedName::minecraft("trident"));
    assert_eq!(trophy.data, r#"{Item:{id:"minecraft:trident",tag:{Trophy:1b}}}"#);
    // The blob names no count
    assert_eq!(trophy.count, None);
}

#[test]
fn unmatched_lines_are_skipped_not_errors() {
    let function = lines(&[
        "advancement grant @s only minecraft:story/root",
        "scoreboard players add @s bac_advancements 1",
        "give @s minecraft:emerald",
    ]);

    let reward = decode_item_reward(&function).unwrap();
    assert_eq!(reward.item, UnlocalizedName::minecraft("emerald"));
    assert_eq!(reward.count, 1);

    assert_eq!(decode_exp(&function), None);
    assert_eq!(decode_trophy(&function), None);
}

#[test]
fn records_serialize_with_plain_item_ids() {
    let reward = Reward {
        item: UnlocalizedName::minecraft("diamond"),
        components: None,
        count: 3,
    };

    let json = serde_json::to_value(&reward).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"item": "minecraft:diamond", "components": null, "count": 3})
    );
}
