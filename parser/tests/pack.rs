use std::path::Path;

use bacap_parser::{
    data::{adv_type::AdvTypeManager, advancement::Requirements, tab::TabNameMapper},
    error::PackError,
    Datapack,
    PackConfig,
    Parser,
};
use bacap_util::UnlocalizedName;

fn test_config() -> PackConfig {
    PackConfig {
        reward_namespace: "bc_rewards".to_owned(),
        technical_tabs: vec!["technical".to_owned()],
        tab_name_mapper: TabNameMapper::with_tabs([("story", "Story"), ("stuff", "Stuff")]),
        adv_type_manager: AdvTypeManager::default(),
    }
}

fn read_testpack() -> Datapack {
    Datapack::read(
        Path::new("tests/fixtures/testpack"),
        "testpack",
        test_config(),
    )
    .unwrap()
}

#[test]
fn pack_level_metadata() {
    let pack = read_testpack();

    assert_eq!(pack.name, "testpack");
    assert_eq!(pack.version(), 48);
    assert_eq!(pack.description(), "Test pack");
    assert_eq!(pack.reward_namespace(), "bc_rewards");
    assert_eq!(pack.namespaces, ["bc_rewards", "legacy", "testadv"]);
}

#[test]
fn decodable_advancements_survive_the_read() {
    let pack = read_testpack();

    // root, trophy_time, hidden, all_done, old_school
    assert_eq!(pack.advancements.len(), 5);

    // The file that does not parse is skipped
    assert!(pack.advancements.get("testadv:story/broken").is_none());
    // The advancement naming a nonexistent reward function is dropped
    assert!(pack.advancements.get("testadv:story/dangling").is_none());
}

#[test]
fn rewards_decode_from_the_reward_namespace() {
    let pack = read_testpack();

    let root = pack.advancements.get("testadv:story/root").unwrap();
    assert_eq!(root.exp.map(|exp| exp.amount), Some(100));
    let reward = root.reward.as_ref().unwrap();
    assert_eq!(reward.item, UnlocalizedName::minecraft("diamond"));
    assert_eq!(reward.count, 3);
    assert_eq!(reward.components, None);
    assert!(root.trophy.is_none());

    // The vanilla rewards block is kept alongside the decoded records
    assert_eq!(root.rewards.as_ref().unwrap().experience, Some(5));

    let trophy_time = pack.advancements.get("testadv:story/trophy_time").unwrap();
    assert_eq!(trophy_time.exp.map(|exp| exp.amount), Some(250));
    let trophy = trophy_time.trophy.as_ref().unwrap();
    assert_eq!(trophy.item, UnlocalizedName::minecraft("golden_apple"));
    assert_eq!(trophy.count, Some(1));
    assert!(trophy.data.contains("Apple of Glory"));

    // No rewards block at all on this one
    let hidden = pack.advancements.get("testadv:story/hidden").unwrap();
    assert!(hidden.exp.is_none());
    assert!(hidden.reward.is_none());
    assert!(hidden.trophy.is_none());
}

#[test]
fn plural_directory_spellings_still_read() {
    let pack = read_testpack();

    let old_school = pack.advancements.get("legacy:stuff/old_school").unwrap();
    let reward = old_school.reward.as_ref().unwrap();
    assert_eq!(reward.item, UnlocalizedName::minecraft("writable_book"));
    assert_eq!(reward.count, 1);
    assert!(reward.components.as_deref().unwrap().starts_with("{pages:"));

    let tab = old_school.tab.as_ref().unwrap();
    assert_eq!(tab.display_name.as_deref(), Some("Stuff"));
    assert_eq!(tab.folder_structure, "stuff");
    assert_eq!(tab.internal_name.as_deref(), Some("stuff"));
}

#[test]
fn tabs_and_types_decorate_the_advancements() {
    let pack = read_testpack();

    let root = pack.advancements.get("testadv:story/root").unwrap();
    assert_eq!(root.adv_type.as_deref(), Some("task"));
    assert!(!root.technical);
    let tab = root.tab.as_ref().unwrap();
    assert_eq!(tab.display_name.as_deref(), Some("Story"));
    assert_eq!(tab.folder_structure, "story");
    assert_eq!(tab.internal_name.as_deref(), Some("story"));

    let trophy_time = pack.advancements.get("testadv:story/trophy_time").unwrap();
    assert_eq!(trophy_time.adv_type.as_deref(), Some("super_challenge"));

    let hidden = pack.advancements.get("testadv:story/hidden").unwrap();
    assert_eq!(hidden.adv_type.as_deref(), Some("hidden"));
    assert!(!hidden.technical);
    // No reward function, so no internal name either
    assert_eq!(hidden.tab.as_ref().unwrap().internal_name, None);

    let all_done = pack.advancements.get("testadv:technical/all_done").unwrap();
    assert!(all_done.technical);
    assert_eq!(all_done.adv_type, None);
    let tab = all_done.tab.as_ref().unwrap();
    assert_eq!(tab.display_name, None);
    assert_eq!(tab.internal_name, None);

    assert_eq!(pack.advancements.tabs(), ["story", "stuff", "technical"]);
    assert_eq!(pack.advancements.by_tab("story").count(), 3);
}

#[test]
fn document_fields_and_the_repair_pass() {
    let pack = read_testpack();

    let root = pack.advancements.get("testadv:story/root").unwrap();
    let display = root.display.as_ref().unwrap();
    assert_eq!(display.title.text, "The Test Begins");
    assert_eq!(display.title.color.as_deref(), Some("green"));
    assert!(!display.show_toast);
    assert!(display.announce_to_chat);
    assert_eq!(
        root.requirements,
        Some(Requirements::List(vec![
            "seen_world".to_owned(),
            "joined".to_owned()
        ]))
    );

    let trophy_time = pack.advancements.get("testadv:story/trophy_time").unwrap();
    assert_eq!(
        trophy_time.parent,
        Some("testadv:story/root".parse::<UnlocalizedName>().unwrap())
    );
    assert_eq!(
        trophy_time.requirements,
        Some(Requirements::LogicalList(vec![
            vec!["got_apple".to_owned()],
            vec!["ate_apple".to_owned()]
        ]))
    );
    assert_eq!(trophy_time.criteria.len(), 2);
    assert!(!trophy_time.criteria.is_all_impossible());

    // The escaped apostrophe is stripped by the JSON repair pass
    let hidden = pack.advancements.get("testadv:story/hidden").unwrap();
    let display = hidden.display.as_ref().unwrap();
    assert_eq!(display.title.text, "Cant See Me");
    assert!(display.hidden);
}

#[test]
fn parser_registry_summarizes_its_packs() {
    let mut parser = Parser::new();
    parser.add_datapack(read_testpack());

    assert!(parser.get_datapack("testpack").is_some());
    assert!(parser.get_datapack("other").is_none());
    assert_eq!(parser.datapacks().count(), 1);
    assert_eq!(parser.info(), "Datapacks: 1, Advancements: 5");
}

#[test]
fn structural_problems_fail_the_read() {
    assert!(matches!(
        Datapack::read(Path::new("tests/fixtures"), "none", test_config()).err(),
        Some(PackError::MissingPackMeta)
    ));

    assert!(matches!(
        Datapack::read(Path::new("tests/fixtures/bad_meta"), "bad", test_config()).err(),
        Some(PackError::InvalidPackMeta)
    ));

    assert!(matches!(
        Datapack::read(Path::new("tests/fixtures/no_data"), "empty", test_config()).err(),
        Some(PackError::MissingDataDir)
    ));

    let config = PackConfig {
        reward_namespace: "treasure".to_owned(),
        ..test_config()
    };
    match Datapack::read(Path::new("tests/fixtures/testpack"), "testpack", config).err() {
        Some(PackError::MissingRewardNamespace {
            requested,
            available,
        }) => {
            assert_eq!(requested, "treasure");
            assert_eq!(available, ["bc_rewards", "legacy", "testadv"]);
        }
        other => panic!("expected a missing namespace error, got {:?}", other),
    }
}

#[test]
fn error_messages_name_the_problem() {
    assert_eq!(
        PackError::MissingPackMeta.to_string(),
        "pack.mcmeta not found in the datapack root, maybe this is a wrong path"
    );
    assert_eq!(
        PackError::InvalidPackMeta.to_string(),
        "Failed to parse pack.mcmeta"
    );
    assert_eq!(
        PackError::MissingDataDir.to_string(),
        "data folder does not exist"
    );
}
