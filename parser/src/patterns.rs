//! The fixed set of extraction rules reward decoding runs over command lines.
//!
//! Each rule maps one command line to an optional capture. Rules never fail, a line
//! that does not fit simply captures nothing.

use once_cell::sync::Lazy;
use regex::Regex;

static EXP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bxp add @s (\d+)").unwrap());
static GIVE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bgive @\w+\s+").unwrap());
static SUMMON_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bsummon minecraft:item\b").unwrap());
static NBT_ID_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\bid:\s*"([^"]+)""#).unwrap());
static NBT_COUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[Cc]ount:\s*(\d+)").unwrap());

/// Fields captured from a `give` command.
pub struct GiveCapture<'a> {
    /// The item identifier exactly as written, namespace included.
    pub item: &'a str,
    /// The component or NBT blob attached to the item, delimiters included.
    pub components: Option<&'a str>,
    /// The trailing amount, when the command has one.
    pub amount: Option<u32>,
}

/// Fields captured from a `summon minecraft:item` command.
pub struct SummonCapture<'a> {
    /// The entity NBT blob, braces included.
    pub nbt: &'a str,
}

/// Extracts the amount from an `xp add @s <amount>` command.
pub fn exp_grant(line: &str) -> Option<u32> {
    EXP_PATTERN
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|amount| amount.as_str().parse().ok())
}

/// Extracts the item, components, and amount from a `give` command.
///
/// The component blob is scanned to its matching closing delimiter, so nested
/// component and NBT payloads survive intact. Captures nothing when the line is not
/// a give command or its blob never closes.
pub fn item_give(line: &str) -> Option<GiveCapture<'_>> {
    let rest = &line[GIVE_PATTERN.find(line)?.end() ..];

    // The item id runs until whitespace or an attached blob
    let id_end = rest
        .find(|ch: char| ch.is_ascii_whitespace() || ch == '[' || ch == '{')
        .unwrap_or(rest.len());
    let item = &rest[.. id_end];
    if item.is_empty() {
        return None;
    }

    let mut tail = &rest[id_end ..];
    let mut components = None;
    if tail.starts_with('[') || tail.starts_with('{') {
        let blob = balanced_span(tail)?;
        components = Some(blob);
        tail = &tail[blob.len() ..];
    }

    Some(GiveCapture {
        item,
        components,
        amount: leading_number(tail.trim_start()),
    })
}

/// Like [item_give], but the component blob is required.
///
/// A bare give line never counts as a trophy, trophies are defined by their custom
/// data.
pub fn trophy_give(line: &str) -> Option<GiveCapture<'_>> {
    item_give(line).filter(|capture| capture.components.is_some())
}

/// Extracts the NBT blob from a `summon minecraft:item` command.
///
/// The blob spans from the first brace after the summon prefix to its matching close.
pub fn item_summon(line: &str) -> Option<SummonCapture<'_>> {
    let after = SUMMON_PATTERN.find(line)?.end();
    let brace = line[after ..].find('{')?;
    let nbt = balanced_span(&line[after + brace ..])?;
    Some(SummonCapture { nbt })
}

/// Same capture as [item_summon], kept as its own rule because trophies are decoded
/// in a different context.
pub fn trophy_summon(line: &str) -> Option<SummonCapture<'_>> {
    item_summon(line)
}

/// Pulls the item id out of a summoned item's NBT blob.
pub fn nbt_item_id(nbt: &str) -> Option<&str> {
    NBT_ID_PATTERN
        .captures(nbt)
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str())
}

/// Pulls the stack count out of a summoned item's NBT blob.
pub fn nbt_item_count(nbt: &str) -> Option<u32> {
    NBT_COUNT_PATTERN
        .captures(nbt)
        .and_then(|caps| caps.get(1))
        .and_then(|count| count.as_str().parse().ok())
}

/// Returns the prefix of `text` that spans from its opening delimiter to the matching
/// closing delimiter.
///
/// `text` must start with `{` or `[`. Nested delimiters are tracked, and delimiters
/// inside single or double quoted strings are ignored, with `\` escaping the next
/// character inside quotes. Returns `None` when the delimiters never balance.
pub fn balanced_span(text: &str) -> Option<&str> {
    if !(text.starts_with('{') || text.starts_with('[')) {
        return None;
    }

    let mut closers = Vec::new();
    let mut quote = None;
    let mut escaped = false;

    for (index, ch) in text.char_indices() {
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == open {
                quote = None;
            }
            continue;
        }

        match ch {
            '\'' | '"' => quote = Some(ch),
            '{' => closers.push('}'),
            '[' => closers.push(']'),
            '}' | ']' => {
                if closers.pop() != Some(ch) {
                    return None;
                }
                if closers.is_empty() {
                    return Some(&text[..= index]);
                }
            }
            _ => {}
        }
    }

    None
}

// Parses the run of digits at the start of `text`, if any
fn leading_number(text: &str) -> Option<u32> {
    let end = text
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(text.len());
    if end == 0 {
        None
    } else {
        text[.. end].parse().ok()
    }
}

#[test]
fn balanced_span_tracks_nesting() {
    let blob = "{display:{Name:{text:\"X\"}},tag:{a:[1,2,{b:3}]}}";
    assert_eq!(balanced_span(blob), Some(blob));

    let with_tail = "{a:{b:{c:1}}} 4";
    assert_eq!(balanced_span(with_tail), Some("{a:{b:{c:1}}}"));
}

#[test]
fn balanced_span_ignores_quoted_delimiters() {
    let blob = r#"{Name:'{"text":"}{"}',other:"]["}"#;
    assert_eq!(balanced_span(blob), Some(blob));

    let escaped = r#"{Name:"quote \" brace }",n:1}"#;
    assert_eq!(balanced_span(escaped), Some(escaped));
}

#[test]
fn balanced_span_rejects_unbalanced_input() {
    assert_eq!(balanced_span("{a:{b:1}"), None);
    assert_eq!(balanced_span("{a:1]"), None);
    assert_eq!(balanced_span("plain text"), None);
    assert_eq!(balanced_span("{unterminated:'quote}"), None);
}

#[test]
fn give_capture_shapes() {
    let plain = item_give("give @s minecraft:diamond 3").unwrap();
    assert_eq!(plain.item, "minecraft:diamond");
    assert!(plain.components.is_none());
    assert_eq!(plain.amount, Some(3));

    let nested = item_give(r#"give @s minecraft:diamond{display:{Name:'{"text":"X"}'}} "#).unwrap();
    assert_eq!(nested.item, "minecraft:diamond");
    assert_eq!(nested.components, Some(r#"{display:{Name:'{"text":"X"}'}}"#));
    assert_eq!(nested.amount, None);

    let component_era = item_give(r#"give @p bacap:trophy[custom_name='{"text":"T"}'] 2"#).unwrap();
    assert_eq!(component_era.item, "bacap:trophy");
    assert_eq!(component_era.components, Some(r#"[custom_name='{"text":"T"}']"#));
    assert_eq!(component_era.amount, Some(2));

    assert!(item_give("tellraw @s {\"text\":\"hi\"}").is_none());
    assert!(item_give("forgive @s minecraft:diamond").is_none());
}

#[test]
fn trophy_give_requires_components() {
    assert!(trophy_give("give @s minecraft:diamond 3").is_none());
    assert!(trophy_give(r#"give @s minecraft:diamond{tag:1b} 3"#).is_some());
}

#[test]
fn summon_capture() {
    let line = r#"summon minecraft:item ~ ~1 ~ {Item:{id:"minecraft:cake",Count:1b}}"#;
    let capture = item_summon(line).unwrap();
    assert_eq!(capture.nbt, r#"{Item:{id:"minecraft:cake",Count:1b}}"#);
    assert_eq!(nbt_item_id(capture.nbt), Some("minecraft:cake"));
    assert_eq!(nbt_item_count(capture.nbt), Some(1));

    assert!(item_summon("summon minecraft:item_frame ~ ~ ~ {Fixed:1b}").is_none());
}

#[test]
fn exp_amounts() {
    assert_eq!(exp_grant("xp add @s 50"), Some(50));
    assert_eq!(exp_grant("execute as @a run xp add @s 1000"), Some(1000));
    assert_eq!(exp_grant("xp add @s fifty"), None);
    assert_eq!(exp_grant("xp add @a 50"), None);
}
