//! The display block of an advancement document.

use bacap_util::UnlocalizedName;
use serde::Serialize;
use serde_json::Value;

use crate::{
    error::AdvancementError,
    json::{JsonObject, JsonObjectExt},
};

/// How an advancement is presented in the game's advancement screen.
#[derive(Clone, Debug, Serialize)]
pub struct Display {
    /// The item rendered as the advancement's icon.
    pub icon: Option<Icon>,
    /// The advancement's title.
    pub title: DisplayText,
    /// The advancement's description.
    pub description: DisplayText,
    /// The frame drawn around the icon.
    pub frame: Frame,
    /// The background texture, only meaningful on tab roots.
    pub background: Option<String>,
    /// Whether completing the advancement pops a toast.
    pub show_toast: bool,
    /// Whether completing the advancement is announced in chat.
    pub announce_to_chat: bool,
    /// Whether the advancement is hidden until completed.
    pub hidden: bool,
}

impl Display {
    /// Decodes the `display` object of an advancement document.
    ///
    /// `title` and `description` are required, everything else falls back to the
    /// game's defaults when missing or malformed.
    pub fn from_object(object: &JsonObject) -> Result<Display, AdvancementError> {
        let title = object.get("title").ok_or(AdvancementError::MissingTitle)?;
        let description = object
            .get("description")
            .ok_or(AdvancementError::MissingDescription)?;

        Ok(Display {
            icon: object.object_field("icon").and_then(Icon::from_object),
            title: DisplayText::flatten(title),
            description: DisplayText::flatten(description),
            frame: object
                .str_field("frame")
                .and_then(Frame::from_name)
                .unwrap_or_default(),
            background: object.str_field("background").map(str::to_owned),
            show_toast: object.bool_field("show_toast").unwrap_or(true),
            announce_to_chat: object.bool_field("announce_to_chat").unwrap_or(true),
            hidden: object.bool_field("hidden").unwrap_or(false),
        })
    }
}

/// The icon of an advancement display.
#[derive(Clone, Debug, Serialize)]
pub struct Icon {
    /// The item shown in the advancement screen.
    pub item: UnlocalizedName,
    /// Raw NBT attached to the icon item, kept as written.
    pub nbt: Option<String>,
}

impl Icon {
    /// Decodes an icon object, reading the item from `item` or the newer `id` key.
    pub fn from_object(object: &JsonObject) -> Option<Icon> {
        let item = object
            .str_field("item")
            .or_else(|| object.str_field("id"))?
            .parse()
            .ok()?;

        Some(Icon {
            item,
            nbt: object.str_field("nbt").map(str::to_owned),
        })
    }
}

/// The frame drawn around an advancement's icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frame {
    /// The square frame of a regular advancement.
    Task,
    /// The rounded frame of a goal.
    Goal,
    /// The spiked frame of a challenge.
    Challenge,
}

impl Frame {
    /// Looks a frame up by its name in advancement documents.
    pub fn from_name(name: &str) -> Option<Frame> {
        match name {
            "task" => Some(Frame::Task),
            "goal" => Some(Frame::Goal),
            "challenge" => Some(Frame::Challenge),
            _ => None,
        }
    }

    /// The name this frame carries in advancement documents.
    pub fn name(&self) -> &'static str {
        match self {
            Frame::Task => "task",
            Frame::Goal => "goal",
            Frame::Challenge => "challenge",
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Frame::Task
    }
}

/// A text component flattened to its visible text and leading color.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DisplayText {
    /// The concatenated plain text of the component tree.
    pub text: String,
    /// The first color named anywhere in the component tree.
    pub color: Option<String>,
}

impl DisplayText {
    /// Flattens a raw text component.
    ///
    /// Components come in many shapes: a bare string, a number, an object with a
    /// `text` field, or an array of any of these. Text is concatenated in document
    /// order, and the first `color` found anywhere in the tree wins.
    pub fn flatten(component: &Value) -> DisplayText {
        let mut flattened = DisplayText::default();
        flattened.push(component);
        flattened
    }

    fn push(&mut self, component: &Value) {
        match component {
            Value::String(text) => self.text.push_str(text),
            Value::Number(number) => self.text.push_str(&number.to_string()),
            Value::Bool(flag) => self.text.push_str(if *flag { "true" } else { "false" }),
            Value::Array(parts) => {
                for part in parts {
                    self.push(part);
                }
            }
            Value::Object(part) => {
                if let Some(color) = part.str_field("color") {
                    if self.color.is_none() {
                        self.color = Some(color.to_owned());
                    }
                }
                if let Some(text) = part.str_field("text") {
                    self.text.push_str(text);
                }
                if let Some(extra) = part.get("extra") {
                    self.push(extra);
                }
            }
            Value::Null => {}
        }
    }
}
