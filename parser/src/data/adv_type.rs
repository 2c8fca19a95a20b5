use crate::data::advancement::display::{Display, Frame};

/// A classification of advancements by how their display is styled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdvType {
    /// The name this type is known by.
    pub name: String,
    /// The frame the display must use.
    pub frame: Frame,
    /// The title color the display must use, or `None` to accept any color.
    pub color: Option<String>,
}

impl AdvType {
    /// Creates a type matching a frame regardless of title color.
    pub fn new(name: &str, frame: Frame) -> AdvType {
        AdvType {
            name: name.to_owned(),
            frame,
            color: None,
        }
    }

    /// Creates a type matching a frame and an exact title color.
    pub fn colored(name: &str, frame: Frame, color: &str) -> AdvType {
        AdvType {
            name: name.to_owned(),
            frame,
            color: Some(color.to_owned()),
        }
    }
}

/// The registry of advancement types a pack distinguishes.
#[derive(Clone, Debug)]
pub struct AdvTypeManager {
    types: Vec<AdvType>,
}

impl AdvTypeManager {
    /// Creates a registry holding the standard BACAP type set.
    pub fn bacap() -> AdvTypeManager {
        Self::with_types(vec![
            AdvType::new("task", Frame::Task),
            AdvType::new("goal", Frame::Goal),
            AdvType::new("challenge", Frame::Challenge),
            AdvType::colored("super_challenge", Frame::Challenge, "dark_red"),
            AdvType::colored("milestone", Frame::Challenge, "light_purple"),
            AdvType::colored("hidden", Frame::Task, "gray"),
        ])
    }

    /// Creates a registry from custom types.
    pub fn with_types(types: Vec<AdvType>) -> AdvTypeManager {
        AdvTypeManager { types }
    }

    /// Identifies the type of a display.
    ///
    /// A type pinning the display's exact title color wins over one that accepts any
    /// color, so a dark red challenge identifies as a super challenge rather than a
    /// plain challenge.
    pub fn identify(&self, display: &Display) -> Option<&AdvType> {
        let color = display.title.color.as_deref();

        self.types
            .iter()
            .find(|ty| {
                ty.frame == display.frame && ty.color.is_some() && ty.color.as_deref() == color
            })
            .or_else(|| {
                self.types
                    .iter()
                    .find(|ty| ty.frame == display.frame && ty.color.is_none())
            })
    }
}

impl Default for AdvTypeManager {
    fn default() -> Self {
        Self::bacap()
    }
}
