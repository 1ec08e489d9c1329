use glam::Vec2;

use crate::color::Color;

/// One line of tooltip text. `color` tints the line with the series color in
/// multi-series tooltips.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipLine {
    pub label: String,
    pub value: String,
    pub color: Option<Color>,
}

impl TooltipLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            color: None,
        }
    }

    pub fn colored(label: impl Into<String>, value: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            color: Some(color),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipContent {
    pub lines: Vec<TooltipLine>,
}

impl TooltipContent {
    pub fn new(lines: Vec<TooltipLine>) -> Self {
        Self { lines }
    }
}

/// Ephemeral hover state, owned per chart instance. Two states only; resets
/// to `Hidden` whenever the dataset changes.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TooltipState {
    #[default]
    Hidden,
    Shown {
        content: TooltipContent,
        position: Vec2,
    },
}

impl TooltipState {
    pub fn is_visible(&self) -> bool {
        matches!(self, TooltipState::Shown { .. })
    }

    pub fn position(&self) -> Option<Vec2> {
        match self {
            TooltipState::Hidden => None,
            TooltipState::Shown { position, .. } => Some(*position),
        }
    }

    pub fn content(&self) -> Option<&TooltipContent> {
        match self {
            TooltipState::Hidden => None,
            TooltipState::Shown { content, .. } => Some(content),
        }
    }
}
