//! Table caption

use serde::Deserialize;
use serde::Serialize;

use crate::column::Alignment;

/// Where a caption sits: above or below the table, and its text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaptionAlignment {
    TopLeft,
    #[default]
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl CaptionAlignment {
    /// Returns `true` if the caption goes above the table.
    pub fn is_top(&self) -> bool {
        matches!(
            self,
            CaptionAlignment::TopLeft | CaptionAlignment::TopCenter | CaptionAlignment::TopRight
        )
    }

    /// Horizontal part of the alignment.
    pub fn horizontal(&self) -> Alignment {
        match self {
            CaptionAlignment::TopLeft | CaptionAlignment::BottomLeft => Alignment::Left,
            CaptionAlignment::TopCenter | CaptionAlignment::BottomCenter => Alignment::Center,
            CaptionAlignment::TopRight | CaptionAlignment::BottomRight => Alignment::Right,
        }
    }
}

/// Caption text and its placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caption {
    pub value: String,
    #[serde(default)]
    pub alignment: CaptionAlignment,
}

impl Caption {
    /// Creates a top-center caption.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            alignment: CaptionAlignment::default(),
        }
    }

    /// Sets the placement.
    pub fn align(mut self, alignment: CaptionAlignment) -> Self {
        self.alignment = alignment;
        self
    }
}
