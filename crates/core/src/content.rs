//! Content blocks attached to a pin.
//!
//! A pin carries an ordered sequence of blocks; each block has a kind,
//! a value (text body or media URL) and an optional caption. The array
//! order is the display order.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The kind of a content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentBlockKind {
    Text,
    Image,
    Video,
    Document,
}

impl ContentBlockKind {
    /// All kinds, in the default display order.
    pub const ALL: [ContentBlockKind; 4] = [
        ContentBlockKind::Text,
        ContentBlockKind::Image,
        ContentBlockKind::Video,
        ContentBlockKind::Document,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentBlockKind::Text => "text",
            ContentBlockKind::Image => "image",
            ContentBlockKind::Video => "video",
            ContentBlockKind::Document => "document",
        }
    }
}

/// One block of pin content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub kind: ContentBlockKind,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Validate a block sequence: every block must carry a non-empty value.
///
/// Kind membership is already enforced by deserialization; this catches
/// the structurally-valid-but-empty case.
pub fn validate_content(blocks: &[ContentBlock]) -> Result<(), CoreError> {
    for (i, block) in blocks.iter().enumerate() {
        if block.value.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "content block {i} ({}) has an empty value",
                block.kind.as_str()
            )));
        }
    }
    Ok(())
}
