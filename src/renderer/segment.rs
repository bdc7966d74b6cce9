// ABOUTME: Rendered output types shared by the renderer and its consumers
// ABOUTME: Defines the styled segment value type and the render context mapping

use std::collections::HashMap;

use crate::catalog::SegmentStyles;

/// Variable name to value mapping used during rendering. Built from user
/// input, script output, or a merge of both; script output supersedes.
pub type RenderContext = HashMap<String, String>;

/// A contiguous run of rendered text sharing one style attribute set.
///
/// Produced transiently by the renderer; consumers (preview, device adapter)
/// take ownership of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSegment {
    pub text: String,
    pub styles: SegmentStyles,
}

impl StyledSegment {
    pub fn new(text: impl Into<String>, styles: SegmentStyles) -> Self {
        Self {
            text: text.into(),
            styles,
        }
    }
}
