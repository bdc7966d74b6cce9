// ABOUTME: Template renderer expanding placeholders and inline markup into segments
// ABOUTME: Applies variable substitution, bold markup splitting, and accent folding

use regex::Regex;
use tracing::debug;

use super::error::{RenderError, Result};
use super::fold::fold_accents;
use super::segment::{RenderContext, StyledSegment};
use crate::catalog::{SegmentStyles, TemplateDefinition};

const BOLD_MARKER: &str = "**";

/// Renders a template definition against a resolved context.
///
/// Rendering is a pure function of its inputs: the same template and context
/// always produce the same segment sequence.
pub struct TemplateRenderer {
    fold_accents: bool,
    placeholder: Regex,
}

impl TemplateRenderer {
    pub fn new(fold_accents: bool) -> Self {
        let placeholder = Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}")
            .expect("placeholder pattern is valid");
        Self {
            fold_accents,
            placeholder,
        }
    }

    /// Render `template` into an ordered sequence of styled segments.
    ///
    /// Any placeholder referencing a variable absent from `context` aborts the
    /// whole render; no partial segment list is returned.
    pub fn render(
        &self,
        template: &TemplateDefinition,
        context: &RenderContext,
    ) -> Result<Vec<StyledSegment>> {
        let mut segments = Vec::new();
        for raw in &template.segments {
            let substituted = self.substitute(&template.key, &raw.text, context)?;
            if raw.markdown {
                parse_markup(&substituted, raw.styles, &mut segments);
            } else {
                segments.push(StyledSegment::new(substituted, raw.styles));
            }
        }

        if self.fold_accents {
            for segment in &mut segments {
                segment.text = fold_accents(&segment.text);
            }
        }

        debug!(
            "Rendered template '{}' into {} segments",
            template.key,
            segments.len()
        );
        Ok(segments)
    }

    fn substitute(&self, template_key: &str, text: &str, context: &RenderContext) -> Result<String> {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for caps in self.placeholder.captures_iter(text) {
            let whole = caps.get(0).unwrap();
            let name = &caps[1];
            let value = context
                .get(name)
                .ok_or_else(|| RenderError::MissingVariable {
                    template: template_key.to_string(),
                    variable: name.to_string(),
                })?;
            out.push_str(&text[last..whole.start()]);
            out.push_str(value);
            last = whole.end();
        }
        out.push_str(&text[last..]);
        Ok(out)
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Split substituted text into styled segments at markup boundaries.
///
/// Each logical line is parsed separately and a standalone `"\n"` segment is
/// emitted between lines; a trailing newline does not produce one.
fn parse_markup(text: &str, base: SegmentStyles, out: &mut Vec<StyledSegment>) {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push(StyledSegment::new("\n", base));
        }
        parse_markup_line(line, base, out);
    }
}

/// Parse `**bold**` spans inside one line.
///
/// A stray opening marker with no matching close is literal text, never an
/// error.
fn parse_markup_line(line: &str, base: SegmentStyles, out: &mut Vec<StyledSegment>) {
    let mut rest = line;
    while let Some(open) = rest.find(BOLD_MARKER) {
        let after_open = open + BOLD_MARKER.len();
        let Some(close) = rest[after_open..].find(BOLD_MARKER) else {
            break;
        };
        if open > 0 {
            out.push(StyledSegment::new(&rest[..open], base));
        }
        let inner = &rest[after_open..after_open + close];
        if !inner.is_empty() {
            out.push(StyledSegment::new(inner, base.with_bold()));
        }
        rest = &rest[after_open + close + BOLD_MARKER.len()..];
    }
    if !rest.is_empty() {
        out.push(StyledSegment::new(rest, base));
    }
}
