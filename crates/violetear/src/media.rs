//! Media Scopes
//!
//! A nested sheet rendered inside an `@media(...)` block.

use std::collections::HashSet;

use crate::CssError;
use crate::config::RenderOptions;
use crate::render::RenderContext;
use crate::style::{Style, StyleRef};
use crate::stylesheet::{Entries, Entry, SheetId};

/// Styles restricted to a viewport-width range
#[derive(Debug)]
pub struct MediaSet {
    entries: Entries,
    min_width: Option<u32>,
    max_width: Option<u32>,
    /// Sheet this set was created in
    owner: SheetId,
}

impl MediaSet {
    pub(crate) fn new(owner: SheetId, min_width: Option<u32>, max_width: Option<u32>) -> Self {
        Self {
            entries: Entries::new(),
            min_width,
            max_width,
            owner,
        }
    }

    pub fn id(&self) -> SheetId {
        self.entries.sheet()
    }

    pub fn owner(&self) -> SheetId {
        self.owner
    }

    pub fn min_width(&self) -> Option<u32> {
        self.min_width
    }

    pub fn max_width(&self) -> Option<u32> {
        self.max_width
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.len() == 0
    }

    pub(crate) fn entries(&self) -> &Entries {
        &self.entries
    }

    pub fn items(&self) -> impl Iterator<Item = Entry<'_>> {
        self.entries.iter()
    }

    pub fn style(&mut self, classes: &[&str]) -> &mut Style {
        self.entries.style(None, classes)
    }

    pub fn style_with_id(&mut self, id: &str, classes: &[&str]) -> &mut Style {
        self.entries.style(Some(id), classes)
    }

    /// Append a style built outside the set
    pub fn push(&mut self, style: Style) -> &mut Style {
        self.entries.push(style)
    }

    /// Nested scope
    pub fn media(&mut self, min_width: Option<u32>, max_width: Option<u32>) -> &mut MediaSet {
        self.entries.media(min_width, max_width)
    }

    pub fn redefine(&mut self, parent: &StyleRef) -> &mut Style {
        self.entries.redefine(parent)
    }

    pub fn lookup(&mut self, key: &str) -> Result<&mut Style, CssError> {
        self.entries.lookup(key)
    }

    pub fn get(&self, key: &str) -> Option<&Style> {
        self.entries.get(key)
    }

    /// Condition text: `min-width: 600px, max-width: 900px`
    pub fn query(&self) -> String {
        let mut query = Vec::new();
        if let Some(min) = self.min_width {
            query.push(format!("min-width: {}px", min));
        }
        if let Some(max) = self.max_width {
            query.push(format!("max-width: {}px", max));
        }
        query.join(", ")
    }

    /// Render this block on its own at `indent` levels
    pub fn render_block(
        &self,
        indent: usize,
        options: &RenderOptions,
    ) -> Result<String, CssError> {
        let mut used = HashSet::new();
        self.entries.collect_used(&mut used);

        let ctx = RenderContext { options, used };
        let mut out = String::new();
        self.render_into(&mut out, indent, &ctx)?;
        Ok(out)
    }

    pub(crate) fn render_into(
        &self,
        out: &mut String,
        indent: usize,
        ctx: &RenderContext<'_>,
    ) -> Result<(), CssError> {
        let pad = " ".repeat(indent * ctx.options.indent_width);

        out.push_str(&format!("{}@media({}){{\n", pad, self.query()));
        self.entries.render(out, indent + 1, ctx)?;
        out.push_str(&pad);
        out.push('}');
        Ok(())
    }
}
