//! Stylesheets
//!
//! An ordered list of styles and media scopes. Entries render in the order
//! they were added, so later entries win the cascade.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::CssError;
use crate::config::{Clock, RenderOptions, SystemClock};
use crate::media::MediaSet;
use crate::render::{self, Output, RenderContext};
use crate::selector::{KEY_SEPARATOR, Selector};
use crate::style::{Style, StyleRef};

static NEXT_SHEET: AtomicU32 = AtomicU32::new(0);

/// Identity of a stylesheet or media set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetId(u32);

impl SheetId {
    pub(crate) fn next() -> Self {
        Self(NEXT_SHEET.fetch_add(1, Ordering::Relaxed))
    }
}

/// Identity of a style: owning sheet plus entry position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleId {
    sheet: SheetId,
    index: u32,
}

impl StyleId {
    pub(crate) fn new(sheet: SheetId, index: u32) -> Self {
        Self { sheet, index }
    }

    pub fn sheet(&self) -> SheetId {
        self.sheet
    }
}

/// Top-level entry of a sheet
#[derive(Debug, Clone, Copy)]
pub enum Entry<'a> {
    Style(&'a Style),
    Media(&'a MediaSet),
}

impl Entry<'_> {
    /// Render into `out`. Returns false when the entry was pruned.
    pub(crate) fn render(
        &self,
        out: &mut String,
        indent: usize,
        ctx: &RenderContext<'_>,
    ) -> Result<bool, CssError> {
        match self {
            Self::Style(style) => {
                if !ctx.is_emitted(style.origin()) {
                    return Ok(false);
                }
                out.push_str(&style.render_block(indent, ctx.options.indent_width)?);
                Ok(true)
            }
            Self::Media(media) => {
                media.render_into(out, indent, ctx)?;
                Ok(true)
            }
        }
    }
}

/// Position of an entry in its typed storage
#[derive(Debug, Clone, Copy)]
enum Slot {
    Style(usize),
    Media(usize),
}

/// Entry list with class-name registry and used tracking
#[derive(Debug)]
pub(crate) struct Entries {
    sheet: SheetId,
    styles: Vec<Style>,
    media: Vec<MediaSet>,
    order: Vec<Slot>,
    /// Class list -> index into `styles`
    by_class: HashMap<Vec<String>, usize>,
    used: HashSet<StyleId>,
}

impl Entries {
    pub fn new() -> Self {
        Self {
            sheet: SheetId::next(),
            styles: Vec::new(),
            media: Vec::new(),
            order: Vec::new(),
            by_class: HashMap::new(),
            used: HashSet::new(),
        }
    }

    pub fn sheet(&self) -> SheetId {
        self.sheet
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entry<'_>> {
        self.order.iter().map(|slot| match *slot {
            Slot::Style(index) => Entry::Style(&self.styles[index]),
            Slot::Media(index) => Entry::Media(&self.media[index]),
        })
    }

    fn next_id(&self) -> StyleId {
        StyleId::new(self.sheet, self.order.len() as u32)
    }

    /// Class name for entries registered without one
    fn generated_name(&self) -> String {
        format!("_c{}", self.order.len())
    }

    pub fn style(&mut self, id: Option<&str>, classes: &[&str]) -> &mut Style {
        let classes: Vec<String> = classes
            .iter()
            .filter(|c| !c.is_empty())
            .map(|c| c.to_string())
            .collect();

        let selector = match Selector::new(id, classes.iter().cloned()) {
            Ok(selector) => selector,
            Err(_) => Selector::class(self.generated_name()),
        };

        let style = Style::registered(self.next_id(), Rc::new(selector));
        self.register(classes, style)
    }

    /// Append a style built elsewhere, registered under its own class list
    pub fn push(&mut self, mut style: Style) -> &mut Style {
        style.adopt(self.next_id());
        let classes = style.selector().class_names().to_vec();
        self.register(classes, style)
    }

    /// Append `style`, keyed by `classes` or by a generated name when there are none
    fn register(&mut self, classes: Vec<String>, style: Style) -> &mut Style {
        let key = if classes.is_empty() {
            vec![self.generated_name()]
        } else {
            classes
        };

        tracing::trace!(
            "Registering style {} as {}",
            style.selector(),
            key.join(KEY_SEPARATOR)
        );
        self.by_class.insert(key, self.styles.len());
        self.append_style(style)
    }

    pub fn media(&mut self, min_width: Option<u32>, max_width: Option<u32>) -> &mut MediaSet {
        let index = self.media.len();
        self.media.push(MediaSet::new(self.sheet, min_width, max_width));
        self.order.push(Slot::Media(index));
        &mut self.media[index]
    }

    pub fn redefine(&mut self, parent: &StyleRef) -> &mut Style {
        tracing::trace!("Redefining style {}", parent.selector());
        let style = Style::redefinition(self.next_id(), parent);
        self.append_style(style)
    }

    fn append_style(&mut self, style: Style) -> &mut Style {
        let index = self.styles.len();
        self.styles.push(style);
        self.order.push(Slot::Style(index));
        &mut self.styles[index]
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        let classes: Vec<String> = key.split(KEY_SEPARATOR).map(str::to_string).collect();
        self.by_class.get(&classes).copied()
    }

    pub fn lookup(&mut self, key: &str) -> Result<&mut Style, CssError> {
        let style = self
            .index_of(key)
            .and_then(|index| self.styles.get_mut(index))
            .ok_or_else(|| CssError::UnknownStyle(key.to_string()))?;

        tracing::trace!("Lookup {} -> {}", key, style.selector());
        self.used.insert(style.id());
        Ok(style)
    }

    pub fn get(&self, key: &str) -> Option<&Style> {
        self.styles.get(self.index_of(key)?)
    }

    /// Gather used styles of this list and every nested media set
    pub fn collect_used(&self, into: &mut HashSet<StyleId>) {
        into.extend(self.used.iter().copied());
        for media in &self.media {
            media.entries().collect_used(into);
        }
    }

    /// True when there are direct styles and dynamic pruning drops all of them
    pub fn prunes_every_style(&self, ctx: &RenderContext<'_>) -> bool {
        ctx.options.dynamic
            && !self.styles.is_empty()
            && self.styles.iter().all(|style| !ctx.is_emitted(style.origin()))
    }

    /// Render every entry, each followed by a blank line
    pub fn render(
        &self,
        out: &mut String,
        indent: usize,
        ctx: &RenderContext<'_>,
    ) -> Result<(), CssError> {
        for entry in self.iter() {
            if entry.render(out, indent, ctx)? {
                out.push_str("\n\n");
            }
        }
        Ok(())
    }
}

/// Root stylesheet
#[derive(Debug)]
pub struct StyleSheet {
    entries: Entries,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleSheet {
    pub fn new() -> Self {
        Self {
            entries: Entries::new(),
        }
    }

    /// Sheet holding ready-made styles, in order
    pub fn with_styles(styles: impl IntoIterator<Item = Style>) -> Self {
        let mut sheet = Self::new();
        for style in styles {
            sheet.push(style);
        }
        sheet
    }

    pub fn id(&self) -> SheetId {
        self.entries.sheet()
    }

    /// Number of top-level entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.len() == 0
    }

    /// Top-level entries in render order
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.entries.iter()
    }

    /// Add a style selecting `classes`, registered under the same class list.
    ///
    /// With no classes a name `_c<N>` is generated from the entry count.
    pub fn style(&mut self, classes: &[&str]) -> &mut Style {
        self.entries.style(None, classes)
    }

    /// Add a style selecting `#id` plus `classes`.
    ///
    /// Without classes it is registered under a generated `_c<N>` key.
    pub fn style_with_id(&mut self, id: &str, classes: &[&str]) -> &mut Style {
        self.entries.style(Some(id), classes)
    }

    /// Append a style built outside the sheet.
    ///
    /// It gets an identity in this sheet and is registered under its class list.
    pub fn push(&mut self, style: Style) -> &mut Style {
        self.entries.push(style)
    }

    /// Add a media scope bounded by viewport width in pixels
    pub fn media(&mut self, min_width: Option<u32>, max_width: Option<u32>) -> &mut MediaSet {
        self.entries.media(min_width, max_width)
    }

    /// Append an empty style targeting the same selector as `parent`.
    ///
    /// It renders after the original, so its rules win the cascade.
    pub fn redefine(&mut self, parent: &StyleRef) -> &mut Style {
        self.entries.redefine(parent)
    }

    /// Find a style by class key (`card__primary`) and mark it used
    pub fn lookup(&mut self, key: &str) -> Result<&mut Style, CssError> {
        self.entries.lookup(key)
    }

    /// Find a style without marking it used
    pub fn get(&self, key: &str) -> Option<&Style> {
        self.entries.get(key)
    }

    /// Render with default options and the system clock
    pub fn render(&self, dynamic: bool, output: Output<'_>) -> Result<Option<String>, CssError> {
        self.render_with(&RenderOptions::dynamic(dynamic), &SystemClock, output)
    }

    pub fn render_with(
        &self,
        options: &RenderOptions,
        clock: &dyn Clock,
        output: Output<'_>,
    ) -> Result<Option<String>, CssError> {
        let css = self.render_document(options, clock)?;
        render::write_output(css, output)
    }

    /// Whole sheet as a string
    pub fn to_css(&self) -> Result<String, CssError> {
        self.render_document(&RenderOptions::default(), &SystemClock)
    }

    fn render_document(
        &self,
        options: &RenderOptions,
        clock: &dyn Clock,
    ) -> Result<String, CssError> {
        let mut used = HashSet::new();
        self.entries.collect_used(&mut used);

        tracing::debug!(
            "Rendering stylesheet: {} entries, dynamic={}, {} used",
            self.len(),
            options.dynamic,
            used.len()
        );
        let ctx = RenderContext { options, used };
        if self.entries.prunes_every_style(&ctx) {
            tracing::warn!("Dynamic render prunes every top-level style");
        }

        let mut out = String::new();
        if options.header {
            out.push_str(&render::header(clock));
        }
        self.entries.render(&mut out, 0, &ctx)?;

        tracing::debug!("Rendered {} bytes", out.len());
        Ok(out)
    }
}
