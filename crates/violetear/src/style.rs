//! Styles
//!
//! A selector plus an ordered list of declarations. Setting a property a
//! second time overwrites its value in place.

use std::cell::RefCell;
use std::rc::Rc;

use crate::CssError;
use crate::selector::Selector;
use crate::stylesheet::{SheetId, StyleId};
use crate::units::{FontSize, Value};

/// Value of a single rule
#[derive(Debug, Clone)]
pub enum RuleValue {
    /// Known value
    Ready(Value),
    /// Value supplied after the rule was set
    Deferred(DeferredValue),
}

impl RuleValue {
    /// Final CSS token, if the value is known by now
    pub fn resolve(&self) -> Option<Value> {
        match self {
            Self::Ready(value) => Some(value.clone()),
            Self::Deferred(deferred) => deferred.get(),
        }
    }
}

impl From<Value> for RuleValue {
    fn from(value: Value) -> Self {
        Self::Ready(value)
    }
}

impl From<&str> for RuleValue {
    fn from(value: &str) -> Self {
        Self::Ready(value.into())
    }
}

impl From<String> for RuleValue {
    fn from(value: String) -> Self {
        Self::Ready(value.into())
    }
}

impl From<f32> for RuleValue {
    fn from(value: f32) -> Self {
        Self::Ready(value.into())
    }
}

impl From<i32> for RuleValue {
    fn from(value: i32) -> Self {
        Self::Ready(value.into())
    }
}

impl From<crate::units::Color> for RuleValue {
    fn from(color: crate::units::Color) -> Self {
        Self::Ready(color.into())
    }
}

impl From<DeferredValue> for RuleValue {
    fn from(deferred: DeferredValue) -> Self {
        Self::Deferred(deferred)
    }
}

impl From<&DeferredValue> for RuleValue {
    fn from(deferred: &DeferredValue) -> Self {
        Self::Deferred(deferred.clone())
    }
}

/// Shared slot for a value that is decided later.
///
/// Clones share the slot: resolving one resolves every rule holding it.
#[derive(Debug, Clone, Default)]
pub struct DeferredValue(Rc<RefCell<Option<Value>>>);

impl DeferredValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&self, value: impl Into<Value>) {
        *self.0.borrow_mut() = Some(value.into());
    }

    pub fn get(&self) -> Option<Value> {
        self.0.borrow().clone()
    }

    pub fn is_resolved(&self) -> bool {
        self.0.borrow().is_some()
    }
}

/// Single `property: value` pair
#[derive(Debug, Clone)]
pub struct Declaration {
    pub property: String,
    pub value: RuleValue,
}

/// Owned reference to a style, used to redefine it later
#[derive(Debug, Clone)]
pub struct StyleRef {
    pub(crate) id: StyleId,
    pub(crate) origin: StyleId,
    pub(crate) selector: Rc<Selector>,
}

impl StyleRef {
    pub fn id(&self) -> StyleId {
        self.id
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }
}

/// Named rule set
#[derive(Debug, Clone)]
pub struct Style {
    id: StyleId,
    /// First registered ancestor (self for non-redefinitions)
    origin: StyleId,
    parent: Option<StyleId>,
    selector: Rc<Selector>,
    declarations: Vec<Declaration>,
}

impl Style {
    /// Standalone style, not registered in any sheet
    pub fn new(selector: Selector) -> Self {
        Self::registered(StyleId::new(SheetId::next(), 0), Rc::new(selector))
    }

    pub(crate) fn registered(id: StyleId, selector: Rc<Selector>) -> Self {
        Self {
            id,
            origin: id,
            parent: None,
            selector,
            declarations: Vec::new(),
        }
    }

    pub(crate) fn redefinition(id: StyleId, parent: &StyleRef) -> Self {
        Self {
            id,
            origin: parent.origin,
            parent: Some(parent.id),
            selector: Rc::clone(&parent.selector),
            declarations: Vec::new(),
        }
    }

    pub fn id(&self) -> StyleId {
        self.id
    }

    /// Take an identity in a sheet; redefinitions keep following their origin
    pub(crate) fn adopt(&mut self, id: StyleId) {
        if self.parent.is_none() {
            self.origin = id;
        }
        self.id = id;
    }

    pub(crate) fn origin(&self) -> StyleId {
        self.origin
    }

    /// Style this one redefines, if any
    pub fn parent(&self) -> Option<StyleId> {
        self.parent
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn handle(&self) -> StyleRef {
        StyleRef {
            id: self.id,
            origin: self.origin,
            selector: Rc::clone(&self.selector),
        }
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn get(&self, property: &str) -> Option<&RuleValue> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| &d.value)
    }

    /// Declarations in insertion order
    pub fn rules(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    /// Set a property, keeping its first position if already present
    pub fn rule(
        &mut self,
        property: impl Into<String>,
        value: impl Into<RuleValue>,
    ) -> &mut Self {
        let property = property.into();
        let value = value.into();

        match self.declarations.iter_mut().find(|d| d.property == property) {
            Some(existing) => existing.value = value,
            None => self.declarations.push(Declaration { property, value }),
        }
        self
    }

    /// `font-size` and `font-weight`. An empty weight is skipped.
    pub fn font(&mut self, size: impl Into<FontSize>, weight: &str) -> &mut Self {
        self.font_size(size);
        if !weight.is_empty() {
            self.font_weight(weight);
        }
        self
    }

    pub fn font_size(&mut self, size: impl Into<FontSize>) -> &mut Self {
        self.rule("font-size", size.into().0)
    }

    pub fn font_weight(&mut self, weight: impl Into<Value>) -> &mut Self {
        self.rule("font-weight", weight.into())
    }

    pub fn display(&mut self, display: &str) -> &mut Self {
        self.rule("display", display)
    }

    pub fn color(&mut self, color: impl Into<Value>) -> &mut Self {
        self.rule("color", color.into())
    }

    pub fn background(&mut self, color: impl Into<Value>) -> &mut Self {
        self.rule("background-color", color.into())
    }

    pub fn width(&mut self, width: impl Into<Value>) -> &mut Self {
        self.rule("width", width.into())
    }

    pub fn height(&mut self, height: impl Into<Value>) -> &mut Self {
        self.rule("height", height.into())
    }

    pub fn margin(&mut self, margin: impl Into<Value>) -> &mut Self {
        self.rule("margin", margin.into())
    }

    pub fn padding(&mut self, padding: impl Into<Value>) -> &mut Self {
        self.rule("padding", padding.into())
    }

    /// Merge every rule of `other` into this style, in `other`'s order
    pub fn apply(&mut self, other: &Style) -> &mut Self {
        for decl in &other.declarations {
            self.rule(decl.property.clone(), decl.value.clone());
        }
        self
    }

    /// Rule block at top level with 4-space indentation
    pub fn css(&self) -> Result<String, CssError> {
        self.render_block(0, 4)
    }

    /// Rule block indented `indent` levels of `width` spaces
    pub fn render_block(&self, indent: usize, width: usize) -> Result<String, CssError> {
        let pad = " ".repeat(indent * width);
        let inner = " ".repeat((indent + 1) * width);

        let mut out = format!("{}{} {{\n", pad, self.selector);
        for (property, value) in self.resolved()? {
            out.push_str(&format!("{}{}: {};\n", inner, property, value));
        }
        out.push_str(&pad);
        out.push('}');
        Ok(out)
    }

    /// `style="..."` attribute for a single element
    pub fn inline(&self) -> Result<String, CssError> {
        let rules: Vec<String> = self
            .resolved()?
            .into_iter()
            .map(|(property, value)| format!("{}: {};", property, value))
            .collect();
        Ok(format!("style=\"{}\"", rules.join(" ")))
    }

    fn resolved(&self) -> Result<Vec<(&str, Value)>, CssError> {
        self.declarations
            .iter()
            .map(|d| {
                d.value
                    .resolve()
                    .map(|value| (d.property.as_str(), value))
                    .ok_or_else(|| CssError::UnrenderableValue {
                        property: d.property.clone(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Color, pt, px};

    fn btn() -> Style {
        Style::new(Selector::class("btn"))
    }

    #[test]
    fn test_rule_block() {
        let mut style = btn();
        style.display("flex").font(16, "bold");
        assert_eq!(
            style.css().unwrap(),
            ".btn {\n    display: flex;\n    font-size: 16pt;\n    font-weight: bold;\n}"
        );
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut style = btn();
        style.rule("color", "red").rule("margin", px(0.0)).rule("color", "blue");

        let props: Vec<&str> = style.rules().map(|d| d.property.as_str()).collect();
        assert_eq!(props, ["color", "margin"]);
        assert_eq!(style.get("color").and_then(RuleValue::resolve), Some(Value::from("blue")));
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut style = btn();
        style.color(Color::rgb(1, 2, 3)).padding(px(4.0));
        assert_eq!(style.css().unwrap(), style.css().unwrap());
    }

    #[test]
    fn test_apply_merges_in_order() {
        let mut base = Style::new(Selector::class("base"));
        base.rule("color", "red").rule("padding", px(2.0));

        let mut style = btn();
        style.rule("padding", px(8.0)).rule("display", "block").apply(&base);

        let rendered: Vec<String> = style
            .rules()
            .map(|d| format!("{}={}", d.property, d.value.resolve().unwrap()))
            .collect();
        assert_eq!(rendered, ["padding=2px", "display=block", "color=red"]);
    }

    #[test]
    fn test_font_partial() {
        let mut style = btn();
        style.font(pt(9.5), "");
        assert_eq!(style.len(), 1);
        assert!(style.get("font-weight").is_none());

        style.font_weight("lighter");
        assert_eq!(style.len(), 2);
    }

    #[test]
    fn test_inline() {
        let mut style = btn();
        style.display("flex").font_size(12);
        assert_eq!(style.inline().unwrap(), "style=\"display: flex; font-size: 12pt;\"");
        assert_eq!(btn().inline().unwrap(), "style=\"\"");
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(btn().css().unwrap(), ".btn {\n}");
    }

    #[test]
    fn test_indented_block() {
        let mut style = btn();
        style.display("none");
        assert_eq!(
            style.render_block(1, 4).unwrap(),
            "    .btn {\n        display: none;\n    }"
        );
    }

    #[test]
    fn test_deferred_value() {
        let accent = DeferredValue::new();
        let mut style = btn();
        style.rule("color", &accent);

        let err = style.css().unwrap_err();
        assert!(matches!(err, CssError::UnrenderableValue { ref property } if property == "color"));

        accent.resolve(Color::WHITE);
        assert_eq!(style.css().unwrap(), ".btn {\n    color: #ffffff;\n}");
    }

    #[test]
    fn test_unresolved_value_can_be_overwritten() {
        let mut style = btn();
        style.rule("color", DeferredValue::new()).rule("color", "black");
        assert!(style.css().is_ok());
    }
}
