//! CSS Selectors
//!
//! Compound selectors built from an optional id and a list of classes.

use std::fmt;

use crate::CssError;

/// Separator between class names in a lookup key (`card__primary`)
pub const KEY_SEPARATOR: &str = "__";

/// Compound selector: `#id.class1.class2`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Selector {
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    /// Build a selector from an optional id and class names.
    ///
    /// Empty strings are ignored. Fails when nothing selectable remains.
    pub fn new<I, S>(id: Option<&str>, classes: I) -> Result<Self, CssError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = id.filter(|id| !id.is_empty()).map(str::to_string);
        let classes: Vec<String> = classes
            .into_iter()
            .map(Into::into)
            .filter(|c: &String| !c.is_empty())
            .collect();

        if id.is_none() && classes.is_empty() {
            return Err(CssError::EmptySelector);
        }

        Ok(Self { id, classes })
    }

    /// Single class selector (`.name`)
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            id: None,
            classes: vec![name.into()],
        }
    }

    /// Id selector (`#name`)
    pub fn id(name: impl Into<String>) -> Self {
        Self {
            id: Some(name.into()),
            classes: Vec::new(),
        }
    }

    /// Selector that matches nothing and renders as an empty string
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn id_name(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn class_names(&self) -> &[String] {
        &self.classes
    }

    pub fn is_placeholder(&self) -> bool {
        self.id.is_none() && self.classes.is_empty()
    }

    /// Lookup key for the class list
    pub fn key(&self) -> String {
        self.classes.join(KEY_SEPARATOR)
    }

    pub fn to_css_selector(&self) -> String {
        let mut out = String::new();
        if let Some(id) = &self.id {
            out.push('#');
            out.push_str(id);
        }
        for class in &self.classes {
            out.push('.');
            out.push_str(class);
        }
        out
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_selector())
    }
}
