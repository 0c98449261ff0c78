//! In-memory document
//!
//! Headless stand-ins for DOM elements and click events. Clones of a
//! `MemoryElement` share one class list, the way two handles to the same
//! DOM node do.

use parking_lot::RwLock;
use scraper::Html;
use std::cell::Cell;
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::parse_selector;
use crate::element::{ClickEvent, ElementSource, ToggleableElement};
use crate::Result;

#[derive(Debug, Clone)]
pub struct MemoryElement {
    classes: Arc<RwLock<Vec<String>>>,
    hidden_class: Arc<str>,
}

impl MemoryElement {
    pub fn new(hidden_class: &str) -> Self {
        Self::with_classes(hidden_class, std::iter::empty::<&str>())
    }

    pub fn with_classes<I, S>(hidden_class: &str, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<String> = Vec::new();
        for class in classes {
            let class = class.into();
            if !list.contains(&class) {
                list.push(class);
            }
        }

        Self {
            classes: Arc::new(RwLock::new(list)),
            hidden_class: Arc::from(hidden_class),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.read().iter().any(|c| c == class)
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.read().clone()
    }

    /// Whether both handles point at the same element
    pub fn same_element(&self, other: &MemoryElement) -> bool {
        Arc::ptr_eq(&self.classes, &other.classes)
    }
}

impl ToggleableElement for MemoryElement {
    fn is_hidden(&self) -> bool {
        self.has_class(&self.hidden_class)
    }

    fn set_hidden(&self, hidden: bool) {
        let mut classes = self.classes.write();
        let present = classes.iter().position(|c| c.as_str() == &*self.hidden_class);
        match (hidden, present) {
            (true, None) => classes.push(self.hidden_class.to_string()),
            (false, Some(idx)) => {
                classes.remove(idx);
            }
            _ => {}
        }
    }
}

/// Click that records whether its default action was cancelled
#[derive(Debug, Default)]
pub struct MemoryClick {
    default_prevented: Cell<bool>,
}

impl MemoryClick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl ClickEvent for MemoryClick {
    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }
}

/// Selector-keyed element collections
#[derive(Debug, Default, Clone)]
pub struct MemoryDocument {
    matches: HashMap<String, Vec<MemoryElement>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the elements a selector resolves to
    pub fn insert(&mut self, selector: impl Into<String>, elements: Vec<MemoryElement>) {
        self.matches.insert(selector.into(), elements);
    }

    /// Resolve `selectors` against parsed markup.
    ///
    /// Each matched element starts with the classes from its `class`
    /// attribute. A node matched by several selectors is shared between them.
    pub fn from_html<'a, I>(html: &str, selectors: I, hidden_class: &str) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let document = Html::parse_document(html);
        let mut nodes = HashMap::new();
        let mut doc = Self::new();

        for selector in selectors {
            let parsed = parse_selector(selector)?;
            let elements: Vec<MemoryElement> = document
                .select(&parsed)
                .map(|el| {
                    nodes
                        .entry(el.id())
                        .or_insert_with(|| {
                            MemoryElement::with_classes(hidden_class, el.value().classes())
                        })
                        .clone()
                })
                .collect();

            tracing::trace!(selector, matched = elements.len(), "Resolved selector");
            doc.insert(selector, elements);
        }

        Ok(doc)
    }
}

impl ElementSource<MemoryElement> for MemoryDocument {
    fn select_all(&self, selector: &str) -> Vec<MemoryElement> {
        self.matches.get(selector).cloned().unwrap_or_default()
    }
}
