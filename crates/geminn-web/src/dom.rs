//! DOM adapters
//!
//! `web-sys` implementations of the panel capability traits.

use std::rc::Rc;

use geminn_panels::{ClickEvent, ElementSource, ToggleableElement};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

/// A live element whose marker lives in its `classList`
#[derive(Clone)]
pub struct DomElement {
    element: Element,
    hidden_class: Rc<str>,
}

impl DomElement {
    pub fn new(element: Element, hidden_class: Rc<str>) -> Self {
        Self {
            element,
            hidden_class,
        }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl ToggleableElement for DomElement {
    fn is_hidden(&self) -> bool {
        self.element.class_list().contains(&self.hidden_class)
    }

    fn set_hidden(&self, hidden: bool) {
        let classes = self.element.class_list();
        let result = if hidden {
            classes.add_1(&self.hidden_class)
        } else {
            classes.remove_1(&self.hidden_class)
        };

        if let Err(err) = result {
            tracing::warn!(error = ?err, id = %self.element.id(), "classList update failed");
        }
    }
}

pub struct DomClick(Event);

impl DomClick {
    pub fn new(event: Event) -> Self {
        Self(event)
    }
}

impl ClickEvent for DomClick {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

/// `querySelectorAll` over the page document
pub struct DomDocument {
    document: Document,
    hidden_class: Rc<str>,
}

impl DomDocument {
    pub fn new(document: Document, hidden_class: &str) -> Self {
        Self {
            document,
            hidden_class: Rc::from(hidden_class),
        }
    }
}

impl ElementSource<DomElement> for DomDocument {
    fn select_all(&self, selector: &str) -> Vec<DomElement> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                tracing::warn!(selector, error = ?err, "querySelectorAll failed");
                return Vec::new();
            }
        };

        (0..list.length())
            .filter_map(|idx| list.item(idx))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| DomElement::new(element, Rc::clone(&self.hidden_class)))
            .collect()
    }
}
