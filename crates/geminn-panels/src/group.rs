//! Tab group
//!
//! A named pairing of tab elements and the form panels they reveal. Every
//! click on any tab of the group flips every form of the group; the group
//! keeps no state of its own beyond what the elements report.

use serde::{Deserialize, Serialize};

use crate::element::{ClickEvent, ToggleableElement};
use crate::visibility::Visibility;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSnapshot {
    /// Number of tab elements wired to this group
    pub tabs: usize,
    /// Number of form panels in this group
    pub forms: usize,
    /// Shared visibility, `None` when there are no forms or they disagree
    pub visibility: Option<Visibility>,
}

pub struct TabGroup<E> {
    name: String,
    tabs: Vec<E>,
    forms: Vec<E>,
}

impl<E: ToggleableElement> TabGroup<E> {
    pub fn new(name: impl Into<String>, tabs: Vec<E>, forms: Vec<E>) -> Self {
        Self {
            name: name.into(),
            tabs,
            forms,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tabs(&self) -> &[E] {
        &self.tabs
    }

    pub fn forms(&self) -> &[E] {
        &self.forms
    }

    /// Put the hidden marker on every form, regardless of markup defaults
    pub fn hide_forms(&self) {
        for form in &self.forms {
            form.set_hidden(true);
        }

        tracing::debug!(group = %self.name, forms = self.forms.len(), "Hid panel group");
    }

    /// Flip every form's marker
    pub fn toggle_forms(&self) {
        for form in &self.forms {
            form.toggle();
        }

        tracing::debug!(
            group = %self.name,
            forms = self.forms.len(),
            visibility = ?self.visibility(),
            "Toggled panel group"
        );
    }

    /// Tab click handler: cancel the default action, then toggle
    pub fn handle_click<C: ClickEvent + ?Sized>(&self, event: &C) {
        event.prevent_default();
        self.toggle_forms();
    }

    /// Visibility shared by all forms
    pub fn visibility(&self) -> Option<Visibility> {
        let mut forms = self.forms.iter().map(|f| f.is_hidden());
        let first = forms.next()?;
        if forms.all(|hidden| hidden == first) {
            Some(Visibility::from_hidden(first))
        } else {
            None
        }
    }

    pub fn snapshot(&self) -> GroupSnapshot {
        GroupSnapshot {
            tabs: self.tabs.len(),
            forms: self.forms.len(),
            visibility: self.visibility(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryClick, MemoryElement};

    fn group(forms: usize) -> TabGroup<MemoryElement> {
        TabGroup::new(
            "specification-edit",
            vec![MemoryElement::new("d-none")],
            (0..forms).map(|_| MemoryElement::new("d-none")).collect(),
        )
    }

    #[test]
    fn test_hide_forms() {
        let group = group(2);
        assert_eq!(group.visibility(), Some(Visibility::Visible));

        group.hide_forms();
        assert!(group.forms().iter().all(|f| f.is_hidden()));
        assert_eq!(group.visibility(), Some(Visibility::Hidden));
    }

    #[test]
    fn test_click_toggles_and_prevents_default() {
        let group = group(2);
        group.hide_forms();

        let click = MemoryClick::new();
        group.handle_click(&click);
        assert!(click.default_prevented());
        assert_eq!(group.visibility(), Some(Visibility::Visible));

        group.handle_click(&MemoryClick::new());
        assert_eq!(group.visibility(), Some(Visibility::Hidden));
    }

    #[test]
    fn test_flip_is_per_element() {
        let group = group(2);
        group.forms()[0].set_hidden(true);
        assert_eq!(group.visibility(), None);

        group.toggle_forms();
        assert!(!group.forms()[0].is_hidden());
        assert!(group.forms()[1].is_hidden());
    }

    #[test]
    fn test_empty_group() {
        let group: TabGroup<MemoryElement> = TabGroup::new("image-edit", Vec::new(), Vec::new());
        group.hide_forms();
        group.handle_click(&MemoryClick::new());

        let snapshot = group.snapshot();
        assert_eq!(snapshot.tabs, 0);
        assert_eq!(snapshot.forms, 0);
        assert_eq!(snapshot.visibility, None);
    }
}
