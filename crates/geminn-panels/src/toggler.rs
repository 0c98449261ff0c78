//! Visibility toggler
//!
//! Owns one `TabGroup` per configured selector pair. Elements are selected
//! exactly once, when the toggler is built; hosts then call `initialize` on
//! content-loaded and route each tab click to its group.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::config::PanelConfig;
use crate::element::{ClickEvent, ElementSource, ToggleableElement};
use crate::error::PanelError;
use crate::group::{GroupSnapshot, TabGroup};
use crate::Result;

/// Per-group state, keyed by group name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub groups: BTreeMap<String, GroupSnapshot>,
}

pub struct VisibilityToggler<E> {
    /// Shared so host click handlers can hold their group
    groups: Vec<Rc<TabGroup<E>>>,
}

impl<E: ToggleableElement> VisibilityToggler<E> {
    pub fn new(groups: Vec<TabGroup<E>>) -> Self {
        Self {
            groups: groups.into_iter().map(Rc::new).collect(),
        }
    }

    /// Validate `config` and resolve every group's selectors against `source`
    pub fn from_source<S>(config: &PanelConfig, source: &S) -> Result<Self>
    where
        S: ElementSource<E> + ?Sized,
    {
        config.validate()?;

        let groups = config
            .groups
            .iter()
            .map(|spec| {
                let tabs = source.select_all(&spec.tab_selector);
                let forms = source.select_all(&spec.form_selector);

                tracing::debug!(
                    group = %spec.name,
                    tabs = tabs.len(),
                    forms = forms.len(),
                    "Selected panel group"
                );

                TabGroup::new(spec.name.clone(), tabs, forms)
            })
            .collect();

        Ok(Self::new(groups))
    }

    /// Content-loaded step: every form of every group starts hidden
    pub fn initialize(&self) {
        for group in &self.groups {
            group.hide_forms();
        }

        tracing::info!(groups = self.groups.len(), "Panel groups hidden");
    }

    pub fn groups(&self) -> impl Iterator<Item = &Rc<TabGroup<E>>> {
        self.groups.iter()
    }

    pub fn group(&self, name: &str) -> Result<&Rc<TabGroup<E>>> {
        self.groups
            .iter()
            .find(|g| g.name() == name)
            .ok_or_else(|| PanelError::UnknownGroup(name.to_string()))
    }

    /// Deliver a tab click to the named group
    pub fn click<C: ClickEvent + ?Sized>(&self, name: &str, event: &C) -> Result<()> {
        self.group(name)?.handle_click(event);
        Ok(())
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot {
            groups: self
                .groups
                .iter()
                .map(|g| (g.name().to_string(), g.snapshot()))
                .collect(),
        }
    }

    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryClick, MemoryDocument, MemoryElement};
    use crate::visibility::Visibility;

    const PRODUCT_PAGE: &str = r##"
        <ul class="nav">
          <li><a id="edit_product_specification_tab" href="#">Edit specification</a></li>
          <li><a id="add_product_specification_tab" href="#">Add specification</a></li>
        </ul>
        <form id="edit_product_specification_form" class="card"></form>
        <form id="edit_product_specification_form" class="card"></form>
        <form id="add_product_specification_form"></form>
        <form id="edit_image_form" class="card d-none"></form>
    "##;

    fn product_page() -> VisibilityToggler<MemoryElement> {
        crate::init_logging();

        let config = PanelConfig::default();
        let selectors = config
            .groups
            .iter()
            .flat_map(|g| [g.tab_selector.as_str(), g.form_selector.as_str()]);
        let doc = MemoryDocument::from_html(PRODUCT_PAGE, selectors, &config.hidden_class).unwrap();

        VisibilityToggler::from_source(&config, &doc).unwrap()
    }

    fn visibility(toggler: &VisibilityToggler<MemoryElement>, name: &str) -> Option<Visibility> {
        toggler.group(name).unwrap().visibility()
    }

    #[test]
    fn test_initialize_hides_every_form() {
        let toggler = product_page();
        assert_eq!(visibility(&toggler, "specification-edit"), Some(Visibility::Visible));

        toggler.initialize();
        for group in toggler.groups() {
            assert!(group.forms().iter().all(|f| f.is_hidden()), "{}", group.name());
        }
        // Markup that already carried the marker keeps exactly one copy
        let image_form = &toggler.group("image-edit").unwrap().forms()[0];
        assert_eq!(image_form.classes(), vec!["card", "d-none"]);
    }

    #[test]
    fn test_click_parity() {
        let toggler = product_page();
        toggler.initialize();

        for clicks in 1..=5 {
            toggler
                .click("specification-edit", &MemoryClick::new())
                .unwrap();
            let expected = if clicks % 2 == 1 {
                Visibility::Visible
            } else {
                Visibility::Hidden
            };
            assert_eq!(visibility(&toggler, "specification-edit"), Some(expected));
        }
    }

    #[test]
    fn test_two_form_scenario() {
        let toggler = product_page();
        toggler.initialize();

        let group = toggler.group("specification-edit").unwrap();
        assert_eq!(group.forms().len(), 2);
        assert!(group.forms().iter().all(|f| f.is_hidden()));

        let click = MemoryClick::new();
        group.handle_click(&click);
        assert!(click.default_prevented());
        assert!(group.forms().iter().all(|f| !f.is_hidden()));

        group.handle_click(&MemoryClick::new());
        assert!(group.forms().iter().all(|f| f.is_hidden()));
    }

    #[test]
    fn test_groups_are_independent() {
        let toggler = product_page();
        toggler.initialize();

        toggler.click("specification-add", &MemoryClick::new()).unwrap();
        assert_eq!(visibility(&toggler, "specification-add"), Some(Visibility::Visible));
        assert_eq!(visibility(&toggler, "specification-edit"), Some(Visibility::Hidden));
        assert_eq!(visibility(&toggler, "image-edit"), Some(Visibility::Hidden));
    }

    #[test]
    fn test_group_without_tabs_stays_hidden() {
        let toggler = product_page();
        toggler.initialize();

        let image = toggler.group("image-edit").unwrap();
        assert!(image.tabs().is_empty());

        for _ in 0..3 {
            for group in toggler.groups() {
                for _tab in group.tabs() {
                    group.handle_click(&MemoryClick::new());
                }
            }
        }
        assert_eq!(image.visibility(), Some(Visibility::Hidden));
    }

    #[test]
    fn test_missing_elements_are_noops() {
        let toggler =
            VisibilityToggler::from_source(&PanelConfig::default(), &MemoryDocument::new())
                .unwrap();
        toggler.initialize();
        toggler.click("image-edit", &MemoryClick::new()).unwrap();

        let snapshot = toggler.snapshot();
        assert_eq!(snapshot.groups.len(), 3);
        assert!(snapshot.groups.values().all(|g| g.visibility.is_none()));
    }

    #[test]
    fn test_unknown_group() {
        let toggler = product_page();
        assert!(matches!(
            toggler.click("price-edit", &MemoryClick::new()),
            Err(PanelError::UnknownGroup(_))
        ));
    }

    #[test]
    fn test_invalid_config_touches_nothing() {
        let mut doc = MemoryDocument::new();
        let form = MemoryElement::new("d-none");
        doc.insert("#form", vec![form.clone()]);

        let mut config = PanelConfig::default();
        config.hidden_class = String::new();
        assert!(VisibilityToggler::from_source(&config, &doc).is_err());
        assert!(!form.is_hidden());
    }

    #[test]
    fn test_snapshot_json() {
        let toggler = product_page();
        toggler.initialize();
        toggler.click("specification-edit", &MemoryClick::new()).unwrap();

        let json = toggler.snapshot_json().unwrap();
        let snapshot: PanelSnapshot = serde_json::from_str(&json).unwrap();
        let edit = &snapshot.groups["specification-edit"];
        assert_eq!(edit.tabs, 1);
        assert_eq!(edit.forms, 2);
        assert_eq!(edit.visibility, Some(Visibility::Visible));
        assert_eq!(
            snapshot.groups["image-edit"].visibility,
            Some(Visibility::Hidden)
        );
    }
}
