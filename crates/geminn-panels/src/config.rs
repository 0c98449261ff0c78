//! Panel configuration

use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::PanelError;
use crate::Result;

/// Bootstrap's `display: none !important` utility
pub const DEFAULT_HIDDEN_CLASS: &str = "d-none";

/// One tab/form selector pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSpec {
    pub name: String,
    pub tab_selector: String,
    pub form_selector: String,
}

impl GroupSpec {
    pub fn new(
        name: impl Into<String>,
        tab_selector: impl Into<String>,
        form_selector: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            tab_selector: tab_selector.into(),
            form_selector: form_selector.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Class the stylesheet maps to "not displayed"
    #[serde(default = "default_hidden_class")]
    pub hidden_class: String,
    /// Independently toggled groups
    pub groups: Vec<GroupSpec>,
}

fn default_hidden_class() -> String {
    DEFAULT_HIDDEN_CLASS.to_string()
}

impl PanelConfig {
    pub fn new(hidden_class: impl Into<String>, groups: Vec<GroupSpec>) -> Self {
        Self {
            hidden_class: hidden_class.into(),
            groups,
        }
    }

    /// The product page panels: specification edit, specification add, image edit
    pub fn inventory() -> Self {
        Self::new(
            DEFAULT_HIDDEN_CLASS,
            vec![
                GroupSpec::new(
                    "specification-edit",
                    "#edit_product_specification_tab",
                    "#edit_product_specification_form",
                ),
                GroupSpec::new(
                    "specification-add",
                    "#add_product_specification_tab",
                    "#add_product_specification_form",
                ),
                GroupSpec::new("image-edit", "#edit_image_tab", "#edit_image_form"),
            ],
        )
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: PanelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the config before any element is touched
    pub fn validate(&self) -> Result<()> {
        if self.hidden_class.is_empty() || self.hidden_class.chars().any(char::is_whitespace) {
            return Err(PanelError::InvalidConfig(format!(
                "hidden class must be a single class name, got {:?}",
                self.hidden_class
            )));
        }

        let mut seen = HashSet::new();
        for group in &self.groups {
            if group.name.trim().is_empty() {
                return Err(PanelError::InvalidConfig(
                    "group name cannot be empty".to_string(),
                ));
            }
            if !seen.insert(group.name.as_str()) {
                return Err(PanelError::DuplicateGroup(group.name.clone()));
            }
            parse_selector(&group.tab_selector)?;
            parse_selector(&group.form_selector)?;
        }

        Ok(())
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::inventory()
    }
}

pub(crate) fn parse_selector(selector: &str) -> Result<Selector> {
    if selector.trim().is_empty() {
        return Err(PanelError::InvalidSelector {
            selector: selector.to_string(),
            reason: "selector cannot be empty".to_string(),
        });
    }

    Selector::parse(selector).map_err(|e| PanelError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}
