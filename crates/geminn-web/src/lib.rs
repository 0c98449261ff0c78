//! Geminn Web - panel toggles for the inventory pages
//!
//! Loaded by the product templates in place of a hand-written script.

mod binding;
mod dom;

pub use binding::{install, panel_snapshot};
pub use dom::{DomClick, DomDocument, DomElement};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    if let Err(err) = install(geminn_panels::PanelConfig::default()) {
        tracing::error!(error = ?err, "Failed to install panel toggles");
    }
}
