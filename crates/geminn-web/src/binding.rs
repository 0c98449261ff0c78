//! Page wiring
//!
//! Selects the configured groups once, attaches a click listener to every
//! tab element and hides all forms on `DOMContentLoaded`. Listener closures
//! are leaked on purpose: they live as long as the page.

use std::cell::RefCell;
use std::rc::Rc;

use geminn_panels::{PanelConfig, PanelError, VisibilityToggler};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Event;

use crate::dom::{DomClick, DomDocument, DomElement};

type DomToggler = VisibilityToggler<DomElement>;

/// Holds the one toggler wired into the page
pub(crate) struct InstallSlot<T> {
    installed: RefCell<Option<Rc<T>>>,
}

impl<T> InstallSlot<T> {
    pub(crate) const fn new() -> Self {
        Self {
            installed: RefCell::new(None),
        }
    }

    /// Take the slot for `value`; false if something is already installed
    pub(crate) fn claim(&self, value: Rc<T>) -> bool {
        let mut installed = self.installed.borrow_mut();
        if installed.is_some() {
            return false;
        }
        *installed = Some(value);
        true
    }

    pub(crate) fn get(&self) -> Option<Rc<T>> {
        self.installed.borrow().clone()
    }
}

thread_local! {
    static INSTALLED: InstallSlot<DomToggler> = const { InstallSlot::new() };
}

fn to_js(err: PanelError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Wire the panel groups described by `config` into the current page.
///
/// The slot is claimed before any listener is attached, so a failure while
/// wiring leaves the page marked installed and a retry cannot double-wire
/// the tabs that already have listeners.
pub fn install(config: PanelConfig) -> Result<(), JsValue> {
    if INSTALLED.with(|slot| slot.get().is_some()) {
        return Err(JsValue::from_str("panel toggles already installed"));
    }

    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    let source = DomDocument::new(document.clone(), &config.hidden_class);
    let toggler = Rc::new(VisibilityToggler::from_source(&config, &source).map_err(to_js)?);

    if !INSTALLED.with(|slot| slot.claim(Rc::clone(&toggler))) {
        return Err(JsValue::from_str("panel toggles already installed"));
    }

    for group in toggler.groups() {
        for tab in group.tabs() {
            let group = Rc::clone(group);
            let callback = Closure::<dyn Fn(Event)>::new(move |event: Event| {
                group.handle_click(&DomClick::new(event));
            });
            tab.element()
                .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
            callback.forget();
        }

        tracing::debug!(group = %group.name(), tabs = group.tabs().len(), "Attached tab listeners");
    }

    if document.ready_state() == "loading" {
        let on_ready = Rc::clone(&toggler);
        let callback = Closure::<dyn Fn()>::new(move || on_ready.initialize());
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            callback.as_ref().unchecked_ref(),
        )?;
        callback.forget();
    } else {
        // DOMContentLoaded already fired before the module was instantiated
        toggler.initialize();
    }

    tracing::info!("Panel toggles installed");

    Ok(())
}

/// JSON view of every installed group, for inspection from the console
#[wasm_bindgen]
pub fn panel_snapshot() -> Result<String, JsValue> {
    match INSTALLED.with(|slot| slot.get()) {
        Some(toggler) => toggler.snapshot_json().map_err(to_js),
        None => Err(JsValue::from_str("panel toggles not installed")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_claimed_once() {
        let slot = InstallSlot::new();
        assert!(slot.get().is_none());

        let first = Rc::new("first".to_string());
        assert!(slot.claim(Rc::clone(&first)));
        assert!(!slot.claim(Rc::new("second".to_string())));
        assert!(Rc::ptr_eq(&slot.get().unwrap(), &first));
    }

    #[test]
    fn test_slot_stays_claimed_after_failed_wiring() {
        let slot = InstallSlot::new();
        let wire = |slot: &InstallSlot<u32>, attach_fails: bool| -> Result<(), &'static str> {
            if !slot.claim(Rc::new(1)) {
                return Err("already installed");
            }
            if attach_fails {
                return Err("addEventListener failed");
            }
            Ok(())
        };

        assert_eq!(wire(&slot, true), Err("addEventListener failed"));
        // A retry must not attach a second set of listeners
        assert_eq!(wire(&slot, false), Err("already installed"));
    }
}
