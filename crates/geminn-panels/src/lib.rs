//! Geminn Panels
//!
//! Tab driven form panels for the inventory product pages. Each tab group
//! reveals or hides its forms by toggling a single marker class; groups are
//! hidden on content-loaded and never affect one another.
//!
//! The logic here is host independent. A browser host implements the
//! capability traits in [`element`] over real DOM nodes; tests and headless
//! tools use the [`memory`] document.

mod config;
pub mod element;
mod error;
mod group;
pub mod memory;
mod toggler;
mod visibility;

pub use config::{GroupSpec, PanelConfig, DEFAULT_HIDDEN_CLASS};
pub use element::{ClickEvent, ElementSource, ToggleableElement};
pub use error::PanelError;
pub use group::{GroupSnapshot, TabGroup};
pub use memory::{MemoryClick, MemoryDocument, MemoryElement};
pub use toggler::{PanelSnapshot, VisibilityToggler};
pub use visibility::Visibility;

pub type Result<T> = std::result::Result<T, PanelError>;

/// Initialize logging for native hosts
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A subscriber may already be installed by the embedding host
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
