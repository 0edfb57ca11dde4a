//! User interface components for the community site
//!
//! This crate provides the egui-based UI building blocks: the sticky
//! header with its animated underline, the footer, the contact form and
//! the bilingual string tables.

pub mod contact_form;
pub mod footer;
pub mod header;
pub mod i18n;
pub mod theme;

/// Re-export commonly used types
pub use contact_form::ContactForm;
pub use footer::{footer, FooterAction};
pub use header::{HeaderAction, HeaderBar};
pub use i18n::{Language, Strings, LANGUAGE_STORAGE_KEY};
pub use theme::{apply_theme, Theme};
