//! # Views
//!
//! The nine dashboard pages and the menu that selects between them.
//!
//! A page is a plain, serializable description (`Page`) of cards, charts, tables and
//! notices. Front ends (the HTML server, the terminal renderer) decide how to draw it.
//! Rendering is a pure function of the read-only bundle, the current control values
//! and the view settings; nothing is cached between calls.

// Declare the modules that make up this crate.
pub mod controls;
pub mod error;
pub mod format;
pub mod pages;
pub mod theme;
pub mod view;
pub mod widgets;

// Re-export the core types to provide a clean public API.
pub use controls::{Controls, TimeRange};
pub use error::ViewError;
pub use pages::render;
pub use view::{Navigator, ViewId};
pub use widgets::{Card, Chart, Control, Notice, NoticeLevel, Page, Table, Widget};
