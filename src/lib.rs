//! menukit - nested contextual popup menus for ratatui applications
//!
//! A terminal take on the classic right-click menu: declarative entry
//! sequences ([`MenuEntry`]) are rebuilt into a visual tree on every open,
//! a [`MenuController`] runs the hover/click state machine and viewport
//! placement, and [`render_menu`] draws whatever is visible on top of the
//! host's frame. A small [`MenuRegistry`] holds shared, hotkey-triggerable
//! menu slots.
//!
//! The host owns the event loop: it forwards crossterm mouse events to the
//! controller, calls [`MenuController::tick`] when the controller's
//! [`MenuController::next_deadline`] elapses, and acts on the returned
//! [`MenuEvent`]s (currently link navigation).

pub mod config;
pub mod core;
pub mod entry;
pub mod render;
pub mod theme;

pub use crate::config::MenuConfig;
pub use crate::core::controller::{MenuController, MenuEvent};
pub use crate::core::registry::{MenuRegistry, SlotId};
pub use crate::entry::{ActivationButton, MenuEntry, OpenTarget};
pub use crate::render::render_menu;
pub use crate::theme::MenuTheme;
