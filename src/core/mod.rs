//! Core menu machinery: tree building, placement, interaction state, and
//! the shared slot registry.

pub mod controller;
pub mod layout;
pub mod panel;
pub mod registry;
