//! Shared menu registry
//!
//! A fixed set of named menu slots that collaborators can populate at any
//! time and that hotkeys trigger as toggling root menus at the pointer
//! position. Key dispatch itself stays with the host; this module only
//! supplies the slot storage and the default chord table.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::controller::MenuController;
use crate::entry::MenuEntry;

/// One of the process-wide shared menu slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotId {
    Shared1,
    Shared2,
    Shared3,
}

impl SlotId {
    pub const ALL: [SlotId; 3] = [SlotId::Shared1, SlotId::Shared2, SlotId::Shared3];

    pub fn name(self) -> &'static str {
        match self {
            SlotId::Shared1 => "shared1",
            SlotId::Shared2 => "shared2",
            SlotId::Shared3 => "shared3",
        }
    }

    pub fn from_name(name: &str) -> Option<SlotId> {
        match name {
            "shared1" => Some(SlotId::Shared1),
            "shared2" => Some(SlotId::Shared2),
            "shared3" => Some(SlotId::Shared3),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            SlotId::Shared1 => 0,
            SlotId::Shared2 => 1,
            SlotId::Shared3 => 2,
        }
    }

    /// Match a key event against the default chord table. Each slot
    /// answers to two chords for redundancy: a modifier-chorded digit
    /// (Ctrl+Alt+1/2/3) and a bare function key (F9/F10/F11).
    pub fn from_key(key: KeyEvent) -> Option<SlotId> {
        let chorded = KeyModifiers::CONTROL | KeyModifiers::ALT;
        match key.code {
            KeyCode::Char('1') if key.modifiers == chorded => Some(SlotId::Shared1),
            KeyCode::Char('2') if key.modifiers == chorded => Some(SlotId::Shared2),
            KeyCode::Char('3') if key.modifiers == chorded => Some(SlotId::Shared3),
            KeyCode::F(9) if key.modifiers.is_empty() => Some(SlotId::Shared1),
            KeyCode::F(10) if key.modifiers.is_empty() => Some(SlotId::Shared2),
            KeyCode::F(11) if key.modifiers.is_empty() => Some(SlotId::Shared3),
            _ => None,
        }
    }
}

/// Storage for the shared menu slots. Created empty at startup; slots are
/// read fresh on every trigger, so collaborators may replace their
/// contents at any time.
#[derive(Default)]
pub struct MenuRegistry {
    slots: [Vec<MenuEntry>; 3],
}

impl MenuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, id: SlotId) -> &[MenuEntry] {
        &self.slots[id.index()]
    }

    pub fn slot_mut(&mut self, id: SlotId) -> &mut Vec<MenuEntry> {
        &mut self.slots[id.index()]
    }

    /// Open the slot's entries as a toggling root menu at the current
    /// pointer position. Triggering again while the menu is open closes
    /// it; an empty slot does nothing.
    pub fn trigger(&self, id: SlotId, controller: &mut MenuController) {
        tracing::debug!(slot = id.name(), "shared menu triggered");
        controller.open(None, self.slot(id), true);
    }
}
