//! Menu tree builder
//!
//! Turns an ordered slice of [`MenuEntry`] descriptions into the rendered
//! tree: a [`Panel`] of [`Row`]s, with folder rows owning recursively
//! pre-built (but hidden) sub-panels. Conditions and toggle states are
//! evaluated here, once per build, so every open of a menu sees fresh
//! application state.

use crate::entry::{ActivateFn, MenuEntry, OpenTarget, ToggleFn};

/// Border cells on each side of a panel
pub(crate) const BORDER: u16 = 1;

/// One rendered menu level. Coordinates are absolute terminal cells and
/// may be negative after upward-flip placement; the renderer clips.
pub struct Panel {
    pub(crate) rows: Vec<Row>,
    pub(crate) visible: bool,
    pub(crate) left: i32,
    pub(crate) top: i32,
    pub(crate) width: u16,
    pub(crate) height: u16,
}

/// One rendered row inside a panel.
pub struct Row {
    pub(crate) label: String,
    pub(crate) style: Option<String>,
    pub(crate) kind: RowKind,
}

pub enum RowKind {
    Divider,
    Title,
    Action {
        on_activate: ActivateFn,
    },
    Toggle {
        checked: bool,
        on_toggle: ToggleFn,
        disable_fast_toggle: bool,
    },
    Link {
        url: String,
        target: OpenTarget,
    },
    Folder {
        panel: Panel,
    },
}

impl Row {
    fn divider() -> Self {
        Row {
            label: String::new(),
            style: None,
            kind: RowKind::Divider,
        }
    }

    pub(crate) fn is_divider(&self) -> bool {
        matches!(self.kind, RowKind::Divider)
    }

    /// Minimum inner width needed to render this row.
    fn min_width(&self) -> usize {
        let label = self.label.chars().count();
        match self.kind {
            RowKind::Divider => 0,
            // " label "
            RowKind::Title | RowKind::Action { .. } | RowKind::Link { .. } => label + 2,
            // " ✓ label " / " label  ▸"
            RowKind::Toggle { .. } | RowKind::Folder { .. } => label + 4,
        }
    }
}

impl Panel {
    /// Build a panel (and, recursively, all folder sub-panels) from an
    /// entry sequence. The result starts hidden at (0, 0); the caller
    /// positions and shows it.
    ///
    /// Separator collapsing: entries filtered out by their `condition` do
    /// not count, a divider never leads the panel, consecutive separators
    /// produce a single divider, and a trailing separator produces none.
    pub(crate) fn build(entries: &[MenuEntry], max_label_width: usize) -> Panel {
        let mut rows: Vec<Row> = Vec::new();
        let mut pending_divider = false;

        for entry in entries {
            if !entry.enabled() {
                continue;
            }

            if entry.is_separator() {
                if !rows.is_empty() {
                    pending_divider = true;
                }
                continue;
            }

            if pending_divider {
                rows.push(Row::divider());
                pending_divider = false;
            }

            let label = truncate(entry.name().unwrap_or_default(), max_label_width);
            let row = match entry {
                MenuEntry::Separator => unreachable!(),
                MenuEntry::Title { style, .. } => Row {
                    label,
                    style: style.clone(),
                    kind: RowKind::Title,
                },
                MenuEntry::Action {
                    style, on_activate, ..
                } => Row {
                    label,
                    style: style.clone(),
                    kind: RowKind::Action {
                        on_activate: on_activate.clone(),
                    },
                },
                MenuEntry::Toggle {
                    style,
                    is_checked,
                    on_toggle,
                    disable_fast_toggle,
                    ..
                } => Row {
                    label,
                    style: style.clone(),
                    kind: RowKind::Toggle {
                        checked: is_checked(),
                        on_toggle: on_toggle.clone(),
                        disable_fast_toggle: *disable_fast_toggle,
                    },
                },
                MenuEntry::Link {
                    style, url, target, ..
                } => Row {
                    label,
                    style: style.clone(),
                    kind: RowKind::Link {
                        url: url.clone(),
                        target: *target,
                    },
                },
                MenuEntry::Folder { style, options, .. } => Row {
                    label,
                    style: style.clone(),
                    kind: RowKind::Folder {
                        panel: Panel::build(options, max_label_width),
                    },
                },
            };
            rows.push(row);
        }

        let inner = rows.iter().map(Row::min_width).max().unwrap_or(0);
        let width = inner as u16 + 2 * BORDER;
        let height = rows.len() as u16 + 2 * BORDER;

        Panel {
            rows,
            visible: false,
            left: 0,
            top: 0,
            width,
            height,
        }
    }

    pub(crate) fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Whether the absolute cell lies anywhere inside the panel rectangle,
    /// border included.
    pub(crate) fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left
            && x < self.left + self.width as i32
            && y >= self.top
            && y < self.top + self.height as i32
    }

    /// Index of the row under an absolute cell, if any.
    pub(crate) fn row_at(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        let row = y - self.top - BORDER as i32;
        if x <= self.left || x >= self.left + self.width as i32 - 1 {
            return None; // vertical border column
        }
        if row < 0 || row as usize >= self.rows.len() {
            return None; // horizontal border row
        }
        Some(row as usize)
    }

    /// Absolute y of a row, used as the trigger line for folder placement.
    pub(crate) fn row_y(&self, index: usize) -> i32 {
        self.top + BORDER as i32 + index as i32
    }

    /// Hide this panel and every descendant sub-panel.
    pub(crate) fn hide_all(&mut self) {
        self.visible = false;
        self.hide_subfolders();
    }

    /// Hide every folder sub-panel below this level, recursively. Keeps
    /// the mutual-exclusion invariant: a hidden branch never leaves a
    /// visible descendant behind.
    pub(crate) fn hide_subfolders(&mut self) {
        for row in &mut self.rows {
            if let RowKind::Folder { panel } = &mut row.kind {
                panel.hide_all();
            }
        }
    }

    /// Whether any folder row of this panel currently shows its sub-panel.
    pub(crate) fn any_subfolder_visible(&self) -> bool {
        self.rows.iter().any(|row| match &row.kind {
            RowKind::Folder { panel } => panel.visible,
            _ => false,
        })
    }
}

fn truncate(label: &str, max: usize) -> String {
    if label.chars().count() <= max {
        label.to_string()
    } else {
        label.chars().take(max).collect()
    }
}
