//! Interaction state machine
//!
//! [`MenuController`] owns the single open menu session (root panel plus
//! its tree of folder sub-panels), the last-known pointer position, and
//! the pending hover timers. All mutation of the visual tree happens
//! through it; hosts feed it mouse events and a clock and draw whatever
//! it says is visible.
//!
//! Timer model: hover-open and hover-close are deadline-based. An event
//! schedules at most one pending transition of each class, a later
//! qualifying event cancels it, and [`MenuController::tick`] fires
//! whatever has expired. Hosts can poll input with a timeout derived from
//! [`MenuController::next_deadline`].

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::config::MenuConfig;
use crate::core::layout;
use crate::core::panel::{Panel, RowKind};
use crate::entry::{ActivateFn, ActivationButton, MenuEntry, OpenTarget, ToggleFn};

/// Something the host must act on after an interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// A link entry was activated; the menu already closed itself.
    /// Navigation is delegated to the platform.
    OpenLink { url: String, target: OpenTarget },
}

/// Identifies one row: the folder-index path to its panel plus the row
/// index inside that panel. An empty panel path means the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RowPath {
    pub(crate) panel: Vec<usize>,
    pub(crate) row: usize,
}

struct PendingOpen {
    path: RowPath,
    deadline: Instant,
}

struct PendingClose {
    level: Vec<usize>,
    deadline: Instant,
}

/// Controller for the process-wide contextual menu.
///
/// At most one menu (root plus open sub-panels) is visible at a time;
/// opening a new one discards the previous session.
pub struct MenuController {
    config: MenuConfig,
    root: Option<Panel>,
    pointer: (u16, u16),
    viewport: (u16, u16),
    hovered: Option<RowPath>,
    pending_open: Option<PendingOpen>,
    pending_close: Option<PendingClose>,
}

impl MenuController {
    pub fn new(config: MenuConfig) -> Self {
        Self {
            config,
            root: None,
            pointer: (0, 0),
            viewport: (80, 24),
            hovered: None,
            pending_open: None,
            pending_close: None,
        }
    }

    /// Tell the controller how big the terminal is. Call on startup and on
    /// every resize; placement clamps against this.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
    }

    /// Update the last-known pointer position without going through a
    /// mouse event (e.g. when the host runs its own pointer tracker).
    pub fn set_pointer(&mut self, x: u16, y: u16) {
        self.pointer = (x, y);
    }

    pub fn pointer(&self) -> (u16, u16) {
        self.pointer
    }

    pub fn is_open(&self) -> bool {
        self.root.is_some()
    }

    /// Dismiss the whole menu tree and cancel pending hover timers.
    pub fn close(&mut self) {
        if self.root.take().is_some() {
            tracing::debug!("menu closed");
        }
        self.hovered = None;
        self.pending_open = None;
        self.pending_close = None;
    }

    /// Open a menu built from `entries`.
    ///
    /// An empty entry slice is a no-op regardless of `toggle`. With
    /// `toggle` set and a menu already open, the call closes it instead
    /// of opening a new one. `position` defaults to the last-known
    /// pointer position.
    pub fn open(&mut self, position: Option<(u16, u16)>, entries: &[MenuEntry], toggle: bool) {
        if entries.is_empty() {
            return;
        }
        if toggle && self.is_open() {
            self.close();
            return;
        }
        self.close();

        let mut panel = Panel::build(entries, self.config.max_label_width);
        let anchor = position.unwrap_or(self.pointer);
        let (left, top) = layout::place_root(
            (anchor.0 as i32, anchor.1 as i32),
            panel.size(),
            self.viewport,
            self.config.root_x_offset,
        );
        panel.left = left;
        panel.top = top;
        panel.visible = true;
        tracing::debug!(rows = panel.rows.len(), left, top, "menu opened");
        self.root = Some(panel);
    }

    /// Whether an absolute cell lies inside any visible panel.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.visible_panels()
            .iter()
            .any(|(_, panel)| panel.contains(x as i32, y as i32))
    }

    /// Earliest pending hover deadline, for host poll timeouts.
    pub fn next_deadline(&self) -> Option<Instant> {
        let open = self.pending_open.as_ref().map(|p| p.deadline);
        let close = self.pending_close.as_ref().map(|p| p.deadline);
        match (open, close) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Fire any hover timer whose deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(pending) = &self.pending_open {
            if now >= pending.deadline {
                let path = pending.path.clone();
                self.pending_open = None;
                tracing::trace!(?path, "hover-open delay elapsed");
                self.show_folder(&path);
            }
        }
        if let Some(pending) = &self.pending_close {
            if now >= pending.deadline {
                let level = pending.level.clone();
                self.pending_close = None;
                tracing::trace!(?level, "hover-close delay elapsed");
                self.hide_folders_at(&level);
            }
        }
    }

    /// Feed a mouse event using the wall clock.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Option<MenuEvent> {
        self.handle_mouse_at(event, Instant::now())
    }

    /// Feed a mouse event with an explicit clock, for hosts (and tests)
    /// that drive time themselves.
    pub fn handle_mouse_at(&mut self, event: MouseEvent, now: Instant) -> Option<MenuEvent> {
        match event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer = (event.column, event.row);
                self.on_pointer_move(now);
                None
            }
            MouseEventKind::Down(button) => {
                self.pointer = (event.column, event.row);
                let button = match button {
                    MouseButton::Left => ActivationButton::Primary,
                    MouseButton::Right => ActivationButton::Secondary,
                    MouseButton::Middle => return None,
                };
                self.on_pointer_down(button)
            }
            _ => None,
        }
    }

    pub(crate) fn hovered(&self) -> Option<&RowPath> {
        self.hovered.as_ref()
    }

    /// Visible panels in paint order (root first, deepest last).
    pub(crate) fn visible_panels(&self) -> Vec<(Vec<usize>, &Panel)> {
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            collect_visible(root, Vec::new(), &mut out);
        }
        out
    }

    fn hit_test(&self) -> Option<RowPath> {
        let (x, y) = (self.pointer.0 as i32, self.pointer.1 as i32);
        // Deepest panel is drawn last, so it wins overlap ties
        for (path, panel) in self.visible_panels().into_iter().rev() {
            if let Some(row) = panel.row_at(x, y) {
                return Some(RowPath { panel: path, row });
            }
            if panel.contains(x, y) {
                // On this panel's border or divider area; nothing deeper
                // can be hit through it
                return None;
            }
        }
        None
    }

    fn on_pointer_move(&mut self, now: Instant) {
        if self.root.is_none() {
            return;
        }

        let hit = self.hit_test();
        self.hovered = hit.clone();

        let Some(hit) = hit else {
            // Left whatever row a pending open was armed for
            self.pending_open = None;
            return;
        };

        let root = self.root.as_ref().unwrap();
        let panel = match panel_at(root, &hit.panel) {
            Some(panel) => panel,
            None => return,
        };
        let row = &panel.rows[hit.row];

        if let RowKind::Folder { panel: sub } = &row.kind {
            let sub_visible = sub.visible;
            // Re-entering a folder row cancels a scheduled close of this
            // level's sub-panels
            if self
                .pending_close
                .as_ref()
                .is_some_and(|p| p.level == hit.panel)
            {
                self.pending_close = None;
            }
            if sub_visible {
                self.pending_open = None;
            } else if !self.pending_open.as_ref().is_some_and(|p| p.path == hit) {
                self.pending_open = Some(PendingOpen {
                    path: hit,
                    deadline: now + self.config.hover_open_delay(),
                });
            }
        } else {
            // Any non-folder row: the pointer has left the folder row a
            // pending open was armed for
            self.pending_open = None;

            let sibling_open = panel.any_subfolder_visible();
            if sibling_open
                && !self
                    .pending_close
                    .as_ref()
                    .is_some_and(|p| p.level == hit.panel)
            {
                self.pending_close = Some(PendingClose {
                    level: hit.panel,
                    deadline: now + self.config.hover_close_delay(),
                });
            }
        }
    }

    fn on_pointer_down(&mut self, button: ActivationButton) -> Option<MenuEvent> {
        if self.root.is_none() {
            return None;
        }

        let Some(hit) = self.hit_test() else {
            if !self.contains(self.pointer.0, self.pointer.1) {
                tracing::debug!("pointer-down outside menu, dismissing");
                self.close();
            }
            return None;
        };

        // Figure out what the row wants, flipping toggle display state in
        // the same pass, then release the borrow before closing/calling.
        enum Act {
            Folder,
            Run(ActivateFn),
            Toggled(ToggleFn, bool, bool),
            Follow(String, OpenTarget),
            Inert,
        }

        let act = {
            let root = self.root.as_mut().unwrap();
            let panel = panel_at_mut(root, &hit.panel)?;
            match &mut panel.rows[hit.row].kind {
                RowKind::Folder { .. } => Act::Folder,
                RowKind::Action { on_activate } => Act::Run(on_activate.clone()),
                RowKind::Toggle {
                    checked,
                    on_toggle,
                    disable_fast_toggle,
                } => {
                    *checked = !*checked;
                    Act::Toggled(on_toggle.clone(), *checked, *disable_fast_toggle)
                }
                RowKind::Link { url, target } => Act::Follow(url.clone(), *target),
                RowKind::Title | RowKind::Divider => Act::Inert,
            }
        };

        match act {
            Act::Folder => {
                // Explicit click bypasses the hover delay
                self.pending_open = None;
                self.pending_close = None;
                self.show_folder(&hit);
                None
            }
            Act::Run(on_activate) => {
                self.close();
                on_activate(button);
                None
            }
            Act::Toggled(on_toggle, new_state, disable_fast_toggle) => {
                match button {
                    ActivationButton::Primary => {
                        self.close();
                        on_toggle(new_state, button);
                    }
                    ActivationButton::Secondary => {
                        on_toggle(new_state, button);
                        if disable_fast_toggle {
                            self.close();
                        }
                    }
                }
                None
            }
            Act::Follow(url, target) => {
                self.close();
                Some(MenuEvent::OpenLink { url, target })
            }
            Act::Inert => None,
        }
    }

    /// Show the sub-panel of a folder row, hiding its siblings first so at
    /// most one sub-panel per level is ever visible.
    fn show_folder(&mut self, path: &RowPath) {
        let viewport = self.viewport;
        let Some(root) = self.root.as_mut() else {
            return;
        };
        let Some(parent) = panel_at_mut(root, &path.panel) else {
            return;
        };

        for (i, row) in parent.rows.iter_mut().enumerate() {
            if i != path.row {
                if let RowKind::Folder { panel } = &mut row.kind {
                    panel.hide_all();
                }
            }
        }

        let parent_left = parent.left;
        let parent_width = parent.width;
        let trigger_y = parent.row_y(path.row);

        if let RowKind::Folder { panel } = &mut parent.rows[path.row].kind {
            if !panel.visible {
                let (left, top) =
                    layout::place_folder(parent_left, parent_width, trigger_y, panel.size(), viewport);
                panel.left = left;
                panel.top = top;
                panel.visible = true;
                tracing::debug!(?path, left, top, "folder opened");
            }
        }
    }

    /// Hide every sub-panel of the panel identified by `level`.
    fn hide_folders_at(&mut self, level: &[usize]) {
        let Some(root) = self.root.as_mut() else {
            return;
        };
        if let Some(panel) = panel_at_mut(root, level) {
            panel.hide_subfolders();
        }
    }
}

fn panel_at<'a>(root: &'a Panel, path: &[usize]) -> Option<&'a Panel> {
    let mut panel = root;
    for &index in path {
        match &panel.rows.get(index)?.kind {
            RowKind::Folder { panel: sub } => panel = sub,
            _ => return None,
        }
    }
    Some(panel)
}

fn panel_at_mut<'a>(root: &'a mut Panel, path: &[usize]) -> Option<&'a mut Panel> {
    let mut panel = root;
    for &index in path {
        match &mut panel.rows.get_mut(index)?.kind {
            RowKind::Folder { panel: sub } => panel = sub,
            _ => return None,
        }
    }
    Some(panel)
}

fn collect_visible<'a>(panel: &'a Panel, path: Vec<usize>, out: &mut Vec<(Vec<usize>, &'a Panel)>) {
    if !panel.visible {
        return;
    }
    out.push((path.clone(), panel));
    for (i, row) in panel.rows.iter().enumerate() {
        if let RowKind::Folder { panel: sub } = &row.kind {
            let mut sub_path = path.clone();
            sub_path.push(i);
            collect_visible(sub, sub_path, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    fn controller() -> MenuController {
        let mut c = MenuController::new(MenuConfig::default());
        c.set_viewport(80, 24);
        c
    }

    fn mouse(kind: MouseEventKind, x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: x,
            row: y,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn moved(x: u16, y: u16) -> MouseEvent {
        mouse(MouseEventKind::Moved, x, y)
    }

    fn down(button: MouseButton, x: u16, y: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(button), x, y)
    }

    fn action(name: &str) -> MenuEntry {
        MenuEntry::action(name, |_| {})
    }

    /// Opened at (10, 5) with the default x offset the root panel sits at
    /// left 8, top 5; row i is at y = 6 + i, first content column x = 9.
    fn open_at_origin(c: &mut MenuController, entries: &[MenuEntry]) {
        c.open(Some((10, 5)), entries, false);
        assert!(c.is_open());
    }

    fn row_cell(row: usize) -> (u16, u16) {
        (9, 6 + row as u16)
    }

    fn folder_visible(c: &MenuController, path: &[usize]) -> bool {
        let root = c.root.as_ref().unwrap();
        let parent = panel_at(root, &path[..path.len() - 1]).unwrap();
        match &parent.rows[*path.last().unwrap()].kind {
            RowKind::Folder { panel } => panel.visible,
            _ => panic!("not a folder row"),
        }
    }

    #[test]
    fn test_toggle_open_and_close() {
        let mut c = controller();
        let entries = vec![action("one")];

        c.open(Some((10, 5)), &entries, true);
        assert!(c.is_open());

        c.open(Some((10, 5)), &entries, true);
        assert!(!c.is_open());
    }

    #[test]
    fn test_empty_entries_is_a_noop() {
        let mut c = controller();
        c.open(Some((10, 5)), &[], false);
        assert!(!c.is_open());

        open_at_origin(&mut c, &[action("one")]);
        c.open(Some((10, 5)), &[], true);
        assert!(c.is_open());
    }

    #[test]
    fn test_opening_replaces_previous_menu() {
        let mut c = controller();
        open_at_origin(&mut c, &[action("one"), action("two")]);
        open_at_origin(&mut c, &[action("solo")]);

        let root = c.root.as_ref().unwrap();
        assert_eq!(root.rows.len(), 1);
        assert_eq!(root.rows[0].label, "solo");
    }

    #[test]
    fn test_open_defaults_to_pointer_position() {
        let mut c = controller();
        c.set_pointer(30, 10);
        c.open(None, &[action("one")], false);

        let root = c.root.as_ref().unwrap();
        assert_eq!(root.left, 30 - 2);
        assert_eq!(root.top, 10);
    }

    #[test]
    fn test_outside_pointer_down_dismisses_whole_tree() {
        let mut c = controller();
        open_at_origin(
            &mut c,
            &[MenuEntry::folder(
                "more",
                vec![MenuEntry::folder("deeper", vec![action("leaf")])],
            )],
        );

        // Open two levels of folders by clicking
        let (x, y) = row_cell(0);
        c.handle_mouse(down(MouseButton::Left, x, y));
        assert!(folder_visible(&c, &[0]));

        let root = c.root.as_ref().unwrap();
        let sub = panel_at(root, &[0]).unwrap();
        let (sx, sy) = (sub.left as u16 + 1, sub.top as u16 + 1);
        c.handle_mouse(down(MouseButton::Left, sx, sy));
        assert!(folder_visible(&c, &[0, 0]));

        // Click far away from every panel
        c.handle_mouse(down(MouseButton::Left, 70, 20));
        assert!(!c.is_open());
    }

    #[test]
    fn test_click_inside_border_does_not_dismiss() {
        let mut c = controller();
        open_at_origin(&mut c, &[action("one")]);

        // Top-left border corner of the root panel
        c.handle_mouse(down(MouseButton::Left, 8, 5));
        assert!(c.is_open());
    }

    #[test]
    fn test_click_folder_opens_immediately_and_hides_siblings() {
        let mut c = controller();
        open_at_origin(
            &mut c,
            &[
                MenuEntry::folder("first", vec![action("a")]),
                MenuEntry::folder("second", vec![action("b")]),
            ],
        );

        let (x, y) = row_cell(0);
        c.handle_mouse(down(MouseButton::Left, x, y));
        assert!(folder_visible(&c, &[0]));
        assert!(!folder_visible(&c, &[1]));

        let (x, y) = row_cell(1);
        c.handle_mouse(down(MouseButton::Right, x, y));
        assert!(!folder_visible(&c, &[0]));
        assert!(folder_visible(&c, &[1]));
    }

    #[test]
    fn test_hover_opens_folder_after_delay() {
        let mut c = controller();
        open_at_origin(&mut c, &[MenuEntry::folder("more", vec![action("a")])]);

        let t0 = Instant::now();
        let (x, y) = row_cell(0);
        c.handle_mouse_at(moved(x, y), t0);
        assert!(!folder_visible(&c, &[0]));
        assert!(c.next_deadline().is_some());

        c.tick(t0 + Duration::from_millis(100));
        assert!(!folder_visible(&c, &[0]));

        c.tick(t0 + Duration::from_millis(250));
        assert!(folder_visible(&c, &[0]));
        assert!(c.next_deadline().is_none());
    }

    #[test]
    fn test_leaving_folder_row_before_delay_cancels_open() {
        let mut c = controller();
        open_at_origin(
            &mut c,
            &[MenuEntry::folder("more", vec![action("a")]), action("plain")],
        );

        let t0 = Instant::now();
        let (x, y) = row_cell(0);
        c.handle_mouse_at(moved(x, y), t0);

        // Slide down onto the plain row before the delay elapses
        let (x, y) = row_cell(1);
        c.handle_mouse_at(moved(x, y), t0 + Duration::from_millis(100));

        c.tick(t0 + Duration::from_secs(2));
        assert!(!folder_visible(&c, &[0]));
    }

    #[test]
    fn test_pointer_leaving_menu_cancels_pending_open() {
        let mut c = controller();
        open_at_origin(&mut c, &[MenuEntry::folder("more", vec![action("a")])]);

        let t0 = Instant::now();
        let (x, y) = row_cell(0);
        c.handle_mouse_at(moved(x, y), t0);
        c.handle_mouse_at(moved(70, 20), t0 + Duration::from_millis(50));

        c.tick(t0 + Duration::from_secs(2));
        assert!(!folder_visible(&c, &[0]));
    }

    #[test]
    fn test_hovering_sibling_closes_open_folder_after_delay() {
        let mut c = controller();
        open_at_origin(
            &mut c,
            &[MenuEntry::folder("more", vec![action("a")]), action("plain")],
        );

        let (x, y) = row_cell(0);
        c.handle_mouse(down(MouseButton::Left, x, y));
        assert!(folder_visible(&c, &[0]));

        let t0 = Instant::now();
        let (x, y) = row_cell(1);
        c.handle_mouse_at(moved(x, y), t0);
        assert!(folder_visible(&c, &[0]));

        c.tick(t0 + Duration::from_millis(250));
        assert!(!folder_visible(&c, &[0]));
    }

    #[test]
    fn test_reentering_folder_cancels_pending_close() {
        let mut c = controller();
        open_at_origin(
            &mut c,
            &[MenuEntry::folder("more", vec![action("a")]), action("plain")],
        );

        let (fx, fy) = row_cell(0);
        c.handle_mouse(down(MouseButton::Left, fx, fy));

        let t0 = Instant::now();
        let (px, py) = row_cell(1);
        c.handle_mouse_at(moved(px, py), t0);
        c.handle_mouse_at(moved(fx, fy), t0 + Duration::from_millis(100));

        c.tick(t0 + Duration::from_secs(2));
        assert!(folder_visible(&c, &[0]));
    }

    #[test]
    fn test_action_primary_closes_then_invokes() {
        let mut c = controller();
        let calls: Rc<RefCell<Vec<u8>>> = Rc::new(RefCell::new(Vec::new()));
        let log = calls.clone();
        open_at_origin(
            &mut c,
            &[MenuEntry::action("run", move |button| {
                log.borrow_mut().push(button.code());
            })],
        );

        let (x, y) = row_cell(0);
        c.handle_mouse(down(MouseButton::Left, x, y));
        assert!(!c.is_open());
        assert_eq!(*calls.borrow(), vec![1]);
    }

    #[test]
    fn test_action_secondary_also_closes() {
        let mut c = controller();
        let calls: Rc<RefCell<Vec<u8>>> = Rc::new(RefCell::new(Vec::new()));
        let log = calls.clone();
        open_at_origin(
            &mut c,
            &[MenuEntry::action("run", move |button| {
                log.borrow_mut().push(button.code());
            })],
        );

        let (x, y) = row_cell(0);
        c.handle_mouse(down(MouseButton::Right, x, y));
        assert!(!c.is_open());
        assert_eq!(*calls.borrow(), vec![3]);
    }

    #[test]
    fn test_toggle_primary_flips_once_and_closes() {
        let mut c = controller();
        let calls: Rc<RefCell<Vec<(bool, u8)>>> = Rc::new(RefCell::new(Vec::new()));
        let log = calls.clone();
        open_at_origin(
            &mut c,
            &[MenuEntry::toggle(
                "mute",
                || false,
                move |state, button| log.borrow_mut().push((state, button.code())),
            )],
        );

        let (x, y) = row_cell(0);
        c.handle_mouse(down(MouseButton::Left, x, y));
        assert!(!c.is_open());
        assert_eq!(*calls.borrow(), vec![(true, 1)]);
    }

    #[test]
    fn test_toggle_secondary_fast_toggle_keeps_menu_open() {
        let mut c = controller();
        let calls: Rc<RefCell<Vec<(bool, u8)>>> = Rc::new(RefCell::new(Vec::new()));
        let log = calls.clone();
        open_at_origin(
            &mut c,
            &[MenuEntry::toggle(
                "mute",
                || false,
                move |state, button| log.borrow_mut().push((state, button.code())),
            )],
        );

        let (x, y) = row_cell(0);
        c.handle_mouse(down(MouseButton::Right, x, y));
        assert!(c.is_open());
        assert_eq!(*calls.borrow(), vec![(true, 3)]);

        // The advisory display state flipped in place, so a second
        // secondary click flips it back
        c.handle_mouse(down(MouseButton::Right, x, y));
        assert!(c.is_open());
        assert_eq!(*calls.borrow(), vec![(true, 3), (false, 3)]);
    }

    #[test]
    fn test_toggle_secondary_with_fast_toggle_disabled_closes() {
        let mut c = controller();
        let calls: Rc<RefCell<Vec<(bool, u8)>>> = Rc::new(RefCell::new(Vec::new()));
        let log = calls.clone();
        open_at_origin(
            &mut c,
            &[MenuEntry::toggle(
                "mute",
                || true,
                move |state, button| log.borrow_mut().push((state, button.code())),
            )
            .without_fast_toggle()],
        );

        let (x, y) = row_cell(0);
        c.handle_mouse(down(MouseButton::Right, x, y));
        assert!(!c.is_open());
        assert_eq!(*calls.borrow(), vec![(false, 3)]);
    }

    #[test]
    fn test_link_activation_closes_and_reports_event() {
        let mut c = controller();
        open_at_origin(
            &mut c,
            &[MenuEntry::link("docs", "https://example.com").in_new_tab()],
        );

        let (x, y) = row_cell(0);
        let event = c.handle_mouse(down(MouseButton::Left, x, y));
        assert!(!c.is_open());
        assert_eq!(
            event,
            Some(MenuEvent::OpenLink {
                url: "https://example.com".to_string(),
                target: OpenTarget::NewTab,
            })
        );
    }

    #[test]
    fn test_title_row_is_inert() {
        let mut c = controller();
        open_at_origin(&mut c, &[MenuEntry::title("section"), action("one")]);

        let (x, y) = row_cell(0);
        let event = c.handle_mouse(down(MouseButton::Left, x, y));
        assert!(c.is_open());
        assert!(event.is_none());
    }

    #[test]
    fn test_toggle_state_refreshed_between_opens() {
        let mut c = controller();
        let state = Rc::new(std::cell::Cell::new(false));
        let probe = state.clone();
        let writer = state.clone();
        let entries = vec![MenuEntry::toggle(
            "mute",
            move || probe.get(),
            move |new, _| writer.set(new),
        )];

        open_at_origin(&mut c, &entries);
        let (x, y) = row_cell(0);
        c.handle_mouse(down(MouseButton::Left, x, y));
        assert!(state.get());

        // Reopening queries the owning state fresh
        open_at_origin(&mut c, &entries);
        let root = c.root.as_ref().unwrap();
        assert!(matches!(
            root.rows[0].kind,
            RowKind::Toggle { checked: true, .. }
        ));
    }
}
