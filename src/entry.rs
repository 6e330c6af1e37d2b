//! Declarative menu entry model.
//!
//! A menu is described as an ordered sequence of [`MenuEntry`] values and
//! rebuilt from that description every time it opens, so `condition` and
//! `is_checked` closures are re-evaluated at open time. Callbacks are plain
//! pre-bound closures; any receiver must be captured at construction.

use std::fmt;
use std::rc::Rc;

/// Callback for [`MenuEntry::Action`] activation.
pub type ActivateFn = Rc<dyn Fn(ActivationButton)>;
/// Callback for [`MenuEntry::Toggle`] activation, called with the new
/// checked state.
pub type ToggleFn = Rc<dyn Fn(bool, ActivationButton)>;
/// Predicate deciding whether an entry is rendered at all.
pub type ConditionFn = Rc<dyn Fn() -> bool>;
/// Supplies the current checked state of a toggle entry.
pub type CheckedFn = Rc<dyn Fn() -> bool>;

/// Which mouse button activated an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationButton {
    Primary,
    Secondary,
}

impl ActivationButton {
    /// Integer button code passed through to callbacks that want the raw
    /// value (1 = primary, 3 = secondary).
    pub fn code(self) -> u8 {
        match self {
            ActivationButton::Primary => 1,
            ActivationButton::Secondary => 3,
        }
    }
}

/// Where a link entry asks the host to open its URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OpenTarget {
    #[default]
    Current,
    NewTab,
}

/// One entry in a menu description.
#[derive(Clone)]
pub enum MenuEntry {
    /// Visual divider. Leading, trailing, and consecutive separators
    /// collapse at build time.
    Separator,
    /// Non-interactive heading row.
    Title {
        name: String,
        style: Option<String>,
    },
    /// Clickable item invoking a callback.
    Action {
        name: String,
        style: Option<String>,
        on_activate: ActivateFn,
        condition: Option<ConditionFn>,
    },
    /// Checkable item. The checked state shown is advisory display state,
    /// queried fresh from `is_checked` each time the menu is built.
    Toggle {
        name: String,
        style: Option<String>,
        is_checked: CheckedFn,
        on_toggle: ToggleFn,
        /// When set, secondary-button activation closes the menu like a
        /// primary activation would. When unset, secondary activation
        /// toggles in place so several toggles can be flipped in one
        /// session.
        disable_fast_toggle: bool,
        condition: Option<ConditionFn>,
    },
    /// Item that closes the menu and hands a URL to the host. No callback
    /// is invoked; navigation is the platform's job.
    Link {
        name: String,
        style: Option<String>,
        url: String,
        target: OpenTarget,
        condition: Option<ConditionFn>,
    },
    /// Nested sub-menu.
    Folder {
        name: String,
        style: Option<String>,
        options: Vec<MenuEntry>,
        condition: Option<ConditionFn>,
    },
}

impl MenuEntry {
    pub fn separator() -> Self {
        MenuEntry::Separator
    }

    pub fn title(name: impl Into<String>) -> Self {
        MenuEntry::Title {
            name: name.into(),
            style: None,
        }
    }

    pub fn action(name: impl Into<String>, on_activate: impl Fn(ActivationButton) + 'static) -> Self {
        MenuEntry::Action {
            name: name.into(),
            style: None,
            on_activate: Rc::new(on_activate),
            condition: None,
        }
    }

    pub fn toggle(
        name: impl Into<String>,
        is_checked: impl Fn() -> bool + 'static,
        on_toggle: impl Fn(bool, ActivationButton) + 'static,
    ) -> Self {
        MenuEntry::Toggle {
            name: name.into(),
            style: None,
            is_checked: Rc::new(is_checked),
            on_toggle: Rc::new(on_toggle),
            disable_fast_toggle: false,
            condition: None,
        }
    }

    pub fn link(name: impl Into<String>, url: impl Into<String>) -> Self {
        MenuEntry::Link {
            name: name.into(),
            style: None,
            url: url.into(),
            target: OpenTarget::default(),
            condition: None,
        }
    }

    pub fn folder(name: impl Into<String>, options: Vec<MenuEntry>) -> Self {
        MenuEntry::Folder {
            name: name.into(),
            style: None,
            options,
            condition: None,
        }
    }

    /// Attach an opaque style hint, resolved against the theme's style
    /// table at render time. Ignored on separators.
    pub fn with_style(mut self, hint: impl Into<String>) -> Self {
        let hint = hint.into();
        match &mut self {
            MenuEntry::Separator => {}
            MenuEntry::Title { style, .. }
            | MenuEntry::Action { style, .. }
            | MenuEntry::Toggle { style, .. }
            | MenuEntry::Link { style, .. }
            | MenuEntry::Folder { style, .. } => *style = Some(hint),
        }
        self
    }

    /// Attach a visibility condition, re-evaluated on every build. Ignored
    /// on separators and titles.
    pub fn with_condition(mut self, condition: impl Fn() -> bool + 'static) -> Self {
        match &mut self {
            MenuEntry::Separator | MenuEntry::Title { .. } => {}
            MenuEntry::Action { condition: c, .. }
            | MenuEntry::Toggle { condition: c, .. }
            | MenuEntry::Link { condition: c, .. }
            | MenuEntry::Folder { condition: c, .. } => *c = Some(Rc::new(condition)),
        }
        self
    }

    /// Make secondary-button activation of a toggle close the menu.
    pub fn without_fast_toggle(mut self) -> Self {
        if let MenuEntry::Toggle {
            disable_fast_toggle, ..
        } = &mut self
        {
            *disable_fast_toggle = true;
        }
        self
    }

    /// Ask the host to open a link entry in a new tab/window.
    pub fn in_new_tab(mut self) -> Self {
        if let MenuEntry::Link { target, .. } = &mut self {
            *target = OpenTarget::NewTab;
        }
        self
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            MenuEntry::Separator => None,
            MenuEntry::Title { name, .. }
            | MenuEntry::Action { name, .. }
            | MenuEntry::Toggle { name, .. }
            | MenuEntry::Link { name, .. }
            | MenuEntry::Folder { name, .. } => Some(name),
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, MenuEntry::Separator)
    }

    /// Whether the entry survives condition filtering for this build.
    pub(crate) fn enabled(&self) -> bool {
        let condition = match self {
            MenuEntry::Separator | MenuEntry::Title { .. } => &None,
            MenuEntry::Action { condition, .. }
            | MenuEntry::Toggle { condition, .. }
            | MenuEntry::Link { condition, .. }
            | MenuEntry::Folder { condition, .. } => condition,
        };
        condition.as_ref().map(|c| c()).unwrap_or(true)
    }
}

impl fmt::Debug for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuEntry::Separator => write!(f, "Separator"),
            MenuEntry::Title { name, .. } => write!(f, "Title({name:?})"),
            MenuEntry::Action { name, .. } => write!(f, "Action({name:?})"),
            MenuEntry::Toggle { name, .. } => write!(f, "Toggle({name:?})"),
            MenuEntry::Link { name, url, .. } => write!(f, "Link({name:?} -> {url:?})"),
            MenuEntry::Folder { name, options, .. } => {
                write!(f, "Folder({name:?}, {} entries)", options.len())
            }
        }
    }
}
