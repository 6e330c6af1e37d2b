//! Interactive demo for the menukit contextual menus.
//!
//! Right-click anywhere for the context menu, or use the shared slot
//! hotkeys (Ctrl+Alt+1/2/3 or F9/F10/F11). Esc closes an open menu, q
//! quits.

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame, Terminal,
};

use menukit::{
    render_menu, MenuConfig, MenuController, MenuEntry, MenuEvent, MenuRegistry, MenuTheme, SlotId,
};

#[derive(Parser)]
#[command(name = "menukit-demo")]
#[command(about = "Interactive demo for menukit contextual menus", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Theme file path
    #[arg(short, long, value_name = "FILE")]
    theme: Option<PathBuf>,
}

/// Application state the demo menus read and mutate.
#[derive(Default)]
struct DemoState {
    line_numbers: bool,
    word_wrap: bool,
    autosave: bool,
    last_event: String,
}

fn main() -> Result<()> {
    // TUI apps can't log to stdout, so we write to a file
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("menukit-demo.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => MenuConfig::load_from_path(path)?,
        None => MenuConfig::default(),
    };
    let theme = match &cli.theme {
        Some(path) => MenuTheme::load_from_path(path)?,
        None => MenuTheme::default(),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, config, theme);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: MenuConfig,
    theme: MenuTheme,
) -> Result<()> {
    let state = Rc::new(RefCell::new(DemoState::default()));
    let mut controller = MenuController::new(config);
    let size = terminal.size()?;
    controller.set_viewport(size.width, size.height);

    let context_entries = context_menu(&state);
    let registry = build_registry(&state);

    loop {
        terminal.draw(|frame| draw(frame, &controller, &theme, &state.borrow()))?;

        let timeout = controller
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::from_millis(250))
            .min(Duration::from_millis(250));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(slot) = SlotId::from_key(key) {
                        registry.trigger(slot, &mut controller);
                        continue;
                    }
                    match key.code {
                        KeyCode::Esc if controller.is_open() => controller.close(),
                        KeyCode::Esc | KeyCode::Char('q') => return Ok(()),
                        _ => {}
                    }
                }
                Event::Mouse(mouse) => {
                    let was_inside = controller.contains(mouse.column, mouse.row);
                    if let Some(MenuEvent::OpenLink { url, target }) =
                        controller.handle_mouse(mouse)
                    {
                        state.borrow_mut().last_event = format!("open link {url} ({target:?})");
                    }
                    // Right-click on empty space opens the context menu,
                    // replacing whatever the click just dismissed
                    if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Right)) && !was_inside
                    {
                        controller.open(Some((mouse.column, mouse.row)), &context_entries, false);
                    }
                }
                Event::Resize(width, height) => controller.set_viewport(width, height),
                _ => {}
            }
        }

        controller.tick(Instant::now());
    }
}

fn context_menu(state: &Rc<RefCell<DemoState>>) -> Vec<MenuEntry> {
    let note = |state: &Rc<RefCell<DemoState>>, text: &'static str| {
        let state = state.clone();
        move |button: menukit::ActivationButton| {
            state.borrow_mut().last_event = format!("{text} (button {})", button.code());
        }
    };

    let wrap_probe = state.clone();
    let wrap_write = state.clone();
    let numbers_probe = state.clone();
    let numbers_write = state.clone();
    let autosave_probe = state.clone();
    let autosave_write = state.clone();
    let reflow_cond = state.clone();

    vec![
        MenuEntry::title("Demo"),
        MenuEntry::action("New file", note(state, "new file")),
        MenuEntry::action("Open…", note(state, "open")),
        MenuEntry::separator(),
        MenuEntry::toggle(
            "Word wrap",
            move || wrap_probe.borrow().word_wrap,
            move |on, _| wrap_write.borrow_mut().word_wrap = on,
        ),
        MenuEntry::toggle(
            "Line numbers",
            move || numbers_probe.borrow().line_numbers,
            move |on, _| numbers_write.borrow_mut().line_numbers = on,
        ),
        MenuEntry::toggle(
            "Autosave",
            move || autosave_probe.borrow().autosave,
            move |on, _| autosave_write.borrow_mut().autosave = on,
        )
        .without_fast_toggle(),
        // Only offered while word wrap is on
        MenuEntry::action("Reflow paragraph", note(state, "reflow"))
            .with_condition(move || reflow_cond.borrow().word_wrap),
        MenuEntry::separator(),
        MenuEntry::folder(
            "Export",
            vec![
                MenuEntry::action("As HTML", note(state, "export html")),
                MenuEntry::action("As Markdown", note(state, "export markdown")),
                MenuEntry::folder(
                    "Archive",
                    vec![
                        MenuEntry::action("Zip", note(state, "export zip")),
                        MenuEntry::action("Tarball", note(state, "export tar")),
                    ],
                ),
            ],
        ),
        MenuEntry::separator(),
        MenuEntry::link("Project page", "https://ratatui.rs").in_new_tab(),
        MenuEntry::action("Delete", note(state, "delete")).with_style("danger"),
    ]
}

fn build_registry(state: &Rc<RefCell<DemoState>>) -> MenuRegistry {
    let mut registry = MenuRegistry::new();

    let note = |state: &Rc<RefCell<DemoState>>, text: &'static str| {
        let state = state.clone();
        move |_: menukit::ActivationButton| {
            state.borrow_mut().last_event = text.to_string();
        }
    };

    registry.slot_mut(SlotId::Shared1).extend([
        MenuEntry::title("Quick actions"),
        MenuEntry::action("Save", note(state, "save")),
        MenuEntry::action("Save all", note(state, "save all")),
        MenuEntry::separator(),
        MenuEntry::action("Close buffer", note(state, "close buffer")),
    ]);

    let wrap_probe = state.clone();
    let wrap_write = state.clone();
    registry.slot_mut(SlotId::Shared2).extend([
        MenuEntry::title("View"),
        MenuEntry::toggle(
            "Word wrap",
            move || wrap_probe.borrow().word_wrap,
            move |on, _| wrap_write.borrow_mut().word_wrap = on,
        ),
    ]);

    registry.slot_mut(SlotId::Shared3).extend([
        MenuEntry::title("Links"),
        MenuEntry::link("ratatui book", "https://ratatui.rs").in_new_tab(),
        MenuEntry::link("crossterm docs", "https://docs.rs/crossterm").in_new_tab(),
    ]);

    registry
}

fn draw(frame: &mut Frame, controller: &MenuController, theme: &MenuTheme, state: &DemoState) {
    let area = frame.area();

    let help = Paragraph::new(vec![
        Line::from("menukit demo"),
        Line::from(""),
        Line::from("right-click      context menu"),
        Line::from("Ctrl+Alt+1 / F9  shared menu 1"),
        Line::from("Ctrl+Alt+2 / F10 shared menu 2"),
        Line::from("Ctrl+Alt+3 / F11 shared menu 3"),
        Line::from("Esc              close menu"),
        Line::from("q                quit"),
    ])
    .style(Style::default().fg(Color::Gray));
    frame.render_widget(help, area);

    let status = format!(
        " wrap:{} numbers:{} autosave:{} | {}",
        state.word_wrap, state.line_numbers, state.autosave, state.last_event
    );
    let status_area = Rect::new(0, area.height.saturating_sub(1), area.width, 1);
    frame.render_widget(
        Paragraph::new(status).style(Style::default().fg(Color::Black).bg(Color::Gray)),
        status_area,
    );

    render_menu(controller, theme, area, frame.buffer_mut());
}
