//! Menu rendering
//!
//! Draws every visible panel of the open menu into a ratatui buffer,
//! deepest panel last so sub-menus overlap their parents. Panels placed
//! partially off-screen (the upward flip does not re-clamp) are clipped
//! against the terminal area row by row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};

use crate::core::controller::MenuController;
use crate::core::panel::{Panel, Row, RowKind, BORDER};
use crate::theme::MenuTheme;

/// Render the open menu tree, if any. Call after drawing the rest of the
/// frame so the menu sits on top.
pub fn render_menu(controller: &MenuController, theme: &MenuTheme, area: Rect, buf: &mut Buffer) {
    let hovered = controller.hovered();
    for (path, panel) in controller.visible_panels() {
        let hovered_row = hovered
            .filter(|h| h.panel == path)
            .map(|h| h.row);
        render_panel(panel, hovered_row, theme, area, buf);
    }
}

fn render_panel(
    panel: &Panel,
    hovered_row: Option<usize>,
    theme: &MenuTheme,
    area: Rect,
    buf: &mut Buffer,
) {
    let x0 = panel.left.max(area.x as i32);
    let y0 = panel.top.max(area.y as i32);
    let x1 = (panel.left + panel.width as i32).min((area.x + area.width) as i32);
    let y1 = (panel.top + panel.height as i32).min((area.y + area.height) as i32);
    if x1 <= x0 || y1 <= y0 {
        return;
    }

    let rect = Rect {
        x: x0 as u16,
        y: y0 as u16,
        width: (x1 - x0) as u16,
        height: (y1 - y0) as u16,
    };

    // Clear the area behind the panel to prevent bleed-through
    Clear.render(rect, buf);

    // Drop the border on any clipped side so the surviving content cells
    // stay aligned with hit-testing.
    let mut borders = Borders::ALL;
    if panel.left < x0 {
        borders.remove(Borders::LEFT);
    }
    if panel.left + panel.width as i32 > x1 {
        borders.remove(Borders::RIGHT);
    }
    if panel.top < y0 {
        borders.remove(Borders::TOP);
    }
    if panel.top + panel.height as i32 > y1 {
        borders.remove(Borders::BOTTOM);
    }

    let block = Block::default()
        .borders(borders)
        .border_style(theme.border_style())
        .style(Style::default().bg(theme.background_color()));
    let inner = block.inner(rect);
    block.render(rect, buf);

    let content_width = panel.width.saturating_sub(2) as usize;
    let left_clip = (inner.x as i32 - (panel.left + BORDER as i32)).max(0) as usize;
    for (i, row) in panel.rows.iter().enumerate() {
        let y = panel.row_y(i);
        if y < inner.y as i32 || y >= (inner.y + inner.height) as i32 {
            continue;
        }
        let line = clip_left(
            row_line(row, content_width, hovered_row == Some(i), theme),
            left_clip,
        );
        buf.set_line(inner.x, y as u16, &line, inner.width);
    }
}

/// Drop the leading `skip` columns of a line. Applied when a panel hangs
/// off the left edge of the draw area, so each remaining glyph is drawn on
/// the cell it occupies in the panel's absolute placement.
fn clip_left(line: Line<'static>, skip: usize) -> Line<'static> {
    if skip == 0 {
        return line;
    }
    let mut remaining = skip;
    let mut spans = Vec::new();
    for span in line.spans {
        let len = span.content.chars().count();
        if remaining >= len {
            remaining -= len;
            continue;
        }
        if remaining > 0 {
            let tail: String = span.content.chars().skip(remaining).collect();
            spans.push(Span::styled(tail, span.style));
            remaining = 0;
        } else {
            spans.push(span);
        }
    }
    Line::from(spans)
}

fn row_line(row: &Row, width: usize, highlighted: bool, theme: &MenuTheme) -> Line<'static> {
    let hint = row.style.as_deref();
    match &row.kind {
        RowKind::Divider => Line::from(Span::styled("─".repeat(width), theme.divider_style())),

        RowKind::Title => Line::from(Span::styled(
            pad_to(format!(" {}", row.label), width),
            theme.title_style(),
        )),

        RowKind::Action { .. } => {
            let style = if highlighted {
                theme.highlight_style()
            } else {
                theme.item_style(hint, false)
            };
            Line::from(Span::styled(pad_to(format!(" {}", row.label), width), style))
        }

        RowKind::Link { .. } => {
            let style = if highlighted {
                theme.highlight_style()
            } else {
                theme.item_style(hint, true)
            };
            Line::from(Span::styled(pad_to(format!(" {}", row.label), width), style))
        }

        RowKind::Toggle { checked, .. } => {
            let mark = if *checked { "✓ " } else { "  " };
            if highlighted {
                Line::from(Span::styled(
                    pad_to(format!(" {mark}{}", row.label), width),
                    theme.highlight_style(),
                ))
            } else {
                Line::from(vec![
                    Span::styled(format!(" {mark}"), theme.checkmark_style()),
                    Span::styled(
                        pad_to(row.label.clone(), width.saturating_sub(3)),
                        theme.item_style(hint, false),
                    ),
                ])
            }
        }

        RowKind::Folder { .. } => {
            let label_width = row.label.chars().count();
            let pad = width.saturating_sub(label_width + 3);
            let text = format!(" {}{}▸ ", row.label, " ".repeat(pad));
            let style = if highlighted {
                theme.highlight_style()
            } else {
                theme.item_style(hint, false)
            };
            Line::from(Span::styled(text, style))
        }
    }
}

fn pad_to(mut text: String, width: usize) -> String {
    let len = text.chars().count();
    if len < width {
        text.extend(std::iter::repeat(' ').take(width - len));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MenuConfig;
    use crate::entry::MenuEntry;

    fn buffer() -> Buffer {
        Buffer::empty(Rect::new(0, 0, 80, 24))
    }

    fn cell_symbol(buf: &Buffer, x: u16, y: u16) -> &str {
        buf.cell((x, y)).unwrap().symbol()
    }

    #[test]
    fn test_renders_rows_and_divider() {
        let mut c = MenuController::new(MenuConfig::default());
        c.set_viewport(80, 24);
        c.open(
            Some((10, 5)),
            &[
                MenuEntry::action("alpha", |_| {}),
                MenuEntry::separator(),
                MenuEntry::action("beta", |_| {}),
            ],
            false,
        );

        let mut buf = buffer();
        render_menu(&c, &MenuTheme::default(), buf.area, &mut buf);

        // Root panel at left 8, top 5; first row content starts at (9, 6)
        assert_eq!(cell_symbol(&buf, 10, 6), "a");
        assert_eq!(cell_symbol(&buf, 9, 7), "─");
        assert_eq!(cell_symbol(&buf, 10, 8), "b");
    }

    #[test]
    fn test_negative_top_is_clipped_without_panic() {
        let mut c = MenuController::new(MenuConfig::default());
        c.set_viewport(80, 10);

        // Tall menu near the bottom flips upward past the top edge
        let entries: Vec<MenuEntry> = (0..20)
            .map(|i| MenuEntry::action(format!("item {i}"), |_| {}))
            .collect();
        c.open(Some((10, 9)), &entries, false);

        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 10));
        render_menu(&c, &MenuTheme::default(), buf.area, &mut buf);
    }

    #[test]
    fn test_left_clipped_panel_keeps_columns_aligned() {
        let mut c = MenuController::new(MenuConfig::default());
        c.set_viewport(80, 24);
        c.open(Some((10, 5)), &[MenuEntry::action("alpha", |_| {})], false);

        // Root panel at left 8; draw into a sub-area starting at x 10 so
        // the border column and the leading pad cell are cut off. The
        // hidden prefix is dropped from the line, so each glyph still
        // lands on the cell hit-testing reports for it
        let mut buf = buffer();
        let area = Rect::new(10, 0, 70, 24);
        render_menu(&c, &MenuTheme::default(), area, &mut buf);

        assert_eq!(cell_symbol(&buf, 10, 6), "a");
        assert_eq!(cell_symbol(&buf, 11, 6), "l");
    }

    #[test]
    fn test_closed_menu_renders_nothing() {
        let c = MenuController::new(MenuConfig::default());
        let mut buf = buffer();
        render_menu(&c, &MenuTheme::default(), buf.area, &mut buf);
        assert_eq!(cell_symbol(&buf, 9, 6), " ");
    }
}
