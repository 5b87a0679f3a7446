use crate::constants::PANEL_TITLE;
use crate::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Draws the chat modal panel. Scale shrinks the panel rect around its
/// center, opacity below 1 dims it, and a fully closed panel skips the
/// frame entirely (the restore timer brings it back).
pub fn draw_chat(f: &mut Frame<'_>, area: Rect, app: &App) {
    let modal = app.widget.modal;
    if modal.is_hidden() {
        return;
    }

    let panel_area = modal.scaled(area);

    let mut panel_style = Style::default().fg(Color::LightYellow).bg(Color::Black);
    if modal.opacity < 1.0 {
        panel_style = panel_style.add_modifier(Modifier::DIM);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title_top(Line::from(format!(" {} ", PANEL_TITLE)).left_aligned())
        .title_top(Line::from(" ─ ✕ ").right_aligned())
        .style(panel_style);

    f.render_widget(block, panel_area);

    // Split panel into message view and input
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(1), Constraint::Length(3)].as_ref())
        .split(panel_area);

    draw_messages(f, app, chunks[0]);
    draw_input(f, app, chunks[1]);
}

fn draw_messages(f: &mut Frame<'_>, app: &App, area: Rect) {
    let mut lines = Vec::new();
    for message in app.widget.transcript.messages() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(message.render(area.width));
    }

    let total_lines = lines.len() as u16;
    let max_scroll = total_lines.saturating_sub(area.height);
    let offset_up = (app.widget.scroll_offset).min(max_scroll as usize) as u16;
    let scroll = max_scroll - offset_up;

    let paragraph = Paragraph::new(lines).scroll((scroll, 0));
    f.render_widget(paragraph, area);
}

fn draw_input(f: &mut Frame<'_>, app: &App, area: Rect) {
    let input = &app.widget.input;

    let (text, style) = if input.is_empty() {
        (
            app.widget.placeholder.to_string(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        (input.clone(), Style::default().fg(Color::LightYellow))
    };

    let input_box = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("Input"))
        .wrap(Wrap { trim: false });

    f.render_widget(input_box, area);

    // Keep the input focused: cursor after the last typed character,
    // clamped to the inner box on both axes so wrapped lines don't push
    // it past the border
    let inner_width = area.width.saturating_sub(2);
    let last_line = input.rsplit('\n').next().unwrap_or("");
    let newline_count = input.matches('\n').count() as u16;
    let x = area.x + 1 + (last_line.width() as u16).min(inner_width.saturating_sub(1));
    let y = (area.y + 1 + newline_count).min(area.y + area.height.saturating_sub(2));
    f.set_cursor_position(Position::new(x, y));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::App;
    use ratatui::{
        backend::{Backend, TestBackend},
        Terminal,
    };

    fn cursor_after_draw(app: &App, width: u16, height: u16) -> Position {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw_chat(f, f.area(), app))
            .unwrap();
        terminal.backend_mut().get_cursor_position().unwrap()
    }

    #[test]
    fn test_cursor_follows_short_input() {
        let mut app = App::new();
        app.widget.input = "hi".to_string();

        let pos = cursor_after_draw(&app, 40, 12);
        // Input box starts at x=1 inside the panel margin; border +1
        assert_eq!(pos.x, 4);
    }

    #[test]
    fn test_cursor_stays_inside_input_box_when_line_wraps() {
        let mut app = App::new();
        app.widget.input = "x".repeat(200);

        let pos = cursor_after_draw(&app, 40, 12);
        // Inner columns of the input box end at x=37 for a 40-wide frame
        assert!(pos.x <= 37, "cursor x {} past the input border", pos.x);
    }
}
