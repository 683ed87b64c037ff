//! Stateless UI rendering: draws the retained frame with ratatui.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use noughts::{CellView, Marker, Position};

const HELP: &str = "1-9 or arrows+Enter: play   r: restart   q: quit";

/// Draws the title, board, status line and key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let surface = app.game().surface();
    let status = Paragraph::new(surface.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 41, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(position) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, position);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, position: Position) {
    let Some(view) = app.game().surface().cell(position.to_index()) else {
        return;
    };

    let style = cell_style(view, position == app.cursor() && !app.game().is_game_over());
    let symbol = if view.text.is_empty() {
        format!("{}", position.to_index() + 1)
    } else {
        view.text.clone()
    };

    // Vertically centre the symbol in the three-line cell.
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
        Line::default(),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn cell_style(view: &CellView, under_cursor: bool) -> Style {
    let base = match view.marker {
        None => Style::default().fg(Color::DarkGray),
        Some(Marker::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Some(Marker::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    if view.highlighted {
        base.bg(Color::Green).fg(Color::Black)
    } else if under_cursor {
        base.bg(Color::White).fg(Color::Black)
    } else {
        base
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draws_status_and_markers() {
        let mut app = App::new(&AppConfig::default());
        app.handle_key(KeyCode::Char('1'));

        let screen = rendered(&app);
        assert!(screen.contains("Noughts - Tic Tac Toe"));
        assert!(screen.contains("Player O's turn"));
        assert!(screen.contains(" X "));
    }

    #[test]
    fn test_highlight_style_wins_over_cursor() {
        let view = CellView {
            text: "X".to_string(),
            marker: Some(Marker::X),
            highlighted: true,
        };
        assert_eq!(cell_style(&view, true).bg, Some(Color::Green));
        assert_eq!(cell_style(&CellView::default(), true).bg, Some(Color::White));
        assert_eq!(cell_style(&CellView::default(), false).bg, None);
    }
}
