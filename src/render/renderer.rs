use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{GameConfig, GameState, Position, state::to_coord};
use crate::metrics::GameMetrics;

const BOARD_BACKGROUND: Color = Color::Rgb(0, 0, 0);
const SNAKE_COLOR: Color = Color::Rgb(0, 255, 0);
const HEAD_COLOR: Color = Color::Rgb(93, 216, 228);
const APPLE_COLOR: Color = Color::Rgb(255, 0, 0);

/// Terminal columns per grid cell, so cells come out roughly square
const CELL_COLUMNS: u16 = 2;

pub struct Renderer {
    title: String,
    variant: &'static str,
}

impl Renderer {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            title: format!(" {} ", config.title),
            variant: config.variant.label(),
        }
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), chunks[0]);

        let board_area = board_rect(chunks[1], state);
        frame.render_widget(self.render_grid(state), board_area);

        if state.paused {
            let overlay = centered(board_area, 12, 3);
            frame.render_widget(Clear, overlay);
            frame.render_widget(self.render_paused(), overlay);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let head = state.snake.head();
        let mut lines = Vec::with_capacity(state.grid_height);

        for y in 0..to_coord(state.grid_height) {
            let spans: Vec<Span> = (0..to_coord(state.grid_width))
                .map(|x| {
                    let pos = Position::new(x, y);

                    if pos == head {
                        Span::styled(
                            "██",
                            Style::default().fg(HEAD_COLOR).add_modifier(Modifier::BOLD),
                        )
                    } else if state.snake.collides_with_body(pos) {
                        Span::styled("██", Style::default().fg(SNAKE_COLOR))
                    } else if pos == state.apple.position {
                        Span::styled("██", Style::default().fg(APPLE_COLOR))
                    } else {
                        Span::raw("  ")
                    }
                })
                .collect();

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .style(Style::default().bg(BOARD_BACKGROUND))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(self.title.as_str()),
            )
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Length: ", label),
            Span::styled(
                state.snake.length.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Apples: ", label),
            Span::styled(state.apples_eaten.to_string(), value),
            Span::raw("    "),
            Span::styled("Resets: ", label),
            Span::styled(state.resets.to_string(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.best_length.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
            Span::raw("    "),
            Span::styled("Mode: ", label),
            Span::styled(self.variant, value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_paused(&self) -> Paragraph<'_> {
        Paragraph::new(Line::from(Span::styled(
            "PAUSED",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" to pause | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Esc/Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

/// Board frame sized to the grid and centered in `area`, clipped if the
/// terminal is too small
fn board_rect(area: Rect, state: &GameState) -> Rect {
    let columns = u16::try_from(state.grid_width).unwrap_or(u16::MAX);
    let rows = u16::try_from(state.grid_height).unwrap_or(u16::MAX);
    let width = columns.saturating_mul(CELL_COLUMNS).saturating_add(2);
    let height = rows.saturating_add(2);
    centered(area, width, height)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
