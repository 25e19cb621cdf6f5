use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{Grid, Position, Session};
use crate::metrics::GameMetrics;

/// Terminal columns per grid cell; two columns make a cell roughly square
pub const CELL_WIDTH: u16 = 2;

const HEAD_COLOR: Color = Color::Blue;
const BODY_COLOR: Color = Color::Green;
const FOOD_COLOR: Color = Color::Red;
const BORDER_COLOR: Color = Color::White;

/// The character rectangle a cell maps to inside the board interior.
/// A pure mapping: a fixed `CELL_WIDTH` x 1 window at the cell's offset.
pub fn cell_rect(inner: Rect, pos: Position) -> Rect {
    Rect::new(
        inner.x + pos.x as u16 * CELL_WIDTH,
        inner.y + pos.y as u16,
        CELL_WIDTH,
        1,
    )
}

fn board_width(grid: Grid) -> u16 {
    grid.columns as u16 * CELL_WIDTH + 2
}

fn board_height(grid: Grid) -> u16 {
    grid.rows as u16 + 2
}

/// A width x height rectangle centered in `area`, clipped to it
fn centered_fixed(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw one frame from the current session state. Reads only.
    pub fn render(&self, frame: &mut Frame, session: &Session, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Score bar
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Control hints
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(session, metrics), chunks[0]);

        let grid = session.grid();
        let board = centered_fixed(chunks[1], board_width(grid), board_height(grid));
        self.render_board(frame, board, session);

        frame.render_widget(self.render_controls(), chunks[2]);

        // The overlays are mutually exclusive: pause is refused once the
        // game is over, and a paused game cannot die.
        if session.is_game_over() {
            self.render_game_over(frame, board, session);
        } else if session.is_paused() {
            self.render_paused(frame, board);
        }
    }

    fn render_board(&self, frame: &mut Frame, board: Rect, session: &Session) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(BORDER_COLOR))
            .title(" Snake ");
        let inner = block.inner(board);
        frame.render_widget(block, board);

        let food = cell_rect(inner, session.food()).intersection(inner);
        frame.render_widget(Block::default().style(Style::default().bg(FOOD_COLOR)), food);

        for (i, &segment) in session.snake().body.iter().enumerate() {
            let color = if i == 0 { HEAD_COLOR } else { BODY_COLOR };
            let cell = cell_rect(inner, segment).intersection(inner);
            frame.render_widget(Block::default().style(Style::default().bg(color)), cell);
        }
    }

    fn render_stats(&self, session: &Session, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Speed: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.speed().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.best_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Runs: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.games_played.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("P", Style::default().fg(Color::Yellow)),
            Span::raw(" to pause | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_paused(&self, frame: &mut Frame, board: Rect) {
        let text = vec![Line::from(Span::styled(
            "PAUSED",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))];

        self.render_overlay(frame, board, text, Color::Yellow);
    }

    fn render_game_over(&self, frame: &mut Frame, board: Rect, session: &Session) {
        let text = vec![
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    session.score().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        self.render_overlay(frame, board, text, Color::Red);
    }

    fn render_overlay(&self, frame: &mut Frame, board: Rect, text: Vec<Line>, accent: Color) {
        let height = text.len() as u16 + 2;
        let width = (text.iter().map(Line::width).max().unwrap_or(0) as u16 + 4).max(13);
        let area = centered_fixed(board, width, height);

        frame.render_widget(Clear, area);
        let panel = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent)),
        );
        frame.render_widget(panel, area);
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
