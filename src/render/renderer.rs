use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::{GameState, Phase, Point};
use crate::metrics::SessionStats;

/// What occupies one grid cell, as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellGlyph {
    Head,
    Body,
    Food,
    Empty,
}

/// Pure cell classification; the snake wins over food on overlap.
pub fn cell_glyph(state: &GameState, pos: Point) -> CellGlyph {
    if pos == state.snake.head() {
        CellGlyph::Head
    } else if state.snake.contains(pos) {
        CellGlyph::Body
    } else if pos == state.food {
        CellGlyph::Food
    } else {
        CellGlyph::Empty
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, stats: &SessionStats) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let header = self.render_stats(state, stats);
        frame.render_widget(header, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        // The grid is always on screen: under the instructions before the
        // first input, and under the game-over panel after a crash
        let grid = self.render_grid(state);
        frame.render_widget(grid, game_area);

        match state.phase {
            Phase::NotStarted => {
                let popup = centered_rect(game_area, 44, 7);
                frame.render_widget(Clear, popup);
                frame.render_widget(self.render_instructions(), popup);
            }
            Phase::Running => {}
            Phase::GameOver => {
                let popup = centered_rect(game_area, 36, 8);
                frame.render_widget(Clear, popup);
                frame.render_widget(self.render_game_over(state), popup);
            }
        }

        let controls = self.render_controls(state.phase);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let cells = state.cells_per_side();
        let mut lines = Vec::new();

        for row in 0..cells {
            let mut spans = Vec::new();

            for col in 0..cells {
                let pos = Point::new(col * state.cell_size, row * state.cell_size);

                let cell = match cell_glyph(state, pos) {
                    CellGlyph::Head => Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                    CellGlyph::Body => Span::styled("□ ", Style::default().fg(Color::Green)),
                    CellGlyph::Food => Span::styled(
                        "● ",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    CellGlyph::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, stats: &SessionStats) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                stats.best_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Games: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                stats.games_played.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_instructions(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Press an arrow key or WASD to start",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "The snake moves once you pick a direction",
                Style::default().fg(Color::Gray),
            )]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
    }

    fn render_game_over(&self, state: &GameState) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
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

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, phase: Phase) -> Paragraph<'_> {
        let text = match phase {
            Phase::NotStarted => vec![Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to start | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])],
            Phase::Running => vec![Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to steer | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])],
            Phase::GameOver => vec![Line::from(vec![
                Span::styled("R", Style::default().fg(Color::Green)),
                Span::raw(" to restart | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])],
        };

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Snake;

    fn sample_state() -> GameState {
        GameState::new(
            Snake {
                body: vec![Point::new(180, 200), Point::new(160, 200)],
            },
            Point::new(200, 200),
            400,
            20,
        )
    }

    #[test]
    fn test_cell_glyphs() {
        let state = sample_state();
        assert_eq!(cell_glyph(&state, Point::new(180, 200)), CellGlyph::Head);
        assert_eq!(cell_glyph(&state, Point::new(160, 200)), CellGlyph::Body);
        assert_eq!(cell_glyph(&state, Point::new(200, 200)), CellGlyph::Food);
        assert_eq!(cell_glyph(&state, Point::new(0, 0)), CellGlyph::Empty);
    }

    #[test]
    fn test_snake_wins_over_food_on_overlap() {
        let mut state = sample_state();
        state.food = Point::new(160, 200);
        assert_eq!(cell_glyph(&state, Point::new(160, 200)), CellGlyph::Body);
    }

    #[test]
    fn test_centered_rect_is_clamped() {
        let area = Rect::new(0, 0, 10, 4);
        let rect = centered_rect(area, 40, 10);
        assert_eq!(rect, area);

        let inner = centered_rect(Rect::new(0, 0, 20, 10), 10, 4);
        assert_eq!(inner, Rect::new(5, 3, 10, 4));
    }
}
