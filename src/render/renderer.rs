use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameLoop, Leaderboard, Outcome, Phase, Snapshot};
use crate::input::NamePrompt;

const LEADERBOARD_WIDTH: u16 = 28;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render<R: Rng>(&self, frame: &mut Frame, game: &GameLoop<R>, prompt: &NamePrompt) {
        let snapshot = game.snapshot();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(&snapshot, game.runs_played(), game.best_score());
        frame.render_widget(stats, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(LEADERBOARD_WIDTH)])
            .split(chunks[1]);

        match snapshot.phase {
            Phase::Running => {
                let grid = self.render_grid(&snapshot);
                frame.render_widget(grid, body[0]);
            }
            Phase::AwaitingName { outcome, score } => {
                let game_over = self.render_game_over(outcome, score, prompt);
                frame.render_widget(game_over, body[0]);
            }
        }

        let board = self.render_leaderboard(body[1], game.leaderboard());
        frame.render_widget(board, body[1]);

        let controls = self.render_controls(&snapshot);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, snapshot: &Snapshot<'_>) -> Paragraph<'_> {
        let grid = snapshot.grid;
        let head = snapshot.snake.head();
        let mut lines = Vec::with_capacity(grid.rows() as usize);

        for row in 0..grid.rows() {
            let mut spans = Vec::with_capacity(grid.cols() as usize);

            for col in 0..grid.cols() {
                let cell = grid.cell_at(col, row);

                let span = if cell == head {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if snapshot.snake.contains(cell) {
                    Span::styled("□ ", Style::default().fg(Color::LightGreen))
                } else if cell == snapshot.food {
                    Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(span);
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

    fn render_stats(&self, snapshot: &Snapshot<'_>, runs: u32, best: u32) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(best.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Games: ", Style::default().fg(Color::Yellow)),
            Span::styled(runs.to_string(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over<'a>(
        &self,
        outcome: Outcome,
        score: u32,
        prompt: &'a NamePrompt,
    ) -> Paragraph<'a> {
        let cause = match outcome {
            Outcome::Wall => "You hit the wall",
            Outcome::SelfHit => "You ran into yourself",
            Outcome::Alive => "",
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(Span::styled(cause, Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Your name: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    prompt.text(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("_", Style::default().fg(Color::Gray)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Enter", Style::default().fg(Color::Green)),
                Span::styled(" to save, ", Style::default().fg(Color::Gray)),
                Span::styled("Esc", Style::default().fg(Color::Red)),
                Span::styled(" to skip", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_leaderboard<'a>(&self, area: Rect, leaderboard: &'a Leaderboard) -> Paragraph<'a> {
        let rows = area.height.saturating_sub(2) as usize;

        let lines: Vec<Line> = if leaderboard.is_empty() {
            vec![Line::from(Span::styled(
                "No scores yet",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            leaderboard
                .view()
                .take(rows)
                .enumerate()
                .map(|(rank, entry)| {
                    Line::from(vec![
                        Span::styled(
                            format!("{:>2}. ", rank + 1),
                            Style::default().fg(Color::Yellow),
                        ),
                        Span::raw(entry.name.as_str()),
                        Span::raw(": "),
                        Span::styled(
                            entry.score.to_string(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                    ])
                })
                .collect()
        };

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Leaderboard "),
        )
    }

    fn render_controls(&self, snapshot: &Snapshot<'_>) -> Paragraph<'_> {
        let text = match snapshot.phase {
            Phase::Running => Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
            Phase::AwaitingName { .. } => Line::from(vec![
                Span::raw("Type your name | "),
                Span::styled("Ctrl+C", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
        };

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
