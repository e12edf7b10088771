use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::game::GameState;

const CONTROLS_HINT: &str = "[Arrows] Move  [R] Restart  [Q]/[Esc] Quit";

/// Renders the score line above and the controls hint below the board.
/// Returns the area left for the board itself.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState) -> Rect {
    let [score_area, board_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(score_line(state.score, state.running)).alignment(Alignment::Center),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(CONTROLS_HINT))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        hint_area,
    );

    board_area
}

fn score_line(score: u32, running: bool) -> Line<'static> {
    let mut spans = vec![
        Span::raw("Score: "),
        Span::styled(
            score.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if !running {
        spans.push(Span::styled(
            "  (stopped)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}
