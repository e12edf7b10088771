use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};

use crate::canvas::TerminalCanvas;
use crate::config::{
    GAME_OVER_TEXT, HEAD_OUTLINE_WIDTH_PX, PALETTE, RESTART_HINT_TEXT, game_over_font,
    overlay_font, overlay_line_spacing_px,
};
use crate::game::GameState;
use crate::snake::Position;
use crate::surface::{Color, DrawSurface, TextAlign};
use crate::ui::hud::render_hud;

/// Renders the full terminal frame: HUD rows plus the board canvas.
pub fn render_frame(frame: &mut Frame<'_>, state: &GameState, cell_size_px: u32) {
    let area = frame.area();
    let board_area = board_rect(render_hud(frame, area, state), state);

    let mut canvas = TerminalCanvas::new(
        frame.buffer_mut(),
        board_area,
        cell_size_px,
        PALETTE.background,
    );
    render(&mut canvas, state, cell_size_px);
}

fn board_rect(available: Rect, state: &GameState) -> Rect {
    let bounds = state.bounds();
    let (width, height) = TerminalCanvas::required_size(bounds.width, bounds.height);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(available);
    let [board] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    board
}

/// Projects `state` onto `surface`, one grid cell per `cell_size_px` square.
pub fn render<S: DrawSurface + ?Sized>(surface: &mut S, state: &GameState, cell_size_px: u32) {
    let bounds = state.bounds();
    let width_px = u32::from(bounds.width).saturating_mul(cell_size_px);
    let height_px = u32::from(bounds.height).saturating_mul(cell_size_px);

    surface.clear(width_px, height_px);

    fill_cell(surface, state.food, cell_size_px, PALETTE.food);

    for segment in state.snake.segments() {
        fill_cell(surface, *segment, cell_size_px, PALETTE.snake);
    }

    let (head_x, head_y) = cell_origin(state.snake.head(), cell_size_px);
    surface.stroke_rect(
        head_x,
        head_y,
        cell_size_px,
        cell_size_px,
        PALETTE.head_outline,
        HEAD_OUTLINE_WIDTH_PX,
    );

    if !state.running {
        render_game_over(surface, state.score, width_px, height_px, cell_size_px);
    }
}

fn render_game_over<S: DrawSurface + ?Sized>(
    surface: &mut S,
    score: u32,
    width_px: u32,
    height_px: u32,
    cell_size_px: u32,
) {
    let center_x = px(width_px / 2);
    let center_y = px(height_px / 2);
    let spacing = px(overlay_line_spacing_px(cell_size_px));
    let score_text = format!("Score: {score}");

    surface.draw_text(
        GAME_OVER_TEXT,
        center_x,
        center_y,
        game_over_font(cell_size_px),
        PALETTE.overlay_text,
        TextAlign::Center,
    );
    surface.draw_text(
        &score_text,
        center_x,
        center_y.saturating_add(spacing),
        overlay_font(cell_size_px),
        PALETTE.overlay_text,
        TextAlign::Center,
    );
    surface.draw_text(
        RESTART_HINT_TEXT,
        center_x,
        center_y.saturating_add(spacing.saturating_mul(2)),
        overlay_font(cell_size_px),
        PALETTE.overlay_text,
        TextAlign::Center,
    );
}

fn fill_cell<S: DrawSurface + ?Sized>(
    surface: &mut S,
    cell: Position,
    cell_size_px: u32,
    color: Color,
) {
    let (x, y) = cell_origin(cell, cell_size_px);
    surface.fill_rect(x, y, cell_size_px, cell_size_px, color);
}

fn cell_origin(cell: Position, cell_size_px: u32) -> (i32, i32) {
    let size = px(cell_size_px);
    (cell.x.saturating_mul(size), cell.y.saturating_mul(size))
}

fn px(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use crate::config::{GridSize, PALETTE};
    use crate::snake::{Position, Snake};
    use crate::surface::{Color, DrawSurface, Font, TextAlign};

    use super::render;
    use crate::game::GameState;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Clear(u32, u32),
        Fill(i32, i32, u32, u32, Color),
        Stroke(i32, i32, u32, u32, Color, u32),
        Text(String, i32, i32, Font, TextAlign),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl DrawSurface for Recorder {
        fn clear(&mut self, width: u32, height: u32) {
            self.calls.push(Call::Clear(width, height));
        }

        fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
            self.calls.push(Call::Fill(x, y, width, height, color));
        }

        fn stroke_rect(
            &mut self,
            x: i32,
            y: i32,
            width: u32,
            height: u32,
            color: Color,
            line_width: u32,
        ) {
            self.calls
                .push(Call::Stroke(x, y, width, height, color, line_width));
        }

        fn draw_text(
            &mut self,
            text: &str,
            x: i32,
            y: i32,
            font: Font,
            _color: Color,
            align: TextAlign,
        ) {
            self.calls
                .push(Call::Text(text.to_owned(), x, y, font, align));
        }
    }

    fn running_state() -> GameState {
        let mut state = GameState::new_with_seed(
            GridSize {
                width: 20,
                height: 20,
            },
            1,
        );
        state.snake = Snake::from_segments(vec![Position { x: 3, y: 4 }, Position { x: 3, y: 5 }]);
        state.food = Position { x: 7, y: 1 };
        state
    }

    #[test]
    fn running_frame_draws_board_in_order() {
        let state = running_state();
        let mut surface = Recorder::default();

        render(&mut surface, &state, 20);

        assert_eq!(
            surface.calls,
            vec![
                Call::Clear(400, 400),
                Call::Fill(140, 20, 20, 20, PALETTE.food),
                Call::Fill(60, 80, 20, 20, PALETTE.snake),
                Call::Fill(60, 100, 20, 20, PALETTE.snake),
                Call::Stroke(60, 80, 20, 20, PALETTE.head_outline, 2),
            ]
        );
    }

    #[test]
    fn stopped_frame_adds_centered_overlay() {
        let mut state = running_state();
        state.running = false;
        state.score = 7;
        let mut surface = Recorder::default();

        render(&mut surface, &state, 20);

        let texts: Vec<_> = surface
            .calls
            .iter()
            .filter_map(|call| match call {
                Call::Text(text, x, y, _, align) => Some((text.as_str(), *x, *y, *align)),
                _ => None,
            })
            .collect();
        assert_eq!(
            texts,
            vec![
                ("Game Over!", 200, 200, TextAlign::Center),
                ("Score: 7", 200, 230, TextAlign::Center),
                ("Press Restart or any Arrow Key", 200, 260, TextAlign::Center),
            ]
        );
    }

    #[test]
    fn overlay_lines_follow_cell_size() {
        let mut state = running_state();
        state.running = false;
        let mut surface = Recorder::default();

        render(&mut surface, &state, 100);

        let rows: Vec<_> = surface
            .calls
            .iter()
            .filter_map(|call| match call {
                Call::Text(_, _, y, font, _) => Some((*y, font.size_px)),
                _ => None,
            })
            .collect();
        assert_eq!(rows, vec![(1000, 160), (1150, 100), (1300, 100)]);
    }
}
