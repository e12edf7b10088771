use std::time::{Duration, Instant};

use canvas_snake::config::GridSize;
use canvas_snake::controller::{Controller, Event};
use canvas_snake::game::{GameState, TickOutcome};
use canvas_snake::input::{Direction, Key};
use canvas_snake::renderer::render_frame;
use canvas_snake::snake::{Position, Snake};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

const BOARD: GridSize = GridSize {
    width: 20,
    height: 20,
};

#[test]
fn eating_food_from_the_start_cell() {
    let mut state = GameState::new_with_seed(BOARD, 42);
    state.food = Position { x: 10, y: 9 };

    assert_eq!(state.tick(), TickOutcome::Ate);

    assert_eq!(
        state.snake.segments().copied().collect::<Vec<_>>(),
        vec![Position { x: 10, y: 9 }, Position { x: 10, y: 10 }]
    );
    assert_eq!(state.score, 1);
    assert_ne!(state.food, Position { x: 10, y: 9 });
    assert!(!state.snake.occupies(state.food));
}

#[test]
fn leaving_the_left_edge_ends_the_game() {
    let mut state = GameState::new_with_seed(BOARD, 42);
    state.snake = Snake::new(Position { x: 0, y: 5 });
    state.pending_direction = Direction::Left;

    assert!(matches!(state.tick(), TickOutcome::Collided(_)));

    assert!(!state.running);
    assert_eq!(state.snake, Snake::new(Position { x: 0, y: 5 }));
    assert_eq!(state.score, 0);
}

#[test]
fn reversing_into_the_neck_is_ignored() {
    let mut state = GameState::new_with_seed(BOARD, 42);
    state.snake = Snake::from_segments(vec![Position { x: 5, y: 5 }, Position { x: 5, y: 6 }]);

    assert!(!state.set_pending_direction(Direction::Down));
    assert_eq!(state.pending_direction, Direction::Up);
}

#[test]
fn arrow_key_after_loss_starts_a_new_round() {
    let now = Instant::now();
    let mut state = GameState::new_with_seed(BOARD, 42);
    state.snake = Snake::new(Position { x: 10, y: 0 });
    let mut controller = Controller::with_state(state, Duration::from_millis(100), now);
    controller.dispatch(Event::Tick, now);
    assert!(!controller.state().running);

    controller.dispatch(Event::Key(Key::from_identifier("ArrowRight")), now);

    let state = controller.state();
    assert!(state.running);
    assert_eq!(state.score, 0);
    assert_eq!(state.snake, Snake::new(Position { x: 10, y: 10 }));
}

#[test]
fn long_run_keeps_invariants() {
    let mut state = GameState::new_with_seed(BOARD, 7);
    let turns = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];
    let mut last_score = 0;

    for step in 0..400 {
        if step % 7 == 0 {
            let _ = state.set_pending_direction(turns[(step / 7) % turns.len()]);
        }

        let length_before = state.snake.len();
        let food_before = state.food;
        let next_head = state.snake.head().step(state.pending_direction);

        match state.tick() {
            TickOutcome::Ate => {
                assert_eq!(next_head, food_before);
                assert_eq!(state.snake.len(), length_before + 1);
            }
            TickOutcome::Moved => assert_eq!(state.snake.len(), length_before),
            TickOutcome::Collided(_) | TickOutcome::Halted => {
                assert_eq!(state.snake.len(), length_before);
                state.reset();
                assert_eq!(state.score, 0);
                last_score = 0;
                continue;
            }
        }

        assert!(state.score >= last_score);
        last_score = state.score;
        assert!(!state.snake.occupies(state.food));
    }
}

#[test]
fn terminal_frame_shows_score_and_game_over() {
    let mut state = GameState::new_with_seed(BOARD, 3);
    state.running = false;
    state.score = 4;
    let mut terminal = Terminal::new(TestBackend::new(44, 24)).expect("test backend");

    terminal
        .draw(|frame| render_frame(frame, &state, 20))
        .expect("draw should succeed");

    let buffer = terminal.backend().buffer();
    let rows: Vec<String> = (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect();

    assert!(rows[0].contains("Score: 4"));
    assert!(rows.iter().any(|row| row.contains("Game Over!")));
    assert!(rows.iter().any(|row| row.contains("[R] Restart")));
}
