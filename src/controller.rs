use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::game::{GameState, TickOutcome};
use crate::input::Key;
use crate::timer::{IntervalTimer, TimerHandle};

/// Everything that can change the game, delivered one at a time.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Event {
    /// The periodic game timer fired.
    Tick,
    /// A key was pressed.
    Key(Key),
    /// The explicit restart control was used.
    Restart,
}

/// Sole owner of the game state and its tick timer.
///
/// Events are handled to completion one after another, so the state never
/// sees two mutators at once.
#[derive(Debug)]
pub struct Controller {
    state: GameState,
    timer: IntervalTimer,
    tick_handle: Option<TimerHandle>,
    tick_interval: Duration,
}

impl Controller {
    /// Wraps an existing state, arming the timer when the state is running.
    #[must_use]
    pub fn with_state(state: GameState, tick_interval: Duration, now: Instant) -> Self {
        let mut controller = Self {
            state,
            timer: IntervalTimer::new(),
            tick_handle: None,
            tick_interval,
        };
        if controller.state.running {
            controller.arm_timer(now);
        }
        controller
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns `Some(Event::Tick)` when the armed timer is due.
    pub fn poll_timer(&mut self, now: Instant) -> Option<Event> {
        self.timer.poll(now).then_some(Event::Tick)
    }

    /// Time the host may wait for input before the next tick is due.
    #[must_use]
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_next(now)
    }

    #[must_use]
    pub fn timer_armed(&self) -> bool {
        self.timer.is_armed()
    }

    /// Applies one event. Returns true when the state changed and the frame
    /// should be redrawn.
    pub fn dispatch(&mut self, event: Event, now: Instant) -> bool {
        match event {
            Event::Tick => self.on_tick(),
            Event::Key(key) => self.on_key(key, now),
            Event::Restart => {
                self.restart(now);
                true
            }
        }
    }

    fn on_tick(&mut self) -> bool {
        match self.state.tick() {
            TickOutcome::Moved => true,
            TickOutcome::Ate => {
                debug!(
                    score = self.state.score,
                    food.x = self.state.food.x,
                    food.y = self.state.food.y,
                    "food eaten, respawned"
                );
                true
            }
            TickOutcome::Collided(reason) => {
                self.disarm_timer();
                info!(
                    ?reason,
                    score = self.state.score,
                    length = self.state.snake.len(),
                    "game over"
                );
                true
            }
            TickOutcome::Halted => {
                self.disarm_timer();
                false
            }
        }
    }

    fn on_key(&mut self, key: Key, now: Instant) -> bool {
        let Some(direction) = key.direction() else {
            return false;
        };

        if !self.state.running {
            self.restart(now);
            return true;
        }

        if self.state.set_pending_direction(direction) {
            true
        } else {
            debug!(
                ?direction,
                committed = ?self.state.direction,
                "reversal rejected"
            );
            false
        }
    }

    fn restart(&mut self, now: Instant) {
        self.state.reset();
        self.arm_timer(now);
        info!(
            food.x = self.state.food.x,
            food.y = self.state.food.y,
            "new round"
        );
    }

    fn arm_timer(&mut self, now: Instant) {
        self.disarm_timer();
        self.tick_handle = Some(self.timer.schedule_repeating(self.tick_interval, now));
    }

    fn disarm_timer(&mut self) {
        if let Some(handle) = self.tick_handle.take() {
            let _ = self.timer.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::config::GridSize;
    use crate::game::GameState;
    use crate::input::{Direction, Key};
    use crate::snake::{Position, Snake};

    use super::{Controller, Event};

    const PERIOD: Duration = Duration::from_millis(100);

    fn controller(now: Instant) -> Controller {
        let state = GameState::new_with_seed(
            GridSize {
                width: 20,
                height: 20,
            },
            21,
        );
        Controller::with_state(state, PERIOD, now)
    }

    fn lose(controller: &mut Controller, now: Instant) {
        let mut state = controller.state().clone();
        state.snake = Snake::new(Position { x: 10, y: 0 });
        *controller = Controller::with_state(state, PERIOD, now);
        assert!(controller.dispatch(Event::Tick, now));
        assert!(!controller.state().running);
    }

    #[test]
    fn arrow_key_sets_pending_direction_while_running() {
        let now = Instant::now();
        let mut controller = controller(now);

        assert!(controller.dispatch(Event::Key(Key::ArrowLeft), now));
        assert_eq!(controller.state().pending_direction, Direction::Left);
    }

    #[test]
    fn non_directional_keys_are_ignored() {
        let now = Instant::now();
        let mut controller = controller(now);

        assert!(!controller.dispatch(Event::Key(Key::Other), now));
        assert_eq!(controller.state().pending_direction, Direction::Up);
    }

    #[test]
    fn reversal_key_is_ignored() {
        let now = Instant::now();
        let mut controller = controller(now);

        assert!(!controller.dispatch(Event::Key(Key::ArrowDown), now));
        assert_eq!(controller.state().pending_direction, Direction::Up);
    }

    #[test]
    fn loss_disarms_timer() {
        let now = Instant::now();
        let mut controller = controller(now);

        lose(&mut controller, now);

        assert!(!controller.timer_armed());
        assert_eq!(controller.poll_timer(now + 10 * PERIOD), None);
    }

    #[test]
    fn arrow_after_loss_restarts_and_rearms() {
        let now = Instant::now();
        let mut controller = controller(now);
        lose(&mut controller, now);

        assert!(controller.dispatch(Event::Key(Key::ArrowRight), now));

        let state = controller.state();
        assert!(state.running);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake, Snake::new(Position { x: 10, y: 10 }));
        // The restarting key is not also applied as a turn.
        assert_eq!(state.pending_direction, Direction::Up);
        assert!(controller.timer_armed());
        assert_eq!(controller.poll_timer(now + PERIOD), Some(Event::Tick));
    }

    #[test]
    fn other_keys_after_loss_do_nothing() {
        let now = Instant::now();
        let mut controller = controller(now);
        lose(&mut controller, now);

        assert!(!controller.dispatch(Event::Key(Key::Other), now));
        assert!(!controller.state().running);
    }

    #[test]
    fn restart_control_resets_even_while_running() {
        let now = Instant::now();
        let mut state = controller(now).state().clone();
        state.food = Position { x: 10, y: 9 };
        let mut controller = Controller::with_state(state, PERIOD, now);
        controller.dispatch(Event::Tick, now);
        assert_eq!(controller.state().score, 1);

        assert!(controller.dispatch(Event::Restart, now));

        assert_eq!(controller.state().score, 0);
        assert_eq!(controller.state().snake.len(), 1);
        assert!(controller.state().running);
    }

    #[test]
    fn tick_on_stopped_state_changes_nothing() {
        let now = Instant::now();
        let mut controller = controller(now);
        lose(&mut controller, now);
        let snake = controller.state().snake.clone();

        assert!(!controller.dispatch(Event::Tick, now));
        assert_eq!(controller.state().snake, snake);
    }
}
