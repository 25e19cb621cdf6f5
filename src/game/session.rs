use rand::rngs::ThreadRng;

use super::command::{Command, Direction};
use super::config::GameConfig;
use super::grid::Grid;
use super::snake::{Position, Snake};

/// The complete mutable state of one play-through.
///
/// The session owns everything that changes while playing, including the
/// current speed, so the frame loop reads its rate from here instead of any
/// shared configuration.
pub struct Session {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Position,
    pending_direction: Option<Direction>,
    score: u32,
    speed: u32,
    paused: bool,
    game_over: bool,
    rng: ThreadRng,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        let grid = config.grid();
        let mut rng = rand::thread_rng();
        let snake = Snake::new(grid.center(), Direction::Right, config.initial_snake_length);
        let food = grid
            .place_food(&mut rng, &snake.body)
            .expect("a fresh board has free cells");
        let speed = config.initial_speed;

        Self {
            grid,
            snake,
            food,
            pending_direction: None,
            score: 0,
            speed,
            paused: false,
            game_over: false,
            rng,
            config,
        }
    }

    /// Apply a player command. Commands that make no sense in the current
    /// state are ignored, never errors.
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Move(direction) => {
                if !self.game_over {
                    self.pending_direction = Some(direction);
                }
            }
            Command::TogglePause => {
                if !self.game_over {
                    self.paused = !self.paused;
                }
            }
            Command::Restart => {
                if self.game_over {
                    self.restart();
                }
            }
            // Quit never reaches the session; the frame loop consumes it
            Command::Quit => {}
        }
    }

    /// Advance the game by one step. No-op while paused or game over.
    pub fn tick(&mut self) {
        if self.paused || self.game_over {
            return;
        }

        // A heading change lands exactly once, at the start of the tick;
        // a reversal into the neck is dropped.
        if let Some(direction) = self.pending_direction.take() {
            if !self.snake.direction.is_opposite(direction) {
                self.snake.direction = direction;
            }
        }

        let new_head = self.snake.next_head();

        if !self.grid.contains(new_head) || self.snake.occupies(new_head) {
            self.game_over = true;
            return;
        }

        let ate = new_head == self.food;
        self.snake.advance(ate);

        if ate {
            self.score += 1;
            if self.score % self.config.points_per_speedup == 0 {
                self.speed = (self.speed + self.config.speed_increment).min(self.config.max_speed);
            }
            // Board full: keep the stale food cell; the next tick has
            // nowhere left to go and ends the run on its own.
            if let Some(food) = self.grid.place_food(&mut self.rng, &self.snake.body) {
                self.food = food;
            }
        }
    }

    fn restart(&mut self) {
        self.snake = Snake::new(
            self.grid.center(),
            Direction::Right,
            self.config.initial_snake_length,
        );
        self.food = self
            .grid
            .place_food(&mut self.rng, &self.snake.body)
            .expect("a fresh board has free cells");
        self.pending_direction = None;
        self.score = 0;
        self.speed = self.config.initial_speed;
        self.paused = false;
        self.game_over = false;
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current tick rate in ticks per second
    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 10x10 session with the snake at its default centered start and the
    /// food pushed into a corner, out of the snake's immediate path.
    fn small_session() -> Session {
        let mut session = Session::new(GameConfig::small());
        session.food = Position::new(0, 0);
        session
    }

    #[test]
    fn test_new_session() {
        let session = Session::new(GameConfig::small());

        assert!(!session.is_game_over());
        assert!(!session.is_paused());
        assert_eq!(session.score(), 0);
        assert_eq!(session.speed(), 10);
        assert_eq!(session.snake().len(), 3);
        assert_eq!(session.snake().head(), Position::new(5, 5));
        assert_eq!(session.snake().direction, Direction::Right);
        assert!(!session.snake().occupies(session.food()));
    }

    #[test]
    fn test_free_move_keeps_length() {
        let mut session = small_session();

        session.tick();

        assert!(!session.is_game_over());
        assert_eq!(session.snake().len(), 3);
        assert_eq!(session.snake().head(), Position::new(6, 5));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut session = small_session();
        session.food = Position::new(6, 5);

        session.tick();

        assert_eq!(session.score(), 1);
        assert_eq!(session.snake().len(), 4);
        assert!(!session.snake().occupies(session.food()));
    }

    #[test]
    fn test_food_relocation_scenario() {
        // Snake [(5,5),(4,5),(3,5)] heading right, food at (6,5)
        let mut session = small_session();
        session.snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        session.food = Position::new(6, 5);

        session.tick();

        let body = &session.snake().body;
        assert_eq!(
            body,
            &vec![
                Position::new(6, 5),
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(3, 5),
            ]
        );
        assert_eq!(session.score(), 1);
        assert!(!session.snake().occupies(session.food()));
    }

    #[test]
    fn test_wall_collision_leaves_body_unchanged() {
        let mut session = small_session();
        session.snake = Snake::new(Position::new(9, 5), Direction::Right, 3);
        let body_before = session.snake().body.clone();

        session.tick();

        assert!(session.is_game_over());
        assert_eq!(session.snake().body, body_before);
    }

    #[test]
    fn test_self_collision() {
        let mut session = small_session();
        session.snake = Snake::new(Position::new(5, 5), Direction::Right, 5);

        // Hook back into the body: down, left, then up into (4,5)
        session.handle_command(Command::Move(Direction::Down));
        session.tick();
        session.handle_command(Command::Move(Direction::Left));
        session.tick();
        assert!(!session.is_game_over());

        session.handle_command(Command::Move(Direction::Up));
        session.tick();

        assert!(session.is_game_over());
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut session = small_session();

        session.handle_command(Command::Move(Direction::Left));
        session.tick();

        assert_eq!(session.snake().direction, Direction::Right);
        assert_eq!(session.snake().head(), Position::new(6, 5));
    }

    #[test]
    fn test_turn_is_applied_next_tick() {
        let mut session = small_session();

        session.handle_command(Command::Move(Direction::Down));
        session.tick();

        assert_eq!(session.snake().direction, Direction::Down);
        assert_eq!(session.snake().head(), Position::new(5, 6));
    }

    #[test]
    fn test_last_keypress_before_tick_wins() {
        let mut session = small_session();

        // An up-then-left burst within one tick must not reverse the snake:
        // only the final request is live when the tick lands.
        session.handle_command(Command::Move(Direction::Up));
        session.handle_command(Command::Move(Direction::Left));
        session.tick();

        assert_eq!(session.snake().direction, Direction::Right);
    }

    #[test]
    fn test_speed_ramps_every_five_points() {
        let mut session = small_session();
        session.score = 4;
        session.food = Position::new(6, 5);

        session.tick();

        assert_eq!(session.score(), 5);
        assert_eq!(session.speed(), 12);
    }

    #[test]
    fn test_speed_is_capped() {
        let mut session = small_session();
        session.score = 4;
        session.speed = 24;
        session.food = Position::new(6, 5);

        session.tick();

        assert_eq!(session.speed(), 25);
    }

    #[test]
    fn test_off_multiple_score_leaves_speed() {
        let mut session = small_session();
        session.score = 2;
        session.food = Position::new(6, 5);

        session.tick();

        assert_eq!(session.score(), 3);
        assert_eq!(session.speed(), 10);
    }

    #[test]
    fn test_pause_blocks_ticks() {
        let mut session = small_session();
        let head = session.snake().head();

        session.handle_command(Command::TogglePause);
        assert!(session.is_paused());
        session.tick();
        assert_eq!(session.snake().head(), head);

        session.handle_command(Command::TogglePause);
        session.tick();
        assert_eq!(session.snake().head(), Position::new(6, 5));
    }

    #[test]
    fn test_commands_ignored_while_game_over() {
        let mut session = small_session();
        session.game_over = true;

        session.handle_command(Command::Move(Direction::Down));
        assert!(session.pending_direction.is_none());

        session.handle_command(Command::TogglePause);
        assert!(!session.is_paused());

        let head = session.snake().head();
        session.tick();
        assert_eq!(session.snake().head(), head);
    }

    #[test]
    fn test_restart_requires_game_over() {
        let mut session = small_session();
        session.score = 3;

        session.handle_command(Command::Restart);

        assert_eq!(session.score(), 3);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut session = small_session();
        session.score = 7;
        session.speed = 20;
        session.paused = true;
        session.game_over = true;

        session.handle_command(Command::Restart);

        assert!(!session.is_game_over());
        assert!(!session.is_paused());
        assert_eq!(session.score(), 0);
        assert_eq!(session.speed(), 10);
        assert_eq!(session.snake().len(), 3);
        assert_eq!(session.snake().head(), Position::new(5, 5));
        assert_eq!(session.snake().direction, Direction::Right);
        assert!(!session.snake().occupies(session.food()));
    }

    #[test]
    fn test_wall_collision_at_last_column() {
        let mut session = small_session();
        session.snake = Snake::new(Position::new(9, 2), Direction::Right, 3);
        let body_before = session.snake().body.clone();

        session.tick();

        assert!(session.is_game_over());
        assert_eq!(session.snake().body, body_before);
    }

    #[test]
    fn test_quit_is_a_session_noop() {
        let mut session = small_session();
        let head = session.snake().head();

        session.handle_command(Command::Quit);

        assert!(!session.is_game_over());
        assert_eq!(session.snake().head(), head);
    }
}
