use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};

use crate::game::{Command, GameConfig, Session};
use crate::input::InputMapper;
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// One frame per tick: the frame period is the inverse of the tick rate
fn frame_interval(speed: u32) -> Duration {
    Duration::from_millis(1000 / u64::from(speed.max(1)))
}

/// The frame loop: terminal lifecycle, input pumping, one tick and one
/// render per frame.
pub struct App {
    session: Session,
    metrics: GameMetrics,
    renderer: Renderer,
    mapper: InputMapper,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        Self {
            session: Session::new(config),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            mapper: InputMapper::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Terminal setup; any failure here is fatal, before the loop starts
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor().context("failed to hide cursor")?;
        terminal.clear().context("failed to clear terminal")?;

        let result = self.run_frame_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_frame_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut events = EventStream::new();

        // The tick rate belongs to the session and ramps mid-game, so the
        // loop re-reads it every frame and rebuilds the interval on change.
        let mut rate = self.session.speed();
        let mut frames = tokio::time::interval(frame_interval(rate));
        frames.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                maybe_event = events.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = frames.tick() => {
                    self.step();
                    self.metrics.update();
                    terminal
                        .draw(|frame| self.renderer.render(frame, &self.session, &self.metrics))
                        .context("failed to draw frame")?;

                    if self.session.speed() != rate {
                        rate = self.session.speed();
                        let period = frame_interval(rate);
                        frames = tokio::time::interval_at(Instant::now() + period, period);
                        frames.set_missed_tick_behavior(MissedTickBehavior::Delay);
                    }
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// One game tick, with the game-over transition reported to metrics
    fn step(&mut self) {
        let was_over = self.session.is_game_over();
        self.session.tick();
        if !was_over && self.session.is_game_over() {
            self.metrics.on_game_over(self.session.score());
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.mapper.map_key(key) {
                Some(Command::Quit) => self.should_quit = true,
                Some(Command::Restart) => {
                    // The session decides whether the restart is honored;
                    // the metrics clock restarts only when it is.
                    if self.session.is_game_over() {
                        self.metrics.on_game_start();
                    }
                    self.session.handle_command(Command::Restart);
                }
                Some(command) => self.session.handle_command(command),
                None => {}
            }
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("failed to leave alternate screen")?;
        terminal.show_cursor().context("failed to show cursor")?;
        Ok(())
    }
}
