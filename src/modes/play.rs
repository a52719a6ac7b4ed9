use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::{future, StreamExt};
use log::{debug, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::{interval, interval_at, Instant, Interval};

use crate::game::{GameConfig, GameEngine, GameState, Phase, TickOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionStats;
use crate::render::Renderer;

pub struct PlayMode {
    engine: GameEngine,
    state: GameState,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    tick_interval: Duration,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Self {
        let tick_interval = Duration::from_millis(config.tick_interval_ms);
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            tick_interval,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // The game tick timer exists only while a run is in progress;
        // see reconcile_tick_timer
        let mut tick_timer: Option<Interval> = None;

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = next_tick(&mut tick_timer) => {
                    self.advance_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.stats.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.stats);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            self.reconcile_tick_timer(&mut tick_timer);

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    let was_waiting = self.state.phase == Phase::NotStarted;
                    self.engine.queue_direction(&mut self.state, direction);
                    if was_waiting && self.state.phase == Phase::Running {
                        self.stats.on_game_start();
                    }
                }
                KeyAction::Restart => {
                    // A restart only leaves the game-over state
                    if self.state.phase == Phase::GameOver {
                        self.restart_game();
                    }
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn advance_game(&mut self) {
        let outcome = self.engine.tick(&mut self.state);
        if let TickOutcome::Crashed(_) = outcome {
            self.stats.on_game_over(self.state.score);
        }
    }

    fn restart_game(&mut self) {
        self.state = self.engine.reset();
        self.stats.on_reset();
        info!("board reset, waiting for input");
    }

    /// Keep the tick timer's existence in lockstep with the phase: created
    /// when a run starts (first tick lands one full interval later), dropped
    /// on any transition out of Running.
    fn reconcile_tick_timer(&self, timer: &mut Option<Interval>) {
        let running = self.state.phase == Phase::Running;
        if running && timer.is_none() {
            let start = Instant::now() + self.tick_interval;
            *timer = Some(interval_at(start, self.tick_interval));
            debug!("tick timer started, period {:?}", self.tick_interval);
        } else if !running && timer.is_some() {
            *timer = None;
            debug!("tick timer stopped");
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Awaits the next game tick, or parks forever while no timer exists.
async fn next_tick(timer: &mut Option<Interval>) {
    match timer {
        Some(timer) => {
            timer.tick().await;
        }
        None => future::pending().await,
    }
}
