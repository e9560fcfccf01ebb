mod board;
mod clock;
mod grid;
mod input;
mod snake;
pub(crate) use self::input::Arrow;
use self::board::{Board, CellKind, StepOutcome};
use self::clock::Clock;
use self::input::KeyState;
use crate::command::Command;
use crate::config::Palette;
use crate::consts;
use crate::util::center_rect;
use crossterm::event::{poll, read, Event, KeyEventKind};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::ops::ControlFlow;
use std::time::Instant;

/// Size of the bordered board on screen, in terminal cells
const BLOCK_SIZE: Size = Size {
    width: consts::GAME_SIZE.width * consts::CELL_FOOTPRINT.width + 2,
    height: consts::GAME_SIZE.height * consts::CELL_FOOTPRINT.height + 2,
};

/// Size of everything the game draws: the board plus a status line above it
/// and a help line below it
const DISPLAY_SIZE: Size = Size {
    width: BLOCK_SIZE.width,
    height: BLOCK_SIZE.height + 2,
};

#[derive(Clone, Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    board: Board,
    keys: KeyState,
    clock: Clock,
    palette: Palette,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(palette: Palette) -> Self {
        Game::new_with_rng(palette, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(palette: Palette, rng: R) -> Game<R> {
        let game = Game {
            rng,
            board: Board::new(),
            keys: KeyState::new(),
            clock: Clock::new(consts::FRAME_STEP),
            palette,
        };
        tracing::debug!(
            snake_len = game.board.snake_len(),
            food = ?game.board.food,
            "Starting new game"
        );
        game
    }

    /// Wait for either the next terminal event or the next step, whichever
    /// comes first, and handle it.
    pub(crate) fn process_input(&mut self) -> io::Result<ControlFlow<()>> {
        let wait = self.clock.until_due(Instant::now());
        if wait.is_zero() || !poll(wait)? {
            if let Some(outcome) = self.tick(Instant::now()) {
                self.log_step(outcome);
            }
            Ok(ControlFlow::Continue(()))
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// If a step is due at `now`, advance the snake according to the latched
    /// direction.  The step time is recorded even if the snake did not move.
    fn tick(&mut self, now: Instant) -> Option<StepOutcome> {
        if !self.clock.due(now) {
            return None;
        }
        let outcome = self.board.step(self.keys.intent(), &mut self.rng);
        self.clock.record(now);
        Some(outcome)
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> ControlFlow<()> {
        let Event::Key(ev) = event else {
            return ControlFlow::Continue(());
        };
        match (Command::from_key_event(ev), ev.kind) {
            (Some(Command::Move(arrow)), KeyEventKind::Release) => self.keys.release(arrow),
            (Some(Command::Move(arrow)), _) => self.keys.press(arrow),
            (Some(Command::Quit), KeyEventKind::Press) => {
                tracing::debug!(snake_len = self.board.snake_len(), "Quitting");
                return ControlFlow::Break(());
            }
            _ => (),
        }
        ControlFlow::Continue(())
    }

    fn log_step(&self, outcome: StepOutcome) {
        match outcome {
            StepOutcome::Ate { head } => tracing::debug!(
                ?head,
                snake_len = self.board.snake_len(),
                new_food = ?self.board.food,
                "Snake ate the food"
            ),
            StepOutcome::Moved { head } => tracing::trace!(?head, "Snake moved"),
            StepOutcome::Idle => tracing::trace!("No direction latched; snake stayed put"),
        }
    }

    fn cell_style(&self, kind: CellKind) -> Style {
        match kind {
            CellKind::Snake => self.palette.snake,
            CellKind::Food => self.palette.food,
            CellKind::Background { odd: false } => self.palette.background_even,
            CellKind::Background { odd: true } => self.palette.background_odd,
        }
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = center_rect(area, DISPLAY_SIZE);
        let [status_area, block_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::raw(format!(" Length: {}", self.board.snake_len())).render(status_area, buf);
        Block::bordered().render(block_area, buf);

        let board_area = block_area.inner(Margin::new(1, 1));
        let footprint = consts::CELL_FOOTPRINT;
        for (index, pos) in self.board.bounds.positions().enumerate() {
            let cell = Rect {
                x: board_area.x.saturating_add(pos.x.saturating_mul(footprint.width)),
                y: board_area.y.saturating_add(pos.y.saturating_mul(footprint.height)),
                width: footprint.width,
                height: footprint.height,
            }
            .intersection(board_area);
            if !cell.is_empty() {
                buf.set_style(cell, self.cell_style(self.board.cell_kind(index)));
            }
        }

        Line::from_iter([
            Span::raw(" Move: "),
            Span::styled("←↓↑→", consts::KEY_STYLE),
            Span::raw("  Quit: "),
            Span::styled("q", consts::KEY_STYLE),
        ])
        .render(help_area, buf);
    }
}
