use crate::config::Config;
use crate::game::Game;
use ratatui::{backend::Backend, Terminal};
use std::io;

#[derive(Clone, Debug)]
pub(crate) struct App {
    game: Game,
}

impl App {
    pub(crate) fn new(config: &Config) -> App {
        App {
            game: Game::new(config.styles),
        }
    }

    /// Draw the game & process input until the user quits
    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.game.draw(frame))?;
            if self.game.process_input()?.is_break() {
                return Ok(());
            }
        }
    }
}
