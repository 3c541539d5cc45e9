use crate::command::Command;
use crate::game::{Flow, Game};
use crate::render::Screen;
use crossterm::event::{poll, read, KeyEvent};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    show_barrier: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(game: Game<R>, show_barrier: bool) -> App<R> {
        App { game, show_barrier }
    }

    /// Run the frame loop until the player quits.  Each frame handles all
    /// pending input, steps the game if it is being played, waits out the
    /// rest of the frame period, and then redraws.
    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        loop {
            let started = Instant::now();
            if self.process_input()? == Flow::Quit {
                return Ok(());
            }
            self.game.frame();
            let period = self.game.timing().frame_period(self.game.scene());
            if let Some(rest) = period.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
            self.draw(&mut terminal)?;
        }
    }

    fn process_input(&mut self) -> io::Result<Flow> {
        while poll(Duration::ZERO)? {
            if let Some(ev) = read()?.as_key_event() {
                if self.handle_key(ev) == Flow::Quit {
                    return Ok(Flow::Quit);
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_key(&mut self, ev: KeyEvent) -> Flow {
        match Command::from_key_event(ev, self.game.scene(), self.game.timing().setting()) {
            Some(cmd) => self.game.handle_command(cmd),
            None => Flow::Continue,
        }
    }
}

impl<R> App<R> {
    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let screen = Screen {
            snapshot: self.game.snapshot(),
            show_barrier: self.show_barrier,
        };
        terminal.draw(|frame| frame.render_widget(&screen, frame.area()))?;
        Ok(())
    }
}
