use std::collections::HashMap;
use std::time::Instant;

use ggez::event::EventHandler;
use ggez::graphics::{Canvas, DrawParam};
use ggez::input::keyboard::KeyInput;
use ggez::{Context, GameError, GameResult};
use log::info;
use rand::rngs::ThreadRng;

use crate::app::app_error::AppResult;
use crate::app::control::{Control, State};
use crate::app::keyboard_control::Command;
use crate::app::message::{Message, MessageID, Position};
use crate::app::palette::Palette;
use crate::app::prefs::Prefs;
use crate::app::rendering::{board_mesh, AppleView, DrawCells, SnakeView};
use crate::app::session::{Session, TickOutcome};

pub mod app_error;
pub mod control;
pub mod keyboard_control;
pub mod message;
pub mod palette;
pub mod prefs;
pub mod rendering;
pub mod session;

/// Tells the event loop whether to keep going
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum LoopSignal {
    Continue,
    Quit,
}

pub struct App {
    session: Session<ThreadRng>,
    control: Control,

    prefs: Prefs,
    palette: Palette,
    messages: HashMap<MessageID, Message>,

    /// Last caption pushed to the window
    caption: String,
}

impl App {
    pub fn new(prefs: Prefs, palette: Palette) -> AppResult<Self> {
        let session = Session::new(&prefs, rand::thread_rng())?;
        Ok(Self {
            session,
            control: Control::new(prefs.tick_rate),
            prefs,
            palette,
            messages: HashMap::new(),
            caption: String::new(),
        })
    }

    pub fn prefs(&self) -> &Prefs {
        &self.prefs
    }

    fn display_notification(&mut self, text: &str) {
        let message = Message::new(
            text,
            Position::TopLeft,
            self.palette.text_color,
            Some(self.prefs.message_duration),
        );
        self.messages.insert(MessageID::Notification, message);
    }

    fn restart(&mut self) {
        info!("restart");
        self.session.restart();
        self.messages.remove(&MessageID::Victory);
        self.messages.remove(&MessageID::Paused);
        self.control.play();
    }

    pub fn handle_command(&mut self, command: Command) -> LoopSignal {
        match command {
            Command::Turn(dir) => {
                if self.control.state() == State::Playing {
                    self.session.request_turn(dir)
                }
            }
            Command::Restart => self.restart(),
            Command::TogglePause => match self.control.state() {
                State::Playing => {
                    self.control.pause();
                    let message = Message::new("Paused", Position::Center, self.palette.text_color, None);
                    self.messages.insert(MessageID::Paused, message);
                }
                State::Paused => {
                    self.control.play();
                    self.messages.remove(&MessageID::Paused);
                }
                State::Won => self.restart(),
            },
            Command::ToggleBorder => {
                self.prefs.draw_border = !self.prefs.draw_border;
                let text = if self.prefs.draw_border { "Border on" } else { "Border off" };
                self.display_notification(text);
            }
            Command::Quit => return LoopSignal::Quit,
        }
        LoopSignal::Continue
    }

    /// Run every tick that is due, returns the number of ticks run
    fn run_ticks(&mut self) -> usize {
        let mut ticks = 0;
        while self.control.can_update() {
            ticks += 1;
            if self.session.tick() == TickOutcome::Won {
                self.on_win();
                break;
            }
        }
        ticks
    }

    fn on_win(&mut self) {
        self.control.win();
        let message = Message::new("Victory!", Position::Center, self.palette.text_color, None);
        self.messages.insert(MessageID::Victory, message);
    }
}

impl EventHandler<GameError> for App {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        self.run_ticks();

        let caption = self.session.caption();
        if caption != self.caption {
            ctx.gfx.set_window_title(&caption);
            self.caption = caption;
        }

        let now = Instant::now();
        self.messages.retain(|_, message| !message.is_expired(now));
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, self.palette.background_color);

        let snake = SnakeView(self.session.snake());
        let apple = AppleView(self.session.apple());
        let mesh = board_mesh(
            ctx,
            &[&apple as &dyn DrawCells, &snake],
            self.prefs.cell_size as f32,
            &self.palette,
            self.prefs.draw_border,
        )?;
        canvas.draw(&mesh, DrawParam::default());

        for message in self.messages.values() {
            message.draw(ctx, &mut canvas);
        }

        canvas.finish(ctx)
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> GameResult {
        let command = input.keycode.and_then(|key| self.prefs.controls.command(key));
        if let Some(command) = command {
            if self.handle_command(command) == LoopSignal::Quit {
                info!("quit");
                ctx.request_quit();
            }
        }
        Ok(())
    }
}
