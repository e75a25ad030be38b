use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, KeyEvent, MouseEvent};

pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,
    Tick,
}

/// Hands out input events as they arrive and a `Tick` every `tick_rate`,
/// all on the calling thread.
pub struct EventHandler {
    tick_rate: Duration,
    next_tick: Instant,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            next_tick: Instant::now() + tick_rate,
        }
    }

    pub fn next(&mut self) -> io::Result<Event> {
        loop {
            let now = Instant::now();
            if now >= self.next_tick {
                self.next_tick += self.tick_rate;
                // After a stall, resume from now instead of replaying missed ticks.
                if self.next_tick <= now {
                    self.next_tick = now + self.tick_rate;
                }
                return Ok(Event::Tick);
            }

            if event::poll(self.next_tick - now)? {
                match event::read()? {
                    event::Event::Key(key) => return Ok(Event::Key(key)),
                    event::Event::Mouse(mouse) => return Ok(Event::Mouse(mouse)),
                    event::Event::Resize(..) => return Ok(Event::Resize),
                    _ => {}
                }
            }
        }
    }
}
