use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::game::AlienInvasion;
use crate::ui::field::FieldGeometry;

pub struct App {
    pub should_quit: bool,
    pub game: AlienInvasion,
    /// Set by the renderer each frame; mouse clicks are mapped through it.
    pub field: Option<FieldGeometry>,
    /// Terminals without key release reporting: a held key is let go after
    /// `key_release_ticks` ticks of silence.
    release_emulation: bool,
    key_release_ticks: u64,
    tick: u64,
    left_seen: Option<u64>,
    right_seen: Option<u64>,
}

impl App {
    pub fn new(game: AlienInvasion, release_emulation: bool, key_release_ticks: u64) -> Self {
        Self {
            should_quit: false,
            game,
            field: None,
            release_emulation,
            key_release_ticks,
            tick: 0,
            left_seen: None,
            right_seen: None,
        }
    }

    pub fn on_tick(&mut self) {
        if self.release_emulation {
            self.release_stale_keys();
        }
        self.game.tick();
        self.tick += 1;
    }

    fn release_stale_keys(&mut self) {
        let now = self.tick;
        let limit = self.key_release_ticks;
        let stale = |seen: Option<u64>| seen.is_some_and(|t| now.saturating_sub(t) >= limit);
        if stale(self.left_seen) {
            self.left_seen = None;
            self.game.set_moving_left(false);
        }
        if stale(self.right_seen) {
            self.right_seen = None;
            self.game.set_moving_right(false);
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if key.kind == KeyEventKind::Release {
            match key.code {
                KeyCode::Left => {
                    self.left_seen = None;
                    self.game.set_moving_left(false);
                }
                KeyCode::Right => {
                    self.right_seen = None;
                    self.game.set_moving_right(false);
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Left => {
                self.left_seen = Some(self.tick);
                self.game.set_moving_left(true);
            }
            KeyCode::Right => {
                self.right_seen = Some(self.tick);
                self.game.set_moving_right(true);
            }
            KeyCode::Char(' ') => {
                self.game.fire_bullet();
            }
            KeyCode::Enter => self.game.start_game(),
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            _ => {}
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(pos) = self.field.and_then(|f| f.to_screen(mouse.column, mouse.row)) else {
            return;
        };
        if self.game.check_play_button(pos) {
            log::debug!("Play button clicked at {:?}", pos);
        }
    }
}
