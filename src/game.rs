use std::path::PathBuf;

use rand::RngCore;

use crate::assets::{AssetError, Images, ALIEN_IMAGE};
use crate::audio::{Cue, Sounds};
use crate::entities::{Alien, AlienBullet, Bullet, Ship};
use crate::fleet;
use crate::geometry::{collides_any, Movable};
use crate::scoreboard::{Button, Scoreboard};
use crate::settings::Settings;
use crate::stats::GameStats;

#[cfg(test)]
mod tests;

/// Owns every piece of game state and advances it one tick at a time.
pub struct AlienInvasion {
    settings: Settings,
    stats: GameStats,
    scoreboard: Scoreboard,
    play_button: Button,
    images: Images,
    sounds: Sounds,
    rng: Box<dyn RngCore>,
    ship: Ship,
    bullets: Vec<Bullet>,
    aliens: Vec<Alien>,
    alien_bullets: Vec<AlienBullet>,
    pointer_visible: bool,
}

impl AlienInvasion {
    pub fn new(settings: Settings, images: Images, sounds: Sounds, rng: Box<dyn RngCore>) -> Result<Self, AssetError> {
        let (cols, rows) = fleet::fleet_dimensions(
            images.alien.width(),
            images.alien.height(),
            images.ship.height(),
            &settings,
        );
        if cols == 0 || rows == 0 {
            return Err(AssetError::Malformed {
                path: PathBuf::from(ALIEN_IMAGE),
                reason: format!(
                    "a {}x{} alien leaves no room for a fleet on a {}x{} screen",
                    images.alien.width(),
                    images.alien.height(),
                    settings.screen_width,
                    settings.screen_height
                ),
            });
        }

        let stats = GameStats::new(&settings);
        let scoreboard = Scoreboard::new(&settings, &stats);
        let play_button = Button::new(&settings, "Play");
        let ship = Ship::new(images.ship.width(), images.ship.height(), &settings);
        let mut game = Self {
            settings,
            stats,
            scoreboard,
            play_button,
            images,
            sounds,
            rng,
            ship,
            bullets: Vec::new(),
            aliens: Vec::new(),
            alien_bullets: Vec::new(),
            pointer_visible: true,
        };
        game.create_fleet();
        Ok(game)
    }

    // ── Accessors ──────────────────────────────────────────────────────

    pub fn settings(&self) -> &Settings { &self.settings }
    pub fn stats(&self) -> &GameStats { &self.stats }
    pub fn scoreboard(&self) -> &Scoreboard { &self.scoreboard }
    pub fn play_button(&self) -> &Button { &self.play_button }
    pub fn images(&self) -> &Images { &self.images }
    pub fn ship(&self) -> &Ship { &self.ship }
    pub fn bullets(&self) -> &[Bullet] { &self.bullets }
    pub fn aliens(&self) -> &[Alien] { &self.aliens }
    pub fn alien_bullets(&self) -> &[AlienBullet] { &self.alien_bullets }
    pub fn pointer_visible(&self) -> bool { self.pointer_visible }
    pub fn is_active(&self) -> bool { self.stats.game_active }

    // ── Input ──────────────────────────────────────────────────────────

    pub fn set_moving_left(&mut self, moving: bool) {
        self.ship.moving_left = moving;
    }

    pub fn set_moving_right(&mut self, moving: bool) {
        self.ship.moving_right = moving;
    }

    /// Fires from the ship unless the magazine is full. Returns whether a
    /// bullet left the ship.
    pub fn fire_bullet(&mut self) -> bool {
        if !self.stats.game_active || self.bullets.len() >= self.settings.bullets_allowed {
            return false;
        }
        self.bullets.push(Bullet::new(&self.ship.rect(), &self.settings));
        self.sounds.play(Cue::Shot);
        true
    }

    /// Starts a new game if `pos` is on the play button and no game is
    /// running.
    pub fn check_play_button(&mut self, pos: (i32, i32)) -> bool {
        if self.play_button.is_clicked(pos) && !self.stats.game_active {
            self.start_game();
            true
        } else {
            false
        }
    }

    pub fn start_game(&mut self) {
        if self.stats.game_active {
            return;
        }
        self.settings.initialize_dynamic_settings();
        self.stats.reset_stats(&self.settings);
        self.stats.game_active = true;
        self.scoreboard.prep_all(&self.stats);

        self.aliens.clear();
        self.bullets.clear();
        self.alien_bullets.clear();
        self.create_fleet();
        self.ship.center_ship(&self.settings);
        self.pointer_visible = false;
        log::info!("New game started (high score {})", self.stats.high_score);
    }

    // ── Tick ───────────────────────────────────────────────────────────

    pub fn tick(&mut self) {
        if !self.stats.game_active {
            return;
        }
        self.ship.update(&self.settings);
        self.update_bullets();
        self.update_aliens();
        self.update_alien_bullets();
    }

    fn update_bullets(&mut self) {
        for bullet in &mut self.bullets {
            bullet.update(&self.settings);
        }
        self.bullets.retain(|b| !b.is_off_screen());
        self.check_bullet_alien_collisions();
    }

    fn check_bullet_alien_collisions(&mut self) {
        let mut alien_alive = vec![true; self.aliens.len()];
        let mut bullet_spent = vec![false; self.bullets.len()];
        let mut any_hit = false;

        for (bi, bullet) in self.bullets.iter().enumerate() {
            let rect = bullet.rect();
            let mut group = 0;
            for (ai, alien) in self.aliens.iter().enumerate() {
                if alien_alive[ai] && alien.rect().overlaps(&rect) {
                    alien_alive[ai] = false;
                    group += 1;
                }
            }
            if group > 0 {
                bullet_spent[bi] = true;
                any_hit = true;
                self.stats.record_kills(self.settings.alien_points, group);
                self.sounds.play(Cue::Explosion);
            }
        }

        if any_hit {
            self.bullets = compact(std::mem::take(&mut self.bullets), |i| !bullet_spent[i]);
            self.aliens = compact(std::mem::take(&mut self.aliens), |i| alien_alive[i]);
            self.scoreboard.prep_score(&self.stats);
            self.scoreboard.prep_aliens_killed(&self.stats);
            self.scoreboard.check_high_score(&mut self.stats);
        }

        if self.aliens.is_empty() {
            self.start_new_level();
        }
    }

    fn start_new_level(&mut self) {
        self.bullets.clear();
        self.alien_bullets.clear();
        self.create_fleet();
        self.settings.increase_speed();
        self.stats.level += 1;
        self.scoreboard.prep_level(&self.stats);
        log::info!(
            "Fleet destroyed, level {} (alien speed {:.2}, {} points each)",
            self.stats.level,
            self.settings.alien_speed,
            self.settings.alien_points
        );
    }

    fn create_fleet(&mut self) {
        self.aliens = fleet::create_fleet(
            self.images.alien.width(),
            self.images.alien.height(),
            self.images.ship.height(),
            &self.settings,
        );
    }

    fn check_fleet_edges(&mut self) {
        if self.aliens.iter().any(|a| a.check_edges(&self.settings)) {
            self.change_fleet_direction();
        }
    }

    fn change_fleet_direction(&mut self) {
        for alien in &mut self.aliens {
            alien.drop_by(self.settings.fleet_drop_speed);
        }
        self.settings.fleet_direction = self.settings.fleet_direction.flipped();
    }

    fn update_aliens(&mut self) {
        self.check_fleet_edges();
        for alien in &mut self.aliens {
            alien.update(&self.settings);
            if let Some(bullet) = alien.fire_bullet(&mut *self.rng, &self.settings) {
                self.alien_bullets.push(bullet);
            }
        }

        if collides_any(&self.ship.rect(), &self.aliens) {
            log::info!("Ship rammed by an alien");
            self.ship_hit();
        }
        self.check_aliens_bottom();
    }

    fn check_aliens_bottom(&mut self) {
        let bottom = self.settings.screen_rect().bottom();
        if self.aliens.iter().any(|a| a.rect().bottom() >= bottom) {
            log::info!("An alien reached the bottom of the screen");
            self.ship_hit();
        }
    }

    fn update_alien_bullets(&mut self) {
        for bullet in &mut self.alien_bullets {
            bullet.update(&self.settings);
        }
        let settings = &self.settings;
        self.alien_bullets.retain(|b| !b.is_off_screen(settings));

        if collides_any(&self.ship.rect(), &self.alien_bullets) {
            log::info!("Ship shot down");
            self.ship_hit();
        }
    }

    /// Takes a life. With ships to spare the wave restarts around a
    /// recentered ship; losing the last one ends the game.
    fn ship_hit(&mut self) {
        if !self.stats.game_active {
            return;
        }
        self.stats.ships_left = self.stats.ships_left.saturating_sub(1);
        self.scoreboard.prep_ships_left(&self.stats);

        if self.stats.ships_left > 0 {
            self.aliens.clear();
            self.bullets.clear();
            self.alien_bullets.clear();
            self.create_fleet();
            self.ship.center_ship(&self.settings);
            log::info!("{} ships left", self.stats.ships_left);
        } else {
            self.stats.game_active = false;
            self.pointer_visible = true;
            log::info!(
                "Game over: score {}, level {}, {} aliens killed",
                self.stats.score,
                self.stats.level,
                self.stats.aliens_killed
            );
        }
    }
}

/// Keeps the items whose index passes `keep`, preserving order.
fn compact<T>(items: Vec<T>, keep: impl Fn(usize) -> bool) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| keep(i).then_some(item))
        .collect()
}
