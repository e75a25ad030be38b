use rand::Rng;

use super::AlienBullet;
use crate::geometry::{AxisAlignedBox, Movable};
use crate::settings::Settings;

#[derive(Clone, Debug)]
pub struct Alien {
    rect: AxisAlignedBox,
    x: f32,
}

impl Alien {
    /// A new alien sits one body-width and one body-height in from the
    /// top-left corner.
    #[cfg(test)]
    pub fn new(width: i32, height: i32) -> Self {
        Self::at(width, height, width, height)
    }

    pub fn at(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            rect: AxisAlignedBox::new(x, y, width, height),
            x: x as f32,
        }
    }

    /// Touching or past either side of the screen.
    pub fn check_edges(&self, settings: &Settings) -> bool {
        let screen = settings.screen_rect();
        self.rect.right() >= screen.right() || self.rect.left() <= screen.left()
    }

    pub fn drop_by(&mut self, amount: i32) {
        self.rect.y += amount;
    }

    /// Rolls `1..=alien_fire_range` and fires on a 1, so one chance in
    /// `alien_fire_range` per alien per tick.
    pub fn fire_bullet<R: Rng + ?Sized>(&self, rng: &mut R, settings: &Settings) -> Option<AlienBullet> {
        let roll = rng.gen_range(1..=settings.alien_fire_range.max(1));
        if roll < 2 {
            Some(AlienBullet::new(&self.rect, settings))
        } else {
            None
        }
    }
}

impl Movable for Alien {
    fn rect(&self) -> AxisAlignedBox {
        self.rect
    }

    fn update(&mut self, settings: &Settings) {
        self.x += settings.alien_speed * settings.fleet_direction.sign();
        self.rect.x = self.x.round() as i32;
    }
}
