use crate::geometry::{AxisAlignedBox, Movable};
use crate::settings::Settings;

/// Player projectile, travels up.
#[derive(Clone, Debug)]
pub struct Bullet {
    rect: AxisAlignedBox,
    y: f32,
}

impl Bullet {
    /// Spawns at the ship's muzzle, the midtop of its rectangle.
    pub fn new(ship_rect: &AxisAlignedBox, settings: &Settings) -> Self {
        let mut rect = AxisAlignedBox::new(0, 0, settings.bullet_width, settings.bullet_height);
        rect.set_midtop(ship_rect.midtop());
        Self { rect, y: rect.y as f32 }
    }

    /// Fully above the top edge.
    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() <= 0
    }
}

impl Movable for Bullet {
    fn rect(&self) -> AxisAlignedBox {
        self.rect
    }

    fn update(&mut self, settings: &Settings) {
        self.y -= settings.bullet_speed;
        self.rect.y = self.y.round() as i32;
    }
}

/// Alien projectile, travels down.
#[derive(Clone, Debug)]
pub struct AlienBullet {
    rect: AxisAlignedBox,
    y: f32,
}

impl AlienBullet {
    /// Spawns hanging from the alien's midbottom.
    pub fn new(alien_rect: &AxisAlignedBox, settings: &Settings) -> Self {
        let mut rect = AxisAlignedBox::new(0, 0, settings.bullet_width, settings.bullet_height);
        rect.set_midtop(alien_rect.midbottom());
        Self { rect, y: rect.y as f32 }
    }

    /// Top edge at or past the bottom of the screen.
    pub fn is_off_screen(&self, settings: &Settings) -> bool {
        self.rect.top() >= settings.screen_height
    }
}

impl Movable for AlienBullet {
    fn rect(&self) -> AxisAlignedBox {
        self.rect
    }

    fn update(&mut self, settings: &Settings) {
        self.y += settings.alien_bullet_speed;
        self.rect.y = self.y.round() as i32;
    }
}
