use crate::geometry::{AxisAlignedBox, Movable};
use crate::settings::Settings;

pub struct Ship {
    rect: AxisAlignedBox,
    x: f32,
    max_x: f32,
    pub moving_right: bool,
    pub moving_left: bool,
}

impl Ship {
    pub fn new(width: i32, height: i32, settings: &Settings) -> Self {
        let mut ship = Self {
            rect: AxisAlignedBox::new(0, 0, width, height),
            x: 0.0,
            max_x: (settings.screen_width - width).max(0) as f32,
            moving_right: false,
            moving_left: false,
        };
        ship.center_ship(settings);
        ship
    }

    /// Back to bottom-center of the screen.
    pub fn center_ship(&mut self, settings: &Settings) {
        self.rect.set_midbottom(settings.screen_rect().midbottom());
        self.x = self.rect.x as f32;
    }

    #[cfg(test)]
    pub fn x(&self) -> f32 {
        self.x
    }
}

impl Movable for Ship {
    fn rect(&self) -> AxisAlignedBox {
        self.rect
    }

    /// A step that would leave the screen is skipped, not shortened.
    fn update(&mut self, settings: &Settings) {
        if self.moving_right && self.x + settings.ship_speed <= self.max_x {
            self.x += settings.ship_speed;
        }
        if self.moving_left && self.x - settings.ship_speed >= 0.0 {
            self.x -= settings.ship_speed;
        }
        self.rect.x = self.x.round() as i32;
    }
}
