use ratatui::style::Color;

use crate::geometry::AxisAlignedBox;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FleetDirection {
    Left,
    Right,
}

impl FleetDirection {
    pub fn sign(&self) -> f32 {
        match self {
            FleetDirection::Left => -1.0,
            FleetDirection::Right => 1.0,
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            FleetDirection::Left => FleetDirection::Right,
            FleetDirection::Right => FleetDirection::Left,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    // Screen
    pub screen_width: i32,
    pub screen_height: i32,
    pub bg_color: Color,

    // Ship
    pub ship_speed: f32,
    pub ship_limit: u32,
    pub ship_color: Color,

    // Player bullets
    pub bullet_speed: f32,
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_color: Color,
    pub bullets_allowed: usize,

    // Aliens
    pub alien_speed: f32,
    pub alien_bullet_speed: f32,
    pub alien_points: u64,
    pub alien_color: Color,
    pub alien_fire_range: u32,
    pub fleet_drop_speed: i32,
    pub fleet_direction: FleetDirection,

    // Level-up scaling
    pub speedup_scale: f32,
    pub score_scale: f32,

    /// Logical pixels per sprite-art cell.
    pub sprite_scale: i32,

    // Scoreboard and button
    pub text_color: Color,
    pub scoreboard_font_size: i32,
    pub button_color: Color,
    pub button_text_color: Color,
    pub button_width: i32,
    pub button_height: i32,
    pub button_font_size: i32,
}

impl Default for Settings {
    fn default() -> Self {
        let mut settings = Self {
            screen_width: 1200,
            screen_height: 800,
            bg_color: Color::Rgb(255, 255, 255),
            ship_speed: 1.5,
            ship_limit: 3,
            ship_color: Color::Rgb(40, 40, 160),
            bullet_speed: 3.0,
            bullet_width: 3,
            bullet_height: 15,
            bullet_color: Color::Rgb(255, 0, 0),
            bullets_allowed: 3,
            alien_speed: 1.0,
            alien_bullet_speed: 0.5,
            alien_points: 50,
            alien_color: Color::Rgb(20, 140, 40),
            alien_fire_range: 15_000,
            fleet_drop_speed: 10,
            fleet_direction: FleetDirection::Right,
            speedup_scale: 1.1,
            score_scale: 1.5,
            sprite_scale: 6,
            text_color: Color::Rgb(0, 0, 0),
            scoreboard_font_size: 24,
            button_color: Color::Rgb(0, 255, 0),
            button_text_color: Color::Rgb(255, 255, 255),
            button_width: 200,
            button_height: 50,
            button_font_size: 36,
        };
        settings.initialize_dynamic_settings();
        settings
    }
}

impl Settings {
    /// Puts every value that changes during play back to its new-game value.
    pub fn initialize_dynamic_settings(&mut self) {
        self.ship_speed = 1.5;
        self.bullet_speed = 3.0;
        self.alien_speed = 1.0;
        self.fleet_direction = FleetDirection::Right;
        self.alien_points = 50;
        self.alien_bullet_speed = 0.5;
    }

    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.alien_speed *= self.speedup_scale;
        self.alien_bullet_speed *= self.speedup_scale;
        // f64 truncates exactly past 2^24; the cast saturates.
        self.alien_points = (self.alien_points as f64 * self.score_scale as f64) as u64;
    }

    pub fn screen_rect(&self) -> AxisAlignedBox {
        AxisAlignedBox::new(0, 0, self.screen_width, self.screen_height)
    }
}
