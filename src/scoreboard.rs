use std::fmt;

use ratatui::style::Color;

use crate::geometry::AxisAlignedBox;
use crate::settings::Settings;
use crate::stats::GameStats;

const MARGIN: i32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    Empty,
    ControlCharacter(char),
    TooWide { width: i32, max: i32 },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Empty => write!(f, "nothing to render"),
            RenderError::ControlCharacter(c) => write!(f, "cannot render control character {:?}", c),
            RenderError::TooWide { width, max } => {
                write!(f, "text is {} pixels wide, screen allows {}", width, max)
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Rendered text with its bounding box in screen pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct TextImage {
    pub text: String,
    pub fg: Color,
    pub bg: Color,
    pub rect: AxisAlignedBox,
}

/// Monospace metrics: every glyph is half as wide as it is tall.
#[derive(Debug, Clone, Copy)]
pub struct Font {
    pub size: i32,
    max_width: i32,
}

impl Font {
    pub fn new(size: i32, max_width: i32) -> Self {
        Self { size, max_width }
    }

    pub fn glyph_width(&self) -> i32 {
        (self.size / 2).max(1)
    }

    pub fn render(&self, text: &str, fg: Color, bg: Color) -> Result<TextImage, RenderError> {
        if text.is_empty() {
            return Err(RenderError::Empty);
        }
        if let Some(c) = text.chars().find(|c| c.is_control()) {
            return Err(RenderError::ControlCharacter(c));
        }
        let width = text.chars().count() as i32 * self.glyph_width();
        if width > self.max_width {
            return Err(RenderError::TooWide { width, max: self.max_width });
        }
        Ok(TextImage {
            text: text.to_string(),
            fg,
            bg,
            rect: AxisAlignedBox::new(0, 0, width, self.size),
        })
    }
}

/// Score, high score, level, ships left and kill count labels.
pub struct Scoreboard {
    font: Font,
    text_color: Color,
    bg_color: Color,
    screen: AxisAlignedBox,
    score_image: Option<TextImage>,
    high_score_image: Option<TextImage>,
    level_image: Option<TextImage>,
    ships_left_image: Option<TextImage>,
    aliens_killed_image: Option<TextImage>,
}

impl Scoreboard {
    pub fn new(settings: &Settings, stats: &GameStats) -> Self {
        let mut sb = Self {
            font: Font::new(settings.scoreboard_font_size, settings.screen_width),
            text_color: settings.text_color,
            bg_color: settings.bg_color,
            screen: settings.screen_rect(),
            score_image: None,
            high_score_image: None,
            level_image: None,
            ships_left_image: None,
            aliens_killed_image: None,
        };
        sb.prep_all(stats);
        sb
    }

    pub fn prep_all(&mut self, stats: &GameStats) {
        self.prep_score(stats);
        self.prep_high_score(stats);
        self.prep_level(stats);
        self.prep_ships_left(stats);
        self.prep_aliens_killed(stats);
    }

    pub fn prep_score(&mut self, stats: &GameStats) {
        let right = self.screen.right() - MARGIN;
        let text = format!("Score: {}", stats.score);
        render_label(&self.font, self.text_color, self.bg_color, &text, &mut self.score_image, |rect| {
            rect.x = right - rect.width;
            rect.y = MARGIN;
        });
        if let Some(image) = &self.score_image {
            log::debug!("Score label at {:?}", image.rect);
        }
    }

    pub fn prep_high_score(&mut self, stats: &GameStats) {
        let center_x = self.screen.center_x();
        let text = format!("High Score: {}", stats.high_score);
        render_label(&self.font, self.text_color, self.bg_color, &text, &mut self.high_score_image, |rect| {
            rect.x = center_x - rect.width / 2;
            rect.y = MARGIN;
        });
    }

    pub fn prep_level(&mut self, stats: &GameStats) {
        // Hangs under the score label, right-aligned with it.
        let anchor = match &self.score_image {
            Some(image) => image.rect,
            None => AxisAlignedBox::new(self.screen.right() - MARGIN, MARGIN, 0, self.font.size),
        };
        let text = format!("Level: {}", stats.level);
        render_label(&self.font, self.text_color, self.bg_color, &text, &mut self.level_image, |rect| {
            rect.x = anchor.right() - rect.width;
            rect.y = anchor.bottom() + 5;
        });
        if let Some(image) = &self.level_image {
            log::debug!("Level label at {:?}", image.rect);
        }
    }

    pub fn prep_ships_left(&mut self, stats: &GameStats) {
        let text = format!("Ships: {}", stats.ships_left);
        render_label(&self.font, self.text_color, self.bg_color, &text, &mut self.ships_left_image, |rect| {
            rect.x = MARGIN;
            rect.y = MARGIN;
        });
    }

    pub fn prep_aliens_killed(&mut self, stats: &GameStats) {
        let text = format!("Aliens Killed: {}", stats.aliens_killed);
        render_label(&self.font, self.text_color, self.bg_color, &text, &mut self.aliens_killed_image, |rect| {
            rect.x = MARGIN;
            rect.y = 50;
        });
    }

    /// Copies the score into the high score when it is greater.
    pub fn check_high_score(&mut self, stats: &mut GameStats) {
        if stats.check_high_score() {
            self.prep_high_score(stats);
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &TextImage> {
        [
            &self.score_image,
            &self.high_score_image,
            &self.level_image,
            &self.ships_left_image,
            &self.aliens_killed_image,
        ]
        .into_iter()
        .flatten()
    }

    pub fn score_label(&self) -> Option<&TextImage> {
        self.score_image.as_ref()
    }

    pub fn high_score_label(&self) -> Option<&TextImage> {
        self.high_score_image.as_ref()
    }

    pub fn level_label(&self) -> Option<&TextImage> {
        self.level_image.as_ref()
    }
}

/// Renders `text` into `slot` and positions it with `place`. On failure
/// the old image stays in `slot`.
fn render_label(
    font: &Font,
    fg: Color,
    bg: Color,
    text: &str,
    slot: &mut Option<TextImage>,
    place: impl FnOnce(&mut AxisAlignedBox),
) {
    match font.render(text, fg, bg) {
        Ok(mut image) => {
            place(&mut image.rect);
            *slot = Some(image);
        }
        Err(e) => log::warn!("Failed to render {:?}: {}", text, e),
    }
}

/// The start button shown while no game is running.
pub struct Button {
    pub rect: AxisAlignedBox,
    pub color: Color,
    pub msg_image: Option<TextImage>,
}

impl Button {
    pub fn new(settings: &Settings, msg: &str) -> Self {
        let mut rect = AxisAlignedBox::new(0, 0, settings.button_width, settings.button_height);
        rect.set_center((settings.screen_rect().center_x(), settings.screen_rect().center_y()));

        let font = Font::new(settings.button_font_size, settings.screen_width);
        let msg_image = match font.render(msg, settings.button_text_color, settings.button_color) {
            Ok(mut image) => {
                image.rect.set_center((rect.center_x(), rect.center_y()));
                Some(image)
            }
            Err(e) => {
                log::warn!("Failed to render button text: {}", e);
                None
            }
        };
        Self { rect, color: settings.button_color, msg_image }
    }

    pub fn is_clicked(&self, pos: (i32, i32)) -> bool {
        self.rect.contains_point(pos)
    }
}
