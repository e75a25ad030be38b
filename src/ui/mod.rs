pub mod field;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::game::AlienInvasion;
use crate::geometry::Movable;
use crate::scoreboard::TextImage;
use field::{BrailleField, FieldGeometry};

const MIN_COLS: u16 = 30;
const MIN_ROWS: u16 = 10;

pub fn render(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(80, 255, 80)))
        .title(" Alien Invasion ")
        .title_style(Style::default().fg(Color::Rgb(100, 255, 100)).add_modifier(Modifier::BOLD));
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Field
            Constraint::Length(1), // Help
        ])
        .split(inner);

    render_help(frame, chunks[1]);

    if chunks[0].width < MIN_COLS || chunks[0].height < MIN_ROWS {
        app.field = None;
        let msg = Paragraph::new(Line::from(Span::styled(
            "Terminal too small, please enlarge it",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(msg, chunks[0]);
        return;
    }

    let settings = app.game.settings();
    let geometry = FieldGeometry::fit(chunks[0], settings.screen_width, settings.screen_height);
    app.field = Some(geometry);
    render_field(frame, &app.game, &geometry);
}

fn render_field(frame: &mut Frame, game: &AlienInvasion, geometry: &FieldGeometry) {
    let settings = game.settings();
    let images = game.images();
    let mut field = BrailleField::new(geometry, settings.bg_color);

    field.draw_sprite(&game.ship().rect(), &images.ship, settings.ship_color);
    for bullet in game.bullets() {
        field.fill_rect(&bullet.rect(), settings.bullet_color);
    }
    for bullet in game.alien_bullets() {
        field.fill_rect(&bullet.rect(), settings.bullet_color);
    }
    for alien in game.aliens() {
        field.draw_sprite(&alien.rect(), &images.alien, settings.alien_color);
    }
    frame.render_widget(Paragraph::new(field.into_lines()), geometry.area);

    for label in game.scoreboard().labels() {
        render_label(frame, label, geometry);
    }

    if !game.is_active() {
        let button = game.play_button();
        let area = geometry.cell_rect(&button.rect);
        frame.render_widget(Block::default().style(Style::default().bg(button.color)), area);
        if let Some(msg) = &button.msg_image {
            render_label(frame, msg, geometry);
        }
    }

    if game.pointer_visible() {
        frame.set_cursor_position(geometry.to_cell(game.play_button().rect.midbottom()));
    }
}

/// One row of text centered where the label's box is. Glyph widths differ
/// between the label metrics and a terminal cell, so the center is the
/// anchor that survives the conversion.
fn render_label(frame: &mut Frame, label: &TextImage, geometry: &FieldGeometry) {
    let len = label.text.chars().count() as u16;
    let (cx, cy) = geometry.to_cell((label.rect.center_x(), label.rect.center_y()));
    let x = cx
        .saturating_sub(len / 2)
        .min(geometry.area.right().saturating_sub(len))
        .max(geometry.area.x);
    let area = Rect::new(x, cy, len, 1).intersection(geometry.area);
    if area.is_empty() {
        return;
    }
    let style = Style::default().fg(label.fg).bg(label.bg).add_modifier(Modifier::BOLD);
    frame.render_widget(Paragraph::new(Span::styled(label.text.clone(), style)), area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled(" \u{2190}\u{2192} Move ", Style::default().fg(Color::DarkGray)),
        Span::styled("| ", Style::default().fg(Color::Rgb(60, 60, 60))),
        Span::styled("Space Shoot ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::styled("| ", Style::default().fg(Color::Rgb(60, 60, 60))),
        Span::styled("Enter/Click Start ", Style::default().fg(Color::DarkGray)),
        Span::styled("| ", Style::default().fg(Color::Rgb(60, 60, 60))),
        Span::styled("Q Quit", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(help, area);
}
