use crate::entities::Alien;
use crate::settings::Settings;

/// Columns and rows of a fresh fleet. Each alien is followed by one
/// alien-sized gap in both directions; a two-alien margin is kept on the
/// sides and three rows plus the ship's height are kept free below.
pub fn fleet_dimensions(alien_width: i32, alien_height: i32, ship_height: i32, settings: &Settings) -> (i32, i32) {
    if alien_width <= 0 || alien_height <= 0 {
        return (0, 0);
    }
    let available_space_x = settings.screen_width - 2 * alien_width;
    let cols = available_space_x / (2 * alien_width);

    let available_space_y = settings.screen_height - 3 * alien_height - ship_height;
    let rows = available_space_y / (2 * alien_height);

    (cols.max(0), rows.max(0))
}

pub fn create_fleet(alien_width: i32, alien_height: i32, ship_height: i32, settings: &Settings) -> Vec<Alien> {
    let (cols, rows) = fleet_dimensions(alien_width, alien_height, ship_height, settings);
    let mut aliens = Vec::with_capacity((cols * rows) as usize);
    for row in 0..rows {
        for col in 0..cols {
            aliens.push(Alien::at(
                alien_width + 2 * alien_width * col,
                alien_height + 2 * alien_height * row,
                alien_width,
                alien_height,
            ));
        }
    }
    log::debug!("Built fleet of {} columns x {} rows", cols, rows);
    aliens
}
