use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::assets::Sprite;
use crate::geometry::AxisAlignedBox;
use crate::settings::FleetDirection;

const SHIP_ART: &str = "\
....##....
...####...
.########.
##########
##########
##########
##########
###....###
";

const ALIEN_ART: &str = "\
..#....#..
..######..
.########.
##########
##########
##########
##########
#.#....#.#
..........
..........
";

fn images() -> Images {
    Images {
        ship: Sprite::from_art(SHIP_ART, 6).unwrap(),
        alien: Sprite::from_art(ALIEN_ART, 6).unwrap(),
    }
}

fn game_with_rng(rng: Box<dyn RngCore>) -> AlienInvasion {
    AlienInvasion::new(Settings::default(), images(), Sounds::silent(), rng).unwrap()
}

/// Aliens never fire: the draw always lands mid-range.
fn quiet_game() -> AlienInvasion {
    game_with_rng(Box::new(StepRng::new(0x8000_0000, 0)))
}

/// Every alien fires on every tick.
fn trigger_happy_game() -> AlienInvasion {
    game_with_rng(Box::new(StepRng::new(0, 0)))
}

fn started() -> AlienInvasion {
    let mut game = quiet_game();
    game.start_game();
    game
}

#[test]
fn opens_on_start_button() {
    let mut game = quiet_game();
    assert!(!game.is_active());
    assert!(game.pointer_visible());
    assert_eq!(game.aliens().len(), 36);

    let before: Vec<_> = game.aliens().iter().map(|a| a.rect()).collect();
    game.tick();
    let after: Vec<_> = game.aliens().iter().map(|a| a.rect()).collect();
    assert_eq!(before, after);
}

#[test]
fn click_on_button_starts_game() {
    let mut game = quiet_game();
    assert!(!game.check_play_button((10, 10)));
    assert!(!game.is_active());

    assert!(game.check_play_button((600, 400)));
    assert!(game.is_active());
    assert!(!game.pointer_visible());
    assert_eq!(game.stats().ships_left, 3);
}

#[test]
fn click_while_playing_is_ignored() {
    let mut game = started();
    for _ in 0..5 {
        game.tick();
    }
    let x = game.aliens()[0].rect().x;
    assert!(!game.check_play_button((600, 400)));
    assert_eq!(game.aliens()[0].rect().x, x);
}

#[test]
fn magazine_holds_bullets_allowed() {
    let mut game = started();
    let fired: Vec<bool> = (0..4).map(|_| game.fire_bullet()).collect();
    assert_eq!(fired, vec![true, true, true, false]);
    assert_eq!(game.bullets().len(), 3);
}

#[test]
fn cannot_fire_before_start() {
    let mut game = quiet_game();
    assert!(!game.fire_bullet());
    assert!(game.bullets().is_empty());
}

#[test]
fn bullets_leaving_top_are_culled() {
    let mut game = started();
    game.aliens.clear();
    game.aliens.push(Alien::at(0, 0, 1, 1));
    game.bullets.push(Bullet::new(&AxisAlignedBox::new(600, 0, 60, 48), &game.settings));
    game.bullets.push(Bullet::new(&AxisAlignedBox::new(900, 400, 60, 48), &game.settings));
    game.update_bullets();
    assert_eq!(game.bullets().len(), 2);
    for _ in 0..5 {
        game.update_bullets();
    }
    // the first bullet has cleared the top edge
    assert_eq!(game.bullets().len(), 1);
}

#[test]
fn clearing_last_alien_starts_next_level() {
    let mut game = started();
    game.aliens = vec![Alien::at(300, 300, 60, 60)];
    game.bullets = vec![Bullet::new(&AxisAlignedBox::new(300, 340, 60, 48), &game.settings)];
    game.alien_bullets = vec![AlienBullet::new(&AxisAlignedBox::new(900, 100, 60, 60), &game.settings)];

    game.update_bullets();

    assert_eq!(game.stats().score, 50);
    assert_eq!(game.stats().aliens_killed, 1);
    assert_eq!(game.stats().level, 2);
    assert_eq!(game.stats().high_score, 50);
    assert_eq!(game.aliens().len(), 36);
    assert!(game.bullets().is_empty());
    assert!(game.alien_bullets().is_empty());
    assert_eq!(game.settings().alien_points, 75);
    assert!((game.settings().alien_speed - 1.1).abs() < 1e-5);
    assert_eq!(game.scoreboard().level_label().unwrap().text, "Level: 2");
    assert_eq!(game.scoreboard().score_label().unwrap().text, "Score: 50");
}

#[test]
fn level_up_through_full_tick() {
    let mut game = started();
    game.aliens = vec![Alien::at(300, 300, 60, 60)];
    game.bullets = vec![Bullet::new(&AxisAlignedBox::new(300, 340, 60, 48), &game.settings)];
    game.tick();
    assert_eq!(game.stats().level, 2);
    assert_eq!(game.aliens().len(), 36);
    assert!(game.bullets().is_empty());
    assert!(game.alien_bullets().is_empty());
}

#[test]
fn one_bullet_can_take_a_group() {
    let mut game = started();
    game.aliens = vec![
        Alien::at(300, 300, 60, 60),
        Alien::at(330, 310, 60, 60),
        Alien::at(800, 100, 60, 60),
    ];
    game.bullets = vec![Bullet::new(&AxisAlignedBox::new(300, 340, 60, 48), &game.settings)];
    game.update_bullets();
    assert_eq!(game.aliens().len(), 1);
    assert!(game.bullets().is_empty());
    assert_eq!(game.stats().score, 100);
    assert_eq!(game.stats().aliens_killed, 2);
    assert_eq!(game.stats().level, 1);
}

#[test]
fn later_bullet_does_not_hit_removed_alien() {
    let mut game = started();
    game.aliens = vec![Alien::at(300, 300, 60, 60), Alien::at(800, 100, 60, 60)];
    let muzzle = AxisAlignedBox::new(300, 340, 60, 48);
    game.bullets = vec![
        Bullet::new(&muzzle, &game.settings),
        Bullet::new(&muzzle, &game.settings),
    ];
    game.update_bullets();
    assert_eq!(game.aliens().len(), 1);
    assert_eq!(game.bullets().len(), 1);
    assert_eq!(game.stats().score, 50);
}

#[test]
fn score_uses_current_point_value() {
    let mut game = started();
    game.settings.increase_speed();
    game.aliens = vec![Alien::at(300, 300, 60, 60), Alien::at(800, 100, 60, 60)];
    game.bullets = vec![Bullet::new(&AxisAlignedBox::new(300, 340, 60, 48), &game.settings)];
    game.update_bullets();
    assert_eq!(game.stats().score, 75);
}

#[test]
fn late_level_kill_near_score_ceiling_saturates() {
    let mut game = started();
    for _ in 0..40 {
        game.settings.increase_speed();
    }
    game.stats.score = u64::MAX - 1_000;
    game.aliens = vec![Alien::at(300, 300, 60, 60), Alien::at(800, 100, 60, 60)];
    game.bullets = vec![Bullet::new(&AxisAlignedBox::new(300, 340, 60, 48), &game.settings)];
    game.update_bullets();
    assert_eq!(game.aliens().len(), 1);
    assert_eq!(game.stats().score, u64::MAX);
    assert_eq!(game.stats().high_score, u64::MAX);
    assert_eq!(game.stats().aliens_killed, 1);
}

#[test]
fn high_score_only_follows_higher_scores() {
    let mut game = started();
    game.stats.high_score = 1000;
    game.aliens = vec![Alien::at(300, 300, 60, 60), Alien::at(800, 100, 60, 60)];
    game.bullets = vec![Bullet::new(&AxisAlignedBox::new(300, 340, 60, 48), &game.settings)];
    game.update_bullets();
    assert_eq!(game.stats().score, 50);
    assert_eq!(game.stats().high_score, 1000);
}

#[test]
fn fleet_reverses_and_drops_once_at_edge() {
    let mut game = started();
    game.aliens = vec![Alien::at(1140, 100, 60, 60), Alien::at(500, 200, 60, 60)];
    game.update_aliens();
    assert_eq!(game.settings().fleet_direction, FleetDirection::Left);
    let rects: Vec<_> = game.aliens().iter().map(|a| a.rect()).collect();
    assert_eq!((rects[0].x, rects[0].y), (1139, 110));
    assert_eq!((rects[1].x, rects[1].y), (499, 210));

    game.update_aliens();
    assert_eq!(game.settings().fleet_direction, FleetDirection::Left);
    assert_eq!(game.aliens()[0].rect().y, 110);
    assert_eq!(game.aliens()[0].rect().x, 1138);
}

#[test]
fn fleet_marches_without_flipping_mid_screen() {
    let mut game = started();
    for _ in 0..50 {
        game.tick();
    }
    assert_eq!(game.settings().fleet_direction, FleetDirection::Right);
    assert_eq!(game.aliens()[0].rect().x, 110);
    assert_eq!(game.aliens()[0].rect().y, 60);
}

#[test]
fn ship_hit_respawns_while_ships_remain() {
    let mut game = started();
    let ship = game.ship().rect();
    game.aliens.push(Alien::at(ship.x - 1, ship.y, 60, 60));
    game.bullets.push(Bullet::new(&AxisAlignedBox::new(100, 400, 60, 48), &game.settings));
    game.set_moving_left(true);

    game.tick();

    assert!(game.is_active());
    assert_eq!(game.stats().ships_left, 2);
    assert_eq!(game.aliens().len(), 36);
    assert!(game.bullets().is_empty());
    assert!(game.alien_bullets().is_empty());
    assert_eq!(game.ship().rect().midbottom(), (600, 800));
}

#[test]
fn last_ship_lost_ends_game() {
    let mut game = started();
    game.stats.ships_left = 1;
    let ship = game.ship().rect();
    game.aliens.push(Alien::at(ship.x - 1, ship.y, 60, 60));

    game.tick();

    assert_eq!(game.stats().ships_left, 0);
    assert!(!game.is_active());
    assert!(game.pointer_visible());

    game.ship_hit();
    game.tick();
    assert_eq!(game.stats().ships_left, 0);
}

#[test]
fn game_over_happens_exactly_once() {
    let mut game = started();
    let mut transitions = 0;
    for _ in 0..10 {
        let was_active = game.is_active();
        game.ship_hit();
        if was_active && !game.is_active() {
            transitions += 1;
        }
    }
    assert_eq!(transitions, 1);
    assert_eq!(game.stats().ships_left, 0);
}

#[test]
fn alien_bullet_on_ship_costs_a_life() {
    let mut game = started();
    let ship = game.ship().rect();
    let above = AxisAlignedBox::new(ship.x, ship.y - 60, 60, 60);
    game.alien_bullets.push(AlienBullet::new(&above, &game.settings));
    game.update_alien_bullets();
    assert_eq!(game.stats().ships_left, 2);
    assert!(game.alien_bullets().is_empty());
}

#[test]
fn alien_bullets_fall_off_bottom() {
    let mut game = started();
    game.settings.alien_bullet_speed = 1.0;
    game.alien_bullets.push(AlienBullet::new(&AxisAlignedBox::new(10, 738, 60, 60), &game.settings));
    game.update_alien_bullets();
    assert_eq!(game.alien_bullets().len(), 1);
    game.update_alien_bullets();
    assert!(game.alien_bullets().is_empty());
    assert_eq!(game.stats().ships_left, 3);
}

#[test]
fn alien_reaching_bottom_costs_a_life() {
    let mut game = started();
    game.aliens = vec![Alien::at(60, 740, 60, 60)];
    game.update_aliens();
    assert_eq!(game.stats().ships_left, 2);
    assert_eq!(game.aliens().len(), 36);
}

#[test]
fn aliens_fire_downward() {
    let mut game = trigger_happy_game();
    game.start_game();
    game.tick();
    assert_eq!(game.alien_bullets().len(), 36);
    let first = game.aliens()[0].rect();
    let bullet = game.alien_bullets()[0].rect();
    // spawned at the midbottom, then moved half a pixel down
    assert_eq!(bullet.center_x(), first.center_x());
    assert!(bullet.top() >= first.bottom());
}

#[test]
fn restart_after_game_over_keeps_high_score() {
    let mut game = started();
    game.stats.score = 400;
    game.scoreboard.check_high_score(&mut game.stats);
    game.settings.increase_speed();
    game.settings.fleet_direction = FleetDirection::Left;
    game.stats.level = 3;
    while game.is_active() {
        game.ship_hit();
    }

    assert!(game.check_play_button((600, 400)));
    assert!(game.is_active());
    assert_eq!(game.stats().score, 0);
    assert_eq!(game.stats().level, 1);
    assert_eq!(game.stats().ships_left, 3);
    assert_eq!(game.stats().high_score, 400);
    assert_eq!(game.settings().alien_points, 50);
    assert_eq!(game.settings().fleet_direction, FleetDirection::Right);
    assert_eq!(game.scoreboard().high_score_label().unwrap().text, "High Score: 400");
}

#[test]
fn seeded_games_play_the_same() {
    let mut a = game_with_rng(Box::new(StdRng::seed_from_u64(99)));
    let mut b = game_with_rng(Box::new(StdRng::seed_from_u64(99)));
    a.start_game();
    b.start_game();
    for _ in 0..2000 {
        a.tick();
        b.tick();
    }
    let shots = |g: &AlienInvasion| g.alien_bullets().iter().map(|b| b.rect()).collect::<Vec<_>>();
    assert_eq!(shots(&a), shots(&b));
    assert_eq!(a.stats().ships_left, b.stats().ships_left);
}

#[test]
fn oversized_alien_is_rejected() {
    let huge = Images {
        ship: Sprite::from_art(SHIP_ART, 6).unwrap(),
        alien: Sprite::from_art(ALIEN_ART, 70).unwrap(),
    };
    let result = AlienInvasion::new(Settings::default(), huge, Sounds::silent(), Box::new(StepRng::new(0, 0)));
    assert!(matches!(result, Err(AssetError::Malformed { .. })));
}
