pub mod alien;
pub mod bullet;
pub mod ship;

pub use alien::Alien;
pub use bullet::{AlienBullet, Bullet};
pub use ship::Ship;
