use crate::settings::Settings;

/// Integer screen-space rectangle. `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AxisAlignedBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl AxisAlignedBox {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> i32 { self.x }
    pub fn right(&self) -> i32 { self.x + self.width }
    pub fn top(&self) -> i32 { self.y }
    pub fn bottom(&self) -> i32 { self.y + self.height }
    pub fn center_x(&self) -> i32 { self.x + self.width / 2 }
    pub fn center_y(&self) -> i32 { self.y + self.height / 2 }

    pub fn midtop(&self) -> (i32, i32) {
        (self.center_x(), self.top())
    }

    pub fn midbottom(&self) -> (i32, i32) {
        (self.center_x(), self.bottom())
    }

    pub fn set_midtop(&mut self, (cx, top): (i32, i32)) {
        self.x = cx - self.width / 2;
        self.y = top;
    }

    pub fn set_midbottom(&mut self, (cx, bottom): (i32, i32)) {
        self.x = cx - self.width / 2;
        self.y = bottom - self.height;
    }

    pub fn set_center(&mut self, (cx, cy): (i32, i32)) {
        self.x = cx - self.width / 2;
        self.y = cy - self.height / 2;
    }

    /// Strict overlap: boxes that only share an edge do not collide.
    pub fn overlaps(&self, other: &AxisAlignedBox) -> bool {
        self.width > 0
            && self.height > 0
            && other.width > 0
            && other.height > 0
            && self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Half-open containment, right and bottom edges excluded.
    pub fn contains_point(&self, (px, py): (i32, i32)) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }
}

/// Anything that owns a screen rectangle and advances once per tick.
pub trait Movable {
    fn rect(&self) -> AxisAlignedBox;
    fn update(&mut self, settings: &Settings);
}

/// True if `target` overlaps any member of `group`.
pub fn collides_any<T: Movable>(target: &AxisAlignedBox, group: &[T]) -> bool {
    group.iter().any(|m| m.rect().overlaps(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = AxisAlignedBox::new(0, 0, 10, 10);
        let b = AxisAlignedBox::new(10, 0, 10, 10);
        assert!(!a.overlaps(&b));
        let c = AxisAlignedBox::new(9, 9, 10, 10);
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }

    #[test]
    fn contains_point_excludes_far_edges() {
        let r = AxisAlignedBox::new(5, 5, 10, 4);
        assert!(r.contains_point((5, 5)));
        assert!(r.contains_point((14, 8)));
        assert!(!r.contains_point((15, 8)));
        assert!(!r.contains_point((10, 9)));
    }

    #[test]
    fn anchors_place_box() {
        let mut r = AxisAlignedBox::new(0, 0, 60, 48);
        r.set_midbottom((600, 800));
        assert_eq!((r.x, r.y), (570, 752));
        assert_eq!(r.midtop(), (600, 752));

        let mut b = AxisAlignedBox::new(0, 0, 3, 15);
        b.set_midtop(r.midtop());
        assert_eq!((b.x, b.y), (599, 752));

        let mut button = AxisAlignedBox::new(0, 0, 200, 50);
        button.set_center((600, 400));
        assert_eq!((button.left(), button.top()), (500, 375));
    }
}
