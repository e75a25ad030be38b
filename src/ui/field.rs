use ratatui::prelude::*;

use crate::assets::Sprite;
use crate::geometry::AxisAlignedBox;

/// Where the logical screen landed in the terminal, for converting between
/// screen pixels and character cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldGeometry {
    pub area: Rect,
    pub screen_width: i32,
    pub screen_height: i32,
}

impl FieldGeometry {
    /// Largest area inside `outer` that keeps the screen's aspect ratio,
    /// centered. A braille dot is roughly square: 2 dots across a cell and
    /// 4 down.
    pub fn fit(outer: Rect, screen_width: i32, screen_height: i32) -> Self {
        let dots_w = outer.width as f32 * 2.0;
        let dots_h = outer.height as f32 * 4.0;
        let scale = (dots_w / screen_width as f32).min(dots_h / screen_height as f32);
        let width = ((screen_width as f32 * scale / 2.0).floor() as u16).clamp(1, outer.width.max(1));
        let height = ((screen_height as f32 * scale / 4.0).floor() as u16).clamp(1, outer.height.max(1));
        let area = Rect::new(
            outer.x + (outer.width.saturating_sub(width)) / 2,
            outer.y + (outer.height.saturating_sub(height)) / 2,
            width,
            height,
        );
        Self { area, screen_width, screen_height }
    }

    pub fn to_cell(&self, (x, y): (i32, i32)) -> (u16, u16) {
        let col = (x.clamp(0, self.screen_width - 1) as i64 * self.area.width as i64 / self.screen_width as i64) as u16;
        let row = (y.clamp(0, self.screen_height - 1) as i64 * self.area.height as i64 / self.screen_height as i64) as u16;
        (self.area.x + col, self.area.y + row)
    }

    /// Screen pixel under the middle of a terminal cell, if the cell is on
    /// the field.
    pub fn to_screen(&self, column: u16, row: u16) -> Option<(i32, i32)> {
        if !self.area.contains(Position::new(column, row)) {
            return None;
        }
        let col = (column - self.area.x) as f32 + 0.5;
        let row = (row - self.area.y) as f32 + 0.5;
        let x = col * self.screen_width as f32 / self.area.width as f32;
        let y = row * self.screen_height as f32 / self.area.height as f32;
        Some((x as i32, y as i32))
    }

    /// Cells covered by `rect`, at least one.
    pub fn cell_rect(&self, rect: &AxisAlignedBox) -> Rect {
        let (x0, y0) = self.to_cell((rect.left(), rect.top()));
        let (x1, y1) = self.to_cell((rect.right() - 1, rect.bottom() - 1));
        Rect::new(x0, y0, x1.saturating_sub(x0) + 1, y1.saturating_sub(y0) + 1).intersection(self.area)
    }
}

/// A grid of braille characters, 2x4 dots per cell.
pub struct BrailleField {
    cols: usize,
    rows: usize,
    sx: f32,
    sy: f32,
    bg: Color,
    cells: Vec<(u8, Color)>,
}

impl BrailleField {
    pub fn new(geometry: &FieldGeometry, bg: Color) -> Self {
        let cols = geometry.area.width as usize;
        let rows = geometry.area.height as usize;
        Self {
            cols,
            rows,
            sx: (cols * 2) as f32 / geometry.screen_width as f32,
            sy: (rows * 4) as f32 / geometry.screen_height as f32,
            bg,
            cells: vec![(0, bg); cols * rows],
        }
    }

    fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
        match (sub_x, sub_y) {
            (0, 0) => 0x01,
            (0, 1) => 0x02,
            (0, 2) => 0x04,
            (0, 3) => 0x40,
            (1, 0) => 0x08,
            (1, 1) => 0x10,
            (1, 2) => 0x20,
            (1, 3) => 0x80,
            _ => 0,
        }
    }

    fn set_dot(&mut self, bx: i32, by: i32, color: Color) {
        if bx < 0 || by < 0 {
            return;
        }
        let (bx, by) = (bx as usize, by as usize);
        if bx >= self.cols * 2 || by >= self.rows * 4 {
            return;
        }
        let cell = &mut self.cells[(by / 4) * self.cols + bx / 2];
        cell.0 |= Self::braille_bit(bx % 2, by % 4);
        cell.1 = color;
    }

    /// Dot span covering `[start, end)` in screen pixels, never empty.
    fn dot_span(start: i32, end: i32, scale: f32) -> (i32, i32) {
        let first = (start as f32 * scale).floor() as i32;
        let last = ((end as f32 * scale).ceil() as i32).max(first + 1);
        (first, last)
    }

    pub fn fill_rect(&mut self, rect: &AxisAlignedBox, color: Color) {
        let (x0, x1) = Self::dot_span(rect.left(), rect.right(), self.sx);
        let (y0, y1) = Self::dot_span(rect.top(), rect.bottom(), self.sy);
        for by in y0..y1 {
            for bx in x0..x1 {
                self.set_dot(bx, by, color);
            }
        }
    }

    /// Samples the sprite at each dot's center.
    pub fn draw_sprite(&mut self, rect: &AxisAlignedBox, sprite: &Sprite, color: Color) {
        let (x0, x1) = Self::dot_span(rect.left(), rect.right(), self.sx);
        let (y0, y1) = Self::dot_span(rect.top(), rect.bottom(), self.sy);
        for by in y0..y1 {
            let dy = ((by as f32 + 0.5) / self.sy) as i32 - rect.y;
            for bx in x0..x1 {
                let dx = ((bx as f32 + 0.5) / self.sx) as i32 - rect.x;
                if sprite.is_opaque(dx, dy) {
                    self.set_dot(bx, by, color);
                }
            }
        }
    }

    #[cfg(test)]
    pub fn dot_count(&self) -> u32 {
        self.cells.iter().map(|(bits, _)| bits.count_ones()).sum()
    }

    pub fn into_lines(self) -> Vec<Line<'static>> {
        let bg = self.bg;
        self.cells
            .chunks(self.cols.max(1))
            .map(|row| {
                let spans: Vec<Span<'static>> = row
                    .iter()
                    .map(|&(bits, color)| {
                        if bits == 0 {
                            Span::styled(" ", Style::default().bg(bg))
                        } else {
                            let ch = char::from_u32(0x2800 + bits as u32).unwrap_or(' ');
                            Span::styled(String::from(ch), Style::default().fg(color).bg(bg))
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}
