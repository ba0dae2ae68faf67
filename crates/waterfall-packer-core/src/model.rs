use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in layout space. `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
    /// Right edge coordinate (`x + w`).
    pub fn max_x(&self) -> f32 {
        self.x + self.w
    }
    /// Bottom edge coordinate (`y + h`).
    pub fn max_y(&self) -> f32 {
        self.y + self.h
    }
    pub fn area(&self) -> f32 {
        self.w * self.h
    }
    /// Returns true if `self` and `other` overlap. Rects that only touch on
    /// an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.x >= other.max_x()
            || other.x >= self.max_x()
            || self.y >= other.max_y()
            || other.y >= self.max_y())
    }
}

/// Width/height pair for the laid-out content extent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Insets around the whole content area.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }
    /// Combined left + right inset.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }
    /// Combined top + bottom inset.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl Default for EdgeInsets {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A placed item within the laid-out content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ItemPlacement {
    /// Position in the input sequence; placements keep input order.
    pub index: usize,
    /// Column the item landed in (0-based, leftmost first).
    pub column: usize,
    /// Placed rectangle in content coordinates.
    pub rect: Rect,
}

/// Echo of the configuration that produced a result, for downstream
/// consumers that only see the serialized placements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutMeta {
    pub columns: usize,
    pub spacing: f32,
    pub insets: EdgeInsets,
    pub viewport_width: f32,
    pub column_width: f32,
    pub item_count: usize,
}

/// Immutable result of a packing pass.
///
/// A fresh result is produced per pass; callers hold the latest one and swap
/// it out wholesale instead of mutating placements in place, so a result can
/// be read from any thread while the next pass runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackingResult {
    /// Placements in input order (`placements[i].index == i`).
    pub placements: Vec<ItemPlacement>,
    /// Total content extent, viewport width by packed height.
    pub content_size: Size,
    pub meta: LayoutMeta,
}

impl PackingResult {
    /// Placements whose rect overlaps `rect`, in input order.
    ///
    /// Intended for viewport culling: pass the visible region and draw only
    /// what comes back.
    pub fn placements_intersecting(&self, rect: &Rect) -> Vec<&ItemPlacement> {
        self.placements
            .iter()
            .filter(|p| p.rect.intersects(rect))
            .collect()
    }

    /// Placement for `index`, or `None` when out of range of this result.
    pub fn placement_for_index(&self, index: usize) -> Option<&ItemPlacement> {
        self.placements.get(index)
    }

    /// Computes layout statistics for this result.
    pub fn stats(&self) -> LayoutStats {
        let mut bottoms = vec![0.0_f32; self.meta.columns];
        let mut used_area = 0.0_f64;
        for p in &self.placements {
            used_area += p.rect.area() as f64;
            if let Some(b) = bottoms.get_mut(p.column) {
                *b = b.max(p.rect.max_y());
            }
        }
        let max_column_bottom = bottoms.iter().copied().fold(0.0_f32, f32::max);
        let min_column_bottom = if bottoms.is_empty() {
            0.0
        } else {
            bottoms.iter().copied().fold(f32::INFINITY, f32::min)
        };
        let content_area = (self.content_size.width as f64) * (self.content_size.height as f64);
        let occupancy = if content_area > 0.0 {
            used_area / content_area
        } else {
            0.0
        };

        LayoutStats {
            num_items: self.placements.len(),
            num_columns: self.meta.columns,
            column_width: self.meta.column_width,
            content_width: self.content_size.width,
            content_height: self.content_size.height,
            used_area,
            content_area,
            occupancy,
            max_column_bottom,
            min_column_bottom,
        }
    }
}

/// Statistics about a packed layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Number of placed items.
    pub num_items: usize,
    /// Number of columns the layout was computed for.
    pub num_columns: usize,
    /// Shared width of every item.
    pub column_width: f32,
    pub content_width: f32,
    pub content_height: f32,
    /// Sum of all placement areas.
    pub used_area: f64,
    /// Content width * height.
    pub content_area: f64,
    /// used_area / content_area (0.0 to 1.0). Higher means less empty space
    /// between and around items.
    pub occupancy: f64,
    /// Bottom edge of the tallest column (0.0 with no items).
    pub max_column_bottom: f32,
    /// Bottom edge of the shortest column (0.0 with no items).
    pub min_column_bottom: f32,
}

impl LayoutStats {
    /// Height difference between the tallest and the shortest column.
    pub fn column_spread(&self) -> f32 {
        self.max_column_bottom - self.min_column_bottom
    }

    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Items: {}, Columns: {}, Content: {:.1}x{:.1}, Occupancy: {:.2}%, Spread: {:.1}",
            self.num_items,
            self.num_columns,
            self.content_width,
            self.content_height,
            self.occupancy * 100.0,
            self.column_spread(),
        )
    }
}
