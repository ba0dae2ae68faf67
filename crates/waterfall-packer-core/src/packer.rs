use crate::config::LayoutConfig;
use crate::error::Result;
use crate::model::{ItemPlacement, LayoutMeta, PackingResult, Rect, Size};

/// Single-pass waterfall placement engine.
///
/// Tracks one running tail per column and always drops the next item into
/// the currently shortest column, leftmost first on ties. Column state lives
/// only for the duration of a pass; `into_result` consumes it.
pub struct WaterfallPacker {
    config: LayoutConfig,
    column_width: f32,
    tails: Vec<f32>,
}

impl WaterfallPacker {
    pub fn new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        let column_width = config.column_width();
        let tails = vec![0.0; config.columns];
        Ok(Self {
            config,
            column_width,
            tails,
        })
    }

    /// Shared width of every placed item.
    pub fn column_width(&self) -> f32 {
        self.column_width
    }

    /// Column with the minimum tail; the leftmost one among equals.
    fn shortest_column(&self) -> usize {
        let mut best = 0;
        for (i, &tail) in self.tails.iter().enumerate().skip(1) {
            if tail < self.tails[best] {
                best = i;
            }
        }
        best
    }

    /// Places the next item and returns its rectangle.
    ///
    /// A tail of `0.0` marks a column nothing has landed in yet; the first
    /// item in a column starts at the top inset, later ones one `spacing`
    /// below the previous tail. A non-positive `aspect_ratio` produces a
    /// zero-height rectangle.
    pub fn place(&mut self, index: usize, aspect_ratio: f32) -> ItemPlacement {
        let column = self.shortest_column();
        let tail = self.tails[column];
        let y = if tail == 0.0 {
            self.config.insets.top
        } else {
            tail + self.config.spacing
        };
        let x = self.config.insets.left + column as f32 * (self.column_width + self.config.spacing);
        let height = self.column_width * aspect_ratio.max(0.0);
        let rect = Rect::new(x, y, self.column_width, height);
        self.tails[column] = rect.max_y();
        ItemPlacement {
            index,
            column,
            rect,
        }
    }

    /// Content extent so far: viewport width by tallest column plus the
    /// bottom inset, or just the vertical insets while nothing is placed.
    pub fn content_size(&self, items_placed: usize) -> Size {
        let height = if items_placed == 0 {
            self.config.insets.vertical()
        } else {
            let max_tail = self.tails.iter().copied().fold(0.0_f32, f32::max);
            max_tail + self.config.insets.bottom
        };
        Size::new(self.config.viewport_width, height)
    }

    /// Freezes the pass into an immutable result.
    pub fn into_result(self, placements: Vec<ItemPlacement>) -> PackingResult {
        let content_size = self.content_size(placements.len());
        let meta = LayoutMeta {
            columns: self.config.columns,
            spacing: self.config.spacing,
            insets: self.config.insets,
            viewport_width: self.config.viewport_width,
            column_width: self.column_width,
            item_count: placements.len(),
        };
        PackingResult {
            placements,
            content_size,
            meta,
        }
    }
}
