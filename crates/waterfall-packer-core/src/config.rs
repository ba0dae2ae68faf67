use crate::error::{Result, WaterfallError};
use crate::model::EdgeInsets;
use serde::{Deserialize, Serialize};

/// Layout parameters for a packing pass.
///
/// Parameters are read-only input to the packer; changing any value
/// invalidates previously computed placements, so re-run `pack` after an
/// edit and swap in the fresh result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Number of columns. Must be at least 1.
    pub columns: usize,
    /// Insets around the whole content area.
    #[serde(default)]
    pub insets: EdgeInsets,
    /// Gap between items, both within a column and between columns.
    #[serde(default)]
    pub spacing: f32,
    /// Width of the hosting viewport; placements and content size are
    /// computed against it.
    #[serde(default)]
    pub viewport_width: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: 1,
            insets: EdgeInsets::ZERO,
            spacing: 0.0,
            viewport_width: 0.0,
        }
    }
}

impl LayoutConfig {
    /// Shared width of every column.
    ///
    /// A viewport narrower than the insets plus inter-column gaps clamps to
    /// zero, yielding zero-area placements rather than an error.
    pub fn column_width(&self) -> f32 {
        let gaps = self.spacing * (self.columns as f32 - 1.0);
        let usable = self.viewport_width - self.insets.horizontal() - gaps;
        (usable / self.columns as f32).max(0.0)
    }

    /// Validates the configuration parameters.
    ///
    /// Returns an error if `columns` is zero, or if any dimension is
    /// negative or non-finite. A viewport too narrow for the configured
    /// insets and spacing is not an error; see
    /// [`LayoutConfig::column_width`].
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(WaterfallError::InvalidColumns {
                columns: self.columns,
            });
        }
        let dims = [
            ("spacing", self.spacing),
            ("viewport_width", self.viewport_width),
            ("insets.top", self.insets.top),
            ("insets.left", self.insets.left),
            ("insets.bottom", self.insets.bottom),
            ("insets.right", self.insets.right),
        ];
        for (name, value) in dims {
            if !value.is_finite() || value < 0.0 {
                return Err(WaterfallError::InvalidConfig(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Create a fluent builder for `LayoutConfig`.
    pub fn builder() -> LayoutConfigBuilder {
        LayoutConfigBuilder::new()
    }
}

/// Builder for `LayoutConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct LayoutConfigBuilder {
    cfg: LayoutConfig,
}

impl LayoutConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: LayoutConfig::default(),
        }
    }
    pub fn columns(mut self, v: usize) -> Self {
        self.cfg.columns = v;
        self
    }
    pub fn insets(mut self, v: EdgeInsets) -> Self {
        self.cfg.insets = v;
        self
    }
    pub fn spacing(mut self, v: f32) -> Self {
        self.cfg.spacing = v;
        self
    }
    pub fn viewport_width(mut self, v: f32) -> Self {
        self.cfg.viewport_width = v;
        self
    }
    pub fn build(self) -> LayoutConfig {
        self.cfg
    }
}
