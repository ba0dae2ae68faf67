use crate::config::LayoutConfig;
use crate::error::Result;
use crate::model::PackingResult;
use crate::packer::WaterfallPacker;
use tracing::{debug, instrument};

/// Read-only, on-demand access to per-item aspect ratios.
///
/// The packer borrows the source for the duration of one pass and never
/// stores it, so a host can hand over a view into its own data without
/// ownership entanglement. Height-to-width ratios; non-positive values
/// yield zero-height placements.
pub trait AspectRatioSource {
    /// Height-to-width ratio for the item at `index`.
    fn aspect_ratio(&self, index: usize) -> f32;
}

impl AspectRatioSource for &[f32] {
    fn aspect_ratio(&self, index: usize) -> f32 {
        self[index]
    }
}

impl AspectRatioSource for Vec<f32> {
    fn aspect_ratio(&self, index: usize) -> f32 {
        self[index]
    }
}

/// Adapts a plain closure into an [`AspectRatioSource`], for hosts that
/// compute ratios on demand rather than holding a materialized list.
pub struct FnSource<F>(pub F);

impl<F> AspectRatioSource for FnSource<F>
where
    F: Fn(usize) -> f32,
{
    fn aspect_ratio(&self, index: usize) -> f32 {
        (self.0)(index)
    }
}

/// Packs `aspect_ratios` into `config.columns` columns and returns a
/// placement rectangle per item plus the total content size.
///
/// Items are placed in input order; the sequence is never reordered or
/// rebalanced retroactively. Pure function of its inputs: repeated calls
/// with the same config and ratios produce bit-identical results.
pub fn pack(config: LayoutConfig, aspect_ratios: &[f32]) -> Result<PackingResult> {
    pack_with_source(config, aspect_ratios.len(), aspect_ratios)
}

/// Callback form of [`pack`]: the host supplies an item count and a
/// per-item ratio source instead of a materialized list.
#[instrument(skip_all)]
pub fn pack_with_source<S: AspectRatioSource>(
    config: LayoutConfig,
    item_count: usize,
    source: S,
) -> Result<PackingResult> {
    let mut packer = WaterfallPacker::new(config)?;
    debug!(
        items = item_count,
        column_width = packer.column_width(),
        "packing waterfall layout"
    );
    let mut placements = Vec::with_capacity(item_count);
    for index in 0..item_count {
        placements.push(packer.place(index, source.aspect_ratio(index)));
    }
    Ok(packer.into_result(placements))
}
