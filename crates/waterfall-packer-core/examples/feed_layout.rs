//! Lays out a small feed and prints the placements.
//!
//! Usage: cargo run -p waterfall-packer-core --example feed_layout

use waterfall_packer_core::prelude::*;

fn main() -> waterfall_packer_core::Result<()> {
    let cfg = LayoutConfig::builder()
        .columns(2)
        .spacing(10.0)
        .insets(EdgeInsets::new(6.0, 20.0, 0.0, 20.0))
        .viewport_width(340.0)
        .build();

    let result = pack(cfg, &[0.5, 0.3, 1.5, 0.7])?;
    for p in &result.placements {
        println!(
            "item {} -> column {} at ({:.1}, {:.1}) size {:.1}x{:.1}",
            p.index, p.column, p.rect.x, p.rect.y, p.rect.w, p.rect.h
        );
    }
    println!(
        "content: {:.1}x{:.1}",
        result.content_size.width, result.content_size.height
    );
    println!("{}", result.stats().summary());

    // the same feed through the callback form, as a host with its own data
    // source would drive it
    let ratios = [0.5, 0.3, 1.5, 0.7];
    let cfg = LayoutConfig::builder()
        .columns(2)
        .spacing(10.0)
        .insets(EdgeInsets::new(6.0, 20.0, 0.0, 20.0))
        .viewport_width(340.0)
        .build();
    let via_source = pack_with_source(cfg, ratios.len(), FnSource(|i| ratios[i]))?;
    assert_eq!(via_source.placements.len(), result.placements.len());

    Ok(())
}
