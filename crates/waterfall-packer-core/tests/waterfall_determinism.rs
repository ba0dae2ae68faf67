use rand::{Rng, SeedableRng};
use waterfall_packer_core::{FnSource, LayoutConfig, pack, pack_with_source};

fn random_feed(n: usize, seed: u64) -> Vec<f32> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0.1..3.0)).collect()
}

#[test]
fn repeated_packs_are_bit_identical() {
    let ratios = random_feed(250, 42);
    let cfg = LayoutConfig::builder()
        .columns(4)
        .spacing(8.0)
        .viewport_width(640.0)
        .build();

    let a = pack(cfg.clone(), &ratios).unwrap();
    let b = pack(cfg, &ratios).unwrap();

    assert_eq!(a.placements.len(), b.placements.len());
    for (x, y) in a.placements.iter().zip(b.placements.iter()) {
        assert_eq!(x.index, y.index);
        assert_eq!(x.column, y.column);
        // bit-identical, not merely approximate
        assert_eq!(x.rect, y.rect);
    }
    assert_eq!(a.content_size, b.content_size);
}

#[test]
fn slice_and_callback_sources_agree() {
    let ratios = random_feed(64, 7);
    let cfg = LayoutConfig::builder()
        .columns(3)
        .spacing(12.0)
        .viewport_width(480.0)
        .build();

    let a = pack(cfg.clone(), &ratios).unwrap();
    let b = pack_with_source(cfg, ratios.len(), FnSource(|i| ratios[i])).unwrap();

    assert_eq!(a.placements, b.placements);
    assert_eq!(a.content_size, b.content_size);
}
