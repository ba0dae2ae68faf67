use rand::{Rng, SeedableRng};
use waterfall_packer_core::{EdgeInsets, LayoutConfig, PackingResult, pack};

fn random_feed(n: usize, seed: u64) -> Vec<f32> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0.2..2.5)).collect()
}

fn column_bottoms(result: &PackingResult) -> Vec<f32> {
    let mut bottoms = vec![0.0_f32; result.meta.columns];
    for p in &result.placements {
        bottoms[p.column] = bottoms[p.column].max(p.rect.max_y());
    }
    bottoms
}

#[test]
fn coverage_matches_input_count() {
    let cfg = LayoutConfig::builder()
        .columns(3)
        .spacing(6.0)
        .viewport_width(600.0)
        .build();
    for n in [0, 1, 7, 100] {
        let ratios = random_feed(n, n as u64);
        let result = pack(cfg.clone(), &ratios).unwrap();
        assert_eq!(result.placements.len(), n);
    }
}

#[test]
fn no_vertical_overlap_within_a_column() {
    let cfg = LayoutConfig::builder()
        .columns(3)
        .spacing(6.0)
        .viewport_width(600.0)
        .build();
    let result = pack(cfg, &random_feed(200, 11)).unwrap();

    for c in 0..3 {
        let mut items: Vec<_> = result.placements.iter().filter(|p| p.column == c).collect();
        items.sort_by(|a, b| a.rect.y.partial_cmp(&b.rect.y).unwrap());
        for pair in items.windows(2) {
            assert!(
                pair[0].rect.max_y() <= pair[1].rect.y + 1e-3,
                "items {} and {} overlap in column {}",
                pair[0].index,
                pair[1].index,
                c
            );
        }
    }
}

/// Greedy shortest-column placement keeps columns within one item height
/// (plus one spacing) of each other.
#[test]
fn balance_bounded_by_tallest_item() {
    let spacing = 6.0;
    let cfg = LayoutConfig {
        columns: 4,
        insets: EdgeInsets::ZERO,
        spacing,
        viewport_width: 800.0,
    };
    let result = pack(cfg, &random_feed(150, 9)).unwrap();

    let bottoms = column_bottoms(&result);
    let max_b = bottoms.iter().copied().fold(0.0_f32, f32::max);
    let min_b = bottoms.iter().copied().fold(f32::INFINITY, f32::min);
    let tallest = result
        .placements
        .iter()
        .map(|p| p.rect.h)
        .fold(0.0_f32, f32::max);
    assert!(max_b - min_b <= tallest + spacing + 1e-3);
}

#[test]
fn content_height_never_below_vertical_insets() {
    let cfg = LayoutConfig {
        columns: 2,
        insets: EdgeInsets::new(6.0, 0.0, 4.0, 0.0),
        spacing: 2.0,
        viewport_width: 320.0,
    };
    for n in [0, 1, 5] {
        let ratios = random_feed(n, 3);
        let result = pack(cfg.clone(), &ratios).unwrap();
        assert!(result.content_size.height >= 10.0 - 1e-3);
    }
}

#[test]
fn content_height_matches_tallest_column() {
    let cfg = LayoutConfig {
        columns: 4,
        insets: EdgeInsets::new(6.0, 8.0, 12.0, 8.0),
        spacing: 6.0,
        viewport_width: 800.0,
    };
    let result = pack(cfg, &random_feed(80, 21)).unwrap();

    let max_b = column_bottoms(&result)
        .iter()
        .copied()
        .fold(0.0_f32, f32::max);
    assert!((result.content_size.height - (max_b + 12.0)).abs() < 1e-3);
}
