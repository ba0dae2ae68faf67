use waterfall_packer_core::{EdgeInsets, LayoutConfig, WaterfallError, pack};

/// Zero columns is the one true precondition violation.
#[test]
fn test_zero_columns() {
    let cfg = LayoutConfig {
        columns: 0,
        ..Default::default()
    };

    let result = cfg.validate();
    assert!(result.is_err());
    match result {
        Err(WaterfallError::InvalidColumns { columns }) => assert_eq!(columns, 0),
        _ => panic!("Expected InvalidColumns error"),
    }
}

#[test]
fn test_zero_columns_rejected_by_pack() {
    let cfg = LayoutConfig {
        columns: 0,
        viewport_width: 100.0,
        ..Default::default()
    };
    assert!(pack(cfg, &[1.0]).is_err());
}

#[test]
fn test_negative_spacing_rejected() {
    let cfg = LayoutConfig {
        columns: 2,
        spacing: -1.0,
        viewport_width: 100.0,
        ..Default::default()
    };

    let result = cfg.validate();
    assert!(result.is_err());
    match result {
        Err(WaterfallError::InvalidConfig(msg)) => assert!(msg.contains("spacing")),
        _ => panic!("Expected InvalidConfig error"),
    }
}

#[test]
fn test_nan_viewport_rejected() {
    let cfg = LayoutConfig {
        columns: 2,
        viewport_width: f32::NAN,
        ..Default::default()
    };

    let result = cfg.validate();
    assert!(result.is_err());
    match result {
        Err(WaterfallError::InvalidConfig(msg)) => assert!(msg.contains("viewport_width")),
        _ => panic!("Expected InvalidConfig error"),
    }
}

/// A viewport narrower than insets + spacing clamps column width to zero
/// and packs zero-area rects instead of failing.
#[test]
fn narrow_viewport_clamps_column_width_to_zero() {
    let cfg = LayoutConfig {
        columns: 2,
        insets: EdgeInsets::new(0.0, 30.0, 0.0, 30.0),
        spacing: 10.0,
        viewport_width: 50.0,
    };
    assert_eq!(cfg.column_width(), 0.0);

    let result = pack(cfg, &[0.5, 1.5, 0.7]).unwrap();
    assert_eq!(result.placements.len(), 3);
    for p in &result.placements {
        assert_eq!(p.rect.w, 0.0);
        assert_eq!(p.rect.h, 0.0);
    }
}

/// Non-positive ratios are a documented edge case, not an error.
#[test]
fn non_positive_ratio_yields_zero_height() {
    let cfg = LayoutConfig {
        columns: 2,
        viewport_width: 200.0,
        ..Default::default()
    };
    let result = pack(cfg, &[-0.5, 0.0, 1.0]).unwrap();
    assert_eq!(result.placements.len(), 3);
    assert_eq!(result.placements[0].rect.h, 0.0);
    assert_eq!(result.placements[1].rect.h, 0.0);
    assert!(result.placements[2].rect.h > 0.0);
}

#[test]
fn zero_viewport_is_not_an_error() {
    let cfg = LayoutConfig {
        columns: 3,
        ..Default::default()
    };
    let result = pack(cfg, &[1.0, 2.0]).unwrap();
    assert_eq!(result.placements.len(), 2);
    assert_eq!(result.content_size.width, 0.0);
    assert_eq!(result.content_size.height, 0.0);
}

#[test]
fn minimum_valid_config() {
    let cfg = LayoutConfig {
        columns: 1,
        ..Default::default()
    };
    assert!(cfg.validate().is_ok());
}
