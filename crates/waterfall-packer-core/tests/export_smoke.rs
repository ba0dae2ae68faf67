use waterfall_packer_core::{
    EdgeInsets, LayoutConfig, PackingResult, pack, to_json_columns, to_json_items,
};

fn demo_result() -> PackingResult {
    let cfg = LayoutConfig {
        columns: 2,
        insets: EdgeInsets::new(6.0, 20.0, 0.0, 20.0),
        spacing: 10.0,
        viewport_width: 340.0,
    };
    pack(cfg, &[0.5, 0.3, 1.5, 0.7]).unwrap()
}

#[test]
fn json_items_shape() {
    let result = demo_result();
    let v = to_json_items(&result);

    let items = v["items"].as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["index"].as_u64().unwrap(), 0);
    assert_eq!(items[0]["frame"]["x"].as_f64().unwrap(), 20.0);
    assert_eq!(items[0]["frame"]["y"].as_f64().unwrap(), 6.0);
    assert!(v["contentSize"]["height"].as_f64().unwrap() > 0.0);
    assert_eq!(v["meta"]["columns"].as_u64().unwrap(), 2);
    assert_eq!(v["meta"]["item_count"].as_u64().unwrap(), 4);
}

#[test]
fn json_columns_groups_by_column() {
    let result = demo_result();
    let v = to_json_columns(&result);

    let cols = v["columns"].as_array().unwrap();
    assert_eq!(cols.len(), 2);
    // demo feed lands two items in each column
    assert_eq!(cols[0].as_array().unwrap().len(), 2);
    assert_eq!(cols[1].as_array().unwrap().len(), 2);
    // within a column entries keep input (top to bottom) order
    let first = &cols[0][0];
    assert_eq!(first["index"].as_u64().unwrap(), 0);
}

#[test]
fn result_round_trips_through_serde() {
    let result = demo_result();
    let json = serde_json::to_string(&result).unwrap();
    let back: PackingResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back.placements, result.placements);
    assert_eq!(back.content_size, result.content_size);
}
