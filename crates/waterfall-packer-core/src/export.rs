use crate::model::PackingResult;
use serde_json::{Value, json};

/// Serialize a result as `{ items, contentSize, meta }` with items in input
/// order. Suitable for generic tooling and simple consumption.
pub fn to_json_items(result: &PackingResult) -> Value {
    let items: Vec<Value> = result
        .placements
        .iter()
        .map(|p| {
            json!({
                "index": p.index,
                "column": p.column,
                "frame": {"x": p.rect.x, "y": p.rect.y, "w": p.rect.w, "h": p.rect.h},
            })
        })
        .collect();
    json!({
        "items": items,
        "contentSize": {"width": result.content_size.width, "height": result.content_size.height},
        "meta": &result.meta,
    })
}

/// Group placements per column, top to bottom within each column.
/// Shape: `{ columns: [[item, ...], ...], contentSize, meta }`.
/// Convenient for renderers that draw one column stack at a time.
pub fn to_json_columns(result: &PackingResult) -> Value {
    let mut columns: Vec<Vec<Value>> = vec![Vec::new(); result.meta.columns];
    for p in &result.placements {
        let entry = json!({
            "index": p.index,
            "frame": {"x": p.rect.x, "y": p.rect.y, "w": p.rect.w, "h": p.rect.h},
        });
        if let Some(col) = columns.get_mut(p.column) {
            col.push(entry);
        }
    }
    json!({
        "columns": columns,
        "contentSize": {"width": result.content_size.width, "height": result.content_size.height},
        "meta": &result.meta,
    })
}
