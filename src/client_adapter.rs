use serde_json::{json, Value};
use crate::worksheet_engine::{
    layout::{ExportFailure, ExportOptions, PageFormat, WorksheetPage},
    models::Problem,
};

/// Front ends print `display` verbatim; answers never leave the server.
fn client_problem(p: &Problem) -> Value {
    json!({ "id": p.id, "display": p.display })
}

fn client_format(f: &PageFormat) -> Value {
    json!({
        "format": f.name,
        "orientation": f.orientation.as_str(),
        "unit": "mm",
        "width": f.width_mm,
        "height": f.height_mm
    })
}

fn client_export(e: &ExportOptions) -> Value {
    let messages: serde_json::Map<String, Value> = ExportFailure::ALL
        .iter()
        .map(|f| (f.key().to_string(), json!(f.user_message())))
        .collect();
    json!({
        "filename": e.filename,
        "margin": e.margin_mm,
        "anchor": if e.anchor_top_left { "top-left" } else { "center" },
        "image": { "type": e.image_format, "quality": e.image_quality },
        "scale": e.raster_scale,
        "pagebreak": if e.avoid_page_breaks { "avoid-all" } else { "auto" },
        "failure_messages": messages
    })
}

/// Map a laid-out page to the JSON the browser front end renders.
///
/// `root_id` names the one element print and PDF export capture; everything
/// outside it (controls, toolbar) stays out of the exported page.
pub fn to_client_json(page: &WorksheetPage) -> Value {
    let header: Vec<Value> = page
        .header
        .iter()
        .map(|h| json!({ "label": h.label, "value": h.value }))
        .collect();

    let columns: Vec<Value> = page
        .columns
        .iter()
        .map(|c| {
            json!({
                "index": c.index,
                "problems": c.problems.iter().map(client_problem).collect::<Vec<_>>(),
                "error_tally": c.error_tally
            })
        })
        .collect();

    json!({
        "root_id": page.root_id(),
        "page": client_format(&page.format),
        "export": client_export(&page.export),
        "title": page.title,
        "header": header,
        "columns": columns
    })
}
