//! Full demo: one printable page, end to end.
//!
//! Run with: `cargo run --example demo`
//! (set `RUST_LOG=worksheet_gen=debug` to see the generator's logging)
//!
//! 1. **Toggle comparison**: the same seed generated with two operation sets,
//!    showing how rows 16–20 fall back to the basic mix when their operation
//!    is switched off.
//!
//! 2. **Full page**: the default 5 × 20 sheet laid out into columns, printed
//!    as text, followed by the JSON payload a browser front end would render.

use tracing_subscriber::EnvFilter;
use worksheet_gen::{
    generate_worksheet, layout_page, to_client_json, Operation, OperationToggles,
    WorksheetConfig, WorksheetError, WorksheetPage, WorksheetRequest,
};

fn print_block(label: &str, toggles: OperationToggles, seed: u64) {
    let problems = generate_worksheet(WorksheetRequest::new(20).with_toggles(toggles).with_seed(seed));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{label}]  seed: {seed}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (i, p) in problems.iter().enumerate() {
        println!("  {:>2}. {:<28} answer {:>3}  ({})", i + 1, p.display, p.answer, p.kind);
    }
    println!();
}

fn print_page(page: &WorksheetPage) {
    println!("  {}", page.title);
    let header: Vec<String> = page
        .header
        .iter()
        .map(|h| format!("{}: {:_<10}", h.label, h.value))
        .collect();
    println!("  {}", header.join("  "));
    println!();

    let rows = page.columns.iter().map(|c| c.problems.len()).max().unwrap_or(0);
    let heads: Vec<String> = page.columns.iter().map(|c| format!("{:<22}", format!("Group {}", c.index))).collect();
    println!("  {}", heads.join(""));
    for r in 0..rows {
        let cells: Vec<String> = page
            .columns
            .iter()
            .map(|c| format!("{:<22}", c.problems.get(r).map(|p| p.display.as_str()).unwrap_or("")))
            .collect();
        println!("  {}", cells.join(""));
    }
    println!();
}

fn main() -> Result<(), WorksheetError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "worksheet_gen=info".into()))
        .init();

    // ── Toggle comparison ────────────────────────────────────────────────────
    println!();
    println!("══ Toggle comparison: seed=2002 ══");
    println!();
    print_block("add + sub + mul", OperationToggles::default(), 2002);
    print_block("addition only", OperationToggles::only(Operation::Addition), 2002);

    // ── Full page ────────────────────────────────────────────────────────────
    println!();
    println!("══ Full page (5 × 20) ══");
    println!();
    let config = WorksheetConfig::from_json(r#"{ "title": "Grade 2 Mental Arithmetic", "grade_info": "2 (1)" }"#)?;
    let problems = generate_worksheet(config.request(OperationToggles::default()).with_seed(1001));
    let page = layout_page(&config, problems)?;
    print_page(&page);
    println!("  PDF file: {}", page.export.filename);
    println!();

    println!("══ Client payload ══");
    println!("{:#}", to_client_json(&page));
    Ok(())
}
