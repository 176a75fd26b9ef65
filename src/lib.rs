//! # worksheet_gen
//!
//! Printable mental-arithmetic practice sheets for young students.
//!
//! The engine fills a page of problems column by column. Every column follows
//! the same 20-row template: fifteen rows drawn from the enabled base
//! operations, then a missing factor, a missing add/sub operand, and three
//! "friendly number" three-step problems. Rows whose operation is switched off
//! fall back to the basic mix.
//!
//! Numbers are chosen so every problem is valid for the level: answers are
//! non-negative integers, sums stay under 100, and multiplication and division
//! stay inside the single-digit tables.
//!
//! ## Quick start
//!
//! ```rust
//! use worksheet_gen::{
//!     generate_worksheet, layout_page, OperationToggles, WorksheetConfig, WorksheetRequest,
//! };
//!
//! // 45 problems, default operations (add, sub, mul), reproducible:
//! let problems = generate_worksheet(WorksheetRequest::new(45).with_seed(42));
//! assert_eq!(problems.len(), 45);
//!
//! // A full page: 5 columns × 20 rows.
//! let config = WorksheetConfig::default();
//! let problems = generate_worksheet(config.request(OperationToggles::all()));
//! let page = layout_page(&config, problems).unwrap();
//! for column in &page.columns {
//!     println!("Group {}", column.index);
//!     for p in &column.problems {
//!         println!("  {}", p.display);
//!     }
//! }
//! ```

pub mod client_adapter;
pub mod worksheet_engine;

// Convenience re-exports so callers can use `worksheet_gen::generate_worksheet`
// directly without reaching into `worksheet_engine::`.
pub use client_adapter::to_client_json;
pub use worksheet_engine::{
    generate_worksheet, generate_worksheet_with, layout_page, ExportFailure, ExportOptions,
    Operation, OperationToggles, PageColumn, PageFormat, Problem, ProblemKind, WorksheetConfig,
    WorksheetError, WorksheetPage, WorksheetRequest,
};
