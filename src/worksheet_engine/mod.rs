//! Core worksheet engine: problem generation and page layout.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: operations, toggles, problems, request, sheet config |
//! | `error`     | `WorksheetError` for config and layout failures |
//! | `helpers`   | Blank slot, round-ten draws, problem ids, the `Problem` builder |
//! | `template`  | The fixed 20-row column template and its eligibility rules |
//! | `kinds`     | Problem-kind generators grouped by family (basic, missing, friendly) |
//! | `generator` | Entry points `generate_worksheet()` / `generate_worksheet_with()` |
//! | `layout`    | Splits problems into printed columns on an A4 page |

pub mod error;
pub mod generator;
pub mod helpers;
pub mod kinds;
pub mod layout;
pub mod models;
pub mod template;

// Re-export the public API surface so callers can use
// `worksheet_engine::generate_worksheet` without reaching into sub-modules.
pub use error::WorksheetError;
pub use generator::{generate_worksheet, generate_worksheet_with};
pub use layout::{
    layout_page, ExportFailure, ExportOptions, PageColumn, PageFormat, WorksheetPage, PAGE_ROOT_ID,
};
pub use models::{
    Operation, OperationToggles, Problem, ProblemKind, WorksheetConfig, WorksheetRequest,
    MAX_PROBLEMS,
};
pub use template::{RowRule, COLUMN_TEMPLATE, ROWS_PER_BLOCK};
