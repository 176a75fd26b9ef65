//! Splits a generated problem list into the printed page: header, columns,
//! and the fixed A4 page the print/PDF export captures.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::worksheet_engine::{
    error::WorksheetError,
    models::{Problem, WorksheetConfig},
};

/// Id of the single element that holds exactly the printable page.
pub const PAGE_ROOT_ID: &str = "worksheet-paper";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Portrait,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageFormat {
    pub name: &'static str,
    pub width_mm: u32,
    pub height_mm: u32,
    pub orientation: Orientation,
}

impl PageFormat {
    pub const A4_PORTRAIT: PageFormat = PageFormat {
        name: "a4",
        width_mm: 210,
        height_mm: 297,
        orientation: Orientation::Portrait,
    };
}

/// How the print/PDF pipeline captures the page root.
///
/// The capture is unscaled and anchored top-left: any centering margin the
/// on-screen preview adds is stripped from the captured copy, never from the
/// live page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportOptions {
    pub filename: String,
    pub margin_mm: u32,
    pub anchor_top_left: bool,
    pub raster_scale: u32,
    pub image_format: &'static str,
    pub image_quality: f32,
    /// Never split the page root across PDF pages.
    pub avoid_page_breaks: bool,
}

impl ExportOptions {
    pub fn for_config(config: &WorksheetConfig) -> Self {
        ExportOptions {
            filename: config.export_filename(),
            margin_mm: 0,
            anchor_top_left: true,
            raster_scale: 2,
            image_format: "jpeg",
            image_quality: 0.98,
            avoid_page_breaks: true,
        }
    }
}

/// Ways a PDF export can fail on the client. Both are recoverable: the user
/// is told and can still print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExportFailure {
    /// The renderer ran and errored.
    RendererFailed,
    /// The renderer has not loaded yet.
    RendererUnavailable,
}

impl ExportFailure {
    pub const ALL: [ExportFailure; 2] = [ExportFailure::RendererFailed, ExportFailure::RendererUnavailable];

    pub fn key(self) -> &'static str {
        match self {
            ExportFailure::RendererFailed      => "renderer_failed",
            ExportFailure::RendererUnavailable => "renderer_unavailable",
        }
    }

    pub fn user_message(self) -> &'static str {
        match self {
            ExportFailure::RendererFailed =>
                "Could not generate PDF. Please try Print -> Save as PDF.",
            ExportFailure::RendererUnavailable =>
                "PDF renderer not loaded yet. Please wait or refresh, or use Print -> Save as PDF.",
        }
    }
}

/// Header lines the student (or a parent) fills in by hand. Only the class
/// line is pre-filled, from `grade_info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderField {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageColumn {
    /// 1-based.
    pub index: usize,
    pub problems: Vec<Problem>,
    /// Footer slot for the number of mistakes, left blank for marking.
    pub error_tally: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorksheetPage {
    pub title: String,
    pub header: Vec<HeaderField>,
    pub columns: Vec<PageColumn>,
    pub format: PageFormat,
    pub export: ExportOptions,
}

impl WorksheetPage {
    pub fn root_id(&self) -> &'static str {
        PAGE_ROOT_ID
    }

    /// Answers in print order, column by column.
    pub fn answers(&self) -> Vec<u32> {
        self.columns
            .iter()
            .flat_map(|c| c.problems.iter().map(|p| p.answer))
            .collect()
    }

    pub fn problem_count(&self) -> usize {
        self.columns.iter().map(|c| c.problems.len()).sum()
    }
}

fn header_fields(config: &WorksheetConfig) -> Vec<HeaderField> {
    let field = |label: &str, value: &str| HeaderField {
        label: label.to_string(),
        value: value.to_string(),
    };
    vec![
        field("Class", &config.grade_info),
        field("Name", ""),
        field("Student No.", ""),
        field("Parent Signature", ""),
    ]
}

/// Lay `problems` out as `total_columns` columns of `rows_per_column`.
///
/// Columns are filled in order; a short list leaves the trailing columns
/// partly or fully empty. Problems past the last column are dropped.
pub fn layout_page(
    config: &WorksheetConfig,
    problems: Vec<Problem>,
) -> Result<WorksheetPage, WorksheetError> {
    config.validate()?;

    let capacity = config.total_problems();
    if problems.len() > capacity {
        warn!(
            given = problems.len(),
            capacity,
            "more problems than the page holds; extra rows dropped"
        );
    }

    let mut rest = problems.into_iter();
    let columns = (0..config.total_columns)
        .map(|i| PageColumn {
            index: i + 1,
            problems: rest.by_ref().take(config.rows_per_column).collect(),
            error_tally: String::new(),
        })
        .collect();

    Ok(WorksheetPage {
        title: config.title.clone(),
        header: header_fields(config),
        columns,
        format: PageFormat::A4_PORTRAIT,
        export: ExportOptions::for_config(config),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worksheet_engine::models::ProblemKind;

    fn dummy(n: usize) -> Vec<Problem> {
        (0..n)
            .map(|i| Problem {
                id: format!("p{i}"),
                display: format!("{i} + 1 ="),
                answer: i as u32 + 1,
                kind: ProblemKind::Addition,
            })
            .collect()
    }

    fn config(cols: usize, rows: usize) -> WorksheetConfig {
        WorksheetConfig {
            title: "Sheet".into(),
            grade_info: "2 (1)".into(),
            total_columns: cols,
            rows_per_column: rows,
        }
    }

    #[test]
    fn columns_are_filled_in_order() {
        let page = layout_page(&config(3, 4), dummy(12)).unwrap();
        assert_eq!(page.columns.len(), 3);
        assert_eq!(page.columns[1].index, 2);
        assert_eq!(page.columns[1].problems[0].id, "p4");
        assert_eq!(page.answers(), (1..=12).collect::<Vec<u32>>());
    }

    #[test]
    fn short_list_leaves_trailing_columns_empty() {
        let page = layout_page(&config(3, 4), dummy(5)).unwrap();
        let sizes: Vec<usize> = page.columns.iter().map(|c| c.problems.len()).collect();
        assert_eq!(sizes, vec![4, 1, 0]);
    }

    #[test]
    fn overflow_is_dropped() {
        let page = layout_page(&config(2, 3), dummy(10)).unwrap();
        assert_eq!(page.problem_count(), 6);
        assert_eq!(page.columns[1].problems[2].id, "p5");
    }

    #[test]
    fn header_prefills_class_only() {
        let page = layout_page(&config(1, 1), dummy(1)).unwrap();
        assert_eq!(page.header[0].value, "2 (1)");
        assert!(page.header[1..].iter().all(|f| f.value.is_empty()));
        assert_eq!(page.root_id(), "worksheet-paper");
        assert_eq!(page.format, PageFormat::A4_PORTRAIT);
    }

    #[test]
    fn export_options_follow_config() {
        let page = layout_page(&config(1, 1), dummy(1)).unwrap();
        assert_eq!(page.export.filename, "Sheet.pdf");
        assert_eq!(page.export.margin_mm, 0);
        assert!(page.export.anchor_top_left);
        assert_eq!(page.export.raster_scale, 2);
        assert_eq!(page.export.image_format, "jpeg");
        assert!(page.export.avoid_page_breaks);

        let untitled = WorksheetConfig { title: String::new(), ..config(1, 1) };
        let page = layout_page(&untitled, dummy(1)).unwrap();
        assert_eq!(page.export.filename, "worksheet.pdf");
    }

    #[test]
    fn export_failures_point_to_print() {
        for failure in ExportFailure::ALL {
            assert!(failure.user_message().contains("Print"), "{failure:?}");
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(layout_page(&config(0, 20), dummy(3)).is_err());
    }
}
