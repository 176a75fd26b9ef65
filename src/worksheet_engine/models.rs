use std::fmt;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::worksheet_engine::error::WorksheetError;

/// Hard cap on how many problems one worksheet may hold.
pub const MAX_PROBLEMS: usize = 500;

// ---------------------------------------------------------------------------
// Operations and toggles
// ---------------------------------------------------------------------------

/// The four base operation families a worksheet can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Addition       => "+",
            Operation::Subtraction    => "-",
            Operation::Multiplication => "×",
            Operation::Division       => "÷",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::Addition       => "Addition",
            Operation::Subtraction    => "Subtraction",
            Operation::Multiplication => "Multiplication",
            Operation::Division       => "Division",
        };
        write!(f, "{}", s)
    }
}

/// Which base operations may appear on the sheet.
///
/// The interactive tool never lets all four go off (see [`toggle`](Self::toggle)),
/// but the generator still copes with an empty set by falling back to addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationToggles {
    pub addition: bool,
    pub subtraction: bool,
    pub multiplication: bool,
    pub division: bool,
}

impl Default for OperationToggles {
    fn default() -> Self {
        OperationToggles {
            addition: true,
            subtraction: true,
            multiplication: true,
            division: false,
        }
    }
}

impl OperationToggles {
    pub fn all() -> Self {
        OperationToggles { addition: true, subtraction: true, multiplication: true, division: true }
    }

    pub fn none() -> Self {
        OperationToggles { addition: false, subtraction: false, multiplication: false, division: false }
    }

    /// Exactly one operation enabled.
    pub fn only(op: Operation) -> Self {
        let mut t = Self::none();
        t.set(op, true);
        t
    }

    pub fn is_enabled(&self, op: Operation) -> bool {
        match op {
            Operation::Addition       => self.addition,
            Operation::Subtraction    => self.subtraction,
            Operation::Multiplication => self.multiplication,
            Operation::Division       => self.division,
        }
    }

    pub fn set(&mut self, op: Operation, on: bool) {
        match op {
            Operation::Addition       => self.addition = on,
            Operation::Subtraction    => self.subtraction = on,
            Operation::Multiplication => self.multiplication = on,
            Operation::Division       => self.division = on,
        }
    }

    /// Enabled operations in canonical order (add, sub, mul, div).
    pub fn enabled(&self) -> Vec<Operation> {
        Operation::ALL.iter().copied().filter(|&op| self.is_enabled(op)).collect()
    }

    pub fn is_empty(&self) -> bool {
        !(self.addition || self.subtraction || self.multiplication || self.division)
    }

    /// Flip one toggle. Refuses (returns `false`, leaves `self` untouched)
    /// when the flip would switch the last enabled operation off.
    pub fn toggle(&mut self, op: Operation) -> bool {
        let mut next = *self;
        next.set(op, !self.is_enabled(op));
        if next.is_empty() {
            return false;
        }
        *self = next;
        true
    }
}

// ---------------------------------------------------------------------------
// Problems
// ---------------------------------------------------------------------------

/// Structural category of a problem. Not the exact sub-variant: all three
/// friendly three-number rows share `ThreeNumberMixed`, and both missing-operand
/// rows share `MissingOperand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProblemKind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    ThreeNumberMixed,
    MissingOperand,
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProblemKind::Addition         => "Addition",
            ProblemKind::Subtraction      => "Subtraction",
            ProblemKind::Multiplication   => "Multiplication",
            ProblemKind::Division         => "Division",
            ProblemKind::ThreeNumberMixed => "Three-Number Mixed",
            ProblemKind::MissingOperand   => "Missing Operand",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Rendering key. Unique within one worksheet, otherwise meaningless.
    pub id: String,
    /// Exact text to print, e.g. `"27 + 15 ="` or `"( \u{a0}… ) × 6 = 42"`.
    pub display: String,
    /// The value that makes `display` true.
    pub answer: u32,
    pub kind: ProblemKind,
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorksheetRequest {
    pub total_count: usize,
    pub toggles: OperationToggles,
    pub rng_seed: Option<u64>,
}

impl WorksheetRequest {
    /// Default toggles, entropy-seeded.
    pub fn new(total_count: usize) -> Self {
        WorksheetRequest {
            total_count,
            toggles: OperationToggles::default(),
            rng_seed: None,
        }
    }

    pub fn with_toggles(mut self, toggles: OperationToggles) -> Self {
        self.toggles = toggles;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

// ---------------------------------------------------------------------------
// Sheet configuration
// ---------------------------------------------------------------------------

/// Default sheet title, stamped with the day it was made.
pub fn dated_title(date: NaiveDate) -> String {
    format!("Grade 2 Mental Arithmetic ({})", date.format("%Y-%m-%d"))
}

/// Plain values the page layout needs besides the problems themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorksheetConfig {
    pub title: String,
    pub grade_info: String,
    pub total_columns: usize,
    pub rows_per_column: usize,
}

impl Default for WorksheetConfig {
    fn default() -> Self {
        WorksheetConfig {
            title: dated_title(Local::now().date_naive()),
            grade_info: "2 (1)".to_string(),
            total_columns: 5,
            rows_per_column: 20,
        }
    }
}

impl WorksheetConfig {
    /// Parse a config from JSON; missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self, WorksheetError> {
        let config: WorksheetConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), WorksheetError> {
        if self.total_columns == 0 {
            return Err(WorksheetError::InvalidConfig("total_columns must be at least 1".into()));
        }
        if self.rows_per_column == 0 {
            return Err(WorksheetError::InvalidConfig("rows_per_column must be at least 1".into()));
        }
        let requested = self.total_columns.saturating_mul(self.rows_per_column);
        if requested > MAX_PROBLEMS {
            return Err(WorksheetError::TooManyProblems { requested, max: MAX_PROBLEMS });
        }
        Ok(())
    }

    pub fn total_problems(&self) -> usize {
        self.total_columns.saturating_mul(self.rows_per_column)
    }

    /// PDF file name: the title with each whitespace run turned into `_`,
    /// or `worksheet` when the title is empty.
    pub fn export_filename(&self) -> String {
        if self.title.is_empty() {
            return "worksheet.pdf".to_string();
        }
        let mut name = String::with_capacity(self.title.len() + 4);
        let mut in_space = false;
        for c in self.title.chars() {
            if c.is_whitespace() {
                if !in_space {
                    name.push('_');
                }
                in_space = true;
            } else {
                name.push(c);
                in_space = false;
            }
        }
        name.push_str(".pdf");
        name
    }

    /// A request sized to fill every column of this sheet.
    pub fn request(&self, toggles: OperationToggles) -> WorksheetRequest {
        WorksheetRequest::new(self.total_problems()).with_toggles(toggles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_refuses_to_clear_last_operation() {
        let mut t = OperationToggles::only(Operation::Division);
        assert!(!t.toggle(Operation::Division));
        assert_eq!(t, OperationToggles::only(Operation::Division));

        assert!(t.toggle(Operation::Addition));
        assert!(t.toggle(Operation::Division));
        assert_eq!(t, OperationToggles::only(Operation::Addition));
    }

    #[test]
    fn enabled_is_in_canonical_order() {
        let t = OperationToggles { addition: false, subtraction: true, multiplication: false, division: true };
        assert_eq!(t.enabled(), vec![Operation::Subtraction, Operation::Division]);
        assert!(OperationToggles::none().enabled().is_empty());
        assert!(OperationToggles::none().is_empty());
    }

    #[test]
    fn config_json_fills_defaults() {
        let c = WorksheetConfig::from_json(r#"{ "title": "Week 3", "total_columns": 4 }"#).unwrap();
        assert_eq!(c.title, "Week 3");
        assert_eq!(c.total_columns, 4);
        assert_eq!(c.rows_per_column, 20);
        assert_eq!(c.total_problems(), 80);
        assert_eq!(c.request(OperationToggles::all()).total_count, 80);
    }

    #[test]
    fn default_title_is_dated_and_class_prefilled() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(dated_title(date), "Grade 2 Mental Arithmetic (2026-03-07)");

        let c = WorksheetConfig::default();
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        assert!(c.title.ends_with(&format!("({today})")), "{}", c.title);
        assert_eq!(c.grade_info, "2 (1)");
    }

    #[test]
    fn export_filename_collapses_whitespace() {
        let named = |title: &str| WorksheetConfig { title: title.into(), ..Default::default() };
        assert_eq!(named("Week 3  Drill").export_filename(), "Week_3_Drill.pdf");
        assert_eq!(named(" tabs\there ").export_filename(), "_tabs_here_.pdf");
        assert_eq!(named("plain").export_filename(), "plain.pdf");
    }

    #[test]
    fn export_filename_falls_back_when_title_empty() {
        let c = WorksheetConfig { title: String::new(), ..Default::default() };
        assert_eq!(c.export_filename(), "worksheet.pdf");
    }

    #[test]
    fn total_problems_saturates() {
        let c = WorksheetConfig { total_columns: usize::MAX, rows_per_column: 2, ..Default::default() };
        assert_eq!(c.total_problems(), usize::MAX);
        assert!(c.validate().is_err());
    }

    #[test]
    fn config_rejects_degenerate_shapes() {
        let zero_cols = WorksheetConfig { total_columns: 0, ..Default::default() };
        assert!(matches!(zero_cols.validate(), Err(WorksheetError::InvalidConfig(_))));

        let zero_rows = WorksheetConfig { rows_per_column: 0, ..Default::default() };
        assert!(matches!(zero_rows.validate(), Err(WorksheetError::InvalidConfig(_))));

        let huge = WorksheetConfig { total_columns: 30, rows_per_column: 20, ..Default::default() };
        assert!(matches!(
            huge.validate(),
            Err(WorksheetError::TooManyProblems { requested: 600, max: MAX_PROBLEMS })
        ));
    }

    #[test]
    fn config_json_reports_malformed_input() {
        assert!(matches!(WorksheetConfig::from_json("{ nope"), Err(WorksheetError::Json(_))));
    }

    #[test]
    fn problem_kind_serializes_screaming_snake() {
        let json = serde_json::to_string(&ProblemKind::ThreeNumberMixed).unwrap();
        assert_eq!(json, "\"THREE_NUMBER_MIXED\"");
    }
}
