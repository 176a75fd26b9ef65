//! Problem-kind generators grouped by family.
//!
//! Every generator takes the RNG and a pre-built problem id:
//!
//! ```ignore
//! pub fn <kind><R: Rng>(rng: &mut R, id: String) -> Problem
//! ```
//!
//! The two that depend on the enabled operations (`basic_mix`,
//! `missing_add_sub`) also take `&OperationToggles`.

/// Addition, subtraction, multiplication, division and the basic mix.
pub mod basic;
/// Missing factor (row 16) and missing add/sub operand (row 17).
pub mod missing;
/// Friendly three-number addition, subtraction and mixed (rows 18–20).
pub mod friendly;
