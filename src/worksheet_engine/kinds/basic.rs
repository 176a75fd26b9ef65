//! Two-operand problems and the basic-mix draw used by rows 1–15 and as the
//! fallback for every advanced row.

use rand::Rng;
use tracing::trace;

use crate::worksheet_engine::{
    helpers::problem,
    models::{Operation, OperationToggles, Problem, ProblemKind},
};

/// `a + b =` with a in [10, 85] and the sum capped at 99.
pub fn addition<R: Rng>(rng: &mut R, id: String) -> Problem {
    let a = rng.gen_range(10..=85u32);
    let b = rng.gen_range(2..=99 - a);
    let display = format!("{a} {} {b} =", Operation::Addition.symbol());
    problem(id, display, a + b, ProblemKind::Addition)
}

/// `a - b =` with a in [20, 99]; the difference is always at least 5.
pub fn subtraction<R: Rng>(rng: &mut R, id: String) -> Problem {
    let a = rng.gen_range(20..=99u32);
    let b = rng.gen_range(2..=a - 5);
    let display = format!("{a} {} {b} =", Operation::Subtraction.symbol());
    problem(id, display, a - b, ProblemKind::Subtraction)
}

/// Single-digit times tables.
pub fn multiplication<R: Rng>(rng: &mut R, id: String) -> Problem {
    let a = rng.gen_range(1..=9u32);
    let b = rng.gen_range(1..=9u32);
    let display = format!("{a} {} {b} =", Operation::Multiplication.symbol());
    problem(id, display, a * b, ProblemKind::Multiplication)
}

/// Inverse times tables: the dividend is built from divisor × quotient so the
/// division is always exact.
pub fn division<R: Rng>(rng: &mut R, id: String) -> Problem {
    let divisor = rng.gen_range(1..=9u32);
    let quotient = rng.gen_range(1..=9u32);
    let dividend = divisor * quotient;
    let display = format!("{dividend} {} {divisor} =", Operation::Division.symbol());
    problem(id, display, quotient, ProblemKind::Division)
}

pub fn operation<R: Rng>(rng: &mut R, op: Operation, id: String) -> Problem {
    match op {
        Operation::Addition       => addition(rng, id),
        Operation::Subtraction    => subtraction(rng, id),
        Operation::Multiplication => multiplication(rng, id),
        Operation::Division       => division(rng, id),
    }
}

/// One problem drawn uniformly from the enabled operations.
///
/// With nothing enabled this degrades to addition rather than failing.
pub fn basic_mix<R: Rng>(rng: &mut R, toggles: &OperationToggles, id: String) -> Problem {
    let enabled = toggles.enabled();
    if enabled.is_empty() {
        trace!("no operations enabled, falling back to addition");
        return addition(rng, id);
    }
    let op = enabled[rng.gen_range(0..enabled.len())];
    operation(rng, op, id)
}
