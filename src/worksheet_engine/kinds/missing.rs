//! Problems with one operand blanked out for the student to fill in.

use rand::Rng;

use crate::worksheet_engine::{
    helpers::{blank, problem},
    models::{Operation, OperationToggles, Problem, ProblemKind},
};

/// `( ) × b = p` or `a × ( ) = p`, factors in [2, 9].
pub fn missing_factor<R: Rng>(rng: &mut R, id: String) -> Problem {
    let a = rng.gen_range(2..=9u32);
    let b = rng.gen_range(2..=9u32);
    let product = a * b;
    let times = Operation::Multiplication.symbol();
    let (display, answer) = if rng.gen_bool(0.5) {
        (format!("{} {times} {b} = {product}", blank()), a)
    } else {
        (format!("{a} {times} {} = {product}", blank()), b)
    };
    problem(id, display, answer, ProblemKind::MissingOperand)
}

/// `( ) + b = s` or `a + ( ) = s`, sum at most 95.
///
/// The hidden side is drawn once and the answer follows it.
pub fn missing_addend<R: Rng>(rng: &mut R, id: String) -> Problem {
    let a = rng.gen_range(10..=70u32);
    let b = rng.gen_range(10..=95 - a);
    let sum = a + b;
    let plus = Operation::Addition.symbol();
    let (display, answer) = if rng.gen_bool(0.5) {
        (format!("{} {plus} {b} = {sum}", blank()), a)
    } else {
        (format!("{a} {plus} {} = {sum}", blank()), b)
    };
    problem(id, display, answer, ProblemKind::MissingOperand)
}

/// `( ) - b = r` (70% of the time) or `a - ( ) = r`, result at least 10.
pub fn missing_subtrahend_or_minuend<R: Rng>(rng: &mut R, id: String) -> Problem {
    let a = rng.gen_range(25..=99u32);
    let b = rng.gen_range(10..=a - 10);
    let res = a - b;
    let minus = Operation::Subtraction.symbol();
    let (display, answer) = if rng.gen_bool(0.7) {
        (format!("{} {minus} {b} = {res}", blank()), a)
    } else {
        (format!("{a} {minus} {} = {res}", blank()), b)
    };
    problem(id, display, answer, ProblemKind::MissingOperand)
}

/// Row-17 generator: picks addition or subtraction among those enabled
/// (addition when neither is).
pub fn missing_add_sub<R: Rng>(rng: &mut R, toggles: &OperationToggles, id: String) -> Problem {
    let op = match (toggles.addition, toggles.subtraction) {
        (true, true) => {
            if rng.gen_bool(0.5) { Operation::Addition } else { Operation::Subtraction }
        }
        (false, true) => Operation::Subtraction,
        _             => Operation::Addition,
    };
    match op {
        Operation::Subtraction => missing_subtrahend_or_minuend(rng, id),
        _                      => missing_addend(rng, id),
    }
}
