//! Shared builders used by every problem-kind generator.
//!
//! Kind generators only decide numbers; formatting the blank slot, drawing
//! round tens and assembling the [`Problem`] record all happen here so the
//! printed text stays uniform across kinds.

use rand::Rng;
use crate::worksheet_engine::models::{Problem, ProblemKind};

/// Five non-breaking spaces. Keeps the empty slot visibly wide in print;
/// ordinary spaces would collapse.
pub const BLANK_SPACE: &str = "\u{00A0}\u{00A0}\u{00A0}\u{00A0}\u{00A0}";

/// The bracketed slot a student writes the missing operand into.
pub fn blank() -> String {
    format!("( {BLANK_SPACE} )")
}

/// Random multiple of ten in `[lo_tens * 10, hi_tens * 10]`.
pub fn round_ten<R: Rng>(rng: &mut R, lo_tens: u32, hi_tens: u32) -> u32 {
    rng.gen_range(lo_tens..=hi_tens) * 10
}

/// `C01R16-9F3A0B12`: 1-based column block and template row, then 32 random bits.
pub fn make_problem_id<R: Rng>(rng: &mut R, column: usize, row: usize) -> String {
    format!("C{:02}R{:02}-{:08X}", column + 1, row + 1, rng.next_u32())
}

/// Assemble the final [`Problem`].
pub fn problem(id: String, display: String, answer: u32, kind: ProblemKind) -> Problem {
    Problem { id, display, answer, kind }
}

/// Pull every unsigned integer out of a display string, in order.
#[cfg(test)]
pub fn numbers_in(display: &str) -> Vec<u32> {
    display
        .split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().unwrap())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn blank_keeps_its_width() {
        let b = blank();
        assert_eq!(b.chars().filter(|&c| c == '\u{00A0}').count(), 5);
        assert!(b.starts_with("( ") && b.ends_with(" )"));
        assert!(numbers_in(&b).is_empty());
    }

    #[test]
    fn round_ten_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let v = round_ten(&mut rng, 3, 8);
            assert_eq!(v % 10, 0);
            assert!((30..=80).contains(&v));
        }
    }

    #[test]
    fn problem_id_encodes_position() {
        let mut rng = StdRng::seed_from_u64(1);
        let id = make_problem_id(&mut rng, 0, 15);
        assert!(id.starts_with("C01R16-"), "{id}");
        assert_eq!(id.len(), "C01R16-".len() + 8);
    }

    #[test]
    fn numbers_in_skips_symbols() {
        assert_eq!(numbers_in("91 - 23 - 37 ="), vec![91, 23, 37]);
        assert_eq!(numbers_in("( \u{a0}\u{a0} ) × 6 = 42"), vec![6, 42]);
    }
}
