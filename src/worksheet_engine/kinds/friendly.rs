//! Three-number "friendly number" problems: two of the operands always
//! combine to a round ten so the sum can be done in the head.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::worksheet_engine::{
    helpers::{problem, round_ten},
    models::{Operation, Problem, ProblemKind},
};

/// `a + b + c =` where two of the three numbers sum to a round ten in
/// [30, 80]. Display order is shuffled so the pair is not always adjacent.
pub fn friendly_addition<R: Rng>(rng: &mut R, id: String) -> Problem {
    let pair_sum = round_ten(rng, 3, 8);
    let first = rng.gen_range(11..=pair_sum - 11);
    let second = pair_sum - first;
    let third = rng.gen_range(10..=95 - pair_sum);

    let mut nums = [first, second, third];
    nums.shuffle(rng);
    let plus = Operation::Addition.symbol();

    problem(
        id,
        format!("{} {plus} {} {plus} {} =", nums[0], nums[1], nums[2]),
        pair_sum + third,
        ProblemKind::ThreeNumberMixed,
    )
}

/// `a - b - c =` where b + c is a round ten in [30, 70] and a exceeds it by
/// at least 5. Order is fixed.
pub fn friendly_subtraction<R: Rng>(rng: &mut R, id: String) -> Problem {
    let sub_sum = round_ten(rng, 3, 7);
    let b = rng.gen_range(11..=sub_sum - 11);
    let c = sub_sum - b;
    let a = rng.gen_range(sub_sum + 5..=99);

    let minus = Operation::Subtraction.symbol();
    problem(id, format!("{a} {minus} {b} {minus} {c} ="), a - sub_sum, ProblemKind::ThreeNumberMixed)
}

/// `a + b - c =` where a + b is a round ten in [40, 90].
///
/// c never exceeds a + b - 10, so the result is at least 10.
pub fn friendly_mixed<R: Rng>(rng: &mut R, id: String) -> Problem {
    let sum_ab = round_ten(rng, 4, 9);
    let a = rng.gen_range(15..=sum_ab - 15);
    let b = sum_ab - a;
    let c = rng.gen_range(10..=sum_ab - 10);

    let (plus, minus) = (Operation::Addition.symbol(), Operation::Subtraction.symbol());
    problem(id, format!("{a} {plus} {b} {minus} {c} ="), sum_ab - c, ProblemKind::ThreeNumberMixed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worksheet_engine::helpers::numbers_in;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const DRAWS: u64 = 500;

    fn id() -> String {
        "test".to_string()
    }

    fn has_round_pair(n: &[u32]) -> bool {
        (0..3).any(|i| (i + 1..3).any(|j| (n[i] + n[j]) % 10 == 0 && n[i] >= 11 && n[j] >= 11))
    }

    #[test]
    fn friendly_addition_contains_a_round_pair() {
        let mut rng = StdRng::seed_from_u64(31);
        let mut third_position_varies = [false; 3];
        for _ in 0..DRAWS {
            let p = friendly_addition(&mut rng, id());
            let n = numbers_in(&p.display);
            assert_eq!(n.len(), 3);
            assert_eq!(p.answer, n.iter().sum::<u32>());
            assert!(p.answer <= 95, "{}", p.display);
            assert!(has_round_pair(&n), "{}", p.display);
            assert_eq!(p.display.matches('+').count(), 2);
            assert_eq!(p.kind, ProblemKind::ThreeNumberMixed);
            // Smallest entry is usually the odd one out; track where it lands.
            let min_pos = (0..3).min_by_key(|&i| n[i]).unwrap();
            third_position_varies[min_pos] = true;
        }
        assert!(third_position_varies.iter().all(|&v| v), "display order never shuffled");
    }

    #[test]
    fn friendly_subtraction_pair_is_round() {
        let mut rng = StdRng::seed_from_u64(32);
        for _ in 0..DRAWS {
            let p = friendly_subtraction(&mut rng, id());
            let n = numbers_in(&p.display);
            let (a, b, c) = (n[0], n[1], n[2]);
            assert_eq!((b + c) % 10, 0, "{}", p.display);
            assert!((30..=70).contains(&(b + c)));
            assert!(b >= 11 && c >= 11);
            assert!(a >= b + c + 5 && a <= 99);
            assert_eq!(p.answer, a - b - c);
            assert!(p.answer >= 5);
        }
    }

    #[test]
    fn friendly_mixed_never_goes_negative() {
        let mut rng = StdRng::seed_from_u64(33);
        for _ in 0..DRAWS {
            let p = friendly_mixed(&mut rng, id());
            let n = numbers_in(&p.display);
            let (a, b, c) = (n[0], n[1], n[2]);
            assert_eq!((a + b) % 10, 0);
            assert!((40..=90).contains(&(a + b)));
            assert!(a >= 15 && b >= 15);
            assert!(c >= 10);
            assert_eq!(p.answer + c, a + b, "{}", p.display);
            assert!(p.answer >= 10);
            assert!(p.display.contains(" + ") && p.display.contains(" - "));
        }
    }
}
