//! One illustrated example for every problem kind.
//!
//! Run with:
//!   cargo run --example kinds
//!
//! Each block shows:
//!   • What the kind practises
//!   • Three concrete problems (fixed seed → always the same numbers)
//!   • The stored answer for each

use rand::rngs::StdRng;
use rand::SeedableRng;
use worksheet_gen::worksheet_engine::kinds::{basic, friendly, missing};
use worksheet_gen::{OperationToggles, Problem};

// ── kind metadata ─────────────────────────────────────────────────────────────

struct KindMeta {
    name: &'static str,
    seed: u64,
    teaches: &'static str,
    generate: fn(&mut StdRng, String) -> Problem,
}

fn missing_add_sub_all(rng: &mut StdRng, id: String) -> Problem {
    missing::missing_add_sub(rng, &OperationToggles::all(), id)
}

fn kinds() -> Vec<KindMeta> {
    vec![
        KindMeta {
            name: "Addition",
            seed: 101,
            teaches: "Two-digit addition with the sum kept under 100.",
            generate: basic::addition,
        },
        KindMeta {
            name: "Subtraction",
            seed: 102,
            teaches: "Two-digit subtraction; the difference is never smaller than 5.",
            generate: basic::subtraction,
        },
        KindMeta {
            name: "Multiplication",
            seed: 103,
            teaches: "The 1–9 times tables.",
            generate: basic::multiplication,
        },
        KindMeta {
            name: "Division",
            seed: 104,
            teaches: "Inverse times tables; every division comes out exact.",
            generate: basic::division,
        },
        KindMeta {
            name: "Missing factor (row 16)",
            seed: 116,
            teaches: "Reading a product backwards: which factor makes the equation true?",
            generate: missing::missing_factor,
        },
        KindMeta {
            name: "Missing add/sub operand (row 17)",
            seed: 117,
            teaches: "Finding an unknown addend, minuend or subtrahend.",
            generate: missing_add_sub_all,
        },
        KindMeta {
            name: "Friendly addition (row 18)",
            seed: 118,
            teaches: "Spotting the two numbers that make a round ten and adding them first.",
            generate: friendly::friendly_addition,
        },
        KindMeta {
            name: "Friendly subtraction (row 19)",
            seed: 119,
            teaches: "Taking away two numbers at once because together they make a round ten.",
            generate: friendly::friendly_subtraction,
        },
        KindMeta {
            name: "Friendly mixed (row 20)",
            seed: 120,
            teaches: "Adding to a round ten, then subtracting.",
            generate: friendly::friendly_mixed,
        },
    ]
}

fn main() {
    for meta in kinds() {
        let mut rng = StdRng::seed_from_u64(meta.seed);
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("  {}", meta.name);
        println!("  {}", meta.teaches);
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        for i in 0..3 {
            let p = (meta.generate)(&mut rng, format!("demo-{i}"));
            println!("  {:<28} → {}", p.display, p.answer);
        }
        println!();
    }
}
