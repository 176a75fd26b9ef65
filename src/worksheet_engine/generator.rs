use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, trace, warn};

use crate::worksheet_engine::{
    helpers::make_problem_id,
    kinds::{basic, friendly, missing},
    models::{OperationToggles, Problem, WorksheetRequest},
    template::{RowRule, COLUMN_TEMPLATE, ROWS_PER_BLOCK},
};

/// Run one resolved template rule.
fn generate_row<R: Rng>(
    rng: &mut R,
    rule: RowRule,
    toggles: &OperationToggles,
    id: String,
) -> Problem {
    match rule {
        RowRule::BasicMix            => basic::basic_mix(rng, toggles, id),
        RowRule::MissingFactor       => missing::missing_factor(rng, id),
        RowRule::MissingAddSub       => missing::missing_add_sub(rng, toggles, id),
        RowRule::FriendlyAddition    => friendly::friendly_addition(rng, id),
        RowRule::FriendlySubtraction => friendly::friendly_subtraction(rng, id),
        RowRule::FriendlyMixed       => friendly::friendly_mixed(rng, id),
    }
}

/// Fill `total_count` rows by walking the column template block after block.
/// The last block is cut short when `total_count` is not a multiple of 20.
pub fn generate_worksheet_with<R: Rng>(
    total_count: usize,
    toggles: &OperationToggles,
    rng: &mut R,
) -> Vec<Problem> {
    if toggles.is_empty() {
        warn!("worksheet requested with no operations enabled; rows fall back to addition");
    }

    let blocks = total_count.div_ceil(ROWS_PER_BLOCK);
    let mut problems = Vec::with_capacity(total_count);

    for column in 0..blocks {
        trace!(column, "generating column block");
        for (row, rule) in COLUMN_TEMPLATE.iter().enumerate() {
            if problems.len() == total_count {
                break;
            }
            let id = make_problem_id(rng, column, row);
            problems.push(generate_row(rng, rule.resolve(toggles), toggles, id));
        }
    }

    problems
}

/// Entry point: seeds the RNG from the request and generates the sheet.
pub fn generate_worksheet(request: WorksheetRequest) -> Vec<Problem> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    debug!(
        total_count = request.total_count,
        toggles = ?request.toggles,
        seeded = request.rng_seed.is_some(),
        "generating worksheet"
    );

    generate_worksheet_with(request.total_count, &request.toggles, &mut rng)
}
