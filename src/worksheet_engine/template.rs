//! The fixed 20-row pattern every column of the sheet follows.

use crate::worksheet_engine::models::OperationToggles;

pub const ROWS_PER_BLOCK: usize = 20;

/// What a template row asks for. Any rule that is not eligible under the
/// current toggles is replaced by [`RowRule::BasicMix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRule {
    BasicMix,
    MissingFactor,
    MissingAddSub,
    FriendlyAddition,
    FriendlySubtraction,
    FriendlyMixed,
}

impl RowRule {
    pub fn is_eligible(self, toggles: &OperationToggles) -> bool {
        match self {
            RowRule::BasicMix            => true,
            RowRule::MissingFactor       => toggles.multiplication,
            RowRule::MissingAddSub       => toggles.addition || toggles.subtraction,
            RowRule::FriendlyAddition    => toggles.addition,
            RowRule::FriendlySubtraction => toggles.subtraction,
            RowRule::FriendlyMixed       => toggles.addition && toggles.subtraction,
        }
    }

    /// The rule that actually runs for these toggles.
    pub fn resolve(self, toggles: &OperationToggles) -> RowRule {
        if self.is_eligible(toggles) { self } else { RowRule::BasicMix }
    }
}

pub const COLUMN_TEMPLATE: [RowRule; ROWS_PER_BLOCK] = [
    RowRule::BasicMix, RowRule::BasicMix, RowRule::BasicMix, RowRule::BasicMix, RowRule::BasicMix,
    RowRule::BasicMix, RowRule::BasicMix, RowRule::BasicMix, RowRule::BasicMix, RowRule::BasicMix,
    RowRule::BasicMix, RowRule::BasicMix, RowRule::BasicMix, RowRule::BasicMix, RowRule::BasicMix,
    RowRule::MissingFactor,
    RowRule::MissingAddSub,
    RowRule::FriendlyAddition,
    RowRule::FriendlySubtraction,
    RowRule::FriendlyMixed,
];
