use serde::Deserialize;

use crate::errors::ValidationError;

/// Highest addressable column in a drill-down view.
pub const MAX_COLUMN: i64 = 127;

/// Flat record of the drill-down navigation parameters, coarse to fine:
/// date, hour, epoch, slot, column. Deserialized straight from a URL query.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct DrillDownParams {
    pub date: Option<String>,
    pub hour: Option<i64>,
    pub epoch: Option<i64>,
    pub slot: Option<i64>,
    pub column: Option<i64>,
}

impl DrillDownParams {
    /// Checks the parameter hierarchy.
    ///
    /// Every present parameter requires all coarser ones, and `column` must
    /// lie in `[0, MAX_COLUMN]`. The first violated constraint is returned,
    /// coarsest first.
    pub fn validate(&self) -> Result<(), ValidationError> {
        const FINER: [&str; 4] = ["Hour", "Epoch", "Slot", "Column"];
        const COARSER: [&str; 4] = ["date", "hour", "epoch", "slot"];

        let present = [
            self.date.is_some(),
            self.hour.is_some(),
            self.epoch.is_some(),
            self.slot.is_some(),
            self.column.is_some(),
        ];
        for index in 1..present.len() {
            if present[index] && !present[index - 1] {
                return Err(ValidationError::MissingDependency {
                    finer: FINER[index - 1],
                    coarser: COARSER[index - 1],
                });
            }
        }

        if let Some(column) = self.column {
            if !(0..=MAX_COLUMN).contains(&column) {
                return Err(ValidationError::ColumnOutOfRange(column));
            }
        }

        Ok(())
    }
}
