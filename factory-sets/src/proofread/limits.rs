use std::ops::RangeInclusive;

use factory_data::{
    PartialStatTable,
    StatTable,
};

/// Valid values for a single EV.
pub const EV_RANGE: RangeInclusive<u16> = 0..=252;
/// The most EVs a set may have in total.
pub const EV_TOTAL_LIMIT: u32 = 510;
/// Valid values for a single IV.
pub const IV_RANGE: RangeInclusive<u16> = 0..=31;
/// Valid levels.
pub const LEVEL_RANGE: RangeInclusive<u8> = 1..=100;

/// Checks every EV and the EV total.
pub fn valid_evs(evs: &StatTable) -> bool {
    evs.values().all(|ev| EV_RANGE.contains(&ev)) && evs.sum() <= EV_TOTAL_LIMIT
}

/// Checks every explicitly set IV.
pub fn valid_ivs(ivs: &PartialStatTable) -> bool {
    ivs.values().all(|iv| IV_RANGE.contains(iv))
}

/// Checks a level.
pub fn valid_level(level: u8) -> bool {
    LEVEL_RANGE.contains(&level)
}
