mod limits;
mod problems;
mod proofreader;

pub use limits::{
    EV_RANGE,
    EV_TOTAL_LIMIT,
    IV_RANGE,
    LEVEL_RANGE,
    valid_evs,
    valid_ivs,
    valid_level,
};
pub use problems::SetValidationProblems;
pub use proofreader::{
    ProofreadOutput,
    Proofreader,
    SetsByTier,
};
