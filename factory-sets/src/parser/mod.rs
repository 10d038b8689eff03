mod export;

pub use export::{
    ExportParseError,
    parse_sets,
};
