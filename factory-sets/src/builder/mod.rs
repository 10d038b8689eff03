mod build;
mod options;

pub use build::{
    build_sets,
    build_sets_to_file,
    group_sets,
};
pub use options::BuildOptions;
