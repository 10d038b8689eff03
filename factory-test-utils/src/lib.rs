mod cases;
mod data_store;
mod setup;

pub use cases::{
    read_test_cases,
    test_cases_dir,
};
pub use data_store::{
    test_data_dir,
    test_data_store,
};
pub use setup::setup_test_environment;
