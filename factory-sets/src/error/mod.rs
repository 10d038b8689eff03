mod factory_error;
mod validation_error;
mod wrap;

pub use anyhow::Error;
pub use factory_error::{
    GeneralError,
    NotFoundError,
    general_error,
    not_found_error,
};
pub use validation_error::ValidationError;
pub use wrap::{
    WrapError,
    WrapOptionError,
    WrapResultError,
};
