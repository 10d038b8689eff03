mod species_flags;

pub use species_flags::add_flags;
