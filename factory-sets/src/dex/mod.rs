mod dex;

pub use dex::Dex;
