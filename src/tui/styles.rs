mod colors;
mod constants;

pub use colors::*;
pub use constants::*;
