//! Command implementations

mod check;
mod files;

pub use check::check;
pub use files::files;
