pub mod colors;
pub mod date;
pub mod duration;
pub mod table;

pub use duration::format_duration;
