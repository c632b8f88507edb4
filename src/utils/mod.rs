pub mod colors;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::hm2readable;
pub use time::elapsed_readable;
