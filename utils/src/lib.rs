pub mod path_print;

pub use path_print::{EditMarker, PathTree};
