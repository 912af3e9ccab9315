mod args;
mod command;
mod path;

pub use args::*;
pub use command::*;
pub use path::*;
