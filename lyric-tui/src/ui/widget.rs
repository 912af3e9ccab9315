mod playback_bar;

pub use playback_bar::*;
