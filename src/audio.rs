pub mod controller;
pub mod error;
pub mod playback;
pub mod preview;
pub mod state;
pub mod traits;
pub mod util;
