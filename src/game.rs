pub mod cancel;
pub mod guess;
pub mod round;
pub mod song;
