pub mod album_art;
pub mod app;
pub mod keyboard;
pub mod spinner;
pub mod status;
pub mod title;
