pub mod eras;
pub mod mini;
pub mod settings;
pub mod variant;
