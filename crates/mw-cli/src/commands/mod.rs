pub mod play;
pub mod roll;
pub mod status;
