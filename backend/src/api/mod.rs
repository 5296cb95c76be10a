pub mod competitor;
pub mod video;

pub use competitor::*;
pub use video::*;
