mod geo;
mod bounding_box;

pub use self::geo::*;
pub use self::bounding_box::*;
