pub mod units;
pub mod vector2d;
