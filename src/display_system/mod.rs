pub mod color;
pub mod projection;
