/// RGB colour tag carried by each body. The physics never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

pub const WHITE: Color = Color::new(255, 255, 255);
pub const YELLOW: Color = Color::new(255, 200, 0);
pub const BLUE: Color = Color::new(100, 149, 237);
pub const RED: Color = Color::new(188, 39, 50);
pub const DARK_GREY: Color = Color::new(80, 78, 81);
pub const GREEN: Color = Color::new(140, 255, 140);
pub const BROWN: Color = Color::new(153, 77, 0);
pub const LIGHT_BROWN: Color = Color::new(255, 217, 179);
pub const LIGHT_BLUE: Color = Color::new(102, 255, 255);
pub const DARK_BLUE: Color = Color::new(13, 0, 77);

