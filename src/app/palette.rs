use ggez::graphics::Color;

pub struct Palette {
    pub background_color: Color,
    pub border_color: Color,
    pub apple_color: Color,
    pub snake_color: Color,
    pub text_color: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

impl Palette {
    pub fn classic() -> Self {
        Self {
            background_color: Color::from_rgb(160, 160, 160),
            border_color: Color::from_rgb(93, 216, 228),
            apple_color: Color::from_rgb(220, 0, 0),
            snake_color: Color::from_rgb(0, 156, 0),
            text_color: Color::BLACK,
        }
    }
}
