use ggez::graphics::{Canvas, Color, DrawParam, PxScale, Text, TextLayout};
use ggez::mint::Point2;
use ggez::Context;
use std::time::{Duration, Instant};

/// Finite number of possible messages
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum MessageID {
    /// Shown once the snake fills the board
    Victory,
    Paused,
    /// Temporary info when toggling settings
    Notification,
}

pub enum Position {
    TopLeft,
    Center,
}

pub struct Message {
    pub text: String,

    pub position: Position,
    pub margin: f32,
    pub font_size: f32,
    pub color: Color,
    // None means unlimited duration
    pub disappear: Option<Instant>,
}

impl Message {
    pub const DEFAULT_MARGIN: f32 = 20.;
    pub const DEFAULT_FONT_SIZE: f32 = 32.;

    pub fn new(text: impl Into<String>, position: Position, color: Color, duration: Option<Duration>) -> Self {
        Self {
            text: text.into(),
            position,
            margin: Self::DEFAULT_MARGIN,
            font_size: Self::DEFAULT_FONT_SIZE,
            color,
            disappear: duration.map(|d| Instant::now() + d),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        matches!(self.disappear, Some(deadline) if deadline <= now)
    }

    pub fn draw(&self, ctx: &Context, canvas: &mut Canvas) {
        let (width, height) = ctx.gfx.drawable_size();

        let (dest, layout) = match self.position {
            Position::TopLeft => (Point2 { x: self.margin, y: self.margin }, TextLayout::top_left()),
            Position::Center => (Point2 { x: width / 2., y: height / 2. }, TextLayout::center()),
        };

        let mut text = Text::new(self.text.as_str());
        text.set_scale(PxScale::from(self.font_size)).set_layout(layout);

        canvas.draw(&text, DrawParam::default().dest(dest).color(self.color));
    }
}

#[test]
fn test_message_expiry() {
    let now = Instant::now();
    let permanent = Message::new("Victory!", Position::Center, Color::BLACK, None);
    assert!(!permanent.is_expired(now + Duration::from_secs(3600)));

    let temporary = Message::new("Border off", Position::TopLeft, Color::BLACK, Some(Duration::from_secs(2)));
    assert!(!temporary.is_expired(now));
    assert!(temporary.is_expired(now + Duration::from_secs(3)));
}
