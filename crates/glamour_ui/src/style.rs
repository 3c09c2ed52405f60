//! Colors and themes.
//!
//! Warm golds for celebration effects, soft pastels for ambient decoration,
//! dark translucent panels so the game stays visible underneath.

/// RGBA color, each channel in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Achievement gold.
    pub const GOLD: Self = Self::rgba(1.0, 0.84, 0.0, 1.0);
    /// Deeper amber used alongside gold.
    pub const AMBER: Self = Self::rgba(1.0, 0.65, 0.1, 1.0);
    /// Warm cream highlight.
    pub const CREAM: Self = Self::rgba(1.0, 0.95, 0.75, 1.0);
    /// Soft sky blue.
    pub const SKY: Self = Self::rgba(0.55, 0.8, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Returns a new color with alpha multiplied by `factor`, clamped to 0..=1.
    #[must_use]
    pub fn scale_alpha(self, factor: f32) -> Self {
        self.with_alpha((self.a * factor).clamp(0.0, 1.0))
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Colors used by window chrome.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Panel background.
    pub background: Color,
    /// Accent strips and icon frames.
    pub accent: Color,
    /// Thin borders.
    pub border: Color,
    /// Primary text.
    pub text: Color,
    /// Secondary text.
    pub text_muted: Color,
    /// Burst colors for celebratory effects.
    pub celebration: [Color; 4],
}

impl Theme {
    /// Default plugin theme.
    pub const GLAMOUR: Self = Self {
        background: Color::rgba(0.08, 0.07, 0.1, 0.92),
        accent: Color::GOLD,
        border: Color::rgba(0.85, 0.7, 0.3, 0.8),
        text: Color::rgba(0.95, 0.95, 0.95, 1.0),
        text_muted: Color::rgba(0.65, 0.65, 0.7, 1.0),
        celebration: [Color::GOLD, Color::AMBER, Color::CREAM, Color::WHITE],
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::GLAMOUR
    }
}
