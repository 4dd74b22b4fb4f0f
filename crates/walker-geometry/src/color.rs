//! 8-bit colors with three or four channels

/// sRGB color, 0-255 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Rgb([u8; 3]),
    Rgba([u8; 4]),
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const RED: Color = Color::rgba(255, 0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb([r, g, b])
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color::Rgba([r, g, b, a])
    }

    /// Builds a color from a channel slice of length 3 or 4.
    pub fn from_channels(channels: &[u8]) -> Option<Self> {
        match *channels {
            [r, g, b] => Some(Color::rgb(r, g, b)),
            [r, g, b, a] => Some(Color::rgba(r, g, b, a)),
            _ => None,
        }
    }

    pub const fn channels(&self) -> usize {
        match self {
            Color::Rgb(_) => 3,
            Color::Rgba(_) => 4,
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        match self {
            Color::Rgb(c) => c.as_slice(),
            Color::Rgba(c) => c.as_slice(),
        }
    }

    pub fn alpha(&self) -> u8 {
        match self {
            Color::Rgb(_) => 255,
            Color::Rgba([.., a]) => *a,
        }
    }

    pub fn with_alpha(self, alpha: u8) -> Self {
        let [r, g, b] = match self {
            Color::Rgb(c) => c,
            Color::Rgba([r, g, b, _]) => [r, g, b],
        };
        Color::rgba(r, g, b, alpha)
    }

    /// RGBA in `[0, 1]`, opaque for three-channel colors
    pub fn to_normalized(&self) -> [f32; 4] {
        let s = self.as_slice();
        [
            s[0] as f32 / 255.0,
            s[1] as f32 / 255.0,
            s[2] as f32 / 255.0,
            self.alpha() as f32 / 255.0,
        ]
    }
}

impl From<catppuccin::Rgb> for Color {
    fn from(rgb: catppuccin::Rgb) -> Self {
        Color::rgba(rgb.r, rgb.g, rgb.b, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_follow_variant() {
        assert_eq!(Color::rgb(1, 2, 3).channels(), 3);
        assert_eq!(Color::rgba(1, 2, 3, 4).channels(), 4);
        assert_eq!(Color::rgb(1, 2, 3).as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn from_channels_rejects_other_arities() {
        assert_eq!(Color::from_channels(&[9, 8, 7]), Some(Color::rgb(9, 8, 7)));
        assert_eq!(Color::from_channels(&[9, 8, 7, 6]), Some(Color::rgba(9, 8, 7, 6)));
        assert_eq!(Color::from_channels(&[1, 2]), None);
        assert_eq!(Color::from_channels(&[1, 2, 3, 4, 5]), None);
    }

    #[test]
    fn three_channel_colors_are_opaque() {
        assert_eq!(Color::rgb(0, 0, 0).alpha(), 255);
        assert_eq!(Color::rgb(255, 0, 51).to_normalized(), [1.0, 0.0, 0.2, 1.0]);
        assert_eq!(Color::rgb(10, 20, 30).with_alpha(40), Color::rgba(10, 20, 30, 40));
    }

    #[test]
    fn palette_colors_convert() {
        let base: Color = catppuccin::PALETTE.mocha.colors.base.rgb.into();
        assert_eq!(base, Color::rgba(30, 30, 46, 255));
    }
}
