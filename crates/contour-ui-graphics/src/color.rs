//! Color representation in linear RGBA components

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(r, g, b, a)
    }

    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Builds a color from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self::from_rgba_u8(
            ((argb >> 16) & 0xFF) as u8,
            ((argb >> 8) & 0xFF) as u8,
            (argb & 0xFF) as u8,
            ((argb >> 24) & 0xFF) as u8,
        )
    }

    pub fn r(&self) -> f32 {
        self.0
    }

    pub fn g(&self) -> f32 {
        self.1
    }

    pub fn b(&self) -> f32 {
        self.2
    }

    pub fn a(&self) -> f32 {
        self.3
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self(self.0, self.1, self.2, alpha.clamp(0.0, 1.0))
    }

    /// Multiplies the current alpha by `factor`.
    pub fn scale_alpha(&self, factor: f32) -> Self {
        self.with_alpha(self.3 * factor)
    }

    /// Component-wise linear interpolation towards `target`.
    pub fn lerp(&self, target: &Color, fraction: f32) -> Self {
        let t = fraction.clamp(0.0, 1.0);
        Self(
            self.0 + (target.0 - self.0) * t,
            self.1 + (target.1 - self.1) * t,
            self.2 + (target.2 - self.2) * t,
            self.3 + (target.3 - self.3) * t,
        )
    }

    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_unpacks_channels() {
        let color = Color::from_argb(0xFF6200EE);
        assert_eq!(color, Color::from_rgba_u8(0x62, 0x00, 0xEE, 0xFF));
    }

    #[test]
    fn lerp_hits_endpoints_and_midpoint() {
        let from = Color::BLACK;
        let to = Color::WHITE;
        assert_eq!(from.lerp(&to, 0.0), from);
        assert_eq!(from.lerp(&to, 1.0), to);
        assert_eq!(from.lerp(&to, 0.5), Color(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn scale_alpha_multiplies() {
        let color = Color::rgba(1.0, 0.0, 0.0, 0.5).scale_alpha(0.5);
        assert_eq!(color.a(), 0.25);
    }
}
