/// An RGBA color with 8-bit components.
///
/// Colors can be constructed from components or hex codes:
///
/// ```
/// use vellum_render::Color;
///
/// let red = Color::rgb(255, 0, 0);
/// let semi_transparent = Color::rgba(255, 255, 255, 128);
/// let from_hex = Color::from_hex(0xFF8800);
/// assert_eq!(from_hex, Color::rgb(0xFF, 0x88, 0x00));
/// ```
///
/// The struct is `#[repr(C)]` and implements `bytemuck::Pod`; it crosses the
/// native boundary as four consecutive bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

static_assertions::assert_eq_size!(Color, u32);

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Create a color from RGB components with full opacity.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a 24-bit RGB hex value (e.g. `0xFF8800`).
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Create a color from a 32-bit RGBA hex value (e.g. `0xFF880080`).
    pub const fn from_hex_alpha(hex: u32) -> Self {
        Self::rgba((hex >> 24) as u8, (hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Components mapped to `0.0..=1.0`.
    pub fn to_f32_array(self) -> [f32; 4] {
        self.to_array().map(|c| c as f32 / 255.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_alpha() {
        assert_eq!(Color::from_hex_alpha(0x11223344), Color::rgba(0x11, 0x22, 0x33, 0x44));
    }

    #[test]
    fn test_f32_array() {
        assert_eq!(Color::WHITE.to_f32_array(), [1.0; 4]);
        assert_eq!(Color::TRANSPARENT.to_f32_array(), [0.0; 4]);
    }

    #[test]
    fn test_byte_layout() {
        assert_eq!(bytemuck::bytes_of(&Color::rgba(1, 2, 3, 4)), &[1, 2, 3, 4]);
    }
}
