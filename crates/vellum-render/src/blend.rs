//! Blend modes: how drawn pixels are mixed with what is already there.

/// Multiplier applied to a source or destination term of the blend equation.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Factor {
    /// (0, 0, 0, 0)
    Zero,
    /// (1, 1, 1, 1)
    One,
    /// (src.r, src.g, src.b, src.a)
    SrcColor,
    /// (1, 1, 1, 1) - (src.r, src.g, src.b, src.a)
    OneMinusSrcColor,
    /// (dst.r, dst.g, dst.b, dst.a)
    DstColor,
    /// (1, 1, 1, 1) - (dst.r, dst.g, dst.b, dst.a)
    OneMinusDstColor,
    /// (src.a, src.a, src.a, src.a)
    SrcAlpha,
    /// (1, 1, 1, 1) - (src.a, src.a, src.a, src.a)
    OneMinusSrcAlpha,
    /// (dst.a, dst.a, dst.a, dst.a)
    DstAlpha,
    /// (1, 1, 1, 1) - (dst.a, dst.a, dst.a, dst.a)
    OneMinusDstAlpha,
}

/// How the weighted source and destination terms are combined.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Equation {
    /// `src * src_factor + dst * dst_factor`
    Add,
    /// `src * src_factor - dst * dst_factor`
    Subtract,
    /// `dst * dst_factor - src * src_factor`
    ReverseSubtract,
}

/// A complete blend configuration, color and alpha channels set separately.
///
/// Laid out as six consecutive `i32`s for the native renderer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlendMode {
    pub color_src_factor: Factor,
    pub color_dst_factor: Factor,
    pub color_equation: Equation,
    pub alpha_src_factor: Factor,
    pub alpha_dst_factor: Factor,
    pub alpha_equation: Equation,
}

static_assertions::assert_eq_size!(BlendMode, [i32; 6]);

impl BlendMode {
    /// Standard alpha blending for transparent content.
    ///
    /// Formula: `src.rgb * src.a + dst.rgb * (1 - src.a)`
    pub const ALPHA: BlendMode = BlendMode::separate(
        Factor::SrcAlpha,
        Factor::OneMinusSrcAlpha,
        Equation::Add,
        Factor::One,
        Factor::OneMinusSrcAlpha,
        Equation::Add,
    );

    /// Additive blending - colors are added together.
    ///
    /// Formula: `src.rgb * src.a + dst.rgb`
    pub const ADD: BlendMode = BlendMode::separate(
        Factor::SrcAlpha,
        Factor::One,
        Equation::Add,
        Factor::One,
        Factor::One,
        Equation::Add,
    );

    /// Multiplicative blending.
    ///
    /// Formula: `src.rgb * dst.rgb`
    pub const MULTIPLY: BlendMode = BlendMode::new(Factor::DstColor, Factor::Zero, Equation::Add);

    /// No blending - source completely replaces destination.
    pub const NONE: BlendMode = BlendMode::new(Factor::One, Factor::Zero, Equation::Add);

    /// Same factors and equation for the color and alpha channels.
    pub const fn new(src: Factor, dst: Factor, equation: Equation) -> Self {
        Self::separate(src, dst, equation, src, dst, equation)
    }

    pub const fn separate(
        color_src_factor: Factor,
        color_dst_factor: Factor,
        color_equation: Equation,
        alpha_src_factor: Factor,
        alpha_dst_factor: Factor,
        alpha_equation: Equation,
    ) -> Self {
        Self {
            color_src_factor,
            color_dst_factor,
            color_equation,
            alpha_src_factor,
            alpha_dst_factor,
            alpha_equation,
        }
    }
}

impl Default for BlendMode {
    fn default() -> Self {
        Self::ALPHA
    }
}
