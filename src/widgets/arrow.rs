//! Wind indicator arrow rendering.
//!
//! embedded-graphics has no filled-quad primitive, so the dart is drawn as
//! two filled triangles sharing the tip and the base-center notch. The
//! polygon arrives already rotated and placed; this module only rasterizes.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Triangle};

use crate::colors::Rgba;
use crate::geometry::Quad;

/// Fill the arrow polygon with its current gradient color.
pub fn draw_arrow<D>(display: &mut D, quad: &Quad, color: Rgba)
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_fill(color.to_rgb565());

    let [tip, base_right, base_center, base_left] = quad.points.map(|p| p.to_point());

    Triangle::new(tip, base_right, base_center)
        .into_styled(style)
        .draw(display)
        .ok();
    Triangle::new(tip, base_center, base_left)
        .into_styled(style)
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    use crate::geometry::Vec2;

    #[test]
    fn test_draw_arrow_paints_fill_color() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.set_allow_overdraw(true);

        let quad = Quad::new([
            Vec2::new(10.0, 2.0),
            Vec2::new(18.0, 20.0),
            Vec2::new(10.0, 15.0),
            Vec2::new(2.0, 20.0),
        ]);
        draw_arrow(&mut display, &quad, Rgba::new(0.0, 1.0, 0.0, 1.0));

        // The tip pixel and some interior pixels must carry the fill color
        assert_eq!(display.get_pixel(Point::new(10, 2)), Some(Rgb565::GREEN));
        assert_eq!(display.get_pixel(Point::new(10, 10)), Some(Rgb565::GREEN));
    }

    #[test]
    fn test_draw_arrow_leaves_outside_untouched() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.set_allow_overdraw(true);

        let quad = Quad::new([
            Vec2::new(10.0, 2.0),
            Vec2::new(18.0, 20.0),
            Vec2::new(10.0, 15.0),
            Vec2::new(2.0, 20.0),
        ]);
        draw_arrow(&mut display, &quad, Rgba::new(1.0, 0.0, 0.0, 1.0));

        // The notch between the base corners is outside the dart
        assert_eq!(display.get_pixel(Point::new(10, 19)), None, "Notch should stay unpainted");
        assert_eq!(display.get_pixel(Point::new(0, 0)), None, "Corner should stay unpainted");
    }
}
