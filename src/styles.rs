//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` are const-constructible in
//! embedded-graphics 0.8, so the styles live in the binary's read-only data
//! instead of being rebuilt every frame. All HUD text is white on the black
//! background; only alignment differs between titles and values.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_14_POINT;

use crate::colors::WHITE;

/// Left-aligned, top-anchored text. Used for the row titles.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Right-aligned, top-anchored text. Used for the value strings.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Top)
    .build();

/// White `ProFont` 14pt for titles and values.
pub const TEXT_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_14_POINT, WHITE);
