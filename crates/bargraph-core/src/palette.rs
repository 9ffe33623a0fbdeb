// File: crates/bargraph-core/src/palette.rs
// Summary: Named segment colors and a lighter() helper for derived shades.

use skia_safe as skia;

pub const WHITE: skia::Color = skia::Color::from_rgb(0xff, 0xff, 0xff);
pub const BLACK: skia::Color = skia::Color::from_rgb(0x00, 0x00, 0x00);
pub const DARK_GRAY: skia::Color = skia::Color::from_rgb(0x80, 0x80, 0x80);
pub const GRAY: skia::Color = skia::Color::from_rgb(0xa0, 0xa0, 0xa4);
pub const LIGHT_GRAY: skia::Color = skia::Color::from_rgb(0xc0, 0xc0, 0xc0);
pub const RED: skia::Color = skia::Color::from_rgb(0xff, 0x00, 0x00);

/// Brighten `color` by `factor` percent (150 = 50% brighter).
///
/// The HSV value is scaled; once it saturates at 255 the remainder is taken
/// out of the saturation, so fully saturated colors wash towards white.
/// Factors below 100 darken; non-positive factors return `color` unchanged.
pub fn lighter(color: skia::Color, factor: i32) -> skia::Color {
    if factor <= 0 {
        return color;
    }
    let (h, mut s, v) = to_hsv(color);
    let mut v = v * factor as f64 / 100.0;
    if v > 255.0 {
        s = (s - (v - 255.0)).max(0.0);
        v = 255.0;
    }
    let (r, g, b) = from_hsv(h, s, v);
    skia::Color::from_argb(color.a(), r, g, b)
}

// h in degrees, s and v in 0..=255
fn to_hsv(c: skia::Color) -> (f64, f64, f64) {
    let (r, g, b) = (c.r() as f64, c.g() as f64, c.b() as f64);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let s = if max == 0.0 { 0.0 } else { delta * 255.0 / max };
    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    (h, s, max)
}

fn from_hsv(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let c = v * s / 255.0;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match hp as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = v - c;
    let q = |f: f64| (f + m).round().clamp(0.0, 255.0) as u8;
    (q(r), q(g), q(b))
}
