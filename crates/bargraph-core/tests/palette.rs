// File: crates/bargraph-core/tests/palette.rs
// Purpose: Named colors, lighter() shading and theme lookup.

use bargraph_core::palette::{self, lighter, BLACK, DARK_GRAY, LIGHT_GRAY, RED};
use bargraph_core::theme;

#[test]
fn named_grays_match_toolkit_values() {
    assert_eq!((DARK_GRAY.r(), DARK_GRAY.g(), DARK_GRAY.b()), (0x80, 0x80, 0x80));
    assert_eq!((LIGHT_GRAY.r(), LIGHT_GRAY.g(), LIGHT_GRAY.b()), (0xc0, 0xc0, 0xc0));
    assert_eq!(palette::GRAY.b(), 0xa4);
}

#[test]
fn lighter_red_washes_towards_white() {
    let c = lighter(RED, 150);
    assert_eq!(c.r(), 255);
    assert_eq!(c.g(), c.b());
    assert!((120..=135).contains(&c.g()), "got {:?}", c);
    assert_eq!(c.a(), 255);
}

#[test]
fn lighter_scales_gray_value() {
    let c = lighter(DARK_GRAY, 150);
    assert_eq!((c.r(), c.g(), c.b()), (192, 192, 192));
    assert_eq!(lighter(BLACK, 150), BLACK);
    assert_eq!(lighter(RED, 0), RED);
}

#[test]
fn darker_factor_dims() {
    let c = lighter(LIGHT_GRAY, 50);
    assert_eq!((c.r(), c.g(), c.b()), (96, 96, 96));
}

#[test]
fn theme_lookup_falls_back_to_light() {
    assert_eq!(theme::find("DARK").name, "dark");
    assert_eq!(theme::find("nope").name, "light");
    assert_eq!(theme::Theme::default().background, palette::WHITE);
}
