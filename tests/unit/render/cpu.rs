use super::*;
use crate::layout::config::OverlayConfig;
use crate::layout::grid::KeyGrid;
use crate::pages::{PageSet, PageSpec};

fn set() -> PageSet {
    PageSet::split_qwerty(OverlayConfig::landscape(), OverlayConfig::portrait()).unwrap()
}

fn renderer() -> OverlayRenderer {
    // Glyphs may be absent on font-less hosts; label tests go through `probed_font`.
    OverlayRenderer::new(Style::default(), &FontSource::probe())
}

fn near(a: u8, b: u8, tol: u8) -> bool {
    a.abs_diff(b) <= tol
}

#[test]
fn canvas_matches_orientation() {
    let set = set();
    let mut r = renderer();
    let land = r.render_page(&set.specs()[0]).unwrap();
    assert_eq!((land.width, land.height), (1920, 1080));
    let port = r.render_page(&set.specs()[3]).unwrap();
    assert_eq!((port.width, port.height), (1080, 1920));
    assert_eq!(port.data.len(), 1080 * 1920 * 4);
}

#[test]
fn background_stays_transparent() {
    let set = set();
    let img = renderer().render_page(&set.specs()[0]).unwrap();
    assert_eq!(img.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(img.pixel(960, 540), Some([0, 0, 0, 0]));
    assert_eq!(img.pixel(1919, 1079), Some([0, 0, 0, 0]));
}

#[test]
fn panel_padding_shows_panel_fill() {
    let set = set();
    let img = renderer().render_page(&set.specs()[0]).unwrap();
    // inside the left panel, inside its 12px padding, away from the rounded corners
    let [r, g, b, a] = img.pixel(15, 700).unwrap();
    assert!(near(a, 180, 2), "alpha {a}");
    assert!(near(r, 30, 2) && near(g, 30, 2) && near(b, 30, 2));
}

#[test]
fn toggle_button_is_drawn_on_empty_canvas() {
    let set = set();
    let img = renderer().render_page(&set.specs()[0]).unwrap();
    // Joypad button spans (17, 274)..(97, 308); sample its top-right, clear of the label
    let [r, _, _, a] = img.pixel(90, 277).unwrap();
    assert!(near(a, 200, 2), "alpha {a}");
    assert!(near(r, 80, 2));
}

#[test]
fn keys_are_composited_over_panel() {
    let set = set();
    let img = renderer().render_page(&set.specs()[0]).unwrap();
    // lower-left area of key "1" at (22, 362)..(97, 483)
    let [r, _, _, a] = img.pixel(30, 470).unwrap();
    assert!(a > 230 && a < 245, "alpha {a}");
    assert!(r > 65 && r < 78, "red {r}");
}

#[test]
fn empty_cells_leave_panel_visible() {
    let set = set();
    let img = renderer().render_page(&set.specs()[1]).unwrap();
    // left fn row 0 col 1 is empty: x = 22 + 85 .. +75, y = 362 .. 483
    let [_, _, _, a] = img.pixel(107 + 37, 362 + 60).unwrap();
    assert!(near(a, 180, 2), "alpha {a}");
}

#[test]
fn rendering_is_deterministic() {
    let set = set();
    let a = renderer().render_page(&set.specs()[2]).unwrap();
    let b = renderer().render_page(&set.specs()[2]).unwrap();
    assert_eq!(a, b);
}

/// A font file from the candidate list, or `None` when labels may not render at all.
fn probed_font() -> Option<FontSource> {
    match FontSource::probe() {
        FontSource::SystemDefault => None,
        font => Some(font),
    }
}

fn key_rect(spec: &PageSpec, grid: &KeyGrid, label: &str) -> Rect {
    let p = grid
        .placements()
        .find(|p| p.label == label)
        .unwrap_or_else(|| panic!("no key '{label}'"));
    Geometry::new(&spec.config).key_rect(grid.side, &p)
}

/// Bounding box `(x0, y0, x1, y1)` of near-white label ink within `area`, inclusive.
fn ink_bbox(img: &RasterImage, area: Rect) -> Option<(u32, u32, u32, u32)> {
    let mut bbox: Option<(u32, u32, u32, u32)> = None;
    for y in area.y0.max(0.0) as u32..area.y1 as u32 {
        for x in area.x0.max(0.0) as u32..area.x1 as u32 {
            let Some([r, g, b, a]) = img.pixel(x, y) else {
                continue;
            };
            if r < 180 || g < 180 || b < 180 || a < 200 {
                continue;
            }
            bbox = Some(match bbox {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
    }
    bbox
}

fn assert_label_inside_and_centered(img: &RasterImage, rect: Rect, what: &str) {
    // Search a margin around the rect so ink that escapes it is caught.
    let (x0, y0, x1, y1) =
        ink_bbox(img, rect.inflate(8.0, 8.0)).unwrap_or_else(|| panic!("no ink for {what}"));
    assert!(
        f64::from(x0) >= rect.x0
            && f64::from(y0) >= rect.y0
            && f64::from(x1) < rect.x1
            && f64::from(y1) < rect.y1,
        "{what}: ink ({x0},{y0})..({x1},{y1}) escapes {rect:?}"
    );

    let cx = f64::from(x0 + x1 + 1) / 2.0;
    let cy = f64::from(y0 + y1 + 1) / 2.0;
    let center = rect.center();
    assert!((cx - center.x).abs() <= 4.0, "{what}: ink cx {cx} vs {}", center.x);
    assert!((cy - center.y).abs() <= 5.0, "{what}: ink cy {cy} vs {}", center.y);
}

#[test]
fn key_labels_are_centered_in_their_keys() {
    let Some(font) = probed_font() else {
        return;
    };
    let set = set();
    let spec = &set.specs()[0];
    let img = OverlayRenderer::new(Style::default(), &font)
        .render_page(spec)
        .unwrap();

    for label in ["1", "Shift"] {
        let rect = key_rect(spec, &spec.left, label);
        assert_label_inside_and_centered(&img, rect, label);
    }
}

#[test]
fn multi_glyph_label_spreads_across_key() {
    let Some(font) = probed_font() else {
        return;
    };
    let set = set();
    let spec = &set.specs()[0];
    let img = OverlayRenderer::new(Style::default(), &font)
        .render_page(spec)
        .unwrap();

    let rect = key_rect(spec, &spec.left, "Shift");
    let (x0, _, x1, _) = ink_bbox(&img, rect).unwrap();
    // five glyphs at 17px are far wider than any single glyph
    assert!(x1 - x0 >= 20, "Shift ink width {}", x1 - x0 + 1);
}

#[test]
fn toggle_labels_sit_inside_their_buttons() {
    let Some(font) = probed_font() else {
        return;
    };
    let set = set();
    let spec = &set.specs()[0];
    let img = OverlayRenderer::new(Style::default(), &font)
        .render_page(spec)
        .unwrap();

    let geom = Geometry::new(&spec.config);
    for toggle in Toggle::ALL {
        assert_label_inside_and_centered(&img, geom.toggle_rect(toggle), toggle.label());
    }
}

#[test]
fn long_labels_use_the_small_font() {
    let Some(font) = probed_font() else {
        return;
    };
    let set = set();
    let spec = &set.specs()[0];
    let rect = key_rect(spec, &spec.left, "Shift");

    let small = OverlayRenderer::new(Style::default(), &font)
        .render_page(spec)
        .unwrap();
    let full_style = Style {
        long_label_chars: 16,
        ..Style::default()
    };
    let full = OverlayRenderer::new(full_style, &font)
        .render_page(spec)
        .unwrap();

    let (_, sy0, _, sy1) = ink_bbox(&small, rect).unwrap();
    let (_, fy0, _, fy1) = ink_bbox(&full, rect).unwrap();
    assert!(
        sy1 - sy0 < fy1 - fy0,
        "small {} vs full {}",
        sy1 - sy0 + 1,
        fy1 - fy0 + 1
    );
}
