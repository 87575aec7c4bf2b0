use super::*;
use crate::layout::config::OverlayConfig;

fn doc() -> CfgDocument {
    let set =
        PageSet::split_qwerty(OverlayConfig::landscape(), OverlayConfig::portrait()).unwrap();
    CfgDocument::build(&set)
}

fn value_of<'a>(lines: &'a [String], key: &str) -> &'a str {
    let prefix = format!("{key} = ");
    lines
        .iter()
        .find_map(|l| l.strip_prefix(prefix.as_str()))
        .unwrap_or_else(|| panic!("missing '{key}'"))
}

#[test]
fn header_declares_four_overlays() {
    let lines = doc().lines();
    assert_eq!(value_of(&lines, "overlays"), "4");
    assert!(lines[0].starts_with('#'));
}

#[test]
fn header_block_is_exact() {
    let lines = doc().lines();
    assert_eq!(
        &lines[..9],
        [
            "# Split QWERTY Keyboard Overlay for RetroArch",
            "# Recreates the iOS soft keyboard removed in commit ef9dc83041",
            "#",
            "# Landscape and portrait versions with Fn layer toggle",
            "# osk_toggle button returns to joypad overlay",
            "# menu_toggle button opens RetroArch menu",
            "",
            "overlays = 4",
            "",
        ]
    );
    assert_eq!(lines[9], "# Landscape Primary");
}

#[test]
fn page_header_fields() {
    let lines = doc().lines();
    assert_eq!(value_of(&lines, "overlay0_name"), "landscape-primary");
    assert_eq!(value_of(&lines, "overlay0_aspect_ratio"), "1.777778");
    assert_eq!(value_of(&lines, "overlay3_aspect_ratio"), "0.562500");
    assert_eq!(value_of(&lines, "overlay3_overlay"), "img/portrait-fn.png");
    assert_eq!(value_of(&lines, "overlay2_normalized"), "true");
    assert_eq!(value_of(&lines, "overlay1_full_screen"), "true");
    assert_eq!(value_of(&lines, "overlay1_auto_x_separation"), "true");
    assert!(lines.iter().any(|l| l == "# Landscape Fn"));
}

#[test]
fn declared_count_matches_emitted_lines() {
    let lines = doc().lines();
    for i in 0..4 {
        let declared: usize = value_of(&lines, &format!("overlay{i}_descs"))
            .parse()
            .unwrap();
        let prefix = format!("overlay{i}_desc");
        let emitted = lines
            .iter()
            .filter(|l| {
                l.strip_prefix(prefix.as_str())
                    .and_then(|rest| rest.split(' ').next())
                    .is_some_and(|idx| idx.chars().all(|c| c.is_ascii_digit()) && !idx.is_empty())
            })
            .count();
        assert_eq!(declared, emitted, "overlay{i}");
    }
}

#[test]
fn fn_descriptor_is_followed_by_next_target() {
    let lines = doc().lines();
    let targets = ["landscape-fn", "landscape-primary", "portrait-fn", "portrait-primary"];
    for (i, target) in targets.iter().enumerate() {
        let pos = lines
            .iter()
            .position(|l| {
                l.starts_with(&format!("overlay{i}_desc")) && l.contains("\"overlay_next,")
                    && !l.contains("0.0010,0.0010,rect")
            })
            .unwrap();
        let idx = lines[pos]
            .trim_start_matches(&format!("overlay{i}_desc"))
            .split(' ')
            .next()
            .unwrap()
            .to_string();
        assert_eq!(
            lines[pos + 1],
            format!("overlay{i}_desc{idx}_next_target = {target}")
        );
    }
}

#[test]
fn landscape_primary_scenario() {
    let lines = doc().lines();
    let page: Vec<&String> = lines
        .iter()
        .filter(|l| l.starts_with("overlay0_desc") && !l.starts_with("overlay0_descs"))
        .collect();
    assert!(page[0].contains("\"osk_toggle,0.0300,0.2700,"));
    assert!(page[1].contains("\"menu_toggle,0.9700,0.2700,"));
    let n = page.len();
    assert!(page[n - 2].contains("\"overlay_next,0.0010,0.0010,"));
    assert_eq!(page[n - 1], "overlay0_desc49_next_target = portrait-primary");
}

#[test]
fn text_is_deterministic_and_ends_with_one_newline() {
    let a = doc().to_text();
    let b = doc().to_text();
    assert_eq!(a, b);
    assert!(!a.ends_with("\n\n"));
    assert!(a.ends_with('\n'));
    assert!(a.contains("\noverlays = 4\n"));
}
