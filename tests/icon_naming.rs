use appshell::assets::{active_icon_file, AssetResolver};
use appshell::data::MenuEntry;
use appshell::icons::rasterize_svg_fit;

const SQUARE_SVG: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path d="M4 4h16v16H4z" fill="#555555"/></svg>"##;

#[test]
fn svg_names_get_the_active_suffix() {
    assert_eq!(active_icon_file("icons/home.svg"), "icons/home-2.svg");
    assert_eq!(active_icon_file("vpn.svg"), "vpn-2.svg");
}

#[test]
fn non_svg_names_pass_through_unchanged() {
    assert_eq!(active_icon_file("icons/home.png"), "icons/home.png");
    assert_eq!(active_icon_file("logo"), "logo");
}

#[test]
fn entries_report_the_icon_for_their_state() {
    let mut entry = MenuEntry::new("Dashboard", "icons/home.svg");
    assert_eq!(entry.current_icon_file(), "icons/home.svg");
    entry.active = true;
    assert_eq!(entry.current_icon_file(), "icons/home-2.svg");
    assert_eq!(entry.active_icon_file(), "icons/home-2.svg");
}

#[test]
fn the_resolver_finds_files_under_an_explicit_root() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("icons")).unwrap();
    std::fs::write(dir.path().join("icons").join("home.svg"), SQUARE_SVG).unwrap();

    let resolver = AssetResolver::discover(Some(dir.path()));
    assert_eq!(resolver.root(), Some(dir.path()));
    assert!(resolver.resolve("icons/home.svg").is_some());
    assert!(
        resolver.resolve("icons/home-2.svg").is_none(),
        "missing files must not resolve"
    );
}

#[test]
fn svgs_rasterize_to_the_requested_square() {
    let img = rasterize_svg_fit(SQUARE_SVG, 36).expect("valid svg should rasterize");
    assert_eq!(img.size, [36, 36]);
    assert!(
        img.pixels.iter().any(|p| p.a() > 0),
        "the rendered glyph should have opaque pixels"
    );
}

#[test]
fn garbage_input_does_not_rasterize() {
    assert!(rasterize_svg_fit(b"not an svg", 24).is_none());
    assert!(rasterize_svg_fit(SQUARE_SVG, 0).is_none());
}
