use graph_views::render::{Color, palette};

#[test]
fn hex_parsing_accepts_common_prefixes() {
    let expected = Color::from_rgb_u8(0x4D, 0xC2, 0xAB);
    assert_eq!(Color::from_hex("#4DC2AB"), expected);
    assert_eq!(Color::from_hex("4dc2ab"), expected);
    assert_eq!(Color::from_hex("0x4DC2AB"), expected);
    assert_eq!(Color::from_hex("0X4DC2AB"), expected);
}

#[test]
fn eight_digit_hex_carries_alpha() {
    let color = Color::from_hex("#FF000080");
    assert_eq!(color.red, 1.0);
    assert_eq!(color.green, 0.0);
    assert!((color.alpha - 128.0 / 255.0).abs() <= 1e-12);
}

#[test]
fn malformed_hex_falls_back_to_black() {
    assert_eq!(Color::from_hex(""), Color::BLACK);
    assert_eq!(Color::from_hex("#12345"), Color::BLACK);
    assert_eq!(Color::from_hex("#GGGGGG"), Color::BLACK);
    assert_eq!(Color::from_hex("#123456789"), Color::BLACK);
}

#[test]
fn hsb_primaries_convert_to_rgb() {
    assert_eq!(Color::from_hsb(0.0, 1.0, 1.0, 1.0), Color::rgb(1.0, 0.0, 0.0));
    assert_eq!(Color::from_hsb(0.5, 1.0, 1.0, 1.0), Color::rgb(0.0, 1.0, 1.0));
    assert_eq!(Color::from_hsb(0.25, 0.0, 0.5, 1.0), Color::rgb(0.5, 0.5, 0.5));
    assert_eq!(Color::from_hsb(1.0, 1.0, 1.0, 1.0), Color::from_hsb(0.0, 1.0, 1.0, 1.0));
}

#[test]
fn lerp_clamps_its_parameter() {
    assert_eq!(Color::BLACK.lerp(Color::WHITE, -1.0), Color::BLACK);
    assert_eq!(Color::BLACK.lerp(Color::WHITE, 2.0), Color::WHITE);
    assert_eq!(
        Color::BLACK.with_alpha(0.0).lerp(Color::BLACK, 0.25).alpha,
        0.25
    );
}

#[test]
fn channel_validation_rejects_out_of_range_values() {
    assert!(Color::rgb(0.2, 0.4, 0.6).validate().is_ok());
    assert!(Color::rgba(0.0, 0.0, 0.0, 1.5).validate().is_err());
    assert!(Color::rgb(f64::NAN, 0.0, 0.0).validate().is_err());
}

#[test]
fn pie_palette_has_one_color_per_sector() {
    assert!(palette::pie_colors(0, None).is_empty());
    assert_eq!(palette::pie_colors(7, None).len(), 7);
    assert_eq!(palette::pie_colors(7, Some(3)), palette::pie_colors(7, Some(3)));
}

#[test]
fn default_palette_matches_documented_hex_values() {
    assert_eq!(palette::bar(), Color::from_hex("#4DC2AB"));
    assert_eq!(palette::line(), Color::from_hex("#FF0066"));
    assert_eq!(palette::bar_text(), Color::from_hex("#333333"));
    assert_eq!(palette::pie_text(), Color::WHITE);
}
