use super::*;

#[test]
fn hex_colors_parse_with_and_without_alpha() {
    assert_eq!(Rgba8::parse_hex("#ff8000").unwrap(), Rgba8::opaque(255, 128, 0));
    assert_eq!(
        Rgba8::parse_hex("10203040").unwrap(),
        Rgba8 {
            r: 0x10,
            g: 0x20,
            b: 0x30,
            a: 0x40,
        }
    );
    assert!(Rgba8::parse_hex("#fff").is_err());
    assert!(Rgba8::parse_hex("#gg0000").is_err());
}

#[test]
fn named_colors_and_string_form() {
    assert_eq!("White".parse::<Rgba8>().unwrap(), Rgba8::WHITE);
    assert_eq!("black".parse::<Rgba8>().unwrap(), Rgba8::BLACK);
    assert_eq!(String::from(Rgba8::opaque(1, 2, 3)), "#010203");
    let translucent = Rgba8 {
        a: 0x80,
        ..Rgba8::BLACK
    };
    assert_eq!(String::from(translucent), "#00000080");
    assert!((translucent.opacity() - 128.0 / 255.0).abs() < 1e-12);
}

#[test]
fn serde_uses_hex_strings() {
    let json = serde_json::to_string(&Rgba8::opaque(0, 255, 0)).unwrap();
    assert_eq!(json, "\"#00ff00\"");
    let back: Rgba8 = serde_json::from_str("\"#0000ff\"").unwrap();
    assert_eq!(back, Rgba8::opaque(0, 0, 255));
    assert!(serde_json::from_str::<Rgba8>("\"blue-ish\"").is_err());
}
