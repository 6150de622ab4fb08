mod tests {
    use bitdog_composer::{
        Error,
        color::{Rgb, hsv_to_rgb, parse_hex_color, scale, to_css_hex, to_hex},
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ff0000").unwrap(), RED);
        assert_eq!(
            parse_hex_color("00A0ff").unwrap(),
            Rgb {
                r: 0,
                g: 160,
                b: 255
            }
        );
    }

    #[test]
    fn test_parse_hex_color_rejects_garbage() {
        assert!(matches!(
            parse_hex_color("#ff00"),
            Err(Error::InvalidColor(_))
        ));
        assert!(matches!(
            parse_hex_color("#gg0000"),
            Err(Error::InvalidColor(_))
        ));
    }

    #[test]
    fn test_hex_formatting() {
        let color = Rgb {
            r: 10,
            g: 171,
            b: 0,
        };
        assert_eq!(to_hex(color), "0aab00");
        assert_eq!(to_css_hex(color), "#0aab00");
    }

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), RED);
        assert_eq!(
            hsv_to_rgb(1.0 / 3.0, 1.0, 1.0),
            Rgb { r: 0, g: 255, b: 0 }
        );
        assert_eq!(
            hsv_to_rgb(0.5, 1.0, 1.0),
            Rgb {
                r: 0,
                g: 255,
                b: 255
            }
        );
    }

    #[test]
    fn test_hsv_wraps_hue() {
        assert_eq!(hsv_to_rgb(1.0, 1.0, 1.0), RED);
        assert_eq!(hsv_to_rgb(-0.5, 1.0, 1.0), hsv_to_rgb(0.5, 1.0, 1.0));
    }

    #[test]
    fn test_hsv_value_and_saturation() {
        assert_eq!(hsv_to_rgb(0.3, 1.0, 0.0), Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(
            hsv_to_rgb(0.3, 0.0, 1.0),
            Rgb {
                r: 255,
                g: 255,
                b: 255
            }
        );
    }

    #[test]
    fn test_scale() {
        assert_eq!(scale(RED, 1.0), RED);
        assert_eq!(scale(RED, 0.0), Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(scale(RED, 0.5), Rgb { r: 128, g: 0, b: 0 });
    }
}
