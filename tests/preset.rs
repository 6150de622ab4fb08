mod tests {
    use bitdog_composer::{Error, Preset, color::RED};

    #[test]
    fn test_preset_names_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(preset.as_str().parse::<Preset>().unwrap(), preset);
        }
        assert!(matches!(
            "star".parse::<Preset>(),
            Err(Error::UnknownPreset(name)) if name == "star"
        ));
    }

    #[test]
    fn test_preset_indices_are_in_range() {
        for preset in Preset::ALL {
            assert!(preset.indices().iter().all(|&index| index < 25));
        }
    }

    #[test]
    fn test_check_frame() {
        let frame = Preset::Check.to_frame(RED);
        assert_eq!(frame.lit_count(), 5);
        assert_eq!(frame.get_at(4, 0), Some(RED));
        assert_eq!(frame.get_at(0, 4), Some(RED));
        assert_eq!(frame.get_at(0, 0), None);
    }

    #[test]
    fn test_square_is_the_border() {
        let frame = Preset::Square.to_frame(RED);
        assert_eq!(frame.lit_count(), 16);
        assert_eq!(frame.get_at(2, 2), None);
    }
}
