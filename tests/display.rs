mod tests {
    use bitdog_composer::{
        Button, DisplayBindings, HeatLevel, LogDisplay, TemperatureGauge,
        display::{MAX_STICK_OFFSET_PX, joystick_offset},
    };

    #[test]
    fn test_joystick_offset() {
        assert!(joystick_offset(2048, MAX_STICK_OFFSET_PX).abs() < 1e-4);
        assert!((joystick_offset(0, MAX_STICK_OFFSET_PX) + 35.0).abs() < 1e-4);
        assert!((joystick_offset(4095, MAX_STICK_OFFSET_PX) - 34.98).abs() < 0.01);
    }

    #[test]
    fn test_gauge_needle() {
        let gauge = TemperatureGauge::new(75.0);
        assert!((gauge.needle_deg - 45.0).abs() < 1e-4);
        assert_eq!(gauge.level, HeatLevel::VeryHot);
        assert!((TemperatureGauge::new(50.0).needle_deg).abs() < 1e-4);
        assert_eq!(TemperatureGauge::new(50.0).level, HeatLevel::Hot);
    }

    #[test]
    fn test_heat_level_colors_differ() {
        let colors = [
            HeatLevel::Cool.color(),
            HeatLevel::Warm.color(),
            HeatLevel::Hot.color(),
            HeatLevel::VeryHot.color(),
        ];
        for (index, color) in colors.iter().enumerate() {
            assert!(!colors[index + 1..].contains(color));
        }
    }

    #[test]
    fn test_log_display_accepts_updates() {
        let mut display = LogDisplay::new();
        display.update_button(Button::A, true);
        display.update_button(Button::A, true);
        display.update_joystick(2048, 2048, false);
        display.update_uptime("00:00:01");
        display.update_temperature(TemperatureGauge::new(21.0));
    }
}
