mod tests {
    use std::time::Duration;

    use bitdog_composer::{
        DeviceClient, DeviceConfig,
        device::{BuzzerTone, rgb_form},
        Rgb,
    };

    #[test]
    fn test_default_config() {
        let config = DeviceConfig::default();
        assert_eq!(config.base_url, "http://192.168.4.1");
        assert_eq!(config.request_timeout, Duration::from_secs(2));
        assert_eq!(config.poll_interval, Duration::from_millis(200));
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let config = DeviceConfig::new("http://10.0.0.7/");
        assert_eq!(config.endpoint("/matrix.cgi"), "http://10.0.0.7/matrix.cgi");
        assert_eq!(
            DeviceConfig::default().endpoint("/state.shtml"),
            "http://192.168.4.1/state.shtml"
        );
    }

    #[test]
    fn test_client_keeps_config() {
        let client = DeviceClient::new(DeviceConfig::new("http://10.0.0.7")).unwrap();
        assert_eq!(client.config().base_url, "http://10.0.0.7");
    }

    #[test]
    fn test_peripheral_forms() {
        let tone = BuzzerTone {
            frequency: 880,
            duration_ms: 100,
            channel: "right".to_owned(),
        };
        assert_eq!(
            tone.to_form(),
            [
                ("freq", "880".to_owned()),
                ("dur", "100".to_owned()),
                ("ch", "right".to_owned()),
            ]
        );
        assert_eq!(
            rgb_form(Rgb { r: 1, g: 2, b: 3 }),
            [("r", 1), ("g", 2), ("b", 3)]
        );
    }
}
