mod tests {
    use std::{
        sync::{Arc, Mutex},
        time::Duration,
    };

    use bitdog_composer::{
        BuzzerTone, ColorBuffer, Controller, EffectId, Error, MatrixSink, PeripheralSink, Preset,
        Rgb,
        color::RED,
    };

    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    #[derive(Debug, Clone, PartialEq)]
    enum Sent {
        Matrix(ColorBuffer),
        Text(String),
        Tone(BuzzerTone),
        Rgb(Rgb),
    }

    #[derive(Debug, Clone, Default)]
    struct RecordingBoard {
        sent: Arc<Mutex<Vec<Sent>>>,
    }

    impl RecordingBoard {
        fn sent(&self) -> Vec<Sent> {
            self.sent.lock().unwrap().clone()
        }

        fn matrix_count(&self) -> usize {
            self.sent()
                .iter()
                .filter(|sent| matches!(sent, Sent::Matrix(_)))
                .count()
        }
    }

    impl MatrixSink for RecordingBoard {
        fn send(&self, frame: &ColorBuffer) {
            self.sent.lock().unwrap().push(Sent::Matrix(*frame));
        }
    }

    impl PeripheralSink for RecordingBoard {
        fn show_text(&self, text: &str) {
            self.sent.lock().unwrap().push(Sent::Text(text.to_owned()));
        }

        fn beep(&self, tone: &BuzzerTone) {
            self.sent.lock().unwrap().push(Sent::Tone(tone.clone()));
        }

        fn set_rgb(&self, color: Rgb) {
            self.sent.lock().unwrap().push(Sent::Rgb(color));
        }
    }

    #[test]
    fn test_default_color_is_red() {
        let controller = Controller::new(RecordingBoard::default());
        assert_eq!(controller.selected_color(), RED);
        assert_eq!(controller.matrix(), ColorBuffer::new());
    }

    #[test]
    fn test_toggle_cell_is_local() {
        let board = RecordingBoard::default();
        let mut controller = Controller::new(board.clone());
        controller.select_color(BLUE);

        controller.toggle_cell(7).unwrap();
        assert_eq!(controller.matrix().get(7), Some(BLUE));
        controller.toggle_cell(7).unwrap();
        assert_eq!(controller.matrix().get(7), None);
        assert!(matches!(
            controller.toggle_cell(25),
            Err(Error::CellOutOfRange(25))
        ));
        assert!(board.sent().is_empty());

        controller.toggle_cell(0).unwrap();
        controller.send_matrix();
        assert_eq!(
            board.sent(),
            vec![Sent::Matrix(ColorBuffer::from_indices(&[0], BLUE))]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_preset_stops_animation_and_sends_once() {
        let board = RecordingBoard::default();
        let mut controller = Controller::new(board.clone());
        controller.start_effect(EffectId::Disco);
        assert!(controller.is_animating());

        controller.set_preset(Preset::Plus);
        assert!(!controller.is_animating());
        assert_eq!(controller.active_effect(), None);
        assert_eq!(
            controller.matrix(),
            ColorBuffer::from_indices(Preset::Plus.indices(), RED)
        );

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(board.matrix_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fill_and_clear_stop_animation() {
        let board = RecordingBoard::default();
        let mut controller = Controller::new(board.clone());

        controller.start_effect_with_interval(EffectId::WaveTopBottom, Duration::from_millis(50));
        tokio::time::sleep(Duration::from_millis(120)).await;
        assert_eq!(board.matrix_count(), 2);

        controller.select_color(BLUE);
        controller.fill();
        assert!(!controller.is_animating());
        assert_eq!(controller.matrix(), ColorBuffer::filled(BLUE));

        controller.start_effect(EffectId::WaveExpand);
        assert_eq!(controller.active_effect(), Some(EffectId::WaveExpand));
        controller.clear();
        assert!(!controller.is_animating());
        assert_eq!(controller.matrix().lit_count(), 0);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(board.matrix_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_effect_uses_color_selected_at_start() {
        let board = RecordingBoard::default();
        let mut controller = Controller::new(board.clone());

        controller.select_color(BLUE);
        controller.start_effect(EffectId::WaveExpand);
        controller.select_color(RED);
        tokio::time::sleep(Duration::from_millis(310)).await;

        assert_eq!(controller.matrix().get(12), Some(BLUE));
        assert!(controller.stop_animation());
        assert_eq!(controller.matrix().get(12), Some(BLUE));
    }

    #[test]
    fn test_oled_text_is_trimmed_and_previewed() {
        let board = RecordingBoard::default();
        let mut controller = Controller::new(board.clone());

        assert!(controller.send_oled_text("  Ola  "));
        assert!(!controller.send_oled_text("   "));
        assert_eq!(controller.oled_lines().last(), Some("Ola"));
        assert_eq!(controller.oled_lines().count(), 8);
        assert_eq!(board.sent(), vec![Sent::Text("Ola".to_owned())]);
    }

    #[test]
    fn test_peripherals_pass_through() {
        let board = RecordingBoard::default();
        let controller = Controller::new(board.clone());
        let tone = BuzzerTone {
            frequency: 440,
            duration_ms: 250,
            channel: "left".to_owned(),
        };

        controller.play_buzzer(&tone);
        controller.send_rgb(BLUE);
        assert_eq!(board.sent(), vec![Sent::Tone(tone), Sent::Rgb(BLUE)]);
    }
}
