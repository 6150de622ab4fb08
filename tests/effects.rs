mod tests {
    use bitdog_composer::{
        ColorBuffer, EffectId,
        color::{RED, Rgb},
        effect::{
            BREATH_PERIOD, DiscoEffect, Effect, FireEffect, GRADIENT_PERIOD, LavaLampEffect,
            MAX_SPARKS, MIN_SPARKS, MatrixRainEffect, OCEAN_PERIOD, RINGS, SparkleEffect,
            TRAIL_LEN, WHEEL_PERIOD, rain_green,
        },
        geometry::ROWS,
    };

    const CYAN: Rgb = Rgb {
        r: 0,
        g: 255,
        b: 255,
    };

    fn lit(frame: &ColorBuffer) -> Vec<usize> {
        frame
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.map(|_| index))
            .collect()
    }

    fn frames(effect: EffectId, count: usize) -> Vec<ColorBuffer> {
        let mut slot = effect.to_slot(RED);
        (0..count).map(|_| slot.next_frame()).collect()
    }

    #[test]
    fn test_wave_top_bottom_sweeps_rows() {
        let frames = frames(EffectId::WaveTopBottom, 6);
        assert_eq!(lit(&frames[0]), vec![0, 1, 2, 3, 4]);
        assert_eq!(lit(&frames[1]), vec![5, 6, 7, 8, 9]);
        assert_eq!(lit(&frames[4]), vec![20, 21, 22, 23, 24]);
        // Wraps back to the top.
        assert_eq!(lit(&frames[5]), vec![0, 1, 2, 3, 4]);
        assert!(frames[0].iter().flatten().all(|color| color == RED));
    }

    #[test]
    fn test_wave_bottom_top_starts_at_bottom() {
        let frames = frames(EffectId::WaveBottomTop, 6);
        assert_eq!(lit(&frames[0]), vec![20, 21, 22, 23, 24]);
        assert_eq!(lit(&frames[1]), vec![15, 16, 17, 18, 19]);
        assert_eq!(lit(&frames[5]), vec![20, 21, 22, 23, 24]);
    }

    #[test]
    fn test_wave_left_right_sweeps_columns() {
        let frames = frames(EffectId::WaveLeftRight, 2);
        assert_eq!(lit(&frames[0]), vec![0, 5, 10, 15, 20]);
        assert_eq!(lit(&frames[1]), vec![1, 6, 11, 16, 21]);
    }

    #[test]
    fn test_wave_right_left_starts_at_right() {
        let frames = frames(EffectId::WaveRightLeft, 2);
        assert_eq!(lit(&frames[0]), vec![4, 9, 14, 19, 24]);
        assert_eq!(lit(&frames[1]), vec![3, 8, 13, 18, 23]);
    }

    #[test]
    fn test_wave_expand_cycles_rings() {
        let frames = frames(EffectId::WaveExpand, 4);
        assert_eq!(lit(&frames[0]), vec![12]);
        assert_eq!(lit(&frames[1]), vec![6, 7, 8, 11, 13, 16, 17, 18]);
        assert_eq!(
            lit(&frames[2]),
            vec![0, 1, 2, 3, 4, 5, 9, 10, 14, 15, 19, 20, 21, 22, 23, 24]
        );
        assert_eq!(lit(&frames[3]), vec![12]);
        let ring_sizes: Vec<usize> = RINGS.iter().map(|ring| ring.len()).collect();
        assert_eq!(ring_sizes, vec![1, 8, 16]);
    }

    #[test]
    fn test_gradient_reference_cells() {
        let frames = frames(EffectId::Gradient, GRADIENT_PERIOD as usize / 2 + 1);
        let first = &frames[0];
        assert_eq!(first.get_at(0, 0), Some(RED));
        assert_eq!(
            first.get_at(0, 1),
            Some(Rgb {
                r: 255,
                g: 191,
                b: 0
            })
        );
        assert_eq!(first.get_at(0, 4), Some(CYAN));
        assert_eq!(first.get_at(4, 4), Some(RED));
        // Half a turn later the corner is cyan.
        assert_eq!(frames.last().unwrap().get_at(0, 0), Some(CYAN));
    }

    #[test]
    fn test_color_wheel_reference_cells() {
        let frame = frames(EffectId::ColorWheel, 1)[0];
        assert_eq!(frame.get_at(2, 4), Some(RED));
        assert_eq!(frame.get_at(2, 0), Some(CYAN));
        assert_eq!(
            frame.get_at(0, 2),
            Some(Rgb {
                r: 128,
                g: 0,
                b: 255
            })
        );
        assert_eq!(frame.lit_count(), 25);

        let mut slot = EffectId::ColorWheel.to_slot(RED);
        for _ in 0..WHEEL_PERIOD {
            slot.next_frame();
        }
        assert_eq!(slot.next_frame(), frame);
    }

    #[test]
    fn test_breathing_fades_in_and_out() {
        let period = BREATH_PERIOD as usize;
        let frames = frames(EffectId::Breathing, period + 1);
        // Dark at the start of a breath, full at the middle.
        assert_eq!(frames[0].get(0), Some(Rgb { r: 0, g: 0, b: 0 }));
        assert_eq!(frames[period / 2].get(12), Some(RED));
        assert_eq!(frames[period], frames[0]);
        let peak = frames[period / 2];
        assert!(peak.iter().all(|cell| cell == Some(RED)));
    }

    #[test]
    fn test_ocean_waves_stay_blue() {
        let period = OCEAN_PERIOD as usize;
        let frames = frames(EffectId::OceanWaves, period + 1);
        for frame in &frames {
            for color in frame.iter().flatten() {
                assert!(color.b > 0);
                assert_eq!(color.r, 0);
            }
        }
        assert_eq!(frames[period], frames[0]);
    }

    #[test]
    fn test_lava_lamp_blob_center_is_red() {
        let frame = frames(EffectId::LavaLamp, 1)[0];
        assert_eq!(frame.get_at(1, 1), Some(RED));
    }

    #[test]
    fn test_lava_lamp_blobs_stay_inside() {
        let mut effect = LavaLampEffect::new();
        for _ in 0..500 {
            effect.advance();
            for blob in effect.blobs() {
                assert!((0.0..=4.0).contains(&blob.x), "x = {}", blob.x);
                assert!((0.0..=4.0).contains(&blob.y), "y = {}", blob.y);
            }
        }
    }

    #[test]
    fn test_sparkle_lights_three_to_five_cells() {
        let mut effect = SparkleEffect::with_seed(7);
        for _ in 0..200 {
            let mut frame = ColorBuffer::new();
            effect.render(&mut frame);
            effect.advance();
            assert!((MIN_SPARKS..=MAX_SPARKS).contains(&frame.lit_count()));
        }
    }

    #[test]
    fn test_fire_is_warm() {
        let mut effect = FireEffect::with_seed(42);
        for _ in 0..100 {
            let mut frame = ColorBuffer::new();
            effect.render(&mut frame);
            effect.advance();
            for color in frame.iter().flatten() {
                // Hues between red and orange never have more green than red.
                assert!(color.g <= color.r);
                assert_eq!(color.b, 0);
            }
        }
    }

    #[test]
    fn test_disco_lights_every_cell() {
        let mut effect = DiscoEffect::with_seed(3);
        for _ in 0..50 {
            let mut frame = ColorBuffer::new();
            effect.render(&mut frame);
            effect.advance();
            assert_eq!(frame.lit_count(), 25);
        }
    }

    #[test]
    fn test_matrix_rain_is_green() {
        let mut effect = MatrixRainEffect::with_seed(11);
        let mut lit_frames = 0;
        for _ in 0..100 {
            let mut frame = ColorBuffer::new();
            effect.render(&mut frame);
            effect.advance();
            if frame.lit_count() > 0 {
                lit_frames += 1;
            }
            for color in frame.iter().flatten() {
                assert_eq!(color.r, 0);
                assert_eq!(color.b, 0);
                assert!(color.g > 0);
            }
            assert!(effect.heads().iter().all(|&head| head <= 6));
        }
        assert!(lit_frames > 0);
    }

    #[test]
    fn test_matrix_rain_falling_drops_are_visible() {
        let mut effect = MatrixRainEffect::with_seed(5);
        for _ in 0..200 {
            effect.advance();
            let heads = *effect.heads();
            let mut frame = ColorBuffer::new();
            effect.render(&mut frame);

            for (col, head) in heads.into_iter().enumerate() {
                if head < 0 {
                    continue;
                }
                let column_lit = (0..ROWS).any(|row| frame.get_at(row, col).is_some());
                assert!(column_lit, "column {col} blank with head at {head}");
                assert!(head <= i32::try_from(ROWS + TRAIL_LEN).unwrap() - 2);
            }
        }
    }

    #[test]
    fn test_matrix_rain_trail_fades() {
        assert_eq!(rain_green(1.0), 255);
        assert!(rain_green(2.0 / 3.0) > rain_green(1.0 / 3.0));
    }

    #[test]
    fn test_restarted_effect_renders_first_frame_again() {
        let mut slot = EffectId::WaveTopBottom.to_slot(RED);
        let first = slot.next_frame();
        slot.next_frame();
        slot.reset();
        assert_eq!(slot.next_frame(), first);
    }
}
