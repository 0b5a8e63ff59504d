mod tests {
    use embassy_time::{Duration, Instant};
    use strip_animator::{
        AnimationConfig, AnimationLoop, BouncingWormEffect, EffectSlot, FrameBuffer, LoopState,
        LoopingWormEffect, Rgb, StripGeometry, WaveEffect, scene,
    };

    const GREY: Rgb = Rgb {
        r: 200,
        g: 200,
        b: 200,
    };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

    fn lit_pixels(frame: &FrameBuffer<144>, color: Rgb) -> Vec<usize> {
        (0..144).filter(|i| frame.get(*i) == Some(color)).collect()
    }

    fn snapshot<const N: usize>(animation: &AnimationLoop<N>) -> Vec<(u32, u32, u64)> {
        animation
            .effects()
            .iter()
            .map(|effect| match (effect.worm(), effect.wave()) {
                (Some(worm), _) => (worm.position.to_bits(), worm.speed.to_bits(), 0),
                (None, Some(wave)) => (0, 0, wave.base_angle().to_bits()),
                (None, None) => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn test_empty_loop_clears_strip() {
        let mut animation = AnimationLoop::<4>::new(AnimationConfig::default());
        let mut frame = FrameBuffer::<144>::new(144);
        animation.tick(Instant::from_millis(0), &mut frame);
        assert!(frame.as_slice().iter().all(|pixel| *pixel == GREY));
    }

    #[test]
    fn test_worm_in_the_middle() {
        let geometry = StripGeometry::new(144, 1000.0).unwrap();
        let mut animation = AnimationLoop::<4>::new(AnimationConfig {
            geometry,
            clear_color: GREY,
        });
        animation
            .push(LoopingWormEffect::new(500.0, 63.0, 8, BLUE))
            .unwrap();

        let mut frame = FrameBuffer::<144>::new(144);
        animation.tick(Instant::from_millis(0), &mut frame);

        let led_no = usize::try_from(geometry.led_at(500.0)).unwrap();
        assert_eq!(lit_pixels(&frame, BLUE), (led_no - 8..led_no).collect::<Vec<_>>());
        assert_eq!(lit_pixels(&frame, GREY).len(), 144 - 8);
    }

    #[test]
    fn test_worm_entering_strip() {
        let mut animation = AnimationLoop::<4>::new(AnimationConfig::default());
        animation
            .push(LoopingWormEffect::new(10.0, 63.0, 8, BLUE))
            .unwrap();

        let mut frame = FrameBuffer::<144>::new(144);
        animation.tick(Instant::from_millis(0), &mut frame);
        assert_eq!(lit_pixels(&frame, BLUE), vec![0]);
    }

    #[test]
    fn test_elapsed_time() {
        let mut animation = AnimationLoop::<4>::new(AnimationConfig::default());
        let handle = animation
            .push(LoopingWormEffect::new(0.0, 100.0, 4, BLUE))
            .unwrap();
        let mut frame = FrameBuffer::<144>::new(144);

        assert_eq!(
            animation.tick(Instant::from_millis(5000), &mut frame),
            Duration::from_ticks(0)
        );
        assert_eq!(
            animation.tick(Instant::from_millis(5250), &mut frame),
            Duration::from_millis(250)
        );
        // Clock going backwards advances nothing
        assert_eq!(
            animation.tick(Instant::from_millis(5100), &mut frame),
            Duration::from_ticks(0)
        );

        let worm = animation.effect(handle).and_then(EffectSlot::worm).unwrap();
        assert_eq!(worm.position, 25.0);
    }

    #[test]
    fn test_paused_ticks_freeze_state() {
        let mut animation = scene::demo::<4>(AnimationConfig::default()).unwrap();
        let mut frame = FrameBuffer::<144>::new(144);
        animation.tick(Instant::from_millis(0), &mut frame);
        animation.tick(Instant::from_millis(16), &mut frame);

        animation.set_paused(true);
        assert_eq!(animation.state(), LoopState::Paused);
        let before = snapshot(&animation);

        let advanced = animation.tick(Instant::from_millis(33), &mut frame);
        assert_eq!(advanced, Duration::from_ticks(0));
        let paused_frame = frame.clone();
        animation.tick(Instant::from_millis(50), &mut frame);

        assert_eq!(snapshot(&animation), before);
        // Still rendered while paused
        assert_eq!(frame.as_slice(), paused_frame.as_slice());

        animation.toggle_paused();
        assert_eq!(animation.state(), LoopState::Running);
        animation.tick(Instant::from_millis(66), &mut frame);
        assert_ne!(snapshot(&animation), before);
    }

    #[test]
    fn test_hidden_worm_is_not_drawn() {
        let mut animation = AnimationLoop::<2>::new(AnimationConfig::default());
        let blue = animation
            .push(LoopingWormEffect::new(500.0, 0.0, 8, BLUE))
            .unwrap();
        animation
            .push(LoopingWormEffect::new(200.0, 0.0, 4, RED))
            .unwrap();
        let mut frame = FrameBuffer::<144>::new(144);

        animation.effect_mut(blue).unwrap().set_visible(false);
        animation.tick(Instant::from_millis(0), &mut frame);
        assert!(lit_pixels(&frame, BLUE).is_empty());
        assert_eq!(lit_pixels(&frame, RED), vec![24, 25, 26, 27]);
    }

    #[test]
    fn test_resume_does_not_replay_paused_time() {
        let mut animation = AnimationLoop::<4>::new(AnimationConfig::default());
        let handle = animation
            .push(LoopingWormEffect::new(0.0, 100.0, 4, BLUE))
            .unwrap();
        let mut frame = FrameBuffer::<144>::new(144);

        animation.tick(Instant::from_millis(0), &mut frame);
        animation.set_paused(true);
        animation.tick(Instant::from_millis(1000), &mut frame);
        animation.set_paused(false);
        animation.tick(Instant::from_millis(1100), &mut frame);

        let worm = animation.effect(handle).and_then(EffectSlot::worm).unwrap();
        assert_eq!(worm.position, 10.0);
    }

    #[test]
    fn test_worms_draw_over_wave() {
        let mut animation = AnimationLoop::<4>::new(AnimationConfig::default());
        // Registered after the worm, still drawn underneath it
        animation
            .push(LoopingWormEffect::new(500.0, 0.0, 8, BLUE))
            .unwrap();
        animation.push(WaveEffect::new()).unwrap();

        let mut frame = FrameBuffer::<144>::new(144);
        animation.tick(Instant::from_millis(0), &mut frame);

        assert_eq!(lit_pixels(&frame, BLUE).len(), 8);
        assert!(lit_pixels(&frame, GREY).is_empty());
    }

    #[test]
    fn test_later_worm_wins() {
        let mut animation = AnimationLoop::<4>::new(AnimationConfig::default());
        animation
            .push(LoopingWormEffect::new(500.0, 0.0, 8, BLUE))
            .unwrap();
        animation
            .push(BouncingWormEffect::new(500.0, 0.0, 3, RED))
            .unwrap();

        let mut frame = FrameBuffer::<144>::new(144);
        animation.tick(Instant::from_millis(0), &mut frame);

        assert_eq!(lit_pixels(&frame, BLUE).len(), 5);
        assert_eq!(lit_pixels(&frame, RED).len(), 3);
    }

    #[test]
    fn test_hidden_waves_show_background() {
        let mut animation = AnimationLoop::<4>::new(AnimationConfig::default());
        animation.push(WaveEffect::new()).unwrap();
        let mut frame = FrameBuffer::<144>::new(144);

        assert!(animation.waves_visible());
        animation.toggle_waves();
        assert!(!animation.waves_visible());

        animation.tick(Instant::from_millis(0), &mut frame);
        assert_eq!(lit_pixels(&frame, GREY).len(), 144);

        animation.set_waves_visible(true);
        animation.tick(Instant::from_millis(16), &mut frame);
        assert!(lit_pixels(&frame, GREY).is_empty());
    }

    #[test]
    fn test_hidden_waves_keep_moving() {
        let mut animation = AnimationLoop::<4>::new(AnimationConfig::default());
        let handle = animation.push(WaveEffect::new()).unwrap();
        animation.set_waves_visible(false);

        let mut frame = FrameBuffer::<144>::new(144);
        animation.tick(Instant::from_millis(0), &mut frame);
        animation.tick(Instant::from_millis(100), &mut frame);

        let wave = animation.effect(handle).and_then(EffectSlot::wave).unwrap();
        assert!(wave.base_angle() < 0.0);
    }

    #[test]
    fn test_full_loop_rejects_effect() {
        let mut animation = AnimationLoop::<1>::new(AnimationConfig::default());
        animation.push(WaveEffect::new()).unwrap();
        let rejected = animation.push(LoopingWormEffect::new(0.0, 1.0, 1, BLUE));
        assert!(matches!(rejected, Err(EffectSlot::LoopingWorm(_))));
        assert_eq!(animation.effects().len(), 1);
    }

    #[test]
    fn test_demo_scene() {
        assert!(scene::demo::<3>(AnimationConfig::default()).is_err());

        let animation = scene::demo::<{ scene::DEMO_EFFECTS }>(AnimationConfig::default()).unwrap();
        let kinds: Vec<&str> = animation
            .effects()
            .iter()
            .map(|effect| effect.kind().as_str())
            .collect();
        assert_eq!(
            kinds,
            vec!["wave", "looping_worm", "looping_worm", "bouncing_worm"]
        );
    }
}
