mod tests {
    use fastrand::Rng;
    use myrtio_light_animator::bounds::Direction;
    use myrtio_light_animator::color::{BLACK, BLUE, GREEN, RED, WHITE};
    use myrtio_light_animator::function::{
        AccelerateFunction, BlinkFunction, BouncyMeteorsFunction, CylonFunction, DropState,
        FadeFunction, MarqueeFunction, MergeFunction, Meteor, MeteorsFunction, Overlay,
        RaindropsFunction, RandomChangeFunction, SolidColorCycleFunction, SpritesFunction,
        TwinkleFunction,
    };
    use myrtio_light_animator::{ColorSequence, Frame, Function, FunctionSlot, Rgb};

    struct Harness {
        leds: Vec<Rgb>,
        overlay: Overlay,
        rng: Rng,
    }

    impl Harness {
        fn new(leds: Vec<Rgb>) -> Self {
            Self {
                leds,
                overlay: Overlay::default(),
                rng: Rng::with_seed(42),
            }
        }

        fn frame(&mut self) -> Frame<'_> {
            Frame {
                leds: &mut self.leds,
                overlay: &mut self.overlay,
                background: BLACK,
                rng: &mut self.rng,
            }
        }

        fn tick(&mut self, function: &mut impl Function) {
            function.update(&mut self.frame());
        }
    }

    fn meteor(index: usize, step: usize, direction: Direction) -> Meteor {
        Meteor {
            index,
            step,
            direction,
            size: 2,
            color: RED,
        }
    }

    #[test]
    fn test_marquee_rotates() {
        let mut harness = Harness::new(vec![RED, GREEN, BLUE, BLACK]);
        let mut forward = MarqueeFunction::new(1, Direction::Forward, 1);
        harness.tick(&mut forward);
        assert_eq!(harness.leds, vec![BLACK, RED, GREEN, BLUE]);

        let mut harness = Harness::new(vec![RED, GREEN, BLUE, BLACK]);
        let mut backward = MarqueeFunction::new(1, Direction::Backward, 1);
        harness.tick(&mut backward);
        assert_eq!(harness.leds, vec![GREEN, BLUE, BLACK, RED]);
    }

    #[test]
    fn test_marquee_delay_and_bounce() {
        let mut harness = Harness::new(vec![RED, BLACK, BLACK]);
        let mut marquee = MarqueeFunction::new(1, Direction::Forward, 2).with_bounce(2);
        harness.tick(&mut marquee);
        assert_eq!(harness.leds, vec![RED, BLACK, BLACK]);
        harness.tick(&mut marquee);
        assert_eq!(harness.leds, vec![BLACK, RED, BLACK]);
        assert_eq!(marquee.direction(), Direction::Forward);
        harness.tick(&mut marquee);
        harness.tick(&mut marquee);
        assert_eq!(harness.leds, vec![BLACK, BLACK, RED]);
        assert_eq!(marquee.direction(), Direction::Backward);
    }

    #[test]
    fn test_cylon_bounces_between_ends() {
        let mut harness = Harness::new(vec![BLACK; 5]);
        let mut cylon = CylonFunction::new(2, 1, RED);
        for _ in 0..4 {
            harness.tick(&mut cylon);
        }
        assert_eq!(cylon.index(), 4);
        assert_eq!(cylon.direction(), Direction::Backward);
        assert_eq!(harness.leds[4], RED);

        for _ in 0..50 {
            harness.tick(&mut cylon);
            assert!(cylon.index() < 5);
        }
    }

    #[test]
    fn test_meteors_wrap_and_cycle_colors() {
        let mut harness = Harness::new(vec![BLACK; 10]);
        let mut start = meteor(9, 1, Direction::Forward);
        start.color = BLUE;
        let colors = ColorSequence::new(vec![GREEN, WHITE]);
        let mut meteors = MeteorsFunction::new(vec![start], colors, true);
        harness.tick(&mut meteors);
        assert_eq!(meteors.meteors()[0].index, 0);
        assert_eq!(meteors.meteors()[0].color, GREEN);
        assert_eq!(harness.leds[0], GREEN);

        let mut meteors = MeteorsFunction::new(
            vec![meteor(0, 3, Direction::Backward), meteor(5, 7, Direction::Forward)],
            ColorSequence::single(RED),
            false,
        );
        for _ in 0..100 {
            harness.tick(&mut meteors);
            assert!(meteors.meteors().iter().all(|m| m.index < 10));
        }
    }

    #[test]
    fn test_bouncy_meteors_collide() {
        let mut harness = Harness::new(vec![BLACK; 20]);
        let mut meteors = BouncyMeteorsFunction::new(
            vec![meteor(5, 2, Direction::Forward), meteor(8, 2, Direction::Backward)],
            ColorSequence::single(RED),
        )
        .with_collisions(1.0, true, 3);

        harness.tick(&mut meteors);
        let [a, b] = meteors.meteors() else {
            panic!("expected two meteors");
        };
        assert_eq!((a.index, a.direction), (5, Direction::Backward));
        assert_eq!((b.index, b.direction), (8, Direction::Forward));
        assert_eq!(meteors.active_explosions(), 1);

        harness.tick(&mut meteors);
        assert_eq!(meteors.meteors()[0].index, 3);
        assert_eq!(meteors.meteors()[1].index, 10);
    }

    #[test]
    fn test_explosions_survive_a_shrinking_buffer() {
        let mut harness = Harness::new(vec![BLACK; 20]);
        let mut meteors = BouncyMeteorsFunction::new(
            vec![meteor(5, 2, Direction::Forward), meteor(8, 2, Direction::Backward)],
            ColorSequence::single(RED),
        )
        .with_collisions(1.0, true, 6);
        harness.tick(&mut meteors);
        assert_eq!(meteors.active_explosions(), 1);

        harness.leds.truncate(3);
        for _ in 0..10 {
            harness.tick(&mut meteors);
            assert!(meteors.meteors().iter().all(|m| m.index < 3));
        }
        assert_eq!(harness.leds.len(), 3);
    }

    #[test]
    fn test_bouncy_meteors_without_collisions_pass_through() {
        let mut harness = Harness::new(vec![BLACK; 20]);
        let mut meteors = BouncyMeteorsFunction::new(
            vec![meteor(5, 2, Direction::Forward), meteor(8, 2, Direction::Backward)],
            ColorSequence::single(RED),
        )
        .with_collisions(0.0, true, 3);

        harness.tick(&mut meteors);
        assert_eq!(meteors.meteors()[0].index, 7);
        assert_eq!(meteors.meteors()[1].index, 6);
        assert_eq!(meteors.active_explosions(), 0);

        for _ in 0..200 {
            harness.tick(&mut meteors);
            assert!(meteors.meteors().iter().all(|m| m.index < 20));
        }
    }

    #[test]
    fn test_accelerate_speeds_up() {
        let mut harness = Harness::new(vec![BLACK; 30]);
        let mut accelerate = AccelerateFunction::new(2, 3, 1, 2, ColorSequence::single(RED));
        assert_eq!(accelerate.step(), 1);
        harness.tick(&mut accelerate);
        harness.tick(&mut accelerate);
        assert_eq!(accelerate.step(), 3);
        harness.tick(&mut accelerate);
        harness.tick(&mut accelerate);
        assert_eq!(accelerate.step(), 1);
        for _ in 0..100 {
            harness.tick(&mut accelerate);
            assert!(accelerate.index() < 30);
        }
    }

    #[test]
    fn test_raindrop_lifecycle() {
        let mut harness = Harness::new(vec![BLACK; 30]);
        let mut raindrops = RaindropsFunction::new(1, 3, 1.0, ColorSequence::single(BLUE));
        assert!(raindrops.states().all(|s| s == DropState::Inactive));

        harness.tick(&mut raindrops);
        assert!(raindrops.states().all(|s| s == DropState::Active));

        let mut went_inactive = false;
        for _ in 0..4 {
            harness.tick(&mut raindrops);
            went_inactive |= raindrops.states().any(|s| s == DropState::Inactive);
        }
        assert!(went_inactive);
        assert!(harness.leds.contains(&BLUE));
    }

    #[test]
    fn test_raindrops_never_fall_without_chance() {
        let mut harness = Harness::new(vec![BLACK; 10]);
        let mut raindrops = RaindropsFunction::new(3, 3, 0.0, ColorSequence::single(BLUE));
        for _ in 0..50 {
            harness.tick(&mut raindrops);
        }
        assert_eq!(harness.leds, vec![BLACK; 10]);
    }

    #[test]
    fn test_sprites_stay_in_bounds() {
        let mut harness = Harness::new(vec![BLACK; 10]);
        let mut sprites = SpritesFunction::new(2, 3, 2, 1.0, ColorSequence::single(RED));
        harness.tick(&mut sprites);
        assert_eq!(sprites.active_count(), 2);
        for _ in 0..100 {
            harness.tick(&mut sprites);
            assert!(sprites.active_count() <= 2);
        }
        assert_eq!(harness.leds.len(), 10);
    }

    #[test]
    fn test_fade_terminates() {
        let mut harness = Harness::new(vec![WHITE; 8]);
        let mut fade = FadeFunction::new(10, 1);
        for _ in 0..25 {
            harness.tick(&mut fade);
        }
        assert!(harness.leds.iter().all(|c| *c != BLACK));
        harness.tick(&mut fade);
        assert_eq!(harness.leds, vec![BLACK; 8]);
    }

    #[test]
    fn test_zero_fade_step_still_fades() {
        let mut harness = Harness::new(vec![WHITE; 2]);
        let mut fade = FadeFunction::new(0, 1);
        harness.tick(&mut fade);
        assert_eq!(harness.leds, vec![Rgb::new(254, 254, 254); 2]);
        for _ in 1..255 {
            harness.tick(&mut fade);
        }
        assert_eq!(harness.leds, vec![BLACK; 2]);
    }

    #[test]
    fn test_overlay_functions_leave_no_residue() {
        let mut harness = Harness::new(vec![RED; 6]);
        let mut twinkle = TwinkleFunction::new(1.0, ColorSequence::single(GREEN));
        harness.tick(&mut twinkle);
        assert_eq!(harness.overlay.len(), 6);
        assert_eq!(harness.overlay.get(3), Some(GREEN));
        assert_eq!(harness.leds, vec![RED; 6]);

        harness.overlay.clear();
        let mut blink = BlinkFunction::new(1, 2);
        harness.tick(&mut blink);
        assert_eq!(harness.overlay.get(0), Some(BLACK));
        assert_eq!(harness.leds, vec![RED; 6]);
    }

    #[test]
    fn test_merge_flows_to_center() {
        let mut harness = Harness::new(vec![RED, GREEN, BLUE, WHITE]);
        let mut merge = MergeFunction::new(1, 1);
        harness.tick(&mut merge);
        assert_eq!(harness.leds, vec![GREEN, RED, WHITE, BLUE]);
    }

    #[test]
    fn test_color_changes() {
        let mut harness = Harness::new(vec![BLACK; 4]);
        let mut cycle = SolidColorCycleFunction::new(100, 255, ColorSequence::single(RED));
        harness.tick(&mut cycle);
        assert_eq!(cycle.target(), RED);
        assert_eq!(harness.leds, vec![RED; 4]);

        let mut change = RandomChangeFunction::new(1.0, 255, ColorSequence::single(GREEN));
        harness.tick(&mut change);
        assert_eq!(harness.leds, vec![GREEN; 4]);
    }

    #[test]
    fn test_function_slot_dispatch() {
        let mut harness = Harness::new(vec![RED; 3]);
        let mut off = FunctionSlot::Off;
        off.update(&mut harness.frame());
        assert_eq!(harness.leds, vec![BLACK; 3]);
        assert_eq!(off.name(), "off");

        let mut fade = FunctionSlot::Fade(FadeFunction::new(1, 1));
        fade.set_colors(&ColorSequence::single(RED));
        assert_eq!(fade.name(), "fade");
    }
}
