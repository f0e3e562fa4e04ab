mod tests {
    use core::cell::Cell;

    use myrtio_light_animator::color::{BLACK, BLUE, GREEN, RED};
    use myrtio_light_animator::function::{CylonOptions, MeteorsOptions, TwinkleOptions};
    use myrtio_light_animator::{
        ColorMode, ControlChannel, ControlIntent, Controller, ControllerConfig, DriverError,
        Duration, Error, FunctionMode, FunctionSlot, LightStringError, MemoryDriver,
    };

    fn config() -> ControllerConfig {
        ControllerConfig {
            seconds_per_mode: Duration::from_ticks(0),
            simulate: true,
            ..ControllerConfig::default()
        }
    }

    fn controller<'a>(led_count: usize) -> Controller<'a, MemoryDriver> {
        Controller::new(MemoryDriver::new(led_count), config())
    }

    #[test]
    fn test_new_controller_is_dark() {
        let controller = controller(8);
        assert_eq!(controller.led_count(), 8);
        assert_eq!(controller.virtual_leds(), &[BLACK; 8]);
        assert!(controller.functions().is_empty());
    }

    #[test]
    fn test_tick_copies_buffer_to_strip() {
        let mut controller = controller(4);
        controller.use_color_solid(RED);
        controller.tick().unwrap();
        assert_eq!(controller.light_string().driver().shown(), &[RED; 4]);
    }

    #[test]
    fn test_virtual_buffer_longer_than_strip() {
        let mut controller = controller(3);
        controller.set_virtual_leds(&[RED, GREEN, BLUE, RED, GREEN]);
        assert_eq!(controller.virtual_leds().len(), 5);
        controller.tick().unwrap();
        assert_eq!(
            controller.light_string().driver().shown(),
            &[RED, GREEN, BLUE]
        );

        controller.set_virtual_leds(&[BLUE]);
        assert_eq!(controller.virtual_leds(), &[BLUE, BLACK, BLACK]);
    }

    #[test]
    fn test_overlay_is_shown_once() {
        let mut controller = controller(5);
        controller.use_color_solid(RED);
        controller.use_color_single(GREEN);
        controller.use_function_twinkle(TwinkleOptions { chance: Some(1.0) });
        controller.tick().unwrap();
        assert_eq!(controller.light_string().driver().shown(), &[GREEN; 5]);
        assert_eq!(controller.virtual_leds(), &[RED; 5]);

        controller.reset();
        controller.tick().unwrap();
        assert_eq!(controller.light_string().driver().shown(), &[BLACK; 5]);
    }

    #[test]
    fn test_reset_clears_mode() {
        let mut controller = controller(6);
        controller.use_color_rainbow(None);
        controller.use_function_fade(Default::default());
        controller.reset();
        assert!(controller.functions().is_empty());
        assert_eq!(controller.virtual_leds(), &[BLACK; 6]);
    }

    #[test]
    fn test_trail_effects_get_one_fade() {
        let mut controller = controller(20);
        controller.use_function_cylon(CylonOptions::default());
        controller.use_function_meteors(MeteorsOptions::default());
        let names: Vec<&str> = controller.functions().iter().map(FunctionSlot::name).collect();
        assert_eq!(names, vec!["fade", "cylon", "meteors"]);
    }

    #[test]
    fn test_run_without_duration_ticks_once() {
        let mut controller = controller(10);
        controller.use_color_solid(BLUE);
        controller.run().unwrap();
        assert_eq!(controller.light_string().driver().show_count(), 1);
        assert!(!controller.is_stopped());
    }

    #[test]
    fn test_stop_intent_ends_endless_run() {
        let channel = ControlChannel::new();
        let mut controller = Controller::new(
            MemoryDriver::new(10),
            ControllerConfig {
                loop_forever: true,
                ..config()
            },
        )
        .with_control(channel.receiver());
        controller.apply_function_mode(FunctionMode::Marquee);

        channel.sender().stop().unwrap();
        controller.run().unwrap();
        assert!(controller.is_stopped());
        assert_eq!(controller.light_string().driver().show_count(), 1);
    }

    #[test]
    fn test_intents_update_running_mode() {
        let channel = ControlChannel::new();
        let mut controller = controller(4).with_control(channel.receiver());
        controller.use_function_twinkle(TwinkleOptions { chance: Some(1.0) });

        let sender = channel.sender();
        sender.try_send(ControlIntent::SetColor(BLUE)).unwrap();
        sender.try_send(ControlIntent::SetBackground(GREEN)).unwrap();
        sender
            .try_send(ControlIntent::SetRefreshDelay(Duration::from_millis(5)))
            .unwrap();
        controller.tick().unwrap();

        assert_eq!(controller.color_sequence().current(), BLUE);
        assert_eq!(controller.background(), GREEN);
        assert_eq!(controller.config().refresh_delay, Duration::from_millis(5));
        assert_eq!(controller.light_string().driver().shown(), &[BLUE; 4]);
    }

    #[test]
    fn test_driver_failure_stops_run() {
        let mut controller = controller(4);
        controller.light_string_mut().driver_mut().set_fail_writes(true);
        assert_eq!(
            controller.run(),
            Err(Error::LightString(LightStringError::Driver(DriverError::Write)))
        );
    }

    #[test]
    fn test_refresh_callback_sees_every_frame() {
        let frames = Cell::new(0);
        let mut controller = controller(4);
        controller.set_refresh_callback(|leds| {
            assert_eq!(leds.len(), 4);
            frames.set(frames.get() + 1);
        });
        controller.tick().unwrap();
        controller.tick().unwrap();
        assert_eq!(frames.get(), 2);
    }

    #[test]
    fn test_pattern_errors_surface() {
        let mut controller = controller(4);
        assert!(controller.use_color_sequence(Vec::new()).is_err());
        assert!(controller.use_color_reflect(&[RED], 0).is_err());
        assert!(controller.use_color_transition(&[], false, None).is_err());
        assert!(controller.use_color_pseudo_random(Some(&[])).is_err());
    }

    #[test]
    fn test_every_mode_pair_plays() {
        let mut controller = controller(30);
        controller.test().unwrap();
        let pairs = ColorMode::ALL.len() * FunctionMode::ALL.len();
        assert_eq!(controller.light_string().driver().show_count(), pairs);
    }

    #[test]
    fn test_demo_plays_requested_modes() {
        let mut controller = controller(12);
        controller.demo(5).unwrap();
        assert_eq!(controller.light_string().driver().show_count(), 5);
    }
}
