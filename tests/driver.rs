mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use myrtio_light_animator::color::{BLACK, BLUE, GREEN, RED};
    use myrtio_light_animator::{
        ChannelOrder, DriverError, LedDriver, LightString, LightStringError, Rgb,
        SmartLedsDriver, StripConfig,
    };
    use smart_leds::SmartLedsWrite;

    /// Writer that keeps every frame it receives
    #[derive(Clone, Default)]
    struct Recorder {
        frames: Rc<RefCell<Vec<Vec<Rgb>>>>,
        fail: bool,
    }

    impl Recorder {
        fn last(&self) -> Vec<Rgb> {
            self.frames.borrow().last().cloned().unwrap_or_default()
        }

        fn count(&self) -> usize {
            self.frames.borrow().len()
        }
    }

    impl SmartLedsWrite for Recorder {
        type Error = ();
        type Color = Rgb;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            if self.fail {
                return Err(());
            }
            let frame = iterator.into_iter().map(Into::into).collect();
            self.frames.borrow_mut().push(frame);
            Ok(())
        }
    }

    fn config(led_count: usize, brightness: u8, order: ChannelOrder) -> StripConfig {
        StripConfig {
            led_count,
            brightness,
            order,
            ..StripConfig::default()
        }
    }

    #[test]
    fn test_packed_colors_reach_the_writer_unchanged() {
        let recorder = Recorder::default();
        let mut driver = SmartLedsDriver::new(recorder.clone(), &config(3, 255, ChannelOrder::Grb));
        assert_eq!(driver.num_pixels(), 3);
        assert_eq!(driver.channel_order(), ChannelOrder::Grb);

        let color = Rgb::new(10, 200, 30);
        driver.set_pixel_color(0, ChannelOrder::Grb.pack(color)).unwrap();
        driver.set_pixel_color(2, ChannelOrder::Grb.pack(BLUE)).unwrap();
        driver.show().unwrap();

        assert_eq!(recorder.last(), vec![color, BLACK, BLUE]);
    }

    #[test]
    fn test_rgb_order_unpacks_with_its_own_layout() {
        let recorder = Recorder::default();
        let mut strip = LightString::new(SmartLedsDriver::new(
            recorder.clone(),
            &config(2, 255, ChannelOrder::Rgb),
        ));
        assert_eq!(strip.order(), ChannelOrder::Rgb);
        strip.set(0, RED).unwrap();
        strip.set(1, GREEN).unwrap();
        strip.refresh().unwrap();

        assert_eq!(recorder.last(), vec![RED, GREEN]);
    }

    #[test]
    fn test_brightness_scales_the_output() {
        let recorder = Recorder::default();
        let mut driver = SmartLedsDriver::new(recorder.clone(), &config(1, 127, ChannelOrder::Grb));
        driver
            .set_pixel_color(0, ChannelOrder::Grb.pack(Rgb::new(200, 100, 0)))
            .unwrap();
        driver.show().unwrap();
        assert_eq!(recorder.last(), vec![Rgb::new(100, 50, 0)]);

        driver.set_brightness(0);
        driver.show().unwrap();
        assert_eq!(recorder.last(), vec![BLACK]);

        driver.set_brightness(255);
        driver.show().unwrap();
        assert_eq!(recorder.last(), vec![Rgb::new(200, 100, 0)]);
    }

    #[test]
    fn test_pixel_out_of_range() {
        let recorder = Recorder::default();
        let mut driver = SmartLedsDriver::new(recorder.clone(), &config(4, 255, ChannelOrder::Grb));
        assert_eq!(
            driver.set_pixel_color(4, 0),
            Err(DriverError::PixelOutOfRange(4))
        );
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn test_cleanup_blanks_the_strip() {
        let recorder = Recorder::default();
        let mut driver = SmartLedsDriver::new(recorder.clone(), &config(3, 255, ChannelOrder::Grb));
        for index in 0..3 {
            driver.set_pixel_color(index, ChannelOrder::Grb.pack(RED)).unwrap();
        }
        driver.show().unwrap();
        assert_eq!(recorder.last(), vec![RED; 3]);

        driver.cleanup();
        assert_eq!(recorder.count(), 2);
        assert_eq!(recorder.last(), vec![BLACK; 3]);
    }

    #[test]
    fn test_dropping_the_light_string_blanks_the_strip() {
        let recorder = Recorder::default();
        {
            let mut strip = LightString::new(SmartLedsDriver::new(
                recorder.clone(),
                &config(2, 255, ChannelOrder::Grb),
            ));
            strip.fill(GREEN);
            strip.refresh().unwrap();
            assert_eq!(recorder.last(), vec![GREEN; 2]);
        }
        assert_eq!(recorder.last(), vec![BLACK; 2]);
    }

    #[test]
    fn test_writer_failure_maps_to_write_error() {
        let recorder = Recorder {
            fail: true,
            ..Recorder::default()
        };
        let mut driver = SmartLedsDriver::new(recorder.clone(), &config(2, 255, ChannelOrder::Grb));
        assert_eq!(driver.show(), Err(DriverError::Write));
        driver.cleanup();

        let mut strip = LightString::new(driver);
        assert_eq!(
            strip.refresh(),
            Err(LightStringError::Driver(DriverError::Write))
        );
        assert_eq!(recorder.count(), 0);
    }
}
