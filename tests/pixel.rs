mod tests {
    use myrtio_light_animator::color::{
        BLACK, RED, ROYGBIV, blend_colors, dim_color, scale_color, step_toward,
    };
    use myrtio_light_animator::{ChannelOrder, ColorSequence, Pixel, PixelError, Rgb};

    #[test]
    fn test_pack_orders() {
        let color = Rgb::new(0x11, 0x22, 0x33);
        assert_eq!(ChannelOrder::Rgb.pack(color), 0x11_2233);
        assert_eq!(ChannelOrder::Grb.pack(color), 0x22_1133);
        assert_eq!(ChannelOrder::Grb.unpack(0x22_1133), color);
        assert_eq!(ChannelOrder::default(), ChannelOrder::Rgb);
    }

    #[test]
    fn test_from_packed_reorders_channels() {
        let pixel = Pixel::from_packed(0x01_0203, ChannelOrder::Grb).unwrap();
        assert_eq!(pixel.tuple(), (2, 1, 3));
        assert_eq!(pixel.array(), [2, 1, 3]);
        assert_eq!(pixel.to_packed(), 0x01_0203);

        let pixel = Pixel::from_packed(0x01_0203, ChannelOrder::Rgb).unwrap();
        assert_eq!(pixel.tuple(), (1, 2, 3));
    }

    #[test]
    fn test_from_packed_rejects_large_values() {
        assert_eq!(
            Pixel::from_packed(0x100_0000, ChannelOrder::Rgb),
            Err(PixelError::PackedOutOfRange(0x100_0000))
        );
        assert!(Pixel::from_packed(0xFF_FFFF, ChannelOrder::Rgb).is_ok());
    }

    #[test]
    fn test_from_channels() {
        let pixel = Pixel::from_channels(&[255, 0, 10], ChannelOrder::Rgb).unwrap();
        assert_eq!(pixel.rgb(), Rgb::new(255, 0, 10));

        assert_eq!(
            Pixel::from_channels(&[256, 0, 0], ChannelOrder::Rgb),
            Err(PixelError::ChannelOutOfRange(256))
        );
        assert_eq!(
            Pixel::from_channels(&[0, -1, 0], ChannelOrder::Rgb),
            Err(PixelError::ChannelOutOfRange(-1))
        );
        assert_eq!(
            Pixel::from_channels(&[1, 2], ChannelOrder::Rgb),
            Err(PixelError::ChannelCount(2))
        );
    }

    #[test]
    fn test_array_round_trip() {
        for packed in [0, 0x01_0203, 0x7F_80FF, 0xFF_FFFF] {
            for order in [ChannelOrder::Rgb, ChannelOrder::Grb] {
                let pixel = Pixel::from_packed(packed, order).unwrap();
                let channels = pixel.array().map(i64::from);
                let rebuilt = Pixel::from_channels(&channels, order).unwrap();
                assert_eq!(rebuilt.array(), pixel.array());
                assert_eq!(rebuilt.to_packed(), packed);
            }
        }
    }

    #[test]
    fn test_display_and_hex() {
        let pixel = Pixel::new(0xAB, 0x01, 0x02, ChannelOrder::Rgb);
        assert_eq!(pixel.hex_string(), "0xAB0102");
        assert_eq!(pixel.with_order(ChannelOrder::Grb).to_string(), "0x01AB02");
        assert_eq!(Pixel::black(ChannelOrder::Grb).hex_string(), "0x000000");
    }

    #[test]
    fn test_conversions() {
        let pixel = Pixel::new(1, 2, 3, ChannelOrder::Grb);
        let rgb: Rgb = pixel.into();
        let array: [u8; 3] = pixel.into();
        let tuple: (u8, u8, u8) = pixel.into();
        assert_eq!(rgb, Rgb::new(1, 2, 3));
        assert_eq!(array, [1, 2, 3]);
        assert_eq!(tuple, (1, 2, 3));
    }

    #[test]
    fn test_color_helpers() {
        assert_eq!(scale_color(Rgb::new(200, 100, 0), 0.5), Rgb::new(100, 50, 0));
        assert_eq!(scale_color(RED, 2.0), RED);
        assert_eq!(scale_color(RED, -1.0), BLACK);
        assert_eq!(step_toward(RED, BLACK, 100), Rgb::new(155, 0, 0));
        assert_eq!(step_toward(Rgb::new(5, 0, 0), BLACK, 100), BLACK);
        assert_eq!(blend_colors(RED, BLACK, 0), RED);
        assert_eq!(dim_color(Rgb::new(200, 100, 0), 128), Rgb::new(100, 50, 0));
        assert_eq!(dim_color(RED, 255), RED);
        assert_eq!(dim_color(RED, 0), BLACK);
    }

    #[test]
    fn test_color_sequence_cycles() {
        let mut sequence = ColorSequence::new(ROYGBIV[..3].to_vec());
        assert_eq!(sequence.next_color(), ROYGBIV[0]);
        assert_eq!(sequence.next_color(), ROYGBIV[1]);
        assert_eq!(sequence.next_color(), ROYGBIV[2]);
        assert_eq!(sequence.next_color(), ROYGBIV[0]);
        assert_eq!(sequence.current(), ROYGBIV[1]);

        let mut empty = ColorSequence::default();
        assert_eq!(empty.next_color(), BLACK);
        let mut rng = fastrand::Rng::with_seed(1);
        assert_eq!(empty.random(&mut rng), BLACK);
    }
}
