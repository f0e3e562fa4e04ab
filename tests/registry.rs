mod tests {
    use myrtio_light_animator::{ColorMode, FunctionMode, FunctionSlot};

    #[test]
    fn test_color_mode_ids() {
        for (id, mode) in ColorMode::ALL.into_iter().enumerate() {
            assert_eq!(mode as usize, id);
            assert_eq!(ColorMode::from_raw(u8::try_from(id).unwrap()), Some(mode));
            assert_eq!(ColorMode::parse_from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(ColorMode::from_raw(9), None);
        assert_eq!(ColorMode::parse_from_str("plaid"), None);
    }

    #[test]
    fn test_function_mode_ids() {
        for (id, mode) in FunctionMode::ALL.into_iter().enumerate() {
            assert_eq!(mode as usize, id);
            assert_eq!(FunctionMode::from_raw(u8::try_from(id).unwrap()), Some(mode));
            assert_eq!(FunctionMode::parse_from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(FunctionMode::from_raw(16), None);
        assert_eq!(
            FunctionMode::parse_from_str("bouncy_meteors"),
            Some(FunctionMode::BouncyMeteors)
        );
    }

    #[test]
    fn test_slot_names_match_modes() {
        assert_eq!(FunctionSlot::None.name(), FunctionMode::None.as_str());
        assert_eq!(FunctionSlot::Off.name(), FunctionMode::Off.as_str());
    }
}
