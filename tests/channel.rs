mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_light_animator::channel::CONTROL_CHANNEL_SIZE;
    use myrtio_light_animator::color::RED;
    use myrtio_light_animator::{ControlChannel, ControlIntent, FrameScheduler};

    #[test]
    fn test_channel_is_fifo() {
        let channel = ControlChannel::new();
        let sender = channel.sender();
        let receiver = channel.receiver();
        assert_eq!(receiver.try_receive(), None);

        sender.try_send(ControlIntent::SetColor(RED)).unwrap();
        sender.stop().unwrap();
        assert_eq!(receiver.try_receive(), Some(ControlIntent::SetColor(RED)));
        assert_eq!(receiver.try_receive(), Some(ControlIntent::Stop));
        assert_eq!(receiver.try_receive(), None);
    }

    #[test]
    fn test_channel_rejects_when_full() {
        let channel = ControlChannel::new();
        for _ in 0..CONTROL_CHANNEL_SIZE {
            channel.try_send(ControlIntent::Stop).unwrap();
        }
        assert_eq!(
            channel.try_send(ControlIntent::SetColor(RED)),
            Err(ControlIntent::SetColor(RED))
        );
    }

    #[test]
    fn test_scheduler_keeps_fixed_rate() {
        let mut scheduler = FrameScheduler::new(Duration::from_millis(20));
        let first = scheduler.tick(Instant::from_millis(0));
        assert_eq!(first.next_deadline, Instant::from_millis(20));
        assert_eq!(first.sleep_duration, Duration::from_millis(20));

        let second = scheduler.tick(Instant::from_millis(25));
        assert_eq!(second.next_deadline, Instant::from_millis(40));
        assert_eq!(second.sleep_duration, Duration::from_millis(15));
    }

    #[test]
    fn test_scheduler_resyncs_after_drift() {
        let mut scheduler = FrameScheduler::new(Duration::from_millis(20));
        scheduler.tick(Instant::from_millis(0));

        let late = scheduler.tick(Instant::from_millis(55));
        assert_eq!(late.next_deadline, Instant::from_millis(40));
        assert_eq!(late.sleep_duration, Duration::from_ticks(0));

        let resync = scheduler.tick(Instant::from_millis(200));
        assert_eq!(resync.next_deadline, Instant::from_millis(220));

        scheduler.reset();
        let fresh = scheduler.tick(Instant::from_millis(300));
        assert_eq!(fresh.next_deadline, Instant::from_millis(320));
    }
}
