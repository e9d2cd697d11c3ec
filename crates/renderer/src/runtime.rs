use std::time::{Duration, Instant};

/// Paces redraw requests when an FPS cap is configured.
///
/// Without a cap every `AboutToWait` turn issues a redraw and vsync paces
/// presentation; with a cap the event loop sleeps until the next deadline
/// via `ControlFlow::WaitUntil`.
#[derive(Debug)]
pub struct FrameScheduler {
    interval: Option<Duration>,
    next_frame: Option<Instant>,
}

impl FrameScheduler {
    pub fn new(fps_cap: Option<f32>) -> Self {
        let interval = fps_cap
            .filter(|fps| *fps > 0.0)
            .map(|fps| Duration::from_secs_f32(1.0 / fps));
        Self {
            interval,
            next_frame: None,
        }
    }

    /// True when a redraw should be requested now.
    pub fn ready_for_frame(&self, now: Instant) -> bool {
        match (self.interval, self.next_frame) {
            (None, _) => true,
            (Some(_), None) => true,
            (Some(_), Some(deadline)) => now >= deadline,
        }
    }

    /// Records a presented frame and arms the next deadline.
    pub fn mark_rendered(&mut self, now: Instant) {
        if let Some(interval) = self.interval {
            self.next_frame = Some(now + interval);
        }
    }

    /// Deadline for `ControlFlow::WaitUntil`, if a cap is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.interval.and(self.next_frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncapped_scheduler_is_always_ready() {
        let mut scheduler = FrameScheduler::new(None);
        let now = Instant::now();
        assert!(scheduler.ready_for_frame(now));
        scheduler.mark_rendered(now);
        assert!(scheduler.ready_for_frame(now));
        assert!(scheduler.next_deadline().is_none());
    }

    #[test]
    fn capped_scheduler_waits_out_the_interval() {
        let mut scheduler = FrameScheduler::new(Some(50.0));
        let now = Instant::now();
        assert!(scheduler.ready_for_frame(now));
        scheduler.mark_rendered(now);

        assert!(!scheduler.ready_for_frame(now + Duration::from_millis(10)));
        assert!(scheduler.ready_for_frame(now + Duration::from_millis(21)));
        let deadline = scheduler.next_deadline().expect("cap armed");
        assert!(deadline > now + Duration::from_millis(10));
        assert!(deadline <= now + Duration::from_millis(21));
    }

    #[test]
    fn non_positive_caps_are_ignored() {
        let mut scheduler = FrameScheduler::new(Some(0.0));
        let now = Instant::now();
        scheduler.mark_rendered(now);
        assert!(scheduler.ready_for_frame(now));
        assert!(scheduler.next_deadline().is_none());
    }
}
