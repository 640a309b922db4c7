use crate::host::HostSurface;
use crate::state::{center_label, WidgetState};
use chrono::{NaiveTime, Timelike};

/// Source of the current local time of day.
pub trait ClockSource {
    fn now(&self) -> NaiveTime;
}

/// Local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> NaiveTime {
        chrono::Local::now().time()
    }
}

/// Zero padded 24-hour `HH:MM:SS`.
pub fn format_time(time: NaiveTime) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// Refreshes the time label once per tick.
pub struct ClockTicker<C: ClockSource> {
    source: C,
}

impl<C: ClockSource> ClockTicker<C> {
    pub fn new(source: C) -> Self {
        Self { source }
    }

    pub fn tick<H: HostSurface + ?Sized>(&self, state: &mut WidgetState, host: &H) {
        state.clock_label.text = format_time(self.source.now());
        center_label(host, &mut state.clock_label);
    }
}
