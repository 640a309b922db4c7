use crate::host::HostSurface;
use crate::state::{center_label, WidgetState};
use std::time::Instant;
use sysinfo::{NetworkData, Networks};

/// Cumulative byte counters summed over the interfaces that are up.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CounterTotals {
    pub received: u64,
    pub sent: u64,
}

/// Source of cumulative network counters.
pub trait CounterSource {
    /// Current totals, or `None` when nothing could be read.
    fn totals(&mut self) -> Option<CounterTotals>;
}

/// Reads counters from the operating system through `sysinfo`.
pub struct SysinfoCounters {
    nets: Networks,
}

impl SysinfoCounters {
    pub fn new() -> Self {
        Self {
            nets: Networks::new_with_refreshed_list(),
        }
    }
}

impl Default for SysinfoCounters {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_os = "linux")]
fn is_up(name: &str, _data: &NetworkData) -> bool {
    std::fs::read_to_string(format!("/sys/class/net/{name}/operstate"))
        .map(|s| s.trim() == "up")
        .unwrap_or(false)
}

#[cfg(not(target_os = "linux"))]
fn is_up(_name: &str, data: &NetworkData) -> bool {
    !data.ip_networks().is_empty()
}

impl CounterSource for SysinfoCounters {
    fn totals(&mut self) -> Option<CounterTotals> {
        self.nets.refresh(true);
        let mut found = false;
        let mut totals = CounterTotals::default();
        for (name, data) in self.nets.list() {
            if !is_up(name, data) {
                continue;
            }
            found = true;
            totals.received = totals.received.saturating_add(data.total_received());
            totals.sent = totals.sent.saturating_add(data.total_transmitted());
        }
        if !found {
            tracing::trace!("no network interface is up");
            return None;
        }
        Some(totals)
    }
}

/// Throughput in bytes per second for one direction over `elapsed_secs`.
///
/// A counter that went backwards (interface reset) yields zero.
pub fn rate(previous: u64, current: u64, elapsed_secs: f64) -> f64 {
    current.saturating_sub(previous) as f64 / elapsed_secs.max(0.001)
}

/// Format a byte rate as `KB/s`, switching to `MB/s` from 1024 KB/s up.
pub fn format_rate(bytes_per_sec: f64) -> String {
    let kb = bytes_per_sec / 1024.0;
    // compare on the rounded value so "1024.0 KB/s" can never be shown
    if (kb * 10.0).round() >= 10240.0 {
        format!("{:.1} MB/s", kb / 1024.0)
    } else {
        format!("{:.1} KB/s", kb)
    }
}

pub fn format_label(down: f64, up: f64) -> String {
    format!("↓ {} ↑ {}", format_rate(down), format_rate(up))
}

/// Samples the counters once per tick and keeps the network label current.
///
/// Runs whether or not the network panel is shown so revealing it shows
/// fresh numbers.
pub struct NetworkSampler<S: CounterSource> {
    source: S,
    last: Option<(CounterTotals, Instant)>,
}

impl<S: CounterSource> NetworkSampler<S> {
    pub fn new(source: S) -> Self {
        Self { source, last: None }
    }

    /// Take one sample at `now` and return the `(down, up)` rates in bytes
    /// per second, measured over the real time since the previous sample.
    ///
    /// A failed read shows zero and keeps the previous sample, so the next
    /// good read is compared against real totals.
    pub fn sample_at(&mut self, now: Instant) -> (f64, f64) {
        let Some(current) = self.source.totals() else {
            return (0.0, 0.0);
        };
        let rates = match self.last {
            Some((last, at)) => {
                let dt = now.saturating_duration_since(at).as_secs_f64();
                (
                    rate(last.received, current.received, dt),
                    rate(last.sent, current.sent, dt),
                )
            }
            None => (0.0, 0.0),
        };
        self.last = Some((current, now));
        rates
    }

    pub fn sample(&mut self) -> (f64, f64) {
        self.sample_at(Instant::now())
    }

    pub fn tick_at<H: HostSurface + ?Sized>(
        &mut self,
        state: &mut WidgetState,
        host: &H,
        now: Instant,
    ) {
        let (down, up) = self.sample_at(now);
        state.network_label.text = format_label(down, up);
        center_label(host, &mut state.network_label);
    }

    pub fn tick<H: HostSurface + ?Sized>(&mut self, state: &mut WidgetState, host: &H) {
        self.tick_at(state, host, Instant::now());
    }

    pub fn last(&self) -> Option<CounterTotals> {
        self.last.map(|(totals, _)| totals)
    }
}
