mod schedule;

use std::time::{Duration, Instant};

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
pub use schedule::ProgressSchedule;
use tokio::task::JoinHandle;

/// Drives the cosmetic progress bar shown while a diagnostics request is in
/// flight.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    start_time: Option<Instant>,
    tracker: Option<JoinHandle<()>>,
    interval: Duration,
    schedule: ProgressSchedule,
    hidden: bool,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(200);

    pub fn new() -> Self {
        Self {
            bar: None,
            start_time: None,
            tracker: None,
            interval: Self::DEFAULT_INTERVAL,
            schedule: ProgressSchedule::default(),
            hidden: false,
        }
    }

    /// A manager that keeps counting but never draws, for tests and
    /// non-interactive output.
    pub fn hidden() -> Self {
        let mut manager = Self::new();
        manager.hidden = true;
        manager
    }

    pub fn is_running(&self) -> bool {
        self.bar.is_some()
    }

    /// Current percentage, zero when no bar is active.
    pub fn position(&self) -> u8 {
        self.bar
            .as_ref()
            .map(|bar| bar.position().min(ProgressSchedule::COMPLETE as u64) as u8)
            .unwrap_or_default()
    }

    /// Start the bar at zero with a message
    pub fn start(&mut self, message: &str) -> Result<()> {
        self.abandon()?;

        let pb = if self.hidden {
            ProgressBar::with_draw_target(
                Some(ProgressSchedule::COMPLETE as u64),
                ProgressDrawTarget::hidden(),
            )
        } else {
            ProgressBar::new(ProgressSchedule::COMPLETE as u64)
        };

        pb.set_style(
            ProgressStyle::with_template("{msg} [{bar:32.cyan/blue}] {pos:>3}%")?
                .progress_chars("█▓░"),
        );
        pb.set_message(message.green().bold().to_string());
        pb.set_position(0);

        self.start_time = Some(Instant::now());
        self.bar = Some(pb.clone());

        let mut schedule = self.schedule;
        schedule.reset();
        let period = self.interval;

        self.tracker = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick of a tokio interval resolves immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                let value = schedule.tick();
                pb.set_position(value as u64);
                if schedule.is_stalled() {
                    break;
                }
            }
        }));

        Ok(())
    }

    /// Stop ticking and jump to 100. The bar stays on screen until
    /// [`ProgressManager::finish`].
    pub fn complete(&mut self) -> Result<()> {
        self.stop_tracker();
        if let Some(bar) = &self.bar {
            bar.set_position(ProgressSchedule::COMPLETE as u64);
            if let Some(start_time) = self.start_time {
                tracing::debug!(
                    elapsed_ms = start_time.elapsed().as_millis() as u64,
                    "Progress completed"
                );
            }
        }
        Ok(())
    }

    /// Complete the bar if it is still counting, then clear it.
    pub fn finish(&mut self) -> Result<()> {
        self.complete()?;
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
        self.start_time = None;
        Ok(())
    }

    /// Clear the bar without completing it.
    pub fn abandon(&mut self) -> Result<()> {
        self.stop_tracker();
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
        self.start_time = None;
        Ok(())
    }

    /// Print a line above the bar, or plainly when no bar is active.
    pub fn write_ln(&mut self, message: impl ToString) -> Result<()> {
        match &self.bar {
            Some(bar) if !bar.is_hidden() => bar.println(message.to_string()),
            _ => println!("{}", message.to_string()),
        }
        Ok(())
    }

    fn stop_tracker(&mut self) {
        if let Some(tracker) = self.tracker.take() {
            tracker.abort();
        }
    }
}

impl Drop for ProgressManager {
    fn drop(&mut self) {
        self.stop_tracker();
    }
}
