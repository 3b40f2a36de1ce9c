//! Cosmetic timers running on the tokio runtime.
//!
//! Timers only ever send [`AppEvent`]s back to the render loop; they never
//! touch screen state. Every task is aborted when its [`TimerSet`] drops,
//! so nothing outlives the screen.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::ui::state::AppEvent;

#[derive(Debug, Default)]
pub struct TimerSet {
    handles: Vec<JoinHandle<()>>,
}

impl TimerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire a shooting star at a random moment every `min_secs..=max_secs`
    pub fn spawn_shooting_stars(
        &mut self,
        runtime: &Handle,
        events: UnboundedSender<AppEvent>,
        min_secs: f32,
        max_secs: f32,
    ) {
        let (low, high) = ordered_delays(min_secs, max_secs);
        if high <= 0.0 {
            tracing::warn!(
                min_secs,
                max_secs,
                "shooting star delays unusable, timer not started"
            );
            return;
        }
        let handle = runtime.spawn(async move {
            let mut rng = StdRng::from_entropy();
            loop {
                let delay = rng.gen_range(low..=high);
                tokio::time::sleep(Duration::from_secs_f32(delay)).await;

                let x = rng.gen::<f32>();
                let y = rng.gen_range(0.0..1.0 / 3.0);
                if events.send(AppEvent::ShootingStar { x, y }).is_err() {
                    tracing::debug!("event channel closed, stopping shooting star timer");
                    break;
                }
            }
        });
        self.handles.push(handle);
    }

    pub fn cancel_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Non-negative, finite, low before high
fn ordered_delays(min_secs: f32, max_secs: f32) -> (f32, f32) {
    let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
    let (a, b) = (sanitize(min_secs), sanitize(max_secs));
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
