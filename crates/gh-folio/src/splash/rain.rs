//! Rain animation
//!
//! `RainField` is plain data in normalized coordinates (0.0 - 1.0 on both
//! axes) so it can be stored in state and rendered at any terminal size.
//! `RainLoop` owns the randomness and the frame timer and publishes a
//! snapshot of the field on every frame.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainDrop {
    pub x: f32,
    pub y: f32,
    /// Distance travelled per frame
    pub speed: f32,
    /// Trail length
    pub length: f32,
    /// Brightness (0.0 - 1.0)
    pub intensity: f32,
}

impl RainDrop {
    fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            x: rng.gen::<f32>(),
            y: rng.gen::<f32>(),
            speed: rng.gen_range(0.01f32..0.06f32),
            length: rng.gen_range(0.02f32..0.08f32),
            intensity: rng.gen_range(0.2f32..1.0f32),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RainField {
    drops: Vec<RainDrop>,
    frame: u64,
}

impl RainField {
    pub fn new<R: Rng>(drop_count: usize, rng: &mut R) -> Self {
        Self {
            drops: (0..drop_count).map(|_| RainDrop::random(rng)).collect(),
            frame: 0,
        }
    }

    /// Move every drop down by its speed; drops leaving the bottom respawn
    /// above the top at a new column
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        for drop in &mut self.drops {
            drop.y += drop.speed;
            if drop.y - drop.length > 1.0 {
                drop.y = -drop.length;
                drop.x = rng.gen::<f32>();
            }
        }
        self.frame += 1;
    }

    pub fn drops(&self) -> &[RainDrop] {
        &self.drops
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

/// A running rain animation; stops when dropped
pub struct RainLoop {
    task: JoinHandle<()>,
}

impl RainLoop {
    pub fn start<S>(
        runtime: &Handle,
        drop_count: usize,
        frame_interval: Duration,
        on_frame: S,
    ) -> Self
    where
        S: Fn(RainField) + Send + 'static,
    {
        let frame_interval = frame_interval.max(MIN_FRAME_INTERVAL);
        log::debug!(
            "RainLoop: starting with {} drops every {:?}",
            drop_count,
            frame_interval
        );

        let task = runtime.spawn(async move {
            let mut rng = StdRng::from_entropy();
            let mut field = RainField::new(drop_count, &mut rng);
            let mut ticker = tokio::time::interval(frame_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                on_frame(field.clone());
                field.advance(&mut rng);
            }
        });

        Self { task }
    }

    pub fn stop(&self) {
        self.task.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for RainLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for RainLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RainLoop")
            .field("running", &self.is_running())
            .finish()
    }
}
