//! # Example: throttling
//!
//! Shows the per-kind throttle in real time: beats fired every 200ms against a
//! 1s window come out once per second, while `degraded` keeps its own timer.
//!
//! ## Flow
//! ```text
//! loop (15 iterations, 200ms apart):
//!     ├─► beat(1)       ─► emitted once per 1s window
//!     └─► degraded(1)   ─► emitted once per 1s window (independent)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example throttling --features logging
//! ```

use std::sync::Arc;
use std::time::Duration;

use pulsekit::{Emitter, EmitterConfig, LogPublisher, PublishError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), PublishError> {
    let mut heart = Emitter::new("demo.throttled", Arc::new(LogPublisher), EmitterConfig::default());

    heart.start(0).await?;

    for i in 0..15 {
        heart.beat(1).await?;
        if i % 3 == 0 {
            heart.degraded(1).await?;
        }
        tokio::time::sleep(Duration::from_millis(200)).await;
    }

    heart.stop().await?;
    Ok(())
}
