//! Timing Primitives
//!
//! Sleep, deadline and stopwatch helpers split by target: browser timers
//! on wasm32, tokio time elsewhere so the retry loop runs under plain
//! `cargo test` with a controllable clock.

use std::future::Future;
use std::time::Duration;

/// The deadline elapsed before the wrapped future settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed;

#[cfg(target_arch = "wasm32")]
mod imp {
    use super::*;
    use futures_util::future::{select, Either};
    use futures_util::pin_mut;
    use gloo_timers::future::TimeoutFuture;

    pub async fn sleep(duration: Duration) {
        TimeoutFuture::new(duration.as_millis() as u32).await;
    }

    pub async fn timeout<F: Future>(duration: Duration, future: F) -> Result<F::Output, Elapsed> {
        let deadline = TimeoutFuture::new(duration.as_millis() as u32);
        pin_mut!(future);
        pin_mut!(deadline);
        match select(future, deadline).await {
            Either::Left((value, _)) => Ok(value),
            Either::Right(_) => Err(Elapsed),
        }
    }

    /// Wall-clock stopwatch for load metrics.
    pub struct LoadTimer {
        start: f64,
    }

    impl LoadTimer {
        pub fn start() -> Self {
            Self {
                start: js_sys::Date::now(),
            }
        }

        pub fn elapsed_ms(&self) -> f64 {
            js_sys::Date::now() - self.start
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use super::*;
    use std::time::Instant;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    pub async fn timeout<F: Future>(duration: Duration, future: F) -> Result<F::Output, Elapsed> {
        tokio::time::timeout(duration, future)
            .await
            .map_err(|_| Elapsed)
    }

    /// Wall-clock stopwatch for load metrics.
    pub struct LoadTimer {
        start: Instant,
    }

    impl LoadTimer {
        pub fn start() -> Self {
            Self {
                start: Instant::now(),
            }
        }

        pub fn elapsed_ms(&self) -> f64 {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }
}

pub use imp::{sleep, timeout, LoadTimer};
