//! Run-until-stopped driver and the renderer contract.
//!
//! The [`Sim`] never reads input devices.  A [`Driver`] owns the run loop:
//!
//! ```text
//! loop:
//!   if stop requested      → break
//!   if tick limit reached  → break
//!   sim.tick()                     (the whole tick, never interrupted)
//!   every N ticks: renderer.render(frame scaled × 255)
//!     → RenderControl::Stop requests a stop
//! ```
//!
//! Stop requests (from the renderer, another thread, or a signal handler)
//! are honoured at the next tick boundary.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use ph_core::Tick;
use tracing::info;

use crate::error::RenderError;
use crate::{Sim, SimError, SimResult};

/// A rendered frame: one byte per cell, field value × 255, row-major.
pub struct Frame<'a> {
    /// The tick whose diffused field this frame shows.
    pub tick:   Tick,
    pub width:  usize,
    pub height: usize,
    pub pixels: &'a [u8],
}

/// Returned by a renderer after each frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RenderControl {
    Continue,
    /// Finish the current tick and stop.
    Stop,
}

/// Display sink for frames.
pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>) -> Result<RenderControl, RenderError>;
}

/// Cloneable cooperative stop flag.
///
/// Clones share the same flag, so one can be moved into a signal handler or
/// another thread while the driver polls the original.
#[derive(Clone, Debug, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stop_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Why [`Driver::run`] returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The [`StopSignal`] was raised.
    Signal,
    /// The renderer returned [`RenderControl::Stop`].
    Renderer,
    /// The configured tick limit was reached.
    TickLimit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DriverReport {
    /// Ticks completed by this call.
    pub ticks:  u64,
    pub reason: StopReason,
}

/// Drives a [`Sim`] and feeds a [`Renderer`] until something asks it to stop.
pub struct Driver<R: Renderer> {
    renderer:     R,
    stop:         StopSignal,
    max_ticks:    Option<u64>,
    render_every: u64,
    pixels:       Vec<u8>,
}

impl<R: Renderer> Driver<R> {
    /// Driver that renders every tick and runs until stopped.
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            stop:         StopSignal::new(),
            max_ticks:    None,
            render_every: 1,
            pixels:       Vec::new(),
        }
    }

    /// Stop after `n` ticks even if nothing else asks to.
    pub fn max_ticks(mut self, n: u64) -> Self {
        self.max_ticks = Some(n);
        self
    }

    /// Render every `n` ticks (0 disables rendering).
    pub fn render_every(mut self, n: u64) -> Self {
        self.render_every = n;
        self
    }

    /// Use an existing stop signal instead of a fresh one.
    pub fn with_stop_signal(mut self, stop: StopSignal) -> Self {
        self.stop = stop;
        self
    }

    /// A handle that stops this driver when raised.
    pub fn stop_signal(&self) -> StopSignal {
        self.stop.clone()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Tick `sim` until the stop signal, the renderer, or the tick limit
    /// ends the run.  A renderer error aborts the run after the tick it was
    /// rendering.
    pub fn run(&mut self, sim: &mut Sim) -> SimResult<DriverReport> {
        let mut ticks = 0u64;
        let reason = loop {
            if self.stop.is_stop_requested() {
                break StopReason::Signal;
            }
            if self.max_ticks.is_some_and(|max| ticks >= max) {
                break StopReason::TickLimit;
            }

            let summary = sim.tick();
            ticks += 1;

            if self.render_every > 0 && ticks % self.render_every == 0 {
                let view = sim.snapshot();
                view.write_bytes(&mut self.pixels);
                let frame = Frame {
                    tick:   summary.tick,
                    width:  view.width(),
                    height: view.height(),
                    pixels: &self.pixels,
                };
                let control = self.renderer.render(&frame).map_err(SimError::Render)?;
                if control == RenderControl::Stop {
                    break StopReason::Renderer;
                }
            }
        };

        info!(ticks, ?reason, "driver stopped");
        Ok(DriverReport { ticks, reason })
    }
}
