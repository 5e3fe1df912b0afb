//! Utility Module
//!
//! Host-loop helpers that sit outside the animation core:
//!
//! - [`FixedStepScheduler`]: turns wall-clock time into fixed animation ticks
//! - [`FpsCounter`]: measured presentation rate of the host loop
//! - [`time`]: timing constants and the scheduler implementation

pub mod fps_counter;
pub mod time;

pub use fps_counter::FpsCounter;
pub use time::{DEFAULT_TICK_INTERVAL, FixedStepScheduler};
