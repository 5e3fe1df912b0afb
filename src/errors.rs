//! Error Types
//!
//! This module defines the error types used throughout the animation core.
//!
//! # Overview
//!
//! The main error type [`AnimationError`] covers the construction-time
//! contract failures of the engine:
//! - Keyframe sequences too short to form a control window
//! - Invalid clock step sizes and seek targets
//! - Configuration I/O and JSON decoding errors
//!
//! Numeric degenerate cases (a quaternion `w` outside `[-1, 1]`, a near-zero
//! axis length) are *values*, not errors: they flow through as NaN or as an
//! unnormalized axis and never surface here.
//!
//! # Usage
//!
//! ```rust,ignore
//! use keyframe::errors::{AnimationError, Result};
//!
//! fn build() -> Result<()> {
//!     let config = keyframe::AnimationConfig::from_json_str("{}")?;
//!     let _animator = keyframe::Animator::from_config(&config)?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the keyframe engine.
#[derive(Error, Debug)]
pub enum AnimationError {
    // ========================================================================
    // Contract Errors
    // ========================================================================
    /// A control window needs four keyframes; fewer were supplied.
    #[error("Keyframe sequence needs at least {required} keyframes, got {count}")]
    NotEnoughKeyframes {
        /// Number of keyframes supplied
        count: usize,
        /// Minimum number of keyframes
        required: usize,
    },

    /// Clock step is not finite or lies outside `(0, 1]`.
    #[error("Invalid playback step: {0} (expected a finite value in (0, 1])")]
    InvalidStep(f32),

    /// Seek target has a segment parameter outside `[0, 1)`.
    #[error("Invalid cursor: t = {t} (expected a finite value in [0, 1))")]
    InvalidCursor {
        /// The rejected segment parameter
        t: f32,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, AnimationError>`.
pub type Result<T> = std::result::Result<T, AnimationError>;
