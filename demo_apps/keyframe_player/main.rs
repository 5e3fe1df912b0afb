//! Headless keyframe player.
//!
//! Stands in for the windowed host: ticks the animator every 16 ms and logs
//! the pose a renderer would draw.
//!
//! ```text
//! keyframe_player [CONFIG.json] [FRAMES]
//! ```

use anyhow::Context;
use keyframe::{
    AnimationConfig, AnimationFrame, Animator, FixedStepScheduler, FpsCounter, ResolvedOrientation,
};

const DEFAULT_FRAMES: u64 = 300;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => AnimationConfig::from_json_file(&path)
            .with_context(|| format!("failed to load animation config '{path}'"))?,
        None => AnimationConfig::default(),
    };

    let frames = args
        .next()
        .map(|s| s.parse::<u64>())
        .transpose()
        .context("FRAMES must be a non-negative integer")?
        .unwrap_or(DEFAULT_FRAMES);

    let mut animator = Animator::from_config(&config)?;
    let mut scheduler = FixedStepScheduler::default();
    let mut fps = FpsCounter::new();

    log::info!(
        "Playing {} keyframes for {frames} ticks ({:?} spline, {:?} orientation)",
        config.keyframes.len(),
        config.spline,
        config.orientation,
    );

    while scheduler.tick_count < frames {
        std::thread::sleep(scheduler.until_next_tick());

        let steps = scheduler.update();
        if steps == 0 {
            continue;
        }
        if steps > 1 {
            log::debug!("Host fell behind, applying {steps} ticks at once");
        }

        let frame = animator.tick(steps);
        present(&frame);

        if let Some(rate) = fps.update() {
            log::info!("Presenting at {rate:.1} fps");
        }
    }

    log::info!("Finished after {} ticks", animator.state().ticks);
    Ok(())
}

fn present(frame: &AnimationFrame) {
    let [x, y, z] = frame.position;
    let cursor = frame.cursor;

    if !frame.resolved.is_finite() {
        log::warn!(
            "segment {} t={:.2}: orientation {:?} does not resolve to a finite rotation",
            cursor.frame_index,
            cursor.t,
            frame.orientation,
        );
    }

    match frame.resolved {
        ResolvedOrientation::FixedAngles([rx, ry, rz]) => log::info!(
            "segment {} t={:.2} pos=({x:.3}, {y:.3}, {z:.3}) rot X={:.1} Y={:.1} Z={:.1}",
            cursor.frame_index,
            cursor.t,
            rx.angle_degrees,
            ry.angle_degrees,
            rz.angle_degrees,
        ),
        ResolvedOrientation::AxisAngle(r) => log::info!(
            "segment {} t={:.2} pos=({x:.3}, {y:.3}, {z:.3}) rot {:.1} deg about ({:.3}, {:.3}, {:.3})",
            cursor.frame_index,
            cursor.t,
            r.angle_degrees,
            r.axis.x,
            r.axis.y,
            r.axis.z,
        ),
    }
}
