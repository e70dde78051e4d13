//! Fixed timestep simulation tick
//!
//! Drives each arrow's move state machine and the blocker flash sequences.
//! Every arrow animates independently; board removal happens in the tick
//! that finishes an exit, never earlier.

use super::arrow::{ArrowColor, Motion};
use super::resolve::{Resolution, bounce_stop_distance, resolve};
use super::state::{FlashTask, GameEvent, GameState, MoveOutcome};
use crate::ease_fast_out_slow_in;
use crate::settings::Settings;

/// Handle a tap on arrow `id`
pub fn request_move(state: &mut GameState, id: u32, settings: &Settings) -> MoveOutcome {
    // Collision mode always follows the settings in play
    state.board.shape = settings.footprint;

    let Some(arrow) = state.board.get(id) else {
        log::debug!("Move request for unknown arrow {}", id);
        return MoveOutcome::NotFound;
    };

    let resolution = resolve(arrow, &state.board);
    log::debug!("Arrow {} resolved to {:?}", id, resolution);

    match resolution {
        Resolution::NoOp => MoveOutcome::Ignored,
        Resolution::Clear { distance } => {
            let target = distance as f32 * settings.cell_size;
            if let Some(arrow) = state.board.get_mut(id) {
                arrow.color = ArrowColor::Exiting;
                arrow.motion = Motion::Exiting {
                    elapsed: 0.0,
                    target,
                };
            }
            state.push_event(GameEvent::ExitStarted { id, distance });
            MoveOutcome::Exiting { distance }
        }
        Resolution::Blocked { blocker, steps } => {
            let target =
                bounce_stop_distance(steps, settings.cell_size, settings.visual_length_units());
            if let Some(arrow) = state.board.get_mut(id) {
                arrow.color = ArrowColor::Blocked;
                arrow.motion = Motion::BounceOut {
                    elapsed: 0.0,
                    target,
                };
            }
            state.push_event(GameEvent::BounceStarted { id, blocker, steps });

            if settings.flash_repeats > 0 {
                if let Some(hit) = state.board.get_mut(blocker) {
                    hit.color = ArrowColor::Hit;
                }
                state
                    .flashes
                    .push(FlashTask::new(blocker, settings.flash_repeats));
                state.push_event(GameEvent::FlashStarted { target: blocker });
            }
            MoveOutcome::Bouncing { blocker, steps }
        }
    }
}

/// Progress of `elapsed` through `duration`, in [0, 1]
fn progress(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        1.0
    } else {
        (elapsed / duration).min(1.0)
    }
}

/// Advance all animations by `dt` seconds
pub fn tick(state: &mut GameState, settings: &Settings, dt: f32) {
    let mut exited = Vec::new();
    let mut returned = Vec::new();

    for arrow in state.board.arrows_mut() {
        match arrow.motion {
            Motion::Idle => {}
            Motion::Exiting { elapsed, target } => {
                let elapsed = elapsed + dt;
                let t = progress(elapsed, settings.exit_duration);
                arrow.offset = target * ease_fast_out_slow_in(t);
                if t >= 1.0 {
                    arrow.offset = target;
                    exited.push(arrow.id);
                }
                arrow.motion = Motion::Exiting { elapsed, target };
            }
            Motion::BounceOut { elapsed, target } => {
                let elapsed = elapsed + dt;
                let t = progress(elapsed, settings.bounce_duration);
                arrow.offset = target * ease_fast_out_slow_in(t);
                arrow.motion = if t >= 1.0 {
                    arrow.offset = target;
                    Motion::BounceBack {
                        elapsed: 0.0,
                        from: target,
                    }
                } else {
                    Motion::BounceOut { elapsed, target }
                };
            }
            Motion::BounceBack { elapsed, from } => {
                let elapsed = elapsed + dt;
                let t = progress(elapsed, settings.bounce_duration);
                arrow.offset = from * (1.0 - ease_fast_out_slow_in(t));
                arrow.motion = if t >= 1.0 {
                    arrow.offset = 0.0;
                    returned.push(arrow.id);
                    Motion::Idle
                } else {
                    Motion::BounceBack { elapsed, from }
                };
            }
        }
    }

    for id in returned {
        state.push_event(GameEvent::BounceReturned { id });
    }
    for id in exited {
        state.remove_arrow(id);
    }

    tick_flashes(state, settings, dt);
}

fn tick_flashes(state: &mut GameState, settings: &Settings, dt: f32) {
    let mut finished = Vec::new();
    let mut flashes = std::mem::take(&mut state.flashes);

    for flash in &mut flashes {
        flash.timer += dt;
        while !flash.is_done() && flash.timer >= settings.flash_interval {
            flash.timer -= settings.flash_interval;
            flash.phase += 1;
            if flash.is_done() {
                break;
            }
            // The target may be mid-move by now; the flash still paints it
            if let Some(target) = state.board.get_mut(flash.target) {
                target.color = if flash.is_hit_phase() {
                    ArrowColor::Hit
                } else {
                    ArrowColor::Default
                };
            }
        }

        if flash.is_done() {
            if state.board.contains(flash.target) {
                finished.push(flash.target);
            }
        } else if !state.board.contains(flash.target) {
            // Target left the board; drop without a trace
            flash.phase = flash.total;
        }
    }

    flashes.retain(|f| !f.is_done());
    // New flashes may have been queued while we held the list
    flashes.append(&mut state.flashes);
    state.flashes = flashes;

    for target in finished {
        state.push_event(GameEvent::FlashFinished { target });
    }
}
