//! Bird kinematics: the JUMPING ↔ FALLING integration rules.
//!
//! Every displacement is a rate times the frame's elapsed time, read from
//! `settings.dynamic.time_passed_seconds`. Rotation follows the jump-height
//! accumulator so the sprite tilts smoothly instead of snapping.

use super::types::Bird;
use crate::settings::Settings;

/// Advance the bird by one frame.
pub fn update(bird: &mut Bird, settings: &mut Settings) {
    if bird.is_jumping {
        rise(bird, settings);
    } else {
        fall(bird, settings);
    }
}

/// Start (or restart) a jump.
pub fn jump(bird: &mut Bird, settings: &mut Settings) {
    let dynamic = &mut settings.dynamic;
    bird.is_jumping = true;
    dynamic.bird_velocity = settings.bird_initial_velocity;
    dynamic.bird_jumping_velocity = settings.bird_initial_jumping_velocity;
    bird.previous_rotation_angle = -bird.rotation_angle;

    // A re-jump mid-arc keeps the accumulator; anything outside the arc
    // would make the rotation base jump.
    if dynamic.bird_jumping_height < 0.0
        || dynamic.bird_jumping_height > settings.max_jump_height
    {
        dynamic.bird_jumping_height = 0.0;
    }
}

fn rise(bird: &mut Bird, settings: &mut Settings) {
    let dt = settings.dynamic.time_passed_seconds;
    let distance = dt * settings.dynamic.bird_jumping_velocity;
    bird.y -= distance;
    settings.dynamic.bird_jumping_height += distance;

    if bird.rotation_angle < settings.bird_rise_angle {
        let progress = settings.dynamic.bird_jumping_height / settings.max_jump_height;
        let angle = progress * (settings.bird_rise_angle + bird.previous_rotation_angle)
            - bird.previous_rotation_angle;
        bird.rotation_angle = angle.min(settings.bird_rise_angle);
    }

    settings.dynamic.bird_jumping_velocity -= dt * settings.bird_gravity;
    if settings.dynamic.bird_jumping_velocity <= 0.0 {
        end_jump(bird, settings);
    }
}

/// Apply one frame of falling.
pub fn fall(bird: &mut Bird, settings: &mut Settings) {
    let dt = settings.dynamic.time_passed_seconds;
    let dynamic = &mut settings.dynamic;
    let distance = dt * dynamic.bird_velocity;

    if dynamic.bird_jumping_height >= settings.bird_max_falling_height {
        dynamic.bird_jumping_height =
            (dynamic.bird_jumping_height - distance).max(settings.bird_max_falling_height);
    }

    if bird.rotation_angle > settings.bird_fall_angle {
        let progress = dynamic.bird_jumping_height / settings.bird_max_falling_height;
        let angle = progress * (settings.bird_fall_angle - bird.previous_rotation_angle)
            + bird.previous_rotation_angle;
        bird.rotation_angle = angle.max(settings.bird_fall_angle);
    }

    bird.y += distance;
    if dynamic.bird_velocity < settings.bird_max_velocity {
        dynamic.bird_velocity =
            (dynamic.bird_velocity + dt * settings.bird_gravity).min(settings.bird_max_velocity);
    }
}

/// Falling used while the round is over: the bird drops until its bottom
/// edge reaches the ground line, then stays put.
pub fn lose_fall(bird: &mut Bird, settings: &mut Settings) {
    if bird.bottom() >= settings.ground_height {
        return;
    }
    fall(bird, settings);
}

/// Cancel any jump in progress so the bird drops from rest (pipe crash).
pub fn stall(bird: &mut Bird, settings: &mut Settings) {
    end_jump(bird, settings);
}

/// Put the bird back at its start position, level and at rest.
pub fn reset_to_start(bird: &mut Bird, settings: &Settings) {
    let (x, y) = settings.bird_start();
    bird.x = x;
    bird.y = y;
    bird.is_jumping = false;
    bird.rotation_angle = 0.0;
    bird.previous_rotation_angle = 0.0;
}

fn end_jump(bird: &mut Bird, settings: &mut Settings) {
    bird.is_jumping = false;
    settings.dynamic.bird_velocity = settings.bird_initial_velocity;
    settings.dynamic.bird_jumping_velocity = settings.bird_initial_jumping_velocity;
    settings.dynamic.bird_jumping_height = 0.0;
    bird.previous_rotation_angle = bird.rotation_angle.abs();
}
