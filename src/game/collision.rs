//! Bird-vs-obstacle collision and pipe-pass scoring.

use super::arena::Arena;
use super::types::{Bird, Ground, Pipe, PipeKind};

/// Whether the bird overlaps any live pipe.
pub fn hits_any_pipe(bird: &Bird, pipes: &Arena<Pipe>) -> bool {
    let bird_rect = bird.rect();
    pipes.iter().any(|pipe| bird_rect.intersects(&pipe.rect()))
}

/// Whether the bird overlaps any ground tile.
pub fn hits_ground(bird: &Bird, grounds: &Arena<Ground>) -> bool {
    let bird_rect = bird.rect();
    grounds
        .iter()
        .any(|ground| bird_rect.intersects(&ground.rect()))
}

/// Mark every unscored up pipe whose left edge has reached the bird's left
/// edge, and return how many were newly scored.
///
/// Only up pipes carry the flag, so each pair scores at most once.
pub fn score_passed_pipes(bird: &Bird, pipes: &mut Arena<Pipe>) -> u32 {
    let mut passed = 0;
    for pipe in pipes.iter_mut() {
        if let PipeKind::Up { scored } = &mut pipe.kind {
            if !*scored && pipe.x <= bird.x {
                *scored = true;
                passed += 1;
            }
        }
    }
    passed
}
