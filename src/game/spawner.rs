//! Procedural pipe pairs.
//!
//! A pair is one down pipe hanging to a random anchor `h` and one up pipe
//! rising from `h + pipe_space`. A new pair is spawned when the latest pair
//! has scrolled in to `pipe_spawn_x`.

use super::arena::Arena;
use super::types::Pipe;
use crate::settings::Settings;
use rand::Rng;

/// Draw a gap anchor uniformly from `[pipe_min_top, pipe_max_top]`.
pub fn gap_anchor<R: Rng>(settings: &Settings, rng: &mut R) -> f64 {
    rng.gen_range(settings.pipe_min_top..=settings.pipe_max_top)
}

/// Spawn a pair just past the right edge of the screen. Returns the anchor.
pub fn spawn_pair<R: Rng>(pipes: &mut Arena<Pipe>, settings: &Settings, rng: &mut R) -> f64 {
    let anchor = gap_anchor(settings, rng);
    let x = settings.screen_width;
    pipes.push(Pipe::down(x, anchor, settings));
    pipes.push(Pipe::up(x, anchor + settings.pipe_space, settings));
    anchor
}

/// Scroll every pipe left and drop the ones that are fully off-screen.
pub fn scroll_pipes(pipes: &mut Arena<Pipe>, settings: &Settings) {
    let distance = settings.dynamic.time_passed_seconds * settings.pipe_speed;
    pipes.update_and_mark(|pipe| {
        pipe.x -= distance;
        pipe.x <= -pipe.width
    });
    pipes.compact();
}

/// Spawn the next pair once the latest one has scrolled in far enough.
/// Returns true when a pair was spawned.
pub fn spawn_if_due<R: Rng>(pipes: &mut Arena<Pipe>, settings: &Settings, rng: &mut R) -> bool {
    // An empty arena has nothing left to measure against
    let due = pipes.is_empty()
        || pipes
            .last()
            .is_some_and(|last| last.latest && last.x <= settings.pipe_spawn_x);
    if !due {
        return false;
    }

    for pipe in pipes.iter_mut() {
        pipe.latest = false;
    }
    spawn_pair(pipes, settings, rng);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::PipeKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_anchor_stays_in_range() {
        let settings = Settings::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let h = gap_anchor(&settings, &mut rng);
            assert!(h >= settings.pipe_min_top && h <= settings.pipe_max_top);
            assert!(h > 0.0);
            assert!(h + settings.pipe_space <= settings.ground_height);
        }
    }

    #[test]
    fn test_spawn_pair_shares_anchor() {
        let settings = Settings::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut pipes = Arena::new();

        let anchor = spawn_pair(&mut pipes, &settings, &mut rng);

        assert_eq!(pipes.len(), 2);
        let down = pipes.get(0).unwrap();
        let up = pipes.get(1).unwrap();
        assert_eq!(down.kind, PipeKind::Down);
        assert_eq!(up.kind, PipeKind::Up { scored: false });
        assert_eq!(down.rect().bottom(), anchor);
        assert_eq!(up.rect().top(), anchor + settings.pipe_space);
        assert_eq!(down.x, settings.screen_width);
        assert!(down.latest && up.latest);
    }

    #[test]
    fn test_pipes_cover_screen_top_and_ground() {
        let settings = Settings::new();
        let mut pipes = Arena::new();
        pipes.push(Pipe::down(0.0, settings.pipe_max_top, &settings));
        pipes.push(Pipe::up(0.0, settings.pipe_min_top + settings.pipe_space, &settings));

        assert!(pipes.get(0).unwrap().rect().top() <= 0.0);
        assert!(pipes.get(1).unwrap().rect().bottom() >= settings.ground_height);
    }

    #[test]
    fn test_no_spawn_before_latest_reaches_trigger() {
        let settings = Settings::new();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut pipes = Arena::new();
        spawn_pair(&mut pipes, &settings, &mut rng);

        assert!(!spawn_if_due(&mut pipes, &settings, &mut rng));
        assert_eq!(pipes.len(), 2);
    }

    #[test]
    fn test_spawn_once_trigger_reached() {
        let settings = Settings::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut pipes = Arena::new();
        spawn_pair(&mut pipes, &settings, &mut rng);
        for pipe in pipes.iter_mut() {
            pipe.x = settings.pipe_spawn_x;
        }

        assert!(spawn_if_due(&mut pipes, &settings, &mut rng));
        assert_eq!(pipes.len(), 4);
        assert!(!pipes.get(0).unwrap().latest);
        assert!(!pipes.get(1).unwrap().latest);
        assert!(pipes.get(3).unwrap().latest);

        // The new pair is not yet due, so no duplicate spawn
        assert!(!spawn_if_due(&mut pipes, &settings, &mut rng));
        assert_eq!(pipes.len(), 4);
    }

    #[test]
    fn test_spawn_into_empty_arena() {
        let settings = Settings::new();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut pipes = Arena::new();

        assert!(spawn_if_due(&mut pipes, &settings, &mut rng));
        assert_eq!(pipes.len(), 2);
        assert!(pipes.last().unwrap().latest);
    }

    #[test]
    fn test_scroll_removes_offscreen_pipes() {
        let mut settings = Settings::new();
        settings.dynamic.time_passed_seconds = 0.1;
        let mut pipes = Arena::new();
        pipes.push(Pipe::down(-settings.pipe_width + 10.0, 200.0, &settings));
        pipes.push(Pipe::up(300.0, 400.0, &settings));

        scroll_pipes(&mut pipes, &settings);

        assert_eq!(pipes.len(), 1);
        let remaining = pipes.get(0).unwrap();
        assert!((remaining.x - (300.0 - 0.1 * settings.pipe_speed)).abs() < 1e-9);
    }
}
