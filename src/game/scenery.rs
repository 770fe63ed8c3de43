//! Scrolling ground strip and background.

use super::arena::Arena;
use super::types::{Background, Ground};
use crate::settings::Settings;

/// Lay ground tiles edge to edge from x = 0 until the screen is covered.
pub fn create_grounds(settings: &Settings) -> Arena<Ground> {
    let mut grounds = Arena::new();
    let count = (settings.screen_width / settings.ground_width).floor() as usize + 1;
    for i in 0..count {
        grounds.push(Ground::new(i as f64 * settings.ground_width, settings));
    }
    grounds
}

/// Scroll the ground left, drop tiles that left the screen and append a
/// new tile once the rightmost one's trailing edge is on screen.
pub fn update_grounds(grounds: &mut Arena<Ground>, settings: &Settings) {
    let distance = settings.dynamic.time_passed_seconds * settings.ground_speed;
    grounds.update_and_mark(|ground| {
        ground.x -= distance;
        ground.x <= -ground.width
    });
    grounds.compact();

    let next_x = match grounds.last() {
        Some(last) if last.right() <= settings.screen_width => last.right(),
        Some(_) => return,
        None => 0.0,
    };
    grounds.push(Ground::new(next_x, settings));
}

/// Scroll both background tiles; once the leading tile has fully passed
/// the left edge, snap both back to `(0, width)`.
pub fn update_background(background: &mut Background, settings: &Settings) {
    let distance = settings.dynamic.time_passed_seconds * settings.background_speed;
    background.x += distance;
    background.x2 += distance;

    if background.x <= -background.width {
        background.x = 0.0;
        background.x2 = background.width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_grounds_cover_screen() {
        let settings = Settings::new();
        let grounds = create_grounds(&settings);
        // 1000 / 48 = 20, plus one
        assert_eq!(grounds.len(), 21);
        assert_eq!(grounds.get(0).unwrap().x, 0.0);
        assert!(grounds.last().unwrap().right() > settings.screen_width);
        for ground in grounds.iter() {
            assert_eq!(ground.y, settings.ground_height);
        }
    }

    #[test]
    fn test_grounds_tile_without_gaps() {
        let mut settings = Settings::new();
        let mut grounds = create_grounds(&settings);
        settings.dynamic.time_passed_seconds = 1.0 / 30.0;

        for _ in 0..600 {
            update_grounds(&mut grounds, &settings);
            let tiles: Vec<_> = grounds.iter().collect();
            for pair in tiles.windows(2) {
                assert!((pair[0].right() - pair[1].x).abs() < 1e-6);
            }
            assert!(tiles[0].x > -settings.ground_width);
            assert!(tiles[tiles.len() - 1].right() > settings.screen_width);
        }
    }

    #[test]
    fn test_background_wraps_to_origin() {
        let mut settings = Settings::new();
        let mut background = Background::new(&settings);
        assert_eq!((background.x, background.x2), (0.0, 1000.0));

        // 19.9s at -50px/s = -995
        settings.dynamic.time_passed_seconds = 19.9;
        update_background(&mut background, &settings);
        assert!((background.x + 995.0).abs() < 1e-9);
        assert!((background.x2 - 5.0).abs() < 1e-9);

        settings.dynamic.time_passed_seconds = 0.2;
        update_background(&mut background, &settings);
        assert_eq!((background.x, background.x2), (0.0, 1000.0));
    }

    #[test]
    fn test_background_tiles_stay_adjacent() {
        let mut settings = Settings::new();
        let mut background = Background::new(&settings);
        settings.dynamic.time_passed_seconds = 0.37;
        for _ in 0..200 {
            update_background(&mut background, &settings);
            assert!((background.x2 - background.x - background.width).abs() < 1e-9);
            assert!(background.x <= 0.0 && background.x > -background.width);
        }
    }
}
