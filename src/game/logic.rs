//! Game logic for a Flappy Bird session.
//!
//! `FlappyGame` owns every entity plus the settings context. Input goes
//! through [`FlappyGame::handle`], time through [`FlappyGame::tick`]; both
//! route status changes through [`GameStatus::transition`].

use super::arena::Arena;
use super::bird;
use super::collision::{hits_any_pipe, hits_ground, score_passed_pipes};
use super::scenery::{create_grounds, update_background, update_grounds};
use super::spawner::{scroll_pipes, spawn_if_due, spawn_pair};
use super::state::{GameStatus, Next, Trigger};
use super::types::{Background, Bird, GameStats, Ground, Pipe};
use crate::audio::{AudioSink, Cue};
use crate::highscore::{self, HighscoreStore};
use crate::settings::Settings;
use rand::Rng;

/// What the bird ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Obstacle {
    Pipe,
    Ground,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub settings: Settings,
    pub stats: GameStats,
    pub bird: Bird,
    pub pipes: Arena<Pipe>,
    pub grounds: Arena<Ground>,
    pub background: Background,
    /// Highscore shown on the game-over panel.
    pub highscore: u32,
    /// The last finished round set a new highscore.
    pub new_record: bool,
}

impl FlappyGame {
    /// Create a session in READY with one pipe pair waiting off-screen.
    /// Settings that fail [`Settings::is_playable`] are replaced by the
    /// built-in values.
    pub fn new<R: Rng>(mut settings: Settings, rng: &mut R) -> Self {
        if !settings.is_playable() {
            log::warn!("Settings are not playable, using the built-in values");
            settings = Settings::new();
        }
        settings.initialize_static();
        settings.reset_dynamic();

        let bird = Bird::new(&settings);
        let mut pipes = Arena::new();
        spawn_pair(&mut pipes, &settings, rng);
        let grounds = create_grounds(&settings);
        let background = Background::new(&settings);

        Self {
            settings,
            stats: GameStats::new(),
            bird,
            pipes,
            grounds,
            background,
            highscore: 0,
            new_record: false,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.stats.status
    }

    pub fn score(&self) -> u32 {
        self.stats.score
    }

    /// Feed a trigger to the state machine and apply its side effects.
    /// Returns the decision so the caller can stop on [`Next::Exit`].
    pub fn handle<R: Rng>(
        &mut self,
        trigger: Trigger,
        rng: &mut R,
        audio: &mut dyn AudioSink,
        store: &mut dyn HighscoreStore,
    ) -> Next {
        let next = self.stats.status.transition(trigger);
        if let Next::Enter(to) = next {
            log::debug!("{} -> {}", self.stats.status.name(), to.name());
        }
        match next {
            Next::Enter(GameStatus::Active) => {
                self.stats.status = GameStatus::Active;
                log::info!("Round started");
                self.flap(audio);
            }
            Next::Flap => self.flap(audio),
            Next::Enter(GameStatus::Over) => self.finish_round(audio, store),
            Next::Enter(GameStatus::Ready) => self.restart(rng),
            Next::Ignore | Next::Exit => {}
        }
        next
    }

    /// Advance the simulation by `dt` seconds.
    pub fn tick<R: Rng>(
        &mut self,
        dt: f64,
        rng: &mut R,
        audio: &mut dyn AudioSink,
        store: &mut dyn HighscoreStore,
    ) {
        self.settings.dynamic.time_passed_seconds = dt;

        match self.stats.status {
            GameStatus::Ready => {
                // The bird hovers while the scenery moves
                update_grounds(&mut self.grounds, &self.settings);
                update_background(&mut self.background, &self.settings);
            }
            GameStatus::Active => self.tick_active(rng, audio, store),
            GameStatus::Over => bird::lose_fall(&mut self.bird, &mut self.settings),
        }
    }

    fn tick_active<R: Rng>(
        &mut self,
        rng: &mut R,
        audio: &mut dyn AudioSink,
        store: &mut dyn HighscoreStore,
    ) {
        self.settings.dynamic.active_time += self.settings.dynamic.time_passed_seconds;
        bird::update(&mut self.bird, &mut self.settings);

        self.update_pipes(rng, audio, store);
        if self.stats.status != GameStatus::Active {
            return;
        }

        update_grounds(&mut self.grounds, &self.settings);
        if hits_ground(&self.bird, &self.grounds) {
            self.collide(Obstacle::Ground, audio, store);
            return;
        }

        update_background(&mut self.background, &self.settings);
    }

    fn update_pipes<R: Rng>(
        &mut self,
        rng: &mut R,
        audio: &mut dyn AudioSink,
        store: &mut dyn HighscoreStore,
    ) {
        // Pipes wait off-screen until the warm-up is over
        if self.settings.dynamic.active_time < self.settings.pipe_warmup_seconds {
            return;
        }

        scroll_pipes(&mut self.pipes, &self.settings);
        spawn_if_due(&mut self.pipes, &self.settings, rng);

        if hits_any_pipe(&self.bird, &self.pipes) {
            self.collide(Obstacle::Pipe, audio, store);
            return;
        }

        for _ in 0..score_passed_pipes(&self.bird, &mut self.pipes) {
            self.stats.score += 1;
            audio.play(Cue::Point);
        }
    }

    /// Report a collision. Only the first one in a round has any effect.
    pub fn collide(
        &mut self,
        obstacle: Obstacle,
        audio: &mut dyn AudioSink,
        store: &mut dyn HighscoreStore,
    ) {
        if self.stats.status.transition(Trigger::Collision) != Next::Enter(GameStatus::Over) {
            return;
        }
        log::debug!("Bird hit {:?}", obstacle);
        self.finish_round(audio, store);

        if obstacle == Obstacle::Pipe {
            audio.play(Cue::Die);
            bird::stall(&mut self.bird, &mut self.settings);
        }
    }

    /// Reset everything but the scenery for a new round.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        self.stats.status = GameStatus::Ready;
        self.settings.reset_dynamic();
        self.stats.reset_stats();
        self.pipes.clear();
        spawn_pair(&mut self.pipes, &self.settings, rng);
        bird::reset_to_start(&mut self.bird, &self.settings);
        self.new_record = false;
    }

    fn flap(&mut self, audio: &mut dyn AudioSink) {
        bird::jump(&mut self.bird, &mut self.settings);
        audio.play(Cue::Wing);
    }

    fn finish_round(&mut self, audio: &mut dyn AudioSink, store: &mut dyn HighscoreStore) {
        self.stats.status = GameStatus::Over;
        let update = highscore::record(store, self.stats.score);
        self.highscore = update.highscore;
        self.new_record = update.is_record;
        audio.play(Cue::Hit);

        log::info!(
            "Round over: score {}, highscore {}{}",
            self.stats.score,
            update.highscore,
            if update.is_record { " (new record)" } else { "" }
        );
    }
}
