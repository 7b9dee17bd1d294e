use log::{info, warn};

use crate::config::STEP;
use crate::input::Action;
use crate::phase::{Phase, Trigger};
use crate::render::Scene;
use crate::storage::ScoreStore;
use crate::world::World;

/// One play session: phase machine, world and best-score persistence.
pub struct Game {
    phase: Phase,
    world: World,
    store: Box<dyn ScoreStore>,
    clock_ms: f32,
}

impl Game {
    pub fn new(width: f32, height: f32, store: Box<dyn ScoreStore>, seed: u64) -> Self {
        let high_score = store.load();
        info!("starting with high score {high_score}");
        Self {
            phase: Phase::Start,
            world: World::new(width, height, high_score, seed),
            store,
            clock_ms: 0.0,
        }
    }

    pub fn handle(&mut self, action: Action) {
        match (action, self.phase) {
            (Action::Primary, Phase::Start) => self.begin(),
            (Action::Primary, Phase::Playing) => self.world.bird.flap(),
            (Action::Primary, Phase::GameOver) | (Action::Restart, _) => self.restart(),
        }
    }

    fn apply(&mut self, trigger: Trigger) -> bool {
        match self.phase.transition(trigger) {
            Ok(next) => {
                info!("{:?} -> {:?} on {:?}", self.phase, next, trigger);
                self.phase = next;
                true
            }
            Err(err) => {
                warn!("{err}");
                false
            }
        }
    }

    fn begin(&mut self) {
        if self.apply(Trigger::Begin) {
            self.world.bird.flap();
        }
    }

    fn restart(&mut self) {
        self.save_best();
        if self.apply(Trigger::Reset) {
            self.world.reset();
        }
    }

    fn save_best(&mut self) {
        if self.world.record_high_score() {
            info!("new high score {}", self.world.high_score);
            self.store.save(self.world.high_score);
        }
    }

    /// Advances the simulation by one fixed step.
    pub fn tick(&mut self) {
        self.clock_ms += STEP * 1000.0;
        self.world.step_background();
        match self.phase {
            Phase::Start => self.world.bob(self.clock_ms),
            Phase::Playing => {
                let report = self.world.step_playing();
                if report.crashed && self.apply(Trigger::Crash) {
                    self.save_best();
                }
            }
            Phase::GameOver => {}
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.world.resize(width, height);
    }

    pub fn render(&self, scene: &mut Scene) {
        scene.clear(self.world.width(), self.world.height());
        self.world.draw(scene, self.phase == Phase::Playing);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn score(&self) -> u32 {
        self.world.score
    }

    pub fn best_score(&self) -> u32 {
        self.world.high_score
    }

    pub fn status_text(&self) -> &'static str {
        match self.phase {
            Phase::Start => "Tap, click or press Space to start",
            Phase::Playing => "",
            Phase::GameOver => "Game over",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FLAP_VELOCITY, INITIAL_SPEED, MIN_WORLD_HEIGHT};
    use crate::render::Palette;
    use crate::storage::MemoryStore;

    fn game() -> Game {
        Game::new(800.0, 600.0, Box::new(MemoryStore::default()), 5)
    }

    #[test]
    fn primary_action_begins_with_a_flap() {
        let mut game = game();
        game.handle(Action::Primary);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.world().bird.velocity, FLAP_VELOCITY);
    }

    #[test]
    fn flapping_does_not_change_phase() {
        let mut game = game();
        game.handle(Action::Primary);
        game.tick();
        game.tick();
        game.handle(Action::Primary);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.world().bird.velocity, FLAP_VELOCITY);
    }

    #[test]
    fn start_phase_only_bobs() {
        let mut game = game();
        for _ in 0..120 {
            game.tick();
            let y = game.world().bird.y;
            assert!((y - 300.0).abs() <= 10.0);
        }
        assert_eq!(game.world().frames, 0);
        assert!(game.world().obstacles.is_empty());
        assert!(!game.world().clouds.is_empty());
    }

    #[test]
    fn game_over_freezes_simulation() {
        let mut game = game();
        game.handle(Action::Primary);
        game.world_mut().bird.y = 600.0;
        game.tick();
        assert_eq!(game.phase(), Phase::GameOver);
        let frozen = game.world().bird.clone();
        let frames = game.world().frames;
        game.tick();
        assert_eq!(game.world().bird, frozen);
        assert_eq!(game.world().frames, frames);
    }

    #[test]
    fn primary_after_game_over_resets_to_start() {
        let mut game = game();
        game.handle(Action::Primary);
        game.world_mut().bird.y = 600.0;
        game.tick();
        game.handle(Action::Primary);
        assert_eq!(game.phase(), Phase::Start);
        assert_eq!(game.score(), 0);
        assert_eq!(game.world().speed, INITIAL_SPEED);
    }

    #[test]
    fn restart_button_works_mid_run() {
        let mut game = game();
        game.handle(Action::Primary);
        for _ in 0..10 {
            game.tick();
        }
        game.handle(Action::Restart);
        assert_eq!(game.phase(), Phase::Start);
        assert!(game.world().obstacles.is_empty());
        assert_eq!(game.world().bird.velocity, 0.0);
    }

    #[test]
    fn game_over_scene_shows_only_bird_and_clouds() {
        let mut game = game();
        game.handle(Action::Primary);
        game.tick();
        assert_eq!(game.world().obstacles.len(), 1);
        game.world_mut().bird.y = 600.0;
        game.tick();
        assert_eq!(game.phase(), Phase::GameOver);

        let mut scene = Scene::new(Palette::default());
        game.render(&mut scene);
        // Bird is six shapes, every cloud three.
        let expected = 6 + 3 * game.world().clouds.len();
        assert_eq!(scene.instances().len(), expected);
    }

    #[test]
    fn scene_uses_clamped_world_height() {
        let mut game = game();
        game.resize(320.0, 120.0);
        let mut scene = Scene::new(Palette::default());
        game.render(&mut scene);
        assert_eq!(scene.size(), [320.0, MIN_WORLD_HEIGHT]);
    }

    #[test]
    fn status_follows_phase() {
        let mut game = game();
        assert!(!game.status_text().is_empty());
        game.handle(Action::Primary);
        assert_eq!(game.status_text(), "");
    }
}
