use log::info;
use rand::{rngs::SmallRng, SeedableRng};

use crate::bird::Bird;
use crate::config::{
    CLOUD_INTERVAL, INITIAL_SPEED, MIN_WORLD_HEIGHT, PIPE_INTERVAL, READY_BOB_HEIGHT,
    READY_BOB_PERIOD_MS, SPEED_MILESTONE, SPEED_STEP,
};
use crate::decoration::Cloud;
use crate::entity::{Entity, StepContext};
use crate::obstacle::Obstacle;
use crate::render::Scene;

/// Result of one playing tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub crashed: bool,
    pub points: u32,
}

#[derive(Debug)]
pub struct World {
    width: f32,
    height: f32,
    pub bird: Bird,
    pub obstacles: Vec<Obstacle>,
    pub clouds: Vec<Cloud>,
    pub score: u32,
    pub high_score: u32,
    pub speed: f32,
    /// Playing ticks since the last reset; paces obstacle spawns.
    pub frames: u64,
    /// Ticks in any phase; paces cloud spawns.
    cloud_clock: u64,
    rng: SmallRng,
}

impl World {
    pub fn new(width: f32, height: f32, high_score: u32, seed: u64) -> Self {
        let mut world = Self {
            width: 1.0,
            height: MIN_WORLD_HEIGHT,
            bird: Bird::default(),
            obstacles: Vec::new(),
            clouds: Vec::new(),
            score: 0,
            high_score,
            speed: INITIAL_SPEED,
            frames: 0,
            cloud_clock: 0,
            rng: SmallRng::seed_from_u64(seed),
        };
        world.resize(width, height);
        world.reset();
        world
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Adopts new surface dimensions without touching game progress.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(1.0);
        self.height = height.max(MIN_WORLD_HEIGHT);
        for pipe in &mut self.obstacles {
            pipe.set_floor(self.height);
        }
    }

    pub fn reset(&mut self) {
        self.bird = Bird::new(self.height * 0.5);
        self.obstacles.clear();
        self.clouds.clear();
        self.score = 0;
        self.speed = INITIAL_SPEED;
        self.frames = 0;
        self.cloud_clock = 0;
    }

    fn context(&self) -> StepContext {
        StepContext {
            floor: self.height,
            speed: self.speed,
            bird: self.bird.body(),
        }
    }

    /// Cosmetic idle motion shown before a run starts.
    pub fn bob(&mut self, clock_ms: f32) {
        self.bird.y =
            self.height * 0.5 + (clock_ms / READY_BOB_PERIOD_MS).sin() * READY_BOB_HEIGHT;
    }

    /// Spawns and drifts clouds. Runs in every phase.
    pub fn step_background(&mut self) {
        if self.cloud_clock % CLOUD_INTERVAL == 0 {
            let cloud = Cloud::spawn(&mut self.rng, self.width, self.height);
            self.clouds.push(cloud);
        }
        let ctx = self.context();
        for cloud in &mut self.clouds {
            cloud.update(&ctx);
        }
        self.clouds.retain(|cloud| !cloud.is_offscreen());
        self.cloud_clock += 1;
    }

    /// Advances bird and obstacles by one tick, stopping at the first crash.
    pub fn step_playing(&mut self) -> TickReport {
        let mut report = TickReport::default();

        let ctx = self.context();
        if self.bird.update(&ctx).crashed {
            report.crashed = true;
            return report;
        }

        if self.frames % PIPE_INTERVAL == 0 {
            let pipe = Obstacle::spawn(&mut self.rng, self.width, self.height);
            self.obstacles.push(pipe);
        }

        let ctx = self.context();
        for pipe in &mut self.obstacles {
            let contact = pipe.update(&ctx);
            if contact.crashed {
                report.crashed = true;
                break;
            }
            if contact.passed {
                report.points += 1;
            }
        }
        for _ in 0..report.points {
            self.award_point();
        }
        self.obstacles.retain(|pipe| !pipe.is_offscreen());

        self.frames += 1;
        report
    }

    fn award_point(&mut self) {
        self.score += 1;
        if self.score % SPEED_MILESTONE == 0 {
            self.speed += SPEED_STEP;
            info!("score {} reached, speed now {:.1}", self.score, self.speed);
        }
    }

    /// Folds the current score into the best score. Returns whether it improved.
    pub fn record_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }

    pub fn draw(&self, scene: &mut Scene, show_obstacles: bool) {
        for cloud in &self.clouds {
            cloud.draw(scene);
        }
        if show_obstacles {
            for pipe in &self.obstacles {
                pipe.draw(scene);
            }
        }
        self.bird.draw(scene);
    }
}
