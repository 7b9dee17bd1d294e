use log::debug;
use rand::Rng;

use crate::config::{PIPE_CAP_HEIGHT, PIPE_GAP, PIPE_MIN_HEIGHT, PIPE_WIDTH};
use crate::entity::{Contact, Entity, StepContext};
use crate::render::Scene;

/// A pair of pipes with a passable gap between `top_height` and `bottom_y`.
#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub top_height: f32,
    pub bottom_y: f32,
    pub scored: bool,
    floor: f32,
}

impl Obstacle {
    pub fn new(x: f32, top_height: f32, floor: f32) -> Self {
        Self {
            x,
            top_height,
            bottom_y: top_height + PIPE_GAP,
            scored: false,
            floor,
        }
    }

    /// Spawns at `x` with the gap placed uniformly at random between the
    /// minimum wall heights. `floor` must be at least
    /// [`MIN_WORLD_HEIGHT`](crate::config::MIN_WORLD_HEIGHT).
    pub fn spawn<R: Rng>(rng: &mut R, x: f32, floor: f32) -> Self {
        let min_pos = PIPE_MIN_HEIGHT as i32;
        let max_pos = ((floor - PIPE_MIN_HEIGHT - PIPE_GAP) as i32).max(min_pos);
        let top_height = rng.gen_range(min_pos..=max_pos) as f32;
        debug!("obstacle spawned at x={x} with gap {top_height}..{}", top_height + PIPE_GAP);
        Self::new(x, top_height, floor)
    }

    pub fn gap(&self) -> f32 {
        self.bottom_y - self.top_height
    }

    pub fn trailing_edge(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    /// Keeps the bottom pipe reaching the ground after a resize.
    pub fn set_floor(&mut self, floor: f32) {
        self.floor = floor;
    }
}

impl Entity for Obstacle {
    fn update(&mut self, ctx: &StepContext) -> Contact {
        self.x -= ctx.speed;
        let bird = ctx.bird;

        if bird.right() > self.x && bird.left() < self.trailing_edge() {
            if bird.top() < self.top_height || bird.bottom() > self.bottom_y {
                return Contact::crash();
            }
        }

        if !self.scored && bird.right() > self.trailing_edge() {
            self.scored = true;
            return Contact {
                passed: true,
                ..Contact::NONE
            };
        }

        Contact::NONE
    }

    fn draw(&self, scene: &mut Scene) {
        let fill = scene.palette.pipe;
        let edge = scene.palette.pipe_edge;
        let x = self.x;
        let bottom_height = (self.floor - self.bottom_y).max(0.0);

        scene.framed_rect([x, 0.0], [PIPE_WIDTH, self.top_height], fill, edge, 2.0);
        scene.framed_rect(
            [x - 2.0, self.top_height - PIPE_CAP_HEIGHT],
            [PIPE_WIDTH + 4.0, PIPE_CAP_HEIGHT],
            fill,
            edge,
            2.0,
        );
        scene.framed_rect([x, self.bottom_y], [PIPE_WIDTH, bottom_height], fill, edge, 2.0);
        scene.framed_rect(
            [x - 2.0, self.bottom_y],
            [PIPE_WIDTH + 4.0, PIPE_CAP_HEIGHT],
            fill,
            edge,
            2.0,
        );
    }

    fn is_offscreen(&self) -> bool {
        self.trailing_edge() < 0.0
    }
}
