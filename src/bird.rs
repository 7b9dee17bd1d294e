use crate::config::{BIRD_RADIUS, BIRD_START_Y, BIRD_X, FLAP_VELOCITY, GRAVITY};
use crate::entity::{Body, Contact, Entity, StepContext};
use crate::render::Scene;

#[derive(Clone, Debug, PartialEq)]
pub struct Bird {
    pub x: f32,
    pub y: f32,
    pub velocity: f32,
    pub radius: f32,
    pub gravity: f32,
    pub flap_velocity: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self::new(BIRD_START_Y)
    }
}

impl Bird {
    pub fn new(y: f32) -> Self {
        Self {
            x: BIRD_X,
            y,
            velocity: 0.0,
            radius: BIRD_RADIUS,
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
        }
    }

    /// Replaces the current velocity with the upward impulse.
    pub fn flap(&mut self) {
        self.velocity = self.flap_velocity;
    }

    pub fn body(&self) -> Body {
        Body {
            x: self.x,
            y: self.y,
            radius: self.radius,
        }
    }
}

impl Entity for Bird {
    fn update(&mut self, ctx: &StepContext) -> Contact {
        self.velocity += self.gravity;
        self.y += self.velocity;

        if self.y - self.radius <= 0.0 {
            self.y = self.radius;
            self.velocity = 0.0;
        }

        if self.y + self.radius >= ctx.floor {
            Contact::crash()
        } else {
            Contact::NONE
        }
    }

    fn draw(&self, scene: &mut Scene) {
        let palette = scene.palette.clone();
        let (x, y, r) = (self.x, self.y, self.radius);
        scene.circle([x, y], r + 2.0, palette.outline);
        scene.circle([x, y], r, palette.bird_body);
        scene.circle([x + 8.0, y - 6.0], 6.0, palette.eye);
        scene.circle([x + 10.0, y - 6.0], 2.0, palette.pupil);
        scene.ellipse([x - 5.0, y + 5.0], [10.0, 7.0], palette.outline);
        scene.ellipse([x - 5.0, y + 5.0], [8.0, 5.0], palette.bird_wing);
    }
}
