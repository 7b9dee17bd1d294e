use rand::Rng;

use crate::config::CLOUD_DESPAWN_X;
use crate::entity::{Contact, Entity, StepContext};
use crate::render::Scene;

/// Background cloud drifting left at its own pace.
#[derive(Clone, Debug, PartialEq)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub scale: f32,
}

impl Cloud {
    pub fn spawn<R: Rng>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            x: width + rng.gen_range(0.0..200.0),
            y: rng.gen_range(0.0..(height * 0.5).max(1.0)),
            speed: rng.gen_range(0.5..1.0),
            scale: rng.gen_range(0.5..1.0),
        }
    }
}

impl Entity for Cloud {
    fn update(&mut self, _ctx: &StepContext) -> Contact {
        self.x -= self.speed;
        Contact::NONE
    }

    fn draw(&self, scene: &mut Scene) {
        let color = scene.palette.cloud;
        let s = self.scale;
        scene.circle([self.x, self.y], 30.0 * s, color);
        scene.circle([self.x + 25.0 * s, self.y - 10.0 * s], 35.0 * s, color);
        scene.circle([self.x + 50.0 * s, self.y], 30.0 * s, color);
    }

    fn is_offscreen(&self) -> bool {
        self.x < CLOUD_DESPAWN_X
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bird::Bird;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn spawns_past_right_edge_in_upper_half() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..100 {
            let cloud = Cloud::spawn(&mut rng, 800.0, 600.0);
            assert!((800.0..1000.0).contains(&cloud.x));
            assert!((0.0..300.0).contains(&cloud.y));
            assert!((0.5..1.0).contains(&cloud.speed));
            assert!((0.5..1.0).contains(&cloud.scale));
        }
    }

    #[test]
    fn drifts_and_expires() {
        let ctx = StepContext {
            floor: 600.0,
            speed: 3.0,
            bird: Bird::default().body(),
        };
        let mut cloud = Cloud {
            x: -99.0,
            y: 40.0,
            speed: 0.5,
            scale: 1.0,
        };
        assert_eq!(cloud.update(&ctx), Contact::NONE);
        assert!(!cloud.is_offscreen());
        cloud.update(&ctx);
        cloud.update(&ctx);
        assert!(cloud.is_offscreen());
    }
}
