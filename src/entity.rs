use crate::render::Scene;

/// Circle used for bird collision.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Body {
    pub fn left(&self) -> f32 {
        self.x - self.radius
    }
    pub fn right(&self) -> f32 {
        self.x + self.radius
    }
    pub fn top(&self) -> f32 {
        self.y - self.radius
    }
    pub fn bottom(&self) -> f32 {
        self.y + self.radius
    }
}

/// World facts an entity may read while stepping.
#[derive(Copy, Clone, Debug)]
pub struct StepContext {
    pub floor: f32,
    pub speed: f32,
    pub bird: Body,
}

/// What a single update observed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Contact {
    pub crashed: bool,
    pub passed: bool,
}

impl Contact {
    pub const NONE: Contact = Contact {
        crashed: false,
        passed: false,
    };

    pub fn crash() -> Self {
        Self {
            crashed: true,
            ..Self::NONE
        }
    }
}

pub trait Entity {
    fn update(&mut self, ctx: &StepContext) -> Contact;

    fn draw(&self, scene: &mut Scene);

    /// Whether the entity has left the playfield and can be dropped.
    fn is_offscreen(&self) -> bool {
        false
    }
}
