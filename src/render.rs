use bytemuck::{Pod, Zeroable};

pub const SHAPE_RECT: u32 = 0;
pub const SHAPE_ELLIPSE: u32 = 1;

/// One screen-space quad. The shader fills the whole quad for
/// [`SHAPE_RECT`] and only the inscribed ellipse for [`SHAPE_ELLIPSE`].
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceData {
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
    pub shape: u32,
    pub _pad: u32,
}

#[derive(Clone, Debug)]
pub struct Palette {
    pub bird_body: [f32; 4],
    pub bird_wing: [f32; 4],
    pub outline: [f32; 4],
    pub eye: [f32; 4],
    pub pupil: [f32; 4],
    pub pipe: [f32; 4],
    pub pipe_edge: [f32; 4],
    pub cloud: [f32; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            bird_body: srgb(0xff, 0xeb, 0x3b),
            bird_wing: srgb(0xfb, 0xc0, 0x2d),
            outline: srgb(0x00, 0x00, 0x00),
            eye: srgb(0xff, 0xff, 0xff),
            pupil: srgb(0x00, 0x00, 0x00),
            pipe: srgb(0x4c, 0xaf, 0x50),
            pipe_edge: srgb(0x2e, 0x7d, 0x32),
            cloud: [1.0, 1.0, 1.0, 0.6],
        }
    }
}

fn srgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Drawing surface the entities paint into each frame. Coordinates are
/// CSS pixels with the origin at the top-left corner of the canvas.
#[derive(Debug)]
pub struct Scene {
    pub palette: Palette,
    size: [f32; 2],
    instances: Vec<InstanceData>,
}

impl Scene {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            size: [1.0, 1.0],
            instances: Vec::with_capacity(64),
        }
    }

    pub fn clear(&mut self, width: f32, height: f32) {
        self.size = [width, height];
        self.instances.clear();
    }

    pub fn size(&self) -> [f32; 2] {
        self.size
    }

    pub fn instances(&self) -> &[InstanceData] {
        &self.instances
    }

    pub fn rect(&mut self, pos: [f32; 2], size: [f32; 2], color: [f32; 4]) {
        self.push(pos, size, color, SHAPE_RECT);
    }

    /// Rectangle with a border drawn inside its bounds.
    pub fn framed_rect(
        &mut self,
        pos: [f32; 2],
        size: [f32; 2],
        fill: [f32; 4],
        border: [f32; 4],
        width: f32,
    ) {
        self.rect(pos, size, border);
        self.rect(
            [pos[0] + width, pos[1] + width],
            [size[0] - width * 2.0, size[1] - width * 2.0],
            fill,
        );
    }

    pub fn circle(&mut self, center: [f32; 2], radius: f32, color: [f32; 4]) {
        self.ellipse(center, [radius, radius], color);
    }

    pub fn ellipse(&mut self, center: [f32; 2], radii: [f32; 2], color: [f32; 4]) {
        self.push(
            [center[0] - radii[0], center[1] - radii[1]],
            [radii[0] * 2.0, radii[1] * 2.0],
            color,
            SHAPE_ELLIPSE,
        );
    }

    fn push(&mut self, pos: [f32; 2], size: [f32; 2], color: [f32; 4], shape: u32) {
        if size[0] <= 0.0 || size[1] <= 0.0 {
            return;
        }
        self.instances.push(InstanceData {
            position: pos,
            size,
            color,
            shape,
            _pad: 0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_layout_matches_vertex_attributes() {
        assert_eq!(std::mem::size_of::<InstanceData>(), 40);
    }

    #[test]
    fn circle_becomes_bounding_quad() {
        let mut scene = Scene::new(Palette::default());
        scene.circle([50.0, 60.0], 15.0, [1.0; 4]);
        let quad = scene.instances()[0];
        assert_eq!(quad.position, [35.0, 45.0]);
        assert_eq!(quad.size, [30.0, 30.0]);
        assert_eq!(quad.shape, SHAPE_ELLIPSE);
    }

    #[test]
    fn degenerate_shapes_are_dropped() {
        let mut scene = Scene::new(Palette::default());
        scene.rect([0.0, 0.0], [10.0, 0.0], [1.0; 4]);
        scene.framed_rect([0.0, 0.0], [3.0, 30.0], [1.0; 4], [0.0; 4], 2.0);
        assert_eq!(scene.instances().len(), 1);
    }

    #[test]
    fn clear_resets_frame() {
        let mut scene = Scene::new(Palette::default());
        scene.rect([0.0, 0.0], [1.0, 1.0], [1.0; 4]);
        scene.clear(640.0, 480.0);
        assert!(scene.instances().is_empty());
        assert_eq!(scene.size(), [640.0, 480.0]);
    }
}
