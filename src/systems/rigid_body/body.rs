use super::vec2::Vec2;

/// Collision shape in local coordinates (centred on `pos`)
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle { radius: f32 },
    Box { half_width: f32, half_height: f32 },
}

/// Surface response of a dynamic body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyMaterial {
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    /// Tangential velocity lost per contact (0..1)
    pub friction: f32,
    /// Velocity lost per 60 Hz frame to air (0..1)
    pub friction_air: f32,
}

impl Default for BodyMaterial {
    fn default() -> Self {
        Self {
            restitution: 0.35,
            friction: 0.1,
            friction_air: 0.02,
        }
    }
}

/// Rigid Body - moves as a single unit
#[derive(Clone, Debug)]
pub struct RigidBody {
    /// Unique ID for this body, never reused within a backend
    pub id: u64,
    /// World position (center)
    pub pos: Vec2,
    /// Velocity (units per 60 Hz frame)
    pub velocity: Vec2,
    pub shape: Shape,
    /// Static bodies never move and only take part as obstacles
    pub is_static: bool,
    pub material: BodyMaterial,
    /// Inverse mass, zero for static bodies
    pub inv_mass: f32,
}

impl RigidBody {
    /// Create a dynamic circle
    pub fn new_circle(x: f32, y: f32, radius: f32, material: BodyMaterial, id: u64) -> Self {
        let radius = radius.max(0.1);
        // Unit density disc
        let mass = std::f32::consts::PI * radius * radius;
        Self {
            id,
            pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            shape: Shape::Circle { radius },
            is_static: false,
            material: BodyMaterial {
                restitution: material.restitution.clamp(0.0, 1.0),
                friction: material.friction.clamp(0.0, 1.0),
                friction_air: material.friction_air.clamp(0.0, 1.0),
            },
            inv_mass: 1.0 / mass,
        }
    }

    /// Create a static box centred at (x, y)
    pub fn new_static_box(x: f32, y: f32, w: f32, h: f32, id: u64) -> Self {
        Self {
            id,
            pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            shape: Shape::Box { half_width: w * 0.5, half_height: h * 0.5 },
            is_static: true,
            material: BodyMaterial { restitution: 0.0, friction: 0.1, friction_air: 0.0 },
            inv_mass: 0.0,
        }
    }

    /// Bounding radius: the circle radius, or the half-diagonal of a box
    pub fn radius(&self) -> f32 {
        match self.shape {
            Shape::Circle { radius } => radius,
            Shape::Box { half_width, half_height } => Vec2::new(half_width, half_height).length(),
        }
    }

    /// Apply impulse at center of mass
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse * self.inv_mass;
    }
}
