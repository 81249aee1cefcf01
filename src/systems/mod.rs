pub mod heightfield;
pub mod snowfall;
pub mod wind;
pub mod shovel;
pub mod rigid_body;
pub mod rigid_body_system;
pub mod debris;
