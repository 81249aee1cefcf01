#[macro_use]
pub mod safety;
#[macro_use]
pub mod logging;
pub mod random;
