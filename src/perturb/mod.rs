pub mod perturbation;
pub use perturbation::*;

pub mod perturbed;
pub use perturbed::*;
