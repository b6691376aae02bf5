pub mod input_interaction;
pub mod picking;
