pub mod config;

pub use config::{
    with_optional_layer, BallConfig, CameraConfig, ContactConfig, CradleConfig, DragConfig,
    GravityConfig, InteractionConfig, RuleCoefficients, SolverConfig, WindowConfig,
    DEFAULT_CONFIG, LOCAL_CONFIG,
};
