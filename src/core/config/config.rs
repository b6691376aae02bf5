use bevy::prelude::*;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Shipped configuration, relative to the working directory.
pub const DEFAULT_CONFIG: &str = "assets/config/cradle.ron";
/// Untracked per-machine overrides, layered on top when present.
pub const LOCAL_CONFIG: &str = "assets/config/cradle.local.ron";

/// Appends `optional` to `layers` only if the file exists.
pub fn with_optional_layer(mut layers: Vec<PathBuf>, optional: &Path) -> Vec<PathBuf> {
    if optional.is_file() {
        layers.push(optional.to_path_buf());
    }
    layers
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
    /// CSS selector of the host canvas (web builds only).
    pub canvas: Option<String>,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Newton's Cradle".into(),
            auto_close: 0.0,
            canvas: None,
        }
    }
}
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: -9.82 }
    }
}
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    pub iterations: usize,
    /// Simulated steps per second. Every tick advances exactly `1 / timestep_hz`.
    pub timestep_hz: f32,
}
impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            iterations: 20,
            timestep_hz: 60.0,
        }
    }
}
impl SolverConfig {
    /// Seconds per step. A rate that is not finite and positive falls back to 60 Hz.
    #[inline]
    pub fn dt(&self) -> f32 {
        let dt = 1.0 / self.timestep_hz;
        if self.timestep_hz.is_finite() && dt.is_finite() && dt > 0.0 {
            dt
        } else {
            1.0 / Self::default().timestep_hz
        }
    }
}
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    pub mass: f32,
    pub spacing: f32,
    pub first_x: f32,
    pub start_y: f32,
    /// Sectors and stacks of the shared UV sphere mesh.
    pub mesh_resolution: u32,
    pub linear_damping: f32,
    pub angular_damping: f32,
}
impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 0.5,
            mass: 1.0,
            spacing: 1.2,
            first_x: -4.2,
            start_y: 3.0,
            mesh_resolution: 82,
            linear_damping: 0.01,
            angular_damping: 0.01,
        }
    }
}
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct RuleCoefficients {
    pub restitution: f32,
    pub friction: f32,
}
impl Default for RuleCoefficients {
    fn default() -> Self {
        Self {
            restitution: 0.0,
            friction: 0.3,
        }
    }
}
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ContactConfig {
    /// Ball against ball.
    pub ball: RuleCoefficients,
    /// Any pair without an explicit rule.
    pub default: RuleCoefficients,
}
impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            ball: RuleCoefficients {
                restitution: 0.9,
                friction: 0.05,
            },
            default: RuleCoefficients::default(),
        }
    }
}
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DragConfig {
    pub enabled: bool,
    /// Pointer NDC x -> world x multiplier.
    pub scale: f32,
}
impl Default for DragConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            scale: 5.0,
        }
    }
}
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct InteractionConfig {
    pub drag: DragConfig,
}
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub position: (f32, f32, f32),
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub ambient_brightness: f32,
}
impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: (0.0, 3.0, 10.0),
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            ambient_brightness: 1000.0,
        }
    }
}
impl CameraConfig {
    pub fn translation(&self) -> Vec3 {
        let (x, y, z) = self.position;
        Vec3::new(x, y, z)
    }
}
#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct CradleConfig {
    pub window: WindowConfig,
    pub gravity: GravityConfig,
    pub solver: SolverConfig,
    pub balls: BallConfig,
    pub contact: ContactConfig,
    pub interactions: InteractionConfig,
    pub camera: CameraConfig,
    pub rapier_debug: bool,
}
impl CradleConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }
    /// Merges every readable file in order (later keys win, nested maps merge)
    /// and returns `(config, used_paths, errors)`. Never fails: unreadable or
    /// unparsable layers are reported and skipped.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let existing = bm.iter_mut().find_map(|(ek, ev)| (*ek == k).then_some(ev));
                        match existing {
                            Some(ev) => merge_value(ev, v),
                            None => {
                                bm.insert(k, v);
                            }
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        match &mut merged {
                            Some(cur) => merge_value(cur, val),
                            None => merged = Some(val),
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (CradleConfig::default(), used, errors);
        };
        match val.into_rust::<CradleConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (CradleConfig::default(), used, errors)
            }
        }
    }
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        if self.gravity.y.abs() < 1e-4 {
            w.push("gravity.y magnitude near zero; balls will float".into());
        }
        if self.gravity.y > 0.0 {
            w.push(format!(
                "gravity.y is positive ({}); the world is Y-up, balls will fly away",
                self.gravity.y
            ));
        }
        if self.solver.iterations == 0 {
            w.push("solver.iterations is 0 -> clamped to 1".into());
        } else if self.solver.iterations > 200 {
            w.push(format!(
                "solver.iterations {} very high; frame time may suffer",
                self.solver.iterations
            ));
        }
        if !(self.solver.timestep_hz.is_finite() && self.solver.timestep_hz > 0.0) {
            w.push(format!(
                "solver.timestep_hz {} must be finite and > 0 -> using 60",
                self.solver.timestep_hz
            ));
        }
        let b = &self.balls;
        if b.radius <= 0.0 {
            w.push("balls.radius must be > 0".into());
        }
        if b.mass <= 0.0 {
            w.push("balls.mass must be > 0 (balls are dynamic)".into());
        }
        if b.spacing < b.radius * 2.0 {
            w.push(format!(
                "balls.spacing {} smaller than diameter {} -> balls start overlapping",
                b.spacing,
                b.radius * 2.0
            ));
        }
        if b.mesh_resolution < 3 {
            w.push(format!(
                "balls.mesh_resolution {} too coarse for a sphere",
                b.mesh_resolution
            ));
        }
        if b.linear_damping < 0.0 || b.angular_damping < 0.0 {
            w.push("balls damping negative -> energy gain".into());
        }
        fn check_rule(w: &mut Vec<String>, label: &str, r: &RuleCoefficients) {
            if !(0.0..=1.0).contains(&r.restitution) {
                w.push(format!(
                    "{label}.restitution {} outside 0..1",
                    r.restitution
                ));
            }
            if r.friction < 0.0 {
                w.push(format!("{label}.friction {} negative", r.friction));
            }
        }
        check_rule(&mut w, "contact.ball", &self.contact.ball);
        check_rule(&mut w, "contact.default", &self.contact.default);
        if self.contact.ball.restitution < self.contact.default.restitution
            || self.contact.ball.friction > self.contact.default.friction
        {
            w.push(
                "contact.ball must be at least as bouncy and at most as rough as contact.default; \
                 ball-vs-wall contacts will not use the default rule"
                    .into(),
            );
        }
        if self.interactions.drag.enabled && self.interactions.drag.scale <= 0.0 {
            w.push("interactions.drag.scale must be > 0 when enabled".into());
        }
        let cam = &self.camera;
        if !(cam.fov_degrees > 0.0 && cam.fov_degrees < 180.0) {
            w.push(format!(
                "camera.fov_degrees {} outside 0..180",
                cam.fov_degrees
            ));
        }
        if cam.near <= 0.0 || cam.near >= cam.far {
            w.push(format!(
                "camera.near {} / far {} invalid (need 0 < near < far)",
                cam.near, cam.far
            ));
        }
        w
    }
}
