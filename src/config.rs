use anyhow::{anyhow, bail, Result};
use glam::{Mat4, Vec3};

pub const WIDTH: usize = 800;
pub const HEIGHT: usize = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lab {
    /// Clears to a fixed color.
    Empty,
    /// Clears to a color that flips every hundred frames.
    Hello,
    /// Spinning, pulsing pyramid.
    Polyhedron,
}

impl Lab {
    pub fn parse(name: &str) -> Option<Lab> {
        match name {
            "empty" => Some(Lab::Empty),
            "hello" => Some(Lab::Hello),
            "polyhedron" => Some(Lab::Polyhedron),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Lab::Empty => "Empty Window",
            Lab::Hello => "Hello OpenGL",
            Lab::Polyhedron => "Polyhedral Render (?)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Wireframe,
    Fill,
}

/// Whether log lines carry ANSI colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogColor {
    #[default]
    Auto,
    Always,
    Never,
}

impl LogColor {
    pub fn parse(value: &str) -> Option<LogColor> {
        match value {
            "auto" => Some(LogColor::Auto),
            "always" => Some(LogColor::Always),
            "never" => Some(LogColor::Never),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabConfig {
    pub lab: Lab,
    pub render_mode: RenderMode,
    pub width: usize,
    pub height: usize,
    /// `env_logger` filter; `RUST_LOG` is used when absent.
    pub log_filter: Option<String>,
    pub log_color: LogColor,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            lab: Lab::Polyhedron,
            render_mode: RenderMode::Wireframe,
            width: WIDTH,
            height: HEIGHT,
            log_filter: None,
            log_color: LogColor::Auto,
        }
    }
}

impl LabConfig {
    /// Parses `[lab] [--fill] [--log <filter>] [--color <auto|always|never>]`,
    /// without the program name.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = LabConfig::default();
        let mut lab_seen = false;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--fill" => config.render_mode = RenderMode::Fill,
                "--log" => {
                    let filter = args
                        .next()
                        .ok_or_else(|| anyhow!("--log expects a filter, e.g. `--log debug`"))?;
                    config.log_filter = Some(filter);
                }
                "--color" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("--color expects auto, always or never"))?;
                    config.log_color = LogColor::parse(&value)
                        .ok_or_else(|| anyhow!("unknown color choice {:?}", value))?;
                }
                flag if flag.starts_with('-') => bail!("unknown flag {:?}", flag),
                name => {
                    if lab_seen {
                        bail!("only one lab can be run at a time, got extra {:?}", name);
                    }
                    config.lab = Lab::parse(name).ok_or_else(|| {
                        anyhow!("unknown lab {:?}, expected empty, hello or polyhedron", name)
                    })?;
                    lab_seen = true;
                }
            }
        }

        Ok(config)
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Fixed camera the polyhedron is looked at through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::splat(3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<LabConfig> {
        LabConfig::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_args_runs_the_polyhedron() {
        assert_eq!(parse(&[]).unwrap(), LabConfig::default());
    }

    #[test]
    fn picks_lab_by_name() {
        assert_eq!(parse(&["empty"]).unwrap().lab, Lab::Empty);
        assert_eq!(parse(&["hello"]).unwrap().lab, Lab::Hello);
        assert_eq!(parse(&["polyhedron"]).unwrap().lab, Lab::Polyhedron);
    }

    #[test]
    fn flags_in_any_position() {
        let config = parse(&["--log", "labs=debug", "polyhedron", "--fill"]).unwrap();
        assert_eq!(config.lab, Lab::Polyhedron);
        assert_eq!(config.render_mode, RenderMode::Fill);
        assert_eq!(config.log_filter.as_deref(), Some("labs=debug"));
    }

    #[test]
    fn rejects_unknown_lab() {
        let err = parse(&["cube"]).unwrap_err();
        assert!(err.to_string().contains("unknown lab"));
    }

    #[test]
    fn rejects_second_lab() {
        assert!(parse(&["empty", "hello"]).is_err());
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(parse(&["--vr"]).is_err());
    }

    #[test]
    fn log_needs_a_value() {
        assert!(parse(&["--log"]).is_err());
    }

    #[test]
    fn color_choice() {
        assert_eq!(parse(&[]).unwrap().log_color, LogColor::Auto);
        assert_eq!(parse(&["--color", "never"]).unwrap().log_color, LogColor::Never);
        assert_eq!(
            parse(&["hello", "--color", "always"]).unwrap().log_color,
            LogColor::Always
        );
        assert!(parse(&["--color", "rainbow"]).is_err());
        assert!(parse(&["--color"]).is_err());
    }

    #[test]
    fn default_window_is_four_by_three() {
        let config = LabConfig::default();
        assert_eq!((config.width, config.height), (800, 600));
        assert!((config.aspect() - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn camera_looks_at_the_origin() {
        let view = Camera::default().view();
        let origin = view.transform_point3(Vec3::ZERO);
        // right-handed view space looks down -Z
        assert!(origin.x.abs() < 1e-5 && origin.y.abs() < 1e-5);
        assert!((origin.z + 27f32.sqrt()).abs() < 1e-4);
    }
}
