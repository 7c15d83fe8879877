use std::time::Instant;

mod animation;
mod color;
mod config;
mod controls;
mod geometry;
mod logging;
mod shader;

use anyhow::{anyhow, Result};
use log::{debug, error, info};
use miniquad::{
    conf, Bindings, Buffer, BufferLayout, BufferType, Comparison, Context, EventHandler, KeyCode,
    KeyMods, PassAction, Pipeline, PipelineParams, PrimitiveType, Shader, VertexAttribute,
    VertexFormat,
};

use animation::{Animation, Blinker};
use color::ColorOscillator;
use config::{Camera, Lab, LabConfig, RenderMode};
use controls::{Controls, FrameAction};
use logging::{init_logging, LoggingConfig};

const EMPTY_CLEAR: [f32; 4] = [1.0, 0.0, 0.5, 1.0];
const POLYHEDRON_CLEAR: [f32; 4] = [0.2, 0.3, 0.3, 1.0];
const STATS_EVERY: usize = 120;

struct Polyhedron {
    pipeline: Pipeline,
    bindings: Bindings,
    num_elements: i32,
    animation: Animation,
}

impl Polyhedron {
    fn new(ctx: &mut Context, config: &LabConfig) -> Result<Polyhedron> {
        let shader = Shader::new(ctx, shader::VERTEX, shader::FRAGMENT, shader::meta())
            .map_err(|e| anyhow!("failed to build the shader program: {:?}", e))?;

        let (indices, primitive_type) = match config.render_mode {
            RenderMode::Wireframe => (
                geometry::edge_indices(&geometry::INDICES),
                PrimitiveType::Lines,
            ),
            RenderMode::Fill => (geometry::INDICES.to_vec(), PrimitiveType::Triangles),
        };

        let vertex_buffer = Buffer::immutable(ctx, BufferType::VertexBuffer, &geometry::VERTICES);
        let index_buffer = Buffer::immutable(ctx, BufferType::IndexBuffer, &indices);

        let bindings = Bindings {
            vertex_buffers: vec![vertex_buffer],
            index_buffer,
            images: vec![],
        };

        let pipeline = Pipeline::with_params(
            ctx,
            &[BufferLayout::default()],
            &[VertexAttribute::new("pos", VertexFormat::Float3)],
            shader,
            PipelineParams {
                primitive_type,
                depth_test: Comparison::LessOrEqual,
                depth_write: true,
                ..Default::default()
            },
        );

        let camera = Camera::default();
        let animation = Animation::new(
            camera.view(),
            camera.projection(config.aspect()),
            ColorOscillator::default(),
        );

        Ok(Polyhedron {
            pipeline,
            bindings,
            num_elements: indices.len() as i32,
            animation,
        })
    }

    fn draw(&self, ctx: &mut Context) {
        let params = self.animation.params();
        let [r, g, b, a] = POLYHEDRON_CLEAR;

        ctx.begin_default_pass(PassAction::Clear {
            color: Some((r, g, b, a)),
            depth: Some(1.0),
            stencil: None,
        });

        ctx.apply_pipeline(&self.pipeline);
        ctx.apply_bindings(&self.bindings);
        ctx.apply_uniforms(&shader::Uniforms {
            mvp: params.mvp,
            model_color: params.color,
        });
        ctx.draw(0, self.num_elements, 1);
        ctx.end_render_pass();
    }

    fn log_state(&self) {
        let anim = &self.animation;
        let [r, g, b] = anim.color();
        debug!(
            "counter {}, color mode {}, color ({:.3}, {:.3}, {:.3}), model scale {:.3}",
            anim.counter(),
            anim.color_mode(),
            r,
            g,
            b,
            animation::uniform_scale(anim.model())
        );
    }
}

enum Scene {
    Clear([f32; 4]),
    Blink { blinker: Blinker, color: [f32; 4] },
    Polyhedron(Polyhedron),
}

impl Scene {
    fn tick(&mut self) {
        match self {
            Scene::Clear(_) => (),
            Scene::Blink { blinker, color } => *color = blinker.tick(),
            Scene::Polyhedron(p) => {
                p.animation.tick();
            }
        }
    }

    fn draw(&self, ctx: &mut Context) {
        match self {
            Scene::Clear(color) | Scene::Blink { color, .. } => {
                let [r, g, b, a] = *color;
                ctx.begin_default_pass(PassAction::clear_color(r, g, b, a));
                ctx.end_render_pass();
            }
            Scene::Polyhedron(p) => p.draw(ctx),
        }
    }
}

struct Stage {
    scene: Scene,
    controls: Controls,

    last_frame: Instant,
    frame_count: usize,
    accumulate_time: u128,
}

impl Stage {
    pub fn new(ctx: &mut Context, config: &LabConfig) -> Result<Stage> {
        let scene = match config.lab {
            Lab::Empty => Scene::Clear(EMPTY_CLEAR),
            Lab::Hello => Scene::Blink {
                blinker: Blinker::default(),
                // update runs before the first draw and flips the toggle
                color: animation::DARK,
            },
            Lab::Polyhedron => Scene::Polyhedron(Polyhedron::new(ctx, config)?),
        };

        Ok(Stage {
            scene,
            controls: Controls::new(),
            last_frame: Instant::now(),
            frame_count: 0,
            accumulate_time: 0,
        })
    }
}

impl EventHandler for Stage {
    fn update(&mut self, ctx: &mut Context) {
        match self.controls.begin_frame() {
            FrameAction::Quit => {
                info!("quit requested");
                ctx.quit();
                return;
            }
            FrameAction::Tick => (),
        }

        let start = Instant::now();

        self.scene.tick();

        self.frame_count += 1;
        self.accumulate_time += self.last_frame.elapsed().as_micros();
        if self.frame_count % STATS_EVERY == 0 {
            let per_frame = (self.accumulate_time / STATS_EVERY as u128).max(1);
            debug!(
                "fps: {}, time to update: {}us",
                1_000_000 / per_frame,
                start.elapsed().as_micros()
            );
            self.accumulate_time = 0;
            if let Scene::Polyhedron(p) = &self.scene {
                p.log_state();
            }
        }
        self.last_frame = Instant::now();
    }

    fn resize_event(&mut self, _ctx: &mut Context, width: f32, height: f32) {
        debug!("framebuffer resized to {}x{}", width, height);
    }

    fn key_down_event(&mut self, _: &mut Context, keycode: KeyCode, _: KeyMods, _: bool) {
        self.controls.key_down(keycode);
    }

    fn draw(&mut self, ctx: &mut Context) {
        self.scene.draw(ctx);
        ctx.commit_frame();
    }
}

fn main() -> Result<()> {
    let config = LabConfig::from_args(std::env::args().skip(1))?;

    init_logging(LoggingConfig {
        env_filter: config.log_filter.clone(),
        color: config.log_color,
    });
    info!(
        "starting {:?} lab in a {}x{} window ({:?})",
        config.lab, config.width, config.height, config.render_mode
    );

    miniquad::start(
        conf::Conf {
            window_title: config.lab.title().to_string(),
            window_width: config.width as i32,
            window_height: config.height as i32,
            high_dpi: true,
            ..Default::default()
        },
        move |ctx| match Stage::new(ctx, &config) {
            Ok(stage) => Box::new(stage),
            Err(e) => {
                error!("{:#}", e);
                std::process::exit(1);
            }
        },
    );

    Ok(())
}
