use miniquad::*;

pub const VERTEX: &str = r#"#version 100
  attribute vec3 pos;

  uniform mat4 mvp;

  void main() {
      gl_Position = mvp * vec4(pos, 1.0);
  }
  "#;

pub const FRAGMENT: &str = r#"#version 100
  uniform lowp vec4 model_color;

  void main() {
      gl_FragColor = model_color;
  }
  "#;

pub fn meta() -> ShaderMeta {
    ShaderMeta {
        images: vec![],
        uniforms: UniformBlockLayout {
            uniforms: vec![
                UniformDesc::new("mvp", UniformType::Mat4),
                UniformDesc::new("model_color", UniformType::Float4),
            ],
        },
    }
}

#[repr(C)]
pub struct Uniforms {
    pub mvp: glam::Mat4,
    pub model_color: [f32; 4],
}
