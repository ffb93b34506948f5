//! Two-pass WebGL2 renderer for the hero scene.
//!
//! Pass one renders shadow casters into a depth texture from the light. Pass
//! two draws the scene from the camera; the shadow catcher samples the depth
//! texture with a 3x3 PCF kernel and only shows up where it is shadowed.

use glam::Mat4;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlProgram, WebGlUniformLocation};

use super::gl::{GpuMesh, ShadowTarget, link_program, uniform};
use super::scene::{Material, SceneObject};
use crate::config::LightConfig;
use crate::error::{LandingError, Result};
use crate::state::{CameraPose, Lens};

const DEPTH_VS: &str = r#"#version 300 es
layout(location = 0) in vec3 a_position;
uniform mat4 u_light_view_proj;
uniform mat4 u_model;
void main() {
    gl_Position = u_light_view_proj * u_model * vec4(a_position, 1.0);
}
"#;

const DEPTH_FS: &str = r#"#version 300 es
precision mediump float;
void main() {}
"#;

const SCENE_VS: &str = r#"#version 300 es
layout(location = 0) in vec3 a_position;
uniform mat4 u_view_proj;
uniform mat4 u_model;
uniform mat4 u_light_view_proj;
out vec4 v_light_clip;
void main() {
    vec4 world = u_model * vec4(a_position, 1.0);
    v_light_clip = u_light_view_proj * world;
    gl_Position = u_view_proj * world;
}
"#;

const SCENE_FS: &str = r#"#version 300 es
precision highp float;
uniform vec3 u_color;
uniform float u_opacity;
uniform int u_shadow_catcher;
uniform highp sampler2D u_shadow_map;
uniform float u_bias;
uniform float u_texel;
in vec4 v_light_clip;
out vec4 out_color;

float shadowed() {
    vec3 p = v_light_clip.xyz / v_light_clip.w * 0.5 + 0.5;
    if (p.x < 0.0 || p.x > 1.0 || p.y < 0.0 || p.y > 1.0 || p.z > 1.0) {
        return 0.0;
    }
    float sum = 0.0;
    for (int x = -1; x <= 1; x++) {
        for (int y = -1; y <= 1; y++) {
            float closest = texture(u_shadow_map, p.xy + vec2(x, y) * u_texel).r;
            sum += p.z - u_bias > closest ? 1.0 : 0.0;
        }
    }
    return sum / 9.0;
}

void main() {
    float alpha = u_shadow_catcher == 1 ? u_opacity * shadowed() : u_opacity;
    out_color = vec4(u_color, alpha);
}
"#;

struct DepthProgram {
    program: WebGlProgram,
    light_view_proj: Option<WebGlUniformLocation>,
    model: Option<WebGlUniformLocation>,
}

struct SceneProgram {
    program: WebGlProgram,
    view_proj: Option<WebGlUniformLocation>,
    model: Option<WebGlUniformLocation>,
    light_view_proj: Option<WebGlUniformLocation>,
    color: Option<WebGlUniformLocation>,
    opacity: Option<WebGlUniformLocation>,
    shadow_catcher: Option<WebGlUniformLocation>,
    shadow_map: Option<WebGlUniformLocation>,
    bias: Option<WebGlUniformLocation>,
    texel: Option<WebGlUniformLocation>,
}

struct GpuObject {
    mesh: GpuMesh,
    model: Mat4,
    color: glam::Vec3,
    material: Material,
    casts_shadow: bool,
}

/// Everything that changes from frame to frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView {
    pub camera: CameraPose,
    pub lens: Lens,
    pub light_view_proj: Mat4,
}

pub struct Renderer {
    gl: GL,
    depth: DepthProgram,
    scene: SceneProgram,
    shadow: ShadowTarget,
    objects: Vec<GpuObject>,
    shadow_bias: f32,
    width: i32,
    height: i32,
}

fn context(canvas: &HtmlCanvasElement) -> Result<GL> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"alpha".into(), &JsValue::TRUE)?;
    js_sys::Reflect::set(&options, &"antialias".into(), &JsValue::TRUE)?;
    let ctx = canvas
        .get_context_with_context_options("webgl2", &options)?
        .ok_or(LandingError::NoWebGl2)?;
    ctx.dyn_into::<GL>().map_err(|_| LandingError::NoWebGl2)
}

impl Renderer {
    pub fn new(canvas: &HtmlCanvasElement, objects: &[SceneObject], light: &LightConfig) -> Result<Self> {
        let gl = context(canvas)?;

        let program = link_program(&gl, DEPTH_VS, DEPTH_FS)?;
        let depth = DepthProgram {
            light_view_proj: uniform(&gl, &program, "u_light_view_proj"),
            model: uniform(&gl, &program, "u_model"),
            program,
        };
        let program = link_program(&gl, SCENE_VS, SCENE_FS)?;
        let scene = SceneProgram {
            view_proj: uniform(&gl, &program, "u_view_proj"),
            model: uniform(&gl, &program, "u_model"),
            light_view_proj: uniform(&gl, &program, "u_light_view_proj"),
            color: uniform(&gl, &program, "u_color"),
            opacity: uniform(&gl, &program, "u_opacity"),
            shadow_catcher: uniform(&gl, &program, "u_shadow_catcher"),
            shadow_map: uniform(&gl, &program, "u_shadow_map"),
            bias: uniform(&gl, &program, "u_bias"),
            texel: uniform(&gl, &program, "u_texel"),
            program,
        };

        let shadow = ShadowTarget::new(&gl, light.shadow_map_size)?;
        let objects = objects
            .iter()
            .map(|o| {
                Ok(GpuObject {
                    mesh: GpuMesh::upload(&gl, &o.mesh)?,
                    model: o.model,
                    color: o.color,
                    material: o.material,
                    casts_shadow: o.casts_shadow,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        gl.enable(GL::DEPTH_TEST);
        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        log::info!(
            "renderer ready: {} objects, shadow map {}px",
            objects.len(),
            shadow.size
        );
        Ok(Self {
            gl,
            depth,
            scene,
            shadow,
            objects,
            shadow_bias: light.shadow_bias,
            width: canvas.width() as i32,
            height: canvas.height() as i32,
        })
    }

    /// Drawing buffer size in device pixels.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as i32;
        self.height = height as i32;
    }

    pub fn render(&self, view: &FrameView) {
        self.shadow_pass(view);
        self.color_pass(view);
    }

    fn shadow_pass(&self, view: &FrameView) {
        let gl = &self.gl;
        gl.bind_framebuffer(GL::FRAMEBUFFER, Some(&self.shadow.framebuffer));
        gl.viewport(0, 0, self.shadow.size, self.shadow.size);
        gl.clear(GL::DEPTH_BUFFER_BIT);
        gl.use_program(Some(&self.depth.program));
        gl.uniform_matrix4fv_with_f32_array(
            self.depth.light_view_proj.as_ref(),
            false,
            &view.light_view_proj.to_cols_array(),
        );
        for obj in self.objects.iter().filter(|o| o.casts_shadow) {
            gl.uniform_matrix4fv_with_f32_array(
                self.depth.model.as_ref(),
                false,
                &obj.model.to_cols_array(),
            );
            obj.mesh.draw(gl);
        }
        gl.bind_framebuffer(GL::FRAMEBUFFER, None);
    }

    fn color_pass(&self, view: &FrameView) {
        let gl = &self.gl;
        let p = &self.scene;
        gl.viewport(0, 0, self.width, self.height);
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
        gl.use_program(Some(&p.program));

        let view_proj = view.lens.projection_matrix() * view.camera.view_matrix();
        gl.uniform_matrix4fv_with_f32_array(p.view_proj.as_ref(), false, &view_proj.to_cols_array());
        gl.uniform_matrix4fv_with_f32_array(
            p.light_view_proj.as_ref(),
            false,
            &view.light_view_proj.to_cols_array(),
        );
        gl.active_texture(GL::TEXTURE0);
        gl.bind_texture(GL::TEXTURE_2D, Some(&self.shadow.texture));
        gl.uniform1i(p.shadow_map.as_ref(), 0);
        gl.uniform1f(p.bias.as_ref(), self.shadow_bias);
        gl.uniform1f(p.texel.as_ref(), 1.0 / self.shadow.size as f32);

        for obj in &self.objects {
            gl.uniform_matrix4fv_with_f32_array(p.model.as_ref(), false, &obj.model.to_cols_array());
            gl.uniform3f(p.color.as_ref(), obj.color.x, obj.color.y, obj.color.z);
            match obj.material {
                Material::Unlit => {
                    gl.uniform1i(p.shadow_catcher.as_ref(), 0);
                    gl.uniform1f(p.opacity.as_ref(), 1.0);
                    obj.mesh.draw(gl);
                }
                Material::ShadowCatcher { opacity } => {
                    gl.uniform1i(p.shadow_catcher.as_ref(), 1);
                    gl.uniform1f(p.opacity.as_ref(), opacity);
                    gl.enable(GL::BLEND);
                    // keep the canvas opaque where the grounds are
                    gl.blend_func_separate(
                        GL::SRC_ALPHA,
                        GL::ONE_MINUS_SRC_ALPHA,
                        GL::ONE,
                        GL::ONE_MINUS_SRC_ALPHA,
                    );
                    gl.depth_mask(false);
                    obj.mesh.draw(gl);
                    gl.depth_mask(true);
                    gl.disable(GL::BLEND);
                }
            }
        }
        gl.bind_texture(GL::TEXTURE_2D, None);
    }
}
