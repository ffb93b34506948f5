// Thin WebGL2 helpers: programs, meshes, and the shadow depth target.
use web_sys::{
    WebGl2RenderingContext as GL, WebGlFramebuffer, WebGlProgram, WebGlShader, WebGlTexture,
    WebGlUniformLocation, WebGlVertexArrayObject,
};

use super::mesh::MeshData;
use crate::error::{LandingError, Result};

pub const POSITION_ATTRIB: u32 = 0;

fn compile(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader> {
    let shader = gl
        .create_shader(kind)
        .ok_or(LandingError::Allocation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let info = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(LandingError::ShaderCompile(info))
    }
}

pub fn link_program(gl: &GL, vertex: &str, fragment: &str) -> Result<WebGlProgram> {
    let vs = compile(gl, GL::VERTEX_SHADER, vertex)?;
    let fs = compile(gl, GL::FRAGMENT_SHADER, fragment)?;
    let program = gl
        .create_program()
        .ok_or(LandingError::Allocation("program"))?;
    gl.attach_shader(&program, &vs);
    gl.attach_shader(&program, &fs);
    gl.bind_attrib_location(&program, POSITION_ATTRIB, "a_position");
    gl.link_program(&program);
    // shaders are owned by the program once linked
    gl.delete_shader(Some(&vs));
    gl.delete_shader(Some(&fs));
    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let info = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(LandingError::ProgramLink(info))
    }
}

pub fn uniform(gl: &GL, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
    let loc = gl.get_uniform_location(program, name);
    if loc.is_none() {
        log::debug!("uniform {name} is inactive");
    }
    loc
}

/// Indexed triangles uploaded to a vertex array.
pub struct GpuMesh {
    vao: WebGlVertexArrayObject,
    index_count: i32,
}

impl GpuMesh {
    pub fn upload(gl: &GL, mesh: &MeshData) -> Result<Self> {
        let vao = gl
            .create_vertex_array()
            .ok_or(LandingError::Allocation("vertex array"))?;
        gl.bind_vertex_array(Some(&vao));

        let positions = gl
            .create_buffer()
            .ok_or(LandingError::Allocation("vertex buffer"))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&positions));
        let data = js_sys::Float32Array::from(mesh.positions.as_slice());
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &data, GL::STATIC_DRAW);
        gl.enable_vertex_attrib_array(POSITION_ATTRIB);
        gl.vertex_attrib_pointer_with_i32(POSITION_ATTRIB, 3, GL::FLOAT, false, 0, 0);

        let indices = gl
            .create_buffer()
            .ok_or(LandingError::Allocation("index buffer"))?;
        gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&indices));
        let data = js_sys::Uint16Array::from(mesh.indices.as_slice());
        gl.buffer_data_with_array_buffer_view(GL::ELEMENT_ARRAY_BUFFER, &data, GL::STATIC_DRAW);

        gl.bind_vertex_array(None);
        Ok(Self {
            vao,
            index_count: mesh.indices.len() as i32,
        })
    }

    pub fn draw(&self, gl: &GL) {
        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_elements_with_i32(GL::TRIANGLES, self.index_count, GL::UNSIGNED_SHORT, 0);
        gl.bind_vertex_array(None);
    }
}

/// Square depth texture rendered from the light.
pub struct ShadowTarget {
    pub framebuffer: WebGlFramebuffer,
    pub texture: WebGlTexture,
    pub size: i32,
}

impl ShadowTarget {
    pub fn new(gl: &GL, requested: u32) -> Result<Self> {
        let max = gl
            .get_parameter(GL::MAX_TEXTURE_SIZE)?
            .as_f64()
            .map_or(requested, |m| m as u32);
        let size = requested.min(max) as i32;
        if size < requested as i32 {
            log::info!("shadow map clamped from {requested} to {size}");
        }

        let texture = gl
            .create_texture()
            .ok_or(LandingError::Allocation("shadow texture"))?;
        gl.bind_texture(GL::TEXTURE_2D, Some(&texture));
        gl.tex_storage_2d(GL::TEXTURE_2D, 1, GL::DEPTH_COMPONENT24, size, size);
        for (pname, value) in [
            (GL::TEXTURE_MIN_FILTER, GL::NEAREST),
            (GL::TEXTURE_MAG_FILTER, GL::NEAREST),
            (GL::TEXTURE_WRAP_S, GL::CLAMP_TO_EDGE),
            (GL::TEXTURE_WRAP_T, GL::CLAMP_TO_EDGE),
        ] {
            gl.tex_parameteri(GL::TEXTURE_2D, pname, value as i32);
        }
        gl.bind_texture(GL::TEXTURE_2D, None);

        let framebuffer = gl
            .create_framebuffer()
            .ok_or(LandingError::Allocation("shadow framebuffer"))?;
        gl.bind_framebuffer(GL::FRAMEBUFFER, Some(&framebuffer));
        gl.framebuffer_texture_2d(
            GL::FRAMEBUFFER,
            GL::DEPTH_ATTACHMENT,
            GL::TEXTURE_2D,
            Some(&texture),
            0,
        );
        let status = gl.check_framebuffer_status(GL::FRAMEBUFFER);
        gl.bind_framebuffer(GL::FRAMEBUFFER, None);
        if status != GL::FRAMEBUFFER_COMPLETE {
            return Err(LandingError::IncompleteFramebuffer(status));
        }
        Ok(Self {
            framebuffer,
            texture,
            size,
        })
    }
}
