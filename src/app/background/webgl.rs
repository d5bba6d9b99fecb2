use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGlBuffer, WebGlProgram, WebGlRenderingContext as Gl, WebGlShader,
    WebGlUniformLocation,
};

use crate::device::RenderError;
use crate::particles::{view_projection, Starfield};

const VERTEX_SHADER: &str = r#"
attribute vec3 position;
uniform mat4 mvp;

void main() {
    gl_Position = mvp * vec4(position, 1.0);
    gl_PointSize = 2.0;
}
"#;

// #3b82f6 at 60%
const FRAGMENT_SHADER: &str = r#"
precision mediump float;

void main() {
    gl_FragColor = vec4(0.231, 0.510, 0.965, 0.6);
}
"#;

/// A WebGL 1 context for `canvas`, trying the prefixed name as well.
pub fn context(canvas: &HtmlCanvasElement) -> Result<Option<Gl>, RenderError> {
    for name in ["webgl", "experimental-webgl"] {
        let ctx = canvas
            .get_context(name)
            .map_err(|e| RenderError::Acquire(format!("{e:?}")))?;
        if let Some(ctx) = ctx {
            return ctx
                .dyn_into::<Gl>()
                .map(Some)
                .map_err(|_| RenderError::Acquire(format!("{name} returned a foreign context")));
        }
    }
    Ok(None)
}

/// Owns the GL objects for one mounted canvas. Dropping it releases them.
pub struct StarfieldRenderer {
    gl: Gl,
    canvas: HtmlCanvasElement,
    program: WebGlProgram,
    buffer: WebGlBuffer,
    mvp: WebGlUniformLocation,
    count: i32,
}

impl StarfieldRenderer {
    pub fn new(canvas: HtmlCanvasElement, field: &Starfield) -> Result<Self, RenderError> {
        let gl = context(&canvas)?.ok_or(RenderError::Unavailable)?;

        let vertex = compile(&gl, Gl::VERTEX_SHADER, VERTEX_SHADER)?;
        let fragment = match compile(&gl, Gl::FRAGMENT_SHADER, FRAGMENT_SHADER) {
            Ok(shader) => shader,
            Err(e) => {
                gl.delete_shader(Some(&vertex));
                return Err(e);
            }
        };
        let program = link(&gl, &vertex, &fragment);
        gl.delete_shader(Some(&vertex));
        gl.delete_shader(Some(&fragment));
        let program = program?;

        let Some(mvp) = gl.get_uniform_location(&program, "mvp") else {
            gl.delete_program(Some(&program));
            return Err(RenderError::Resource("mvp uniform"));
        };
        let Some(buffer) = gl.create_buffer() else {
            gl.delete_program(Some(&program));
            return Err(RenderError::Resource("vertex buffer"));
        };

        let renderer = Self {
            gl,
            canvas,
            program,
            buffer,
            mvp,
            count: field.len() as i32,
        };
        renderer.upload(field)?;
        Ok(renderer)
    }

    fn upload(&self, field: &Starfield) -> Result<(), RenderError> {
        let gl = &self.gl;
        gl.use_program(Some(&self.program));
        gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&self.buffer));
        let data = js_sys::Float32Array::from(field.positions());
        gl.buffer_data_with_array_buffer_view(Gl::ARRAY_BUFFER, &data, Gl::STATIC_DRAW);

        let position = gl.get_attrib_location(&self.program, "position");
        if position < 0 {
            return Err(RenderError::Resource("position attribute"));
        }
        gl.vertex_attrib_pointer_with_i32(position as u32, 3, Gl::FLOAT, false, 0, 0);
        gl.enable_vertex_attrib_array(position as u32);

        gl.enable(Gl::BLEND);
        gl.blend_func(Gl::SRC_ALPHA, Gl::ONE_MINUS_SRC_ALPHA);
        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        Ok(())
    }

    /// Draws one frame `elapsed_secs` after the field was mounted.
    pub fn draw(&self, elapsed_secs: f64) -> Result<(), RenderError> {
        let gl = &self.gl;
        if gl.is_context_lost() {
            return Err(RenderError::ContextLost);
        }

        let (width, height) = self.fit_canvas();
        gl.viewport(0, 0, width as i32, height as i32);
        gl.clear(Gl::COLOR_BUFFER_BIT);

        let matrix = view_projection(elapsed_secs, width as f32 / height as f32);
        gl.uniform_matrix4fv_with_f32_array(Some(&self.mvp), false, &matrix);
        gl.draw_arrays(Gl::POINTS, 0, self.count);

        match gl.get_error() {
            Gl::NO_ERROR => Ok(()),
            code => Err(RenderError::Draw(code)),
        }
    }

    // Keeps the drawing buffer at the displayed size.
    fn fit_canvas(&self) -> (u32, u32) {
        let width = self.canvas.client_width().max(1) as u32;
        let height = self.canvas.client_height().max(1) as u32;
        if self.canvas.width() != width {
            self.canvas.set_width(width);
        }
        if self.canvas.height() != height {
            self.canvas.set_height(height);
        }
        (width, height)
    }
}

impl Drop for StarfieldRenderer {
    fn drop(&mut self) {
        self.gl.delete_buffer(Some(&self.buffer));
        self.gl.delete_program(Some(&self.program));
    }
}

fn compile(gl: &Gl, kind: u32, source: &str) -> Result<WebGlShader, RenderError> {
    let shader = gl
        .create_shader(kind)
        .ok_or(RenderError::Resource("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(RenderError::Shader(log))
    }
}

fn link(gl: &Gl, vertex: &WebGlShader, fragment: &WebGlShader) -> Result<WebGlProgram, RenderError> {
    let program = gl
        .create_program()
        .ok_or(RenderError::Resource("program"))?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, Gl::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(RenderError::Link(log))
    }
}
