// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use glow::HasContext;
use std::fmt;
use std::sync::Arc;
use strata_core::renderer::{Shader, ShaderError, ShaderStage};

/// A linked GL program built from a vertex and a fragment stage.
pub struct OpenGlShader {
    gl: Arc<glow::Context>,
    program: glow::Program,
    name: String,
}

impl OpenGlShader {
    /// Compiles both stages and links them into a program.
    ///
    /// # Errors
    /// Returns the driver's info log in a [`ShaderError`] if a stage fails to
    /// compile or the program fails to link. No GL object leaks on failure.
    pub fn new(
        gl: Arc<glow::Context>,
        name: &str,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<Self, ShaderError> {
        let vertex = compile_stage(&gl, name, ShaderStage::Vertex, vertex_src)?;
        let fragment = match compile_stage(&gl, name, ShaderStage::Fragment, fragment_src) {
            Ok(fragment) => fragment,
            Err(e) => {
                unsafe { gl.delete_shader(vertex) };
                return Err(e);
            }
        };

        // SAFETY: both stages were created on this context above.
        let linked = match unsafe { gl.create_program() } {
            Ok(program) => program,
            Err(details) => {
                unsafe {
                    gl.delete_shader(vertex);
                    gl.delete_shader(fragment);
                }
                return Err(ShaderError::CreationFailed {
                    name: name.to_owned(),
                    details,
                });
            }
        };
        unsafe {
            gl.attach_shader(linked, vertex);
            gl.attach_shader(linked, fragment);
            gl.link_program(linked);
            gl.detach_shader(linked, vertex);
            gl.detach_shader(linked, fragment);
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);
        }

        if !unsafe { gl.get_program_link_status(linked) } {
            let log = unsafe { gl.get_program_info_log(linked) };
            unsafe { gl.delete_program(linked) };
            log::error!("Shader '{name}' failed to link:\n{log}");
            return Err(ShaderError::LinkFailed {
                name: name.to_owned(),
                log,
            });
        }

        log::debug!("Shader '{name}' linked.");
        Ok(Self {
            gl,
            program: linked,
            name: name.to_owned(),
        })
    }
}

fn compile_stage(
    gl: &glow::Context,
    name: &str,
    stage: ShaderStage,
    source: &str,
) -> Result<glow::Shader, ShaderError> {
    let kind = match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    };
    // SAFETY: plain GL calls on the current context.
    unsafe {
        let shader = gl
            .create_shader(kind)
            .map_err(|details| ShaderError::CreationFailed {
                name: name.to_owned(),
                details,
            })?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            log::error!("{stage} shader of '{name}' failed to compile:\n{log}");
            return Err(ShaderError::CompilationFailed {
                name: name.to_owned(),
                stage,
                log,
            });
        }
        Ok(shader)
    }
}

impl Shader for OpenGlShader {
    fn bind(&self) {
        unsafe { self.gl.use_program(Some(self.program)) }
    }

    fn unbind(&self) {
        unsafe { self.gl.use_program(None) }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for OpenGlShader {
    fn drop(&mut self) {
        unsafe { self.gl.delete_program(self.program) }
    }
}

impl fmt::Debug for OpenGlShader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenGlShader")
            .field("name", &self.name)
            .field("program", &self.program)
            .finish()
    }
}
