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

//! Defines the error types for the rendering subsystem.

use std::fmt;

/// The programmable stage a shader source belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// The vertex stage.
    Vertex,
    /// The fragment stage.
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// An error related to the creation or compilation of a shader program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderError {
    /// The backend could not allocate a shader or program object.
    CreationFailed {
        /// The name of the shader program.
        name: String,
        /// The message reported by the backend.
        details: String,
    },
    /// One stage failed to compile.
    CompilationFailed {
        /// The name of the shader program.
        name: String,
        /// The stage that failed.
        stage: ShaderStage,
        /// The compiler info log.
        log: String,
    },
    /// The compiled stages failed to link into a program.
    LinkFailed {
        /// The name of the shader program.
        name: String,
        /// The linker info log.
        log: String,
    },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::CreationFailed { name, details } => {
                write!(f, "Failed to create shader '{name}': {details}")
            }
            ShaderError::CompilationFailed { name, stage, log } => {
                write!(f, "Shader compilation failed for '{name}' ({stage} stage): {log}")
            }
            ShaderError::LinkFailed { name, log } => {
                write!(f, "Shader link failed for '{name}': {log}")
            }
        }
    }
}

impl std::error::Error for ShaderError {}

/// An error related to the creation or use of a GPU resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A shader-specific error occurred.
    Shader(ShaderError),
    /// The backend failed to allocate a resource.
    ResourceCreation {
        /// The kind of resource that was being created.
        resource: &'static str,
        /// The message reported by the backend.
        details: String,
    },
    /// A vertex buffer without a layout was attached to a vertex array.
    EmptyLayout,
    /// An error originating from the specific graphics backend implementation.
    BackendError(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Shader(err) => write!(f, "Shader resource error: {err}"),
            RenderError::ResourceCreation { resource, details } => {
                write!(f, "Failed to create {resource}: {details}")
            }
            RenderError::EmptyLayout => {
                write!(f, "Vertex buffer has no layout; set one before adding it")
            }
            RenderError::BackendError(msg) => write!(f, "Backend-specific error: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Shader(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ShaderError> for RenderError {
    fn from(err: ShaderError) -> Self {
        RenderError::Shader(err)
    }
}
