//! Per-entity shader component.
//!
//! Each entity owns its uniform values, so changing one entity's dissolve
//! amount never touches another entity sharing the same shader.

use bevy_ecs::prelude::Component;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// A value that can be bound to a shader uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Float(f32),
}

/// Component that attaches a shader (material instance) to an individual entity.
///
/// # Example
/// ```ignore
/// let mut shader = EntityShader::new("dissolve");
/// shader.set_float("_DissolveAmount", 0.0);
/// ```
#[derive(Component, Clone, Debug)]
pub struct EntityShader {
    /// Key referencing the shader program.
    pub shader_key: Arc<str>,
    /// Per-entity uniform values.
    pub uniforms: FxHashMap<Arc<str>, UniformValue>,
}

impl EntityShader {
    /// Create a new EntityShader with the given shader key and no uniforms.
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self {
            shader_key: key.into(),
            uniforms: FxHashMap::default(),
        }
    }

    pub fn set_float(&mut self, name: &str, value: f32) {
        self.uniforms.insert(Arc::from(name), UniformValue::Float(value));
    }

    pub fn get_float(&self, name: &str) -> Option<f32> {
        self.uniforms
            .get(name)
            .map(|UniformValue::Float(v)| *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_float_overwrites() {
        let mut shader = EntityShader::new("dissolve");
        shader.set_float("_DissolveAmount", 0.0);
        shader.set_float("_DissolveAmount", -0.5);
        assert_eq!(shader.get_float("_DissolveAmount"), Some(-0.5));
        assert_eq!(shader.uniforms.len(), 1);
        assert_eq!(shader.get_float("missing"), None);
    }
}
