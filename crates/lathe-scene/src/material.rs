//! Phong material state and the named presets.

use lathe_math::DVec4;
use serde::{Deserialize, Serialize};

/// White light, also the default specular base color.
pub const LIGHT_COLOR: DVec4 = DVec4::new(1.0, 1.0, 1.0, 1.0);

/// Reflectance coefficients, base colors, and shininess for the lit surface
/// pass. A preset replaces every field at once; the renderer-facing products
/// are derived on demand so they can never go stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub ambient_coeff: f64,
    pub diffuse_coeff: f64,
    pub specular_coeff: f64,
    pub shininess: f64,
    pub ambient_color: DVec4,
    pub diffuse_color: DVec4,
    pub specular_color: DVec4,
}

/// Per-channel coefficient-times-color products, as the shader consumes them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProducts {
    pub ambient: DVec4,
    pub diffuse: DVec4,
    pub specular: DVec4,
}

impl Material {
    pub fn yellow_plastic() -> Self {
        let yellow = DVec4::new(1.0, 1.0, 0.0, 1.0);
        Self {
            ambient_coeff: 0.6,
            diffuse_coeff: 0.33,
            specular_coeff: 0.6,
            shininess: 45.0,
            ambient_color: yellow,
            diffuse_color: yellow,
            specular_color: yellow,
        }
    }

    pub fn brass_metal() -> Self {
        Self {
            ambient_coeff: 0.06,
            diffuse_coeff: 0.2,
            specular_coeff: 0.75,
            shininess: 45.0,
            ambient_color: DVec4::new(0.545, 0.271, 0.075, 1.0),
            diffuse_color: DVec4::new(167.0 / 255.0, 135.0 / 255.0, 20.0 / 255.0, 1.0),
            specular_color: LIGHT_COLOR,
        }
    }

    /// Derived ambient/diffuse/specular products.
    pub fn products(&self) -> MaterialProducts {
        MaterialProducts {
            ambient: self.ambient_coeff * self.ambient_color,
            diffuse: self.diffuse_coeff * self.diffuse_color,
            specular: self.specular_coeff * self.specular_color,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient_coeff: 0.1,
            diffuse_coeff: 0.5,
            specular_coeff: 0.85,
            shininess: 30.0,
            ambient_color: DVec4::new(0.8, 0.2, 0.7, 0.0),
            diffuse_color: DVec4::new(0.7, 0.5, 0.5, 0.0),
            specular_color: LIGHT_COLOR,
        }
    }
}
