//! Surface materials.
//!
//! The intersection code never looks inside a material, it only carries a
//! shared handle from the primitive into the hit record. Renderers query the
//! material afterwards with the completed record.

use crate::{
    textures::{SolidColor, Texture},
    Color, HitRecord,
};
use glam::Vec3;
use std::sync::Arc;

#[derive(Debug)]
pub enum Material {
    /// Diffuse surface colored by a texture
    Lambertian { albedo: Arc<dyn Texture> },
    /// Light source, reflects nothing
    Emissive { emit: Arc<dyn Texture> },
}

impl Material {
    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian {
            albedo: Arc::new(SolidColor::new(albedo)),
        }
    }

    pub fn emissive(emit: Color) -> Self {
        Material::Emissive {
            emit: Arc::new(SolidColor::new(emit)),
        }
    }

    /// Reflectance at the hit point
    pub fn albedo(&self, rec: &HitRecord) -> Color {
        match self {
            Material::Lambertian { albedo } => albedo.value(rec.u, rec.v, rec.p),
            Material::Emissive { .. } => Vec3::ZERO,
        }
    }

    /// Light given off at the hit point
    pub fn emitted(&self, rec: &HitRecord) -> Color {
        match self {
            Material::Lambertian { .. } => Vec3::ZERO,
            Material::Emissive { emit } => emit.value(rec.u, rec.v, rec.p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{textures::CheckerTexture, Ray};
    use glam::vec3;

    fn record(material: Arc<Material>, p: Vec3) -> HitRecord {
        let ray = Ray::new(p - Vec3::Z, Vec3::Z);
        HitRecord::new(ray, 1.0, -Vec3::Z, (0.25, 0.75), material)
    }

    #[test]
    fn lambertian_reads_texture_at_hit() {
        let checker = CheckerTexture::from_colors(1.0, Vec3::ONE, Vec3::ZERO);
        let material = Arc::new(Material::Lambertian {
            albedo: Arc::new(checker),
        });

        let even = record(material.clone(), vec3(0.5, 0.5, 0.5));
        assert_eq!(material.albedo(&even), Vec3::ONE);
        assert_eq!(material.emitted(&even), Vec3::ZERO);

        let odd = record(material.clone(), vec3(1.5, 0.5, 0.5));
        assert_eq!(material.albedo(&odd), Vec3::ZERO);
    }

    #[test]
    fn emissive_only_emits() {
        let material = Arc::new(Material::emissive(vec3(4.0, 4.0, 4.0)));
        let rec = record(material.clone(), Vec3::ZERO);
        assert_eq!(material.emitted(&rec), vec3(4.0, 4.0, 4.0));
        assert_eq!(material.albedo(&rec), Vec3::ZERO);
    }
}
