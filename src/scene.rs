use crate::{
    camera::Camera,
    config::{ImageConfig, MaterialConfig, PrimitiveConfig, SceneConfig, TextureConfig},
    material::Material,
    primitives::{Disk, Intersect, MovingSphere, Primitive, PrimitiveList, Quad, Sphere, Triangle},
    textures::{CheckerTexture, ImageTexture, SolidColor, Texture},
};
use anyhow::Context;
use std::{collections::HashMap, path::Path, sync::Arc};

/// Everything needed to render one image
pub struct Scene {
    pub camera: Camera,
    pub world: PrimitiveList,
    pub image: ImageConfig,
}

/// Materials by name, shared between every primitive that uses them
#[derive(Default)]
pub struct Materials {
    inner: HashMap<String, Arc<Material>>,
}

impl Materials {
    pub fn insert(&mut self, name: impl Into<String>, material: Material) {
        self.inner.insert(name.into(), Arc::new(material));
    }

    pub fn get(&self, name: &str) -> anyhow::Result<Arc<Material>> {
        self.inner
            .get(name)
            .cloned()
            .with_context(|| format!("Unknown material {:?}", name))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Scene {
    /// Reads and builds a scene. Image textures resolve next to the file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config = SceneConfig::load(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));

        Self::from_config(&config, base_dir)
    }

    pub fn from_config(config: &SceneConfig, base_dir: &Path) -> anyhow::Result<Self> {
        config.validate()?;

        let mut materials = Materials::default();
        for (name, material) in &config.materials {
            let material = build_material(material, base_dir)
                .with_context(|| format!("Failed to build material {:?}", name))?;
            materials.insert(name.as_str(), material);
        }

        let world = config
            .primitives
            .iter()
            .map(|primitive| build_primitive(primitive, &materials))
            .collect::<anyhow::Result<PrimitiveList>>()?;

        let camera = Camera::new(
            config.camera.look_from,
            config.camera.look_at,
            config.camera.vup,
            config.camera.vfov,
            config.image.aspect_ratio(),
            config.camera.aperture,
            config.camera.focus_dist,
        );

        let bounds = world.bounds();
        log::info!(
            "Built scene with {} primitives and {} materials, bounds {:?} to {:?}",
            world.len(),
            materials.len(),
            bounds.min(),
            bounds.max()
        );

        Ok(Self {
            camera,
            world,
            image: config.image.clone(),
        })
    }
}

fn build_texture(config: &TextureConfig, base_dir: &Path) -> anyhow::Result<Arc<dyn Texture>> {
    Ok(match config {
        TextureConfig::Solid { color } => Arc::new(SolidColor::new(*color)),
        TextureConfig::Checker { scale, even, odd } => Arc::new(CheckerTexture::new(
            *scale,
            build_texture(even, base_dir)?,
            build_texture(odd, base_dir)?,
        )),
        TextureConfig::Image { path } => Arc::new(ImageTexture::open(base_dir.join(path))?),
    })
}

fn build_material(config: &MaterialConfig, base_dir: &Path) -> anyhow::Result<Material> {
    Ok(match config {
        MaterialConfig::Lambertian { texture } => Material::Lambertian {
            albedo: build_texture(texture, base_dir)?,
        },
        MaterialConfig::Emissive { texture } => Material::Emissive {
            emit: build_texture(texture, base_dir)?,
        },
    })
}

fn build_primitive(config: &PrimitiveConfig, materials: &Materials) -> anyhow::Result<Primitive> {
    let material = materials.get(config.material())?;

    Ok(match *config {
        PrimitiveConfig::Sphere { center, radius, .. } => {
            Sphere::new(center, radius, material).into()
        }
        PrimitiveConfig::MovingSphere {
            start, end, radius, ..
        } => MovingSphere::new(start, end, radius, material).into(),
        PrimitiveConfig::Quad { q, u, v, .. } => Quad::new(q, u, v, material).into(),
        PrimitiveConfig::Triangle { q, u, v, .. } => Triangle::new(q, u, v, material).into(),
        PrimitiveConfig::Disk { center, u, v, .. } => Disk::new(center, u, v, material).into(),
    })
}
