use pathtracer::{config::SceneConfig, render, Interval, Intersect, Ray, Scene};
use glam::{vec3, Vec3};
use image::Rgb;
use std::path::Path;

const SCENE: &str = r#"
    [image]
    width = 24
    height = 16
    samples_per_pixel = 4

    [camera]
    look_from = [0.0, 0.0, -5.0]
    look_at = [0.0, 0.0, 0.0]
    vfov = 60.0

    [materials.white]
    kind = "lambertian"
    texture = { kind = "solid", color = [1.0, 1.0, 1.0] }

    [materials.light]
    kind = "emissive"
    texture = { kind = "solid", color = [0.0, 1.0, 0.0] }

    [[primitives]]
    kind = "sphere"
    center = [0.0, 0.0, 0.0]
    radius = 1.0
    material = "white"

    [[primitives]]
    kind = "quad"
    q = [-10.0, -10.0, 3.0]
    u = [20.0, 0.0, 0.0]
    v = [0.0, 20.0, 0.0]
    material = "light"
"#;

fn scene() -> Scene {
    let config = SceneConfig::parse(SCENE).unwrap();
    Scene::from_config(&config, Path::new(".")).unwrap()
}

#[test]
fn sphere_in_front_of_backdrop() {
    let scene = scene();
    let ray_t = Interval::new(0.001, f32::INFINITY);

    let hit = scene
        .world
        .intersection(Ray::new(vec3(0.0, 0.0, -5.0), Vec3::Z), ray_t)
        .unwrap();
    assert!((hit.t - 4.0).abs() < 1e-5);
    assert!(hit.front_face);

    let hit = scene
        .world
        .intersection(Ray::new(vec3(3.0, 3.0, -5.0), Vec3::Z), ray_t)
        .unwrap();
    assert!((hit.t - 8.0).abs() < 1e-5);
    assert!(hit.p.abs_diff_eq(vec3(3.0, 3.0, 3.0), 1e-5));
}

#[test]
fn render_is_deterministic_per_seed() {
    let scene = scene();
    let a = render::render(&scene, 42);
    let b = render::render(&scene, 42);

    assert_eq!(a.dimensions(), (24, 16));
    assert_eq!(a.as_raw(), b.as_raw());
}

#[test]
fn render_shows_sphere_over_backdrop() {
    let scene = scene();
    let image = render::render(&scene, 1);

    // Center of the frame is the white sphere facing the camera
    let Rgb([r, g, b]) = *image.get_pixel(12, 8);
    assert!(r > 200 && g > 200 && b > 200, "{:?}", (r, g, b));

    // Corners only see the green emissive backdrop
    for (x, y) in [(0, 0), (23, 0), (0, 15), (23, 15)] {
        assert_eq!(*image.get_pixel(x, y), Rgb([0, 255, 0]));
    }
}

#[test]
fn bundled_scenes_build() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenes");
    for name in ["quads.toml", "spheres.toml"] {
        let scene = Scene::load(root.join(name)).unwrap();
        assert!(!scene.world.is_empty());
    }
}
