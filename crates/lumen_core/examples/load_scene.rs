//! Example: Load a scene document and fire the center ray at a unit sphere.
//!
//! Run with: cargo run --example load_scene -- crates/lumen_core/assets/simple_camera.json

use std::env;

use anyhow::{bail, Context, Result};
use lumen_core::load_scene;
use lumen_math::{solve_quadratic, IntersectionInfo, Normal3, Point3, Ray3, Vector3};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: load_scene <path-to-scene-json>");
        println!("\nExample:");
        println!("  cargo run --example load_scene -- crates/lumen_core/assets/simple_camera.json");
        return Ok(());
    }

    let path = &args[1];
    let scene = load_scene(path).with_context(|| format!("loading {}", path))?;

    println!("\n=== Scene: {} ===", scene.name);
    println!("Resolution: {}x{}", scene.width(), scene.height());
    println!("Camera position: {}", scene.camera_position());
    println!("\n{}", scene.camera);

    // Camera looks down its local +Z axis
    let center_ray = scene.camera * Ray3::new(Point3::ORIGIN, Vector3::Z);
    println!("\nCenter ray: {}", center_ray);

    let oc = Vector3::from(center_ray.origin());
    let direction = center_ray.direction();
    let Some(roots) = solve_quadratic(
        direction.dot(direction),
        2.0 * oc.dot(direction),
        oc.dot(oc) - 1.0,
    )?
    else {
        bail!("center ray misses the unit sphere at the origin");
    };

    let mut nearest = IntersectionInfo::default();
    for t in [roots.t0, roots.t1] {
        if t > 0.0 {
            let p = center_ray.at(t);
            nearest.update_with_new_intersection(&IntersectionInfo::new(
                p,
                Normal3::from(Vector3::from(p)),
                t,
            ));
        }
    }

    if nearest.is_intersecting() {
        println!(
            "Hit unit sphere at {} (t = {:.3}), normal {}",
            nearest.point(),
            nearest.time(),
            nearest.normal()
        );
    } else {
        println!("Unit sphere is behind the camera");
    }

    Ok(())
}
