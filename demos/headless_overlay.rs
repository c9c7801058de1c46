#![allow(clippy::cast_precision_loss)]
//! Headless walkthrough of the offscreen marker overlay.
//!
//! Spawns a ring of objects around an orbiting camera, runs a few frames and
//! prints the draw commands each frame produces. Run with
//! `RUST_LOG=debug cargo run --example headless_overlay` to see the per-frame
//! summaries and registry pruning.

use offscreen_markers::{
    init_logging, instance_bytes, pack_instances, Camera, CameraRig, DrawKind, OverlayEngine,
    Result, Scene, SceneObject, TextureId, TrackedMarker, Vec3, Vec4, Viewport,
};
use std::f32::consts::TAU;

const ICON: TextureId = TextureId(1);
const ARROW: TextureId = TextureId(2);

fn main() -> Result<()> {
    init_logging();

    let viewport = Viewport::new(1280.0, 720.0)?;
    let mut camera = Camera::new(viewport);
    camera.set_fov(std::f32::consts::FRAC_PI_3);
    let mut engine = OverlayEngine::new(CameraRig::new(camera));
    let mut scene = Scene::new();

    let colors = [
        Vec4::new(1.0, 0.2, 0.2, 1.0),
        Vec4::new(0.2, 1.0, 0.2, 1.0),
        Vec4::new(0.2, 0.4, 1.0, 1.0),
        Vec4::new(1.0, 0.8, 0.1, 1.0),
    ];
    let mut keys = Vec::new();
    for (i, color) in colors.iter().enumerate() {
        let angle = i as f32 / colors.len() as f32 * TAU;
        let position = Vec3::new(angle.cos(), 0.3 * i as f32, angle.sin()) * 20.0;
        let key = scene.spawn(SceneObject::new(position).with_unit_cube());
        engine.register(TrackedMarker::new(key, ICON, ARROW).with_color(*color));
        keys.push(key);
    }

    for frame in 0..4 {
        let angle = frame as f32 * 0.5;
        if let Some(camera) = engine.host_mut().main_mut() {
            camera.position = Vec3::ZERO;
            camera.target = Vec3::new(angle.cos(), 0.0, angle.sin());
        }

        // Drop one object halfway through; its marker is pruned next frame.
        if frame == 2 {
            scene.despawn(keys[0]);
        }

        let commands = engine.render_frame(&scene);
        println!("frame {frame}: {} commands", commands.len());
        for cmd in &commands {
            let center = cmd.screen_center();
            match cmd.kind {
                DrawKind::Icon => println!("  icon  at ({:7.1}, {:7.1})", center.x, center.y),
                DrawKind::Arrow => println!("  arrow at ({:7.1}, {:7.1})", center.x, center.y),
            }
        }

        let instances = pack_instances(&commands);
        println!("  {} bytes of instance data", instance_bytes(&instances).len());
    }

    println!("{} markers still tracked", engine.registry().len());
    Ok(())
}
