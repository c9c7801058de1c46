//! Integration tests for the overlay pass against the reference host.
//!
//! The camera sits at the origin looking down +Z with +Y up, so world -X is
//! screen right.

use offscreen_markers::*;
use proptest::prelude::*;

const WIDTH: f32 = 1400.0;
const HEIGHT: f32 = 800.0;

fn viewport() -> Viewport {
    Viewport::new(WIDTH, HEIGHT).expect("valid viewport")
}

fn rig() -> CameraRig {
    CameraRig::new(Camera::new(viewport()).looking_at(Vec3::ZERO, Vec3::Z))
}

fn spawn_cube(scene: &mut Scene, position: Vec3) -> ObjectKey {
    scene.spawn(SceneObject::new(position).with_unit_cube())
}

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-2
}

#[test]
fn test_marker_off_right_edge() {
    let mut scene = Scene::new();
    let key = spawn_cube(&mut scene, Vec3::new(-50.0, 0.0, 5.0));

    let mut engine = OverlayEngine::new(rig());
    let orange = Vec4::new(1.0, 0.5, 0.0, 1.0);
    engine.register(TrackedMarker::new(key, TextureId(1), TextureId(2)).with_color(orange));

    let commands = engine.render_frame(&scene);
    assert_eq!(commands.len(), 2);

    let icon = &commands[0];
    assert_eq!(icon.kind, DrawKind::Icon);
    assert!(icon.transform.is_none());
    assert!(approx(icon.rect.size, Vec2::splat(HEIGHT / 14.0)));
    // icon half extent plus a margin of one arrow height
    let expected_x = WIDTH - HEIGHT / 28.0 - HEIGHT / 28.0;
    assert!(approx(icon.rect.center(), Vec2::new(expected_x, HEIGHT / 2.0)));

    let arrow = &commands[1];
    assert_eq!(arrow.kind, DrawKind::Arrow);
    assert_eq!(arrow.texture, TextureId(2));
    assert_eq!(arrow.tint, Some(orange));
    assert!(approx(arrow.rect.size, Vec2::new(HEIGHT / 56.0, HEIGHT / 28.0)));
    let offset = HEIGHT / 28.0 + HEIGHT / 56.0;
    assert!(approx(arrow.screen_center(), Vec2::new(expected_x + offset, HEIGHT / 2.0)));
}

#[test]
fn test_marker_directly_behind_lands_at_center() {
    let mut scene = Scene::new();
    let key = spawn_cube(&mut scene, Vec3::new(0.0, 0.0, -5.0));

    let mut engine = OverlayEngine::new(rig());
    engine.register(TrackedMarker::new(key, TextureId(1), TextureId(2)));

    let commands = engine.render_frame(&scene);
    assert_eq!(commands.len(), 1);
    assert!(approx(commands[0].rect.center(), viewport().center()));
}

#[test]
fn test_behind_camera_keeps_its_side() {
    let mut scene = Scene::new();
    // behind and far to the right
    let key = spawn_cube(&mut scene, Vec3::new(-50.0, 0.0, -5.0));

    let mut engine = OverlayEngine::new(rig());
    engine.register(TrackedMarker::new(key, TextureId(1), TextureId(2)));

    let commands = engine.render_frame(&scene);
    assert_eq!(commands.len(), 2);
    assert!(commands[0].rect.center().x > WIDTH / 2.0);
    assert!(commands[1].screen_center().x > commands[0].rect.center().x);
}

#[test]
fn test_visible_object_gets_no_marker() {
    let mut scene = Scene::new();
    let key = spawn_cube(&mut scene, Vec3::new(0.0, 0.0, 10.0));

    let mut engine = OverlayEngine::new(rig());
    engine.register(TrackedMarker::new(key, TextureId(1), TextureId(2)));
    assert!(engine.render_frame(&scene).is_empty());

    // object without renderable parts is never visible
    let bare = scene.spawn(SceneObject::new(Vec3::new(0.0, 0.0, 10.0)));
    engine.register(TrackedMarker::new(bare, TextureId(3), TextureId(4)));
    let commands = engine.render_frame(&scene);
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].texture, TextureId(3));
}

#[test]
fn test_moving_into_view_hides_marker() {
    let mut scene = Scene::new();
    let key = spawn_cube(&mut scene, Vec3::new(0.0, 0.0, -10.0));

    let mut engine = OverlayEngine::new(rig());
    engine.register(TrackedMarker::new(key, TextureId(1), TextureId(2)));
    assert_eq!(engine.render_frame(&scene).len(), 1);

    assert!(scene.set_position(key, Vec3::new(0.0, 0.0, 10.0)));
    assert!(engine.render_frame(&scene).is_empty());
}

#[test]
fn test_despawned_object_is_pruned() {
    let mut scene = Scene::new();
    let a = spawn_cube(&mut scene, Vec3::new(0.0, 0.0, -5.0));
    let b = spawn_cube(&mut scene, Vec3::new(0.0, 0.0, -8.0));

    let mut engine = OverlayEngine::new(rig());
    engine.register(TrackedMarker::new(a, TextureId(1), TextureId(2)));
    engine.register(TrackedMarker::new(b, TextureId(3), TextureId(4)));
    assert_eq!(engine.render_frame(&scene).len(), 2);

    scene.despawn(a);
    let commands = engine.render_frame(&scene);
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].texture, TextureId(3));
    assert!(!engine.registry().contains(a));

    // a fresh object reusing the slot is not tracked
    let c = spawn_cube(&mut scene, Vec3::new(0.0, 0.0, -5.0));
    assert_ne!(a, c);
    assert_eq!(engine.render_frame(&scene).len(), 1);
}

#[test]
fn test_commands_are_back_to_front() {
    let mut scene = Scene::new();
    let mut engine = OverlayEngine::new(rig());
    for i in 0..3u32 {
        let key = spawn_cube(&mut scene, Vec3::new(0.0, 0.0, -5.0 - i as f32));
        engine.register(TrackedMarker::new(key, TextureId(i), TextureId(100)));
    }

    let textures: Vec<u32> = engine
        .render_frame(&scene)
        .iter()
        .map(|cmd| cmd.texture.0)
        .collect();
    assert_eq!(textures, vec![2, 1, 0]);
}

#[test]
fn test_duplicate_registration() {
    let mut scene = Scene::new();
    let key = spawn_cube(&mut scene, Vec3::new(0.0, 0.0, -5.0));

    let mut engine = OverlayEngine::new(rig());
    let first = engine.register(TrackedMarker::new(key, TextureId(1), TextureId(2)));
    let second = engine.register(TrackedMarker::new(key, TextureId(7), TextureId(8)));
    assert_eq!(first, Registration::Added);
    assert_eq!(second, Registration::Duplicate);
    assert_eq!(engine.registry().len(), 1);

    let commands = engine.render_frame(&scene);
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].texture, TextureId(1));
}

#[test]
fn test_no_main_camera() {
    let mut scene = Scene::new();
    let key = spawn_cube(&mut scene, Vec3::new(0.0, 0.0, -5.0));

    let mut engine = OverlayEngine::new(CameraRig::empty());
    engine.register(TrackedMarker::new(key, TextureId(1), TextureId(2)));
    assert!(engine.render_frame(&scene).is_empty());
    assert_eq!(engine.registry().len(), 1);

    engine
        .host_mut()
        .set_main(Some(Camera::new(viewport()).looking_at(Vec3::ZERO, Vec3::Z)));
    assert_eq!(engine.render_frame(&scene).len(), 1);
}

#[test]
fn test_resize_changes_sizes_next_frame() {
    let mut scene = Scene::new();
    let key = spawn_cube(&mut scene, Vec3::new(0.0, 0.0, -5.0));

    let mut engine = OverlayEngine::new(rig());
    engine.register(TrackedMarker::new(key, TextureId(1), TextureId(2)));
    let before = engine.render_frame(&scene)[0].rect;

    let resized = Viewport::new(700.0, 400.0).expect("valid viewport");
    if let Some(camera) = engine.host_mut().main_mut() {
        camera.set_viewport(resized);
    }
    let after = engine.render_frame(&scene)[0].rect;

    assert!(approx(before.size, Vec2::splat(800.0 / 14.0)));
    assert!(approx(after.size, Vec2::splat(400.0 / 14.0)));
    assert!(approx(after.center(), resized.center()));
}

#[test]
fn test_custom_options() {
    let options = OverlayOptions::from_json_str(r#"{ "icon_divisor": 8.0 }"#).expect("valid json");
    let mut scene = Scene::new();
    let key = spawn_cube(&mut scene, Vec3::new(0.0, 0.0, -5.0));

    let mut engine = OverlayEngine::with_options(rig(), options).expect("valid options");
    engine.register(TrackedMarker::new(key, TextureId(1), TextureId(2)));
    let commands = engine.render_frame(&scene);
    assert!(approx(commands[0].rect.size, Vec2::splat(100.0)));
}

#[test]
fn test_pack_frame_for_upload() {
    let mut scene = Scene::new();
    let key = spawn_cube(&mut scene, Vec3::new(-50.0, 0.0, 5.0));

    let mut engine = OverlayEngine::new(rig());
    engine.register(TrackedMarker::new(key, TextureId(1), TextureId(2)));
    let commands = engine.render_frame(&scene);

    let instances = pack_instances(&commands);
    assert_eq!(instances.len(), 2);
    assert_eq!(instance_bytes(&instances).len(), 2 * std::mem::size_of::<OverlayInstance>());
    assert_eq!(instances[1].to_command(), commands[1]);
}

proptest! {
    #[test]
    fn prop_markers_stay_on_screen(
        x in -100.0f32..100.0,
        y in -100.0f32..100.0,
        z in -100.0f32..100.0,
    ) {
        let world = Vec3::new(x, y, z);
        prop_assume!(world.length() > 1.0);

        let mut scene = Scene::new();
        let key = spawn_cube(&mut scene, world);
        let mut engine = OverlayEngine::new(rig());
        engine.register(TrackedMarker::new(key, TextureId(1), TextureId(2)));

        let screen = Rect::new(Vec2::ZERO, viewport().size());
        for cmd in engine.render_frame(&scene) {
            let center = cmd.screen_center();
            prop_assert!(center.is_finite());
            prop_assert!(center.cmpge(Vec2::ZERO).all());
            prop_assert!(center.cmple(viewport().size()).all());
            if cmd.kind == DrawKind::Icon {
                prop_assert!(screen.contains_rect(&cmd.rect));
            }
        }
    }
}
