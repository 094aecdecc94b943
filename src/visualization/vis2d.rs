use bevy::prelude::*;
use bevy::ecs::system::Local;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use tracing::{error, info};

use crate::simulation::scenario::Scenario;

/// Component tagging each circle with its index into Scenario.universe.objects
#[derive(Component)]
struct BodyIndex(pub usize);

/// World-space → screen-space scaling factor for positions and radii
const SCALE: f32 = 1.0;

pub fn run_2d(scenario: Scenario) {
    info!(bodies = scenario.universe.objects.len(), "starting Bevy 2D viewer");

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system).chain())
        .run();
}

/// Universe origin sits in the corner; shift so its centre is on screen centre
fn to_screen(scenario: &Scenario, x: f64, y: f64) -> Vec2 {
    let dims = scenario.universe.dimensions;
    Vec2::new(
        ((x - dims.x() / 2.0) as f32) * SCALE,
        ((y - dims.y() / 2.0) as f32) * SCALE,
    )
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for (i, body) in scenario.universe.objects.iter().enumerate() {
        let radius_screen = (body.radius as f32).max(1.0) * SCALE;
        let at = to_screen(&scenario, body.position.x(), body.position.y());

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(Color::WHITE)),
                transform: Transform::from_xyz(at.x, at.y, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

/// One engine tick per frame; a failed tick freezes the view
fn physics_step_system(mut scenario: ResMut<Scenario>, mut halted: Local<bool>) {
    if *halted {
        return;
    }
    if let Err(e) = scenario.step() {
        error!(tick = scenario.universe.time, "tick failed, halting: {e}");
        *halted = true;
    }
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.universe.objects.get(*i) {
            let at = to_screen(&scenario, b.position.x(), b.position.y());
            transform.translation.x = at.x;
            transform.translation.y = at.y;
        }
    }
}
