// src/main.rs
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use randwalk::{
    config::Config,
    models::{Scene, WalkKind},
    render::{canvas::nannou_to_pixel, NannouCanvas, Rgb8, WalkRenderer},
    views::{Camera, FrameInput, Viewport},
};

// Pixel-precise wheels (touchpads) report distance; fold it into notches.
const PIXELS_PER_SCROLL_NOTCH: f32 = 20.0;

struct Model {
    // Core components:
    scene: Scene,
    camera: Camera,
    rng: StdRng,

    // Rendering components:
    renderer: WalkRenderer,
    background: Rgb8,
    stroke_weight: f32,

    // Input collected between updates
    pending_scroll: f32,

    // Window size to restore when leaving fullscreen
    windowed_size: (f32, f32),
}

fn main() {
    tracing_subscriber::fmt::init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load config");
            std::process::exit(1);
        }
    };

    let window = app
        .new_window()
        .title(config.window.title.clone())
        .size(config.window.width, config.window.height)
        .view(view)
        .key_released(key_released)
        .mouse_wheel(mouse_wheel)
        .build();
    if let Err(e) = window {
        tracing::error!(error = ?e, "failed to create window");
        std::process::exit(1);
    }

    let mut rng = match config.walk.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut scene = Scene::new(&config.walk);
    scene.populate(&mut rng);

    tracing::info!(
        width = config.window.width,
        height = config.window.height,
        kind = %scene.kind(),
        "random walk ready"
    );

    Model {
        scene,
        camera: Camera::new(config.camera.clone()),
        rng,
        renderer: WalkRenderer::new(config.style.palette.clone()),
        background: config.style.background,
        stroke_weight: config.style.stroke_weight,
        pending_scroll: 0.0,
        windowed_size: (config.window.width as f32, config.window.height as f32),
    }
}

fn viewport(app: &App) -> Viewport {
    let rect = app.window_rect();
    Viewport::new(rect.w(), rect.h())
}

fn mouse_wheel(_app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    model.pending_scroll += match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_SCROLL_NOTCH,
    };
}

fn key_released(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::R => model.scene.reset(&mut model.rng),
        Key::F11 => toggle_fullscreen(app, model),
        Key::C => model.camera.reset(),
        Key::Key1 => switch_kind(model, WalkKind::Smooth),
        Key::Key2 => switch_kind(model, WalkKind::Grid),
        Key::Key3 => switch_kind(model, WalkKind::SelfAvoiding),
        _ => (),
    }
}

fn switch_kind(model: &mut Model, kind: WalkKind) {
    if !model.scene.set_kind(kind, &mut model.rng) {
        tracing::debug!(%kind, "walk kind already active");
    }
}

fn toggle_fullscreen(app: &App, model: &mut Model) {
    let window = app.main_window();
    if window.is_fullscreen() {
        window.set_fullscreen(false);
        let (w, h) = model.windowed_size;
        window.set_inner_size_points(w, h);
        tracing::info!(width = w, height = h, "left fullscreen");
    } else {
        model.windowed_size = window.inner_size_points();
        window.set_fullscreen(true);
        tracing::info!("entered fullscreen");
    }
}

fn poll_input(app: &App, model: &mut Model, update: &Update, viewport: Viewport) -> FrameInput {
    let down = &app.keys.down;
    FrameInput {
        pan_up: down.contains(&Key::W),
        pan_down: down.contains(&Key::S),
        pan_left: down.contains(&Key::A),
        pan_right: down.contains(&Key::D),
        scroll: std::mem::take(&mut model.pending_scroll),
        fine_zoom: down.contains(&Key::LShift),
        cursor: nannou_to_pixel(pt2(app.mouse.x, app.mouse.y), viewport),
        dt: update.since_last.as_secs_f32(),
    }
}

fn update(app: &App, model: &mut Model, update: Update) {
    let viewport = viewport(app);
    let input = poll_input(app, model, &update, viewport);
    model.camera.apply_input(&input, viewport);
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let viewport = viewport(app);

    let mut canvas = NannouCanvas::new(&draw, viewport, model.stroke_weight);
    canvas.clear(model.background);
    model
        .renderer
        .draw(&mut canvas, model.scene.walks(), &model.camera, viewport);

    if let Err(e) = draw.to_frame(app, &frame) {
        tracing::error!(error = ?e, "failed to render frame");
    }
}
