//! Lays out a handful of shapes, runs a few animation ticks and a click,
//! then prints the recorded display list.
//!
//! Run with: cargo run --example gallery --features tracing

use std::time::{Duration, Instant};

use easel::{
    CircleShape, DrawableExt, HeadlessHost, Layout, LineShape, Padding, PointerEvent,
    RectangleShape, Scene, Size, Surface, Target, TextShape, WheelEvent,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut host = HeadlessHost::new(Size::new(340.0, 240.0));
    let body = host.body_ref().expect("headless host always has a body");
    host.set_padding(body, Padding::uniform(10.0));

    let mut surface = match Surface::new(&mut host, Target::Default) {
        Ok(surface) => surface,
        Err(e) => {
            eprintln!("Error: {:?}", miette::Report::new(e));
            return;
        }
    };

    let mut scene = Scene::new();
    let mut layout = Layout::new(surface.width(), surface.height());

    for (i, fill) in ["#c33", "#3c3", "#33c", "#cc3", "#3cc"].into_iter().enumerate() {
        let mut tile = RectangleShape::new().with_fill(fill);
        tile.set_label(format!("tile {}", i));
        let id = scene.insert(tile);
        scene.set_on_click(id, move |r, x, y| {
            println!("tile {} clicked at ({}, {})", i, x, y);
            r.fill_text("clicked", x, y);
        });
        surface.add(id);
        layout.add(id);
    }
    layout.table(&mut scene, 3, Some(2));

    let mut dot = CircleShape::new(12.0).with_fill("white");
    dot.set_position(160.0, 200.0);
    surface.add(scene.insert(dot));
    surface.add(scene.insert(LineShape::between(0.0, 220.0, 320.0, 220.0)));

    let mut caption = TextShape::new();
    caption
        .set_position(0.0, 200.0)
        .set_size((320.0, 20.0))
        .set_label(["easel", "gallery"]);
    surface.add(scene.insert(caption));

    surface.set_on_zoom(|delta| println!("zoom by {}", delta));

    surface.start_default_animation();
    let start = Instant::now();
    for frame in 0..3 {
        let now = start + Duration::from_millis(17 * frame);
        surface.tick(&scene, now);
    }
    surface.stop_animation();

    surface.on_pointer_release(&mut scene, &PointerEvent::mouse_up(60.0, 50.0));
    surface.on_wheel(&mut WheelEvent::from_wheel_delta(120.0));

    println!("{}", surface.renderer());
}
