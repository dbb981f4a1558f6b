//! End-to-end tests: bind a surface to a headless host, arrange, paint, click.

use std::cell::Cell;
use std::rc::Rc;

use easel::surface::ElementRef;
use easel::{
    CircleShape, DrawableExt, HeadlessHost, Layout, LineShape, Padding, PointerEvent, Recorder,
    RectangleShape, Scene, Size, Surface, SurfaceError, Target,
};

fn host_with_board() -> (HeadlessHost, ElementRef) {
    let mut host = HeadlessHost::new(Size::new(800.0, 600.0));
    let body = host.body_ref().unwrap();
    let board = host.append_canvas(body, "board", Size::new(120.0, 60.0));
    (host, board)
}

#[test]
fn binds_to_canvas_by_selector() {
    let (mut host, _) = host_with_board();
    let surface: Surface<Recorder> = Surface::new(&mut host, Target::Selector("#board".into())).unwrap();
    assert_eq!((surface.width(), surface.height()), (120.0, 60.0));
}

#[test]
fn clicks_are_translated_by_the_canvas_page_offset() {
    let (mut host, board) = host_with_board();
    host.set_bounding_rect(board, easel::Rect::new(200.0, 150.0, 120.0, 60.0));
    let mut surface = Surface::new(&mut host, Target::Element(board)).unwrap();
    assert_eq!(surface.bounds().top_left(), easel::Point::new(200.0, 150.0));

    let mut scene = Scene::new();
    let mut rect = RectangleShape::new();
    rect.set_size((20.0, 20.0));
    let id = scene.insert(rect);
    scene.set_on_click(id, |_, _, _| {});
    surface.add(id);

    let page = PointerEvent::mouse_up(210.0, 160.0);
    assert_eq!(surface.on_pointer_release(&mut scene, &page), Some(id));
    let outside = PointerEvent::mouse_up(10.0, 10.0);
    assert_eq!(surface.on_pointer_release(&mut scene, &outside), None);
}

#[test]
fn creates_canvas_inside_padded_container() {
    let mut host = HeadlessHost::new(Size::new(800.0, 600.0));
    let body = host.body_ref().unwrap();
    let panel = host.append_container(body, "panel", Size::new(340.0, 220.0));
    host.set_padding(panel, Padding::uniform(10.0));

    let surface = Surface::new(&mut host, Target::Selector("#panel".into())).unwrap();
    assert_eq!((surface.width(), surface.height()), (320.0, 200.0));
    assert_eq!(surface.bounds().top_left(), easel::Point::new(10.0, 10.0));
    assert_eq!(host.children(panel).len(), 1);
}

#[test]
fn missing_body_is_an_invalid_target() {
    let mut host = HeadlessHost::without_body();
    let err = Surface::new(&mut host, Target::Selector("#anything".into())).err();
    assert_eq!(err, Some(SurfaceError::InvalidTarget { target: "#anything".into() }));
}

#[test]
fn canvas_without_context_is_reported() {
    let (mut host, board) = host_with_board();
    host.disable_context(board);
    let err = Surface::new(&mut host, Target::Element(board)).err();
    assert!(matches!(err, Some(SurfaceError::ContextUnavailable { .. })));
}

#[test]
fn paints_shapes_in_registration_order() {
    let (mut host, _) = host_with_board();
    let mut surface = Surface::new(&mut host, Target::Selector("canvas".into())).unwrap();
    let mut scene = Scene::new();

    let mut rect = RectangleShape::new();
    rect.set_position(10.0, 10.0).set_size((40.0, 20.0)).set_label("A");
    let mut circle = CircleShape::new(5.0).with_fill("red");
    circle.set_position(80.0, 30.0);
    let line = LineShape::between(0.0, 0.0, 120.0, 60.0);

    let ids = [scene.insert(rect), scene.insert(circle), scene.insert(line)];
    for id in ids {
        surface.add(id);
    }
    surface.render(&scene);

    insta::assert_snapshot!(surface.renderer().to_string().trim_end(), @r#"
    clear_rect 0 0 120 60
    save
    save
    font 14px Verdana
    fill_style #ffffff
    text_align center
    text_baseline middle
    fill_text "A" 30 20
    restore
    fill_style #f0f0f0
    fill_rect 10 10 40 20
    restore
    save
    begin_path
    fill_style red
    stroke_style #443
    line_width 1
    arc 80 30 5 0 6.283185307179586
    fill
    stroke
    restore
    save
    begin_path
    stroke_style #f0f0f0
    line_width 1
    move_to 0 0
    line_to 120 60
    stroke
    restore
    "#);
}

#[test]
fn shape_shared_by_layout_and_surface() {
    let mut host = HeadlessHost::new(Size::new(330.0, 330.0));
    let body = host.body_ref().unwrap();
    let mut surface = Surface::new(&mut host, Target::Element(body)).unwrap();
    let mut scene = Scene::new();
    let mut layout = Layout::new(330.0, 330.0);

    let clicks = Rc::new(Cell::new(0));
    let mut ids = Vec::new();
    for _ in 0..7 {
        let id = scene.insert(RectangleShape::new());
        let counter = Rc::clone(&clicks);
        scene.set_on_click(id, move |_, _, _| counter.set(counter.get() + 1));
        surface.add(id);
        layout.add(id);
        ids.push(id);
    }
    layout.table(&mut scene, 3, None);

    // Item 4 sits in row 1, column 1 of a 96px grid with 10px gaps
    let p = scene.get(ids[4]).unwrap().position();
    assert_eq!((p.x(), p.y()), (116.0, 116.0));

    let hit = surface.on_pointer_release(&mut scene, &PointerEvent::mouse_up(150.0, 150.0));
    assert_eq!(hit, Some(ids[4]));
    assert_eq!(clicks.get(), 1);

    // The gap between cells hits nothing
    let miss = surface.on_pointer_release(&mut scene, &PointerEvent::mouse_up(110.0, 50.0));
    assert_eq!(miss, None);
    assert_eq!(clicks.get(), 1);

    // Unregistering keeps the shape in the scene but makes it unclickable
    assert!(surface.remove(ids[4]));
    assert!(scene.contains(ids[4]));
    assert_eq!(surface.on_pointer_release(&mut scene, &PointerEvent::mouse_up(150.0, 150.0)), None);
}
