//! Live drawing surface
//!
//! This module is organized into submodules:
//! - `host`: the embedding environment and target resolution
//! - `events`: pointer and wheel events
//! - `animation`: the repaint timer
//!
//! A [`Surface`] keeps an ordered registry of [`DrawableId`]s. Registration
//! order is paint order (later entries paint over earlier ones) and, by
//! default, hit-test order.

pub mod animation;
pub mod events;
pub mod host;

pub use animation::FrameTimer;
pub use events::{PointerEvent, PointerKind, WheelEvent};
pub use host::{ElementKind, ElementRef, HeadlessHost, Host, Target};

use std::time::{Duration, Instant};

use crate::defaults;
use crate::drawable::Drawable;
use crate::errors::SurfaceError;
use crate::log::{debug, warn};
use crate::renderer::Renderer;
use crate::scene::{DrawableId, Scene};
use crate::types::{Rect, Size};

/// Which registered drawable receives a click when several contain the point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HitOrder {
    /// Earliest registered wins, even if a later one paints over it
    #[default]
    FirstRegistered,
    /// Last registered (the one painted on top) wins
    TopmostRendered,
}

/// Surface behavior knobs
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceConfig {
    pub hit_order: HitOrder,
    /// Interval used by [`Surface::start_default_animation`]
    pub frame_interval: Duration,
    /// Also wipe the visible area when the registry is cleared
    pub blank_on_clear: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            hit_order: HitOrder::default(),
            frame_interval: defaults::FRAME_INTERVAL,
            blank_on_clear: false,
        }
    }
}

impl SurfaceConfig {
    pub fn with_hit_order(mut self, hit_order: HitOrder) -> Self {
        self.hit_order = hit_order;
        self
    }

    pub fn with_frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval;
        self
    }

    pub fn with_blank_on_clear(mut self, blank_on_clear: bool) -> Self {
        self.blank_on_clear = blank_on_clear;
        self
    }
}

type ZoomHandler = Box<dyn FnMut(f64)>;

/// Registry, repaint loop and input dispatch bound to one renderer
pub struct Surface<R: Renderer> {
    renderer: R,
    width: f64,
    height: f64,
    bounds: Rect,
    items: Vec<DrawableId>,
    timer: Option<FrameTimer>,
    on_zoom: Option<ZoomHandler>,
    config: SurfaceConfig,
}

impl<R: Renderer> Surface<R> {
    /// Bind to `target` with the default configuration
    pub fn new<H>(host: &mut H, target: Target<H::Element>) -> Result<Self, SurfaceError>
    where
        H: Host<Context = R>,
    {
        Self::with_config(host, target, SurfaceConfig::default())
    }

    pub fn with_config<H>(
        host: &mut H,
        target: Target<H::Element>,
        config: SurfaceConfig,
    ) -> Result<Self, SurfaceError>
    where
        H: Host<Context = R>,
    {
        let canvas = host::resolve_canvas(host, &target)?;
        let renderer = host
            .context_2d(&canvas)
            .ok_or_else(|| SurfaceError::ContextUnavailable { target: target.to_string() })?;
        let size = host.canvas_size(&canvas);
        let bounds = host.bounding_rect(&canvas);
        debug!(%target, w = size.w, h = size.h, "surface bound");
        Ok(Self::from_renderer(renderer, size, bounds, config))
    }

    /// Wrap a renderer the caller already holds
    pub fn from_renderer(renderer: R, size: Size, bounds: Rect, config: SurfaceConfig) -> Self {
        Self {
            renderer,
            width: size.w,
            height: size.h,
            bounds,
            items: Vec::new(),
            timer: None,
            on_zoom: None,
            config,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// On-screen rectangle used to translate client coordinates
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    // ------------------------------------------------------------------
    // Registry
    // ------------------------------------------------------------------

    pub fn add(&mut self, id: DrawableId) -> &mut Self {
        self.items.push(id);
        self
    }

    /// Unregister the last occurrence of `id`. The shape stays in the scene.
    pub fn remove(&mut self, id: DrawableId) -> bool {
        match self.items.iter().rposition(|&item| item == id) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: DrawableId) -> bool {
        self.items.contains(&id)
    }

    pub fn items(&self) -> &[DrawableId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        if self.config.blank_on_clear {
            self.renderer.clear_rect(0.0, 0.0, self.width, self.height);
        }
    }

    // ------------------------------------------------------------------
    // Painting
    // ------------------------------------------------------------------

    /// Clear the whole area and paint every registered drawable in order
    pub fn render(&mut self, scene: &Scene) {
        paint(&mut self.renderer, self.width, self.height, scene, &self.items);
    }

    /// Like [`render`](Self::render) but paints `ids` instead of the registry
    pub fn render_list(&mut self, scene: &Scene, ids: &[DrawableId]) {
        paint(&mut self.renderer, self.width, self.height, scene, ids);
    }

    /// Replace any running animation with one repainting every `interval`.
    /// A zero interval just stops the animation.
    pub fn start_animation(&mut self, interval: Duration) {
        self.timer = None;
        if !interval.is_zero() {
            self.timer = Some(FrameTimer::new(interval));
        }
    }

    pub fn start_default_animation(&mut self) {
        self.start_animation(self.config.frame_interval);
    }

    pub fn stop_animation(&mut self) {
        self.timer = None;
    }

    pub fn is_animating(&self) -> bool {
        self.timer.is_some()
    }

    /// Drive the animation from the host loop; renders when a frame is due.
    pub fn tick(&mut self, scene: &Scene, now: Instant) -> bool {
        let due = self.timer.as_mut().is_some_and(|timer| timer.poll(now));
        if due {
            self.render(scene);
        }
        due
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Route a mouse-up or touch-end to the hit drawable's click handler.
    ///
    /// Only drawables with a handler are candidates. Returns the id that
    /// received the click.
    pub fn on_pointer_release(&mut self, scene: &mut Scene, event: &PointerEvent) -> Option<DrawableId> {
        let local = self.bounds.to_local(event.client_x, event.client_y);
        let (x, y) = (local.x(), local.y());

        let accepts = |id: DrawableId| {
            scene.has_on_click(id) && scene.get(id).is_some_and(|shape| shape.contains_point(x, y))
        };
        let hit = match self.config.hit_order {
            HitOrder::FirstRegistered => self.items.iter().copied().find(|&id| accepts(id)),
            HitOrder::TopmostRendered => self.items.iter().rev().copied().find(|&id| accepts(id)),
        }?;

        if let Some(handler) = scene.click_handler_mut(hit) {
            let renderer: &mut dyn Renderer = &mut self.renderer;
            handler(renderer, x, y);
        }
        debug!(?hit, kind = ?event.kind, x, y, "pointer release dispatched");
        Some(hit)
    }

    /// Install the zoom hook, called with the normalized wheel delta
    pub fn set_on_zoom(&mut self, handler: impl FnMut(f64) + 'static) {
        self.on_zoom = Some(Box::new(handler));
    }

    pub fn clear_on_zoom(&mut self) {
        self.on_zoom = None;
    }

    /// Forward a non-zero wheel delta to the zoom hook. The event's default
    /// action is always suppressed. Returns the normalized delta.
    pub fn on_wheel(&mut self, event: &mut WheelEvent) -> f64 {
        let delta = event.normalized_delta();
        if delta != 0.0 {
            if let Some(on_zoom) = self.on_zoom.as_mut() {
                on_zoom(delta);
            }
        }
        event.prevent_default();
        delta
    }
}

fn paint<R: Renderer>(renderer: &mut R, width: f64, height: f64, scene: &Scene, ids: &[DrawableId]) {
    debug!(items = ids.len(), width, height, "render");
    renderer.clear_rect(0.0, 0.0, width, height);
    for &id in ids {
        match scene.get(id) {
            Some(shape) => shape.render(renderer),
            None => {
                warn!(?id, "registered drawable is not in the scene, skipping");
            }
        }
    }
}
