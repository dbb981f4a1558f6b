//! Host environment abstraction
//!
//! A [`Host`] is whatever owns the real element tree and 2D contexts. The
//! surface only needs element lookup, padding/size queries, canvas creation
//! and a context. [`HeadlessHost`] provides all of that in memory.

use std::fmt;

use crate::errors::SurfaceError;
use crate::log::debug;
use crate::renderer::{Recorder, Renderer};
use crate::types::{Padding, Rect, Size};

/// What a resolved element can be used as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Can be drawn on directly
    Canvas,
    /// Holds (or will hold) a canvas
    Container,
}

/// Where a surface should attach
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target<E> {
    /// Looked up through the host; no match falls back to the body
    Selector(String),
    /// A canvas or container the caller already holds
    Element(E),
    /// The host body
    Default,
}

impl<E: fmt::Debug> fmt::Display for Target<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Selector(s) => write!(f, "{}", s),
            Target::Element(e) => write!(f, "{:?}", e),
            Target::Default => write!(f, "<body>"),
        }
    }
}

/// Element tree and drawing contexts supplied by the embedding environment
pub trait Host {
    type Element: Clone + fmt::Debug;
    type Context: Renderer;

    fn query_selector(&self, selector: &str) -> Option<Self::Element>;
    fn body(&self) -> Option<Self::Element>;
    fn kind(&self, element: &Self::Element) -> ElementKind;

    /// First canvas inside `container`, if any
    fn first_canvas(&self, container: &Self::Element) -> Option<Self::Element>;
    /// Append a new canvas to `parent`
    fn create_canvas(&mut self, parent: &Self::Element) -> Option<Self::Element>;

    fn client_size(&self, element: &Self::Element) -> Size;
    fn padding(&self, element: &Self::Element) -> Padding;
    fn canvas_size(&self, canvas: &Self::Element) -> Size;
    fn set_canvas_size(&mut self, canvas: &Self::Element, size: Size);
    fn bounding_rect(&self, element: &Self::Element) -> Rect;

    fn context_2d(&mut self, canvas: &Self::Element) -> Option<Self::Context>;
}

/// Find (or create) the canvas a surface for `target` draws on.
pub(crate) fn resolve_canvas<H: Host>(
    host: &mut H,
    target: &Target<H::Element>,
) -> Result<H::Element, SurfaceError> {
    let parent = match target {
        Target::Selector(selector) => host.query_selector(selector).or_else(|| host.body()),
        Target::Element(element) => Some(element.clone()),
        Target::Default => host.body(),
    };
    let Some(parent) = parent else {
        return Err(SurfaceError::InvalidTarget { target: target.to_string() });
    };

    if host.kind(&parent) == ElementKind::Canvas {
        return Ok(parent);
    }
    if let Some(canvas) = host.first_canvas(&parent) {
        return Ok(canvas);
    }

    let canvas = host
        .create_canvas(&parent)
        .ok_or_else(|| SurfaceError::InvalidTarget { target: target.to_string() })?;
    let content = host.padding(&parent).content_size(host.client_size(&parent));
    host.set_canvas_size(&canvas, content);
    debug!(w = content.w, h = content.h, "created canvas in container");
    Ok(canvas)
}

// ============================================================================
// Headless host
// ============================================================================

/// Handle to an element of a [`HeadlessHost`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementRef(usize);

#[derive(Debug, Clone)]
struct HeadlessElement {
    tag: &'static str,
    id: Option<String>,
    children: Vec<ElementRef>,
    client: Size,
    padding: Padding,
    rect: Rect,
    canvas_size: Size,
    has_context: bool,
}

impl HeadlessElement {
    fn new(tag: &'static str, id: Option<&str>, client: Size, rect: Rect) -> Self {
        Self {
            tag,
            id: id.map(str::to_string),
            children: Vec::new(),
            client,
            padding: Padding::ZERO,
            rect,
            canvas_size: client,
            has_context: tag == "canvas",
        }
    }
}

/// In-memory element tree whose canvases paint into [`Recorder`]s.
///
/// Selectors support `#id` and bare tag names (`canvas`, `div`, `body`),
/// matched in creation order.
#[derive(Debug, Clone, Default)]
pub struct HeadlessHost {
    elements: Vec<HeadlessElement>,
    body: Option<ElementRef>,
}

impl HeadlessHost {
    /// A document whose body has the given client size
    pub fn new(body: Size) -> Self {
        let mut host = Self::default();
        let rect = Rect::new(0.0, 0.0, body.w, body.h);
        host.body = Some(host.push(None, HeadlessElement::new("body", None, body, rect)));
        host
    }

    /// A document with nothing to attach to
    pub fn without_body() -> Self {
        Self::default()
    }

    pub fn body_ref(&self) -> Option<ElementRef> {
        self.body
    }

    pub fn append_container(&mut self, parent: ElementRef, id: &str, client: Size) -> ElementRef {
        let rect = self.child_rect(parent, client);
        self.push(Some(parent), HeadlessElement::new("div", Some(id), client, rect))
    }

    pub fn append_canvas(&mut self, parent: ElementRef, id: &str, size: Size) -> ElementRef {
        let rect = self.child_rect(parent, size);
        self.push(Some(parent), HeadlessElement::new("canvas", Some(id), size, rect))
    }

    pub fn set_padding(&mut self, element: ElementRef, padding: Padding) {
        self.elements[element.0].padding = padding;
    }

    pub fn set_bounding_rect(&mut self, element: ElementRef, rect: Rect) {
        self.elements[element.0].rect = rect;
    }

    /// Make `context_2d` fail for this canvas
    pub fn disable_context(&mut self, canvas: ElementRef) {
        self.elements[canvas.0].has_context = false;
    }

    pub fn children(&self, element: ElementRef) -> &[ElementRef] {
        &self.elements[element.0].children
    }

    pub fn tag(&self, element: ElementRef) -> &str {
        self.elements[element.0].tag
    }

    fn push(&mut self, parent: Option<ElementRef>, element: HeadlessElement) -> ElementRef {
        let r = ElementRef(self.elements.len());
        self.elements.push(element);
        if let Some(parent) = parent {
            self.elements[parent.0].children.push(r);
        }
        r
    }

    /// New children sit at the parent's content-box origin
    fn child_rect(&self, parent: ElementRef, size: Size) -> Rect {
        let p = &self.elements[parent.0];
        Rect::new(p.rect.left + p.padding.left, p.rect.top + p.padding.top, size.w, size.h)
    }
}

impl Host for HeadlessHost {
    type Element = ElementRef;
    type Context = Recorder;

    fn query_selector(&self, selector: &str) -> Option<ElementRef> {
        let found = match selector.strip_prefix('#') {
            Some(id) => self.elements.iter().position(|e| e.id.as_deref() == Some(id)),
            None => self.elements.iter().position(|e| e.tag == selector),
        };
        found.map(ElementRef)
    }

    fn body(&self) -> Option<ElementRef> {
        self.body
    }

    fn kind(&self, element: &ElementRef) -> ElementKind {
        if self.elements[element.0].tag == "canvas" {
            ElementKind::Canvas
        } else {
            ElementKind::Container
        }
    }

    fn first_canvas(&self, container: &ElementRef) -> Option<ElementRef> {
        let mut stack = vec![*container];
        while let Some(el) = stack.pop() {
            for &child in self.elements[el.0].children.iter().rev() {
                stack.push(child);
            }
            if el != *container && self.elements[el.0].tag == "canvas" {
                return Some(el);
            }
        }
        None
    }

    fn create_canvas(&mut self, parent: &ElementRef) -> Option<ElementRef> {
        let rect = self.child_rect(*parent, Size::ZERO);
        Some(self.push(Some(*parent), HeadlessElement::new("canvas", None, Size::ZERO, rect)))
    }

    fn client_size(&self, element: &ElementRef) -> Size {
        self.elements[element.0].client
    }

    fn padding(&self, element: &ElementRef) -> Padding {
        self.elements[element.0].padding
    }

    fn canvas_size(&self, canvas: &ElementRef) -> Size {
        self.elements[canvas.0].canvas_size
    }

    fn set_canvas_size(&mut self, canvas: &ElementRef, size: Size) {
        let el = &mut self.elements[canvas.0];
        el.canvas_size = size;
        el.client = size;
        el.rect.width = size.w;
        el.rect.height = size.h;
    }

    fn bounding_rect(&self, element: &ElementRef) -> Rect {
        self.elements[element.0].rect
    }

    fn context_2d(&mut self, canvas: &ElementRef) -> Option<Recorder> {
        self.elements[canvas.0].has_context.then(Recorder::new)
    }
}
