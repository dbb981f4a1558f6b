//! A small retained-mode 2D drawing surface.
//!
//! Shapes live in a host-owned [`Scene`]. A [`Surface`] keeps an ordered
//! list of their ids, repaints them through a [`Renderer`] (on demand or on a
//! timer the host ticks), and routes pointer releases to the shape under the
//! cursor. A [`Layout`] positions shapes by id, either flowing them left to
//! right or in a grid.
//!
//! ```
//! use easel::{DrawableExt, HeadlessHost, Layout, RectangleShape, Scene, Size, Surface, Target};
//!
//! let mut host = HeadlessHost::new(Size::new(320.0, 200.0));
//! let mut surface = Surface::new(&mut host, Target::Default).unwrap();
//!
//! let mut scene = Scene::new();
//! let mut layout = Layout::new(surface.width(), surface.height());
//! for _ in 0..3 {
//!     let mut rect = RectangleShape::new();
//!     rect.set_size((100.0, 50.0));
//!     let id = scene.insert(rect);
//!     surface.add(id);
//!     layout.add(id);
//! }
//! layout.flow_left(&mut scene);
//! surface.render(&scene);
//! assert_eq!(surface.renderer().frames(), 1);
//! ```

pub mod defaults;
pub mod drawable;
pub mod errors;
pub mod layout;
pub mod log;
pub mod renderer;
pub mod scene;
pub mod shapes;
pub mod surface;
pub mod types;

pub use drawable::{Drawable, DrawableExt, Font, Label, ShapeCommon};
pub use errors::SurfaceError;
pub use layout::Layout;
pub use renderer::{DrawCommand, Recorder, Renderer, TextAlign, TextBaseline};
pub use scene::{ClickHandler, DrawableId, Scene};
pub use shapes::{CircleShape, LineShape, RectangleShape, Shape, TextShape};
pub use surface::{
    HeadlessHost, HitOrder, Host, PointerEvent, Surface, SurfaceConfig, Target, WheelEvent,
};
pub use types::{Color, Padding, Point, Rect, Size};
