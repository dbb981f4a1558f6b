//! Offline arrangement of drawables.
//!
//! A [`Layout`] borrows shapes by id and rewrites their position (and, for
//! tables, their size) inside a bounding box. It never paints anything.

use crate::defaults;
use crate::drawable::DrawableExt;
use crate::log::{debug, warn};
use crate::scene::{DrawableId, Scene};
use crate::types::Point;

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub max_width: f64,
    pub max_height: f64,
    /// Gap around and between items
    pub padding: f64,
    /// Origin of the table grid
    pub margin: Point,
    items: Vec<DrawableId>,
}

impl Layout {
    pub fn new(max_width: f64, max_height: f64) -> Self {
        Self {
            max_width,
            max_height,
            padding: defaults::LAYOUT_PADDING,
            margin: Point::ORIGIN,
            items: Vec::new(),
        }
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_margin(mut self, margin: impl Into<Point>) -> Self {
        self.margin = margin.into();
        self
    }

    pub fn add(&mut self, id: DrawableId) -> &mut Self {
        self.items.push(id);
        self
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

    /// Forget every item; the shapes themselves are untouched
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items that still resolve in `scene`, in insertion order
    fn live_items(&self, scene: &Scene) -> Vec<DrawableId> {
        self.items
            .iter()
            .copied()
            .filter(|&id| {
                let live = scene.contains(id);
                if !live {
                    warn!(?id, "layout item is not in the scene, skipping");
                }
                live
            })
            .collect()
    }

    /// Place items left to right, wrapping into a new row.
    ///
    /// Items keep their own size. After placing an item the cursor moves past
    /// it; if that same item would then reach `max_width`, the cursor wraps
    /// down by the item's height.
    pub fn flow_left(&self, scene: &mut Scene) {
        let mut x = self.padding;
        let mut y = self.padding;

        for id in self.live_items(scene) {
            let Some(item) = scene.get_mut(id) else {
                continue;
            };
            item.set_position(x, y);
            x += item.width() + self.padding;

            if x + item.width() >= self.max_width {
                y += item.height() + self.padding;
                x = self.padding;
            }
        }
        debug!(items = self.items.len(), "flow_left arranged");
    }

    /// Arrange items row-major in a grid of `cols` equal-width columns.
    ///
    /// With `rows` given, the row height is `min(col_width, (max_height -
    /// 2·padding) / rows)` and only zero-height items adopt it. Without it,
    /// the row count is `ceil(items / cols)` and every item gets the height
    /// `floor((max_height - (cols + 1)·padding) / row_count)`.
    ///
    /// The row cursor advances by the height of the item closing each row.
    pub fn table(&self, scene: &mut Scene, cols: usize, rows: Option<usize>) {
        if cols == 0 {
            warn!("table layout needs at least one column");
            return;
        }

        let items = self.live_items(scene);
        let pad = self.padding;
        let col_width = ((self.max_width - (cols as f64 + 1.0) * pad) / cols as f64).floor();

        let (row_height, keep_own_height) = match rows {
            Some(rows) => (col_width.min((self.max_height - 2.0 * pad) / rows as f64), true),
            None => {
                let rows = items.len().div_ceil(cols);
                let h = ((self.max_height - (cols as f64 + 1.0) * pad) / rows as f64).floor();
                (h, false)
            }
        };
        debug!(cols, ?rows, col_width, row_height, "table layout");

        let mut x = self.margin.x();
        let mut y = self.margin.y();
        for (i, id) in items.into_iter().enumerate() {
            let Some(item) = scene.get_mut(id) else {
                continue;
            };
            let h = if keep_own_height && item.height() != 0.0 {
                item.height()
            } else {
                row_height
            };
            item.set_position(x + pad, y + pad).set_size((col_width, h));
            x += col_width + pad;

            if (i + 1) % cols == 0 {
                y += h + pad;
                x = self.margin.x();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{RectangleShape, TextShape};
    use crate::types::Size;

    fn sized(scene: &mut Scene, w: f64, h: f64) -> DrawableId {
        let mut rect = RectangleShape::new();
        rect.set_size((w, h));
        scene.insert(rect)
    }

    fn position(scene: &Scene, id: DrawableId) -> (f64, f64) {
        let p = scene.get(id).unwrap().position();
        (p.x(), p.y())
    }

    fn size(scene: &Scene, id: DrawableId) -> Size {
        scene.get(id).unwrap().size()
    }

    #[test]
    fn flow_left_two_items_fit_on_one_row() {
        let mut scene = Scene::new();
        let a = sized(&mut scene, 100.0, 50.0);
        let b = sized(&mut scene, 100.0, 50.0);

        let mut layout = Layout::new(310.0, 200.0);
        layout.add(a).add(b);
        layout.flow_left(&mut scene);

        assert_eq!(position(&scene, a), (10.0, 10.0));
        assert_eq!(position(&scene, b), (120.0, 10.0));
    }

    #[test]
    fn flow_left_wraps_rows() {
        let mut scene = Scene::new();
        let ids: Vec<_> = (0..5).map(|_| sized(&mut scene, 100.0, 50.0)).collect();

        let mut layout = Layout::new(310.0, 400.0);
        for &id in &ids {
            layout.add(id);
        }
        layout.flow_left(&mut scene);

        assert_eq!(position(&scene, ids[0]), (10.0, 10.0));
        assert_eq!(position(&scene, ids[1]), (120.0, 10.0));
        assert_eq!(position(&scene, ids[2]), (10.0, 70.0));
        assert_eq!(position(&scene, ids[3]), (120.0, 70.0));
        assert_eq!(position(&scene, ids[4]), (10.0, 130.0));

        for &id in &ids {
            let (x, _) = position(&scene, id);
            assert!(x + 100.0 <= 310.0);
            assert_eq!(size(&scene, id), Size::new(100.0, 50.0));
        }
    }

    #[test]
    fn table_without_rows_uses_uniform_grid() {
        let mut scene = Scene::new();
        let ids: Vec<_> = (0..7).map(|_| sized(&mut scene, 0.0, 25.0)).collect();

        let mut layout = Layout::new(330.0, 330.0);
        for &id in &ids {
            layout.add(id);
        }
        layout.table(&mut scene, 3, None);

        // col width floor((330 - 40) / 3) = 96, row height floor((330 - 40) / 3) = 96
        for (i, &id) in ids.iter().enumerate() {
            let (x, y) = position(&scene, id);
            let col = (i % 3) as f64;
            let row = (i / 3) as f64;
            assert_eq!(x, 10.0 + col * 106.0, "item {i} x");
            assert_eq!(y, 10.0 + row * 106.0, "item {i} y");
            assert_eq!(size(&scene, id), Size::new(96.0, 96.0));
        }
    }

    #[test]
    fn table_with_rows_keeps_explicit_heights() {
        let mut scene = Scene::new();
        let a = sized(&mut scene, 0.0, 0.0);
        let b = sized(&mut scene, 0.0, 30.0);
        let c = sized(&mut scene, 0.0, 0.0);
        let d = sized(&mut scene, 0.0, 0.0);

        let mut layout = Layout::new(330.0, 200.0);
        layout.add(a).add(b).add(c).add(d);
        layout.table(&mut scene, 3, Some(2));

        // row height min(96, (200 - 20) / 2) = 90
        assert_eq!(size(&scene, a), Size::new(96.0, 90.0));
        assert_eq!(size(&scene, b), Size::new(96.0, 30.0));
        assert_eq!(size(&scene, c), Size::new(96.0, 90.0));
        assert_eq!(position(&scene, a), (10.0, 10.0));
        assert_eq!(position(&scene, b), (116.0, 10.0));
        assert_eq!(position(&scene, c), (222.0, 10.0));
        assert_eq!(position(&scene, d), (10.0, 110.0));
    }

    #[test]
    fn table_row_height_capped_by_column_width() {
        let mut scene = Scene::new();
        let a = sized(&mut scene, 0.0, 0.0);

        let mut layout = Layout::new(120.0, 1000.0);
        layout.add(a);
        layout.table(&mut scene, 2, Some(1));

        // col width floor((120 - 30) / 2) = 45, which beats (1000 - 20) / 1
        assert_eq!(size(&scene, a), Size::new(45.0, 45.0));
    }

    #[test]
    fn table_starts_at_margin() {
        let mut scene = Scene::new();
        let a = sized(&mut scene, 0.0, 0.0);

        let mut layout = Layout::new(330.0, 330.0).with_margin((5.0, 7.0));
        layout.add(a);
        layout.table(&mut scene, 3, None);
        assert_eq!(position(&scene, a), (15.0, 17.0));
    }

    #[test]
    fn table_with_zero_columns_is_a_no_op() {
        let mut scene = Scene::new();
        let a = sized(&mut scene, 4.0, 4.0);
        let mut layout = Layout::new(100.0, 100.0);
        layout.add(a);
        layout.table(&mut scene, 0, None);
        assert_eq!(position(&scene, a), (0.0, 0.0));
        assert_eq!(size(&scene, a), Size::new(4.0, 4.0));
    }

    #[test]
    fn removed_shapes_are_skipped() {
        let mut scene = Scene::new();
        let gone = sized(&mut scene, 100.0, 50.0);
        let kept = sized(&mut scene, 100.0, 50.0);
        scene.remove(gone);

        let mut layout = Layout::new(310.0, 200.0);
        layout.add(gone).add(kept);
        layout.flow_left(&mut scene);
        assert_eq!(position(&scene, kept), (10.0, 10.0));
    }

    #[test]
    fn clear_leaves_shapes_alone() {
        let mut scene = Scene::new();
        let mut text = TextShape::new();
        text.set_position(3.0, 4.0);
        let id = scene.insert(text);

        let mut layout = Layout::new(100.0, 100.0).with_padding(2.0);
        layout.add(id);
        layout.clear();
        assert!(layout.is_empty());
        layout.flow_left(&mut scene);
        assert_eq!(position(&scene, id), (3.0, 4.0));
    }
}
