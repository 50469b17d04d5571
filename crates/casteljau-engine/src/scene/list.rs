use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// `push()` is O(1); paint-order iteration reuses an internal index buffer,
/// so a warmed list allocates nothing per frame.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning draw
    /// commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // SortKey includes insertion order, so the sort is total and stable.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn marker(list: &mut DrawList, z: i32, x: f32) {
        list.push_solid_circle(ZIndex::new(z), Vec2::new(x, 0.0), 1.0, Color::transparent());
    }

    fn xs_in_paint_order(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Circle(c) => c.center.x,
                _ => panic!("unexpected command"),
            })
            .collect()
    }

    #[test]
    fn lower_z_paints_first() {
        let mut list = DrawList::new();
        marker(&mut list, 5, 1.0);
        marker(&mut list, -1, 2.0);
        marker(&mut list, 0, 3.0);
        assert_eq!(xs_in_paint_order(&mut list), vec![2.0, 3.0, 1.0]);
    }

    #[test]
    fn equal_z_keeps_insertion_order() {
        let mut list = DrawList::new();
        for i in 0..4 {
            marker(&mut list, 7, i as f32);
        }
        assert_eq!(xs_in_paint_order(&mut list), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn clear_resets_ordering() {
        let mut list = DrawList::new();
        marker(&mut list, 1, 1.0);
        list.clear();
        assert!(list.items().is_empty());
        marker(&mut list, 0, 9.0);
        assert_eq!(xs_in_paint_order(&mut list), vec![9.0]);
    }
}
