use super::DrawCmd;

/// Z-ordering key. Higher values are submitted later and land on top.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

#[derive(Debug, Clone, PartialEq)]
struct DrawItem {
    z: ZIndex,
    order: u32,
    cmd: DrawCmd,
}

/// Commands recorded for one frame.
///
/// Paint order is z ascending, then insertion order. The list keeps its
/// allocations across `clear()` so a per-frame list does not reallocate once
/// warmed up.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,
    sorted: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted = true;
    }

    /// Records a command at the given z-index.
    pub fn push(&mut self, z: ZIndex, cmd: impl Into<DrawCmd>) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem { z, order, cmd: cmd.into() });
        self.sorted = false;
    }

    /// Iterates commands in paint order.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawCmd> {
        if !self.sorted {
            self.items.sort_by_key(|it| (it.z, it.order));
            self.sorted = true;
        }
        self.items.iter().map(|it| &it.cmd)
    }
}
