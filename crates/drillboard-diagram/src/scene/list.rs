use super::DrawCmd;

/// Recorded draw stream for one rendering of a diagram.
///
/// Insertion order is paint order (back-to-front). Two renders of the same
/// diagram at the same surface size produce equal lists, which is what
/// makes a thumbnail a faithful reduced-scale copy of the editor canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a draw command at the back of the stream.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::PxPoint;
    use crate::paint::INK;

    #[test]
    fn push_preserves_insertion_order() {
        let mut list = DrawList::new();
        list.push_dot(PxPoint::new(1.0, 1.0), 2.0, INK);
        list.push_dot(PxPoint::new(5.0, 5.0), 2.0, INK);

        let centers: Vec<f32> = list
            .items()
            .iter()
            .map(|cmd| match cmd {
                DrawCmd::Dot(d) => d.center.x,
                other => panic!("unexpected cmd: {other:?}"),
            })
            .collect();
        assert_eq!(centers, vec![1.0, 5.0]);
    }

    #[test]
    fn new_list_is_empty() {
        let list = DrawList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
