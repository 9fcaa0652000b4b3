use super::BoxCmd;

/// Recorded draw stream for a frame.
///
/// `push_box()` is O(1); iteration is in submission order. `clear()` keeps
/// allocated capacity, so a warmed list allocates nothing per frame.
#[derive(Debug, Default)]
pub struct DrawList {
    boxes: Vec<BoxCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.boxes.clear();
    }

    #[inline]
    pub fn push_box(&mut self, cmd: BoxCmd) {
        self.boxes.push(cmd);
    }

    /// Returns boxes in submission order.
    #[inline]
    pub fn boxes(&self) -> &[BoxCmd] {
        &self.boxes
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use glam::Mat4;

    fn cmd(x: f32) -> BoxCmd {
        BoxCmd {
            model: Mat4::from_translation(glam::Vec3::new(x, 0.0, 0.0)),
            normal: Mat4::IDENTITY,
            color: Color::WHITE,
            lit: true,
        }
    }

    #[test]
    fn preserves_submission_order() {
        let mut list = DrawList::new();
        list.push_box(cmd(1.0));
        list.push_box(cmd(2.0));
        assert_eq!(list.boxes()[0], cmd(1.0));
        assert_eq!(list.boxes()[1], cmd(2.0));
    }

    #[test]
    fn clear_empties_but_list_remains_usable() {
        let mut list = DrawList::new();
        list.push_box(cmd(1.0));
        list.clear();
        assert!(list.is_empty());
        list.push_box(cmd(3.0));
        assert_eq!(list.boxes().len(), 1);
    }
}
