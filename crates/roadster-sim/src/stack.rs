use glam::Mat4;

/// LIFO stack of transform snapshots for hierarchical scene composition.
///
/// `push` stores the matrix *by value*, so later mutation of the caller's
/// "current" transform never changes a stored snapshot. The intended pattern
/// is: push the parent frame, compose a child's local transforms onto a
/// working copy, emit the child, then `pop` to restore the parent before the
/// next sibling. Every sibling therefore starts from the same parent matrix,
/// not from the previous sibling's end state.
#[derive(Debug, Default)]
pub struct MatrixStack {
    stack: Vec<Mat4>,
}

impl MatrixStack {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a snapshot of `m`.
    #[inline]
    pub fn push(&mut self, m: Mat4) {
        self.stack.push(m);
    }

    /// Removes and returns the most recently pushed snapshot.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty. An unmatched pop is an unbalanced
    /// push/pop pair in the scene composition, which must fail fast rather
    /// than hand back a default matrix.
    #[inline]
    pub fn pop(&mut self) -> Mat4 {
        self.stack
            .pop()
            .expect("MatrixStack::pop on empty stack (unbalanced push/pop)")
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn pop_returns_value_at_push_time() {
        let mut stack = MatrixStack::new();
        let mut current = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let snapshot = current;

        stack.push(current);
        // Mutating the working matrix must not affect the stored snapshot.
        current *= Mat4::from_scale(Vec3::splat(10.0));

        assert_eq!(stack.pop(), snapshot);
    }

    #[test]
    fn pop_is_lifo() {
        let mut stack = MatrixStack::new();
        let a = Mat4::from_translation(Vec3::X);
        let b = Mat4::from_translation(Vec3::Y);

        stack.push(a);
        stack.push(b);

        assert_eq!(stack.pop(), b);
        assert_eq!(stack.pop(), a);
        assert!(stack.is_empty());
    }

    #[test]
    #[should_panic(expected = "unbalanced push/pop")]
    fn pop_on_empty_panics() {
        MatrixStack::new().pop();
    }

    #[test]
    fn len_tracks_pushes() {
        let mut stack = MatrixStack::new();
        assert_eq!(stack.len(), 0);
        stack.push(Mat4::IDENTITY);
        stack.push(Mat4::IDENTITY);
        assert_eq!(stack.len(), 2);
        stack.pop();
        assert_eq!(stack.len(), 1);
    }
}
