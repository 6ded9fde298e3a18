//! Trait for overlay rendering and input polling backends.

use crate::tracker::Shape;

/// Interactive key relevant to the tracking loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// `q`: terminate the loop.
    Quit,
    /// `c`: reserved clear hook.
    Clear,
    /// Any other key, passed through unhandled.
    Other(char),
}

impl Key {
    pub fn from_char(c: char) -> Key {
        match c {
            'q' => Key::Quit,
            'c' => Key::Clear,
            other => Key::Other(other),
        }
    }
}

/// Trait for display backends.
///
/// `draw` buries the overlay shapes into the frame; `present` shows it and
/// polls for one pending keypress. Both block until done, which makes the
/// pipeline's single iteration fully synchronous.
pub trait Renderer<F> {
    /// Error type for rendering failures.
    type Error;

    /// Draw the overlay shapes onto the frame, in order.
    fn draw(&mut self, frame: &mut F, shapes: &[Shape]) -> Result<(), Self::Error>;

    /// Display the frame and poll for a keypress.
    fn present(&mut self, frame: &F) -> Result<Option<Key>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_char('q'), Key::Quit);
        assert_eq!(Key::from_char('c'), Key::Clear);
        assert_eq!(Key::from_char('x'), Key::Other('x'));
    }
}
