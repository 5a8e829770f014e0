/// Color of the link from a node's parent to the node.
///
/// The color is stored on the child. An absent child counts as
/// [`Color::Black`], see [`crate::node::is_red`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    #[inline]
    pub fn is_red(self) -> bool {
        self == Color::Red
    }

    #[inline]
    pub fn is_black(self) -> bool {
        self == Color::Black
    }
}
