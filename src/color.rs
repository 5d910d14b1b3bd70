//! Node colors.

use std::fmt;

/// The color of a red-black tree node.
///
/// The sentinel is always [`Color::Black`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    /// A red node. Never the root, never the parent of another red node.
    Red,
    /// A black node. Counted by the black height.
    Black,
}

impl Color {
    /// Returns `true` if the color is [`Color::Red`].
    #[inline]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Red)
    }

    /// Returns `true` if the color is [`Color::Black`].
    #[inline]
    pub const fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }

    /// One-letter tag used by the colored pre-order rendering (`R` or `B`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::Color;
    ///
    /// assert_eq!(Color::Red.tag(), 'R');
    /// assert_eq!(Color::Black.tag(), 'B');
    /// ```
    #[inline]
    pub const fn tag(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Black => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => formatter.write_str("red"),
            Self::Black => formatter.write_str("black"),
        }
    }
}
