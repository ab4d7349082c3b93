//! Indentation configuration for code generation.

use std::num::NonZeroU8;

/// Indentation step for generated code: a fixed number of spaces per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    width: NonZeroU8,
}

impl Indent {
    /// 4-space indentation (Swift, Xcode default).
    pub const SWIFT: Self = Self {
        width: NonZeroU8::new(4).unwrap(),
    };

    /// Indentation of `width` spaces, `None` when `width` is zero.
    pub fn spaces(width: u8) -> Option<Self> {
        NonZeroU8::new(width).map(|width| Self { width })
    }

    /// Number of spaces per level.
    pub fn width(&self) -> u8 {
        self.width.get()
    }

    /// The string for one indent level.
    pub fn unit(&self) -> String {
        " ".repeat(self.width() as usize)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::SWIFT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_unit() {
        assert_eq!(Indent::spaces(2).unwrap().unit(), "  ");
        assert_eq!(Indent::spaces(4).unwrap().unit(), "    ");
        assert_eq!(Indent::spaces(3).unwrap().unit(), "   ");
    }

    #[test]
    fn test_zero_width_is_rejected() {
        assert_eq!(Indent::spaces(0), None);
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::SWIFT);
        assert_eq!(Indent::default().width(), 4);
    }
}
