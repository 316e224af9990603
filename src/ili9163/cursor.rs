use crate::ili9163::{MAX_X, MAX_Y};

/// Where the driver believes the controller will put the next pixel.
///
/// The controller auto-increments inside the open address window; this mirrors that
/// so row-sequential writes can skip re-opening the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    position: Option<(u16, u16)>,
    /// Inclusive bounds of the open window: first column, last column, last page
    left: u16,
    right: u16,
    bottom: u16,
}

impl Cursor {
    /// Nothing known about the controller, the next write must open a window
    pub(crate) const fn unknown() -> Self {
        Cursor {
            position: None,
            left: 0,
            right: MAX_X,
            bottom: MAX_Y,
        }
    }

    /// True when a write at (x, y) continues the previous one
    pub(crate) fn is_at(&self, x: u16, y: u16) -> bool {
        self.position == Some((x, y))
    }

    /// A window (x1, y1)..=(x2, y2) was just opened, the pointer is at its top left
    pub(crate) fn place(&mut self, x1: u16, y1: u16, x2: u16, y2: u16) {
        *self = Cursor {
            position: Some((x1, y1)),
            left: x1,
            right: x2,
            bottom: y2,
        };
    }

    /// One pixel was written at the cursor
    pub(crate) fn advance(&mut self) {
        let Some((x, y)) = self.position else {
            return;
        };
        if x < self.right {
            self.position = Some((x + 1, y));
        } else if y < self.bottom {
            // the controller wraps to the window's first column
            self.position = Some((self.left, y + 1));
        } else {
            self.invalidate();
        }
    }

    pub(crate) fn invalidate(&mut self) {
        *self = Self::unknown();
    }
}
