use std::fmt;

/// User-facing failure categories. Each maps to one fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartNotice {
    OutOfStock,
    AddFailed,
    RemoveFailed,
    UpdateFailed,
}

impl CartNotice {
    pub fn message(self) -> &'static str {
        match self {
            CartNotice::OutOfStock => "Requested quantity is out of stock",
            CartNotice::AddFailed => "Failed to add product",
            CartNotice::RemoveFailed => "Failed to remove product",
            CartNotice::UpdateFailed => "Failed to update product amount",
        }
    }
}

impl fmt::Display for CartNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
