use thiserror::Error;

use crate::modules::cart::core::decision::DecideError;
use crate::modules::cart::core::notice::CartNotice;
use crate::shared::infrastructure::cart_storage::StorageError;
use crate::shared::infrastructure::storefront_api::StorefrontApiError;

#[derive(Debug, Error)]
pub enum CartError {
    #[error(transparent)]
    Rejected(#[from] DecideError),

    #[error(transparent)]
    Api(#[from] StorefrontApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CartError {
    /// Notice shown to the user; everything except a stock rejection collapses
    /// into the operation's generic failure.
    pub fn notice(&self, operation_failed: CartNotice) -> CartNotice {
        match self {
            CartError::Rejected(DecideError::OutOfStock { .. }) => CartNotice::OutOfStock,
            _ => operation_failed,
        }
    }
}
