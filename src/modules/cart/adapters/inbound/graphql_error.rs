use async_graphql::{Error, ErrorExtensions};

use crate::modules::cart::application::errors::CartError;
use crate::modules::cart::core::notice::CartNotice;

/// GraphQL error whose message is the user notice; the root cause goes into `extensions.reason`.
pub fn graphql_error(err: &CartError, operation_failed: CartNotice) -> Error {
    let reason = err.to_string();
    Error::new(err.notice(operation_failed).message()).extend_with(|_, ext| ext.set("reason", reason))
}
