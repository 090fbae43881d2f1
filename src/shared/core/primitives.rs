pub type ProductId = i64;

/// Purchase quantity. Signed so that decrement requests below one can be
/// represented and ignored instead of failing to parse.
pub type Amount = i64;
