use crate::client::{ApiResult, Executor};
use crate::domain::Balance;
use crate::transport::encode_get_balance;

/// Account-level insights.
#[derive(Debug, Clone, Copy)]
pub struct Insights<'a> {
    executor: &'a Executor,
}

impl<'a> Insights<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// Current account balance (`GET get-balance`).
    pub async fn get_balance(self) -> ApiResult<Balance> {
        self.executor.call(encode_get_balance()).await
    }
}
