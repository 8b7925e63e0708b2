use crate::prelude::*;

/// Hands a finalized transaction over to whatever delivers it to a network.
///
/// How (or whether) the transaction reaches a node is up to the implementor;
/// the load generator only cares whether the call returned an error.
#[async_trait]
pub trait SubmitTransaction: Send + Sync {
    async fn submit_transaction(
        &self,
        transaction: Transaction,
    ) -> Result<(), SubmitTransactionError>;
}
