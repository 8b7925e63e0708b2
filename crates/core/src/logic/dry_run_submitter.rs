use crate::prelude::*;

/// Logs every transaction as JSON instead of sending it anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunSubmitter;

#[async_trait]
impl SubmitTransaction for DryRunSubmitter {
    async fn submit_transaction(
        &self,
        transaction: Transaction,
    ) -> Result<(), SubmitTransactionError> {
        let json = serde_json::to_string(&transaction).map_err(|e| {
            SubmitTransactionError::Serialize {
                underlying: e.to_debug_string(),
            }
        })?;
        info!("Dry run, not submitting {transaction}");
        debug!("{json}");
        Ok(())
    }
}
