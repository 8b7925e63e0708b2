use crate::prelude::*;

/// Accumulates outputs and finalizes them into a [`Transaction`].
#[derive(Debug, Clone, Default)]
pub struct TransactionBuilder {
    outputs: Vec<TransactionOutput>,
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_output(&mut self, output: TransactionOutput) -> &mut Self {
        self.outputs.push(output);
        self
    }

    pub fn build(self) -> Result<Transaction, BuildTransactionError> {
        if self.outputs.is_empty() {
            return Err(BuildTransactionError::NoOutputs);
        }
        if let Some(index) = self.outputs.iter().position(|o| o.amount().is_zero()) {
            return Err(BuildTransactionError::ZeroValueOutput { index });
        }
        Ok(Transaction::new(self.outputs))
    }
}
