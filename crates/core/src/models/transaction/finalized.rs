use crate::prelude::*;

/// A finalized transaction, as produced by [`TransactionBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Display)]
#[display("Transaction {{ outputs: {}, total: {} }}", outputs.len(), self.total_value())]
pub struct Transaction {
    #[getset(get = "pub")]
    outputs: Vec<TransactionOutput>,
}

impl Transaction {
    pub(crate) fn new(outputs: Vec<TransactionOutput>) -> Self {
        Self { outputs }
    }

    pub fn total_value(&self) -> Value {
        self.outputs
            .iter()
            .map(|o| *o.amount())
            .fold(Value::default(), Value::saturating_add)
    }
}
