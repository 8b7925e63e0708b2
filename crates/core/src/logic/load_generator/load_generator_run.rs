use crate::prelude::*;

impl<S: SubmitTransaction> LoadGenerator<S> {
    /// Runs `load_factor` mints back to back, sleeping `interval` after each
    /// one. Stops at the first error and returns it.
    pub async fn run(&self) -> Result<()> {
        let load_factor = *self.parameters().load_factor();
        info!(
            "Simulating {load_factor} NFT mints of {} to {}",
            self.parameters().amount(),
            self.parameters().recipient()
        );
        for index in 0..load_factor {
            self.mint(index).await?;
            self.sleep_between_mints().await;
        }
        info!("Done simulating {load_factor} NFT mints");
        Ok(())
    }

    async fn mint(&self, index: usize) -> Result<()> {
        let request = self.parameters().mint_request(index);
        let nft_id = *request.nft_id();
        let transaction = request.into_transaction()?;
        debug!("Submitting {transaction} for {nft_id}");
        self.submitter()
            .submit_transaction(transaction)
            .await
            .inspect_err(|e| error!("Failed to submit {nft_id}: {e}"))?;
        Ok(())
    }

    async fn sleep_between_mints(&self) {
        let interval = *self.parameters().interval();
        log::trace!("Sleeping between mints ({} ms)", interval.as_millis());
        tokio::time::sleep(interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };
    use tokio::time::Instant;

    #[derive(Debug, Clone, Default)]
    struct RecordingSubmitter {
        submitted: Arc<Mutex<Vec<(Instant, Transaction)>>>,
    }

    impl RecordingSubmitter {
        fn submitted(&self) -> Vec<(Instant, Transaction)> {
            self.submitted.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SubmitTransaction for RecordingSubmitter {
        async fn submit_transaction(
            &self,
            transaction: Transaction,
        ) -> Result<(), SubmitTransactionError> {
            self.submitted
                .lock()
                .unwrap()
                .push((Instant::now(), transaction));
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct RejectingSubmitter {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SubmitTransaction for RejectingSubmitter {
        async fn submit_transaction(
            &self,
            _transaction: Transaction,
        ) -> Result<(), SubmitTransactionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(SubmitTransactionError::Rejected {
                underlying: "node unavailable".to_owned(),
            })
        }
    }

    fn parameters(load_factor: usize) -> LoadParameters {
        LoadParameters::builder()
            .load_factor(load_factor)
            .recipient(Address::from_bech32(DEFAULT_RECIPIENT).unwrap())
            .build()
    }

    fn generator(load_factor: usize) -> (LoadGenerator<RecordingSubmitter>, RecordingSubmitter) {
        let submitter = RecordingSubmitter::default();
        let generator = LoadGenerator::builder()
            .parameters(parameters(load_factor))
            .submitter(submitter.clone())
            .build();
        (generator, submitter)
    }

    #[tokio::test(start_paused = true)]
    async fn three_mints() {
        let (generator, submitter) = generator(3);
        let start = Instant::now();

        generator.run().await.unwrap();

        assert!(start.elapsed() >= Duration::from_secs(3));
        let submitted = submitter.submitted();
        assert_eq!(submitted.len(), 3);
        for (_, tx) in &submitted {
            assert_eq!(tx.outputs().len(), 1);
            assert_eq!(tx.outputs()[0].address().to_string(), DEFAULT_RECIPIENT);
            assert_eq!(*tx.outputs()[0].amount(), Value::ONE);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn one_interval_between_submissions() {
        let (generator, submitter) = generator(4);
        generator.run().await.unwrap();

        let submitted = submitter.submitted();
        for pair in submitted.windows(2) {
            assert!(pair[1].0 - pair[0].0 >= DEFAULT_INTERVAL);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn zero_load_factor_submits_nothing_and_does_not_wait() {
        let (generator, submitter) = generator(0);
        let start = Instant::now();

        generator.run().await.unwrap();

        assert_eq!(start.elapsed(), Duration::ZERO);
        assert!(submitter.submitted().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn hundred_mints() {
        let (generator, submitter) = generator(DEFAULT_LOAD_FACTOR);
        let start = Instant::now();

        generator.run().await.unwrap();

        let submitted = submitter.submitted();
        assert_eq!(submitted.len(), 100);
        assert!(start.elapsed() >= Duration::from_secs(100));
        let first = &submitted[0].1;
        assert!(submitted.iter().all(|(_, tx)| tx == first));
    }

    #[tokio::test(start_paused = true)]
    async fn first_rejection_stops_the_loop() {
        let generator = LoadGenerator::builder()
            .parameters(parameters(5))
            .submitter(RejectingSubmitter::default())
            .build();

        let result = generator.run().await;

        assert!(matches!(
            result,
            Err(Error::SubmitTransaction(SubmitTransactionError::Rejected { .. }))
        ));
        assert_eq!(generator.submitter().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_amount_fails_before_submitting() {
        let generator = LoadGenerator::builder()
            .parameters(
                LoadParameters::builder()
                    .load_factor(2)
                    .recipient(Address::from_bech32(DEFAULT_RECIPIENT).unwrap())
                    .amount(0u64)
                    .build(),
            )
            .submitter(RecordingSubmitter::default())
            .build();

        let result = generator.run().await;

        assert!(matches!(
            result,
            Err(Error::BuildTransaction(BuildTransactionError::ZeroValueOutput { index: 0 }))
        ));
        assert!(generator.submitter().submitted().is_empty());
    }
}
