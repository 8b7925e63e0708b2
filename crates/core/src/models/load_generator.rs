use crate::prelude::*;

/// Submits `load_factor` mint transactions through `submitter`, one at a time.
#[derive(Debug, Getters, Builder)]
pub struct LoadGenerator<S> {
    #[getset(get = "pub")]
    parameters: LoadParameters,

    #[getset(get = "pub")]
    submitter: S,
}
