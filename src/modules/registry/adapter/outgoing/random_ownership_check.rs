use async_trait::async_trait;
use rand::Rng;

use crate::registry::application::domain::channel::Channel;
use crate::registry::application::ports::outgoing::{OwnershipCheck, OwnershipCheckError};

/// Placeholder prover: passes a configurable share of attempts at random.
///
/// TODO: replace with a real ownership proof (DNS TXT challenge for
/// websites, OAuth handle linking for social channels) once the challenge
/// service exists; the pipeline only talks to the `OwnershipCheck` port.
#[derive(Clone, Debug)]
pub struct RandomOwnershipCheck {
    success_rate: f64,
}

impl RandomOwnershipCheck {
    pub fn new(success_rate: f64) -> Self {
        Self {
            success_rate: success_rate.clamp(0.0, 1.0),
        }
    }
}

impl Default for RandomOwnershipCheck {
    fn default() -> Self {
        Self::new(0.8)
    }
}

#[async_trait]
impl OwnershipCheck for RandomOwnershipCheck {
    async fn prove(&self, _channel: &Channel) -> Result<bool, OwnershipCheckError> {
        Ok(rand::thread_rng().gen::<f64>() < self.success_rate)
    }
}
