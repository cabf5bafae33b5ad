use std::cell::Cell;
use std::rc::Rc;

use serde_json::json;
use when_visible::prelude::*;

use super::config::DemoConfig;

/// Answers partial reloads locally after a delay, standing in for a server
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    config: DemoConfig,
    served: Rc<Cell<u64>>,
}
impl SimulatedTransport {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            config,
            served: Rc::new(Cell::new(0)),
        }
    }
}

impl Transport for SimulatedTransport {
    fn fetch(&self, request: ReloadRequest) -> TransportFuture {
        let served = self.served.get() + 1;
        self.served.set(served);
        let DemoConfig {
            latency_ms,
            fail_every,
        } = self.config;

        Box::pin(async move {
            tokio::time::sleep(tokio::time::Duration::from_millis(latency_ms)).await;
            if fail_every != 0 && served % fail_every == 0 {
                return Err(TransportError::Status(503));
            }

            let mut props = PartialProps::new();
            for key in request.only {
                let value = json!({
                    "title": key,
                    "revision": served,
                    "items": (1..=3).map(|i| format!("{key} #{i}")).collect::<Vec<_>>(),
                });
                props.insert(key, value);
            }
            log::debug!("SimulatedTransport - served reload #{served}");
            Ok(props)
        })
    }
}
