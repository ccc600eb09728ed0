//! Carries out [`Effect`]s produced by the app state machine.
//!
//! Fetches run as tokio tasks and report back over the event channel; the
//! suggestion fetch goes through the [`Debouncer`] so only one is ever armed.

use std::ops::ControlFlow;
use std::time::Duration;

use crate::app::Effect;
use crate::client::ApiClient;
use crate::debounce::Debouncer;
use crate::event::{AppEvent, EventSender};

pub struct EffectRunner {
    client: ApiClient,
    tx: EventSender,
    debouncer: Debouncer,
    debounce: Duration,
}

impl EffectRunner {
    pub fn new(client: ApiClient, tx: EventSender, debounce: Duration) -> Self {
        Self {
            client,
            tx,
            debouncer: Debouncer::new(),
            debounce,
        }
    }

    /// Returns `Break` when the app asked to quit.
    pub fn execute(&mut self, effect: Effect) -> ControlFlow<()> {
        match effect {
            Effect::ScheduleSuggestions { generation, query } => {
                let client = self.client.clone();
                let tx = self.tx.clone();
                self.debouncer.schedule(self.debounce, async move {
                    tracing::debug!(generation, %query, "fetching suggestions");
                    let result = client.search(&query).await;
                    let _ = tx.send(AppEvent::Suggestions { generation, result });
                });
            }
            Effect::CancelSuggestions => self.debouncer.cancel(),
            Effect::Summarize { seq, app_id } => {
                let client = self.client.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = client.summarize(&app_id).await;
                    let _ = tx.send(AppEvent::Summary {
                        seq,
                        result: Box::new(result),
                    });
                });
            }
            Effect::Quit => {
                self.debouncer.cancel();
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    pub fn execute_all(&mut self, effects: Vec<Effect>) -> ControlFlow<()> {
        for effect in effects {
            self.execute(effect)?;
        }
        ControlFlow::Continue(())
    }
}
