/// In-memory births feed with per-day canned responses and optional gates
use async_trait::async_trait;
use birthday_explorer::modules::history::{BirthRecord, BirthsFeed, ResultSet};
use birthday_explorer::shared::{AppError, AppResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

type DayKey = (u32, u32);

#[derive(Default)]
pub struct ScriptedFeed {
    responses: Mutex<HashMap<DayKey, AppResult<ResultSet>>>,
    gates: Mutex<HashMap<DayKey, Arc<Notify>>>,
    calls: Mutex<Vec<DayKey>>,
}

impl ScriptedFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_births(self, month: u32, day: u32, records: Vec<BirthRecord>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert((month, day), Ok(records));
        self
    }

    pub fn with_failure(self, month: u32, day: u32) -> Self {
        self.responses.lock().unwrap().insert(
            (month, day),
            Err(AppError::Fetch(format!("scripted failure for {}/{}", month, day))),
        );
        self
    }

    /// Hold fetches for `month`/`day` until the returned `Notify` fires
    pub fn gate(&self, month: u32, day: u32) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.gates
            .lock()
            .unwrap()
            .insert((month, day), notify.clone());
        notify
    }

    pub fn calls(&self) -> Vec<DayKey> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BirthsFeed for ScriptedFeed {
    fn provider_name(&self) -> &'static str {
        "Scripted"
    }

    async fn fetch(&self, month: u32, day: u32) -> AppResult<ResultSet> {
        self.calls.lock().unwrap().push((month, day));

        let gate = self.gates.lock().unwrap().get(&(month, day)).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let response = self.responses.lock().unwrap().get(&(month, day)).cloned();
        response.unwrap_or_else(|| Ok(Vec::new()))
    }
}
