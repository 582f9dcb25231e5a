mod quote_api;

use crate::api::API;

#[derive(Debug, Default)]
pub struct Engine;

impl Engine {
    #[tracing::instrument(name = "Engine::new")]
    pub fn new() -> Self {
        Self
    }
}

impl API for Engine {}
