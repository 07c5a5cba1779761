use std::sync::Mutex;

use async_trait::async_trait;

use super::{CompletionClient, CompletionRequest, LlmError};

/// A request as seen by `ScriptedCompletion`, kept for assertions.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// A scripted completion client for tests. Returns one fixed reply (or an API
/// failure) for every call and records what it was asked.
pub struct ScriptedCompletion {
    reply: Option<String>,
    available: bool,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedCompletion {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            available: true,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            available: true,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            reply: None,
            available: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedCompletion {
    fn available(&self) -> bool {
        self.available
    }

    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, LlmError> {
        if !self.available {
            return Err(LlmError::Unavailable);
        }
        self.requests.lock().unwrap().push(RecordedRequest {
            system: request.system.to_string(),
            prompt: request.prompt.to_string(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        });
        self.reply.clone().ok_or(LlmError::Api {
            status: 502,
            message: "scripted upstream failure".to_string(),
        })
    }
}
