//! Fixtures shared by unit tests: throwaway HTTP servers and a scripted model.

use std::net::SocketAddr;
use std::sync::Mutex;

use async_trait::async_trait;
use axum::{response::Html, routing::get, Router};

use crate::llm_client::{CompletionModel, LlmError};

/// Serves `app` on an ephemeral localhost port for the rest of the test.
pub async fn spawn_server(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Serves a static HTML page at `/job` and returns its URL.
pub async fn serve_html(html: &'static str) -> String {
    let app = Router::new().route("/job", get(move || async move { Html(html) }));
    let addr = spawn_server(app).await;
    format!("http://{addr}/job")
}

/// A `CompletionModel` that replays a canned reply and records every prompt.
pub struct ScriptedModel {
    reply: Result<String, String>,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedModel {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last().map(|(_, p)| p.clone())
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionModel for ScriptedModel {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), prompt.to_string()));
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(LlmError::Api {
                status: 429,
                message: message.clone(),
            }),
        }
    }
}
