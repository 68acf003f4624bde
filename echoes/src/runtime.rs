//! Runtime wiring helpers for an embedding chat UI.

use std::sync::Arc;

use crate::{
    ChatError, ChatOrchestrator, ChatRuntimeHooks, ProviderTransport, SafeChatHooks, Settings,
    SettingsStore, SummaryResult, TracingObservabilityHooks, provider_factory,
};

/// Orchestrator plus the settings it runs with and the store they persist to.
pub struct RuntimeBundle {
    pub orchestrator: ChatOrchestrator,
    pub settings: Settings,
    pub store: Arc<dyn SettingsStore>,
}

impl RuntimeBundle {
    /// Replaces the active settings and persists them.
    pub async fn save_settings(&mut self, settings: Settings) -> Result<(), ChatError> {
        self.store.save(&settings).await?;
        self.settings = settings;
        Ok(())
    }

    /// Appends an accepted summary to the world knowledge and persists it.
    pub async fn apply_summary(&mut self, summary: &SummaryResult) -> Result<(), ChatError> {
        let mut settings = self.settings.clone();
        summary.append_to(&mut settings);
        self.save_settings(settings).await
    }
}

pub fn chat_hooks() -> Arc<dyn ChatRuntimeHooks> {
    Arc::new(SafeChatHooks::new(TracingObservabilityHooks))
}

/// Orchestrator over `transport` with tracing hooks on both layers.
pub fn orchestrator(transport: Arc<dyn ProviderTransport>) -> ChatOrchestrator {
    ChatOrchestrator::new(Arc::new(provider_factory(transport))).with_hooks(chat_hooks())
}

pub async fn build_runtime(store: Arc<dyn SettingsStore>) -> Result<RuntimeBundle, ChatError> {
    let transport = crate::http_transport()?;
    build_runtime_with(store, transport).await
}

pub async fn build_runtime_with(
    store: Arc<dyn SettingsStore>,
    transport: Arc<dyn ProviderTransport>,
) -> Result<RuntimeBundle, ChatError> {
    let settings = store.load().await?;
    Ok(RuntimeBundle {
        orchestrator: orchestrator(transport),
        settings,
        store,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::{
        HttpRequest, HttpResponse, InMemorySettingsStore, ProviderError, ProviderFuture,
        ProviderKind, Role,
    };

    use super::*;

    #[derive(Debug)]
    struct FakeTransport {
        bodies: Mutex<Vec<String>>,
    }

    impl FakeTransport {
        fn replying(bodies: &[&str]) -> Self {
            Self {
                bodies: Mutex::new(bodies.iter().rev().map(|body| body.to_string()).collect()),
            }
        }
    }

    impl ProviderTransport for FakeTransport {
        fn execute<'a>(
            &'a self,
            _request: HttpRequest,
        ) -> ProviderFuture<'a, Result<HttpResponse, ProviderError>> {
            Box::pin(async move {
                let body = self
                    .bodies
                    .lock()
                    .expect("bodies lock")
                    .pop()
                    .ok_or_else(|| ProviderError::transport("no response left"))?;
                Ok(HttpResponse::new(200, body))
            })
        }
    }

    fn proxy_reply(content: &str) -> String {
        serde_json::json!({"choices": [{"message": {"content": content}}]}).to_string()
    }

    #[tokio::test]
    async fn runtime_runs_a_turn_and_persists_an_applied_summary() {
        let settings = Settings::new(ProviderKind::Proxy, "https://relay.test/v1", "sk-1")
            .with_model("gpt-4o-mini");
        let store = Arc::new(InMemorySettingsStore::with_settings(settings));
        let turn = proxy_reply(r#"{"reply":"Evening.","suggestions":["Hi","Hello","Hey"]}"#);
        let summary = proxy_reply("[Time] t\n[Location] Online chat\n[Content]\n- greeting");
        let transport = Arc::new(FakeTransport::replying(&[&turn, &summary]));

        let mut runtime = build_runtime_with(store.clone(), transport)
            .await
            .expect("runtime should build");
        let settings = runtime.settings.clone();

        let outcome = runtime
            .orchestrator
            .send_turn(&settings, "Good evening")
            .await
            .expect("turn should be accepted");
        assert_eq!(outcome.reply, "Evening.");
        assert_eq!(outcome.suggestions.len(), 3);
        let history = runtime.orchestrator.history().messages();
        assert_eq!(history[1].role, Role::Assistant);

        let summary = runtime
            .orchestrator
            .summarize(&settings, 5)
            .await
            .expect("summary should succeed");
        runtime
            .apply_summary(&summary)
            .await
            .expect("summary should persist");

        let stored = store.load().await.expect("load");
        assert!(stored.world_knowledge.contains("- greeting"));
        assert_eq!(stored, runtime.settings);
    }
}
