//! # Post Service
//!
//! Executes the four network operations against the remote posts collection
//! and delivers their outcomes back through a channel.
//!
//! Each invocation spawns one task and is attempted exactly once: no retries,
//! no timeouts beyond the client defaults, no cancellation. The controller
//! drains the channel on its own thread, so completions land on shared state
//! in arrival order — a slow create resolving after a later delete will
//! re-append its row. That ordering race is accepted behavior.

use crate::app::events::{ApiEvent, ApiOperation};
use crate::app::models::{Draft, Post, PostId};
use anyhow::Result;
use reqwest::Client;
use tokio::sync::mpsc;

/// Buffered completions; the UI drains faster than requests resolve.
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Service owning the HTTP client and the completion channel for the remote
/// posts collection.
pub struct PostService {
    client: Client,
    base_url: String,
    event_sender: mpsc::Sender<ApiEvent>,
    event_receiver: mpsc::Receiver<ApiEvent>,
}

impl PostService {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into());
        tracing::debug!("Creating PostService for {base_url}");

        let (event_sender, event_receiver) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url,
            event_sender,
            event_receiver,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sender half of the completion channel, for tasks (and tests) that feed
    /// outcomes back to the control thread.
    pub fn event_sender(&self) -> mpsc::Sender<ApiEvent> {
        self.event_sender.clone()
    }

    /// Next completed outcome, if any has arrived. Non-blocking.
    pub fn poll_event(&mut self) -> Option<ApiEvent> {
        self.event_receiver.try_recv().ok()
    }

    /// GET the full collection.
    pub fn fetch_all(&self) {
        let client = self.client.clone();
        let url = collection_url(&self.base_url);
        let sender = self.event_sender();

        tokio::spawn(async move {
            tracing::debug!("GET {url}");
            let outcome = match fetch_all_request(&client, &url).await {
                Ok(posts) => ApiEvent::CollectionLoaded { posts },
                Err(e) => failure(ApiOperation::Load, e),
            };
            let _ = sender.send(outcome).await;
        });
    }

    /// POST the draft as-is; empty fields are submitted without validation.
    pub fn create(&self, draft: Draft) {
        let client = self.client.clone();
        let url = collection_url(&self.base_url);
        let sender = self.event_sender();

        tokio::spawn(async move {
            tracing::debug!("POST {url}");
            let outcome = match create_request(&client, &url, &draft).await {
                Ok(post) => ApiEvent::PostCreated { post },
                Err(e) => failure(ApiOperation::Create, e),
            };
            let _ = sender.send(outcome).await;
        });
    }

    /// PUT the full post to its resource.
    pub fn update(&self, post: Post) {
        let client = self.client.clone();
        let url = item_url(&self.base_url, post.id);
        let sender = self.event_sender();

        tokio::spawn(async move {
            tracing::debug!("PUT {url}");
            let outcome = match update_request(&client, &url, &post).await {
                Ok(post) => ApiEvent::PostUpdated { post },
                Err(e) => failure(ApiOperation::Update, e),
            };
            let _ = sender.send(outcome).await;
        });
    }

    /// DELETE the resource for the given id.
    pub fn delete(&self, id: PostId) {
        let client = self.client.clone();
        let url = item_url(&self.base_url, id);
        let sender = self.event_sender();

        tokio::spawn(async move {
            tracing::debug!("DELETE {url}");
            let outcome = match delete_request(&client, &url).await {
                Ok(()) => ApiEvent::PostDeleted { id },
                Err(e) => failure(ApiOperation::Delete, e),
            };
            let _ = sender.send(outcome).await;
        });
    }
}

fn failure(operation: ApiOperation, error: anyhow::Error) -> ApiEvent {
    ApiEvent::RequestFailed {
        operation,
        message: error.to_string(),
    }
}

async fn fetch_all_request(client: &Client, url: &str) -> Result<Vec<Post>> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.json().await?)
}

async fn create_request(client: &Client, url: &str, draft: &Draft) -> Result<Post> {
    let response = client.post(url).json(draft).send().await?.error_for_status()?;
    Ok(response.json().await?)
}

async fn update_request(client: &Client, url: &str, post: &Post) -> Result<Post> {
    let response = client.put(url).json(post).send().await?.error_for_status()?;
    Ok(response.json().await?)
}

async fn delete_request(client: &Client, url: &str) -> Result<()> {
    client.delete(url).send().await?.error_for_status()?;
    Ok(())
}

fn normalize_base_url(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}

fn collection_url(base_url: &str) -> String {
    format!("{base_url}/posts")
}

fn item_url(base_url: &str, id: PostId) -> String {
    format!("{base_url}/posts/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_the_wire_contract() {
        let base = "https://jsonplaceholder.typicode.com";
        assert_eq!(collection_url(base), "https://jsonplaceholder.typicode.com/posts");
        assert_eq!(item_url(base, 2), "https://jsonplaceholder.typicode.com/posts/2");
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        assert_eq!(normalize_base_url("http://localhost:3000/".to_string()), "http://localhost:3000");
        assert_eq!(normalize_base_url("http://localhost:3000".to_string()), "http://localhost:3000");
    }

    #[tokio::test]
    async fn poll_event_is_empty_until_a_task_completes() {
        let mut service = PostService::new("http://localhost:1").unwrap();
        assert!(service.poll_event().is_none());
    }

    #[tokio::test]
    async fn events_arrive_in_send_order() {
        let mut service = PostService::new("http://localhost:1").unwrap();
        let sender = service.event_sender();

        sender
            .send(ApiEvent::PostDeleted { id: 1 })
            .await
            .unwrap();
        sender
            .send(ApiEvent::PostCreated {
                post: Post::new(2, "t", "b"),
            })
            .await
            .unwrap();

        assert_eq!(service.poll_event(), Some(ApiEvent::PostDeleted { id: 1 }));
        assert!(matches!(
            service.poll_event(),
            Some(ApiEvent::PostCreated { .. })
        ));
        assert!(service.poll_event().is_none());
    }
}
