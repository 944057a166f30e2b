//! Request/response exchange between running actions and the modal dialog
//!
//! Actions hold a [`Prompter`] and await its methods. Each call sends a
//! [`PromptExchange`] to the UI loop, which opens a modal and answers through
//! the exchange's oneshot sender once the user resolves it.

use super::request::{PromptRequest, PromptResponse, SelectOption};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, Mutex};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("prompt dialog is no longer available")]
    Closed,
    #[error("prompt was dropped before it was answered")]
    Dropped,
    #[error("prompt answered with a response of the wrong kind")]
    Mismatched,
}

/// A pending prompt travelling to the UI
#[derive(Debug)]
pub struct PromptExchange {
    pub request: PromptRequest,
    pub reply: oneshot::Sender<PromptResponse>,
}

/// Action-side handle for asking the user questions
#[derive(Debug, Clone)]
pub struct Prompter {
    requests: mpsc::UnboundedSender<PromptExchange>,
    /// Held for the duration of an exchange so only one prompt is ever open
    exclusive: Arc<Mutex<()>>,
}

/// UI-side end of the prompt channel
#[derive(Debug)]
pub struct PromptReceiver {
    rx: mpsc::UnboundedReceiver<PromptExchange>,
}

impl PromptReceiver {
    /// Next waiting prompt, if any
    pub fn try_next(&mut self) -> Option<PromptExchange> {
        self.rx.try_recv().ok()
    }
}

/// Create a connected prompter/receiver pair
pub fn prompt_channel() -> (Prompter, PromptReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        Prompter {
            requests: tx,
            exclusive: Arc::new(Mutex::new(())),
        },
        PromptReceiver { rx },
    )
}

impl Prompter {
    async fn exchange(&self, request: PromptRequest) -> Result<PromptResponse, PromptError> {
        let _open = self.exclusive.lock().await;
        let (reply, answer) = oneshot::channel();
        tracing::debug!(prompt = request.prompt(), "opening prompt");
        self.requests
            .send(PromptExchange { request, reply })
            .map_err(|_| PromptError::Closed)?;
        answer.await.map_err(|_| PromptError::Dropped)
    }

    /// Ask for free text. Resolves with the trimmed input, or `None` if cancelled.
    pub async fn text(
        &self,
        prompt: &str,
        initial_value: Option<&str>,
    ) -> Result<Option<String>, PromptError> {
        let request = PromptRequest::Text {
            prompt: prompt.to_string(),
            initial_value: initial_value.map(str::to_string),
        };
        match self.exchange(request).await? {
            PromptResponse::Text(value) => Ok(Some(value)),
            PromptResponse::Cancelled => Ok(None),
            PromptResponse::Select(_) => Err(PromptError::Mismatched),
        }
    }

    /// Ask the user to pick from `options`. Resolves with the chosen values,
    /// or `None` if cancelled.
    pub async fn select(
        &self,
        prompt: &str,
        options: Vec<SelectOption>,
        multi: bool,
    ) -> Result<Option<Vec<String>>, PromptError> {
        let request = PromptRequest::Select {
            prompt: prompt.to_string(),
            options,
            multi,
        };
        match self.exchange(request).await? {
            PromptResponse::Select(values) => Ok(Some(values)),
            PromptResponse::Cancelled => Ok(None),
            PromptResponse::Text(_) => Err(PromptError::Mismatched),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio_test::{assert_pending, assert_ready_eq, task};

    #[test]
    fn test_text_stays_pending_until_answered() {
        let (prompter, mut receiver) = prompt_channel();
        let mut fut = task::spawn(prompter.text("name?", Some("Acme")));

        assert_pending!(fut.poll());
        let exchange = receiver.try_next().expect("request sent");
        assert_eq!(
            exchange.request,
            PromptRequest::Text {
                prompt: "name?".to_string(),
                initial_value: Some("Acme".to_string()),
            }
        );
        assert_pending!(fut.poll());

        exchange
            .reply
            .send(PromptResponse::Text("Acme".to_string()))
            .unwrap();
        assert!(fut.is_woken());
        assert_ready_eq!(fut.poll(), Ok(Some("Acme".to_string())));
    }

    #[test]
    fn test_cancelled_select_resolves_none() {
        let (prompter, mut receiver) = prompt_channel();
        let options = vec![SelectOption::new("a", "A")];
        let mut fut = task::spawn(prompter.select("pick", options, false));

        assert_pending!(fut.poll());
        let exchange = receiver.try_next().unwrap();
        exchange.reply.send(PromptResponse::Cancelled).unwrap();
        assert_ready_eq!(fut.poll(), Ok(None));
    }

    #[test]
    fn test_mismatched_response_is_an_error() {
        let (prompter, mut receiver) = prompt_channel();
        let mut fut = task::spawn(prompter.text("name?", None));

        assert_pending!(fut.poll());
        let exchange = receiver.try_next().unwrap();
        exchange
            .reply
            .send(PromptResponse::Select(vec!["a".to_string()]))
            .unwrap();
        assert_ready_eq!(fut.poll(), Err(PromptError::Mismatched));
    }

    #[test]
    fn test_dropped_reply_is_an_error() {
        let (prompter, mut receiver) = prompt_channel();
        let mut fut = task::spawn(prompter.text("name?", None));

        assert_pending!(fut.poll());
        drop(receiver.try_next().unwrap());
        assert_ready_eq!(fut.poll(), Err(PromptError::Dropped));
    }

    #[test]
    fn test_closed_receiver_is_an_error() {
        let (prompter, receiver) = prompt_channel();
        drop(receiver);
        let mut fut = task::spawn(prompter.text("name?", None));
        assert_ready_eq!(fut.poll(), Err(PromptError::Closed));
    }

    #[test]
    fn test_second_prompt_waits_for_first() {
        let (prompter, mut receiver) = prompt_channel();
        let second_prompter = prompter.clone();
        let mut first = task::spawn(prompter.text("first", None));
        let mut second = task::spawn(second_prompter.text("second", None));

        assert_pending!(first.poll());
        assert_pending!(second.poll());

        let exchange = receiver.try_next().unwrap();
        assert_eq!(exchange.request.prompt(), "first");
        assert!(receiver.try_next().is_none());

        exchange
            .reply
            .send(PromptResponse::Text(String::new()))
            .unwrap();
        assert_ready_eq!(first.poll(), Ok(Some(String::new())));
        drop(first);

        assert_pending!(second.poll());
        assert_eq!(receiver.try_next().unwrap().request.prompt(), "second");
    }
}
