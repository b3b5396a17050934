//! Input/output ports connecting a view-model actor to its view.
//!
//! Each view-model runs as one tokio task. The view pushes inputs into an
//! unbounded channel and observes state through a `watch` channel. All
//! state mutation happens inside the actor, so publication order matches
//! processing order for a given instance.

use thiserror::Error;
use tokio::sync::{mpsc, watch};

use crate::ui::mvi::UiState;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PortError {
    #[error("view-model has stopped")]
    Disconnected,
}

/// View-side handle: send intents in, read published state out.
pub struct ViewModelHandle<I, S> {
    input: mpsc::UnboundedSender<I>,
    state: watch::Receiver<S>,
}

impl<I, S> Clone for ViewModelHandle<I, S> {
    fn clone(&self) -> Self {
        Self {
            input: self.input.clone(),
            state: self.state.clone(),
        }
    }
}

impl<I: Send + 'static, S: UiState> ViewModelHandle<I, S> {
    pub(crate) fn new(input: mpsc::UnboundedSender<I>, state: watch::Receiver<S>) -> Self {
        Self { input, state }
    }

    pub fn send(&self, input: I) -> Result<(), PortError> {
        self.input.send(input).map_err(|_| PortError::Disconnected)
    }

    /// Latest published state.
    pub fn state(&self) -> S {
        self.state.borrow().clone()
    }

    /// Fresh receiver for views that render on every change.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.state.clone()
    }

    /// Wait until the published state satisfies `predicate`.
    pub async fn wait_for(&self, predicate: impl FnMut(&S) -> bool) -> Result<S, PortError> {
        let mut receiver = self.state.clone();
        let state = receiver
            .wait_for(predicate)
            .await
            .map_err(|_| PortError::Disconnected)?
            .clone();
        Ok(state)
    }
}

/// Actor-side output port.
pub(crate) struct StatePublisher<S> {
    sender: watch::Sender<S>,
}

impl<S: UiState> StatePublisher<S> {
    pub(crate) fn new(initial: S) -> (Self, watch::Receiver<S>) {
        let (sender, receiver) = watch::channel(initial);
        (Self { sender }, receiver)
    }

    /// Publish `state`, notifying subscribers only if it differs.
    pub(crate) fn publish(&self, state: &S) {
        self.sender.send_if_modified(|current| {
            if current == state {
                false
            } else {
                *current = state.clone();
                true
            }
        });
    }
}

/// Resolves at `deadline`, or never when there is none.
pub(crate) async fn sleep_until_deadline(deadline: Option<tokio::time::Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Counter(u32);

    impl UiState for Counter {}

    #[tokio::test]
    async fn publish_skips_unchanged_state() {
        let (publisher, mut receiver) = StatePublisher::new(Counter(0));
        publisher.publish(&Counter(0));
        assert!(!receiver.has_changed().unwrap());

        publisher.publish(&Counter(1));
        assert!(receiver.has_changed().unwrap());
        assert_eq!(*receiver.borrow_and_update(), Counter(1));
    }

    #[tokio::test]
    async fn send_fails_after_actor_stops() {
        let (input_tx, input_rx) = mpsc::unbounded_channel::<u8>();
        let (_publisher, state_rx) = StatePublisher::new(Counter(0));
        let handle = ViewModelHandle::new(input_tx, state_rx);

        drop(input_rx);
        assert_eq!(handle.send(1), Err(PortError::Disconnected));
    }

    #[tokio::test]
    async fn wait_for_returns_matching_state() {
        let (input_tx, _input_rx) = mpsc::unbounded_channel::<u8>();
        let (publisher, state_rx) = StatePublisher::new(Counter(0));
        let handle = ViewModelHandle::new(input_tx, state_rx);

        tokio::spawn(async move {
            publisher.publish(&Counter(2));
            // Keep the sender alive until the waiter has observed the value.
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        });

        let state = handle.wait_for(|c| c.0 == 2).await.unwrap();
        assert_eq!(state, Counter(2));
    }

    #[tokio::test]
    async fn subscriber_sees_every_distinct_change() {
        let (input_tx, _input_rx) = mpsc::unbounded_channel::<u8>();
        let (publisher, state_rx) = StatePublisher::new(Counter(0));
        let handle = ViewModelHandle::new(input_tx, state_rx);
        let mut view = handle.subscribe();

        publisher.publish(&Counter(1));
        view.changed().await.unwrap();
        assert_eq!(*view.borrow_and_update(), Counter(1));

        publisher.publish(&Counter(1));
        assert!(!view.has_changed().unwrap());
        assert_eq!(handle.state(), Counter(1));
    }
}
