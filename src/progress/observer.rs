//! Minimal synchronous publish/subscribe.

use std::sync::Mutex;

/// Callback registered with an [`Observer`].
pub type Subscriber<E> = Box<dyn Fn(&E) + Send + Sync>;

/// Lifecycle of a long-running step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Started,
    Running,
    Failed,
    Finished,
}

/// Fans events out to every subscriber, in registration order, on the
/// notifying thread.
pub struct Observer<E> {
    subscribers: Mutex<Vec<Subscriber<E>>>,
}

impl<E> Observer<E> {
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }

    pub fn subscribe(&self, subscriber: Subscriber<E>) {
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(subscriber);
    }

    pub fn notify(&self, event: &E) {
        let subscribers = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        for subscriber in subscribers.iter() {
            subscriber(event);
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E> Default for Observer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for Observer<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observer")
            .field("subscribers", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_notify_reaches_subscribers_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let observer = Observer::new();

        for id in 0..3 {
            let seen = Arc::clone(&seen);
            observer.subscribe(Box::new(move |status: &Status| {
                seen.lock().unwrap().push((id, *status));
            }));
        }

        observer.notify(&Status::Started);
        observer.notify(&Status::Finished);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                (0, Status::Started),
                (1, Status::Started),
                (2, Status::Started),
                (0, Status::Finished),
                (1, Status::Finished),
                (2, Status::Finished),
            ]
        );
    }

    #[test]
    fn test_notify_without_subscribers() {
        let observer: Observer<Status> = Observer::default();
        assert!(observer.is_empty());
        observer.notify(&Status::Running);
    }
}
