//! Observable state cell
//!
//! A cell keeps the latest value only. Writes never wait on readers and
//! succeed with zero subscribers; a subscriber that falls behind sees the
//! most recent value on its next read.

use tokio::sync::watch;

pub struct ObservableCell<T> {
    sender: watch::Sender<T>,
}

impl<T: Clone> ObservableCell<T> {
    pub fn new(value: T) -> Self {
        let (sender, _) = watch::channel(value);
        Self { sender }
    }

    /// Replace the value and notify subscribers. Returns the previous value.
    pub fn set(&self, value: T) -> T {
        self.sender.send_replace(value)
    }

    /// Modify the value in place; subscribers are notified only when
    /// `modify` returns true.
    pub fn update(&self, modify: impl FnOnce(&mut T) -> bool) -> bool {
        self.sender.send_if_modified(modify)
    }

    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    /// Receiver observing every later write
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<T: Clone + Default> Default for ObservableCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ObservableCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservableCell")
            .field("value", &*self.sender.borrow())
            .field("subscriber_count", &self.sender.receiver_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_without_subscribers() {
        let cell = ObservableCell::new(1);
        assert_eq!(cell.subscriber_count(), 0);
        assert_eq!(cell.set(2), 1);
        assert_eq!(cell.get(), 2);
    }

    #[test]
    fn test_subscriber_sees_last_write() {
        let cell = ObservableCell::new(String::new());
        let mut rx = cell.subscribe();
        assert!(!rx.has_changed().unwrap());

        cell.set("first".to_string());
        cell.set("second".to_string());

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), "second");
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_update_notifies_only_on_change() {
        let cell = ObservableCell::new(vec![1, 2]);
        let mut rx = cell.subscribe();

        assert!(!cell.update(|_| false));
        assert!(!rx.has_changed().unwrap());

        assert!(cell.update(|v| {
            v.push(3);
            true
        }));
        assert_eq!(*rx.borrow_and_update(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_changed_wakes_subscriber() {
        let cell = std::sync::Arc::new(ObservableCell::new(false));
        let mut rx = cell.subscribe();

        let writer = cell.clone();
        tokio::spawn(async move {
            writer.set(true);
        });

        rx.changed().await.unwrap();
        assert!(*rx.borrow());
    }
}
