//! Debounced values: a derived value that follows its input only once the
//! input has stopped changing for a fixed delay.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Follows raw input values and publishes the latest one after it has been
/// left unchanged for `delay`.
///
/// Every call to [`Debounced::set`] restarts the delay. The timer runs on a
/// spawned task which is aborted when the `Debounced` is dropped, so nothing
/// is published after teardown. Must be created inside a tokio runtime.
#[derive(Debug)]
pub struct Debounced<T> {
    input: watch::Sender<T>,
    output: watch::Receiver<T>,
    task: JoinHandle<()>,
}

impl<T> Debounced<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(initial: T, delay: Duration) -> Self {
        let (input, input_rx) = watch::channel(initial.clone());
        let (output_tx, output) = watch::channel(initial);
        let task = tokio::spawn(run(input_rx, output_tx, delay));

        Self {
            input,
            output,
            task,
        }
    }

    /// Feeds a new raw value, cancelling any pending publication.
    pub fn set(&self, value: T) {
        self.input.send_replace(value);
    }

    /// Latest raw value, settled or not.
    pub fn raw(&self) -> T {
        self.input.borrow().clone()
    }

    /// Latest settled value.
    pub fn get(&self) -> T {
        self.output.borrow().clone()
    }

    /// Receiver notified each time a new settled value is published.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.output.clone()
    }

    /// Waits until a settled value not yet observed through this handle is
    /// published and returns it.
    pub async fn changed(&mut self) -> T {
        // The sender lives in the timer task, which outlives this handle.
        let _ = self.output.changed().await;
        self.output.borrow_and_update().clone()
    }
}

impl<T> Drop for Debounced<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run<T>(mut input: watch::Receiver<T>, output: watch::Sender<T>, delay: Duration)
where
    T: Clone + PartialEq,
{
    loop {
        if input.changed().await.is_err() {
            return;
        }

        // Keep restarting the timer until the input stays quiet for `delay`.
        loop {
            tokio::select! {
                _ = sleep(delay) => break,
                changed = input.changed() => {
                    if changed.is_err() {
                        return;
                    }
                }
            }
        }

        let settled = input.borrow_and_update().clone();
        output.send_if_modified(|current| {
            if *current == settled {
                false
            } else {
                *current = settled;
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::{Instant, timeout};

    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn publishes_after_quiet_period() {
        let mut debounced = Debounced::new(String::new(), DELAY);
        let started = Instant::now();

        debounced.set("jo".to_string());
        assert_eq!(debounced.get(), "");

        let value = debounced.changed().await;

        assert_eq!(value, "jo");
        assert!(started.elapsed() >= DELAY);
        assert!(started.elapsed() < DELAY + Duration::from_millis(10));
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_updates_publish_only_the_last_value() {
        let debounced = Debounced::new(String::new(), DELAY);
        let mut observer = debounced.subscribe();
        let started = Instant::now();

        for text in ["j", "jo", "joh", "john"] {
            debounced.set(text.to_string());
            sleep(Duration::from_millis(100)).await;
        }
        assert_eq!(debounced.get(), "");
        assert_eq!(debounced.raw(), "john");

        observer.changed().await.expect("value published");
        assert_eq!(*observer.borrow_and_update(), "john");
        // Last input at 300ms, so the value settles at 600ms.
        assert!(started.elapsed() >= Duration::from_millis(600));
        assert!(started.elapsed() < Duration::from_millis(610));

        let next = timeout(Duration::from_secs(5), observer.changed()).await;
        assert!(next.is_err(), "no further values expected");
    }

    #[tokio::test(start_paused = true)]
    async fn settling_on_the_same_value_is_not_republished() {
        let debounced = Debounced::new("a".to_string(), DELAY);
        let mut observer = debounced.subscribe();

        debounced.set("ab".to_string());
        sleep(Duration::from_millis(50)).await;
        debounced.set("a".to_string());

        let next = timeout(Duration::from_secs(2), observer.changed()).await;
        assert!(next.is_err());
        assert_eq!(debounced.get(), "a");
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_pending_publication() {
        let debounced = Debounced::new(0_u32, DELAY);
        let mut observer = debounced.subscribe();

        debounced.set(7);
        sleep(Duration::from_millis(100)).await;
        drop(debounced);

        // The timer task is gone, so the sender is dropped without publishing.
        let next = timeout(Duration::from_secs(2), observer.changed()).await;
        assert!(matches!(next, Ok(Err(_))));
        assert_eq!(*observer.borrow(), 0);
    }
}
