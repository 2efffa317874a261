use std::collections::HashMap;
use std::time::Duration;

use flume::Sender;
use tokio::task::JoinHandle;

use crate::event::events::Event;

/// Keyed one-shot tasks. Scheduling under a key aborts the task already
/// registered there.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<&'static str, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    pub fn spawn(&mut self, key: &'static str, task: JoinHandle<()>) {
        if let Some(handle) = self.tasks.insert(key, task) {
            handle.abort();
        }
    }

    /// Sends `event` on `tx` once `delay` has passed.
    pub fn schedule(&mut self, key: &'static str, delay: Duration, tx: Sender<Event>, event: Event) {
        self.spawn(
            key,
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = tx.send_async(event).await;
            }),
        );
    }

    pub fn abort_all(&mut self) {
        for handle in self.tasks.values() {
            handle.abort();
        }
        self.tasks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scheduled_event_arrives_after_delay() {
        let (tx, rx) = flume::unbounded();
        let mut tasks = TaskManager::new();
        tasks.schedule("toast", Duration::from_millis(10), tx, Event::NoticeExpired(7));

        assert!(rx.try_recv().is_err());
        let event = tokio::time::timeout(Duration::from_secs(2), rx.recv_async())
            .await
            .unwrap()
            .unwrap();
        assert!(matches!(event, Event::NoticeExpired(7)));
    }

    #[tokio::test]
    async fn rescheduling_aborts_previous() {
        let (tx, rx) = flume::unbounded();
        let mut tasks = TaskManager::new();
        tasks.schedule("toast", Duration::from_millis(50), tx.clone(), Event::NoticeExpired(1));
        tasks.schedule("toast", Duration::from_millis(10), tx, Event::NoticeExpired(2));

        let event = tokio::time::timeout(Duration::from_secs(2), rx.recv_async())
            .await
            .unwrap()
            .unwrap();
        assert!(matches!(event, Event::NoticeExpired(2)));

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(rx.try_recv().is_err());
    }
}
