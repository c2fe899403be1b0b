use std::{collections::HashMap, future::Future};

use tokio::task::JoinHandle;

/// Background work keyed by purpose. Spawning under a key that is still
/// running aborts the older task.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<&'static str, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn<F>(&mut self, key: &'static str, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(handle) = self.tasks.insert(key, tokio::spawn(task)) {
            handle.abort();
        }
    }

    pub fn is_running(&self, key: &str) -> bool {
        self.tasks.get(key).is_some_and(|handle| !handle.is_finished())
    }

    pub fn abort(&mut self, key: &str) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
        }
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
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn respawning_a_key_aborts_the_old_task() {
        let (tx, rx) = flume::unbounded::<&'static str>();
        let mut tasks = TaskManager::new();

        let slow_tx = tx.clone();
        tasks.spawn("work", async move {
            tokio::time::sleep(Duration::from_secs(60)).await;
            let _ = slow_tx.send("old");
        });
        tasks.spawn("work", async move {
            let _ = tx.send("new");
        });

        assert_eq!(rx.recv_async().await.unwrap(), "new");
        assert!(rx.recv_async().await.is_err());
    }

    #[tokio::test]
    async fn abort_stops_running_task() {
        let mut tasks = TaskManager::new();
        tasks.spawn("work", async {
            tokio::time::sleep(Duration::from_secs(60)).await;
        });
        assert!(tasks.is_running("work"));
        tasks.abort("work");
        assert!(!tasks.is_running("work"));
    }
}
