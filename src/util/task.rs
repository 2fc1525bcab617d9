use std::collections::HashMap;

use tokio::task::JoinHandle;

use crate::game::cancel::CancelToken;

struct Tracked {
    cancel: CancelToken,
    handle: JoinHandle<()>,
}

impl Tracked {
    fn stop(self) {
        self.cancel.cancel();
        self.handle.abort();
    }
}

/// Background tasks keyed by purpose. Starting a task under a key that is
/// already in use stops the previous one.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<String, Tracked>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    pub fn spawn(&mut self, key: &str, cancel: CancelToken, handle: JoinHandle<()>) {
        if let Some(previous) = self.tasks.insert(key.to_string(), Tracked { cancel, handle }) {
            previous.stop();
        }
    }

    pub fn abort_all(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    impl TaskManager {
        fn is_running(&self, key: &str) -> bool {
            self.tasks
                .get(key)
                .is_some_and(|task| !task.handle.is_finished())
        }
    }

    #[tokio::test]
    async fn replacing_a_task_cancels_the_previous_one() {
        let mut tasks = TaskManager::new();
        let first = CancelToken::new();
        let waiter = first.clone();

        tasks.spawn(
            "round",
            first.clone(),
            tokio::spawn(async move { waiter.cancelled().await }),
        );
        assert!(tasks.is_running("round"));

        tasks.spawn(
            "round",
            CancelToken::new(),
            tokio::spawn(tokio::time::sleep(Duration::from_secs(60))),
        );
        assert!(first.is_cancelled());

        tasks.abort_all();
        assert!(!tasks.is_running("round"));
    }

    #[tokio::test]
    async fn abort_all_fires_every_token() {
        let mut tasks = TaskManager::new();
        let token = CancelToken::new();
        tasks.spawn("round", token.clone(), tokio::spawn(async {}));

        tasks.abort_all();
        assert!(token.is_cancelled());
        assert!(!tasks.is_running("round"));
    }
}
