//! Per-user task list persistence
//!
//! The list is loaded and replaced wholesale on every mutation; there are
//! no partial updates. Newest tasks sit at the front.

use crate::store::{self, Store};

use super::model::Task;

pub struct TaskBook<'a> {
    store: &'a dyn Store,
    key: String,
}

impl<'a> TaskBook<'a> {
    pub fn open(store: &'a dyn Store, user_id: &str) -> Self {
        Self {
            store,
            key: store::tasks_key(user_id),
        }
    }

    pub fn load(&self) -> store::Result<Vec<Task>> {
        Ok(store::get_json(self.store, &self.key)?.unwrap_or_default())
    }

    pub fn save(&self, tasks: &[Task]) -> store::Result<()> {
        store::set_json(self.store, &self.key, &tasks)
    }

    /// Prepend a new task.
    pub fn add(&self, task: Task) -> store::Result<Task> {
        let mut tasks = self.load()?;
        tasks.insert(0, task.clone());
        self.save(&tasks)?;
        Ok(task)
    }

    /// Flip the completed flag on the matching task. Unknown ids are a
    /// no-op and return `None`.
    pub fn toggle(&self, id: &str) -> store::Result<Option<Task>> {
        let mut tasks = self.load()?;
        let toggled = match tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                task.clone()
            }
            None => return Ok(None),
        };
        self.save(&tasks)?;
        Ok(Some(toggled))
    }

    /// Remove the matching task. Unknown ids leave the list unchanged and
    /// return `false`.
    pub fn remove(&self, id: &str) -> store::Result<bool> {
        let mut tasks = self.load()?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Ok(false);
        }
        self.save(&tasks)?;
        Ok(true)
    }
}
