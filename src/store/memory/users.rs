//! In-process user store.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::models::{NewUser, User};
use crate::store::{StoreResult, UserStore};

#[derive(Debug)]
struct Table {
    rows: Vec<User>,
    next_id: i32,
}

/// Vec-backed user table with monotonically assigned ids starting at 1.
///
/// Rows are appended in id order, so listing needs no sort.
#[derive(Debug)]
pub struct MemoryUserStore {
    table: Mutex<Table>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.table.lock().await.rows.clone())
    }

    async fn create_user(&self, user: NewUser) -> StoreResult<User> {
        let mut table = self.table.lock().await;
        let row = User {
            id: table.next_id,
            name: user.name,
            email: user.email,
        };
        table.next_id += 1;
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn count_users(&self) -> StoreResult<i64> {
        Ok(self.table.lock().await.rows.len() as i64)
    }

    async fn close(&self) {}
}
