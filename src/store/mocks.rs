//! mockall doubles of the store traits, for exercising failure paths.

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use super::{CacheStore, MessageQueue, StoreResult, UserStore};
use crate::models::{NewUser, QueueMessage, User};

mock! {
    pub Users {}

    #[async_trait]
    impl UserStore for Users {
        async fn list_users(&self) -> StoreResult<Vec<User>>;
        async fn create_user(&self, user: NewUser) -> StoreResult<User>;
        async fn count_users(&self) -> StoreResult<i64>;
        async fn close(&self);
    }
}

mock! {
    pub Cache {}

    #[async_trait]
    impl CacheStore for Cache {
        async fn get(&self, key: &str) -> StoreResult<Option<String>>;
        async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> StoreResult<()>;
        async fn close(&self);
    }
}

mock! {
    pub Queue {}

    #[async_trait]
    impl MessageQueue for Queue {
        async fn publish(&self, message: &QueueMessage) -> StoreResult<()>;
        async fn consume(&self) -> StoreResult<Option<Value>>;
        async fn depth(&self) -> StoreResult<u32>;
    }
}
