use std::sync::Arc;
use tokio::sync::RwLock;

/// Generic in-memory append-only list.
///
/// Keeps values in insertion order for the lifetime of the process. Nothing is
/// ever updated or removed, so readers get a consistent snapshot by cloning.
#[derive(Clone)]
pub struct ListStore<V> {
    inner: Arc<RwLock<Vec<V>>>,
}

impl<V> Default for ListStore<V> {
    fn default() -> Self {
        Self { inner: Arc::new(RwLock::new(Vec::new())) }
    }
}

impl<V> ListStore<V>
where
    V: Clone + Send + Sync,
{
    pub fn new() -> Self { Self::default() }

    /// Append a value at the end.
    pub async fn push(&self, value: V) {
        let mut list = self.inner.write().await;
        list.push(value);
    }

    /// Snapshot of all values in insertion order.
    pub async fn snapshot(&self) -> Vec<V> {
        let list = self.inner.read().await;
        list.clone()
    }

    /// Values matching `pred`, in insertion order.
    pub async fn filter<F>(&self, pred: F) -> Vec<V>
    where
        F: Fn(&V) -> bool,
    {
        let list = self.inner.read().await;
        list.iter().filter(|v| pred(*v)).cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
