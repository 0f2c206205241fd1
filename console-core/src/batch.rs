use serde::Serialize;

/// Ordered container for the items submitted together in one run.
///
/// Order is preserved through every constructor; the pipeline relies on it to
/// pair responses with the requests that produced them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Batch<T>(pub Vec<T>);

impl<T> Batch<T> {
    /// Empty batch - a run over it is a no-op
    pub fn none() -> Self {
        Batch(Vec::new())
    }

    /// Single item
    pub fn single(item: T) -> Self {
        Batch(vec![item])
    }

    /// Concatenate batches, keeping the order of both the batches and their items
    pub fn concat(batches: impl IntoIterator<Item = Batch<T>>) -> Self {
        let mut all = Vec::new();
        for Batch(mut v) in batches {
            all.append(&mut v);
        }
        Batch(all)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T> Default for Batch<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Vec<T>> for Batch<T> {
    fn from(items: Vec<T>) -> Self {
        Batch(items)
    }
}

impl<T> FromIterator<T> for Batch<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Batch(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Batch<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
