use serde::{Deserialize, Serialize};

/// A record paired with the 1-based index shown to users when they pick
/// an entry from a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listed<T> {
    pub index: usize,
    #[serde(flatten)]
    pub item: T,
}

pub fn enumerate_listed<T, I>(items: I) -> Vec<Listed<T>>
where
    I: IntoIterator<Item = T>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| Listed { index: i + 1, item })
        .collect()
}
