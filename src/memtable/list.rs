//! List table
//!
//! Key → ordered sequence of scalars, with Python-style negative indexing.
//!
//! ## Index Normalization
//! A negative index `-n` addresses the n-th element from the end. Two
//! policies exist and they are deliberately different:
//!
//! ```text
//!   offset_from_end  (lpop range, lset, lget)   -7 on len 5 -> -2 (rejected)
//!   clamp_from_end   (rpop range)               -7 on len 5 ->  0 (accepted)
//! ```
//!
//! Callers depend on both behaviors, so they stay separate.

use std::collections::{BTreeMap, HashSet};

use crate::error::{DuoError, Result};
use crate::value::Value;

/// Mapping of keys to lists.
///
/// A key survives being emptied by pops; it is only replaced by a load.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ListTable {
    lists: BTreeMap<String, Vec<Value>>,
}

impl ListTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `elements` at the head, keeping their order.
    ///
    /// `lpush(k, [1,2,3])` then `lpush(k, [4,5])` gives `[4,5,1,2,3]`.
    /// Returns the new length.
    pub fn lpush(&mut self, key: &str, elements: Vec<Value>) -> Result<usize> {
        if elements.is_empty() {
            return Err(DuoError::EmptyArgs);
        }

        let list = self.entry(key);
        list.splice(0..0, elements);
        Ok(list.len())
    }

    /// Append `elements` at the tail, keeping their order. Returns the new length.
    pub fn rpush(&mut self, key: &str, elements: Vec<Value>) -> Result<usize> {
        if elements.is_empty() {
            return Err(DuoError::EmptyArgs);
        }

        let list = self.entry(key);
        list.extend(elements);
        Ok(list.len())
    }

    /// Append the elements not already in the list.
    ///
    /// Duplicates within `elements` are also suppressed; duplicates already
    /// in the list before the call are left alone. Returns how many elements
    /// were appended.
    pub fn raddtoset(&mut self, key: &str, elements: Vec<Value>) -> Result<usize> {
        if elements.is_empty() {
            return Err(DuoError::EmptyArgs);
        }

        let list = self.entry(key);
        let mut seen: HashSet<Value> = list.iter().cloned().collect();
        let before = list.len();

        for element in elements {
            if !seen.contains(&element) {
                seen.insert(element.clone());
                list.push(element);
            }
        }

        Ok(list.len() - before)
    }

    /// Pop from the head.
    ///
    /// - `[]`: the first element
    /// - `[n]`: the first `min(n, len)` elements
    /// - `[start, end]`: the inclusive range, negative indices offset by
    ///   `len` and rejected if still negative; `end` is clamped to `len - 1`
    /// - anything longer: `WrongArgs`
    pub fn lpop(&mut self, key: &str, indices: &[i64]) -> Result<Vec<Value>> {
        if indices.len() > 2 {
            return Err(DuoError::WrongArgs);
        }

        let list = self.non_empty(key)?;
        let len = list.len();

        match *indices {
            [] => Ok(list.drain(..1).collect()),
            [count] => {
                if count < 0 {
                    return Err(DuoError::InvalidArgument(format!(
                        "count must not be negative, got {}",
                        count
                    )));
                }
                let count = (count as usize).min(len);
                Ok(list.drain(..count).collect())
            }
            [start, end] => {
                let start = offset_from_end(start, len);
                let end = offset_from_end(end, len);

                if start < 0 || end < 0 || start > end || start >= len as i64 {
                    return Err(DuoError::InvalidRange);
                }

                let end = end.min(len as i64 - 1);
                Ok(list.drain(start as usize..=end as usize).collect())
            }
            _ => Err(DuoError::WrongArgs),
        }
    }

    /// Pop from the tail. Popped elements always come back in list order.
    ///
    /// - `[]`: the last element
    /// - `[n]`: the last `min(n, len)` elements; `n <= 0` is `InvalidArgument`
    /// - `[start, end]`: the inclusive range, negative indices offset by `len`
    ///   and clamped at 0, swapped if reversed; any index `>= len` is
    ///   `InvalidRange`
    /// - anything longer: `WrongArgs`
    pub fn rpop(&mut self, key: &str, indices: &[i64]) -> Result<Vec<Value>> {
        if indices.len() > 2 {
            return Err(DuoError::WrongArgs);
        }

        let list = self.non_empty(key)?;
        let len = list.len();

        match *indices {
            [] => Ok(list.drain(len - 1..).collect()),
            [count] => {
                if count <= 0 {
                    return Err(DuoError::InvalidArgument(format!(
                        "count must be positive, got {}",
                        count
                    )));
                }
                let count = (count as usize).min(len);
                Ok(list.drain(len - count..).collect())
            }
            [start, end] => {
                let mut start = clamp_from_end(start, len);
                let mut end = clamp_from_end(end, len);

                if start >= len as i64 || end >= len as i64 {
                    return Err(DuoError::InvalidRange);
                }
                if start > end {
                    std::mem::swap(&mut start, &mut end);
                }

                Ok(list.drain(start as usize..=end as usize).collect())
            }
            _ => Err(DuoError::WrongArgs),
        }
    }

    /// Overwrite the element at `index`
    pub fn lset(&mut self, key: &str, index: i64, element: Value) -> Result<()> {
        let list = self
            .lists
            .get_mut(key)
            .ok_or_else(|| DuoError::NotFound(format!("list {}", key)))?;

        let index = bounded_index(index, list.len())?;
        list[index] = element;
        Ok(())
    }

    /// Copy of the element at `index`
    pub fn lget(&self, key: &str, index: i64) -> Result<Value> {
        let list = self
            .lists
            .get(key)
            .ok_or_else(|| DuoError::NotFound(format!("list {}", key)))?;

        let index = bounded_index(index, list.len())?;
        Ok(list[index].clone())
    }

    /// Copy of a whole list
    pub fn range(&self, key: &str) -> Option<Vec<Value>> {
        self.lists.get(key).cloned()
    }

    /// Length of a list, `None` if the key was never created
    pub fn list_len(&self, key: &str) -> Option<usize> {
        self.lists.get(key).map(Vec::len)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.lists.contains_key(key)
    }

    /// Number of list keys (empty lists included)
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Iterate lists in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<Value>)> {
        self.lists.iter()
    }

    fn entry(&mut self, key: &str) -> &mut Vec<Value> {
        self.lists.entry(key.to_string()).or_default()
    }

    fn non_empty(&mut self, key: &str) -> Result<&mut Vec<Value>> {
        match self.lists.get_mut(key) {
            Some(list) if !list.is_empty() => Ok(list),
            _ => Err(DuoError::NotFound(format!(
                "list {} is empty or does not exist",
                key
            ))),
        }
    }
}

impl FromIterator<(String, Vec<Value>)> for ListTable {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Value>)>>(iter: I) -> Self {
        Self {
            lists: iter.into_iter().collect(),
        }
    }
}

/// Offset a negative index by `len`. The result may still be negative.
fn offset_from_end(index: i64, len: usize) -> i64 {
    if index < 0 {
        index.saturating_add(len as i64)
    } else {
        index
    }
}

/// Offset a negative index by `len`, clamping at 0
fn clamp_from_end(index: i64, len: usize) -> i64 {
    offset_from_end(index, len).max(0)
}

/// Normalize an element index for lset/lget
fn bounded_index(index: i64, len: usize) -> Result<usize> {
    let index = offset_from_end(index, len);
    if index < 0 || index >= len as i64 {
        return Err(DuoError::IndexOutOfRange);
    }
    Ok(index as usize)
}
