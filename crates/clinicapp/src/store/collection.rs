use crate::error::{ClinicError, Result};
use crate::model::Record;
use std::collections::BTreeMap;

/// An ordered, bounded set of records keyed by identifier.
///
/// Records are always kept in identifier order. Identifiers are handed out
/// in increasing order, so for records created here that is also creation
/// order. A data file that lists records out of order is reordered by id on
/// load. Removing a key keeps the relative order of every other record.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T: Record> {
    items: BTreeMap<u32, T>,
    capacity: usize,
}

impl<T: Record> Collection<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: BTreeMap::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn get(&self, id: u32) -> Option<&T> {
        self.items.get(&id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut T> {
        self.items.get_mut(&id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.items.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    pub fn ids(&self) -> Vec<u32> {
        self.items.keys().copied().collect()
    }

    pub fn max_id(&self) -> Option<u32> {
        self.items.keys().next_back().copied()
    }

    /// Appends a record. Fails when the collection is full or the identifier
    /// is already taken.
    pub(crate) fn insert(&mut self, record: T) -> Result<&T> {
        if self.is_full() {
            return Err(ClinicError::CapacityExceeded {
                kind: T::KIND,
                capacity: self.capacity,
            });
        }
        let id = record.id();
        if self.items.contains_key(&id) {
            return Err(ClinicError::Store(format!(
                "duplicate {} id {}",
                T::KIND,
                id
            )));
        }
        Ok(self.items.entry(id).or_insert(record))
    }

    pub(crate) fn remove(&mut self, id: u32) -> Option<T> {
        self.items.remove(&id)
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Doctor;

    fn doctor(id: u32) -> Doctor {
        Doctor {
            id,
            name: format!("Dr. {}", id),
            specialization: "General".into(),
            availability: "Mon".into(),
        }
    }

    #[test]
    fn rejects_inserts_past_capacity() {
        let mut doctors = Collection::new(2);
        doctors.insert(doctor(1)).unwrap();
        doctors.insert(doctor(2)).unwrap();

        let err = doctors.insert(doctor(3)).unwrap_err();
        assert!(matches!(
            err,
            ClinicError::CapacityExceeded { capacity: 2, .. }
        ));
        assert_eq!(doctors.len(), 2);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut doctors = Collection::new(5);
        doctors.insert(doctor(1)).unwrap();
        assert!(doctors.insert(doctor(1)).is_err());
        assert_eq!(doctors.len(), 1);
    }

    #[test]
    fn remove_keeps_order_of_survivors() {
        let mut doctors = Collection::new(5);
        for id in 1..=4 {
            doctors.insert(doctor(id)).unwrap();
        }
        assert!(doctors.remove(2).is_some());
        assert_eq!(doctors.ids(), vec![1, 3, 4]);
        assert_eq!(doctors.max_id(), Some(4));
    }

    #[test]
    fn removing_unknown_id_changes_nothing() {
        let mut doctors = Collection::new(5);
        doctors.insert(doctor(1)).unwrap();
        let before = doctors.clone();
        assert!(doctors.remove(9).is_none());
        assert_eq!(doctors, before);
    }
}
