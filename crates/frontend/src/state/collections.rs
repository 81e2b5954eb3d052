//! Id-keyed collection edits shared by the store mutations.

use contracts::domain::order::Order;
use contracts::domain::payment_method::PaymentMethod;
use contracts::domain::service::Service;

pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Service {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for PaymentMethod {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Order {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Replace the element with the same id; ignore the item otherwise.
pub fn replace_by_id<T: Keyed>(list: &mut Vec<T>, item: T) {
    if let Some(slot) = list.iter_mut().find(|x| x.key() == item.key()) {
        *slot = item;
    }
}

/// Drop the element with the given id. A no-op for an unknown id.
pub fn remove_by_id<T: Keyed>(list: &mut Vec<T>, id: &str) {
    list.retain(|x| x.key() != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::defaults::default_payment_methods;

    #[test]
    fn replace_swaps_only_the_matching_id() {
        let mut list = default_payment_methods();
        let mut updated = list[0].clone();
        updated.active = false;
        replace_by_id(&mut list, updated);
        assert!(!list[0].active);
        assert!(list[1].active);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn replace_with_unknown_id_changes_nothing() {
        let mut list = default_payment_methods();
        let mut stray = list[0].clone();
        stray.id = "missing".into();
        let before = list.clone();
        replace_by_id(&mut list, stray);
        assert_eq!(list, before);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut list = default_payment_methods();
        let id = list[0].id.clone();
        remove_by_id(&mut list, &id);
        assert_eq!(list.len(), 1);
        remove_by_id(&mut list, &id);
        remove_by_id(&mut list, "never-existed");
        assert_eq!(list.len(), 1);
    }
}
