use leptos::prelude::*;

/// Moves the item with key `dragged` into the slot currently occupied by the
/// item with key `target`. Both positions are resolved before the removal, so
/// the dragged item always lands on the index the user dropped onto and every
/// item between the two positions shifts by exactly one.
///
/// Returns `false` and leaves the list untouched when the keys are equal or
/// either key is not present.
pub fn reorder<T, K, F>(items: &mut Vec<T>, key: F, dragged: &K, target: &K) -> bool
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    if dragged == target {
        return false;
    }
    let Some(from) = items.iter().position(|item| key(item) == *dragged) else {
        return false;
    };
    let Some(to) = items.iter().position(|item| key(item) == *target) else {
        return false;
    };
    if from == to {
        return false;
    }
    let moved = items.remove(from);
    items.insert(to, moved);
    true
}

/// Removes the item with key `target`, preserving the relative order of the
/// rest. Returns the removed item, or `None` when no item matches.
pub fn remove<T, K, F>(items: &mut Vec<T>, key: F, target: &K) -> Option<T>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let pos = items.iter().position(|item| key(item) == *target)?;
    Some(items.remove(pos))
}

/// Clears the dragged-item signal at the end of a drop, whether or not a
/// reorder happened.
pub fn end_drag<T: Send + Sync + 'static>(set_dragged: WriteSignal<Option<T>>) {
    set_dragged.set(None);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: &'static str,
    }

    fn items(ids: &[&'static str]) -> Vec<Item> {
        ids.iter().map(|id| Item { id }).collect()
    }

    fn ids(items: &[Item]) -> Vec<&'static str> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn reorder_moves_forward_into_target_slot() {
        let mut list = items(&["a", "b", "c", "d"]);
        assert!(reorder(&mut list, |i| i.id, &"a", &"c"));
        assert_eq!(ids(&list), ["b", "c", "a", "d"]);
        // the dragged item sits on the target's former index
        assert_eq!(list[2].id, "a");
    }

    #[test]
    fn reorder_moves_backward_into_target_slot() {
        let mut list = items(&["a", "b", "c", "d"]);
        assert!(reorder(&mut list, |i| i.id, &"d", &"b"));
        assert_eq!(ids(&list), ["a", "d", "b", "c"]);
        assert_eq!(list[1].id, "d");
    }

    #[test]
    fn reorder_shifts_in_between_items_by_one() {
        let mut list = items(&["a", "b", "c", "d", "e"]);
        assert!(reorder(&mut list, |i| i.id, &"b", &"e"));
        // c, d, e each moved exactly one slot toward the vacated position
        assert_eq!(ids(&list), ["a", "c", "d", "e", "b"]);
    }

    #[test]
    fn reorder_onto_itself_is_a_noop() {
        let mut list = items(&["a", "b", "c"]);
        assert!(!reorder(&mut list, |i| i.id, &"b", &"b"));
        assert_eq!(ids(&list), ["a", "b", "c"]);
    }

    #[test]
    fn reorder_with_unknown_keys_is_a_noop() {
        let mut list = items(&["a", "b"]);
        assert!(!reorder(&mut list, |i| i.id, &"x", &"a"));
        assert!(!reorder(&mut list, |i| i.id, &"a", &"x"));
        assert_eq!(ids(&list), ["a", "b"]);
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut list = items(&["a", "b", "c", "d"]);
        let removed = remove(&mut list, |i| i.id, &"b");
        assert_eq!(removed, Some(Item { id: "b" }));
        assert_eq!(ids(&list), ["a", "c", "d"]);
    }

    #[test]
    fn remove_missing_key_returns_none() {
        let mut list = items(&["a", "b"]);
        assert_eq!(remove(&mut list, |i| i.id, &"x"), None);
        assert_eq!(ids(&list), ["a", "b"]);
    }
}
