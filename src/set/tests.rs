// =====================================================================
// File: set/tests.rs
//
// Description:
//   Unit tests for the generic Set.
// =====================================================================


#[cfg(test)]
mod set_tests {
    use crate::Set;

    // -------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------
    #[test]
    fn new_set_is_empty() {
        let set: Set<i64> = Set::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().count(), 0);
    }

    // -------------------------------------------------------------
    // Add / membership
    // -------------------------------------------------------------
    #[test]
    fn add_accumulates_distinct_items() {
        let mut set = Set::new();

        set.add([1]);
        assert_eq!(set.len(), 1);

        set.add([2]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&1));
        assert!(set.contains(&2));
        assert!(!set.contains(&3));
    }

    #[test]
    fn repeated_add_is_idempotent() {
        let mut set = Set::new();
        set.add([7, 7, 7]);
        set.add([7]);
        assert!(!set.insert(7), "Second insert should report existing item");

        assert_eq!(set.len(), 1);
        assert!(set.contains(&7));
    }

    #[test]
    fn works_with_non_integer_elements() {
        let mut set = Set::new();
        set.add(["dog".to_string(), "cat".to_string()]);

        assert!(set.contains(&"dog".to_string()));
        assert!(!set.contains(&"cow".to_string()));
    }

    // -------------------------------------------------------------
    // Remove / clear
    // -------------------------------------------------------------
    #[test]
    fn remove_present_and_absent() {
        let mut set: Set<i64> = [1, 2, 3].into_iter().collect();

        assert!(set.remove(&2));
        assert!(!set.contains(&2));
        assert_eq!(set.len(), 2);

        // Absent item is a no-op
        assert!(!set.remove(&42));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set: Set<i64> = (0..10).collect();
        assert_eq!(set.len(), 10);

        set.clear();

        assert!(set.is_empty());
        assert!(!set.contains(&0));
    }

    // -------------------------------------------------------------
    // Iteration
    // -------------------------------------------------------------
    #[test]
    fn iter_yields_every_member_once() {
        let set: Set<i64> = [3, 1, 2].into_iter().collect();

        let mut seen: Vec<i64> = set.iter().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn iter_is_restartable() {
        let set: Set<i64> = [5, 6].into_iter().collect();

        let first: i64 = set.iter().sum();
        let second: i64 = (&set).into_iter().sum();
        assert_eq!(first, 11);
        assert_eq!(first, second);
        assert_eq!(set.iter().len(), 2);
    }

    #[test]
    fn extend_skips_duplicates() {
        let mut set: Set<i64> = [1, 2].into_iter().collect();
        set.extend([2, 3, 3]);
        assert_eq!(set.len(), 3);
    }
}
