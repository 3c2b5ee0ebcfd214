//! Unit tests for rv-pgroup.

#[cfg(test)]
mod basics {
    use crate::PGroup;

    #[test]
    fn add_then_has() {
        assert!(PGroup::empty().add("a").has(&"a"));
    }

    #[test]
    fn add_then_delete() {
        let g = PGroup::empty().add("a").delete(&"a");
        assert!(!g.has(&"a"));
        assert!(g.is_empty());
    }

    #[test]
    fn double_add_stores_once() {
        let once = PGroup::empty().add("a");
        let twice = once.add("a");
        assert!(twice.has(&"a"));
        assert_eq!(twice.len(), 1);
        assert_eq!(twice, once);
    }

    #[test]
    fn delete_absent_is_unchanged() {
        let g = PGroup::empty().add(1).add(2);
        assert_eq!(g.delete(&9), g);
    }

    #[test]
    fn originals_survive() {
        let a = PGroup::empty().add("a");
        let ab = a.add("b");
        let b = ab.delete(&"a");

        assert!(b.has(&"b"));
        assert!(!a.has(&"b"));
        assert!(!b.has(&"a"));
        assert_eq!(ab.iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn delete_keeps_order() {
        let g: PGroup<i32> = [1, 2, 3, 4].into_iter().collect();
        let g = g.delete(&2);
        assert_eq!(g.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4]);
    }

    #[test]
    fn collect_dedups() {
        let g: PGroup<char> = "abca".chars().collect();
        assert_eq!(g.len(), 3);
        assert_eq!(format!("{g:?}"), "{'a', 'b', 'c'}");
    }

    #[test]
    fn empties_are_interchangeable() {
        assert_eq!(PGroup::<u8>::empty(), PGroup::default());
    }
}

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use crate::PGroup;

    #[derive(Debug, Clone)]
    enum Op {
        Add(u8),
        Delete(u8),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![(0u8..16).prop_map(Op::Add), (0u8..16).prop_map(Op::Delete)]
    }

    proptest! {
        #[test]
        fn behaves_like_a_set_and_never_mutates(ops in prop::collection::vec(op(), 0..40)) {
            let mut versions = vec![PGroup::empty()];
            let mut snapshots: Vec<Vec<u8>> = vec![vec![]];
            let mut model: Vec<u8> = Vec::new();

            for op in ops {
                let current = versions.last().unwrap();
                let next = match op {
                    Op::Add(x) => {
                        if !model.contains(&x) {
                            model.push(x);
                        }
                        current.add(x)
                    }
                    Op::Delete(x) => {
                        model.retain(|&m| m != x);
                        current.delete(&x)
                    }
                };
                prop_assert_eq!(next.iter().copied().collect::<Vec<_>>(), model.clone());
                versions.push(next);
                snapshots.push(model.clone());
            }

            for (g, snap) in versions.iter().zip(&snapshots) {
                prop_assert_eq!(&g.iter().copied().collect::<Vec<_>>(), snap);
            }
        }
    }
}
