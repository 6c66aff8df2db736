use char_trie::{Slot, Trie, TrieError};
use std::collections::HashSet;

fn sorted_values(trie: &Trie<i32>) -> Vec<i32> {
    let mut values: Vec<i32> = trie.values().into_iter().copied().collect();
    values.sort_unstable();
    values
}

#[test]
fn test_sibling_keys() {
    let mut trie = Trie::new();
    trie.set("cat", 1);
    trie.set("car", 2);

    assert_eq!(trie.get("cat"), Ok(&1));
    assert_eq!(trie.get("car"), Ok(&2));

    // Removing one sibling leaves the other alone
    trie.remove("cat");

    assert_eq!(trie.try_get("cat"), Slot::Empty);
    assert_eq!(trie.get("car"), Ok(&2));
}

#[test]
fn test_last_write_wins() {
    let mut trie = Trie::new();
    trie.set("x", 1);
    trie.set("x", 2);

    assert_eq!(trie.get("x"), Ok(&2));
    assert_eq!(sorted_values(&trie), vec![2]);
}

#[test]
fn test_values_are_a_multiset() {
    let mut trie = Trie::new();
    trie.set("a", 1);
    trie.set("b", 2);
    trie.set("c", 3);

    assert_eq!(sorted_values(&trie), vec![1, 2, 3]);

    // Every call takes a fresh snapshot
    trie.set("d", 4);
    assert_eq!(sorted_values(&trie), vec![1, 2, 3, 4]);
}

#[test]
fn test_empty_key_is_addressable() {
    let mut trie = Trie::new();
    trie.set("", 5);

    assert_eq!(trie.get(""), Ok(&5));
    assert!(trie.try_get("a").is_empty());

    trie.set("a", 6);
    assert_eq!(trie.get(""), Ok(&5));
    assert_eq!(trie.get("a"), Ok(&6));
}

#[test]
fn test_fresh_trie_is_empty() {
    let trie = Trie::<i32>::new();

    assert!(trie.values().is_empty());
    assert_eq!(trie.try_get("anything"), Slot::Empty);
    assert_eq!(trie.try_get(""), Slot::Empty);
    assert_eq!(
        trie.get("anything"),
        Err(TrieError::KeyNotFound("anything".to_string()))
    );
}

#[test]
fn test_prefix_independence() {
    let keys = ["a", "ab", "abc", "abd", "b", "ba", "bab"];

    let mut trie = Trie::new();
    for (i, key) in keys.iter().enumerate() {
        trie.set(key, i as i32);
    }

    for (i, key) in keys.iter().enumerate() {
        assert_eq!(trie.get(key), Ok(&(i as i32)), "key {:?}", key);
    }

    // Inner positions that were never set stay empty
    for missing in ["", "abcd", "bb", "aba", "c"].iter() {
        assert!(trie.try_get(missing).is_empty(), "key {:?}", missing);
    }
}

#[test]
fn test_same_suffix_different_branch() {
    let mut trie = Trie::new();
    trie.set("ab", 1);

    assert!(trie.try_get("xb").is_empty());
    assert!(trie.try_get("b").is_empty());
    assert!(!trie.contains_key("xb"));
}

#[test]
fn test_unicode_keys() {
    let mut trie = Trie::new();
    trie.set("naïve", 1);
    trie.set("naive", 2);
    trie.set("日本", 3);
    trie.set("日本語", 4);
    trie.set("\0", 5);

    assert_eq!(trie.get("naïve"), Ok(&1));
    assert_eq!(trie.get("naive"), Ok(&2));
    assert_eq!(trie.get("日本"), Ok(&3));
    assert_eq!(trie.get("日本語"), Ok(&4));
    assert_eq!(trie.get("\0"), Ok(&5));
    assert!(trie.try_get("日").is_empty());
    // The NUL character is not the root sentinel
    assert!(trie.try_get("").is_empty());
}

#[test]
fn test_duplicate_values_under_different_keys() {
    let mut trie = Trie::new();
    trie.set("one", 7);
    trie.set("uno", 7);
    trie.set("eins", 7);

    assert_eq!(sorted_values(&trie), vec![7, 7, 7]);
    assert_eq!(trie.len(), 3);
}

#[test]
fn test_removal_is_grow_only() {
    let mut trie = Trie::new();
    trie.set("hello", 1);
    trie.set("help", 2);
    let nodes = trie.node_count();

    trie.remove("hello");
    trie.remove("help");

    assert!(trie.is_empty());
    assert!(trie.values().is_empty());
    assert_eq!(trie.node_count(), nodes);
}

#[test]
fn test_many_keys() {
    let keys: Vec<String> = (0..500).map(|i| format!("user:{:05}", i * 7)).collect();

    let mut trie = Trie::new();
    for (i, key) in keys.iter().enumerate() {
        trie.set(key, i as i32);
    }

    assert_eq!(trie.len(), keys.len());
    for (i, key) in keys.iter().enumerate() {
        assert_eq!(trie[key.as_str()], i as i32);
    }

    let unique: HashSet<i32> = trie.values().into_iter().copied().collect();
    assert_eq!(unique.len(), keys.len());

    for key in keys.iter().step_by(2) {
        trie.remove(key);
    }
    assert_eq!(trie.len(), keys.len() / 2);
    for (i, key) in keys.iter().enumerate() {
        assert_eq!(trie.contains_key(key), i % 2 == 1, "key {:?}", key);
    }
}

#[test]
fn test_collect_from_pairs() {
    let trie: Trie<i32> = vec![("red", 1), ("green", 2), ("blue", 3)]
        .into_iter()
        .collect();

    assert_eq!(trie.get("green"), Ok(&2));
    assert_eq!(sorted_values(&trie), vec![1, 2, 3]);
}

#[test]
fn test_non_clone_values() {
    struct Handle(u8);

    let mut trie = Trie::new();
    trie.set("a", Handle(1));
    trie.set("b", Handle(2));

    let total: u8 = trie.values().iter().map(|h| h.0).sum();
    assert_eq!(total, 3);
    assert_eq!(trie.try_get("a").map(|h| h.0), Slot::of(1));
}

#[test]
fn test_long_key() {
    let key = "abc".repeat(40_000);
    let mut trie = Trie::new();

    trie.set(&key, 1);
    trie.set(&key[..key.len() - 1], 2);

    assert_eq!(trie.get(&key), Ok(&1));
    assert_eq!(trie.get(&key[..key.len() - 1]), Ok(&2));
    assert!(trie.try_get(&format!("{}x", key)).is_empty());
    assert_eq!(sorted_values(&trie), vec![1, 2]);
    assert_eq!(trie.node_count(), key.len() + 1);

    let copy = trie.clone();
    assert_eq!(copy.get(&key), Ok(&1));
    drop(copy);

    trie.remove(&key);
    assert!(trie.try_get(&key).is_empty());
    assert_eq!(trie.len(), 1);
    drop(trie);
}
