//! Examples of using the character-keyed trie
use char_trie::{Slot, Trie};

fn main() {
    // Create a new trie
    let mut trie = Trie::new();

    // Insert some values
    trie.set("hello", 1);
    trie.set("help", 2);
    trie.set("", 0);

    // Check values
    assert_eq!(trie.get("hello"), Ok(&1));
    assert_eq!(trie["help"], 2);
    assert_eq!(trie.try_get("hel"), Slot::Empty);

    // Lookups never fail; inspect the slot instead
    match trie.try_get("world") {
        Slot::Holds(value) => println!("world => {}", value),
        Slot::Empty => println!("world is not present"),
    }

    // Removing keeps the branch but clears the value
    trie.remove("hello");
    assert!(!trie.contains_key("hello"));

    let mut values: Vec<i32> = trie.values().into_iter().copied().collect();
    values.sort();
    println!("values: {:?} across {} nodes", values, trie.node_count());
}
