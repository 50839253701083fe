use avl_multimap::{AvlMultiMap, AvlMultiSet};

fn main() {
    let mut map = AvlMultiMap::new();
    map.insert(0, "zero");
    map.insert(1, "one");
    map.insert(2, "two");
    map.insert(2, "dos");
    map.insert(3, "three");
    map.insert(4, "four");
    assert_eq!(map.get(&1), Some(&"one"));
    assert_eq!(map.len(), 6);
    map.remove(&2);
    assert!(map.contains_key(&2));
    map.remove(&2);
    assert!(!map.contains_key(&2));

    for (k, v) in &map {
        println!("{k} => {v}");
    }

    let mut set = AvlMultiSet::new();
    for x in 0..5 {
        set.insert(x);
    }
    set.insert(1);
    assert!(set.contains(&1));
    set.remove(&1);
    assert!(set.contains(&1));
    set.remove(&1);
    assert!(!set.contains(&1));

    print!("{{ ");
    for x in &set {
        print!("{x}, ");
    }
    println!("}}");
}
