use sorted_keylist::KeyedSortedList;

fn main() {
    let mut list = KeyedSortedList::from_values(
        ["apple", "lime", "Lemon"],
        |s: &&str| s.to_lowercase(),
    );
    list.add("Banana");

    let sorted = list.iter().copied().collect::<Vec<_>>();
    assert_eq!(sorted, ["apple", "Banana", "Lemon", "lime"]);

    // ordering is case blind, lookups match the value exactly
    assert_eq!(list.find(&"Banana"), Some(1));
    assert_eq!(list.find(&"banana"), None);

    println!("{list:?}");
}
