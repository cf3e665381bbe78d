use sorted_keylist::SortedList;

fn main() {
    let list = SortedList::from_values([2, 11, 2, 1, 29, 3, 7, 4, 2, 18, 4, 2]);

    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        [1, 2, 2, 2, 2, 3, 4, 4, 7, 11, 18, 29]
    );

    assert_eq!(list.find(&2), Some(1));
    assert_eq!(list.rfind(&2), Some(4));
    assert_eq!(list.count(&2), 4);
    assert_eq!(list.count(&5), 0);

    println!("{list:?}");
}
