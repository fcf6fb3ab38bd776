use proptest::prelude::*;

use crate::DynamicArray;

use super::support::values;

fn insert_position() -> impl Strategy<Value = (Vec<i32>, usize, i32)> {
    prop::collection::vec(any::<i32>(), 0..64).prop_flat_map(|items| {
        let len = items.len();
        (Just(items), 0..=len, any::<i32>())
    })
}

fn remove_position() -> impl Strategy<Value = (Vec<i32>, usize)> {
    prop::collection::vec(any::<i32>(), 1..64).prop_flat_map(|items| {
        let len = items.len();
        (Just(items), 0..len)
    })
}

proptest! {
    #[test]
    fn append_then_index(items in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut array = DynamicArray::new();
        for (i, &item) in items.iter().enumerate() {
            prop_assert_eq!(array.insert(item), i);
        }

        prop_assert_eq!(array.len(), items.len());
        for (i, &item) in items.iter().enumerate() {
            prop_assert_eq!(array[i], item);
        }
    }

    #[test]
    fn growth_keeps_earlier_values(
        initial in 1..16usize,
        items in prop::collection::vec(any::<u64>(), 0..200)
    ) {
        let mut array = DynamicArray::with_capacity(initial);
        for (i, &item) in items.iter().enumerate() {
            let before = array.capacity();
            array.insert(item);
            prop_assert!(array.capacity() >= before);
            prop_assert!(array.len() <= array.capacity());
            prop_assert_eq!(&values(&array)[..], &items[..=i]);
        }
    }

    #[test]
    fn positional_insert((items, index, value) in insert_position()) {
        let mut array: DynamicArray<i32> = items.iter().copied().collect();

        prop_assert_eq!(array.insert_at(index, value), index);

        let mut expected = items.clone();
        expected.insert(index, value);
        prop_assert_eq!(array.len(), items.len() + 1);
        prop_assert_eq!(array[index], value);
        prop_assert_eq!(values(&array), expected);
    }

    #[test]
    fn remove_shifts_left((items, index) in remove_position()) {
        let mut array: DynamicArray<i32> = items.iter().copied().collect();
        let capacity = array.capacity();

        prop_assert_eq!(array.remove(index), items[index]);

        prop_assert_eq!(array.len(), items.len() - 1);
        prop_assert_eq!(array.capacity(), capacity);
        for i in 0..array.len() {
            let source = if i < index { i } else { i + 1 };
            prop_assert_eq!(array[i], items[source]);
        }
    }

    #[test]
    fn reverse_walk_mirrors_forward_walk(items in prop::collection::vec(any::<i32>(), 0..64)) {
        let array: DynamicArray<i32> = items.iter().copied().collect();

        let forward: Vec<i32> = array.cursor().copied().collect();
        let mut reverse: Vec<i32> = array.rev_cursor().copied().collect();
        reverse.reverse();

        prop_assert_eq!(&forward, &items);
        prop_assert_eq!(reverse, forward);
    }

    #[test]
    fn copies_are_independent(
        items in prop::collection::vec(any::<i16>(), 1..64),
        index in any::<prop::sample::Index>()
    ) {
        let original: DynamicArray<i32> = items.iter().map(|&v| v as i32).collect();
        let mut copy = original.clone();
        let i = index.index(items.len());

        prop_assert_eq!(&copy, &original);
        copy[i] += 1;

        prop_assert_eq!(original[i], items[i] as i32);
        prop_assert_eq!(copy[i], items[i] as i32 + 1);
        prop_assert_eq!(copy.len(), original.len());
    }

    #[test]
    fn take_transfers_everything(items in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut source: DynamicArray<i32> = items.iter().copied().collect();

        let moved = source.take();

        prop_assert_eq!(values(&moved), items);
        prop_assert_eq!(source.len(), 0);
        prop_assert_eq!(source.capacity(), 0);

        source.insert(1);
        prop_assert_eq!(values(&source), vec![1]);
    }
}
