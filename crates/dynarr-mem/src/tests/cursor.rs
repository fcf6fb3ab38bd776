use crate::{Direction, DynamicArray};

fn walk<T: Copy>(array: &DynamicArray<T>, direction: Direction) -> Vec<T> {
    let mut cursor = match direction {
        Direction::Forward => array.cursor(),
        Direction::Reverse => array.rev_cursor(),
    };
    let mut out = Vec::new();
    while cursor.has_next() {
        out.push(*cursor.get());
        cursor.move_next();
    }
    out
}

// =============================================================================
// Cursor
// =============================================================================

#[test]
fn test_forward_cursor() {
    let array: DynamicArray<i32> = (1..=5).collect();

    assert_eq!(walk(&array, Direction::Forward), [1, 2, 3, 4, 5]);
}

#[test]
fn test_reverse_cursor() {
    let array: DynamicArray<i32> = (1..=5).collect();

    assert_eq!(walk(&array, Direction::Reverse), [5, 4, 3, 2, 1]);
}

#[test]
fn test_cursors_on_empty_array() {
    let array: DynamicArray<i32> = DynamicArray::new();

    assert!(!array.cursor().has_next());
    assert!(!array.rev_cursor().has_next());
    assert_eq!(array.rev_cursor().index(), None);
}

#[test]
fn test_cursor_reports_index_and_direction() {
    let array: DynamicArray<i32> = (1..=3).collect();
    let mut cursor = array.rev_cursor();

    assert_eq!(cursor.direction(), Direction::Reverse);
    assert_eq!(cursor.index(), Some(2));
    cursor.move_next();
    assert_eq!(cursor.index(), Some(1));
}

#[test]
fn test_exhausted_cursor_stays_exhausted() {
    let array: DynamicArray<i32> = (1..=2).collect();
    let mut cursor = array.rev_cursor();

    for _ in 0..5 {
        cursor.move_next();
    }

    assert!(!cursor.has_next());
}

#[test]
#[should_panic(expected = "cursor has no current element")]
fn test_get_past_end_panics() {
    let array: DynamicArray<i32> = (1..=2).collect();
    let mut cursor = array.cursor();
    cursor.move_next();
    cursor.move_next();

    cursor.get();
}

#[test]
fn test_cursor_is_not_restartable() {
    let array: DynamicArray<i32> = (1..=3).collect();
    let mut cursor = array.cursor();

    let first: Vec<i32> = cursor.by_ref().copied().collect();
    let second: Vec<i32> = cursor.copied().collect();
    let fresh: Vec<i32> = array.cursor().copied().collect();

    assert_eq!(first, [1, 2, 3]);
    assert!(second.is_empty());
    assert_eq!(fresh, [1, 2, 3]);
}

#[test]
fn test_cursor_iterator_size_hint() {
    let array: DynamicArray<i32> = (1..=4).collect();
    let mut forward = array.cursor();
    let mut reverse = array.rev_cursor();
    forward.next();
    reverse.next();

    assert_eq!(forward.size_hint(), (3, Some(3)));
    assert_eq!(reverse.size_hint(), (3, Some(3)));
}

#[test]
fn test_cursor_reference_outlives_cursor() {
    let array: DynamicArray<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();

    let first = {
        let cursor = array.cursor();
        cursor.get()
    };

    assert_eq!(first, "a");
}

// =============================================================================
// CursorMut
// =============================================================================

#[test]
fn test_cursor_mut_set_overwrites() {
    let mut array: DynamicArray<i32> = (1..=4).collect();
    let mut cursor = array.cursor_mut();

    while cursor.has_next() {
        let doubled = *cursor.get() * 2;
        cursor.set(doubled);
        cursor.move_next();
    }

    assert_eq!(array, [2, 4, 6, 8]);
}

#[test]
fn test_rev_cursor_mut_get_mut() {
    let mut array: DynamicArray<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    let mut cursor = array.rev_cursor_mut();
    let mut step = 0;

    while cursor.has_next() {
        cursor.get_mut().push_str(&step.to_string());
        step += 1;
        cursor.move_next();
    }

    assert_eq!(array, ["a2", "b1", "c0"]);
}

#[test]
fn test_cursor_mut_replace() {
    let mut array: DynamicArray<i32> = (1..=2).collect();
    let mut cursor = array.cursor_mut();
    cursor.move_next();

    assert_eq!(cursor.replace(7), 2);
    assert_eq!(array, [1, 7]);
}

#[test]
#[should_panic(expected = "cursor has no current element")]
fn test_cursor_mut_set_on_empty_panics() {
    let mut array: DynamicArray<i32> = DynamicArray::new();
    array.cursor_mut().set(1);
}

#[test]
fn test_forward_and_reverse_mirror_each_other() {
    for len in 0..20 {
        let array: DynamicArray<usize> = (0..len).collect();
        let mut forward = walk(&array, Direction::Forward);
        forward.reverse();

        assert_eq!(forward, walk(&array, Direction::Reverse));
    }
}
