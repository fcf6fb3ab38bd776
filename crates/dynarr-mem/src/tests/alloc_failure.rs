use crate::{CapacityError, DynamicArray, fail_next_allocation};

// =============================================================================
// growth failure leaves the array untouched
// =============================================================================

#[test]
fn test_try_insert_failure_keeps_contents() {
    let mut array: DynamicArray<String> = (0..8).map(|i| i.to_string()).collect();
    assert_eq!(array.capacity(), 8);
    let ptr = array.as_ptr();

    fail_next_allocation();
    let result = array.try_insert("8".to_string());

    assert_eq!(result, Err(CapacityError::AllocFailed { new_capacity: 13 }));
    assert_eq!(array.len(), 8);
    assert_eq!(array.capacity(), 8);
    assert_eq!(array.as_ptr(), ptr);
    for (i, value) in array.iter().enumerate() {
        assert_eq!(*value, i.to_string());
    }
}

#[test]
fn test_try_insert_at_failure_keeps_contents() {
    let mut array: DynamicArray<i32> = DynamicArray::with_capacity(3);
    array.extend([1, 2, 3]);

    fail_next_allocation();
    let result = array.try_insert_at(1, 9);

    assert_eq!(result, Err(CapacityError::AllocFailed { new_capacity: 5 }));
    assert_eq!(array, [1, 2, 3]);
    assert_eq!(array.capacity(), 3);
}

#[test]
fn test_insert_succeeds_after_failure() {
    let mut array: DynamicArray<i32> = DynamicArray::with_capacity(1);
    array.insert(1);

    fail_next_allocation();
    assert!(array.try_insert(2).is_err());

    assert_eq!(array.try_insert(2), Ok(1));
    assert_eq!(array, [1, 2]);
}

#[test]
fn test_try_insert_without_growth_ignores_fault() {
    let mut array: DynamicArray<i32> = DynamicArray::with_capacity(4);

    fail_next_allocation();
    assert_eq!(array.try_insert(1), Ok(0));

    // still armed until the next allocation
    assert!(DynamicArray::<i32>::try_new().is_err());
}

// =============================================================================
// construction failure
// =============================================================================

#[test]
fn test_try_new_failure() {
    fail_next_allocation();

    let result = DynamicArray::<u64>::try_new();

    assert!(matches!(result, Err(CapacityError::AllocFailed { new_capacity: 8 })));
}

#[test]
fn test_try_with_capacity_overflow() {
    let result = DynamicArray::<u64>::try_with_capacity(usize::MAX);

    assert!(matches!(result, Err(CapacityError::CapacityOverflow { requested: usize::MAX })));
}

#[test]
fn test_zero_sized_element_rejected() {
    let result = DynamicArray::<()>::try_new();

    assert!(matches!(result, Err(CapacityError::ZeroSizedElement)));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        CapacityError::AllocFailed { new_capacity: 13 }.to_string(),
        "allocation failed with new capacity 13",
    );
    assert_eq!(CapacityError::ZeroSizedElement.to_string(), "size of element type is zero");
}
