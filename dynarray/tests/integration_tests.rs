use dynarray::DynArray;

fn le(n: i32) -> [u8; 4] {
    n.to_le_bytes()
}

fn int(item: &[u8]) -> i32 {
    i32::from_le_bytes(item.try_into().unwrap())
}

#[test]
fn test_new_array_is_empty() {
    let array = DynArray::new(4).unwrap();

    assert_eq!(array.len(), 0);
    assert!(array.is_empty());
    assert_eq!(array.capacity(), 8);
    assert_eq!(array.item_size(), 4);
    assert_eq!(array.get(0), None);
}

#[test]
fn test_with_capacity_controls_the_initial_room() {
    let array = DynArray::with_capacity(4, 2).unwrap();

    assert_eq!(array.capacity(), 2);
    assert_eq!(array.len(), 0);
}

#[test]
fn test_push_and_get() {
    let mut array = DynArray::new(4).unwrap();

    array.push(&le(10)).unwrap();
    array.push(&le(20)).unwrap();

    assert_eq!(array.len(), 2);
    assert_eq!(array.get(0).map(int), Some(10));
    assert_eq!(array.get(1).map(int), Some(20));
    assert_eq!(array.get(2), None);
}

#[test]
fn test_capacity_doubles_when_full() {
    let mut array = DynArray::with_capacity(4, 2).unwrap();

    array.push(&le(1)).unwrap();
    array.push(&le(2)).unwrap();
    assert_eq!(array.capacity(), 2);

    // The push that finds the array full triggers the doubling.
    array.push(&le(3)).unwrap();
    assert_eq!(array.capacity(), 4);

    array.push(&le(4)).unwrap();
    array.push(&le(5)).unwrap();
    assert_eq!(array.capacity(), 8);
}

#[test]
fn test_growth_from_zero_capacity() {
    let mut array = DynArray::with_capacity(4, 0).unwrap();
    assert_eq!(array.capacity(), 0);

    array.push(&le(1)).unwrap();
    assert_eq!(array.capacity(), 1);

    array.push(&le(2)).unwrap();
    assert_eq!(array.capacity(), 2);

    array.push(&le(3)).unwrap();
    assert_eq!(array.capacity(), 4);
}

#[test]
fn test_default_capacity_is_eight() {
    let mut array = DynArray::new(1).unwrap();

    for n in 0..8u8 {
        array.push(&[n]).unwrap();
    }
    assert_eq!(array.capacity(), 8);

    array.push(&[8]).unwrap();
    assert_eq!(array.capacity(), 16);
}

#[test]
fn test_items_survive_growth() {
    let mut array = DynArray::with_capacity(4, 1).unwrap();

    for n in 0..100 {
        array.push(&le(n)).unwrap();
    }

    assert_eq!(array.len(), 100);
    for n in 0..100 {
        assert_eq!(array.get(n as usize).map(int), Some(n));
    }
}

#[test]
fn test_clear_keeps_the_capacity() {
    let mut array = DynArray::with_capacity(4, 2).unwrap();
    for n in 0..5 {
        array.push(&le(n)).unwrap();
    }
    let grown = array.capacity();

    array.clear();

    assert_eq!(array.len(), 0);
    assert!(array.is_empty());
    assert_eq!(array.capacity(), grown);
    assert_eq!(array.get(0), None);
}

#[test]
fn test_single_byte_items() {
    let mut array = DynArray::new(1).unwrap();

    array.push(b"a").unwrap();
    array.push(b"b").unwrap();

    assert_eq!(array.get(0), Some(&b"a"[..]));
    assert_eq!(array.get(1), Some(&b"b"[..]));
}

#[test]
fn test_wide_items() {
    let mut array = DynArray::new(16).unwrap();
    let item = [7u8; 16];

    array.push(&item).unwrap();

    assert_eq!(array.len(), 1);
    assert_eq!(array.get(0), Some(&item[..]));
}

#[test]
fn test_debug_reports_shape_not_contents() {
    let mut array = DynArray::with_capacity(4, 2).unwrap();
    array.push(&le(1)).unwrap();

    let rendered = format!("{array:?}");
    assert_eq!(rendered, "DynArray { len: 1, capacity: 2, item_size: 4 }");
}
