use dynarray::DynArray;

fn le(n: i64) -> [u8; 8] {
    n.to_le_bytes()
}

fn int(item: &[u8]) -> i64 {
    i64::from_le_bytes(item.try_into().unwrap())
}

fn array_of(values: &[i64]) -> DynArray {
    let mut array = DynArray::new(8).unwrap();
    for &n in values {
        array.push(&le(n)).unwrap();
    }
    array
}

#[test]
fn test_fold_left_sums() {
    let array = array_of(&[1, 2, 3, 4]);

    let sum = array.fold_left(0, |acc, item| acc + int(item));

    assert_eq!(sum, 10);
}

#[test]
fn test_fold_right_sums_to_the_same_total() {
    let array = array_of(&[1, 2, 3, 4]);

    let sum = array.fold_right(0, |item, acc| int(item) + acc);

    assert_eq!(sum, 10);
}

#[test]
fn test_fold_direction_matters_for_subtraction() {
    let array = array_of(&[1, 2, 3]);

    // ((0 - 1) - 2) - 3
    let left = array.fold_left(0, |acc, item| acc - int(item));
    // 1 - (2 - (3 - 0))
    let right = array.fold_right(0, |item, acc| int(item) - acc);

    assert_eq!(left, -6);
    assert_eq!(right, 2);
}

#[test]
fn test_fold_on_an_empty_array_returns_init() {
    let array = DynArray::new(8).unwrap();

    assert_eq!(array.fold_left(41, |acc, _| acc + 1), 41);
    assert_eq!(array.fold_right(41, |_, acc| acc + 1), 41);
}

#[test]
fn test_fold_left_visits_front_to_back() {
    let array = array_of(&[10, 20, 30]);

    let seen = array.fold_left(Vec::new(), |mut acc, item| {
        acc.push(int(item));
        acc
    });

    assert_eq!(seen, [10, 20, 30]);
}

#[test]
fn test_fold_right_visits_back_to_front() {
    let array = array_of(&[10, 20, 30]);

    let seen = array.fold_right(Vec::new(), |item, mut acc| {
        acc.push(int(item));
        acc
    });

    assert_eq!(seen, [30, 20, 10]);
}

#[test]
fn test_folds_survive_long_arrays() {
    // Reduction is iterative, so length cannot exhaust the stack.
    let mut array = DynArray::new(8).unwrap();
    let n = 100_000i64;
    for i in 1..=n {
        array.push(&le(i)).unwrap();
    }

    let expected = n * (n + 1) / 2;
    assert_eq!(array.fold_left(0, |acc, item| acc + int(item)), expected);
    assert_eq!(array.fold_right(0, |item, acc| int(item) + acc), expected);
}

#[test]
fn test_fold_can_change_the_accumulator_type() {
    let array = array_of(&[7, 8, 9]);

    let rendered = array.fold_left(String::new(), |mut acc, item| {
        if !acc.is_empty() {
            acc.push('-');
        }
        acc.push_str(&int(item).to_string());
        acc
    });

    assert_eq!(rendered, "7-8-9");
}
