//! Builds a small integer array and walks it through the mutating and
//! folding operations.
//!
//! Run with: cargo run --example numbers

use std::mem::size_of;

use dynarray::DynArray;

fn int(item: &[u8]) -> i32 {
    i32::from_le_bytes(item.try_into().expect("item is 4 bytes"))
}

fn show(label: &str, array: &DynArray) {
    let rendered: Vec<i32> = array.iter().map(int).collect();
    println!("{label}: {rendered:?}");
}

fn main() {
    let mut array = DynArray::new(size_of::<i32>()).expect("fresh array");
    show("empty array", &array);

    for n in 1i32..=10 {
        array.push(&n.to_le_bytes()).expect("push");
    }
    show("numbers 1-10", &array);

    array.map(|item| {
        let doubled = int(item) * 2;
        item.copy_from_slice(&doubled.to_le_bytes());
    });
    show("doubled in place", &array);

    array.remove_at(0).expect("index 0 is occupied");
    show("removed the first item", &array);

    array.remove_at(2).expect("index 2 is occupied");
    show("removed the third item", &array);

    let equals = |a: &[u8], b: &[u8]| a == b;

    array
        .remove(&18i32.to_le_bytes(), equals, false)
        .expect("item size matches");
    show("removed the first 18", &array);

    for index in [3, 5, 7] {
        array
            .insert(index, &8i32.to_le_bytes())
            .expect("index within bounds");
    }
    show("inserted 8 at indices 3, 5, 7", &array);

    let removed = array
        .remove(&8i32.to_le_bytes(), equals, true)
        .expect("item size matches");
    show(&format!("removed all {removed} eights"), &array);

    let sum = array.fold_left(0, |acc, item| acc + int(item));
    println!("fold_left  (sum):  {sum}");

    let sum = array.fold_right(0, |item, acc| int(item) + acc);
    println!("fold_right (sum):  {sum}");

    let diff = array.fold_left(0, |acc, item| acc - int(item));
    println!("fold_left  (diff): {diff}");

    let diff = array.fold_right(0, |item, acc| int(item) - acc);
    println!("fold_right (diff): {diff}");
}
