use simple_vector::{reserve, simple_vector, SimpleVector};

#[test]
fn test_empty_construction() {
    let v: SimpleVector<i32> = SimpleVector::new();

    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), 0);
    assert!(v.is_empty());

    let d: SimpleVector<i32> = SimpleVector::default();
    assert_eq!(d.capacity(), 0);
}

#[test]
fn test_sized_construction_with_value() {
    let v = SimpleVector::from_elem(3, 42);

    assert_eq!(v.len(), 3);
    assert_eq!(v.capacity(), 3);
    assert_eq!(v, [42, 42, 42]);

    let s = SimpleVector::from_elem(2, String::from("hi"));
    assert_eq!(s, ["hi", "hi"]);
}

#[test]
fn test_sized_construction_with_default() {
    let v: SimpleVector<i32> = SimpleVector::with_size(5);

    assert_eq!(v.len(), 5);
    assert_eq!(v.capacity(), 5);
    assert!(v.iter().all(|&x| x == 0));

    let empty: SimpleVector<i32> = SimpleVector::with_size(0);
    assert!(empty.is_empty());
    assert_eq!(empty.capacity(), 0);
}

#[test]
fn test_literal_list_construction() {
    let v = simple_vector![1, 2, 3];
    assert_eq!(v.len(), 3);
    assert_eq!(v.capacity(), 3);
    assert_eq!(v, [1, 2, 3]);

    let from_array = SimpleVector::from([4, 5]);
    assert_eq!(from_array, [4, 5]);

    let from_slice = SimpleVector::from(&[6, 7, 8][..]);
    assert_eq!(from_slice, [6, 7, 8]);
    assert_eq!(from_slice.capacity(), 3);

    let repeated = simple_vector![0u8; 4];
    assert_eq!(repeated, [0, 0, 0, 0]);

    let empty: SimpleVector<u8> = simple_vector![];
    assert!(empty.is_empty());
}

#[test]
fn test_collect_and_convert() {
    let v: SimpleVector<i32> = (1..=4).collect();
    assert_eq!(v, [1, 2, 3, 4]);

    let mut v = v;
    v.pop_back();
    let back: Vec<i32> = v.into();
    assert_eq!(back, vec![1, 2, 3]);

    let from_vec = SimpleVector::from(vec![9, 8]);
    assert_eq!(from_vec, [9, 8]);
}

#[test]
fn test_reserve_construction() {
    let v: SimpleVector<i32> = SimpleVector::from(reserve(5));
    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), 5);

    let w: SimpleVector<i32> = SimpleVector::with_reserve(reserve(0));
    assert_eq!(w.capacity(), 0);
    assert_eq!(reserve(7).capacity(), 7);
}

#[test]
fn test_copy_keeps_capacity() {
    let mut source = simple_vector![1, 2, 3];
    source.reserve(10);

    let copy = source.clone();
    assert_eq!(copy, source);
    assert_eq!(copy.len(), 3);
    assert_eq!(copy.capacity(), 10);
}

#[test]
fn test_copy_is_independent() {
    let source = simple_vector![String::from("a"), String::from("b")];
    let mut copy = source.clone();

    copy[0].push('!');
    copy.push_back(String::from("c"));

    assert_eq!(source, ["a", "b"]);
    assert_eq!(copy, ["a!", "b", "c"]);
}

#[test]
fn test_copy_assignment() {
    let source = simple_vector![1, 2, 3];
    let mut target = simple_vector![9; 8];

    target.assign(&source);
    assert_eq!(target, source);
    assert_eq!(target.capacity(), source.capacity());

    target[0] = 100;
    assert_eq!(source, [1, 2, 3]);

    let mut other = simple_vector![5];
    other.clone_from(&source);
    assert_eq!(other, [1, 2, 3]);
}

#[test]
fn test_self_comparison_after_assignment() {
    let mut v = simple_vector![1, 2, 3];
    let snapshot = v.clone();
    v.assign(&snapshot);

    assert_eq!(v, v);
    assert_eq!(v, snapshot);
}

#[test]
fn test_move_construction_empties_source() {
    let mut source = simple_vector![1, 2, 3];
    let target = source.take();

    assert_eq!(target, [1, 2, 3]);
    assert_eq!(target.capacity(), 3);
    assert_eq!(source.len(), 0);
    assert_eq!(source.capacity(), 0);
    assert!(source.is_empty());

    // the source stays usable
    source.push_back(4);
    assert_eq!(source, [4]);
}

#[test]
fn test_move_assignment_empties_source() {
    let mut source = simple_vector![1, 2];
    source.reserve(6);
    let mut target = simple_vector![7, 7, 7];

    target.move_from(&mut source);

    assert_eq!(target, [1, 2]);
    assert_eq!(target.capacity(), 6);
    assert_eq!(source.len(), 0);
    assert_eq!(source.capacity(), 0);
}

#[test]
fn test_swap() {
    let mut a = simple_vector![1, 2, 3];
    let mut b: SimpleVector<i32> = SimpleVector::from(reserve(10));
    b.push_back(9);

    a.swap(&mut b);

    assert_eq!(a, [9]);
    assert_eq!(a.capacity(), 10);
    assert_eq!(b, [1, 2, 3]);
    assert_eq!(b.capacity(), 3);
}

#[test]
fn test_clear_keeps_capacity() {
    let mut v = simple_vector![1, 2, 3, 4];
    v.clear();

    assert!(v.is_empty());
    assert_eq!(v.capacity(), 4);

    v.push_back(5);
    assert_eq!(v, [5]);
    assert_eq!(v.capacity(), 4);
}

#[test]
fn test_reference_scenario() {
    let mut v: SimpleVector<i32> = SimpleVector::new();
    v.reserve(4);
    assert_eq!((v.len(), v.capacity()), (0, 4));

    v.push_back(1);
    v.push_back(2);
    assert_eq!((v.len(), v.capacity()), (2, 4));
    assert_eq!(v, [1, 2]);

    v.insert(1, 9);
    assert_eq!(v, [1, 9, 2]);
    assert_eq!(v.len(), 3);

    v.erase(0);
    assert_eq!(v, [9, 2]);
    assert_eq!(v.len(), 2);
}

#[test]
fn test_debug_shows_occupied_range() {
    let mut v = simple_vector![1, 2, 3];
    v.pop_back();
    assert_eq!(format!("{:?}", v), "[1, 2]");
}
