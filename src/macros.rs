/// Creates a [`SimpleVector`](crate::SimpleVector) from a literal list.
///
/// - `simple_vector![]` is an empty vector.
/// - `simple_vector![a, b, c]` holds the listed values in order.
/// - `simple_vector![value; n]` holds `n` clones of `value`.
///
/// The capacity always equals the number of elements.
///
/// ```
/// use simple_vector::simple_vector;
///
/// let v = simple_vector![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
/// assert_eq!(v.capacity(), 3);
///
/// let w = simple_vector!["x"; 2];
/// assert_eq!(w, ["x", "x"]);
/// ```
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::SimpleVector::from_elem($n, $elem)
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($elem),+])
    };
}
