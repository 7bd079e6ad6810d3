//! Linear-time concatenation of slices.

/// Concatenates `arrays` in argument order, each slice's elements in their
/// original order.
///
/// The output is allocated once with the total length, so the cost is linear
/// in the number of elements. Inputs are only read.
///
/// # Examples
///
/// ```
/// use u_basics::collections::concatenate_arrays;
///
/// let joined = concatenate_arrays(&[&[1, 2][..], &[3], &[]]);
/// assert_eq!(joined, vec![1, 2, 3]);
///
/// let none: Vec<i32> = concatenate_arrays(&[]);
/// assert!(none.is_empty());
/// ```
pub fn concatenate_arrays<T: Clone>(arrays: &[&[T]]) -> Vec<T> {
    let total = arrays.iter().map(|a| a.len()).sum();
    let mut out = Vec::with_capacity(total);
    for array in arrays {
        out.extend_from_slice(array);
    }
    out
}

/// Variadic form of [`concatenate_arrays`].
///
/// Accepts zero or more expressions that coerce to slices (`Vec`s, arrays,
/// slices).
///
/// ```
/// use u_basics::concat_arrays;
///
/// let a = vec!["x", "y"];
/// let b = ["z"];
/// assert_eq!(concat_arrays!(a, b), vec!["x", "y", "z"]);
///
/// let empty: Vec<u8> = concat_arrays!();
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! concat_arrays {
    () => {
        ::std::vec::Vec::new()
    };
    ($($array:expr),+ $(,)?) => {
        $crate::collections::concatenate_arrays(&[$(&$array[..]),+])
    };
}
