/// Test macro for asserting that two coordinate arrays agree within an absolute
/// tolerance.
///
/// # Panics
///
/// This macro panics if any pair of coordinates differs by more than the
/// tolerance. Its message places the coordinates below each other at the
/// beginning of subsequent lines for easy comparability.
#[cfg(test)]
macro_rules! assert_close {
    ($cs1:expr , $cs2:expr , $tolerance:expr $(,)?) => {
        let (cs1, cs2, tolerance) = ($cs1, $cs2, $tolerance);
        for (c1, c2) in cs1.iter().zip(cs2.iter()) {
            assert!(
                (c1 - c2).abs() <= tolerance,
                "coordinates differ by more than {:e}:\n{:?}\n{:?}",
                tolerance,
                cs1,
                cs2
            );
        }
    };
}

#[cfg(test)]
pub(crate) use assert_close;
