pub mod label_set;
pub mod point_set;

/// A discrete class label.
///
/// Labels are plain integers with no constraint on arity; the vote mechanism
/// works over whatever label set is present in the data.
pub type Label = i64;
