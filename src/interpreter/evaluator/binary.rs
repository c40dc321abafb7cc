/// Additive and multiplicative operators with integer-to-real promotion.
pub mod arithmetic;
/// Ordering and equality comparisons.
pub mod comparison;
/// String concatenation with `&`.
pub mod concat;
/// `AND` and `OR`.
pub mod logic;
