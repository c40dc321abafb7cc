/// Runtime values.
///
/// Defines the `Value` enum, its text rendering, and the exact-type check
/// applied when a value is stored into a binding.
pub mod core;
/// Declared types.
///
/// Defines `DeclaredType`, the closed set of type annotations a declaration
/// can carry, and the conversion of scanned text into values of each type.
pub mod declared_type;
