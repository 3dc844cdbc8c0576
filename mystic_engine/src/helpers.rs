//! Helpers Module
//!
//! Small text helpers that don't clearly belong in another module.

/// Returns "s" unless `count` is exactly one.
pub fn plural_s(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Join a list of names as prose: "a", "a and b", "a, b and c".
pub fn name_list(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}
