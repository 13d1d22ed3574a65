// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Small naming and formatting helpers for test output.

/// Name of the enclosing function formatted as `"name()"`.
///
/// ```
/// fn smoke_test() -> String {
///     unitkit::function_name!()
/// }
/// assert_eq!(smoke_test(), "smoke_test()");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn here() {}
        $crate::naming::last_path_segment(::std::any::type_name_of_val(&here))
    }};
}

/// Turn `a::b::func::here` (as produced inside [`function_name!`]) into
/// `"func()"`, skipping closure segments.
#[doc(hidden)]
pub fn last_path_segment(type_name: &str) -> String {
    let name = type_name
        .strip_suffix("::here")
        .unwrap_or(type_name)
        .split("::")
        .filter(|segment| *segment != "{{closure}}")
        .last()
        .unwrap_or_default();
    format!("{}()", name)
}

/// `"yes"` or `"no"`
pub fn yes_or_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// `"true"` or `"false"`
pub fn true_or_false(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
