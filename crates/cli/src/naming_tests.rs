// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn function_name_names_enclosing_function() {
    assert_eq!(
        crate::function_name!(),
        "function_name_names_enclosing_function()"
    );
}

#[test]
fn function_name_skips_closures() {
    let name = (|| crate::function_name!())();
    assert_eq!(name, "function_name_skips_closures()");
}

#[test]
fn last_path_segment_strips_module_path() {
    assert_eq!(last_path_segment("crate::tests::smoke::here"), "smoke()");
    assert_eq!(last_path_segment("plain"), "plain()");
}

#[test]
fn bool_words() {
    assert_eq!(yes_or_no(true), "yes");
    assert_eq!(yes_or_no(false), "no");
    assert_eq!(true_or_false(true), "true");
    assert_eq!(true_or_false(false), "false");
}
