use rstest::rstest;

use super::*;

#[rstest]
#[case(0, "resources")]
#[case(1, "resource")]
#[case(2, "resources")]
#[case(3, "resources")]
fn pluralize_test(#[case] count: usize, #[case] expected: &str) {
    assert_eq!(expected, pluralize(count, "resource", "resources"));
}

#[test]
fn count_of_test() {
    assert_eq!("1 resource", count_of(1, "resource", "resources"));
    assert_eq!("2 resources", count_of(2, "resource", "resources"));
}

#[test]
fn capitalize_test() {
    assert_eq!("Role binding", capitalize("role binding"));
    assert_eq!("", capitalize(""));
    assert_eq!("S", capitalize("s"));
}
