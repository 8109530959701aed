use crate::{named_groups, named_groups_with_options, InlineOption, Pattern, RegexOptions};

#[test]
fn test_scan_skips_lookbehind() {
    assert_eq!(named_groups(r"(?<=foo)(?<year>\d{4})"), vec!["year"]);
    assert_eq!(named_groups(r"(?<!foo)(?<=bar)x"), Vec::<String>::new());
}

#[test]
fn test_scan_both_syntaxes_in_order() {
    assert_eq!(
        named_groups(r"(?<a>.)(?'b'.)((?<c>x))"),
        vec!["a", "b", "c"]
    );
}

#[test]
fn test_scan_ignores_escapes_and_classes() {
    assert!(named_groups(r"\(?<no>x\)").is_empty());
    assert!(named_groups(r"[(?<no>)]").is_empty());
    assert_eq!(named_groups(r"[\]](?<yes>y)"), vec!["yes"]);
}

#[test]
fn test_scan_ignores_comments() {
    assert_eq!(named_groups("(?#note)(?<yes>y)"), vec!["yes"]);

    let text = "# (?<no>x)\n(?<yes>y)";
    let free_spacing = RegexOptions::default().with(InlineOption::FreeSpacing);
    assert_eq!(named_groups_with_options(text, free_spacing), vec!["yes"]);
    assert_eq!(named_groups(text), vec!["no", "yes"]);
}

#[test]
fn test_scan_follows_inline_free_spacing() {
    assert_eq!(named_groups("(?x)# (?<no>)\n(?<yes>y)"), vec!["yes"]);
    assert_eq!(
        named_groups("(?x:a)# (?<kept>)\n"),
        vec!["kept"]
    );
}

#[test]
fn test_scan_stops_at_malformed_construct() {
    assert_eq!(named_groups("(?<a>x)[(?<b>y)"), vec!["a"]);
    assert_eq!(named_groups("(?<a>x)(?<>y)(?<c>z)"), vec!["a"]);
}

#[test_log::test]
fn test_scan_agrees_with_parse() {
    let patterns = [
        r"(?<=foo)(?<year>\d{4})-(?<month>\d\d)",
        r"(?<a>x)(y)(?'b'z)(?<!w)(?<c>(?<d>.))",
        r"[(?<no>)]\(?<no>\)(?#(?<no>)(?<yes>.)",
        r"(?n)(?<named>a)(unnamed)",
        "(?x) (?<a> x ) # (?<hidden>)\n (?<b>y)",
        r"(?<q>['])\k<q>",
    ];
    for text in patterns {
        let pattern = Pattern::parse(text, RegexOptions::default()).unwrap();
        assert_eq!(named_groups(text), pattern.groups().names(), "pattern {:?}", text);
    }
}

#[test]
fn test_scan_lists_repeated_name_once() {
    let text = r"(?<a>x)(?<b>y)(?'a'z)";
    assert_eq!(named_groups(text), vec!["a", "b"]);
    let pattern = Pattern::parse(text, RegexOptions::default()).unwrap();
    assert_eq!(named_groups(text), pattern.groups().names());
}

#[test]
fn test_scan_skips_subtracted_classes() {
    assert_eq!(named_groups(r"[a-z-[(?<no>)]](?<yes>.)"), vec!["yes"]);
}
