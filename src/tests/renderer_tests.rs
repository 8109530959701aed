use crate::{render, NodeKind, Pattern, RegexOptions, Renderer, MAX_NESTING_DEPTH};

fn describe(s: &str) -> String {
    s.parse::<Pattern>().unwrap().describe()
}

#[test]
fn test_render_named_and_numbered_groups() {
    assert_eq!(
        describe(r"(?<year>\d{4})-(\d\d)"),
        concat!(
            "Capture group 1 <year> `(?<year>\\d{4})`\n",
            "  Any digit, repeated exactly 4 times `\\d{4}`\n",
            "Literal \"-\" `-`\n",
            "Capture group 2 `(\\d\\d)`\n",
            "  Any digit `\\d`\n",
            "  Any digit `\\d`\n",
        )
    );
}

#[test]
fn test_render_alternation() {
    assert_eq!(
        describe("cat|dog|"),
        concat!(
            "Alternation with 3 branches `cat|dog|`\n",
            "  Branch 1 `cat`\n",
            "    Literal \"cat\" `cat`\n",
            "  Branch 2 `dog`\n",
            "    Literal \"dog\" `dog`\n",
            "  Branch 3 (empty) ``\n",
        )
    );
}

#[test]
fn test_render_quantifier_annotations() {
    assert_eq!(describe("x*?"), "Literal \"x\", repeated zero or more times, lazy `x*?`\n");
    assert_eq!(describe("x{2,4}?"), "Literal \"x\", repeated 2 to 4 times, lazy `x{2,4}?`\n");
    assert_eq!(describe("x{2,}"), "Literal \"x\", repeated at least 2 times `x{2,}`\n");
    assert_eq!(describe("x?"), "Literal \"x\", optional `x?`\n");
    assert_eq!(
        describe("(ab)+"),
        concat!(
            "Capture group 1, repeated one or more times `(ab)+`\n",
            "  Literal \"ab\" `ab`\n",
        )
    );
}

#[test]
fn test_render_backreferences_use_group_table() {
    assert_eq!(
        describe(r#"(?<q>['"])\k<q>\1\k<missing>"#),
        concat!(
            "Capture group 1 <q> `(?<q>['\"])`\n",
            "  Any character in: '\\'', '\"' `['\"]`\n",
            "Backreference to group 1 <q> `\\k<q>`\n",
            "Backreference to group 1 <q> `\\1`\n",
            "Backreference to group <missing> `\\k<missing>`\n",
        )
    );
}

#[test]
fn test_render_lookaround_and_anchors() {
    assert_eq!(
        describe(r"^(?<=a)(?!b)\b$"),
        concat!(
            "Beginning of line or string `^`\n",
            "Positive lookbehind `(?<=a)`\n",
            "  Literal \"a\" `a`\n",
            "Negative lookahead `(?!b)`\n",
            "  Literal \"b\" `b`\n",
            "Word boundary `\\b`\n",
            "End of line or string `$`\n",
        )
    );
}

#[test]
fn test_render_classes_and_options() {
    assert_eq!(
        describe(r"[^a-z\d](?i)(?#note)(?s-m:.)"),
        concat!(
            "Any character not in: 'a' to 'z', any digit `[^a-z\\d]`\n",
            "Set options: enable ignore case `(?i)`\n",
            "Comment \"note\" `(?#note)`\n",
            "Group with options: enable single line; disable multiline `(?s-m:.)`\n",
            "  Any character `.`\n",
        )
    );
}

#[test]
fn test_render_empty() {
    assert_eq!(describe(""), "Empty ``\n");
    assert_eq!(
        describe("()"),
        concat!("Capture group 1 `()`\n", "  Empty ``\n")
    );
}

#[test]
fn test_render_indent_level() {
    let pattern: Pattern = "(a)".parse().unwrap();
    assert_eq!(
        render(pattern.root(), pattern.source(), pattern.groups(), 2),
        concat!("    Capture group 1 `(a)`\n", "      Literal \"a\" `a`\n")
    );
}

#[test]
fn test_render_truncates_long_excerpts() {
    let text = "a".repeat(60);
    let rendered = describe(&format!("({})", text));
    let first_line = rendered.lines().next().unwrap();
    assert!(first_line.starts_with("Capture group 1 `(aaa"));
    assert!(first_line.ends_with("...`"));
    let excerpt = first_line.trim_start_matches("Capture group 1 `").trim_end_matches('`');
    assert_eq!(excerpt.chars().count(), 40);
}

#[test]
fn test_render_is_idempotent() {
    let pattern = Pattern::parse(
        r"^(?<user>[\w.]+)@(?<host>\w+(\.\w+)*)$|(?>x+)",
        RegexOptions::default(),
    )
    .unwrap();
    assert_eq!(pattern.describe(), pattern.describe());
}

#[test]
fn test_render_class_subtraction() {
    assert_eq!(
        describe("[a-z-[aeiou]]"),
        "Any character in: 'a' to 'z' except: 'a', 'e', 'i', 'o', 'u' `[a-z-[aeiou]]`\n"
    );
    assert_eq!(
        describe(r"[^\w-[\d-[^5]]]"),
        concat!(
            "Any character not in: any word character except: any digit except: ",
            "any character not in: '5' `[^\\w-[\\d-[^5]]]`\n",
        )
    );
}

#[test_log::test]
fn test_render_deepest_allowed_nesting() {
    let depth = MAX_NESTING_DEPTH;
    let text = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
    let rendered = describe(&text);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), depth + 1);
    assert!(lines[0].starts_with("Capture group 1 `((("));
    assert_eq!(
        lines[depth - 1],
        format!("{}Capture group {} `(a)`", "  ".repeat(depth - 1), depth)
    );
    assert_eq!(lines[depth], format!("{}Literal \"a\" `a`", "  ".repeat(depth)));
}

#[test]
fn test_render_too_deep_is_an_error_sentence() {
    let depth = MAX_NESTING_DEPTH * 10;
    let text = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(
        crate::describe(&text, RegexOptions::default()),
        format!(
            "An error occurred while analyzing the pattern: \"nesting exceeds the maximum depth of {} at offset {}\".",
            MAX_NESTING_DEPTH, MAX_NESTING_DEPTH
        )
    );
}

#[test]
fn test_describe_single_nodes() {
    let pattern: Pattern = "a|(b)".parse().unwrap();
    let renderer = Renderer::new(pattern.source(), pattern.groups());
    assert_eq!(renderer.describe(pattern.root()), "Alternation with 2 branches");
    let NodeKind::Alternation(branches) = &pattern.root().kind else {
        panic!("expected an alternation");
    };
    assert_eq!(renderer.describe(&branches[0]), "Sequence of 1 term");

    let empty: Pattern = "".parse().unwrap();
    let renderer = Renderer::new(empty.source(), empty.groups());
    assert_eq!(renderer.describe(empty.root()), "Empty");
}
