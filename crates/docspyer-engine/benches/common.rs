// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with `code` and **bold** text.\n\n- Bullet point\n  - Nested item\n- Another item\n\nKey | Value\n--- | -----\nalfa | 1\n\n```python\ndef example():\n    return 42\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_list(depth: usize, breadth: usize) -> String {
    let mut content = String::from("Root\n");
    push_items(&mut content, depth, breadth, 0);
    content
}

fn push_items(content: &mut String, remaining_depth: usize, breadth: usize, level: usize) {
    if remaining_depth == 0 {
        return;
    }
    let indent = "  ".repeat(level);
    for i in 0..breadth {
        content.push_str(&format!("{indent}- item {level}.{i}\n"));
        push_items(content, remaining_depth - 1, breadth, level + 1);
    }
}

#[allow(dead_code)]
pub fn generate_docstring(parameters: usize) -> String {
    let mut content = String::from("Summary of the function.\n\nParameters\n----------\n");
    for i in 0..parameters {
        content.push_str(&format!(
            "arg{i} : int\n    Value number {i}, see `other` for details.\n"
        ));
    }
    content.push_str("\nReturns\n-------\nstr\n    The **result**.\n\nNotes\n-----\nNothing special.\n");
    content
}
