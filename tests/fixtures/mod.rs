//! Test fixtures for deterministic source trees

use std::fs;
use std::io::Write;
use std::path::Path;

/// Write a file and flush it to disk before the test proceeds.
pub fn write_file_sync<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    contents: C,
) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(contents.as_ref())?;
    file.sync_all()?;
    Ok(())
}

/// 6 lines: 1 comment, complexity 0, max nesting 1, 1 duplicate
pub const MAIN_KT: &str = "\
// entry point
fun main() {
    val greeting = \"hello\"
    println(greeting)
    println(greeting)
}
";

/// 11 lines: 2 comments, complexity 3 (two real `if`s plus the substring
/// match inside `classify`), max nesting 2, 1 duplicate (the `}` lines)
pub const UTIL_KT: &str = "\
/* utility helpers
   shared across the project */
fun classify(x: Int): String {
    if (x > 0) {
        return \"positive\"
    }
    if (x < 0) {
        return \"negative\"
    }
    return \"zero\"
}
";

/// Create a small project tree with known metric values.
///
/// Tree totals across the two eligible .kt files: 17 total lines,
/// 3 comment lines, complexity 3, max nesting depth 2, 2 duplicate lines.
/// The README is not an eligible source file.
pub fn create_project_fixture(base: &Path) -> std::io::Result<()> {
    fs::create_dir_all(base.join("src"))?;
    write_file_sync(base.join("src/main.kt"), MAIN_KT)?;
    write_file_sync(base.join("src/util.kt"), UTIL_KT)?;
    write_file_sync(base.join("README.md"), "# fixture project\n")?;
    Ok(())
}
