use std::io::Read;

/// The command lines of an mcfunction file
///
/// Comments and blank lines are stripped at read time, what remains is one command
/// per element
pub type Function = Vec<String>;

/// Reads the commands of an mcfunction file from `reader`, dropping comment lines and
/// blank lines and trimming trailing whitespace.
pub fn read_function<T: Read>(mut reader: T) -> std::io::Result<Function> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;

    Ok(buf
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect())
}

#[test]
fn comments_and_blanks_are_stripped() {
    let source = "# grants the tab reward\nxp add @s 100\n\ngive @s minecraft:diamond 3  \n";

    let function = read_function(source.as_bytes()).unwrap();
    assert_eq!(function, vec![
        "xp add @s 100".to_owned(),
        "give @s minecraft:diamond 3".to_owned()
    ]);
}
