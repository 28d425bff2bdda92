use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Checks if a file exists at the given path
pub fn file_exists(path: &str) -> bool {
    Path::new(path).exists()
}

/// Deletes the file at the given path, returning whether it was removed
pub fn file_delete(path: &str) -> bool {
    fs::remove_file(path).is_ok()
}

/// Read every line of a file
///
/// Line terminators (`\n` or `\r\n`) are stripped. The handle is closed when
/// the function returns, on success or error.
pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    BufReader::new(file).lines().collect()
}

/// Write every line to a file, truncating existing content
///
/// Each line is followed by `\n`. Nothing is written if the file cannot be
/// created.
pub fn write_lines<P, I, S>(path: P, lines: I) -> io::Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
