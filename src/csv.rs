// src/csv.rs
use std::io::{ self, Write };

pub const SEP: char = ',';

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W, S>(mut w: W, row: &[S]) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", SEP)?; } else { first = false; }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_string(cells: &[&str]) -> String {
        let mut buf: Vec<u8> = Vec::new();
        write_row(&mut buf, cells).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_cells_unquoted() {
        assert_eq!(row_string(&["ا", "كلمة", "", "Algerian"]), "ا,كلمة,,Algerian\n");
    }

    #[test]
    fn special_cells_quoted_and_escaped() {
        assert_eq!(row_string(&["a,b", "say \"hi\"", "line\nbreak"]),
                   "\"a,b\",\"say \"\"hi\"\"\",\"line\nbreak\"\n");
    }
}
