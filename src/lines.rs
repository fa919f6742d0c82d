use std::io::BufRead;

/// Reads one line, without its line break. `None` means the stream is closed.
pub fn read_next_line<R: BufRead>(reader: &mut R) -> std::io::Result<Option<String>> {
    let mut buf = String::new();
    let bytes_read = reader.read_line(&mut buf)?;

    if bytes_read == 0 {
        return Ok(None);
    }

    trim_line_break(&mut buf);
    Ok(Some(buf))
}

pub fn trim_line_break(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    } else if line.ends_with('\r') {
        line.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn strips_unix_and_windows_line_breaks() {
        let mut input = Cursor::new("admin\nroot\r\nlast");
        assert_eq!(read_next_line(&mut input).unwrap().as_deref(), Some("admin"));
        assert_eq!(read_next_line(&mut input).unwrap().as_deref(), Some("root"));
        assert_eq!(read_next_line(&mut input).unwrap().as_deref(), Some("last"));
        assert_eq!(read_next_line(&mut input).unwrap(), None);
    }

    #[test]
    fn blank_line_is_not_end_of_stream() {
        let mut input = Cursor::new("\n");
        assert_eq!(read_next_line(&mut input).unwrap().as_deref(), Some(""));
        assert_eq!(read_next_line(&mut input).unwrap(), None);
    }
}
