//

use std::io::{BufRead, BufReader, Error, ErrorKind, Read};

/// wrap a Read impl to produce text lines over utf8-encoded bytes. a line ends at
/// `\n`, `\r\n` or a lone `\r`.
pub struct LineReader<'read> {
    reader: BufReader<Box<dyn Read + 'read>>,
    line_no: usize,
    // last line ended with `\r`, so a leading `\n` belongs to it
    after_cr: bool,
}

impl<'read> LineReader<'read> {
    pub fn new(reader: Box<dyn Read + 'read>) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_no: 0,
            after_cr: false,
        }
    }

    /// number of lines consumed so far
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// advances a reader to consume the next line, if available. the line terminator
    /// is removed; all other whitespace is left in place.
    pub fn read(&mut self) -> Result<Option<String>, Error> {
        let mut bytes = Vec::new();
        let mut terminated = false;
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            if self.after_cr {
                self.after_cr = false;
                if buf[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }
            match buf.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    self.after_cr = buf[end] == b'\r';
                    bytes.extend_from_slice(&buf[..end]);
                    self.reader.consume(end + 1);
                    terminated = true;
                    break;
                }
                None => {
                    let n = buf.len();
                    bytes.extend_from_slice(buf);
                    self.reader.consume(n);
                }
            }
        }
        if !terminated && bytes.is_empty() {
            return Ok(None);
        }
        let line = String::from_utf8(bytes).map_err(|err| Error::new(ErrorKind::InvalidData, err))?;
        self.line_no += 1;
        Ok(Some(line))
    }
}
