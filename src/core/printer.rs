use crate::utils::error;
use std::fmt::{self, Display, Write as _};
use std::io::{self, Write};

/// Writes every element of `sequence` to `out`, with `delimiter` strictly
/// between consecutive elements, then a single `\n`.
///
/// An empty sequence produces only the line terminator. A failing `Display`
/// impl surfaces as an [`io::ErrorKind::Other`] error; elements written before
/// it stay written.
pub fn write_joined<W, I>(out: &mut W, sequence: I, delimiter: &str) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    let mut text = String::new();
    for (idx, elem) in sequence.into_iter().enumerate() {
        if idx != 0 {
            out.write_all(delimiter.as_bytes())?;
        }
        text.clear();
        write!(text, "{}", elem).map_err(io::Error::other)?;
        out.write_all(text.as_bytes())?;
    }
    out.write_all(b"\n")
}

fn sep<W, I>(w: &mut W, sequence: I, delimiter: &str) -> fmt::Result
where
    W: fmt::Write,
    I: IntoIterator,
    I::Item: Display,
{
    for (idx, elem) in sequence.into_iter().enumerate() {
        if idx != 0 {
            w.write_str(delimiter)?;
        }
        write!(w, "{}", elem)?;
    }
    Ok(())
}

/// Renders the joined line without the trailing newline.
///
/// Fails only when an element's `Display` impl returns an error.
pub fn join_to_string<I>(sequence: I, delimiter: &str) -> Result<String, fmt::Error>
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut buf = String::new();
    sep(&mut buf, sequence, delimiter)?;
    Ok(buf)
}

/// Prints `sequence` joined by `delimiter` to standard output.
pub fn print<I>(sequence: I, delimiter: &str) -> error::Result<()>
where
    I: IntoIterator,
    I::Item: Display,
{
    Printer::stdout().print(sequence, delimiter)
}

/// A delimiter-joining line printer bound to one output sink.
#[derive(Debug)]
pub struct Printer<W: Write> {
    out: W,
}

impl Printer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn print<I>(&mut self, sequence: I, delimiter: &str) -> error::Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        write_joined(&mut self.out, sequence, delimiter)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
