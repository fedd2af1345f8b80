use std::io::{self, BufRead, Write};

/// Line-input collaborator for the human player. Production reads stdin;
/// tests supply canned lines.
pub trait TextInput {
    /// Shows `prompt` and returns one raw line, without the trailing newline.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

pub struct StdinInput;

impl TextInput for StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }
}
