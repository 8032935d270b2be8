//! Line-oriented prompt and print over any async reader/writer.
//!
//! The binary wraps stdin/stdout; tests use byte slices and a `Vec<u8>`.

use std::fmt;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::CliResult;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes `text` without a newline and reads one line of input.
    ///
    /// Returns `None` at end of input. The line terminator is stripped.
    pub async fn prompt(&mut self, text: &str) -> CliResult<Option<String>> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Writes `text` followed by a newline.
    pub async fn say(&mut self, text: impl fmt::Display) -> CliResult<()> {
        let line = format!("{text}\n");
        self.output.write_all(line.as_bytes()).await?;
        Ok(())
    }

    pub async fn flush(&mut self) -> CliResult<()> {
        self.output.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_prompt_strips_line_endings() {
        let mut output = Vec::new();
        let mut console = Console::new("first\r\nsecond\n".as_bytes(), &mut output);

        assert_eq!(console.prompt("> ").await.unwrap().as_deref(), Some("first"));
        assert_eq!(console.prompt("> ").await.unwrap().as_deref(), Some("second"));
        assert_eq!(console.prompt("> ").await.unwrap(), None);
        console.say("bye").await.unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "> > > bye\n");
    }

    #[tokio::test]
    async fn test_last_line_without_newline() {
        let mut output = Vec::new();
        let mut console = Console::new("done".as_bytes(), &mut output);

        assert_eq!(console.prompt("").await.unwrap().as_deref(), Some("done"));
    }
}
