use std::io::IsTerminal;

use clap::Args;
use lifo::Stack;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::*;

/// Largest capacity hint the CLI accepts.
const MAX_CAPACITY: usize = 1 << 20;

#[derive(Args, Debug)]
pub struct ReverseArgs {
    /// Initial capacity of the stack. Must be a power of two.
    #[arg(short, long, default_value_t = lifo::DEFAULT_CAPACITY, value_parser = parse_capacity)]
    capacity: usize,
    /// Text to reverse. Read from stdin when omitted.
    #[arg(name = "TEXT")]
    text: Vec<String>,
}

pub async fn execute_reverse(args: ReverseArgs) -> anyhow::Result<()> {
    let stdin = if std::io::stdin().is_terminal() {
        None
    } else {
        Some(tokio::io::stdin())
    };
    let text = resolve_input(&args.text, stdin).await?;
    info!("Reversing {} chars", text.chars().count());

    let reversed = {
        let start = Instant::now();
        let res = reverse_text(&text, args.capacity);
        let end = Instant::now();
        debug!("Reversal took {} us", (end - start).as_micros());
        res
    };

    println!("{}", reversed);
    Ok(())
}

/// Joins the positional words, falling back to `reader` when there are none.
async fn resolve_input<R>(words: &[String], reader: Option<R>) -> anyhow::Result<String>
where
    R: AsyncRead + Unpin,
{
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let Some(mut reader) = reader else {
        anyhow::bail!("no input text given");
    };

    let mut buf = Vec::with_capacity(256);
    reader.read_to_end(&mut buf).await?;
    let mut text = String::from_utf8_lossy(&buf).to_string();
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

/// Pushes every char of `text` onto a stack and pops them back off.
pub fn reverse_text(text: &str, capacity: usize) -> String {
    let mut stack = Stack::with_capacity(capacity);
    for c in text.chars() {
        stack.push(c);
    }

    let mut reversed = String::with_capacity(text.len());
    while let Ok(c) = stack.pop() {
        reversed.push(c);
    }
    reversed
}

fn parse_capacity(s: &str) -> Result<usize, String> {
    let capacity: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;
    if !capacity.is_power_of_two() {
        return Err(format!("{} is not a power of two", capacity));
    }
    if capacity > MAX_CAPACITY {
        return Err(format!("{} exceeds the maximum of {}", capacity, MAX_CAPACITY));
    }
    Ok(capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_hello_world() {
        assert_eq!(reverse_text("Hello, World!", 8), "!dlroW ,olleH");
    }

    #[test]
    fn test_reverse_empty_and_multibyte() {
        assert_eq!(reverse_text("", 1), "");
        assert_eq!(reverse_text("añb→", 2), "→bña");
    }

    #[test]
    fn test_parse_capacity() {
        assert_eq!(parse_capacity("1"), Ok(1));
        assert_eq!(parse_capacity("16"), Ok(16));
        assert!(parse_capacity("7").is_err());
        assert!(parse_capacity("0").is_err());
        assert!(parse_capacity("eight").is_err());
        assert_eq!(parse_capacity("1048576"), Ok(MAX_CAPACITY));
        assert!(parse_capacity("2097152").is_err());
        assert!(parse_capacity("9223372036854775808").is_err());
    }

    #[tokio::test]
    async fn test_words_take_precedence_over_reader() {
        let words = vec!["Hello,".to_string(), "World!".to_string()];
        let text = resolve_input(&words, Some(&b"ignored"[..])).await.unwrap();
        assert_eq!(text, "Hello, World!");
    }

    #[tokio::test]
    async fn test_reader_strips_trailing_newline() {
        let _ = tracing_subscriber::fmt::try_init();
        let text = resolve_input(&[], Some(&b"abc\n"[..])).await.unwrap();
        assert_eq!(text, "abc");
        let text = resolve_input(&[], Some(&b"line\r\n"[..])).await.unwrap();
        assert_eq!(text, "line");
    }

    #[tokio::test]
    async fn test_missing_input_is_an_error() {
        let err = resolve_input::<&[u8]>(&[], None).await.unwrap_err();
        assert_eq!(err.to_string(), "no input text given");
    }
}
