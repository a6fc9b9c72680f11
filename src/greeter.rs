// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use tracing::{debug, info};
use tracing_subscriber::fmt::MakeWriter;

use crate::log;

/// The greeting, without its line terminator.
pub const GREETING: &str = "Hello, World!";

/// Writes [GREETING] as a single line to the active log sink.
pub fn greet() {
    info!("{GREETING}");
    debug!("greeting emitted");
}

/// Runs [greet] with `sink` as the log sink. The previously active sink is
/// restored on return.
pub fn greet_with<W>(sink: W)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing::subscriber::with_default(log::subscriber(sink), greet);
}

/// Whether `output` ends with the greeting line, newline included.
pub fn is_greeting(output: &str) -> bool {
    output
        .strip_suffix('\n')
        .is_some_and(|line| line.ends_with(GREETING))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::log::CaptureBuffer;

    fn captured_greeting() -> String {
        let buffer = CaptureBuffer::new();
        greet_with(buffer.clone());
        buffer.contents()
    }

    #[test]
    fn test_greet() {
        let output = captured_greeting();
        assert!(output.ends_with("Hello, World!\n"), "{output:?}");
        assert!(is_greeting(&output));
        assert_eq!(1, output.lines().count());
    }

    #[test]
    fn test_is_greeting_rejects_variants() {
        assert!(is_greeting("Hello, World!\n"));
        assert!(is_greeting("2025/05/15 16:09:38 Hello, World!\n"));

        assert!(!is_greeting("Hello, World!"));
        assert!(!is_greeting("Hello, World\n"));
        assert!(!is_greeting("Hello, world!\n"));
        assert!(!is_greeting("hello, world!\n"));
        assert!(!is_greeting("Hello World!\n"));
        assert!(!is_greeting("Hello, World!\n\n"));
        assert!(!is_greeting("Hello, World! \n"));
        assert!(!is_greeting(""));
    }

    #[test]
    fn test_greet_repeatedly() {
        let buffer = CaptureBuffer::new();
        greet_with(buffer.clone());
        greet_with(buffer.clone());
        greet_with(buffer.clone());

        let output = buffer.contents();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(3, lines.len());
        for line in lines {
            assert!(line.ends_with(GREETING), "{line:?}");
        }
        assert!(is_greeting(&output));
    }
}
