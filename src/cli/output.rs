//! Fixed texts printed by the interactive session.

use std::io::{self, Write};

/// Greeting printed once when the session starts.
pub const BANNER: &str = "👋 Добро пожаловать в GitHub приветственную программу!";

/// Hint listing the exit commands.
pub const EXIT_HINT: &str = "Введите 'exit', 'quit' или 'выход' для выхода из программы";

/// Prompt shown before each username is read.
pub const PROMPT: &str = "🎯 Введите имя пользователя GitHub: ";

/// Printed when the user leaves with an exit command.
pub const FAREWELL: &str = "👋 До свидания!";

/// Printed for a blank line.
pub const EMPTY_INPUT_NOTICE: &str = "❌ Имя пользователя не может быть пустым!";

/// Printed when the input is not a valid GitHub login.
pub const INVALID_FORMAT_NOTICE: &str = "❌ Неверный формат имени пользователя GitHub!";

/// Printed when a user already greeted in this session is entered again.
pub const DUPLICATE_NOTICE: &str = "⚠️ Этот пользователь уже был обработан ранее.";

const RULE_WIDTH: usize = 60;

/// Writes the session banner framed by horizontal rules.
///
/// # Errors
///
/// Propagates any error from the writer.
pub fn write_banner<W: Write>(writer: &mut W) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(writer, "{BANNER}")?;
    writeln!(writer, "{rule}")?;
    writeln!(writer, "{EXIT_HINT}")?;
    writeln!(writer, "{rule}")
}
