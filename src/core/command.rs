//! Command parser for the : command line

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Tab selection
    User,
    Admin,
    Reports,

    // Calendar
    Goto(Option<String>),
    Today,

    // Stub actions
    Export(Option<String>),
    Add,

    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.to_lowercase().as_str() {
        "user" | "u" => Command::User,
        "admin" | "a" => Command::Admin,
        "reports" | "report" | "r" => Command::Reports,

        "goto" | "go" | "date" | "d" => Command::Goto(args),
        "today" | "t" => Command::Today,

        "export" | "exp" | "e" => Command::Export(args),
        "add" | "submit" => Command::Add,

        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}

/// Short usage hint for the command being typed
pub fn command_hint(input: &str) -> Option<&'static str> {
    let cmd = input.trim().split_whitespace().next()?;
    match cmd.to_lowercase().as_str() {
        "goto" | "go" | "date" | "d" => Some("goto <YYYY-MM-DD>"),
        "export" | "exp" | "e" => Some("export <csv|pdf>"),
        "add" | "submit" => Some("submit the company draft"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tab_commands() {
        assert_eq!(parse_command("user"), Command::User);
        assert_eq!(parse_command("a"), Command::Admin);
        assert_eq!(parse_command("Reports"), Command::Reports);
        assert_eq!(parse_command("  r  "), Command::Reports);
    }

    #[test]
    fn test_parse_calendar_commands() {
        assert_eq!(
            parse_command("goto 2025-01-10"),
            Command::Goto(Some("2025-01-10".to_string()))
        );
        assert_eq!(
            parse_command("date   2025-01-05 "),
            Command::Goto(Some("2025-01-05".to_string()))
        );
        assert_eq!(parse_command("goto"), Command::Goto(None));
        assert_eq!(parse_command("today"), Command::Today);
    }

    #[test]
    fn test_parse_stub_commands() {
        assert_eq!(
            parse_command("export csv"),
            Command::Export(Some("csv".to_string()))
        );
        assert_eq!(parse_command("export"), Command::Export(None));
        assert_eq!(parse_command("add"), Command::Add);
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("help"), Command::Help);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse_command("notacommand"),
            Command::Unknown("notacommand".to_string())
        );
        assert_eq!(parse_command(""), Command::Unknown(String::new()));
    }

    #[test]
    fn test_command_hint() {
        assert_eq!(command_hint("export "), Some("export <csv|pdf>"));
        assert_eq!(command_hint("goto 2025"), Some("goto <YYYY-MM-DD>"));
        assert_eq!(command_hint("user"), None);
        assert_eq!(command_hint(""), None);
    }
}
