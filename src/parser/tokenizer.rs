//! Command line tokenizer
//!
//! Splits a raw input line into arguments. Double quotes group words into a
//! single argument and are removed from the output.

/// Split a command-line-style string into arguments
///
/// - Arguments are separated by whitespace
/// - Text between double quotes is kept together, without the quotes
/// - An unterminated quote runs to the end of the input
/// - Empty arguments are never produced
///
/// ```
/// use expense_tracker::parser::split_command_line;
///
/// let args = split_command_line(r#"add --description "Lunch with coworkers" --amount 20"#);
/// assert_eq!(args, ["add", "--description", "Lunch with coworkers", "--amount", "20"]);
/// ```
pub fn split_command_line(input: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in input.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c.is_whitespace() && !in_quotes {
            if !current.is_empty() {
                args.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() {
        args.push(current);
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_argument() {
        let args = split_command_line(r#"add --description "Lunch with coworkers" --amount 20"#);
        assert_eq!(
            args,
            vec!["add", "--description", "Lunch with coworkers", "--amount", "20"]
        );
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(split_command_line("  add   list "), vec!["add", "list"]);
        assert_eq!(split_command_line("add\t\tlist"), vec!["add", "list"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(split_command_line("").is_empty());
        assert!(split_command_line("    ").is_empty());
    }

    #[test]
    fn test_empty_quotes_produce_nothing() {
        assert_eq!(split_command_line(r#"add "" list"#), vec!["add", "list"]);
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        let args = split_command_line(r#"add --description "Coffee and  cake"#);
        assert_eq!(args, vec!["add", "--description", "Coffee and  cake"]);
    }

    #[test]
    fn test_quotes_inside_word() {
        let args = split_command_line(r#"pre"fix suf"fix next"#);
        assert_eq!(args, vec!["prefix suffix", "next"]);
    }

    #[test]
    fn test_preserves_case() {
        let args = split_command_line(r#"ADD --description "Team Lunch""#);
        assert_eq!(args, vec!["ADD", "--description", "Team Lunch"]);
    }
}
