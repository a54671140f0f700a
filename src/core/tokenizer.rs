/// Splits a command line into its argument vector.
///
/// The space character is the only delimiter; runs of spaces produce no
/// empty tokens, and tabs are ordinary argument bytes. A line made up
/// entirely of spaces yields an empty vector.
pub fn split_line(line: &str) -> Vec<String> {
    line.split(' ')
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line() {
        assert!(split_line("").is_empty());
    }

    #[test]
    fn test_spaces_only() {
        assert!(split_line("     ").is_empty());
    }

    #[test]
    fn test_basic_split() {
        assert_eq!(split_line("ls -l /tmp"), vec!["ls", "-l", "/tmp"]);
    }

    #[test]
    fn test_repeated_spaces_collapse() {
        assert_eq!(split_line("  echo   hello  "), vec!["echo", "hello"]);
    }

    #[test]
    fn test_tab_is_not_a_delimiter() {
        assert_eq!(split_line("echo a\tb"), vec!["echo", "a\tb"]);
    }

    #[test]
    fn test_rejoin_normalizes_spacing() {
        let line = "  cc  -o   out main.c ";
        assert_eq!(split_line(line).join(" "), "cc -o out main.c");
    }

    #[test]
    fn test_rejoin_is_stable_on_normalized_input() {
        let line = "grep -r pattern .";
        let tokens = split_line(line);
        assert_eq!(tokens.join(" "), line);
        assert_eq!(split_line(&tokens.join(" ")), tokens);
    }
}
