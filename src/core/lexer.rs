use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    UnterminatedQuote(char),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnterminatedQuote(quote) => {
                write!(f, "unterminated {} quote", quote)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Splits an input line into tokens, treating quoted substrings as
/// single tokens with the quotes stripped. Single quotes preserve their
/// contents literally; double quotes and bare text honor backslash
/// escapes.
pub fn tokenize(input: &str) -> Result<Vec<String>, LexError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        tokens.push(read_token(&mut chars)?);
    }

    Ok(tokens)
}

fn read_token(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> Result<String, LexError> {
    let mut token = String::new();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => break,
            '\'' | '"' => {
                chars.next();
                read_quoted(chars, c, &mut token)?;
            }
            '\\' => {
                chars.next();
                if let Some(escaped) = chars.next() {
                    token.push(escaped);
                }
            }
            _ => {
                token.push(c);
                chars.next();
            }
        }
    }

    Ok(token)
}

fn read_quoted(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    quote: char,
    token: &mut String,
) -> Result<(), LexError> {
    while let Some(c) = chars.next() {
        match c {
            c if c == quote => return Ok(()),
            // Single quotes are fully literal; escapes apply only
            // inside double quotes.
            '\\' if quote == '"' => match chars.next() {
                Some(escaped) => token.push(escaped),
                None => return Err(LexError::UnterminatedQuote(quote)),
            },
            _ => token.push(c),
        }
    }

    Err(LexError::UnterminatedQuote(quote))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_whitespace() {
        let tokens = tokenize("add server user mail pass").unwrap();
        assert_eq!(tokens, vec!["add", "server", "user", "mail", "pass"]);
    }

    #[test]
    fn test_double_quotes_keep_spaces() {
        let tokens = tokenize("mkdir \"my project\"").unwrap();
        assert_eq!(tokens, vec!["mkdir", "my project"]);
    }

    #[test]
    fn test_single_quotes_are_literal() {
        let tokens = tokenize("touch 'a \\n b'").unwrap();
        assert_eq!(tokens, vec!["touch", "a \\n b"]);
    }

    #[test]
    fn test_escaped_space_outside_quotes() {
        let tokens = tokenize("rm some\\ file").unwrap();
        assert_eq!(tokens, vec!["rm", "some file"]);
    }

    #[test]
    fn test_escape_inside_double_quotes() {
        let tokens = tokenize("touch \"say \\\"hi\\\"\"").unwrap();
        assert_eq!(tokens, vec!["touch", "say \"hi\""]);
    }

    #[test]
    fn test_adjacent_quoted_and_bare_text() {
        let tokens = tokenize("touch pre\"fix mid\"post").unwrap();
        assert_eq!(tokens, vec!["touch", "prefix midpost"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   \t  ").unwrap().is_empty());
    }

    #[test]
    fn test_unterminated_double_quote() {
        assert_eq!(
            tokenize("add \"oops"),
            Err(LexError::UnterminatedQuote('"'))
        );
    }

    #[test]
    fn test_unterminated_single_quote() {
        assert_eq!(tokenize("rm 'oops"), Err(LexError::UnterminatedQuote('\'')));
    }

    #[test]
    fn test_empty_quoted_token() {
        let tokens = tokenize("greet \"\"").unwrap();
        assert_eq!(tokens, vec!["greet", ""]);
    }
}
