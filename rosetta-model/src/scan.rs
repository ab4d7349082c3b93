//! Tokenizer for a single (whitespace-stripped) field line.

/// Structural token kinds of a field line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    /// A maximal run of non-structural characters.
    Text,
}

/// A token and the byte range it covers in the scanned line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: Kind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start..self.end]
    }
}

pub(crate) fn scan(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut text_start: Option<usize> = None;

    for (i, c) in line.char_indices() {
        let kind = match c {
            '(' => Kind::LParen,
            ')' => Kind::RParen,
            '[' => Kind::LBracket,
            ']' => Kind::RBracket,
            ',' => Kind::Comma,
            _ => {
                text_start.get_or_insert(i);
                continue;
            }
        };

        if let Some(start) = text_start.take() {
            tokens.push(Token {
                kind: Kind::Text,
                start,
                end: i,
            });
        }
        tokens.push(Token {
            kind,
            start: i,
            end: i + 1,
        });
    }

    if let Some(start) = text_start {
        tokens.push(Token {
            kind: Kind::Text,
            start,
            end: line.len(),
        });
    }

    tokens
}

/// Index of the `)` closing the `(` at `open`.
pub(crate) fn matching_paren(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        match token.kind {
            Kind::LParen => depth += 1,
            Kind::RParen => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split `tokens` on commas that are not nested inside brackets or parens.
///
/// Each part is returned as the byte range it spans in the line; empty parts
/// are dropped.
pub(crate) fn split_top_level(tokens: &[Token]) -> Vec<(usize, usize)> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut current: Option<(usize, usize)> = None;

    for token in tokens {
        match token.kind {
            Kind::Comma if depth == 0 => {
                parts.extend(current.take());
                continue;
            }
            Kind::LParen | Kind::LBracket => depth += 1,
            Kind::RParen | Kind::RBracket => depth = depth.saturating_sub(1),
            _ => {}
        }

        current = Some(match current {
            Some((start, _)) => (start, token.end),
            None => (token.start, token.end),
        });
    }

    parts.extend(current);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<Kind> {
        scan(line).iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_scan_simple_field() {
        let line = "id(integer)";
        let tokens = scan(line);

        assert_eq!(
            kinds(line),
            vec![Kind::Text, Kind::LParen, Kind::Text, Kind::RParen]
        );
        assert_eq!(tokens[0].text(line), "id");
        assert_eq!(tokens[2].text(line), "integer");
    }

    #[test]
    fn test_scan_enum_field() {
        assert_eq!(
            kinds("s(string,['a'])"),
            vec![
                Kind::Text,
                Kind::LParen,
                Kind::Text,
                Kind::Comma,
                Kind::LBracket,
                Kind::Text,
                Kind::RBracket,
                Kind::RParen,
            ]
        );
    }

    #[test]
    fn test_matching_paren_skips_nested() {
        let tokens = scan("a(b(c),d)e");
        let close = matching_paren(&tokens, 1).unwrap();
        assert_eq!(tokens[close].start, 8);
    }

    #[test]
    fn test_matching_paren_unclosed() {
        let tokens = scan("a(b(c)");
        assert_eq!(matching_paren(&tokens, 1), None);
    }

    #[test]
    fn test_split_top_level_respects_brackets() {
        let line = "string,['a','b'],optional";
        let parts: Vec<&str> = split_top_level(&scan(line))
            .into_iter()
            .map(|(s, e)| &line[s..e])
            .collect();

        assert_eq!(parts, vec!["string", "['a','b']", "optional"]);
    }

    #[test]
    fn test_split_top_level_drops_empty_parts() {
        let line = ",a,,b,";
        let parts: Vec<&str> = split_top_level(&scan(line))
            .into_iter()
            .map(|(s, e)| &line[s..e])
            .collect();

        assert_eq!(parts, vec!["a", "b"]);
    }
}
