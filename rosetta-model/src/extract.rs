//! Model extraction: raw text -> [`ModelDefinition`].

use crate::{
    FieldDescriptor, LineError, ModelDefinition, ModelError, Result, SourceContext, TypeRef,
    scan::{Kind, Token, matching_paren, scan, split_top_level},
};

/// Extract a model definition from raw text (uses "<input>" as the source name).
pub fn extract_model(raw: &str) -> Result<ModelDefinition> {
    extract_model_with_filename(raw, "<input>")
}

/// Extract a model definition, naming the source `filename` in diagnostics.
///
/// Fails with [`Error::MalformedModel`](crate::Error::MalformedModel) unless
/// the text splits into exactly two brace-delimited segments whose first one
/// is a class name identifier, and with
/// [`Error::MalformedField`](crate::Error::MalformedField) on the first body
/// line that is not a valid field. A blank body yields a model without
/// fields. No partial model is returned.
pub fn extract_model_with_filename(raw: &str, filename: &str) -> Result<ModelDefinition> {
    let ctx = SourceContext::new(raw, filename);

    let segments = brace_segments(raw);
    let [(header_start, header_end), (body_start, body_end)] = segments[..] else {
        return Err(ctx.malformed_model(None, ModelError::SegmentCount(segments.len())));
    };

    let header = &raw[header_start..header_end];
    let class_name = header.trim();
    if !is_identifier(class_name) {
        let start = header_start + (header.len() - header.trim_start().len());
        return Err(ctx.malformed_model(
            Some((start, class_name.len()).into()),
            ModelError::InvalidClassName(class_name.to_string()),
        ));
    }
    let class_name = class_name.to_string();

    let mut fields = Vec::new();
    for (offset, line) in lines_with_offsets(&raw[body_start..body_end]) {
        let stripped = strip_whitespace(line);
        if stripped.is_empty() {
            continue;
        }

        match parse_field_line(&stripped) {
            Ok(field) => fields.push(field),
            Err(reason) => {
                let trimmed = line.trim();
                let start = body_start + offset + (line.len() - line.trim_start().len());
                return Err(ctx.malformed_field(trimmed, (start, trimmed.len()), reason));
            }
        }
    }

    Ok(ModelDefinition { class_name, fields })
}

/// Parse one field line such as `name(type)`, `name(type,['a','b'])` or
/// `status(string,optional):desc=['a','b']`.
///
/// Whitespace anywhere in the line is ignored.
pub fn parse_field_line(line: &str) -> std::result::Result<FieldDescriptor, LineError> {
    let line = strip_whitespace(line);
    let tokens = scan(&line);

    let open = tokens
        .iter()
        .position(|t| t.kind == Kind::LParen)
        .ok_or(LineError::MissingOpenParen)?;
    let close = matching_paren(&tokens, open).ok_or(LineError::UnclosedParen)?;

    let name = &line[..tokens[open].start];
    if name.is_empty() {
        return Err(LineError::EmptyName);
    }

    let params: Vec<&str> = split_top_level(&tokens[open + 1..close])
        .into_iter()
        .map(|(start, end)| &line[start..end])
        .collect();

    let declared_type = params.first().copied().ok_or(LineError::EmptyType)?;
    let ty = TypeRef::parse(declared_type)
        .ok_or_else(|| LineError::InvalidType(declared_type.to_string()))?;

    // Values may sit inside the parentheses, after the type, or anywhere
    // after the closing parenthesis (Swagger's `= ['a', 'b']`).
    let enum_values = params[1..]
        .iter()
        .find_map(|param| bracketed(param))
        .or_else(|| trailing_list(&line, &tokens[close + 1..]))
        .map(split_values)
        .filter(|values| !values.is_empty());

    Ok(FieldDescriptor {
        name: name.to_string(),
        declared_type: declared_type.to_string(),
        ty,
        enum_values,
    })
}

/// Byte ranges of the non-empty segments between `{` and `}`.
///
/// Whitespace-only segments after the body are dropped too, so a trailing
/// newline after `}` does not count as a segment.
fn brace_segments(raw: &str) -> Vec<(usize, usize)> {
    let mut segments = Vec::new();
    let mut start = 0;

    for (i, c) in raw.char_indices() {
        if matches!(c, '{' | '}') {
            segments.push((start, i));
            start = i + 1;
        }
    }
    segments.push((start, raw.len()));

    segments
        .into_iter()
        .filter(|&(start, end)| start < end)
        .enumerate()
        .filter(|&(index, (start, end))| index < 2 || !raw[start..end].trim().is_empty())
        .map(|(_, segment)| segment)
        .collect()
}

/// `Pet`, `_Pet2`: a letter or underscore followed by letters, digits or
/// underscores.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Lines of `text` with their byte offset inside `text`.
fn lines_with_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split('\n').scan(0, |offset, line| {
        let start = *offset;
        *offset += line.len() + 1;
        Some((start, line))
    })
}

fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Contents of a `[...]` parameter.
fn bracketed(param: &str) -> Option<&str> {
    param.strip_prefix('[')?.strip_suffix(']')
}

/// Contents of the first `[...]` list among `tokens`.
fn trailing_list<'a>(line: &'a str, tokens: &[Token]) -> Option<&'a str> {
    let open = tokens.iter().position(|t| t.kind == Kind::LBracket)?;
    let close = tokens[open..]
        .iter()
        .position(|t| t.kind == Kind::RBracket)?
        + open;
    Some(&line[tokens[open].end..tokens[close].start])
}

fn split_values(list: &str) -> Vec<String> {
    list.split(',')
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}
