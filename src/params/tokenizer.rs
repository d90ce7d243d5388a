//! Command-line tokenizer.
//!
//! Splits a raw command line the way the platform C runtime does, without a
//! shell: whitespace separates tokens, double quotes group, and backslashes
//! only escape when they run up against a quote.
//!
//! | input       | backslashes emitted | quote              |
//! |-------------|---------------------|--------------------|
//! | `2n` + `"`  | `n`                 | toggles quoting    |
//! | `2n+1` + `"`| `n`                 | literal `"`        |
//! | `n` + other | `n`                 | n/a                |
//!
//! Inside a quoted region, `""` is a literal quote and quoting continues.
//! Malformed input never fails: an unterminated quote simply ends with the
//! input.

use std::borrow::Cow;
use std::iter::Peekable;
use std::str::Chars;

use super::ParamList;

const QUOTE: char = '"';
const BACKSLASH: char = '\\';

const fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Tokenizes `cmdline` into a new parameter list.
#[must_use]
pub fn tokenize(cmdline: &str) -> ParamList {
    let mut params = ParamList::new();
    tokenize_into(cmdline, &mut params);
    params
}

/// Tokenizes `cmdline`, appending every token to `params`.
pub fn tokenize_into(cmdline: &str, params: &mut ParamList) {
    let mut chars = cmdline.chars().peekable();

    loop {
        while chars.next_if(|&c| is_separator(c)).is_some() {}
        if chars.peek().is_none() {
            break;
        }
        params.push(read_token(&mut chars));
    }
}

fn read_token(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut token = String::new();
    let mut quoted = false;

    while let Some(&c) = chars.peek() {
        if !quoted && is_separator(c) {
            break;
        }

        let mut slashes = 0;
        while chars.next_if_eq(&BACKSLASH).is_some() {
            slashes += 1;
        }

        if chars.next_if_eq(&QUOTE).is_some() {
            push_backslashes(&mut token, slashes / 2);
            if slashes % 2 == 1 {
                token.push(QUOTE);
            } else if quoted && chars.next_if_eq(&QUOTE).is_some() {
                token.push(QUOTE);
            } else {
                quoted = !quoted;
            }
        } else if slashes > 0 {
            push_backslashes(&mut token, slashes);
        } else {
            token.push(c);
            chars.next();
        }
    }

    token
}

fn push_backslashes(token: &mut String, count: usize) {
    token.extend(std::iter::repeat_n(BACKSLASH, count));
}

/// Escapes a single argument so that [`tokenize`] reads it back unchanged.
///
/// Arguments without whitespace or quotes, and not empty, are returned as is.
#[must_use]
pub fn quote_arg(arg: &str) -> Cow<'_, str> {
    let needs_quotes = arg.is_empty() || arg.chars().any(|c| is_separator(c) || c == QUOTE);
    if !needs_quotes {
        return Cow::Borrowed(arg);
    }

    let mut out = String::with_capacity(arg.len() + 2);
    out.push(QUOTE);

    let mut slashes = 0;
    for c in arg.chars() {
        match c {
            BACKSLASH => slashes += 1,
            QUOTE => {
                push_backslashes(&mut out, slashes * 2 + 1);
                out.push(QUOTE);
                slashes = 0;
            }
            _ => {
                push_backslashes(&mut out, slashes);
                out.push(c);
                slashes = 0;
            }
        }
    }
    // Trailing backslashes sit in front of the closing quote.
    push_backslashes(&mut out, slashes * 2);
    out.push(QUOTE);

    Cow::Owned(out)
}

/// Joins arguments into a single command line, escaping as needed.
#[must_use]
pub fn join_args<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|arg| quote_arg(arg.as_ref()).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
