//! Shell-glob matching of base names.
//!
//! `*` matches any run of characters, `?` a single character and `[...]` a
//! character class. Only the unqualified name is matched, never the path.
//! Unless the run is case sensitive, pattern and name are both folded to
//! lower case before matching.
//!
//! Patterns are read in the shell dialect: `[^...]` negates like `[!...]`,
//! `**` is just `*` and a backslash escapes the next character.

use glob::Pattern;

use crate::config::Config;
use crate::error::PatternError;

#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: Pattern,
    case_sensitive: bool,
    directory: bool,
}

impl Matcher {
    pub fn new(pattern: &str, config: &Config) -> Result<Self, PatternError> {
        let folded = if config.case_sensitive {
            pattern.to_string()
        } else {
            pattern.to_lowercase()
        };
        let compiled = normalize(&folded)
            .and_then(|glob| Pattern::new(&glob))
            .map_err(|e| PatternError::invalid(pattern, e))?;
        Ok(Self {
            pattern: compiled,
            case_sensitive: config.case_sensitive,
            directory: config.directory,
        })
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn is_match(&self, name: &str, is_dir: bool) -> bool {
        if is_dir && !self.directory {
            return false;
        }
        if self.case_sensitive {
            self.pattern.matches(name)
        } else {
            self.pattern.matches(&name.to_lowercase())
        }
    }
}

/// Rewrite a shell glob into the syntax `glob::Pattern` reads.
fn normalize(pattern: &str) -> Result<String, glob::PatternError> {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.char_indices().peekable();
    let mut in_class = false;

    while let Some((pos, c)) = chars.next() {
        match c {
            '\\' => {
                let Some((_, escaped)) = chars.next() else {
                    return Err(glob::PatternError {
                        pos,
                        msg: "trailing backslash escapes nothing",
                    });
                };
                if in_class {
                    out.push(escaped);
                } else {
                    push_literal(&mut out, escaped);
                }
            }
            '[' if !in_class => {
                in_class = true;
                out.push('[');
                if chars.next_if(|&(_, next)| next == '^' || next == '!').is_some() {
                    out.push('!');
                }
                // a `]` straight after the opening bracket is a member
                if chars.next_if(|&(_, next)| next == ']').is_some() {
                    out.push(']');
                }
            }
            ']' if in_class => {
                in_class = false;
                out.push(']');
            }
            '*' if !in_class => {
                while chars.next_if(|&(_, next)| next == '*').is_some() {}
                out.push('*');
            }
            _ => out.push(c),
        }
    }
    Ok(out)
}

fn push_literal(out: &mut String, c: char) {
    match c {
        '*' | '?' | '[' | ']' => {
            out.push('[');
            out.push(c);
            out.push(']');
        }
        _ => out.push(c),
    }
}

/// One-off match of `name` against `pattern` under the policy in `config`.
pub fn matches(
    config: &Config,
    pattern: &str,
    name: &str,
    is_dir: bool,
) -> Result<bool, PatternError> {
    if is_dir && !config.directory {
        return Ok(false);
    }
    Ok(Matcher::new(pattern, config)?.is_match(name, is_dir))
}
