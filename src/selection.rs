//! Glob based filters deciding which discovered files belong in the manifest.

use regex::Regex;

use crate::error::{GenerateError, Result};

/// Trait describing filename filters applied while scanning the source tree.
pub trait FileInclusion {
  /// Returns `true` when a file with this name should be listed in the manifest.
  fn is_included(&self, file_name: &str) -> bool;
}

/// Include and exclude glob lists compiled into one regex each.
///
/// A name is retained when it matches no exclude pattern and at least one include pattern.
/// An empty include list therefore retains nothing.
#[derive(Debug, Clone, Default)]
pub struct FileSelection {
  include: Option<Regex>,
  exclude: Option<Regex>,
}

impl FileSelection {
  /// Compile include and exclude globs such as `*.java` or `[!_]*.glsl`.
  pub fn from_globs<I, E>(include: I, exclude: E) -> Result<Self>
  where
    I: IntoIterator,
    I::Item: AsRef<str>,
    E: IntoIterator,
    E::Item: AsRef<str>,
  {
    Ok(Self {
      include: compile_globs(include)?,
      exclude: compile_globs(exclude)?,
    })
  }

  /// Whether the name matches any exclude pattern.
  pub fn is_excluded(&self, file_name: &str) -> bool {
    self
      .exclude
      .as_ref()
      .is_some_and(|pattern| pattern.is_match(file_name))
  }

  /// Whether the name matches any include pattern, ignoring excludes.
  pub fn matches_include(&self, file_name: &str) -> bool {
    self
      .include
      .as_ref()
      .is_some_and(|pattern| pattern.is_match(file_name))
  }

  /// Determine whether a file should be listed.
  pub fn is_included(&self, file_name: &str) -> bool {
    !self.is_excluded(file_name) && self.matches_include(file_name)
  }
}

impl FileInclusion for FileSelection {
  fn is_included(&self, file_name: &str) -> bool {
    FileSelection::is_included(self, file_name)
  }
}

/// Compile a list of globs into a single anchored alternation.
///
/// Blank entries are dropped. Returns `None` when nothing is left to match.
fn compile_globs<P>(patterns: P) -> Result<Option<Regex>>
where
  P: IntoIterator,
  P::Item: AsRef<str>,
{
  let mut branches = Vec::new();
  for pattern in patterns {
    let pattern = pattern.as_ref().trim();
    if pattern.is_empty() {
      continue;
    }

    let branch = format!("(?s:{})", glob_to_regex(pattern));
    Regex::new(&format!("^{branch}$")).map_err(|source| GenerateError::Pattern {
      pattern: pattern.to_string(),
      source,
    })?;
    branches.push(branch);
  }

  if branches.is_empty() {
    return Ok(None);
  }

  let combined = format!("^(?:{})$", branches.join("|"));
  Regex::new(&combined)
    .map(Some)
    .map_err(|source| GenerateError::Pattern {
      pattern: combined,
      source,
    })
}

/// Translate shell filename syntax into an unanchored regex body.
pub(crate) fn glob_to_regex(glob: &str) -> String {
  let chars: Vec<char> = glob.chars().collect();
  let mut out = String::with_capacity(glob.len() * 2);
  let mut i = 0;

  while i < chars.len() {
    let c = chars[i];
    i += 1;
    match c {
      '*' => {
        // collapse runs of stars
        while i < chars.len() && chars[i] == '*' {
          i += 1;
        }
        out.push_str(".*");
      }
      '?' => out.push('.'),
      '[' => match class_end(&chars, i) {
        Some(end) => {
          out.push_str(&translate_class(&chars[i..end]));
          i = end + 1;
        }
        None => out.push_str(r"\["),
      },
      other => out.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
    }
  }

  out
}

/// Index of the `]` closing a class whose body starts at `start`.
///
/// A `]` directly after the opening bracket (or after `!`) is part of the class.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
  let mut j = start;
  if chars.get(j) == Some(&'!') {
    j += 1;
  }
  if chars.get(j) == Some(&']') {
    j += 1;
  }
  while j < chars.len() && chars[j] != ']' {
    j += 1;
  }
  (j < chars.len()).then_some(j)
}

fn translate_class(body: &[char]) -> String {
  let (negated, members) = match body.split_first() {
    Some(('!', rest)) => (true, rest),
    _ => (false, body),
  };

  let mut items = String::new();
  let mut i = 0;
  while i < members.len() {
    let c = members[i];
    if i + 2 < members.len() && members[i + 1] == '-' {
      let hi = members[i + 2];
      // reversed ranges match nothing
      if c <= hi {
        push_class_char(&mut items, c);
        items.push('-');
        push_class_char(&mut items, hi);
      }
      i += 3;
    } else {
      push_class_char(&mut items, c);
      i += 1;
    }
  }

  match (items.is_empty(), negated) {
    (true, true) => ".".to_string(),
    (true, false) => r"[^\s\S]".to_string(),
    (false, true) => format!("[^{items}]"),
    (false, false) => format!("[{items}]"),
  }
}

fn push_class_char(out: &mut String, c: char) {
  // escape everything the regex crate treats as class syntax
  if matches!(c, '\\' | '[' | ']' | '&' | '~' | '^' | '|' | '-') {
    out.push('\\');
  }
  out.push(c);
}
