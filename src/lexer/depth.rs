use super::mode::Mode;

/// Net nesting delta `line` contributes to a region of `mode`.
///
/// Embedded code counts every unescaped, unquoted brace on the line. The
/// other modes close only on an explicit leading-closing-brace line and
/// never track interior braces.
pub fn line_delta(mode: Mode, line: &str) -> i32 {
  match mode {
    Mode::EmbeddedCode => code_delta(line),
    Mode::Markup | Mode::PartialMarkup | Mode::DeclarationPreamble | Mode::Documentation => {
      leading_close_delta(line)
    }
  }
}

/// Brace count for one line of embedded code. A backslash escapes exactly
/// the following character; double quotes toggle the in-string flag unless
/// themselves escaped; braces inside strings or behind escapes are inert.
pub fn code_delta(line: &str) -> i32 {
  let mut delta = 0;
  let mut in_string = false;
  let mut escaped = false;
  for c in line.chars() {
    if escaped {
      escaped = false;
      continue;
    }
    match c {
      '\\' => escaped = true,
      '"' => in_string = !in_string,
      '{' if !in_string => delta += 1,
      '}' if !in_string => delta -= 1,
      _ => {}
    }
  }
  delta
}

fn leading_close_delta(line: &str) -> i32 {
  if line.trim_start().starts_with('}') {
    -1
  } else {
    0
  }
}
