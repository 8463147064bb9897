//! Reader for Tailwind config modules written as a plain object literal.
//!
//! Understands the subset of JavaScript that `tailwindcss init` and this tool
//! emit: an optional `module.exports =` or `export default` wrapper around an
//! object literal with quoted or bare keys, single or double quoted strings,
//! numbers, booleans, `null`, arrays, trailing commas, and comments. Anything
//! that needs evaluation (calls, spreads, identifiers) is rejected.

use serde_json::{Map, Number, Value};

/// How a config module hands its object to the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportForm {
    /// `module.exports = {...}`; also used for a bare literal.
    #[default]
    CommonJs,
    /// `export default {...}`
    EsModule,
}

impl ExportForm {
    /// Statement prefix written in front of the object literal.
    pub fn prefix(self) -> &'static str {
        match self {
            ExportForm::CommonJs => "module.exports = ",
            ExportForm::EsModule => "export default ",
        }
    }
}

/// A parsed config module.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedModule {
    pub export: ExportForm,
    pub value: Value,
}

/// Parse a config module into its export form and exported value.
pub fn parse_module(source: &str) -> Result<ParsedModule, String> {
    let mut parser = Parser::new(source);
    parser.skip_trivia()?;
    let mut export = ExportForm::CommonJs;
    if parser.eat_keyword("module") {
        parser.skip_trivia()?;
        parser.expect('.')?;
        parser.skip_trivia()?;
        if !parser.eat_keyword("exports") {
            return Err(parser.error("expected `exports`"));
        }
        parser.skip_trivia()?;
        parser.expect('=')?;
    } else if parser.eat_keyword("export") {
        parser.skip_trivia()?;
        if !parser.eat_keyword("default") {
            return Err(parser.error("expected `default`"));
        }
        export = ExportForm::EsModule;
    }
    parser.skip_trivia()?;
    let value = parser.value()?;
    parser.skip_trivia()?;
    if parser.peek() == Some(';') {
        parser.bump();
        parser.skip_trivia()?;
    }
    if parser.peek().is_some() {
        return Err(parser.error("unexpected trailing content"));
    }
    Ok(ParsedModule { export, value })
}

struct Parser<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn error(&self, message: &str) -> String {
        let line = self.source[..self.pos].matches('\n').count() + 1;
        format!("{message} at line {line}")
    }

    fn expect(&mut self, expected: char) -> Result<(), String> {
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(self.error(&format!("expected `{expected}`, found `{c}`"))),
            None => Err(self.error(&format!("expected `{expected}`, found end of input"))),
        }
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        let rest = self.rest();
        if !rest.starts_with(keyword) {
            return false;
        }
        let boundary = rest[keyword.len()..].chars().next();
        if boundary.is_some_and(is_ident_char) {
            return false;
        }
        self.pos += keyword.len();
        true
    }

    fn skip_trivia(&mut self) -> Result<(), String> {
        loop {
            let rest = self.rest();
            if let Some(c) = rest.chars().next().filter(|c| c.is_whitespace()) {
                self.pos += c.len_utf8();
            } else if rest.starts_with("//") {
                self.pos += rest.find('\n').unwrap_or(rest.len());
            } else if rest.starts_with("/*") {
                let end = rest[2..].find("*/").ok_or_else(|| self.error("unterminated comment"))?;
                self.pos += end + 4;
            } else {
                return Ok(());
            }
        }
    }

    fn value(&mut self) -> Result<Value, String> {
        match self.peek() {
            Some('{') => self.object(),
            Some('[') => self.array(),
            Some(quote @ ('"' | '\'')) => self.string(quote).map(Value::String),
            Some(c) if c == '-' || c == '+' || c == '.' || c.is_ascii_digit() => self.number(),
            Some(c) if is_ident_start(c) => {
                let ident = self.identifier();
                match ident {
                    "true" => Ok(Value::Bool(true)),
                    "false" => Ok(Value::Bool(false)),
                    "null" => Ok(Value::Null),
                    other => Err(self.error(&format!("unsupported expression `{other}`"))),
                }
            }
            Some(c) => Err(self.error(&format!("unexpected `{c}`"))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn object(&mut self) -> Result<Value, String> {
        self.expect('{')?;
        let mut map = Map::new();
        loop {
            self.skip_trivia()?;
            if self.peek() == Some('}') {
                self.bump();
                return Ok(Value::Object(map));
            }
            let key = self.key()?;
            self.skip_trivia()?;
            self.expect(':')?;
            self.skip_trivia()?;
            let value = self.value()?;
            map.insert(key, value);
            self.skip_trivia()?;
            match self.bump() {
                Some(',') => continue,
                Some('}') => return Ok(Value::Object(map)),
                _ => return Err(self.error("expected `,` or `}` in object")),
            }
        }
    }

    fn key(&mut self) -> Result<String, String> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => self.string(quote),
            Some(c) if c.is_ascii_digit() => {
                let start = self.pos;
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.bump();
                }
                Ok(self.source[start..self.pos].to_string())
            }
            Some(c) if is_ident_start(c) => Ok(self.identifier().to_string()),
            Some('.') if self.rest().starts_with("...") => Err(self.error("spread is not supported")),
            Some('[') => Err(self.error("computed keys are not supported")),
            _ => Err(self.error("expected object key")),
        }
    }

    fn array(&mut self) -> Result<Value, String> {
        self.expect('[')?;
        let mut items = Vec::new();
        loop {
            self.skip_trivia()?;
            if self.peek() == Some(']') {
                self.bump();
                return Ok(Value::Array(items));
            }
            items.push(self.value()?);
            self.skip_trivia()?;
            match self.bump() {
                Some(',') => continue,
                Some(']') => return Ok(Value::Array(items)),
                _ => return Err(self.error("expected `,` or `]` in array")),
            }
        }
    }

    fn identifier(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_char) {
            self.bump();
        }
        &self.source[start..self.pos]
    }

    fn string(&mut self, quote: char) -> Result<String, String> {
        self.expect(quote)?;
        let mut out = String::new();
        loop {
            match self.bump() {
                None | Some('\n') => return Err(self.error("unterminated string")),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => out.push(self.escape()?),
                Some(c) => out.push(c),
            }
        }
    }

    fn escape(&mut self) -> Result<char, String> {
        let c = self.bump().ok_or_else(|| self.error("unterminated escape"))?;
        Ok(match c {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            'b' => '\u{8}',
            'f' => '\u{c}',
            '0' => '\0',
            'u' => {
                let digits = self.rest().get(..4).ok_or_else(|| self.error("bad \\u escape"))?;
                let code =
                    u32::from_str_radix(digits, 16).map_err(|_| self.error("bad \\u escape"))?;
                self.pos += 4;
                char::from_u32(code).ok_or_else(|| self.error("bad \\u escape"))?
            }
            other => other,
        })
    }

    fn number(&mut self) -> Result<Value, String> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '+' | '_'))
        {
            self.bump();
        }
        let text: String =
            self.source[start..self.pos].trim_start_matches('+').replace('_', "");
        if let Ok(int) = text.parse::<i64>() {
            return Ok(Value::Number(int.into()));
        }
        text.parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| self.error(&format!("invalid number `{text}`")))
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
