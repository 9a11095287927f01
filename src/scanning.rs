use log::trace;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    number(f64),
    word(String),
}

impl Token {
    /// Classifies a whitespace-free chunk of input. The whole chunk has to
    /// parse as a finite float to count as a number.
    pub fn classify(content: &str) -> Self {
        match content.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::number(value),
            _ => Self::word(content.into()),
        }
    }
}

pub struct StringScanner<'a> {
    string: &'a str,
    token: Option<Token>,
    index: usize,
}

impl<'a> StringScanner<'a> {
    pub fn new(string: &'a str) -> Self {
        let mut source = Self {
            string,
            token: None,
            index: 0,
        };
        source.advance();
        source
    }

    fn view(&self) -> &'a str {
        &self.string[self.index..]
    }

    fn skip_whitespace(&mut self) {
        let view = self.view();
        self.index += view.len() - view.trim_start().len();
    }

    fn get_chunk(&self) -> &'a str {
        let view = self.view();
        let end = view.find(char::is_whitespace).unwrap_or(view.len());
        &view[..end]
    }

    fn advance(&mut self) {
        self.skip_whitespace();
        let chunk = self.get_chunk();
        self.index += chunk.len();
        self.token = if chunk.is_empty() {
            None
        } else {
            trace!("scanned '{}'", chunk);
            Some(Token::classify(chunk))
        };
    }
}

impl Iterator for StringScanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.token.take();
        if token.is_some() {
            self.advance();
        }
        token
    }
}
