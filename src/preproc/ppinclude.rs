/// The file named by a quoted include directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PPInclude {
    name: String,
    closed: bool,
}

impl PPInclude {
    /// Accepts a token of more than two characters that opens with `"`. The
    /// name is the token minus its first and last characters, whatever the last
    /// character happens to be.
    pub fn resolve(token: &str) -> Option<Self> {
        if !token.starts_with('"') || token.chars().count() <= 2 {
            return None;
        }
        let mut chars = token.chars();
        chars.next();
        let closed = chars.next_back() == Some('"');
        Some(Self {
            name: chars.as_str().to_owned(),
            closed,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// whether the token ended with a closing quote
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
