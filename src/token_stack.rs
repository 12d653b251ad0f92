//! LIFO container of owned token strings used by the postfix parser.

/// Holds the tokens of one expression. Tokens are pushed in source order, so the
/// last token written is the first one popped.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TokenStack {
    tokens: Vec<String>,
}

impl TokenStack {
    pub fn new() -> Self {
        return Self { tokens: Vec::new() };
    }

    /// Builds a stack by pushing `tokens` in order.
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        let mut token_stack = Self::new();

        for token_text in tokens {
            token_stack.push(token_text);
        }

        return token_stack;
    }

    /// Takes ownership of a token and places it on top.
    pub fn push(&mut self, token_text: String) {
        self.tokens.push(token_text);
    }

    /// Removes the top token and hands its ownership to the caller.
    pub fn pop(&mut self) -> Option<String> {
        return self.tokens.pop();
    }

    pub fn is_empty(&self) -> bool {
        return self.tokens.is_empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test if tokens come back in reverse source order.
    #[test]
    fn test_pop_order() {
        let mut token_stack = TokenStack::from_tokens(vec![
            String::from("3"),
            String::from("4"),
            String::from("+"),
        ]);

        assert_eq!(token_stack.pop(), Some(String::from("+")));
        assert_eq!(token_stack.pop(), Some(String::from("4")));
        assert_eq!(token_stack.pop(), Some(String::from("3")));
        assert_eq!(token_stack.pop(), None);
        assert!(token_stack.is_empty());
    }

    // Test if a new stack is empty and pushes take effect.
    #[test]
    fn test_empty_stack() {
        let mut token_stack = TokenStack::new();

        assert!(token_stack.is_empty());
        assert_eq!(token_stack, TokenStack::default());

        token_stack.push(String::from("x"));
        assert!(!token_stack.is_empty());
    }
}
