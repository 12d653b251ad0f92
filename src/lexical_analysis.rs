use lazy_static::lazy_static;
use regex::Regex;

/// The different classes of tokens that compose a postfix expression.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum TokenClass {
    Operator,
    Integer,
    Symbol,
    Illegal,
}

// Represents how to recognize a token class.
#[derive(Debug)]
struct TokenRule {
    token_class: TokenClass,
    regex: Regex,
}

// Vector of regex patterns that correspond to each token class. Every pattern is
// anchored at both ends because a token is always classified as a whole.
lazy_static! {
    static ref TOKEN_RULES: Vec<TokenRule> = vec![
        TokenRule {
            token_class: TokenClass::Operator,
            regex: Regex::new(r"^(\+|-|\*|/|%|\?|<-)$")
                .expect("Unable to compile Operator rule regex."),
        },
        TokenRule {
            token_class: TokenClass::Integer,
            regex: Regex::new(r"^-?[0-9]+$").expect("Unable to compile Integer rule regex."),
        },
        TokenRule {
            token_class: TokenClass::Symbol,
            regex: Regex::new(r"^[a-zA-Z][a-zA-Z0-9]*$")
                .expect("Unable to compile Symbol rule regex."),
        },
    ];

    // Only these four characters separate tokens.
    static ref TOKEN_REGEX: Regex =
        Regex::new(r"[^ \t\r\n]+").expect("Unable to compile token regex.");
}

/// Finds the class of a single token. Tokens matching no rule are `Illegal`.
pub fn classify_token(token_text: &str) -> TokenClass {
    match TOKEN_RULES
        .iter()
        .find(|token_rule| token_rule.regex.is_match(token_text))
    {
        Some(token_rule) => return token_rule.token_class,
        None => return TokenClass::Illegal,
    };
}

/// Splits an expression string into its whitespace-separated tokens, keeping
/// source order. Each token is an owned string that the caller moves onward.
pub fn run_lexical_analysis(expression_str: &str) -> Vec<String> {
    return TOKEN_REGEX
        .find_iter(expression_str)
        .map(|match_obj| String::from(match_obj.as_str()))
        .collect();
}
