use proc_macro::{TokenStream, TokenTree};

/// Splits a `TokenStream` into comma-separated arguments.
///
/// Commas at the top level act as separators; commas nested inside
/// groups (parentheses, braces, brackets) are part of their argument.
/// Empty arguments — including one produced by a trailing comma — are
/// dropped.
pub(crate) fn split_args(input: TokenStream) -> Vec<Vec<TokenTree>> {
    let mut args = Vec::new();
    let mut current = Vec::new();

    for token in input {
        match &token {
            TokenTree::Punct(p) if p.as_char() == ',' => {
                if !current.is_empty() {
                    args.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(token),
        }
    }

    if !current.is_empty() {
        args.push(current);
    }

    args
}

/// Renders a slice of tokens back into Rust source.
///
/// Collecting into a `TokenStream` lets its `Display` implementation
/// take care of the spacing between tokens.
pub(crate) fn tokens_to_string(tokens: &[TokenTree]) -> String {
    tokens
        .iter()
        .cloned()
        .collect::<TokenStream>()
        .to_string()
}
