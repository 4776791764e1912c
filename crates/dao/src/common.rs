/// Quote an identifier with double quotes, doubling any embedded quote.
///
/// Catalog column names such as `User` or `DB` collide with keywords on some
/// platforms, so every identifier that ends up in rendered SQL goes through here.
pub fn quote_ident(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn quoted_keyword() {
        assert_eq!(quote_ident("User"), "\"User\"");
    }

    #[test]
    fn embedded_quote_is_doubled() {
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }
}
