/// A lazily compiled `&'static Regex` for a literal pattern.
///
/// The pattern is compiled once, on first use. Only use it with literals that
/// are known to be valid.
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).expect("built-in pattern"));
        &*RE
    }};
}
