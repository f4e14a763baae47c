/// Builds the value of the `tags` query parameter.
///
/// Each tag is percent-encoded on its own, so `&`, `#`, `=` or spaces inside a tag can't break
/// out of the parameter. The `+` between tags stays literal.
#[macro_export]
macro_rules! join_tags {
    ($x:expr) => {{
        let encoded: Vec<_> = $x.iter().map(|tag| urlencoding::encode(tag)).collect();
        let tl = encoded.join("+");
        log::debug!("Tag List: {}", tl);
        tl
    }};
}
