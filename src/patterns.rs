use regex::Regex;
use tracing::warn;

/// A named, compiled pattern from one of the static tables
#[derive(Debug)]
pub struct NamedPattern {
    pub name: &'static str,
    pub regex: Regex,
}

/// Compile one static pattern, logging and returning `None` on failure
pub fn compile(name: &'static str, pattern: &str) -> Option<NamedPattern> {
    match Regex::new(pattern) {
        Ok(regex) => Some(NamedPattern { name, regex }),
        Err(e) => {
            warn!(target: "chunker", pattern = name, error = %e, "dropping invalid pattern");
            None
        }
    }
}

/// Compile a static pattern table once.
///
/// A pattern that fails to compile is dropped so its strategy falls through
/// to the next one instead of panicking.
pub fn compile_table(table: &[(&'static str, &str)]) -> Vec<NamedPattern> {
    table
        .iter()
        .filter_map(|&(name, pattern)| compile(name, pattern))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_dropped() {
        let table = compile_table(&[("ok", r"^a+"), ("broken", r"(unclosed")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].name, "ok");
    }
}
