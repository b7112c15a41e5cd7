//! Trace selection policy
//!
//! Selection of which calls get traced is explicit composition, not
//! reflection: an interceptor consults a registered table of simple name
//! patterns against the call description. An empty table traces
//! everything, so the default interceptor is all-on.

/// Pattern table deciding which call descriptions get traced
///
/// Patterns support four shapes: exact (`save`), prefix (`save*`),
/// suffix (`*save`), and contains (`*save*`). Matching is
/// case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct TracePolicy {
    patterns: Vec<String>,
}

impl TracePolicy {
    /// Policy that traces every call (the default)
    pub fn trace_all() -> Self {
        Self::default()
    }

    /// Policy tracing only calls whose description matches a pattern
    pub fn with_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Register one more pattern
    pub fn add_pattern(&mut self, pattern: impl Into<String>) {
        self.patterns.push(pattern.into());
    }

    /// Whether a call with this description should be traced
    pub fn matches(&self, message: &str) -> bool {
        if self.patterns.is_empty() {
            return true;
        }
        self.patterns.iter().any(|p| simple_match(p, message))
    }
}

fn simple_match(pattern: &str, message: &str) -> bool {
    if let Some(rest) = pattern.strip_prefix('*') {
        match rest.strip_suffix('*') {
            Some(inner) => message.contains(inner),
            None => message.ends_with(rest),
        }
    } else if let Some(prefix) = pattern.strip_suffix('*') {
        message.starts_with(prefix)
    } else {
        message == pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_policy_traces_everything() {
        let policy = TracePolicy::trace_all();
        assert!(policy.matches("OrderService.order()"));
        assert!(policy.matches(""));
    }

    #[test]
    fn test_exact_match() {
        let policy = TracePolicy::with_patterns(["save"]);
        assert!(policy.matches("save"));
        assert!(!policy.matches("saveItem"));
    }

    #[test]
    fn test_prefix_match() {
        let policy = TracePolicy::with_patterns(["order*", "save*"]);
        assert!(policy.matches("orderItem"));
        assert!(policy.matches("save"));
        assert!(!policy.matches("request"));
    }

    #[test]
    fn test_suffix_match() {
        let policy = TracePolicy::with_patterns(["*.save()"]);
        assert!(policy.matches("OrderRepository.save()"));
        assert!(!policy.matches("OrderRepository.find()"));
    }

    #[test]
    fn test_contains_match() {
        let policy = TracePolicy::with_patterns(["*Repository*"]);
        assert!(policy.matches("OrderRepository.save()"));
        assert!(!policy.matches("OrderService.order()"));
    }

    #[test]
    fn test_add_pattern() {
        let mut policy = TracePolicy::with_patterns(["order*"]);
        assert!(!policy.matches("request()"));
        policy.add_pattern("request*");
        assert!(policy.matches("request()"));
    }
}
