use std::fmt;

/// Normalization stages, in the order the default pipeline runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    Integers,
    Tuples,
    Booleans,
    Proxy,
    NamingRule,
    ProxyFree,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StageKind::Integers => "integers",
            StageKind::Tuples => "tuples",
            StageKind::Booleans => "booleans",
            StageKind::Proxy => "proxy",
            StageKind::NamingRule => "naming-rule",
            StageKind::ProxyFree => "proxy-free",
        };
        write!(f, "{label}")
    }
}
