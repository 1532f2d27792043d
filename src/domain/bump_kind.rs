use std::fmt;

/// Which component of a version tuple to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BumpKind {
    Major,
    Minor,
    Update,
    #[default]
    Build,
}

impl BumpKind {
    /// Map a command argument to a bump kind.
    ///
    /// Matching is exact and case-sensitive. Returns `None` for anything else,
    /// including the empty string.
    pub fn parse(arg: &str) -> Option<Self> {
        match arg {
            "major" => Some(BumpKind::Major),
            "minor" => Some(BumpKind::Minor),
            "update" => Some(BumpKind::Update),
            "build" => Some(BumpKind::Build),
            _ => None,
        }
    }

    /// Map a command argument to a bump kind, falling back to `Build`.
    ///
    /// A missing argument, an empty one, and an unrecognized one all select
    /// `Build`.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(value) => Self::parse(value).unwrap_or_else(|| {
                tracing::debug!(value, "unrecognized bump kind, using build");
                BumpKind::Build
            }),
            None => BumpKind::Build,
        }
    }

    /// Index of the component this kind increments in `[major, minor, update, build]`.
    pub fn index(self) -> usize {
        match self {
            BumpKind::Major => 0,
            BumpKind::Minor => 1,
            BumpKind::Update => 2,
            BumpKind::Build => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Update => "update",
            BumpKind::Build => "build",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tokens() {
        assert_eq!(BumpKind::parse("major"), Some(BumpKind::Major));
        assert_eq!(BumpKind::parse("minor"), Some(BumpKind::Minor));
        assert_eq!(BumpKind::parse("update"), Some(BumpKind::Update));
        assert_eq!(BumpKind::parse("build"), Some(BumpKind::Build));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(BumpKind::parse("Major"), None);
        assert_eq!(BumpKind::parse("MINOR"), None);
        assert_eq!(BumpKind::parse(" major"), None);
    }

    #[test]
    fn test_from_arg_falls_back_to_build() {
        assert_eq!(BumpKind::from_arg(None), BumpKind::Build);
        assert_eq!(BumpKind::from_arg(Some("")), BumpKind::Build);
        assert_eq!(BumpKind::from_arg(Some("patch")), BumpKind::Build);
        assert_eq!(BumpKind::from_arg(Some("major")), BumpKind::Major);
    }

    #[test]
    fn test_index_table() {
        assert_eq!(BumpKind::Major.index(), 0);
        assert_eq!(BumpKind::Minor.index(), 1);
        assert_eq!(BumpKind::Update.index(), 2);
        assert_eq!(BumpKind::Build.index(), 3);
    }

    #[test]
    fn test_display_matches_token() {
        for kind in [
            BumpKind::Major,
            BumpKind::Minor,
            BumpKind::Update,
            BumpKind::Build,
        ] {
            assert_eq!(BumpKind::parse(&kind.to_string()), Some(kind));
        }
    }
}
