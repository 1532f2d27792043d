use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use super::BumpKind;

/// Reasons a quoted version string is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("'{0}' is not 1 to 4 dot-separated numbers")]
    InvalidFormat(String),

    #[error("component '{0}' is too large")]
    ComponentTooLarge(String),

    #[error("{0} bump overflows the version component")]
    Overflow(BumpKind),
}

/// Four-component version `[major, minor, update, build]`.
///
/// Always holds all four components. Serialization drops the build
/// component when it is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionTuple {
    pub major: u64,
    pub minor: u64,
    pub update: u64,
    pub build: u64,
}

fn version_regex() -> &'static Regex {
    static VERSION_RE: OnceLock<Regex> = OnceLock::new();
    VERSION_RE.get_or_init(|| {
        Regex::new(r"^([0-9]+)(?:\.([0-9]+))?(?:\.([0-9]+))?(?:\.([0-9]+))?$")
            .expect("version pattern is valid")
    })
}

impl VersionTuple {
    pub fn new(major: u64, minor: u64, update: u64, build: u64) -> Self {
        VersionTuple {
            major,
            minor,
            update,
            build,
        }
    }

    /// Parse "X", "X.Y", "X.Y.Z" or "X.Y.Z.W", padding missing components with 0.
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        let captures = version_regex()
            .captures(text)
            .ok_or_else(|| VersionError::InvalidFormat(text.to_string()))?;

        let mut components = [0u64; 4];
        for (slot, group) in components.iter_mut().zip(captures.iter().skip(1)) {
            if let Some(m) = group {
                *slot = m
                    .as_str()
                    .parse::<u64>()
                    .map_err(|_| VersionError::ComponentTooLarge(m.as_str().to_string()))?;
            }
        }

        Ok(Self::from_components(components))
    }

    pub fn from_components(components: [u64; 4]) -> Self {
        let [major, minor, update, build] = components;
        VersionTuple::new(major, minor, update, build)
    }

    pub fn components(&self) -> [u64; 4] {
        [self.major, self.minor, self.update, self.build]
    }

    /// Increment the component selected by `kind` and zero every lower-order one.
    ///
    /// - **Major**: major += 1, minor = update = build = 0
    /// - **Minor**: minor += 1, update = build = 0
    /// - **Update**: update += 1, build = 0
    /// - **Build**: build += 1
    pub fn bump(&self, kind: BumpKind) -> Result<Self, VersionError> {
        let mut components = self.components();
        let index = kind.index();

        components[index] = components[index]
            .checked_add(1)
            .ok_or(VersionError::Overflow(kind))?;
        for lower in &mut components[index + 1..] {
            *lower = 0;
        }

        Ok(Self::from_components(components))
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.update)?;
        if self.build != 0 {
            write!(f, ".{}", self.build)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_four_components() {
        let v = VersionTuple::parse("0.3.5.1").unwrap();
        assert_eq!(v, VersionTuple::new(0, 3, 5, 1));
    }

    #[test]
    fn test_parse_pads_missing_components() {
        assert_eq!(
            VersionTuple::parse("1.2.3").unwrap(),
            VersionTuple::new(1, 2, 3, 0)
        );
        assert_eq!(
            VersionTuple::parse("1.3").unwrap(),
            VersionTuple::new(1, 3, 0, 0)
        );
        assert_eq!(
            VersionTuple::parse("7").unwrap(),
            VersionTuple::new(7, 0, 0, 0)
        );
    }

    #[test]
    fn test_parse_invalid() {
        for text in ["", "abc", "1.2.3.4.5", "1..2", "1.2.", "-1.0", "+1.0", " 1.0", "1.0 ", "v1.2.3"] {
            assert!(
                matches!(VersionTuple::parse(text), Err(VersionError::InvalidFormat(_))),
                "'{}' should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_ascii_digits() {
        assert!(VersionTuple::parse("١.٢.٣").is_err());
    }

    #[test]
    fn test_parse_component_too_large() {
        let err = VersionTuple::parse("1.99999999999999999999999").unwrap_err();
        assert!(matches!(err, VersionError::ComponentTooLarge(_)));
    }

    #[test]
    fn test_bump_build() {
        let v = VersionTuple::new(1, 2, 3, 0);
        let once = v.bump(BumpKind::Build).unwrap();
        assert_eq!(once.to_string(), "1.2.3.1");
        let twice = once.bump(BumpKind::Build).unwrap();
        assert_eq!(twice, VersionTuple::new(1, 2, 3, 2));
    }

    #[test]
    fn test_bump_update_resets_build() {
        let v = VersionTuple::new(1, 2, 3, 4);
        let bumped = v.bump(BumpKind::Update).unwrap();
        assert_eq!(bumped, VersionTuple::new(1, 2, 4, 0));
        assert_eq!(bumped.to_string(), "1.2.4");
    }

    #[test]
    fn test_bump_minor_resets_update_and_build() {
        let v = VersionTuple::new(1, 2, 3, 0);
        let bumped = v.bump(BumpKind::Minor).unwrap();
        assert_eq!(bumped, VersionTuple::new(1, 3, 0, 0));
        assert_eq!(bumped.to_string(), "1.3.0");
    }

    #[test]
    fn test_bump_major_resets_everything() {
        let v = VersionTuple::new(2, 9, 9, 9);
        let bumped = v.bump(BumpKind::Major).unwrap();
        assert_eq!(bumped.to_string(), "3.0.0");
    }

    #[test]
    fn test_bump_overflow() {
        let v = VersionTuple::new(1, 0, 0, u64::MAX);
        assert_eq!(
            v.bump(BumpKind::Build),
            Err(VersionError::Overflow(BumpKind::Build))
        );
        // A higher-order bump discards the saturated build component.
        assert_eq!(
            v.bump(BumpKind::Update).unwrap(),
            VersionTuple::new(1, 0, 1, 0)
        );
    }

    #[test]
    fn test_display_suppresses_zero_build() {
        assert_eq!(VersionTuple::new(1, 0, 0, 0).to_string(), "1.0.0");
        assert_eq!(VersionTuple::new(1, 0, 0, 5).to_string(), "1.0.0.5");
        assert_eq!(VersionTuple::new(0, 0, 0, 0).to_string(), "0.0.0");
    }

    #[test]
    fn test_serialize_then_parse_is_identity() {
        let samples = [
            VersionTuple::new(0, 0, 0, 0),
            VersionTuple::new(1, 2, 3, 0),
            VersionTuple::new(1, 2, 3, 4),
            VersionTuple::new(10, 0, 200, 3000),
        ];
        for v in samples {
            assert_eq!(VersionTuple::parse(&v.to_string()).unwrap(), v);
        }
    }
}
