use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, VersionError};

/// Represents a parsed semantic version value
///
/// Every segment is kept as the string it was written as. Ordering is
/// byte-lexicographic per segment, never numeric, so `"10"` sorts before
/// `"9"`. Build metadata is carried through parsing and display but is
/// ignored by every comparison.
#[derive(Debug, Clone)]
pub struct Version {
    /// First dot-separated segment
    pub major: String,
    /// Second dot-separated segment
    pub minor: String,
    /// Third segment with any pre-release/build suffix stripped
    pub patch: String,
    /// Pre-release label following `-` in the third segment (empty if absent)
    pub pre: String,
    /// Build metadata following `+` in the third segment (empty if absent)
    pub build: String,
}

impl Version {
    /// Parse a Version from a version string like "1.2.4" or "1.2.5-beta1+322"
    pub fn parse(input: &str) -> Result<Self> {
        input.parse()
    }

    /// The four fields that participate in ordering, build metadata excluded
    pub(crate) fn comparison_key(&self) -> [&str; 4] {
        [&self.major, &self.minor, &self.patch, &self.pre]
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        let pieces: Vec<&str> = s.split('.').collect();
        if pieces.len() != 3 {
            return Err(VersionError::MalformedVersion);
        }

        // Build is split off the raw third segment before the pre-release
        // label, so a `-` inside build metadata never leaks into `pre`.
        let mut last = pieces[2];
        let build = split_last(&mut last, '+');
        let pre = split_last(&mut last, '-');

        Ok(Self {
            major: pieces[0].to_string(),
            minor: pieces[1].to_string(),
            patch: last.to_string(),
            pre: pre.to_string(),
            build: build.to_string(),
        })
    }
}

/// Split `last` at the first occurrence of `delimiter`: the text before it
/// stays in `last`, everything after it is returned verbatim (further
/// delimiter occurrences included). Returns "" when the delimiter is absent.
fn split_last<'a>(last: &mut &'a str, delimiter: char) -> &'a str {
    match last.split_once(delimiter) {
        Some((head, tail)) => {
            *last = head;
            tail
        }
        None => "",
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            write!(f, "-{}", self.pre)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

/// Versions embedded in structured output render as the compact dotted
/// string, not as a five-field record.
impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct VersionVisitor;

        impl<'de> Visitor<'de> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a version string like \"1.2.3\"")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Version, E>
            where
                E: de::Error,
            {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}
