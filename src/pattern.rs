use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::{InsertError, UrlError};
use crate::params::Params;

// The RFC 3986 path segment set, plus '%' so rendered values survive a
// round-trip through `percent_decode_str`.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed path pattern: a sequence of literal segments and named captures.
///
/// The root pattern `/` compiles to an empty segment list.
#[derive(Debug, Clone)]
pub(crate) struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parses a pattern such as `/package/:name`.
    ///
    /// A segment starting with `:` is a named capture of exactly one path
    /// segment. A single trailing slash is ignored.
    pub(crate) fn parse(path: &str) -> Result<Pattern, InsertError> {
        if !path.starts_with('/') {
            return Err(InsertError::MissingLeadingSlash);
        }

        let rest = &path[1..];
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for segment in rest.split('/') {
                match segment.strip_prefix(':') {
                    Some("") => return Err(InsertError::UnnamedParam),
                    Some(name) => segments.push(Segment::Param(name.to_owned())),
                    None => segments.push(Segment::Literal(segment.to_owned())),
                }
            }
        }

        Ok(Pattern {
            raw: path.to_owned(),
            segments,
        })
    }

    /// Returns true if the two patterns match the same set of paths.
    ///
    /// Captures are compared positionally, so `/package/:name` and
    /// `/package/:id` overlap even though they read differently.
    pub(crate) fn overlaps(&self, other: &Pattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| match (a, b) {
                    (Segment::Literal(a), Segment::Literal(b)) => a == b,
                    (Segment::Param(_), Segment::Param(_)) => true,
                    _ => false,
                })
    }

    /// Matches a concrete path, producing the list of captures.
    ///
    /// Captured segments are percent-decoded; a segment whose bytes do not
    /// decode to UTF-8 is kept raw. A single trailing slash on the path is
    /// tolerated.
    pub(crate) fn matches<'r, 'p>(&'r self, path: &'p str) -> Option<Params<'r, 'p>> {
        let rest = path.strip_prefix('/')?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        let mut params = Params::new();
        if rest.is_empty() {
            return self.segments.is_empty().then_some(params);
        }

        let mut segments = self.segments.iter();
        for part in rest.split('/') {
            match segments.next()? {
                Segment::Literal(expected) => {
                    if expected != part {
                        return None;
                    }
                }
                Segment::Param(name) => params.push(name, decode_segment(part)),
            }
        }

        // fewer path segments than pattern segments
        if segments.next().is_some() {
            return None;
        }

        Some(params)
    }

    /// Renders the pattern into a concrete path, filling captures from the
    /// given pairs and percent-encoding their values.
    pub(crate) fn render(&self, params: &[(&str, &str)]) -> Result<String, UrlError> {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Literal(literal) => out.push_str(literal),
                Segment::Param(name) => {
                    let value = params
                        .iter()
                        .find(|(key, _)| key == name)
                        .map(|(_, value)| *value)
                        .ok_or_else(|| UrlError::MissingParam { name: name.clone() })?;
                    out.extend(utf8_percent_encode(value, SEGMENT));
                }
            }
        }

        if out.is_empty() {
            out.push('/');
        }

        Ok(out)
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.raw
    }
}

fn decode_segment(raw: &str) -> Cow<'_, str> {
    match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => decoded,
        Err(_) => Cow::Borrowed(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_bad_patterns() {
        assert_eq!(
            Pattern::parse("package/:name").unwrap_err(),
            InsertError::MissingLeadingSlash
        );
        assert_eq!(
            Pattern::parse("/package/:").unwrap_err(),
            InsertError::UnnamedParam
        );
    }

    #[test]
    fn root_matches_only_root() {
        let root = Pattern::parse("/").unwrap();
        assert!(root.matches("/").is_some());
        assert!(root.matches("/package").is_none());
    }

    #[test]
    fn captures_a_segment() {
        let pattern = Pattern::parse("/package/:name").unwrap();

        let params = pattern.matches("/package/libfoo").unwrap();
        assert_eq!(params.get("name"), Some("libfoo"));

        assert!(pattern.matches("/package").is_none());
        assert!(pattern.matches("/package/libfoo/files").is_none());
        assert!(pattern.matches("/other/libfoo").is_none());
    }

    #[test]
    fn tolerates_a_trailing_slash() {
        let pattern = Pattern::parse("/package/:name").unwrap();
        let params = pattern.matches("/package/libfoo/").unwrap();
        assert_eq!(params.get("name"), Some("libfoo"));
    }

    #[test]
    fn decodes_captures() {
        let pattern = Pattern::parse("/package/:name").unwrap();
        let params = pattern.matches("/package/lib%20foo").unwrap();
        assert_eq!(params.get("name"), Some("lib foo"));
    }

    #[test]
    fn keeps_undecodable_captures_raw() {
        let pattern = Pattern::parse("/package/:name").unwrap();
        let params = pattern.matches("/package/lib%ff").unwrap();
        assert_eq!(params.get("name"), Some("lib%ff"));
    }

    #[test]
    fn overlap_ignores_capture_names() {
        let a = Pattern::parse("/package/:name").unwrap();
        let b = Pattern::parse("/package/:id").unwrap();
        let c = Pattern::parse("/package/list").unwrap();

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn renders_with_encoding() {
        let pattern = Pattern::parse("/package/:name").unwrap();

        let path = pattern.render(&[("name", "lib foo")]).unwrap();
        assert_eq!(path, "/package/lib%20foo");

        assert_eq!(
            pattern.render(&[]).unwrap_err(),
            UrlError::MissingParam {
                name: "name".into()
            }
        );
    }

    #[test]
    fn renders_root() {
        let root = Pattern::parse("/").unwrap();
        assert_eq!(root.render(&[]).unwrap(), "/");
    }
}
