use regex::Regex;

/// The three version renderings derived from one describe line.
///
/// `standard` is always strict `MAJOR.MINOR.PATCH`. `standard_with_dirty`
/// appends the dirty marker when the working tree had uncommitted changes.
/// `full` also embeds the abbreviated commit hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTriple {
    pub standard: String,
    pub standard_with_dirty: String,
    pub full: String,
}

/// Structural split of a describe line, before composition.
#[derive(Debug, PartialEq)]
enum DescribeParts {
    /// An annotated `MAJOR.MINOR` tag was found:
    /// `<tag>-<distance>-g<hash>[-<dirty>]`. The patch number is the commit
    /// distance injected by `--long`, not part of the tag itself.
    Tagged {
        major: String,
        minor: String,
        patch: String,
        hash: String,
        dirty: String,
    },
    /// No usable tag; the line is a bare abbreviated hash, optionally
    /// followed by `-<dirty>`.
    Untagged { hash: String, dirty: String },
}

/// Parses a `git describe` line into the three version strings.
///
/// Total over arbitrary input: a line that does not carry a usable
/// `MAJOR.MINOR` tag degrades to `0.0.0` with best-effort hash and dirty
/// extraction instead of failing.
///
/// # Arguments
/// * `line` - Output of `git describe --long --dirty --always`, without the
///   trailing newline
///
/// # Example
/// ```
/// use git_semver::version::parse_describe;
///
/// let triple = parse_describe("v3.2-1-gdeadbee");
/// assert_eq!(triple.standard, "3.2.1");
/// assert_eq!(triple.standard_with_dirty, "3.2.1");
/// assert_eq!(triple.full, "3.2.1-deadbee");
/// ```
pub fn parse_describe(line: &str) -> VersionTriple {
    let (standard, hash, dirty) = match split_describe(line) {
        DescribeParts::Tagged {
            major,
            minor,
            patch,
            hash,
            dirty,
        } => (format!("{}.{}.{}", major, minor, patch), hash, dirty),
        DescribeParts::Untagged { hash, dirty } => ("0.0.0".to_string(), hash, dirty),
    };

    let standard_with_dirty = if dirty.is_empty() {
        standard.clone()
    } else {
        format!("{}-{}", standard, dirty)
    };

    let full = if dirty.is_empty() {
        format!("{}-{}", standard, hash)
    } else {
        format!("{}-{}-{}", standard, hash, dirty)
    };

    VersionTriple {
        standard,
        standard_with_dirty,
        full,
    }
}

/// Splits a describe line into its tagged or untagged parts.
fn split_describe(line: &str) -> DescribeParts {
    if let Ok(re) =
        Regex::new(r"^(?P<tag>.+?)-(?P<patch>[0-9]+)-g(?P<hash>\w+)(?:-(?P<dirty>\w+))?$")
    {
        if let Some(caps) = re.captures(line) {
            if let Some((major, minor)) = tag_components(&caps["tag"]) {
                return DescribeParts::Tagged {
                    major,
                    minor,
                    patch: caps["patch"].to_string(),
                    hash: caps["hash"].to_string(),
                    dirty: caps
                        .name("dirty")
                        .map(|m| m.as_str())
                        .unwrap_or("")
                        .to_string(),
                };
            }
        }
    }

    // No annotated tag: git fell back to a bare abbreviated hash, with an
    // optional dirty token after a hyphen. Segments beyond the second are
    // ignored.
    let mut segments = line.split('-');
    let hash = segments.next().unwrap_or("").trim().to_string();
    let dirty = segments.next().unwrap_or("").trim().to_string();

    DescribeParts::Untagged { hash, dirty }
}

/// Extracts `MAJOR` and `MINOR` from a tag name.
///
/// Accepts an optional `v`/`V` prefix followed by exactly two dot-separated
/// digit sequences. Anything else - a third component, non-numeric text -
/// returns `None`, and the whole line is then treated as untagged.
fn tag_components(tag: &str) -> Option<(String, String)> {
    // Remove common prefixes like 'v', 'V'
    let clean_tag = tag.trim_start_matches('v').trim_start_matches('V');

    let parts: Vec<&str> = clean_tag.split('.').collect();
    if parts.len() != 2 {
        return None;
    }

    for part in &parts {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
    }

    Some((parts[0].to_string(), parts[1].to_string()))
}
