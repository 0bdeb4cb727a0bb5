// src/core/ignore/patterns.rs
use anyhow::{Context as _, Result, bail};
use glob::{MatchOptions, Pattern};
use std::path::Path;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug)]
struct Rule {
    glob: Pattern,
    /// `!pattern`: re-includes a file an earlier rule ignored
    negated: bool,
}

/// Gitignore-style rules read from an ignore file.
///
/// Paths are matched relative to the build directory. The last matching rule
/// decides, so a later `!pattern` re-includes what an earlier one ignored.
#[derive(Debug, Default)]
pub struct Patterns {
    rules: Vec<Rule>,
}

impl Patterns {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Adds one line of an ignore file.
    ///
    /// Understands `#` comments, `!` negation, a leading `/` anchoring the
    /// pattern to the build root, a trailing `/` for directories, `**` and a
    /// single `{a,b}` group.
    ///
    /// # Errors
    ///
    /// Fails on an unbalanced brace group or invalid glob syntax.
    #[inline]
    pub fn add_pattern(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let (line, negated) = line
            .strip_prefix('!')
            .map_or((line, false), |rest| (rest, true));
        let (line, anchored) = line
            .strip_prefix('/')
            .map_or((line, false), |rest| (rest, true));
        let (body, is_dir) = line
            .strip_suffix('/')
            .map_or((line, false), |rest| (rest, true));

        // A slash in the middle anchors the pattern just like a leading one.
        let mut glob = if anchored || body.contains('/') {
            body.to_owned()
        } else {
            format!("**/{body}")
        };
        if is_dir {
            glob.push_str("/**");
        }

        for expanded in expand_braces(&glob)? {
            let compiled = Pattern::new(&expanded)
                .with_context(|| format!("Invalid ignore pattern: {expanded}"))?;
            self.rules.push(Rule {
                glob: compiled,
                negated,
            });
        }
        Ok(())
    }

    /// Whether `path`, relative to the build directory, is ignored.
    #[inline]
    pub fn matches<P: AsRef<Path>>(&self, path: P) -> bool {
        let normalized = normalize(path.as_ref());
        self.rules
            .iter()
            .rev()
            .find(|rule| rule.glob.matches_with(&normalized, MATCH_OPTIONS))
            .is_some_and(|rule| !rule.negated)
    }
}

fn normalize(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn expand_braces(glob: &str) -> Result<Vec<String>> {
    let Some((prefix, rest)) = glob.split_once('{') else {
        if glob.contains('}') {
            bail!("Invalid pattern: missing opening brace in {glob}");
        }
        return Ok(vec![glob.to_owned()]);
    };
    let Some((alternatives, suffix)) = rest.split_once('}') else {
        bail!("Invalid pattern: missing closing brace in {glob}");
    };

    Ok(alternatives
        .split(',')
        .map(|alt| format!("{prefix}{}{suffix}", alt.trim()))
        .collect())
}
