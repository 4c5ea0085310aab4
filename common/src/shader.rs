use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use log::{debug, warn};

const DIRECTIVE: &str = "#shader";

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ShaderType {
    Vertex,
    Fragment,
}

impl ShaderType {
    /// Stage named by a `#shader` line. `vertex` wins if both names appear.
    fn from_directive(line: &str) -> Option<Self> {
        if line.contains("vertex") {
            Some(Self::Vertex)
        } else if line.contains("fragment") {
            Some(Self::Fragment)
        } else {
            None
        }
    }
}

impl Display for ShaderType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderType::Vertex => write!(f, "vertex"),
            ShaderType::Fragment => write!(f, "fragment"),
        }
    }
}

/// Vertex and fragment sources split out of a single combined shader file.
///
/// The file is plain GLSL with `#shader vertex` and `#shader fragment` lines
/// marking where each stage starts:
///
/// ```text
/// #shader vertex
/// #version 330 core
/// ...
/// #shader fragment
/// #version 330 core
/// ...
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ShaderProgramSource {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderProgramSource {
    pub fn parse(source: &str) -> Self {
        let mut parsed = Self::default();
        let mut current = None;
        let mut dropped = 0;

        for line in source.split_terminator('\n') {
            if line.contains(DIRECTIVE) {
                // Unknown stages leave the current one selected
                if let Some(shader_type) = ShaderType::from_directive(line) {
                    current = Some(shader_type);
                }
                continue;
            }

            match current {
                Some(shader_type) => {
                    let bucket = parsed.source_mut(shader_type);
                    bucket.push_str(line);
                    bucket.push('\n');
                }
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            warn!("Ignored {dropped} line(s) before the first #shader directive");
        }

        parsed
    }

    pub fn source(&self, shader_type: ShaderType) -> &str {
        match shader_type {
            ShaderType::Vertex => &self.vertex,
            ShaderType::Fragment => &self.fragment,
        }
    }

    fn source_mut(&mut self, shader_type: ShaderType) -> &mut String {
        match shader_type {
            ShaderType::Vertex => &mut self.vertex,
            ShaderType::Fragment => &mut self.fragment,
        }
    }
}

impl FromStr for ShaderProgramSource {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

pub fn parse_shader<P: AsRef<Path>>(path: P) -> Result<ShaderProgramSource> {
    let path = path.as_ref();

    let source = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read shader file {}", path.display()))?;

    let parsed = ShaderProgramSource::parse(&source);

    for shader_type in [ShaderType::Vertex, ShaderType::Fragment] {
        if parsed.source(shader_type).is_empty() {
            warn!("{} has no {shader_type} section", path.display());
        }
    }

    debug!(
        "Parsed {}: {} vertex bytes, {} fragment bytes",
        path.display(),
        parsed.vertex.len(),
        parsed.fragment.len()
    );

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    const BASIC: &str = "#shader vertex
#version 330 core
in vec2 position;
void main() {}
#shader fragment
#version 330 core
out vec4 color;
void main() {}
";

    #[test]
    fn parse_splits_both_stages() {
        let parsed = ShaderProgramSource::parse(BASIC);

        assert_eq!(
            parsed.vertex,
            "#version 330 core\nin vec2 position;\nvoid main() {}\n"
        );
        assert_eq!(
            parsed.fragment,
            "#version 330 core\nout vec4 color;\nvoid main() {}\n"
        );
    }

    #[test]
    fn parse_fragment_before_vertex() {
        let parsed = ShaderProgramSource::parse("#shader fragment\nf\n#shader vertex\nv\n");

        assert_eq!(parsed.vertex, "v\n");
        assert_eq!(parsed.fragment, "f\n");
    }

    #[test]
    fn parse_directive_anywhere_in_line() {
        let parsed = ShaderProgramSource::parse("  // #shader   vertex stage\nv\n");

        assert_eq!(parsed.vertex, "v\n");
        assert!(parsed.fragment.is_empty());
    }

    #[test]
    fn parse_vertex_wins_over_fragment_on_same_line() {
        let parsed = ShaderProgramSource::parse("#shader fragment-after-vertex\nv\n");

        assert_eq!(parsed.vertex, "v\n");
        assert!(parsed.fragment.is_empty());
    }

    #[test]
    fn parse_unknown_stage_keeps_current() {
        let parsed = ShaderProgramSource::parse("#shader vertex\na\n#shader geometry\nb\n");

        assert_eq!(parsed.vertex, "a\nb\n");
        assert!(parsed.fragment.is_empty());
    }

    #[test]
    fn parse_drops_lines_before_first_directive() {
        let parsed = ShaderProgramSource::parse("stray\n\n#shader fragment\nf\n");

        assert!(parsed.vertex.is_empty());
        assert_eq!(parsed.fragment, "f\n");
    }

    #[test]
    fn parse_repeated_directive_appends() {
        let parsed =
            ShaderProgramSource::parse("#shader vertex\na\n#shader fragment\nf\n#shader vertex\nb\n");

        assert_eq!(parsed.vertex, "a\nb\n");
        assert_eq!(parsed.fragment, "f\n");
    }

    #[test]
    fn parse_keeps_blank_lines_and_carriage_returns() {
        let parsed = ShaderProgramSource::parse("#shader vertex\r\na\r\n\r\n\nb");

        assert_eq!(parsed.vertex, "a\r\n\r\n\nb\n");
    }

    #[test]
    fn parse_empty_input() {
        assert_eq!(ShaderProgramSource::parse(""), ShaderProgramSource::default());
        assert_eq!(
            ShaderProgramSource::parse("#shader vertex\n#shader fragment\n"),
            ShaderProgramSource::default()
        );
    }

    #[test]
    fn from_str_matches_parse() {
        let parsed: ShaderProgramSource = BASIC.parse().unwrap();

        assert_eq!(parsed, ShaderProgramSource::parse(BASIC));
    }

    #[test]
    fn parse_random_bodies_are_preserved() {
        let mut rng = fastrand::Rng::with_seed(7);

        for _ in 0..64 {
            let mut vertex = String::new();
            let mut fragment = String::new();

            for _ in 0..rng.usize(0..16) {
                let line: String = (0..rng.usize(0..24))
                    .map(|_| rng.alphanumeric())
                    .collect();
                let bucket = if rng.bool() { &mut vertex } else { &mut fragment };
                bucket.push_str(&line);
                bucket.push('\n');
            }

            let combined = format!("#shader vertex\n{vertex}#shader fragment\n{fragment}");
            let parsed = ShaderProgramSource::parse(&combined);

            assert_eq!(parsed.vertex, vertex);
            assert_eq!(parsed.fragment, fragment);
        }
    }

    #[test]
    fn parse_shader_reads_file() {
        let path = env::temp_dir().join(format!("basic-{}.shader", fastrand::u64(..)));
        fs::write(&path, BASIC).unwrap();

        let parsed = parse_shader(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(parsed, ShaderProgramSource::parse(BASIC));
    }

    #[test]
    fn parse_shader_missing_file_names_path() {
        let path = env::temp_dir().join("does-not-exist.shader");

        let error = parse_shader(&path).unwrap_err();

        assert!(error.to_string().contains("does-not-exist.shader"));
    }

    #[test]
    fn shader_type_display() {
        assert_eq!(ShaderType::Vertex.to_string(), "vertex");
        assert_eq!(ShaderType::Fragment.to_string(), "fragment");
    }
}
