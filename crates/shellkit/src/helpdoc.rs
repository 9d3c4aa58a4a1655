//! Convert command help text to markdown.
//!
//! Two layouts are recognised:
//!
//! - PowerShell `Get-Help` output, with unindented upper-case headings
//!   (`NAME`, `SYNTAX`, `PARAMETERS`, `EXAMPLES`, ...)
//! - GNU/clap `--help` output, with `Usage:`, `Options:`, `Commands:` ...
//!
//! Usage blocks become fenced code, option and command lists become
//! bullet lists, and example prompts become fenced code blocks.

use shellkit_core::{Result, ToolError};
use std::path::Path;
use std::process::Command;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    Preamble,
    Name,
    Usage,
    Items,
    Examples,
    Prose,
}

#[derive(Debug)]
struct Section {
    heading: String,
    kind: SectionKind,
    inline: Option<String>,
    lines: Vec<String>,
}

impl Section {
    fn new(heading: &str, inline: Option<String>) -> Self {
        let kind = match heading.to_ascii_uppercase().as_str() {
            "" => SectionKind::Preamble,
            "NAME" => SectionKind::Name,
            "SYNTAX" | "USAGE" => SectionKind::Usage,
            "PARAMETERS" | "OPTIONS" | "ARGUMENTS" | "COMMANDS" | "SUBCOMMANDS" | "FLAGS" => {
                SectionKind::Items
            }
            "EXAMPLES" | "EXAMPLE" => SectionKind::Examples,
            _ => SectionKind::Prose,
        };
        Self {
            heading: heading.to_string(),
            kind,
            inline,
            lines: Vec::new(),
        }
    }
}

/// Convert help text to a markdown document.
#[must_use]
pub fn to_markdown(help: &str) -> String {
    let text = help.replace("\r\n", "\n").replace('\t', "    ");
    let sections = split_sections(&text);

    let mut blocks = Vec::new();
    if let Some(title) = find_title(&sections) {
        blocks.push(format!("# {title}"));
    }

    for section in &sections {
        match section.kind {
            SectionKind::Name => {}
            SectionKind::Preamble => blocks.extend(paragraphs(&section.lines)),
            kind => {
                let body = match kind {
                    SectionKind::Usage => usage_block(section),
                    SectionKind::Items => items_block(&section.lines),
                    SectionKind::Examples => example_blocks(&section.lines),
                    _ => prose_blocks(section),
                };
                if !body.is_empty() {
                    blocks.push(format!("## {}", title_case(&section.heading)));
                    blocks.extend(body);
                }
            }
        }
    }

    let mut out = blocks.join("\n\n");
    out.push('\n');
    out
}

/// Run `<program> --help` and return what it printed.
///
/// Programs that print help to stderr are handled too.
pub fn help_for_command(program: &str) -> Result<String> {
    debug!(program, "capturing --help output");
    let output = Command::new(program)
        .arg("--help")
        .output()
        .map_err(|source| ToolError::Launch {
            program: program.to_string(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    if !stdout.trim().is_empty() {
        return Ok(stdout);
    }
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    if stderr.trim().is_empty() {
        return Err(ToolError::InvalidInput(format!("{program} --help printed nothing")));
    }
    Ok(stderr)
}

fn split_sections(text: &str) -> Vec<Section> {
    let mut sections = vec![Section::new("", None)];
    for line in text.lines() {
        let in_examples = sections.last().is_some_and(|s| s.kind == SectionKind::Examples);
        if let Some((heading, inline)) = parse_heading(line, in_examples) {
            sections.push(Section::new(&heading, inline));
            continue;
        }
        // PowerShell prints example separators at column zero
        if !in_examples && !line.starts_with(' ') && example_header(line.trim()).is_some() {
            sections.push(Section::new("EXAMPLES", None));
        }
        if let Some(current) = sections.last_mut() {
            current.lines.push(line.trim_end().to_string());
        }
    }
    sections
}

/// Recognise an unindented heading line.
///
/// Inside an examples section only all-caps headings count, so prose such
/// as `Note: ...` stays with its example.
fn parse_heading(line: &str, in_examples: bool) -> Option<(String, Option<String>)> {
    if line.is_empty() || line.starts_with(' ') {
        return None;
    }
    let trimmed = line.trim_end();
    if strip_prompt(trimmed).is_some() {
        return None;
    }

    let upper_only = trimmed.chars().all(|c| c.is_ascii_uppercase() || c == ' ');
    if upper_only && trimmed.chars().filter(char::is_ascii_uppercase).count() >= 2 {
        return Some((trimmed.to_string(), None));
    }
    if in_examples {
        return None;
    }

    let (head, rest) = trimmed.split_once(':')?;
    let words = head.split_whitespace().count();
    let starts_upper = head.chars().next().is_some_and(|c| c.is_ascii_uppercase());
    if !(1..=3).contains(&words) || !starts_upper || !head.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return None;
    }
    let rest = rest.trim();
    Some((head.to_string(), (!rest.is_empty()).then(|| rest.to_string())))
}

fn find_title(sections: &[Section]) -> Option<String> {
    if let Some(name) = sections.iter().find(|s| s.kind == SectionKind::Name) {
        if let Some(line) = name.lines.iter().map(|l| l.trim()).find(|l| !l.is_empty()) {
            return Some(line.to_string());
        }
    }

    let usage = sections
        .iter()
        .find(|s| s.kind == SectionKind::Usage && s.heading.eq_ignore_ascii_case("usage"))?;
    let first = usage
        .inline
        .as_deref()
        .or_else(|| usage.lines.iter().map(|l| l.trim()).find(|l| !l.is_empty()))?;
    let program = first.split_whitespace().next()?;
    Path::new(program)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Strip the common leading indentation of the non-blank lines
fn dedent(lines: &[String]) -> Vec<String> {
    let min = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| indent_of(l))
        .min()
        .unwrap_or(0);
    lines
        .iter()
        .map(|l| if l.trim().is_empty() { String::new() } else { l[min..].to_string() })
        .collect()
}

/// Group lines into paragraphs separated by blank lines
fn paragraphs(lines: &[String]) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for line in dedent(lines) {
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }
    blocks
}

fn prose_blocks(section: &Section) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(inline) = &section.inline {
        lines.push(inline.clone());
        lines.push(String::new());
    }
    lines.extend(section.lines.iter().cloned());
    paragraphs(&lines)
}

fn usage_block(section: &Section) -> Vec<String> {
    let mut body: Vec<String> = section.inline.iter().cloned().collect();
    let mut rest = dedent(&section.lines);
    while rest.last().is_some_and(String::is_empty) {
        rest.pop();
    }
    let leading_blank = rest.iter().take_while(|l| l.is_empty()).count();
    body.extend(rest.into_iter().skip(leading_blank));
    if body.is_empty() {
        return Vec::new();
    }
    let lang = if section.heading.eq_ignore_ascii_case("syntax") {
        "powershell"
    } else {
        "sh"
    };
    vec![format!("```{lang}\n{}\n```", body.join("\n"))]
}

/// Split `term   description` at the first run of two or more spaces
fn split_columns(content: &str) -> (String, Option<String>) {
    match content.find("  ") {
        Some(pos) => {
            let description = content[pos..].trim();
            (
                content[..pos].trim().to_string(),
                (!description.is_empty()).then(|| description.to_string()),
            )
        }
        None => (content.to_string(), None),
    }
}

#[derive(Debug, Default)]
struct Item {
    term: String,
    description: Vec<String>,
    details: Vec<(String, String)>,
}

fn items_block(lines: &[String]) -> Vec<String> {
    let Some(base) = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| indent_of(l))
        .min()
    else {
        return Vec::new();
    };

    let mut items: Vec<Item> = Vec::new();
    for line in lines.iter().filter(|l| !l.trim().is_empty()) {
        let content = line.trim();
        let continuation = if indent_of(line) > base { items.last_mut() } else { None };
        if let Some(item) = continuation {
            match split_columns(content) {
                (key, Some(value)) => item.details.push((key, value)),
                (text, None) => item.description.push(text),
            }
        } else {
            let (term, description) = split_columns(content);
            items.push(Item {
                term,
                description: description.into_iter().collect(),
                details: Vec::new(),
            });
        }
    }

    let rendered: Vec<String> = items
        .iter()
        .map(|item| {
            let mut out = if item.description.is_empty() {
                format!("- `{}`", item.term)
            } else {
                format!("- `{}`: {}", item.term, item.description.join(" "))
            };
            for (key, value) in &item.details {
                out.push_str(&format!("\n  - {}: {value}", key.trim_end_matches(':')));
            }
            out
        })
        .collect();

    vec![rendered.join("\n")]
}

/// `---- EXAMPLE 1 ----` style separators
fn example_header(line: &str) -> Option<String> {
    if !line.starts_with("---") {
        return None;
    }
    let text = line.trim_matches(|c: char| c == '-' || c.is_whitespace());
    (!text.is_empty()).then(|| title_case(text))
}

/// Split a prompt line into code-fence language and command
fn strip_prompt(line: &str) -> Option<(&'static str, String)> {
    if line.starts_with("PS>") || line.starts_with("PS ") {
        let (_, command) = line.split_once('>')?;
        return Some(("powershell", command.trim().to_string()));
    }
    line.strip_prefix("$ ")
        .map(|command| ("shell", command.trim().to_string()))
}

fn example_blocks(lines: &[String]) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut code: Vec<String> = Vec::new();
    let mut code_lang = "";
    let mut para: Vec<String> = Vec::new();

    let flush_code = |blocks: &mut Vec<String>, code: &mut Vec<String>, lang: &str| {
        if !code.is_empty() {
            blocks.push(format!("```{lang}\n{}\n```", code.join("\n")));
            code.clear();
        }
    };
    let flush_para = |blocks: &mut Vec<String>, para: &mut Vec<String>| {
        if !para.is_empty() {
            blocks.push(para.join("\n"));
            para.clear();
        }
    };

    for line in dedent(lines) {
        let trimmed = line.trim();
        if let Some(header) = example_header(trimmed) {
            flush_para(&mut blocks, &mut para);
            flush_code(&mut blocks, &mut code, code_lang);
            blocks.push(format!("### {header}"));
        } else if let Some((lang, command)) = strip_prompt(trimmed) {
            flush_para(&mut blocks, &mut para);
            if lang != code_lang {
                flush_code(&mut blocks, &mut code, code_lang);
            }
            code_lang = lang;
            code.push(command);
        } else if trimmed.is_empty() {
            flush_para(&mut blocks, &mut para);
            flush_code(&mut blocks, &mut code, code_lang);
        } else {
            flush_code(&mut blocks, &mut code, code_lang);
            para.push(trimmed.to_string());
        }
    }
    flush_para(&mut blocks, &mut para);
    flush_code(&mut blocks, &mut code, code_lang);
    blocks
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const POWERSHELL_HELP: &str = "
NAME
    Get-StringHash

SYNOPSIS
    Computes the hash of a string.


SYNTAX
    Get-StringHash [-String] <String[]> [[-Algorithm] <String>] [<CommonParameters>]


DESCRIPTION
    Hashes each input string with the selected algorithm
    and returns the digest.


PARAMETERS
    -String <String[]>
        The text to hash.

        Required?                    true
        Position?                    1

    -Algorithm <String>
        Digest to use.

-------------------------- EXAMPLE 1 --------------------------

PS C:\\> Get-StringHash 'hello'

Hashes the word hello.


RELATED LINKS
    Get-FileHash
";

    const CLAP_HELP: &str = "Compute digests of strings

Usage: /usr/local/bin/shellkit hash [OPTIONS] [INPUTS]...

Arguments:
  [INPUTS]...  Strings to hash

Options:
  -a, --algorithm <ALGORITHM>  Digest algorithm [default: sha256]
  -f, --format <FORMAT>        Output encoding
  -h, --help                   Print help
";

    #[test]
    fn test_powershell_layout() {
        let md = to_markdown(POWERSHELL_HELP);

        assert!(md.starts_with("# Get-StringHash\n"), "{md}");
        assert!(md.contains("## Synopsis\n\nComputes the hash of a string."));
        assert!(md.contains(
            "## Syntax\n\n```powershell\nGet-StringHash [-String] <String[]> [[-Algorithm] <String>] [<CommonParameters>]\n```"
        ));
        assert!(md.contains("- `-String <String[]>`: The text to hash.\n  - Required?: true\n  - Position?: 1"));
        assert!(md.contains("- `-Algorithm <String>`: Digest to use."));
        assert!(md.contains(
            "## Examples\n\n### Example 1\n\n```powershell\nGet-StringHash 'hello'\n```\n\nHashes the word hello."
        ));
        assert!(md.contains("## Related Links\n\nGet-FileHash"));
        assert!(!md.contains("\n\n\n"));
    }

    #[test]
    fn test_indented_examples() {
        let help = "EXAMPLES\n    ---------- EXAMPLE 1 ----------\n\n    PS C:\\> Get-StringHash 'a'\n    PS C:\\> Get-StringHash 'b'\n\n    Hashes two strings.\n";
        let md = to_markdown(help);
        assert_eq!(
            md,
            "## Examples\n\n### Example 1\n\n```powershell\nGet-StringHash 'a'\nGet-StringHash 'b'\n```\n\nHashes two strings.\n"
        );
    }

    #[test]
    fn test_clap_layout() {
        let md = to_markdown(CLAP_HELP);

        assert!(md.starts_with("# shellkit\n\nCompute digests of strings\n"), "{md}");
        assert!(md.contains("## Usage\n\n```sh\n/usr/local/bin/shellkit hash [OPTIONS] [INPUTS]...\n```"));
        assert!(md.contains("## Arguments\n\n- `[INPUTS]...`: Strings to hash"));
        assert!(md.contains("- `-a, --algorithm <ALGORITHM>`: Digest algorithm [default: sha256]"));
        assert!(md.contains("- `-h, --help`: Print help"));
        assert!(md.ends_with("Print help\n"));
    }

    #[test]
    fn test_crlf_and_empty_input() {
        assert_eq!(to_markdown(""), "\n");
        let md = to_markdown("Options:\r\n  -v  Verbose\r\n");
        assert_eq!(md, "## Options\n\n- `-v`: Verbose\n");
    }

    #[test]
    fn test_heading_detection() {
        assert_eq!(parse_heading("NAME", false), Some(("NAME".to_string(), None)));
        assert_eq!(
            parse_heading("Usage: git [--version]", false),
            Some(("Usage".to_string(), Some("git [--version]".to_string())))
        );
        assert_eq!(parse_heading("    NAME", false), None);
        assert_eq!(parse_heading("see http://example.com: now", false), None);
        assert_eq!(parse_heading("A", false), None);
        assert_eq!(parse_heading("Note: read this", true), None);
        assert_eq!(parse_heading("RELATED LINKS", true), Some(("RELATED LINKS".to_string(), None)));
    }

    #[test]
    fn test_prose_inside_examples() {
        let help = "EXAMPLES\n---------- EXAMPLE 1 ----------\nPS C:\\> Get-StringHash 'a'\n\nNote: the digest is lowercase hex.\n\nRELATED LINKS\n    Get-FileHash\n";
        let md = to_markdown(help);
        assert!(!md.contains("## Note"), "{md}");
        assert!(md.contains("### Example 1"), "{md}");
        assert!(md.contains("Note: the digest is lowercase hex."), "{md}");
        assert!(md.contains("## Related Links\n\nGet-FileHash"), "{md}");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("RELATED LINKS"), "Related Links");
        assert_eq!(title_case("EXAMPLE 1"), "Example 1");
    }

    #[test]
    fn test_missing_program() {
        let err = help_for_command("shellkit-definitely-not-installed").unwrap_err();
        assert!(matches!(err, ToolError::Launch { .. }));
    }
}
