//! Open URLs in a chosen browser.

use shellkit_core::{Browser, Result, ToolError};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};
use url::Url;

/// Prepend `https://` to scheme-less input and check the result parses.
pub fn normalize_url(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ToolError::InvalidInput("empty URL".into()));
    }
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    Url::parse(&candidate)
        .map(String::from)
        .map_err(|e| ToolError::InvalidInput(format!("{trimmed}: {e}")))
}

/// Executable names to look up on `PATH`
fn executable_names(browser: Browser) -> &'static [&'static str] {
    match browser {
        Browser::Default => &[],
        Browser::Chrome => &["google-chrome", "google-chrome-stable", "chromium", "chromium-browser", "chrome"],
        Browser::Firefox => &["firefox"],
        Browser::Edge => &["microsoft-edge", "microsoft-edge-stable", "msedge"],
        Browser::Brave => &["brave-browser", "brave"],
    }
}

/// Well-known install locations outside `PATH`
#[cfg(target_os = "windows")]
fn install_locations(browser: Browser) -> Vec<PathBuf> {
    let roots: Vec<PathBuf> = ["ProgramFiles", "ProgramFiles(x86)", "LOCALAPPDATA"]
        .iter()
        .filter_map(std::env::var_os)
        .map(PathBuf::from)
        .collect();
    let relative = match browser {
        Browser::Default => return Vec::new(),
        Browser::Chrome => r"Google\Chrome\Application\chrome.exe",
        Browser::Firefox => r"Mozilla Firefox\firefox.exe",
        Browser::Edge => r"Microsoft\Edge\Application\msedge.exe",
        Browser::Brave => r"BraveSoftware\Brave-Browser\Application\brave.exe",
    };
    roots.iter().map(|root| root.join(relative)).collect()
}

#[cfg(target_os = "macos")]
fn install_locations(browser: Browser) -> Vec<PathBuf> {
    let app = match browser {
        Browser::Default => return Vec::new(),
        Browser::Chrome => "Google Chrome.app/Contents/MacOS/Google Chrome",
        Browser::Firefox => "Firefox.app/Contents/MacOS/firefox",
        Browser::Edge => "Microsoft Edge.app/Contents/MacOS/Microsoft Edge",
        Browser::Brave => "Brave Browser.app/Contents/MacOS/Brave Browser",
    };
    vec![Path::new("/Applications").join(app)]
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn install_locations(browser: Browser) -> Vec<PathBuf> {
    let paths: &[&str] = match browser {
        Browser::Default => &[],
        Browser::Chrome => &["/opt/google/chrome/chrome", "/snap/bin/chromium"],
        Browser::Firefox => &["/usr/lib/firefox/firefox", "/snap/bin/firefox"],
        Browser::Edge => &["/opt/microsoft/msedge/msedge"],
        Browser::Brave => &["/opt/brave.com/brave/brave", "/snap/bin/brave"],
    };
    paths.iter().map(PathBuf::from).collect()
}

#[cfg(unix)]
fn is_executable_file(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path).is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable_file(path: &Path) -> bool {
    path.is_file()
}

/// Search `path_var` (a `PATH`-style list) and then `extra` for the browser.
fn find_in(browser: Browser, path_var: Option<&OsStr>, extra: &[PathBuf]) -> Option<PathBuf> {
    let suffixes: &[&str] = if cfg!(windows) { &[".exe", ""] } else { &[""] };
    let dirs: Vec<PathBuf> = path_var.map(|p| std::env::split_paths(p).collect()).unwrap_or_default();

    for name in executable_names(browser) {
        for dir in &dirs {
            for suffix in suffixes {
                let candidate = dir.join(format!("{name}{suffix}"));
                if is_executable_file(&candidate) {
                    return Some(candidate);
                }
            }
        }
    }
    extra.iter().find(|p| is_executable_file(p)).cloned()
}

/// Locate the executable for a named browser.
pub fn find_executable(browser: Browser) -> Result<PathBuf> {
    let path_var = std::env::var_os("PATH");
    find_in(browser, path_var.as_deref(), &install_locations(browser))
        .ok_or_else(|| ToolError::BrowserNotFound(browser.to_string()))
}

/// What [`launch`] will do, resolved up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    /// Browser executable, `None` for the platform default handler
    pub program: Option<PathBuf>,
    /// Arguments before the URL
    pub args: Vec<String>,
    /// Normalized URL
    pub url: String,
}

fn plan_with(browser: Browser, private: bool, url: &str, program: Option<PathBuf>) -> Result<LaunchPlan> {
    let url = normalize_url(url)?;
    let args = match (browser.private_flag(), private) {
        (_, false) => Vec::new(),
        (Some(flag), true) => vec![flag.to_string()],
        (None, true) => {
            return Err(ToolError::invalid(
                "private",
                browser.to_string(),
                "a named browser (chrome, firefox, edge, brave)",
            ))
        }
    };
    Ok(LaunchPlan { program, args, url })
}

/// Validate inputs and resolve the executable without starting anything.
pub fn plan(browser: Browser, private: bool, url: &str) -> Result<LaunchPlan> {
    // Flag and URL errors win over a missing executable
    plan_with(browser, private, url, None)?;
    let program = match browser {
        Browser::Default => None,
        named => Some(find_executable(named)?),
    };
    plan_with(browser, private, url, program)
}

/// Open `url` in `browser`, optionally in a private window.
pub fn launch(browser: Browser, private: bool, url: &str) -> Result<LaunchPlan> {
    let plan = plan(browser, private, url)?;

    match &plan.program {
        None => {
            debug!(url = %plan.url, "opening with default handler");
            open::that(&plan.url).map_err(|source| ToolError::Launch {
                program: "default browser".into(),
                source,
            })?;
        }
        Some(program) => {
            debug!(program = %program.display(), args = ?plan.args, url = %plan.url, "spawning browser");
            Command::new(program)
                .args(&plan.args)
                .arg(&plan.url)
                .spawn()
                .map_err(|source| ToolError::Launch {
                    program: program.display().to_string(),
                    source,
                })?;
        }
    }

    info!(%browser, url = %plan.url, "browser launched");
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("example.com").unwrap(), "https://example.com/");
        assert_eq!(normalize_url("http://example.com/a?b=1").unwrap(), "http://example.com/a?b=1");
        assert_eq!(normalize_url("  docs.rs/tokio ").unwrap(), "https://docs.rs/tokio");
        assert!(normalize_url("").is_err());
        assert!(normalize_url("https://").is_err());
    }

    #[test]
    fn test_private_with_default_is_validation_error() {
        let err = plan(Browser::Default, true, "example.com").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_private_flags() {
        for (browser, flag) in [
            (Browser::Chrome, "--incognito"),
            (Browser::Brave, "--incognito"),
            (Browser::Firefox, "--private-window"),
            (Browser::Edge, "--inprivate"),
        ] {
            let plan = plan_with(browser, true, "example.com", Some(PathBuf::from("/bin/x"))).unwrap();
            assert_eq!(plan.args, vec![flag.to_string()]);
            assert_eq!(plan.url, "https://example.com/");
        }
        let plan = plan_with(Browser::Firefox, false, "example.com", None).unwrap();
        assert!(plan.args.is_empty());
    }

    #[test]
    fn test_default_browser_needs_no_executable() {
        let plan = plan(Browser::Default, false, "example.com").unwrap();
        assert_eq!(plan.program, None);
    }

    fn touch_executable(path: &Path) {
        std::fs::write(path, b"").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[test]
    fn test_find_in_path() {
        let dir = tempfile::tempdir().unwrap();
        let name = if cfg!(windows) { "firefox.exe" } else { "firefox" };
        let exe = dir.path().join(name);
        touch_executable(&exe);

        let path_var = std::env::join_paths([dir.path()]).unwrap();
        assert_eq!(find_in(Browser::Firefox, Some(&path_var), &[]), Some(exe));
        assert_eq!(find_in(Browser::Edge, Some(&path_var), &[]), None);
    }

    #[test]
    fn test_find_in_install_locations() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("brave");
        touch_executable(&exe);

        let missing = dir.path().join("nope");
        assert_eq!(find_in(Browser::Brave, None, &[missing, exe.clone()]), Some(exe));
        assert_eq!(find_in(Browser::Default, None, &[]), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_executable_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("firefox");
        std::fs::write(&plain, b"").unwrap();
        let path_var = std::env::join_paths([dir.path()]).unwrap();
        assert_eq!(find_in(Browser::Firefox, Some(&path_var), &[]), None);
    }
}
