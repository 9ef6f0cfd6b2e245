//! Functions that hand links over to the desktop and emit the exit payload.

use std::process::{Command, Stdio};

const LINK_PREFIX: &str = "__PR_LINK__=";

/// Emit the machine-readable exit payload: one line per link opened during
/// the session, in activation order, duplicates removed.
pub fn print_exit_payload(visited: &[String]) {
    for line in exit_payload(visited) {
        println!("{line}");
    }
}

fn exit_payload(visited: &[String]) -> Vec<String> {
    let mut seen = Vec::new();
    for url in visited {
        if !seen.contains(&url) {
            seen.push(url);
        }
    }
    seen.into_iter().map(|url| format!("{LINK_PREFIX}{url}")).collect()
}

/// Attempt to open `url` in the system browser.
pub fn open_in_browser(url: &str) -> bool {
    opener_commands(std::env::consts::OS, url)
        .into_iter()
        .any(|(cmd, args)| run_detached(cmd, &args))
}

/// Openers to try in order on `os`. The url is always a single argument
/// that no shell parses.
fn opener_commands<'a>(os: &str, url: &'a str) -> Vec<(&'static str, Vec<&'a str>)> {
    match os {
        "macos" => vec![("open", vec![url])],
        "windows" => vec![("rundll32", vec!["url.dll,FileProtocolHandler", url])],
        _ => vec![("xdg-open", vec![url]), ("gio", vec!["open", url])],
    }
}

fn run_detached(cmd: &str, args: &[&str]) -> bool {
    let spawned = Command::new(cmd)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match spawned {
        Ok(mut child) => child.wait().map(|s| s.success()).unwrap_or(false),
        Err(err) => {
            tracing::debug!(cmd, %err, "link opener unavailable");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_lists_each_link_once_in_order() {
        let visited = vec![
            "https://example.org/b".to_string(),
            "https://example.org/a".to_string(),
            "https://example.org/b".to_string(),
        ];
        assert_eq!(
            exit_payload(&visited),
            vec![
                "__PR_LINK__=https://example.org/b".to_string(),
                "__PR_LINK__=https://example.org/a".to_string(),
            ]
        );
    }

    #[test]
    fn windows_opener_passes_query_strings_untouched() {
        let url = "https://images.unsplash.com/photo-1?w=800&q=80";
        let commands = opener_commands("windows", url);
        assert_eq!(commands, vec![("rundll32", vec!["url.dll,FileProtocolHandler", url])]);
        assert!(commands.iter().all(|(cmd, _)| *cmd != "cmd"));
    }

    #[test]
    fn linux_falls_back_to_gio() {
        let commands = opener_commands("linux", "https://example.org");
        let names: Vec<_> = commands.iter().map(|(cmd, _)| *cmd).collect();
        assert_eq!(names, ["xdg-open", "gio"]);
        assert_eq!(opener_commands("macos", "https://example.org")[0].0, "open");
    }

    #[test]
    fn empty_session_prints_nothing() {
        assert!(exit_payload(&[]).is_empty());
    }
}
