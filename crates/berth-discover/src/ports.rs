use regex::Regex;
use std::sync::LazyLock;

/// Marker identifying debugger-listening processes in a command line.
pub const DEBUG_MARKER: &str = "debugpy";

/// Fallback range for bare port numbers when no flag or `:port` form is
/// present: the default debugger port plus the block above it.
const FALLBACK_RANGE: std::ops::RangeInclusive<u16> = 5678..=5999;

static PORT_FLAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--port[ =](\d{1,5})\b").unwrap());
static LISTEN_FLAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--listen[ =](?:[\w.\-\[\]]+:)?(\d{1,5})\b").unwrap());
static BARE_PORT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":(\d{4,5})\b").unwrap());
static BARE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{4,5})\b").unwrap());

fn capture_port(re: &Regex, s: &str) -> Option<u16> {
    re.captures(s)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Extract the listen port from a command line. First matching pattern wins:
/// explicit `--port N`, `--listen [host:]N`, bare `:NNNN`, then any
/// standalone number inside the default debugger port range.
pub fn extract_port(cmdline: &str) -> Option<u16> {
    if let Some(p) = capture_port(&PORT_FLAG, cmdline) {
        return Some(p);
    }
    if let Some(p) = capture_port(&LISTEN_FLAG, cmdline) {
        return Some(p);
    }
    if let Some(p) = capture_port(&BARE_PORT, cmdline) {
        return Some(p);
    }
    BARE_NUMBER
        .captures_iter(cmdline)
        .filter_map(|c| c.get(1).and_then(|m| m.as_str().parse::<u16>().ok()))
        .find(|p| FALLBACK_RANGE.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_flag_space_and_equals() {
        assert_eq!(extract_port("python -m debugpy --port 5678 app.py"), Some(5678));
        assert_eq!(extract_port("python -m debugpy --port=9229 app.py"), Some(9229));
    }

    #[test]
    fn listen_flag_with_and_without_host() {
        assert_eq!(
            extract_port("python -m debugpy --listen 5678 app.py"),
            Some(5678)
        );
        assert_eq!(
            extract_port("python -m debugpy --listen 127.0.0.1:5679 app.py"),
            Some(5679)
        );
        assert_eq!(
            extract_port("python -m debugpy --listen=localhost:5680 app.py"),
            Some(5680)
        );
    }

    #[test]
    fn bare_colon_port() {
        assert_eq!(extract_port("debugpy-server localhost:5690 app.py"), Some(5690));
    }

    #[test]
    fn range_fallback() {
        assert_eq!(extract_port("python debugpy_wrapper.py 5701"), Some(5701));
        // Out of range standalone numbers are not ports
        assert_eq!(extract_port("python debugpy_wrapper.py 1234"), None);
    }

    #[test]
    fn flag_wins_over_bare_forms() {
        assert_eq!(
            extract_port("debugpy --port 5678 --listen 0.0.0.0:9000 x:4321"),
            Some(5678)
        );
        assert_eq!(
            extract_port("debugpy --listen 0.0.0.0:9000 x:4321"),
            Some(9000)
        );
    }

    #[test]
    fn no_port_anywhere() {
        assert_eq!(extract_port("python -m debugpy app.py"), None);
        assert_eq!(extract_port(""), None);
    }

    #[test]
    fn oversized_number_is_skipped() {
        // 99999 overflows u16; the fallback scan still finds an in-range port
        assert_eq!(extract_port("debugpy run 99999 then 5699"), Some(5699));
    }
}
