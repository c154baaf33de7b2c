// Linux-specific helpers: /proc and /etc/os-release.

/// Read first "model name" from /proc/cpuinfo (Linux). Prefer over sysinfo when it returns "cpu0" etc.
pub(super) fn read_cpu_model_linux() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/proc/cpuinfo").ok()?;
        for line in content.lines() {
            if line.starts_with("model name") {
                let name = line
                    .find(": ")
                    .map(|i| line[i + 2..].trim())
                    .filter(|s| !s.is_empty() && *s != "cpu0")?;
                return Some(name.to_string());
            }
        }
    }
    None
}

/// Read OS/distro name from /etc/os-release (Linux) for os_manufacturer.
pub(super) fn read_os_manufacturer_linux() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/etc/os-release").ok()?;
        for line in content.lines() {
            if line.starts_with("PRETTY_NAME=") {
                let v = line.strip_prefix("PRETTY_NAME=")?.trim_matches('"');
                return if v.is_empty() {
                    None
                } else {
                    Some(v.to_string())
                };
            }
        }
        for line in content.lines() {
            if line.starts_with("NAME=") {
                let v = line.strip_prefix("NAME=")?.trim_matches('"');
                return if v.is_empty() {
                    None
                } else {
                    Some(v.to_string())
                };
            }
        }
    }
    None
}
