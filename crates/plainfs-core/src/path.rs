//! Lexical path cleaning.
//!
//! Purely textual: nothing here touches the filesystem, so symlinks are not
//! resolved and `a/link/..` collapses to `a`.

/// Return the shortest path equivalent to `path` by lexical processing.
///
/// Repeated separators collapse, `.` segments are dropped, and each `..`
/// removes the preceding segment. A `..` directly under the root is dropped;
/// leading `..` segments of a relative path are kept. The empty path cleans
/// to `.`.
pub fn clean(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            name => segments.push(name),
        }
    }

    let joined = segments.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Join a directory and an entry name, then clean the result.
pub fn join(dir: &str, name: &str) -> String {
    match (dir.is_empty(), name.is_empty()) {
        (true, true) => String::new(),
        (true, false) => clean(name),
        (false, true) => clean(dir),
        (false, false) => clean(&format!("{dir}/{name}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_already_clean() {
        assert_eq!(clean("/tmp/x"), "/tmp/x");
        assert_eq!(clean("a/b"), "a/b");
        assert_eq!(clean("/"), "/");
        assert_eq!(clean("."), ".");
    }

    #[test]
    fn test_clean_separators_and_dots() {
        assert_eq!(clean("//tmp///x/"), "/tmp/x");
        assert_eq!(clean("./a/./b/."), "a/b");
        assert_eq!(clean(""), ".");
    }

    #[test]
    fn test_clean_parent_segments() {
        assert_eq!(clean("/a/b/../c"), "/a/c");
        assert_eq!(clean("a/b/../../.."), "..");
        assert_eq!(clean("../../a"), "../../a");
        assert_eq!(clean("/../a"), "/a");
        assert_eq!(clean("/.."), "/");
        assert_eq!(clean("a/.."), ".");
    }

    #[test]
    fn test_join() {
        assert_eq!(join("/tmp", "x"), "/tmp/x");
        assert_eq!(join("/tmp/", "x"), "/tmp/x");
        assert_eq!(join(".", "x"), "x");
        assert_eq!(join("a", "../b"), "b");
        assert_eq!(join("", "x"), "x");
        assert_eq!(join("", ""), "");
    }
}
