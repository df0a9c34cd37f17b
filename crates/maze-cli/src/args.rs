//! Command-line handling for `maze`, kept as plain `OsString`s so that
//! non-UTF-8 paths survive.

use std::ffi::OsString;
use std::path::PathBuf;

/// Image written when `MAZE_IMAGE` is unset.
pub const DEFAULT_IMAGE: &str = "maze.png";

/// The maze file, if exactly one argument follows the program name.
pub fn maze_path<I>(args: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = OsString>,
{
    let mut rest = args.into_iter().skip(1);
    match (rest.next(), rest.next()) {
        (Some(path), None) => Some(PathBuf::from(path)),
        _ => None,
    }
}

/// Output image path from the `MAZE_IMAGE` value, if any.
pub fn image_path(var: Option<OsString>) -> PathBuf {
    var.filter(|v| !v.is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_IMAGE), PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn exactly_one_argument() {
        assert_eq!(maze_path(os(&["maze"])), None);
        assert_eq!(maze_path(os(&["maze", "a.txt", "b.txt"])), None);
        assert_eq!(
            maze_path(os(&["maze", "a.txt"])),
            Some(PathBuf::from("a.txt"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_is_kept() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"maze-\xff.txt".to_vec());
        let got = maze_path([OsString::from("maze"), raw.clone()]).unwrap();
        assert_eq!(got.into_os_string(), raw);
    }

    #[test]
    fn image_defaults_to_maze_png() {
        assert_eq!(image_path(None), PathBuf::from("maze.png"));
        assert_eq!(image_path(Some(OsString::new())), PathBuf::from("maze.png"));
        assert_eq!(
            image_path(Some(OsString::from("out/solved.png"))),
            PathBuf::from("out/solved.png")
        );
    }
}
