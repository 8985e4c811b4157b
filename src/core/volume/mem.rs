//! In-memory volume for tests and synthetic data.

use std::collections::BTreeMap;
use std::io;
use std::path::{Component, Path, PathBuf};

use super::{Entry, Volume};

/// Link chains longer than this are treated as cycles.
const MAX_LINK_HOPS: usize = 40;

#[derive(Debug, Clone)]
enum Node {
    Dir,
    File(Vec<u8>),
    Link(PathBuf),
}

/// A [`Volume`] backed by an in-memory tree, rooted at `.`.
///
/// Built up with [`dir`](Self::dir), [`file`](Self::file), and
/// [`link`](Self::link); parent directories are created implicitly. Link
/// targets are volume-rooted paths. Behaves like [`OsVolume`](super::OsVolume)
/// under the walk contract, so fixtures substitute for real mounts:
///
/// ```
/// use warren::MemVolume;
///
/// let volume = MemVolume::new()
///     .file("db/..2024_02_02/password", b"xyz")
///     .link("db/password", "db/..2024_02_02/password")
///     .link("db/..data", "db/..2024_02_02");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemVolume {
    nodes: BTreeMap<PathBuf, Node>,
}

impl MemVolume {
    /// Create an empty volume.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory.
    pub fn dir(mut self, path: impl AsRef<Path>) -> Self {
        let path = normalize(path.as_ref());
        self.add_ancestors(&path);
        self.nodes.insert(path, Node::Dir);
        self
    }

    /// Add a file with the given content.
    pub fn file(mut self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) -> Self {
        let path = normalize(path.as_ref());
        self.add_ancestors(&path);
        self.nodes.insert(path, Node::File(content.as_ref().to_vec()));
        self
    }

    /// Add a symbolic link to a volume-rooted target path.
    pub fn link(mut self, path: impl AsRef<Path>, target: impl AsRef<Path>) -> Self {
        let path = normalize(path.as_ref());
        self.add_ancestors(&path);
        self.nodes
            .insert(path, Node::Link(normalize(target.as_ref())));
        self
    }

    fn add_ancestors(&mut self, path: &Path) {
        let mut ancestors: Vec<PathBuf> = path
            .ancestors()
            .skip(1)
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .collect();
        ancestors.reverse();
        for ancestor in ancestors {
            self.nodes.entry(ancestor).or_insert(Node::Dir);
        }
    }

    fn node(&self, path: &Path) -> Option<&Node> {
        self.nodes.get(&normalize(path))
    }
}

impl Volume for MemVolume {
    fn root(&self) -> PathBuf {
        PathBuf::from(".")
    }

    fn entries(&self, dir: &Path) -> io::Result<Vec<Entry>> {
        let dir = normalize(dir);
        if dir != Path::new(".") {
            match self.node(&dir) {
                Some(Node::Dir) => {}
                Some(_) => {
                    return Err(io::Error::new(
                        io::ErrorKind::Other,
                        format!("not a directory: {}", dir.display()),
                    ))
                }
                None => {
                    return Err(io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("no such directory: {}", dir.display()),
                    ))
                }
            }
        }

        let entries = self
            .nodes
            .iter()
            .filter(|(path, _)| parent_of(path) == dir)
            .map(|(path, node)| Entry {
                path: path.clone(),
                name: path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                is_dir: matches!(node, Node::Dir),
            })
            .collect();
        Ok(entries)
    }

    fn read(&self, file: &Path) -> io::Result<Vec<u8>> {
        let mut current = normalize(file);
        for _ in 0..MAX_LINK_HOPS {
            match self.node(&current) {
                None => {
                    return Err(io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("no such file: {}", current.display()),
                    ))
                }
                Some(Node::File(content)) => return Ok(content.clone()),
                Some(Node::Dir) => {
                    return Err(io::Error::new(
                        io::ErrorKind::Other,
                        format!("is a directory: {}", current.display()),
                    ))
                }
                Some(Node::Link(target)) => current = target.clone(),
            }
        }
        Err(io::Error::new(
            io::ErrorKind::Other,
            format!("too many levels of symbolic links: {}", file.display()),
        ))
    }
}

/// Strip a leading `./` so `db/password` and `./db/password` are one path.
fn normalize(path: &Path) -> PathBuf {
    let stripped: PathBuf = path
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();
    if stripped.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        stripped
    }
}

fn parent_of(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
