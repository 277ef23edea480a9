use crate::permutations::error::PermutationError;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

static WRITES: AtomicUsize = AtomicUsize::new(0);

/// for types that are expensive to build from scratch
/// and cheap to write to and load from disk. files are laid out
/// as Postgres binary COPY so they can be streamed to a database as-is.
pub trait Disk: Sized {
    /// Returns the name of the entity
    fn name() -> &'static str;
    /// build from scratch
    fn grow() -> Self;
    /// read from disk
    fn load(path: &Path) -> Result<Self, PermutationError>;
    /// write to disk
    fn save(&self, path: &Path) -> Result<(), PermutationError>;
    /// default path to file on disk
    fn path() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_default()
            .join("pgcopy")
            .join(format!("{}.suit.pgcopy", Self::name()))
    }
    /// check if file exists on disk
    fn done(path: &Path) -> bool {
        std::fs::metadata(path).is_ok()
    }
    /// Postgres signature header + 8 null bytes for flags and extension
    /// header for binary copy: https://www.postgresql.org/docs/current/static/sql-copy.html
    fn header() -> &'static [u8] {
        b"PGCOPY\n\xFF\r\n\0\0\0\0\0\0\0\0\0"
    }
    /// Postgres signature footer to signal end of binary file
    fn footer() -> u16 {
        0xFFFF
    }
}

/// write to a sibling temporary file, then rename it over the target,
/// so a concurrent reader sees either the old file or the whole new one.
/// temporary names are unique per call, so concurrent writers in one
/// process never share a file.
pub fn publish<F>(path: &Path, write: F) -> std::io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let ref temp = path.with_file_name(format!(
        "{}.{}.{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy(),
        std::process::id(),
        WRITES.fetch_add(1, Ordering::Relaxed)
    ));
    let result = File::create(temp)
        .map(BufWriter::new)
        .and_then(|mut file| {
            write(&mut file)?;
            file.flush()?;
            file.get_ref().sync_all()
        })
        .and_then(|_| std::fs::rename(temp, path));
    if result.is_err() {
        let _ = std::fs::remove_file(temp);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("isoperm-disk-{}-{}", name, std::process::id()))
            .join("artifact.pgcopy")
    }

    #[test]
    fn publish_creates_parent() {
        let path = scratch("parent");
        publish(&path, |file| file.write_all(b"hello")).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn publish_overwrites() {
        let path = scratch("overwrite");
        publish(&path, |file| file.write_all(b"old")).unwrap();
        publish(&path, |file| file.write_all(b"new")).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn concurrent_publishers() {
        let path = scratch("concurrent");
        let payloads = (0..8u8)
            .map(|i| vec![i; 1 << 16])
            .collect::<Vec<_>>();
        std::thread::scope(|scope| {
            for payload in payloads.iter() {
                let path = &path;
                scope.spawn(move || {
                    publish(path, |file| {
                        for chunk in payload.chunks(1 << 10) {
                            file.write_all(chunk)?;
                            file.flush()?;
                        }
                        Ok(())
                    })
                    .unwrap()
                });
            }
        });
        let written = std::fs::read(&path).unwrap();
        assert!(payloads.contains(&written));
        let leftovers = std::fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(leftovers, 1);
        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn failed_write_keeps_old() {
        let path = scratch("failure");
        publish(&path, |file| file.write_all(b"old")).unwrap();
        let failure = publish(&path, |_| Err(std::io::Error::other("boom")));
        assert!(failure.is_err());
        assert_eq!(std::fs::read(&path).unwrap(), b"old");
        let leftovers = std::fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(leftovers, 1);
        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}
