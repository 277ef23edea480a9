use super::error::PermutationError;
use super::table::Permutations;
use crate::Count;
use crate::cards::isomorphism::Isomorphism;
use crate::save::disk::Disk;
use byteorder::BE;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Write;
use std::path::Path;

/* persistence methods
 *
 * one pgcopy row per class: (canonical hand: i64, count: i32).
 * anything that does not decode to a verified table is
 * reported as corrupt, and the caller decides to rebuild.
 */

const N_FIELDS: u16 = 2;

impl Disk for Permutations {
    fn name() -> &'static str {
        crate::PERMUTATIONS_NAME
    }

    fn grow() -> Self {
        Self::upto(crate::MAX_CARDS)
    }

    fn load(path: &Path) -> Result<Self, PermutationError> {
        log::info!("{:<32}{:<32}", "loading permutations", path.display());
        let corrupt = |reason: String| PermutationError::CacheCorrupt {
            path: path.to_path_buf(),
            reason,
        };
        let file = File::open(path).map_err(|source| PermutationError::CacheIo {
            path: path.to_path_buf(),
            source,
        })?;
        let ref mut reader = BufReader::new(file);
        let ref mut header = vec![0u8; Self::header().len()];
        reader
            .read_exact(header)
            .map_err(|_| corrupt("truncated header".into()))?;
        if header.as_slice() != Self::header() {
            return Err(corrupt("bad signature".into()));
        }
        let mut table = HashMap::new();
        loop {
            match reader
                .read_u16::<BE>()
                .map_err(|_| corrupt("missing trailer".into()))?
            {
                N_FIELDS => {
                    let (isomorphism, count) = Self::row(reader).map_err(corrupt)?;
                    if table.insert(isomorphism, count).is_some() {
                        return Err(corrupt(format!("duplicate class [{}]", isomorphism)));
                    }
                }
                n if n == Self::footer() => break,
                n => return Err(corrupt(format!("unexpected field count {}", n))),
            }
        }
        if reader.read(&mut [0u8; 1]).map_err(|e| corrupt(e.to_string()))? > 0 {
            return Err(corrupt("bytes after trailer".into()));
        }
        let permutations = Self::from(table);
        permutations.verify().map_err(corrupt)?;
        log::info!("{:<32}{:<32}", "loaded permutations", permutations.len());
        Ok(permutations)
    }

    fn save(&self, path: &Path) -> Result<(), PermutationError> {
        log::info!("{:<32}{:<32}", "saving permutations", path.display());
        crate::save::publish(path, |file| {
            file.write_all(Self::header())?;
            for (isomorphism, count) in self.iter() {
                file.write_u16::<BE>(N_FIELDS)?;
                file.write_u32::<BE>(size_of::<i64>() as u32)?;
                file.write_i64::<BE>(i64::from(*isomorphism))?;
                file.write_u32::<BE>(size_of::<i32>() as u32)?;
                file.write_i32::<BE>(*count as i32)?;
            }
            file.write_u16::<BE>(Self::footer())
        })
        .map_err(|source| PermutationError::CacheIo {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Permutations {
    fn row(reader: &mut impl Read) -> Result<(Isomorphism, Count), String> {
        let truncated = |_| String::from("truncated row");
        if reader.read_u32::<BE>().map_err(truncated)? != size_of::<i64>() as u32 {
            return Err("class field is not an i64".into());
        }
        let bits = reader.read_i64::<BE>().map_err(truncated)?;
        if reader.read_u32::<BE>().map_err(truncated)? != size_of::<i32>() as u32 {
            return Err("count field is not an i32".into());
        }
        let count = reader.read_i32::<BE>().map_err(truncated)?;
        let isomorphism =
            Isomorphism::decode(bits).ok_or_else(|| format!("non-canonical class {:#x}", bits))?;
        let count = Count::try_from(count).map_err(|_| format!("negative count {}", count))?;
        Ok((isomorphism, count))
    }
}
