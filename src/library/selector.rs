use crate::library::seen::{SeenSet, VideoId};
use crate::media::scanner::CatalogEntry;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// A catalog entry that has not been reviewed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub entry: CatalogEntry,
    pub id: VideoId,
}

/// Catalog minus seen set, keyed on the canonical path. Entries that can no
/// longer be resolved are dropped, and two paths to the same file count once.
pub fn unseen(catalog: Vec<CatalogEntry>, seen: &SeenSet) -> Vec<Candidate> {
    let mut yielded = HashSet::new();
    let mut candidates = Vec::new();
    for entry in catalog {
        let id = match VideoId::resolve(&entry.path) {
            Ok(id) => id,
            Err(e) => {
                debug!("Dropping {:?} from candidates: {}", entry.path, e);
                continue;
            }
        };
        if seen.contains(&id) || !yielded.insert(id.clone()) {
            continue;
        }
        candidates.push(Candidate { entry, id });
    }
    candidates
}

/// Chooses one of `len` items. `None` only for `len == 0`.
pub trait Picker {
    fn pick_index(&mut self, len: usize) -> Option<usize>;
}

/// Uniform random choice backed by any `rand` generator.
pub struct RandomPicker<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Picker for RandomPicker<R> {
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.rng.gen_range(0..len))
        }
    }
}

pub fn pick<'a, P: Picker + ?Sized>(picker: &mut P, candidates: &'a [Candidate]) -> Option<&'a Candidate> {
    picker
        .pick_index(candidates.len())
        .and_then(|i| candidates.get(i))
}
