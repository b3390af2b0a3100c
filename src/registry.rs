use std::error::Error;
use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};
use bincode::{Encode, Decode};

use crate::coord::Coord;
use crate::presets::BUILTIN;

/// A named preset location on the Mandelbrot set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct Viewpoint {
    pub name: String,
    pub position: Coord,
}

impl Viewpoint {
    pub fn new(name: &str, re: f64, im: f64) -> Self {
        Viewpoint {
            name: name.to_string(),
            position: Coord::new(re, im),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("viewpoint index {index} out of range (registry holds {len})")]
    OutOfRange { index: usize, len: usize },
}

/// Ordered, read-only catalogue of viewpoints. Order is the authored
/// order and drives next/previous preset navigation.
#[derive(Clone, Debug, Serialize, Deserialize, Encode, Decode)]
pub struct ViewpointRegistry {
    entries: Vec<Viewpoint>,
}

impl ViewpointRegistry {
    /// The built-in catalogue of 29 presets.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|&(name, re, im)| Viewpoint::new(name, re, im))
            .collect();
        ViewpointRegistry { entries }
    }

    pub fn new(entries: Vec<Viewpoint>) -> Self {
        ViewpointRegistry { entries }
    }

    /// Look up a viewpoint by 0-based index.
    pub fn get(&self, index: usize) -> Result<&Viewpoint, RegistryError> {
        self.entries.get(index).ok_or(RegistryError::OutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// Every viewpoint in authored order.
    pub fn all(&self) -> &[Viewpoint] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the preset after `index`, wrapping past the end.
    pub fn next_index(&self, index: usize) -> usize {
        if self.entries.is_empty() { 0 } else { (index + 1) % self.entries.len() }
    }

    /// Index of the preset before `index`, wrapping past the start.
    pub fn prev_index(&self, index: usize) -> usize {
        let len = self.entries.len();
        if len == 0 { 0 } else { (index + len - 1) % len }
    }

    /// Index and distance of the entry closest to `coord`. Linear scan;
    /// the catalogue is small.
    pub fn nearest(&self, coord: Coord) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, vp) in self.entries.iter().enumerate() {
            let dist = vp.position.dist(coord);
            match best {
                Some((_, d)) if d <= dist => {}
                _ => best = Some((i, dist)),
            }
        }
        best
    }

    /// Uniformly random preset, for "surprise me" navigation.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<&Viewpoint> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.entries.len());
        Some(&self.entries[idx])
    }

    pub fn to_json(&self) -> Result<String, Box<dyn Error>> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// Parse a registry from a JSON array of viewpoints, e.g. a custom
    /// preset file shipped alongside an explorer front-end.
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let entries: Vec<Viewpoint> = serde_json::from_str(json)?;
        for vp in &entries {
            if !vp.position.is_finite() {
                return Err(format!(
                    "preset '{}' has a non-finite position ({}, {})",
                    vp.name, vp.position.re, vp.position.im
                )
                .into());
            }
        }
        Ok(ViewpointRegistry { entries })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
        let cfg = bincode::config::standard();
        let encoded = bincode::encode_to_vec(self, cfg)?;
        fs::write(path, encoded)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let data = fs::read(path)?;
        let cfg = bincode::config::standard();
        let (registry, _len): (ViewpointRegistry, usize) =
            bincode::decode_from_slice(&data, cfg)?;
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_29_presets() {
        let reg = ViewpointRegistry::builtin();
        assert_eq!(reg.count(), 29);
        assert!(!reg.is_empty());
    }

    #[test]
    fn first_preset_is_seahorse_valley() {
        let reg = ViewpointRegistry::builtin();
        let vp = reg.get(0).unwrap();
        assert_eq!(vp.name, "Seahorse Valley");
        assert_eq!(vp.position.re, -0.743643887037151);
        assert_eq!(vp.position.im, 0.131825904205330);
    }

    #[test]
    fn last_preset_is_ghost_of_mandelbrot() {
        let reg = ViewpointRegistry::builtin();
        let vp = reg.get(reg.count() - 1).unwrap();
        assert_eq!(vp.name, "Ghost of Mandelbrot");
        assert_eq!(vp.position.re, -1.94);
        assert_eq!(vp.position.im, 0.0);
    }

    #[test]
    fn every_position_is_finite() {
        let reg = ViewpointRegistry::builtin();
        for i in 0..reg.count() {
            assert!(reg.get(i).unwrap().position.is_finite(), "entry {}", i);
        }
    }

    #[test]
    fn out_of_range_lookup_fails() {
        let reg = ViewpointRegistry::builtin();
        let err = reg.get(reg.count()).unwrap_err();
        let RegistryError::OutOfRange { index, len } = err;
        assert_eq!(index, 29);
        assert_eq!(len, 29);
        assert!(reg.get(usize::MAX).is_err());
    }

    #[test]
    fn all_is_idempotent_and_ordered() {
        let reg = ViewpointRegistry::builtin();
        let first: Vec<Viewpoint> = reg.all().to_vec();
        let second: Vec<Viewpoint> = reg.all().to_vec();
        assert_eq!(first, second);
        // spot-check authored order survives
        assert_eq!(first[1].name, "Main Spiral");
        assert_eq!(first[17].name, "The Needle");
        assert_eq!(first[17].position.im, 1.79e-8);
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let reg = ViewpointRegistry::builtin();
        assert_eq!(reg.next_index(0), 1);
        assert_eq!(reg.next_index(28), 0);
        assert_eq!(reg.prev_index(0), 28);
        assert_eq!(reg.prev_index(1), 0);
    }

    #[test]
    fn nearest_finds_exact_and_close_matches() {
        let reg = ViewpointRegistry::builtin();
        let (idx, dist) = reg.nearest(Coord::new(-1.94, 0.0)).unwrap();
        assert_eq!(idx, 28);
        assert_eq!(dist, 0.0);

        let (idx, dist) = reg.nearest(Coord::new(0.0, 0.66)).unwrap();
        assert_eq!(reg.get(idx).unwrap().name, "North Star");
        assert!(dist < 0.02);
    }

    #[test]
    fn nearest_on_empty_registry_is_none() {
        let reg = ViewpointRegistry::new(Vec::new());
        assert!(reg.nearest(Coord::new(0.0, 0.0)).is_none());
        assert!(reg.random(&mut rand::thread_rng()).is_none());
        assert_eq!(reg.next_index(0), 0);
        assert_eq!(reg.prev_index(0), 0);
    }

    #[test]
    fn random_draws_a_builtin_preset() {
        let reg = ViewpointRegistry::builtin();
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let vp = reg.random(&mut rng).unwrap();
            assert!(reg.all().contains(vp));
        }
    }

    #[test]
    fn json_round_trip_preserves_entries() {
        let reg = ViewpointRegistry::builtin();
        let json = reg.to_json().unwrap();
        let back = ViewpointRegistry::from_json(&json).unwrap();
        assert_eq!(back.all(), reg.all());
    }

    #[test]
    fn from_json_rejects_non_finite_positions() {
        let json = r#"[{"name": "Bad", "position": {"re": null, "im": 0.0}}]"#;
        assert!(ViewpointRegistry::from_json(json).is_err());
    }

    #[test]
    fn from_json_accepts_custom_preset_files() {
        let json = r#"[
            {"name": "Home", "position": {"re": -0.5, "im": 0.0}},
            {"name": "Home", "position": {"re": -0.5, "im": 0.0}}
        ]"#;
        let reg = ViewpointRegistry::from_json(json).unwrap();
        // duplicates are allowed, order kept
        assert_eq!(reg.count(), 2);
        assert_eq!(reg.get(0).unwrap(), reg.get(1).unwrap());
    }

    #[test]
    fn save_and_load_round_trip() {
        let reg = ViewpointRegistry::builtin();
        let path = std::env::temp_dir().join("fractal_presets_test.bin");
        reg.save(&path).unwrap();
        let back = ViewpointRegistry::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(back.all(), reg.all());
    }
}
