use super::{BehavioralClassifier, FeatureVector, FEATURE_COUNT};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

const NORMALIZER_FILE: &str = "normalizer.json";
const CENTROIDS_FILE: &str = "centroids.json";

/// Failures while loading or validating the trained artifacts. These only
/// surface at startup; classification itself is infallible.
#[derive(Debug, thiserror::Error)]
pub enum ClusterModelError {
    #[error("failed to read model artifact {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse model artifact {path}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("model artifact {path} expects {expected} features, found {found}")]
    FeatureMismatch {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
    #[error("normalizer scale for feature {index} must be non-zero")]
    DegenerateScale { index: usize },
    #[error("centroid set must not be empty")]
    NoCentroids,
}

/// Per-feature standardization parameters fitted during training.
#[derive(Debug, Deserialize)]
struct NormalizerSpec {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct CentroidSpec {
    centroids: Vec<Vec<f64>>,
}

/// Pre-trained clustering model: a feature normalizer plus k-means
/// centroids, deserialized once at startup and immutable thereafter.
#[derive(Debug)]
pub struct ClusterModel {
    mean: Vec<f64>,
    scale: Vec<f64>,
    centroids: Vec<Vec<f64>>,
}

impl ClusterModel {
    /// Loads `normalizer.json` and `centroids.json` from the given
    /// directory and validates their shapes against [`FEATURE_COUNT`].
    pub fn load(dir: &Path) -> Result<Self, ClusterModelError> {
        let normalizer: NormalizerSpec = read_artifact(&dir.join(NORMALIZER_FILE))?;
        let centroid_spec: CentroidSpec = read_artifact(&dir.join(CENTROIDS_FILE))?;

        for len in [normalizer.mean.len(), normalizer.scale.len()] {
            if len != FEATURE_COUNT {
                return Err(ClusterModelError::FeatureMismatch {
                    path: dir.join(NORMALIZER_FILE),
                    expected: FEATURE_COUNT,
                    found: len,
                });
            }
        }
        if let Some(index) = normalizer.scale.iter().position(|scale| *scale == 0.0) {
            return Err(ClusterModelError::DegenerateScale { index });
        }

        if centroid_spec.centroids.is_empty() {
            return Err(ClusterModelError::NoCentroids);
        }
        for centroid in &centroid_spec.centroids {
            if centroid.len() != FEATURE_COUNT {
                return Err(ClusterModelError::FeatureMismatch {
                    path: dir.join(CENTROIDS_FILE),
                    expected: FEATURE_COUNT,
                    found: centroid.len(),
                });
            }
        }

        Ok(Self {
            mean: normalizer.mean,
            scale: normalizer.scale,
            centroids: centroid_spec.centroids,
        })
    }

    fn standardize(&self, features: &FeatureVector) -> [f64; FEATURE_COUNT] {
        let mut scaled = [0.0; FEATURE_COUNT];
        for (index, value) in features.0.iter().enumerate() {
            scaled[index] = (value - self.mean[index]) / self.scale[index];
        }
        scaled
    }
}

impl BehavioralClassifier for ClusterModel {
    fn classify(&self, features: &FeatureVector) -> i64 {
        let scaled = self.standardize(features);
        let mut best = 0usize;
        let mut best_distance = f64::INFINITY;
        for (index, centroid) in self.centroids.iter().enumerate() {
            let distance: f64 = centroid
                .iter()
                .zip(scaled.iter())
                .map(|(c, v)| (c - v) * (c - v))
                .sum();
            if distance < best_distance {
                best_distance = distance;
                best = index;
            }
        }
        best as i64
    }
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ClusterModelError> {
    let file = File::open(path).map_err(|source| ClusterModelError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ClusterModelError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_model(centroids: Vec<Vec<f64>>) -> ClusterModel {
        ClusterModel {
            mean: vec![0.0; FEATURE_COUNT],
            scale: vec![1.0; FEATURE_COUNT],
            centroids,
        }
    }

    #[test]
    fn classify_picks_nearest_centroid() {
        let model = unit_model(vec![vec![0.0; FEATURE_COUNT], vec![10.0; FEATURE_COUNT]]);

        let near_origin = FeatureVector([1.0; FEATURE_COUNT]);
        assert_eq!(model.classify(&near_origin), 0);

        let near_far = FeatureVector([9.0; FEATURE_COUNT]);
        assert_eq!(model.classify(&near_far), 1);
    }

    #[test]
    fn standardization_applies_mean_and_scale() {
        let model = ClusterModel {
            mean: vec![5.0; FEATURE_COUNT],
            scale: vec![2.0; FEATURE_COUNT],
            centroids: vec![vec![0.0; FEATURE_COUNT]],
        };

        let scaled = model.standardize(&FeatureVector([9.0; FEATURE_COUNT]));
        assert!(scaled.iter().all(|value| (*value - 2.0).abs() < 1e-9));
    }

    #[test]
    fn load_rejects_missing_directory() {
        let err = ClusterModel::load(Path::new("/nonexistent/model")).unwrap_err();
        assert!(matches!(err, ClusterModelError::Read { .. }));
    }
}
