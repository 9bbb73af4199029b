use rand::Rng;

use crate::{Result, Vector};

pub fn cosine_similarity(v1: &Vector, v2: &Vector) -> Result<f64> {
    let dot_product = v1.dot(v2)?;
    let norm1 = v1.norm();
    let norm2 = v2.norm();

    if norm1 == 0.0 || norm2 == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot_product / (norm1 * norm2))
    }
}

pub fn euclidean_distance(v1: &Vector, v2: &Vector) -> Result<f64> {
    let diff = v1.checked_sub(v2)?;
    Ok(diff.norm())
}

pub fn manhattan_distance(v1: &Vector, v2: &Vector) -> Result<f64> {
    let diff = v1.checked_sub(v2)?;
    Ok(diff.iter().map(|x| x.abs()).sum())
}

pub fn normalize(vector: &Vector) -> Vector {
    let magnitude = vector.norm();
    if magnitude > 0.0 {
        vector / magnitude
    } else {
        vector.clone()
    }
}

pub fn random_vector(dimension: usize) -> Vector {
    let mut rng = rand::thread_rng();

    (0..dimension).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

pub fn random_vectors(dimension: usize, num: usize) -> Vec<Vector> {
    (0..num).map(|_| random_vector(dimension)).collect()
}
