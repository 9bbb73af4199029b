use quoll::utils::random_vectors;
use quoll::{cosine_similarity, euclidean_distance, normalize, Vector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧮 Vector Algebra Demo");
    println!("======================\n");

    let a = Vector::new(vec![1.0, 2.0, 3.0]);
    let b = Vector::from_elem(3, 2.0);
    println!("a = {a}");
    println!("b = {b}");

    println!("\n➕ Arithmetic:");
    println!("  a + b = {}", a.checked_add(&b)?);
    println!("  a - b = {}", a.checked_sub(&b)?);
    println!("  a . b = {}", a.dot(&b)?);
    println!("  a x b = {}", a.cross(&b)?);
    println!("  2a    = {}", &a * 2.0);
    println!("  a / 2 = {}", &a / 2.0);

    println!("\n📉 Reductions:");
    println!("  sum(a)  = {}", a.sum());
    println!("  prod(a) = {}", a.product());
    println!("  |a|     = {}", a.norm());
    println!("  a^2     = {}", a.powf(2.0));

    let ramp = Vector::range(0.0, 5.0, 1.0)?;
    println!("\n📏 Range vector (0..5 step 1): {ramp}");

    println!("\n📐 Metrics:");
    println!("  cos(a, b)  = {:.4}", cosine_similarity(&a, &b)?);
    println!("  dist(a, b) = {:.4}", euclidean_distance(&a, &b)?);
    println!("  unit(a)    = {}", normalize(&a));

    println!("\n🎲 Averaging 10 random 3D vectors...");
    let mut mean = Vector::zeros(3);
    for v in random_vectors(3, 10) {
        mean += &v;
    }
    mean /= 10.0;
    println!("  mean = {mean}");

    println!("\n✅ Demo completed successfully!");
    Ok(())
}
