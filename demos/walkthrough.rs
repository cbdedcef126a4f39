use anyhow::{Context, Result};
use log::info;

use dense_linalg::{LinalgConfig, Matrix, PivotStrategy, Vector};

fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(name) => LinalgConfig::new(name.parse().map_err(anyhow::Error::msg)?),
        None => LinalgConfig::new(PivotStrategy::RowSwap),
    };
    info!("Using pivot strategy {:?}", config.pivot_strategy);

    let a = Matrix::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 10.0],
    ])
    .context("Failed to build the example matrix")?;

    println!("A =\n{}\n", a);
    println!("det(A) = {}", a.determinant_with(&config));

    let inverse = a
        .inverse_with(&config)
        .context("Example matrix should be invertible")?;
    println!("A^-1 =\n{}\n", inverse.render(&config.format));

    let product = a.multiply(&inverse)?;
    println!("A * A^-1 =\n{}\n", product.render(&config.format));

    let diagonal = a
        .to_diagonal_with(&config)
        .context("Failed to diagonalize the example matrix")?;
    println!("diag(A) =\n{}\n", diagonal);

    let u = Vector::new(vec![3.0, 12.0, 12.0])?;
    let v = Vector::new(vec![23.0, 87.0, 11.0])?;
    println!("u x v = {}", u.cross(&v)?);
    println!("u . v = {}", u.dot(&v)?);
    println!("|u| = {}", u.magnitude());
    println!("u / |u| = {}", u.normalized());

    let singular = Matrix::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ])?;
    match singular.inverse_with(&config) {
        Ok(_) => println!("unexpected inverse of a singular matrix"),
        Err(e) => println!("inverse of singular matrix: {}", e),
    }

    Ok(())
}
