use lattice_matrix::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    // 2x3 general grid
    let mut g: Grid<i32> = Grid::new(2, 3);
    g.set(1, 1, 5)?;
    g.set(2, 3, 7)?;
    println!("grid:\n{}", g);
    println!("row 2 = {:?}", g.get_row(2)?);

    let a = Grid::from_rows(vec![vec![1, 2], vec![3, 4]])?;
    let b = Grid::from_rows(vec![vec![5, 6], vec![7, 8]])?;
    println!("a + b:\n{}", a.add_matrix(&b)?);
    println!("a * b:\n{}", a.multiply_matrix(&b)?);

    let mut sym = SymmetricMatrix::new(3);
    sym.set(1, 3, 2.5)?;
    println!("symmetric:\n{}", sym);

    let mut diag = DiagonalMatrix::new(3);
    diag.set_diagonal(&OneDimensionalMatrix::from_vec(vec![1.0, 2.0, 3.0]))?;
    diag.set(1, 2, 9.0)?;
    println!("diagonal:\n{}", diag);

    let id: IdentityMatrix<f64> = IdentityMatrix::new(3);
    match id.clone().set(1, 1, 2.0) {
        Ok(()) => println!("identity accepted a write"),
        Err(e) => println!("identity rejected a write: {}", e),
    }
    println!("diag * I:\n{}", diag.multiply_matrix(id.as_grid())?);

    Ok(())
}
