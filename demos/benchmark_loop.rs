use std::time::Instant;

use lsap::Solver;

const N: usize = 10_000;

#[rustfmt::skip]
const COSTS: [[f64; 5]; 5] = [
    [12.,  9., 27., 10., 23.],
    [ 7., 13., 13., 30., 19.],
    [25., 18., 26., 11., 26.],
    [ 9., 28., 26., 23., 13.],
    [16., 16., 24.,  6.,  9.],
];

fn main() -> lsap::Result<()> {
    let mut solver = Solver::<f64>::new();
    let start = Instant::now();
    let mut pairs = Vec::new();
    for _ in 0..N {
        pairs = solver.compute(&COSTS)?;
    }
    let elapsed = start.elapsed();

    let total: f64 = pairs.iter().map(|&(row, col)| COSTS[row][col]).sum();
    println!("pairs: {pairs:?}");
    println!("cost: {total}");
    println!("{N} solves: {elapsed:?}");
    Ok(())
}
