use lsap::{CostMatrix, Solver};

const ASSIGNMENT_SIZE: usize = 64;
const N: usize = 100;

fn main() -> lsap::Result<()> {
    let mut solver = Solver::with_capacity(ASSIGNMENT_SIZE);
    let mut total_cost = 0.;
    for _ in 0..N {
        let costs = CostMatrix::from_matrix(&nalgebra::DMatrix::<f64>::new_random(
            ASSIGNMENT_SIZE,
            ASSIGNMENT_SIZE,
        ))?;
        total_cost += solver.solve(&costs)?.cost();
    }

    println!("total: {total_cost}");
    Ok(())
}
