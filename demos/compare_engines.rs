//! Run both contraction engines on a small fixture and compare.
//!
//! ```sh
//! cargo run --example compare_engines
//! ```

use radix_contract::{contract, contract_parallel, Tensor};

fn main() -> radix_contract::Result<()> {
    let lhs = Tensor::from_values(3, 2, vec![1, 2, 3, 4, 5, 6, 7, 8, 9])?;
    let rhs = lhs.clone();

    // λ=0, μ=1: ordinary 3x3 matrix multiplication.
    let seq = contract(&lhs, &rhs, 0, 1)?;
    let par = contract_parallel(&lhs, &rhs, 0, 1)?;

    println!("Sequential result: {:?}", seq.values());
    println!("Parallel result:   {:?}", par.values());

    if seq == par {
        println!("✓ Sequential and parallel results match");
    } else {
        println!("✗ Sequential and parallel results differ");
    }

    Ok(())
}
