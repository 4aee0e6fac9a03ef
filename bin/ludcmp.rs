use clap::Parser;
use ludcmp::{assemble_system, ludcmp, MAX_ORDER};
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "ludcmp",
    about = "Solve a dense linear system assembled from integer coefficients by LU decomposition"
)]
struct Cli {
    /// Row-major matrix coefficients; exactly dim * dim integers
    #[arg(allow_negative_numbers = true)]
    entries: Vec<i64>,

    /// Matrix dimension (number of equations)
    #[arg(long, default_value_t = 6)]
    dim: usize,

    /// Pivot tolerance; a pivot whose magnitude is <= eps aborts the solve
    #[arg(long, default_value_t = 1e-6)]
    eps: f64,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.dim == 0 || cli.dim > MAX_ORDER + 1 {
        eprintln!("error: --dim must be between 1 and {}", MAX_ORDER + 1);
        process::exit(2);
    }

    let (mut a, b) = match assemble_system(&cli.entries, cli.dim) {
        Ok(system) => system,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    };
    log::debug!("assembled {0}x{0} system with rhs {b}", cli.dim);

    // The status code is the program's sole stdout output: 0 on success,
    // 1 for a singular pivot, 999 for invalid parameters.
    let status = match ludcmp(&mut a, b.view(), cli.dim - 1, cli.eps) {
        Ok(x) => {
            log::debug!("solution: {x}");
            0
        }
        Err(e) => {
            log::debug!("solve failed: {e}");
            e.status_code()
        }
    };

    println!("{status}");
}
