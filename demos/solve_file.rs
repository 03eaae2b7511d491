use anyhow::Result;

fn load_yaml(path: &str) -> Result<tdma::TridiagonalMatrix> {
    let file = std::fs::File::open(path)?;
    let matrix = tdma::load(file)?;
    Ok(matrix)
}

fn parse_rhs(args: &[String]) -> Result<Vec<f64>> {
    let mut rhs = vec![];
    for a in args {
        rhs.push(a.parse::<f64>()?);
    }
    Ok(rhs)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        anyhow::bail!("usage: {} matrix.yaml r0 r1 ...", args[0]);
    }
    let matrix = load_yaml(&args[1])?;
    let rhs = parse_rhs(&args[2..])?;

    println!("The matrix is:\n");
    println!("{matrix}");
    println!("Its determinant is {}", matrix.determinant());

    let x = matrix.solve(&rhs)?;
    println!("\nThe solution is:\n");
    for (i, xi) in x.iter().enumerate() {
        println!("\tx[{i}] = {xi}");
    }
    Ok(())
}
