use structopt::StructOpt;

#[derive(StructOpt)]
struct Options {
    /// Target value to count representations of.
    sum: u64,
}

fn main() {
    env_logger::init();
    let options = Options::from_args();

    match hyperbin::solve(options.sum) {
        Ok(count) => println!("{}", count),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
