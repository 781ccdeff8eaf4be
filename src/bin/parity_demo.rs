use clap::Parser;
use iterparity::ecc::iterative::channel::{inject_errors, random_word};
use iterparity::ecc::iterative::display::BitsDisplay;
use iterparity::ecc::iterative::{simulate, IterativeCode};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Send a random word through an iterative parity code and a noisy channel
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Number of message bits
    #[arg(long)]
    length: usize,
    /// Matrix rows
    #[arg(long)]
    rows: usize,
    /// Matrix columns
    #[arg(long)]
    cols: usize,
    /// Number of parity directions (0 to 4)
    #[arg(long)]
    parities: usize,
    /// Bits to flip in the transmitted frame
    #[arg(long, default_value_t = 2)]
    errors: usize,
    /// Seed for the word and error positions
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Run this many trials and print recovery statistics instead of one dump
    #[arg(long)]
    trials: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let code = IterativeCode::new(cli.length, cli.rows, cli.cols, cli.parities)?;

    if let Some(trials) = cli.trials {
        let report = simulate(&code, cli.errors, trials, cli.seed)?;
        println!("trials:       {}", report.trials);
        println!("recovered:    {}", report.recovered);
        println!("miscorrected: {}", report.miscorrected);
        println!("ambiguous:    {}", report.ambiguous);
        println!("undetected:   {}", report.undetected);
        println!("recovery:     {:.4}", report.recovery_rate());
        return Ok(());
    }

    let mut rng = ChaCha20Rng::seed_from_u64(cli.seed);
    let word = random_word(cli.length, &mut rng);

    let encoded = code.encode_detailed(&word)?;
    println!("== sent\n{}\n", encoded);

    let (corrupted, positions) = inject_errors(&encoded.frame, cli.errors, &mut rng)?;
    println!("corrupted: {}", BitsDisplay(&corrupted));
    println!("flipped:   {:?}\n", positions);

    let decoded = code.diagnose(&corrupted)?;
    println!("== received\n{}", decoded);
    println!(
        "\nrecovered original: {}",
        if decoded.correct() == word { "yes" } else { "no" }
    );

    Ok(())
}
