mod cli;

use std::io;
use std::sync::mpsc;

use clap::Parser;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use ferrite_perceptron::{
    train_loop, Perceptron, PerceptronError, Session, REFERENCE_SAMPLES,
};

use cli::Cli;

fn main() -> Result<(), PerceptronError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut config = cli.train_config()?;

    let mut model = match cli.seed {
        Some(seed) => {
            info!("random initialisation with seed {seed}");
            Perceptron::random(&mut StdRng::seed_from_u64(seed))
        }
        None => Perceptron::new(),
    };

    let progress_rx = if cli.progress {
        let (tx, rx) = mpsc::channel();
        config.progress_tx = Some(tx);
        Some(rx)
    } else {
        None
    };

    println!("\nparameters before training: {model}");
    train_loop(&mut model, &REFERENCE_SAMPLES, &config);
    println!("parameters after training:  {model}");

    drop(config);
    if let Some(rx) = progress_rx {
        for stats in rx {
            let line = serde_json::to_string(&stats).map_err(io::Error::from)?;
            eprintln!("{line}");
        }
    }

    if cli.no_interactive {
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    while let Some(query) = session.next() {
        match query {
            Ok(query) => session.respond(model.evaluate(query.in1, query.in2))?,
            Err(PerceptronError::InvalidNumber { token }) => {
                eprintln!("not a number: {token:?}, try again");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
