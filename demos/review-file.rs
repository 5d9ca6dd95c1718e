//! Prints the changes between two files and the text obtained by accepting
//! some of them.
//!
//! ```sh
//! cargo run --example review-file --features serde -- old.md new.md word change-0 change-2
//! ```

use std::{env, fs, process::ExitCode};

use suggestion_diff::{
    DiffError, Granularity, OperationId, Review,
    transport::{DiffRequest, DiffResponse},
};

fn main() -> ExitCode {
    let arguments: Vec<String> = env::args().skip(1).collect();

    let [old_path, new_path, rest @ ..] = arguments.as_slice() else {
        eprintln!("Usage: review-file <old> <new> [granularity] [change-<n> ...]");
        return ExitCode::FAILURE;
    };

    match run(old_path, new_path, rest) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(old_path: &str, new_path: &str, rest: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let old_content = fs::read_to_string(old_path)?;
    let new_content = fs::read_to_string(new_path)?;

    let (granularity, accepted) = match rest.split_first() {
        Some((first, accepted)) if !first.starts_with("change-") => {
            (first.parse::<Granularity>()?, accepted)
        }
        _ => (Granularity::default(), rest),
    };
    let accepted = accepted
        .iter()
        .map(|id| id.parse::<OperationId>())
        .collect::<Result<Vec<_>, DiffError>>()?;

    let response: DiffResponse = DiffRequest {
        old_content: old_content.clone(),
        new_content: new_content.clone(),
        granularity,
    }
    .compute();
    println!("{}", serde_yaml::to_string(&response)?);

    let mut review = Review::new(&old_content, &new_content, granularity);
    for id in accepted {
        review.accept(id)?;
    }

    let (pending, accepted, rejected) = review.acceptance().summary(review.script());
    println!("# {accepted} accepted, {rejected} rejected, {pending} pending");
    print!("{}", review.commit()?);

    Ok(())
}
