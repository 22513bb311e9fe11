//! File conversion through the command library.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use unibeta::Direction;
use unibetac::commands::{convert_files, parse_convert_args, Input};
use unibetac::CliError;

#[test]
fn files_convert_in_argument_order() {
    let dir = tempfile::tempdir().unwrap();
    let words = ["a)/nqrwpos", "lo/gos", "qeo/s", "*)/aggelos"];
    let paths: Vec<PathBuf> = words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let path = dir.path().join(format!("{i}.beta"));
            fs::write(&path, format!("{word}\n")).unwrap();
            path
        })
        .collect();

    let mut argv = Vec::new();
    for path in paths.iter().rev() {
        argv.push("-f".to_string());
        argv.push(path.display().to_string());
    }
    let args = parse_convert_args(&argv).unwrap();
    let Input::Files(named) = &args.input else {
        panic!("expected file input");
    };

    let converted: Vec<String> = convert_files(Direction::BetaToGreek, &args, named)
        .into_iter()
        .map(Result::unwrap)
        .collect();
    assert_eq!(
        converted,
        vec![
            "\u{1F0C}γγελος\n",
            "θε\u{1F79}ς\n",
            "λ\u{1F79}γος\n",
            "\u{1F04}νθρωπος\n",
        ]
    );
}

#[test]
fn greek_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let beta = "*)en a)rxh=| h)=n o( lo/gos,\nkai\\ o( lo/gos h)=n pro\\s to\\n qeo/n.\n";
    let beta_path = dir.path().join("john.beta");
    fs::write(&beta_path, beta).unwrap();

    let args = parse_convert_args(&["-f".to_string(), beta_path.display().to_string()]).unwrap();
    let greek = convert_files(Direction::BetaToGreek, &args, &[beta_path])
        .pop()
        .unwrap()
        .unwrap();

    let greek_path = dir.path().join("john.txt");
    fs::write(&greek_path, &greek).unwrap();
    let back = convert_files(Direction::GreekToBeta, &args, &[greek_path])
        .pop()
        .unwrap()
        .unwrap();
    assert_eq!(back, beta);
}

#[test]
fn missing_file_names_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let present = dir.path().join("present.beta");
    fs::write(&present, "a").unwrap();
    let missing = dir.path().join("missing.beta");

    let args = parse_convert_args(&["-f".to_string(), present.display().to_string()]).unwrap();
    let results = convert_files(Direction::BetaToGreek, &args, &[present, missing.clone()]);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_deref().ok(), Some("α"));
    let Err(err @ CliError::Read { .. }) = &results[1] else {
        panic!("expected a read error, got {:?}", results[1]);
    };
    assert!(err
        .to_string()
        .starts_with(&format!("cannot read {}: ", missing.display())));
}

#[test]
fn capacity_applies_per_file() {
    let dir = tempfile::tempdir().unwrap();
    let short = dir.path().join("short.txt");
    let long = dir.path().join("long.txt");
    fs::write(&short, "λόγος").unwrap();
    fs::write(&long, "λόγος ".repeat(20)).unwrap();

    let args = parse_convert_args(&[
        "--capacity=16".to_string(),
        "-f".to_string(),
        short.display().to_string(),
    ])
    .unwrap();
    let results = convert_files(Direction::GreekToBeta, &args, &[short, long]);
    assert_eq!(results[0].as_deref().ok(), Some("lo/gos"));
    assert!(matches!(results[1], Err(CliError::Convert(_))));
}
